use core::fmt;

use super::errors::{Error, Result};
use super::state::STATE_BYTES;

/// Width of Keccak-f[1600] in bits.
pub const WIDTH_BITS: usize = STATE_BYTES * 8;

/// Domain separation suffix for SHA3: the bits `01` followed by the pad delimiter.
pub const DS_SHA3: u8 = 0b00000110;

/// Sponge configuration, fixed for the lifetime of a [`KeccakCore`](super::KeccakCore).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpongeParams {
    rate: usize,
    capacity: usize,
    suffix: u8,
    output_len: usize,
}

impl SpongeParams {
    /// Validates a (rate, capacity, suffix, output length) tuple.
    ///
    /// `rate` and `capacity` are in bits and must sum to 1600, with `rate` a
    /// non-zero multiple of 8. `suffix` must be non-zero. `output_len` is in
    /// bytes.
    pub fn new(rate: usize, capacity: usize, suffix: u8, output_len: usize) -> Result<Self> {
        if rate.checked_add(capacity) != Some(WIDTH_BITS) || rate % 8 != 0 || rate == 0 {
            return Err(Error::InvalidParameter { rate, capacity });
        }
        if suffix == 0 {
            return Err(Error::InvalidSuffix);
        }
        Ok(SpongeParams {
            rate,
            capacity,
            suffix,
            output_len,
        })
    }

    const fn preset(rate: usize, output_len: usize) -> Self {
        SpongeParams {
            rate,
            capacity: WIDTH_BITS - rate,
            suffix: DS_SHA3,
            output_len,
        }
    }

    pub fn rate(&self) -> usize {
        self.rate
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn suffix(&self) -> u8 {
        self.suffix
    }

    pub fn output_len(&self) -> usize {
        self.output_len
    }

    /// Rate in bytes, i.e. the block size.
    pub fn rate_bytes(&self) -> usize {
        self.rate >> 3
    }
}

/// The four standard SHA3 digest sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Sha3_224,
        Variant::Sha3_256,
        Variant::Sha3_384,
        Variant::Sha3_512,
    ];

    pub const fn params(self) -> SpongeParams {
        match self {
            Variant::Sha3_224 => SpongeParams::preset(1152, 28),
            Variant::Sha3_256 => SpongeParams::preset(1088, 32),
            Variant::Sha3_384 => SpongeParams::preset(832, 48),
            Variant::Sha3_512 => SpongeParams::preset(576, 64),
        }
    }

    /// Digest size in bytes.
    pub const fn output_len(self) -> usize {
        self.params().output_len
    }

    /// Block size (rate) in bytes.
    pub const fn block_size(self) -> usize {
        self.params().rate >> 3
    }

    pub const fn name(self) -> &'static str {
        match self {
            Variant::Sha3_224 => "SHA3-224",
            Variant::Sha3_256 => "SHA3-256",
            Variant::Sha3_384 => "SHA3-384",
            Variant::Sha3_512 => "SHA3-512",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
