pub use digest::Digest;
pub use errors::{Error, Result};
pub use keccakf::{keccak_f1600, round_constants, ROUNDS};
pub use params::{SpongeParams, Variant, DS_SHA3, WIDTH_BITS};
pub use sponge::KeccakCore;
pub use state::{State, LANES, STATE_BYTES};

mod digest;
mod errors;
mod keccakf;
mod params;
mod sponge;
mod state;


pub trait Hash<const DIGEST_SIZE:usize> {
    fn reset(&mut self);
    
    fn write(&mut self, data: &[u8]);

    /// Writes the digest of everything written so far into
    /// `digest[..DIGEST_SIZE]`.
    ///
    /// # Panics
    ///
    /// If `digest` is shorter than `DIGEST_SIZE`.
    fn sum_into(&self, digest: &mut [u8]);
    
    fn sum(&self)->[u8; DIGEST_SIZE]{
        let mut digest = [0; DIGEST_SIZE];
        self.sum_into(&mut digest);
        digest
    }

    fn block_size(&self)-> usize;
    fn size(&self) -> usize;
}


pub fn new512() -> Digest<64> {
    Digest::new(Variant::Sha3_512)
}

pub fn new384() -> Digest<48> {
    Digest::new(Variant::Sha3_384)
}

pub fn new256() -> Digest<32> {
    Digest::new(Variant::Sha3_256)
}

pub fn new224() -> Digest<28> {
    Digest::new(Variant::Sha3_224)
}


pub fn sha3_224(data: &[u8]) -> [u8; 28] {
    new224().digest(data)
}

pub fn sha3_256(data: &[u8]) -> [u8; 32] {
    new256().digest(data)
}

pub fn sha3_384(data: &[u8]) -> [u8; 48] {
    new384().digest(data)
}

pub fn sha3_512(data: &[u8]) -> [u8; 64] {
    new512().digest(data)
}

/// Digests `data` with the given preset.
pub fn hash(variant: Variant, data: &[u8]) -> Vec<u8> {
    let mut k = KeccakCore::from_variant(variant);
    k.write(data);
    let mut out = vec![0u8; variant.output_len()];
    k.pad_and_squeeze(&mut out);
    out
}
