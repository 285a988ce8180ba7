use tracing::{debug, warn};

use super::errors::{Error, Result};
use super::keccakf::keccak_f1600;
use super::params::{SpongeParams, Variant};
use super::state::State;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum SpongeDirection {
    // Absorbing indicates that the sponge accepts input.
    Absorbing,
    // Finalized indicates that the digest has been squeezed out.
    Finalized,
}

/// The Keccak sponge over a 1600-bit state with fixed parameters.
///
/// Lifecycle: [`initialize`](Self::initialize), any number of
/// [`absorb`](Self::absorb) calls in any chunking, then exactly one
/// [`finalize`](Self::finalize). Absorbing or finalizing again before the
/// next `initialize` returns [`Error::InvalidState`].
///
/// A fresh instance starts initialized.
#[derive(Debug, Clone)]
pub struct KeccakCore {
    a: State, // main state of the hash
    n: usize, // bytes absorbed into the current block, always < rate
    params: SpongeParams,
    state: SpongeDirection,
}

impl KeccakCore {
    /// Builds a sponge from raw parameters. See [`SpongeParams::new`].
    pub fn new(rate: usize, capacity: usize, suffix: u8, output_len: usize) -> Result<Self> {
        let params = SpongeParams::new(rate, capacity, suffix, output_len)
            .inspect_err(|e| warn!(error = %e, "rejected sponge parameters"))?;
        Ok(Self::with_params(params))
    }

    pub fn with_params(params: SpongeParams) -> Self {
        debug!(
            rate = params.rate(),
            capacity = params.capacity(),
            suffix = params.suffix(),
            output_len = params.output_len(),
            "keccak sponge constructed"
        );
        KeccakCore {
            a: State::new(),
            n: 0,
            params,
            state: SpongeDirection::Absorbing,
        }
    }

    pub fn from_variant(variant: Variant) -> Self {
        Self::with_params(variant.params())
    }

    pub fn params(&self) -> &SpongeParams {
        &self.params
    }

    /// Digest length in bytes.
    pub fn output_len(&self) -> usize {
        self.params.output_len()
    }

    pub fn is_finalized(&self) -> bool {
        self.state == SpongeDirection::Finalized
    }

    /// Zeroes the state and rewinds the cursor, starting a new computation.
    pub fn initialize(&mut self) {
        self.a.clear();
        self.n = 0;
        self.state = SpongeDirection::Absorbing;
    }

    pub fn absorb(&mut self, data: &[u8]) -> Result<()> {
        self.check_absorbing()?;
        self.write(data);
        Ok(())
    }

    /// Absorbs `buf[offset..offset + len]`.
    ///
    /// The range is validated before the state is touched.
    pub fn absorb_range(&mut self, buf: &[u8], offset: usize, len: usize) -> Result<()> {
        self.check_absorbing()?;
        let end = match offset.checked_add(len) {
            Some(end) if end <= buf.len() => end,
            _ => {
                let err = Error::OutOfRange {
                    offset,
                    len,
                    buffer_len: buf.len(),
                };
                warn!(error = %err, "rejected absorb range");
                return Err(err);
            }
        };
        self.write(&buf[offset..end]);
        Ok(())
    }

    /// Pads, permutes and squeezes `output_len` bytes. Terminal until the
    /// next [`initialize`](Self::initialize).
    pub fn finalize(&mut self) -> Result<Vec<u8>> {
        self.check_absorbing()?;
        let mut out = vec![0u8; self.params.output_len()];
        self.pad_and_squeeze(&mut out);
        Ok(out)
    }

    /// Like [`finalize`](Self::finalize) but writes the digest into
    /// `out[..output_len]`, leaving any remaining bytes untouched.
    pub fn finalize_into(&mut self, out: &mut [u8]) -> Result<()> {
        self.check_absorbing()?;
        let needed = self.params.output_len();
        if out.len() < needed {
            let err = Error::OutputTooSmall {
                needed,
                got: out.len(),
            };
            warn!(error = %err, "rejected output buffer");
            return Err(err);
        }
        self.pad_and_squeeze(&mut out[..needed]);
        Ok(())
    }

    fn check_absorbing(&self) -> Result<()> {
        if self.state == SpongeDirection::Finalized {
            warn!("keccak sponge used after finalize without initialize");
            return Err(Error::InvalidState);
        }
        Ok(())
    }

    /// Absorbs without the lifecycle check. The caller guarantees the sponge
    /// has not been finalized.
    pub(crate) fn write(&mut self, p: &[u8]) {
        let rate = self.params.rate_bytes();

        let mut p = p;
        while self.n + p.len() >= rate {
            self.a.xor_bytes(self.n, &p[..rate - self.n]);
            p = &p[rate - self.n..];
            self.permute();
        }

        self.a.xor_bytes(self.n, p);
        self.n += p.len();
    }

    /// Applies the domain suffix and pad10*1, then fills `out` block by block.
    pub(crate) fn pad_and_squeeze(&mut self, out: &mut [u8]) {
        let rate = self.params.rate_bytes();
        let ds = self.params.suffix();

        self.a.xor_byte(self.n, ds);
        // suffix delimiter and final pad bit would share the last byte
        if ds & 0x80 != 0 && self.n == rate - 1 {
            keccak_f1600(&mut self.a);
        }
        self.a.xor_byte(rate - 1, 0x80);
        self.permute();

        let mut blocks = out.chunks_mut(rate).peekable();
        while let Some(block) = blocks.next() {
            block.copy_from_slice(&self.a.as_bytes()[..block.len()]);
            if blocks.peek().is_some() {
                keccak_f1600(&mut self.a);
            }
        }
        self.state = SpongeDirection::Finalized;
    }

    fn permute(&mut self) {
        keccak_f1600(&mut self.a);
        self.n = 0;
    }
}
