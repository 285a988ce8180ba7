use super::params::Variant;
use super::sponge::KeccakCore;
use super::Hash;

/// A SHA3 hasher with a compile-time digest size.
///
/// `DIGEST_SIZE` is 224/8, 256/8, 384/8 or 512/8. Summing does not consume
/// the hasher; more data may be written afterwards.
#[derive(Debug, Clone)]
pub struct Digest<const DIGEST_SIZE: usize> {
    core: KeccakCore,
}

impl<const DIGEST_SIZE: usize> Digest<DIGEST_SIZE> {
    pub(crate) fn new(variant: Variant) -> Self {
        debug_assert_eq!(variant.output_len(), DIGEST_SIZE);
        Digest {
            core: KeccakCore::from_variant(variant),
        }
    }

    /// Digests `data` in one call.
    pub fn digest(mut self, data: &[u8]) -> [u8; DIGEST_SIZE] {
        self.write(data);
        self.sum()
    }
}

impl<const DIGEST_SIZE: usize> Hash<DIGEST_SIZE> for Digest<DIGEST_SIZE> {
    fn reset(&mut self) {
        self.core.initialize();
    }

    fn write(&mut self, data: &[u8]) {
        // the wrapped core is never finalized, only copies of it are
        self.core.write(data);
    }

    fn sum_into(&self, digest: &mut [u8]) {
        let mut copy = self.core.clone();
        copy.pad_and_squeeze(&mut digest[..DIGEST_SIZE]);
    }

    // BlockSize returns the rate of sponge underlying this hash function.
    fn block_size(&self) -> usize {
        self.core.params().rate_bytes()
    }

    // Size returns the output size of the hash function in bytes.
    fn size(&self) -> usize {
        DIGEST_SIZE
    }
}
