use thiserror;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid sponge parameters: rate {rate} + capacity {capacity} must be 1600 with rate a non-zero multiple of 8")]
    InvalidParameter { rate: usize, capacity: usize },

    #[error("domain suffix must be non-zero")]
    InvalidSuffix,

    #[error("range {offset}..{offset}+{len} out of bounds for buffer of length {buffer_len}")]
    OutOfRange {
        offset: usize,
        len: usize,
        buffer_len: usize,
    },

    #[error("output buffer too small: need {needed} bytes, got {got}")]
    OutputTooSmall { needed: usize, got: usize },

    #[error("sponge already finalized, call initialize first")]
    InvalidState,
}
pub type Result<T> = core::result::Result<T, Error>;
