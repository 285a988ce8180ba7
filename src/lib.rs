//! The Keccak sponge behind SHA3-224/256/384/512.
//!
//! [`sha3::KeccakCore`] is the parameterised sponge; the four standard
//! digests are presets of it ([`sha3::Variant`]) with typed wrappers
//! ([`sha3::new256`] and friends) and one-shot helpers.

pub mod sha3;

pub use sha3::{Error, Hash, KeccakCore, Result, SpongeParams, Variant};
pub use sha3::{hash, sha3_224, sha3_256, sha3_384, sha3_512};
