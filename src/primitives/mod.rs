//! Core cryptographic primitives for commitment proofs.
//!
//! - **crypto**: the group trait and secure randomness
//! - **groups**: the concrete Ristretto255 group
//! - **hash_to_curve**: key-bound mapping of public seeds into the group

/// Cryptographic primitives and traits.
pub mod crypto;
/// Group implementations.
pub mod groups;
/// Hashing public data onto the curve.
pub mod hash_to_curve;

pub use crypto::{Group, SecureRng};
pub use groups::Ristretto255;
pub use hash_to_curve::hash_to_curve;
