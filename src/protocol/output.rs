//! Pseudo-random artifacts extracted from proofs.
//!
//! Two distinct digests are produced and must not be confused:
//!
//! - [`VrfOutput`] = `SHA-256(R || m)`, recomputable by any verifier from a
//!   valid proof and its message.
//! - [`DeterministicRandom`] = `SHA-256(R || s)`, a hash of the whole proof
//!   encoding.

use core::fmt;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use subtle::{Choice, ConstantTimeEq};

use super::challenge::commitment_digest;
use crate::{Error, Group, Result};

/// Length in bytes of every extracted digest.
pub const OUTPUT_LEN: usize = 32;

macro_rules! digest_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name([u8; OUTPUT_LEN]);

        impl $name {
            /// Parses a raw digest.
            ///
            /// # Errors
            ///
            /// Returns [`Error::MalformedEncoding`] unless exactly
            /// [`OUTPUT_LEN`] bytes are given.
            pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
                bytes.try_into().map(Self).map_err(|_| {
                    Error::MalformedEncoding(format!(
                        concat!(stringify!($name), ": expected {} bytes, got {}"),
                        OUTPUT_LEN,
                        bytes.len()
                    ))
                })
            }

            /// Returns the raw digest bytes.
            pub fn as_bytes(&self) -> &[u8; OUTPUT_LEN] {
                &self.0
            }

            /// Interprets the digest as a big-endian unsigned integer.
            ///
            /// No modular reduction is applied.
            pub fn to_integer(&self) -> BigUint {
                collapse_to_integer(&self.0)
            }

            /// Decimal rendering of [`Self::to_integer`].
            pub fn to_decimal_string(&self) -> String {
                self.to_integer().to_str_radix(10)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl ConstantTimeEq for $name {
            fn ct_eq(&self, other: &Self) -> Choice {
                self.0[..].ct_eq(&other.0[..])
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&hex::encode(self.0))
            }
        }
    };
}

digest_newtype! {
    /// VRF output bound to a proof's commitment and message.
    VrfOutput
}

digest_newtype! {
    /// Random number derived from a complete proof encoding.
    DeterministicRandom
}

/// Derives the VRF output `SHA-256(R || m)`.
///
/// Producer and verifier compute this from the same `(R, m)` and therefore
/// obtain byte-identical outputs.
pub fn derive_output<G: Group>(commitment: &G::Element, message: &[u8]) -> VrfOutput {
    VrfOutput(commitment_digest::<G>(commitment, message))
}

/// Hashes an entire proof encoding into a [`DeterministicRandom`].
pub fn deterministic_random_number(proof_bytes: &[u8]) -> DeterministicRandom {
    DeterministicRandom(Sha256::digest(proof_bytes).into())
}

/// Big-endian interpretation of digest bytes as an unsigned integer.
///
/// Reducing into a caller's range (e.g. a commitment's upper bound) is left
/// to the caller.
pub fn collapse_to_integer(output: &[u8]) -> BigUint {
    BigUint::from_bytes_be(output)
}
