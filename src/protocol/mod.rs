//! Proof engine: Schnorr-style proofs over serialized commitments.
//!
//! Every proof uses the same algebra. With secret `x`, public `Y = x·G`,
//! nonce `k` and message `m`:
//!
//! ```text
//! R = k·G
//! e = H(R || m)          reduced to a scalar
//! s = k - e·x
//! accept iff s·G + e·Y == R
//! ```
//!
//! The randomized [`Prover`] samples `k` from a CSPRNG. The
//! [`InsecureDeterministicProver`] derives `k` from public data and exists
//! only for reproducible simulations.

/// Fiat-Shamir challenge derivation.
pub mod challenge;
/// Deterministic nonce derivation for reproducible runs.
pub mod insecure;
/// VRF outputs and derived random numbers.
pub mod output;
/// Suite parameters shared by provers and verifiers.
pub mod parameters;
/// Proof wire type.
pub mod proof;
/// Proof generation.
pub mod prover;
/// Proof verification.
pub mod verifier;

pub use insecure::{nonce_from_block_number, InsecureDeterministicProver};
pub use output::{
    collapse_to_integer, derive_output, deterministic_random_number, DeterministicRandom,
    VrfOutput, OUTPUT_LEN,
};
pub use parameters::Parameters;
pub use proof::Proof;
pub use prover::Prover;
pub use verifier::Verifier;
