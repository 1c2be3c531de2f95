//! Verifiable proofs over serialized request commitments.
//!
//! A [`RequestCommitment`] is encoded into a canonical byte string, signed
//! with a Schnorr-style proof over Ristretto255, and reduced to a VRF output
//! that any holder of the public key can recompute.
//!
//! ```rust
//! use commitment_vrf::{
//!     KeyPair, Parameters, Prover, RequestCommitment, Ristretto255, SecureRng, Verifier,
//! };
//!
//! let mut rng = SecureRng::new();
//! let keys = KeyPair::<Ristretto255>::generate(&mut rng);
//! let commitment = RequestCommitment::new(1000, "station-1", 100, "alice", 1);
//! let message = commitment.encode();
//!
//! let prover = Prover::new(Parameters::new());
//! let (proof, output) = prover
//!     .prove_with_output(&mut rng, keys.secret_key(), &message)
//!     .unwrap();
//!
//! let verifier = Verifier::new(Parameters::new());
//! let verified = verifier
//!     .verify(keys.public_key(), &message, &proof.to_bytes())
//!     .unwrap();
//! assert_eq!(verified, output);
//! ```

pub mod commitment;
pub mod error;
pub mod keys;
pub mod primitives;
pub mod protocol;

pub use commitment::RequestCommitment;
pub use error::{Error, Result};
pub use keys::{derive_public_key, KeyPair, PublicKey, SecretKey};
pub use primitives::{hash_to_curve, Group, Ristretto255, SecureRng};
pub use protocol::{
    collapse_to_integer, derive_output, deterministic_random_number, nonce_from_block_number,
    DeterministicRandom, InsecureDeterministicProver, Parameters, Proof, Prover, Verifier,
    VrfOutput, OUTPUT_LEN,
};
