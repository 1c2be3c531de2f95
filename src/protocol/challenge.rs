use sha2::{Digest, Sha256};

use crate::{Group, Result};

/// Hashes the commitment element and message: `SHA-256(R || m)`.
///
/// The same digest seeds both the Fiat-Shamir challenge and the VRF output,
/// so prover and verifier always agree on both.
pub fn commitment_digest<G: Group>(commitment: &G::Element, message: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(G::element_to_bytes(commitment));
    hasher.update(message);
    hasher.finalize().into()
}

/// Derives the challenge scalar `e` from `R` and the message.
pub fn challenge_scalar<G: Group>(commitment: &G::Element, message: &[u8]) -> Result<G::Scalar> {
    G::reduce_scalar(&commitment_digest::<G>(commitment, message))
}
