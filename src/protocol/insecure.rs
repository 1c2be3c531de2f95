//! Deterministic proofs with a publicly derivable nonce.
//!
//! # Warning
//!
//! This scheme is **not** a secure signature or VRF. The nonce `k` is
//! computed from public data (a block number), so anyone who sees a single
//! proof can recover the signing key as `x = (k - s) / e`. Outputs are
//! reproducible, not unpredictable.
//!
//! It exists only for simulations and tests that need a fixed expected
//! proof across repeated runs. Never use it with a key that also signs
//! anything of value.

use num_bigint::BigUint;
use tracing::warn;

use super::prover::Nonce;
use super::{derive_output, Proof, Prover, VrfOutput};
use crate::{Group, RequestCommitment, Result, SecretKey};

/// Derives the deterministic nonce for `block_number`.
///
/// The block number's minimal big-endian byte string is read with the
/// group's native scalar convention (little-endian, reduced modulo the
/// order). Block 0 yields the zero scalar.
pub fn nonce_from_block_number<G: Group>(block_number: u64) -> Result<G::Scalar> {
    G::reduce_scalar(&BigUint::from(block_number).to_bytes_be())
}

/// Prover whose nonce is derived from a public block number.
///
/// Obtained only through [`Prover::insecure_deterministic`]. Proofs verify
/// with the ordinary [`Verifier`](crate::Verifier); identical inputs always
/// give byte-identical proofs. See the [module docs](self) for why this must
/// never be the default path.
#[derive(Clone, Debug)]
pub struct InsecureDeterministicProver<G: Group> {
    inner: Prover<G>,
}

impl<G: Group> InsecureDeterministicProver<G> {
    pub(crate) fn new(inner: Prover<G>) -> Self {
        Self { inner }
    }

    /// Generates a reproducible proof with `k` derived from `block_number`.
    pub fn prove(
        &self,
        secret: &SecretKey<G>,
        message: &[u8],
        block_number: u64,
    ) -> Result<Proof<G>> {
        warn!(
            group = G::name(),
            block_number, "generating proof with a publicly derivable nonce"
        );
        let nonce = Nonce::new(nonce_from_block_number::<G>(block_number)?);
        self.inner.prove_with_nonce(&nonce, secret, message)
    }

    /// Generates a reproducible proof together with its VRF output.
    pub fn prove_with_output(
        &self,
        secret: &SecretKey<G>,
        message: &[u8],
        block_number: u64,
    ) -> Result<(Proof<G>, VrfOutput)> {
        let proof = self.prove(secret, message, block_number)?;
        let output = derive_output::<G>(proof.commitment(), message);
        Ok((proof, output))
    }

    /// Proves over a request commitment, using its own block number as the
    /// nonce source.
    pub fn prove_commitment(
        &self,
        secret: &SecretKey<G>,
        commitment: &RequestCommitment,
    ) -> Result<Proof<G>> {
        self.prove(secret, &commitment.encode(), commitment.block_number())
    }
}
