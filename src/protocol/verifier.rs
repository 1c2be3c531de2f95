use subtle::ConstantTimeEq;
use tracing::debug;

use super::challenge::challenge_scalar;
use super::{derive_output, Parameters, Proof, VrfOutput};
use crate::{Error, Group, PublicKey, Result};

/// Verifier for commitment proofs.
///
/// Accepts proofs from both the randomized and the deterministic prover;
/// the verification equation is the same for both. Verification is a pure
/// function of its inputs.
#[derive(Clone, Debug)]
pub struct Verifier<G: Group> {
    params: Parameters<G>,
}

impl<G: Group> Verifier<G> {
    /// Creates a new verifier with the given parameters.
    pub fn new(params: Parameters<G>) -> Self {
        Self { params }
    }

    /// Returns the suite parameters.
    pub fn params(&self) -> &Parameters<G> {
        &self.params
    }

    /// Decodes and verifies an encoded proof.
    ///
    /// Returns the VRF output for `(R, message)` on success.
    ///
    /// # Errors
    ///
    /// - [`Error::TruncatedProof`] if the buffer is too short
    /// - [`Error::MalformedEncoding`] if `R` or `s` cannot be decoded
    /// - [`Error::InvalidProof`] if the verification equation fails
    ///
    /// # Examples
    ///
    /// ```rust
    /// use commitment_vrf::{KeyPair, Parameters, Prover, Ristretto255, SecureRng, Verifier};
    ///
    /// let mut rng = SecureRng::new();
    /// let keys = KeyPair::<Ristretto255>::generate(&mut rng);
    /// let proof = Prover::new(Parameters::new())
    ///     .prove(&mut rng, keys.secret_key(), b"message")
    ///     .unwrap();
    ///
    /// let verifier = Verifier::new(Parameters::new());
    /// assert!(verifier.verify(keys.public_key(), b"message", &proof.to_bytes()).is_ok());
    /// ```
    pub fn verify(
        &self,
        public_key: &PublicKey<G>,
        message: &[u8],
        proof_bytes: &[u8],
    ) -> Result<VrfOutput> {
        let proof = Proof::<G>::from_bytes(proof_bytes).inspect_err(|e| {
            debug!(group = G::name(), error = %e, "rejecting undecodable proof");
        })?;
        self.verify_proof(public_key, message, &proof)
    }

    /// Verifies a decoded proof: accepts iff `s·G + e·Y == R`.
    ///
    /// Returns the VRF output for `(R, message)` on success.
    pub fn verify_proof(
        &self,
        public_key: &PublicKey<G>,
        message: &[u8],
        proof: &Proof<G>,
    ) -> Result<VrfOutput> {
        let r = proof.commitment();
        let e = challenge_scalar::<G>(r, message)?;

        let s_g = self.params.mul_generator(proof.response());
        let e_y = G::scalar_mul(public_key.element(), &e);
        let expected_r = G::element_add(&s_g, &e_y);

        if expected_r != *r {
            debug!(
                group = G::name(),
                message_len = message.len(),
                "proof failed verification equation"
            );
            return Err(Error::InvalidProof);
        }

        Ok(derive_output::<G>(r, message))
    }

    /// Verifies a proof and checks a claimed VRF output against it.
    ///
    /// # Errors
    ///
    /// Any error from [`Verifier::verify`], or [`Error::OutputMismatch`] if
    /// the proof is valid but `claimed` is not its output.
    pub fn verify_with_output(
        &self,
        public_key: &PublicKey<G>,
        message: &[u8],
        proof_bytes: &[u8],
        claimed: &VrfOutput,
    ) -> Result<()> {
        let output = self.verify(public_key, message, proof_bytes)?;
        if bool::from(output.ct_eq(claimed)) {
            Ok(())
        } else {
            debug!(group = G::name(), "claimed VRF output does not match proof");
            Err(Error::OutputMismatch)
        }
    }
}
