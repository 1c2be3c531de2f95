use rand_core::CryptoRngCore;
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::challenge::challenge_scalar;
use super::{derive_output, InsecureDeterministicProver, Parameters, Proof, VrfOutput};
use crate::{Group, RequestCommitment, Result, SecretKey};

/// Prover for randomized Schnorr-style commitment proofs.
///
/// Holds only the public suite parameters; keys and messages are passed to
/// every call, so one prover can be shared freely across threads.
///
/// # Security
///
/// - Always supply a cryptographically secure RNG such as [`SecureRng`](crate::SecureRng)
/// - The nonce `k` is fresh for every proof and wiped after use
/// - Two proofs of the same message are unlinkable
#[derive(Clone, Debug)]
pub struct Prover<G: Group> {
    params: Parameters<G>,
}

impl<G: Group> Prover<G> {
    /// Creates a new prover with the given parameters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use commitment_vrf::{KeyPair, Parameters, Prover, Ristretto255, SecureRng};
    ///
    /// let mut rng = SecureRng::new();
    /// let keys = KeyPair::<Ristretto255>::generate(&mut rng);
    ///
    /// let prover = Prover::new(Parameters::new());
    /// let proof = prover.prove(&mut rng, keys.secret_key(), b"message").unwrap();
    /// ```
    pub fn new(params: Parameters<G>) -> Self {
        Self { params }
    }

    /// Returns the suite parameters.
    pub fn params(&self) -> &Parameters<G> {
        &self.params
    }

    /// Generates a randomized proof that the holder of `secret` signed `message`.
    pub fn prove<R: CryptoRngCore>(
        &self,
        rng: &mut R,
        secret: &SecretKey<G>,
        message: &[u8],
    ) -> Result<Proof<G>> {
        debug!(
            group = G::name(),
            message_len = message.len(),
            "generating randomized proof"
        );
        let nonce = Nonce::new(G::random_scalar(rng));
        self.prove_with_nonce(&nonce, secret, message)
    }

    /// Generates a randomized proof together with its VRF output.
    pub fn prove_with_output<R: CryptoRngCore>(
        &self,
        rng: &mut R,
        secret: &SecretKey<G>,
        message: &[u8],
    ) -> Result<(Proof<G>, VrfOutput)> {
        let proof = self.prove(rng, secret, message)?;
        let output = derive_output::<G>(proof.commitment(), message);
        Ok((proof, output))
    }

    /// Proves over the canonical encoding of a request commitment.
    pub fn prove_commitment<R: CryptoRngCore>(
        &self,
        rng: &mut R,
        secret: &SecretKey<G>,
        commitment: &RequestCommitment,
    ) -> Result<Proof<G>> {
        self.prove(rng, secret, &commitment.encode())
    }

    /// Opts in to the deterministic, publicly predictable nonce scheme.
    ///
    /// See [`InsecureDeterministicProver`] before using this.
    pub fn insecure_deterministic(&self) -> InsecureDeterministicProver<G> {
        InsecureDeterministicProver::new(self.clone())
    }

    /// Runs the shared algebra: `R = k·G`, `e = H(R || m)`, `s = k - e·x`.
    pub(crate) fn prove_with_nonce(
        &self,
        nonce: &Nonce<G>,
        secret: &SecretKey<G>,
        message: &[u8],
    ) -> Result<Proof<G>> {
        let r = self.params.mul_generator(nonce.k());
        let e = challenge_scalar::<G>(&r, message)?;
        let ex = G::scalar_mul_scalar(&e, secret.scalar());
        let s = G::scalar_sub(nonce.k(), &ex);

        Ok(Proof::new(r, s))
    }
}

/// Proof nonce `k`.
///
/// Automatically zeroized when dropped.
pub(crate) struct Nonce<G: Group> {
    k: G::Scalar,
}

impl<G: Group> Nonce<G> {
    pub(crate) fn new(k: G::Scalar) -> Self {
        Self { k }
    }

    pub(crate) fn k(&self) -> &G::Scalar {
        &self.k
    }
}

impl<G: Group> Drop for Nonce<G> {
    fn drop(&mut self) {
        self.k.zeroize();
    }
}

impl<G: Group> ZeroizeOnDrop for Nonce<G> {}
