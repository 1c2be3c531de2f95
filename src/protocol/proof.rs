use super::output::{deterministic_random_number, DeterministicRandom};
use crate::{Error, Group, Result};

/// Non-interactive proof `(R, s)`.
///
/// # Serialization
///
/// The wire form is the fixed-width element encoding of `R` followed by the
/// fixed-width scalar encoding of `s`, with no framing:
/// `ELEMENT_SIZE + SCALAR_SIZE` bytes in total (64 for Ristretto255).
#[derive(Clone, Debug)]
pub struct Proof<G: Group> {
    commitment: G::Element,
    response: G::Scalar,
}

impl<G: Group> Proof<G> {
    /// Exact length of an encoded proof.
    pub const ENCODED_LEN: usize = G::ELEMENT_SIZE + G::SCALAR_SIZE;

    /// Creates a proof from its commitment `R` and response `s`.
    ///
    /// This is typically called by [`Prover`](crate::Prover) and not directly by users.
    pub fn new(commitment: G::Element, response: G::Scalar) -> Self {
        Self {
            commitment,
            response,
        }
    }

    /// Returns the commitment `R = k·G`.
    pub fn commitment(&self) -> &G::Element {
        &self.commitment
    }

    /// Returns the response `s = k - e·x`.
    pub fn response(&self) -> &G::Scalar {
        &self.response
    }

    /// Serializes the proof to `R || s`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::ENCODED_LEN);
        out.extend_from_slice(&G::element_to_bytes(&self.commitment));
        out.extend_from_slice(&G::scalar_to_bytes(&self.response));
        out
    }

    /// Deserializes a proof from `R || s`.
    ///
    /// # Errors
    ///
    /// - [`Error::TruncatedProof`] if fewer than [`Proof::ENCODED_LEN`] bytes are given
    /// - [`Error::MalformedEncoding`] on trailing bytes, an invalid element,
    ///   or a non-canonical scalar
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < Self::ENCODED_LEN {
            return Err(Error::TruncatedProof {
                expected: Self::ENCODED_LEN,
                got: bytes.len(),
            });
        }
        if bytes.len() > Self::ENCODED_LEN {
            return Err(Error::MalformedEncoding(format!(
                "{} trailing bytes after proof",
                bytes.len() - Self::ENCODED_LEN
            )));
        }

        let (r_bytes, s_bytes) = bytes.split_at(G::ELEMENT_SIZE);
        let commitment = G::element_from_bytes(r_bytes)?;
        let response = G::scalar_from_bytes(s_bytes)?;

        Ok(Self {
            commitment,
            response,
        })
    }

    /// Hashes the full proof encoding into a deterministic random number.
    ///
    /// See [`deterministic_random_number`]; this is not the VRF output.
    pub fn deterministic_random(&self) -> DeterministicRandom {
        deterministic_random_number(&self.to_bytes())
    }
}

impl<G: Group> PartialEq for Proof<G> {
    fn eq(&self, other: &Self) -> bool {
        self.commitment == other.commitment && self.response == other.response
    }
}

impl<G: Group> Eq for Proof<G> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Ristretto255, SecureRng};

    fn random_proof() -> Proof<Ristretto255> {
        let mut rng = SecureRng::new();
        let r = Ristretto255::base_mul(&Ristretto255::random_scalar(&mut rng));
        let s = Ristretto255::random_scalar(&mut rng);
        Proof::new(r, s)
    }

    #[test]
    fn encoding_layout() {
        let proof = random_proof();
        let bytes = proof.to_bytes();
        assert_eq!(bytes.len(), 64);
        assert_eq!(&bytes[..32], Ristretto255::element_to_bytes(proof.commitment()).as_slice());
        assert_eq!(&bytes[32..], Ristretto255::scalar_to_bytes(proof.response()).as_slice());
        assert_eq!(Proof::<Ristretto255>::from_bytes(&bytes).unwrap(), proof);
    }

    #[test]
    fn short_input_is_truncated() {
        let bytes = random_proof().to_bytes();
        for len in [0, 1, 32, 63] {
            assert_eq!(
                Proof::<Ristretto255>::from_bytes(&bytes[..len]).unwrap_err(),
                Error::TruncatedProof {
                    expected: 64,
                    got: len
                }
            );
        }
    }

    #[test]
    fn trailing_bytes_rejected() {
        let mut bytes = random_proof().to_bytes();
        bytes.push(0);
        assert!(matches!(
            Proof::<Ristretto255>::from_bytes(&bytes),
            Err(Error::MalformedEncoding(_))
        ));
    }

    #[test]
    fn malformed_fields_rejected() {
        let mut bad_point = random_proof().to_bytes();
        bad_point[..32].copy_from_slice(&[0xFF; 32]);
        assert!(matches!(
            Proof::<Ristretto255>::from_bytes(&bad_point),
            Err(Error::MalformedEncoding(_))
        ));

        let mut bad_scalar = random_proof().to_bytes();
        bad_scalar[32..].copy_from_slice(&[0xFF; 32]);
        assert!(matches!(
            Proof::<Ristretto255>::from_bytes(&bad_scalar),
            Err(Error::MalformedEncoding(_))
        ));
    }
}
