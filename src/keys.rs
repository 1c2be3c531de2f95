//! Signing keys: generation, derivation, and hex import/export.

use core::fmt;

use rand_core::CryptoRngCore;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::{Error, Group, Result};

/// Private signing scalar `x`.
///
/// Wiped on drop. The only way to obtain its bytes is
/// [`SecretKey::export_hex`].
#[derive(Clone)]
pub struct SecretKey<G: Group> {
    x: G::Scalar,
}

impl<G: Group> Zeroize for SecretKey<G> {
    fn zeroize(&mut self) {
        self.x.zeroize();
    }
}

impl<G: Group> Drop for SecretKey<G> {
    fn drop(&mut self) {
        self.x.zeroize();
    }
}

impl<G: Group> ZeroizeOnDrop for SecretKey<G> {}

impl<G: Group> SecretKey<G> {
    /// Samples a uniformly random secret key.
    pub fn generate<R: CryptoRngCore>(rng: &mut R) -> Self {
        Self {
            x: G::random_scalar(rng),
        }
    }

    /// Wraps an existing scalar.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKeyEncoding`] for the zero scalar, whose public
    /// key is the identity.
    pub fn from_scalar(x: G::Scalar) -> Result<Self> {
        if G::scalar_is_zero(&x) {
            return Err(Error::InvalidKeyEncoding(
                "secret key cannot be zero".to_string(),
            ));
        }
        Ok(Self { x })
    }

    /// Loads a secret key from its hexadecimal export.
    ///
    /// The string must decode to exactly [`Group::SCALAR_SIZE`] bytes holding
    /// a canonical, non-zero scalar.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKeyEncoding`] on malformed hex, a wrong byte
    /// length, or bytes that are not a valid scalar.
    pub fn from_hex(hex_key: &str) -> Result<Self> {
        let bytes = Zeroizing::new(
            hex::decode(hex_key.trim())
                .map_err(|e| Error::InvalidKeyEncoding(format!("invalid hex: {e}")))?,
        );

        if bytes.len() != G::SCALAR_SIZE {
            return Err(Error::InvalidKeyEncoding(format!(
                "expected {} bytes, got {}",
                G::SCALAR_SIZE,
                bytes.len()
            )));
        }

        let x = G::scalar_from_bytes(&bytes)
            .map_err(|e| Error::InvalidKeyEncoding(e.to_string()))?;
        Self::from_scalar(x)
    }

    /// Exports the secret scalar as lowercase hex.
    ///
    /// This is the only path by which the secret leaves the process in
    /// cleartext; the returned string is wiped when dropped.
    pub fn export_hex(&self) -> Zeroizing<String> {
        let bytes = Zeroizing::new(G::scalar_to_bytes(&self.x));
        Zeroizing::new(hex::encode(bytes.as_slice()))
    }

    /// Derives the matching public key `x·G`.
    pub fn public_key(&self) -> PublicKey<G> {
        derive_public_key(self)
    }

    pub(crate) fn scalar(&self) -> &G::Scalar {
        &self.x
    }
}

impl<G: Group> fmt::Debug for SecretKey<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(<redacted>)")
    }
}

/// Public verification key `Y = x·G`.
#[derive(Clone, Debug)]
pub struct PublicKey<G: Group> {
    y: G::Element,
}

impl<G: Group> PublicKey<G> {
    /// Decodes a public key received from a prover.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKeyEncoding`] if the bytes are not a valid
    /// element or encode the identity.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let y = G::element_from_bytes(bytes)
            .and_then(|y| G::validate_element(&y).map(|()| y))
            .map_err(|e| Error::InvalidKeyEncoding(e.to_string()))?;
        Ok(Self { y })
    }

    /// Fixed-width encoding of the key.
    pub fn to_bytes(&self) -> Vec<u8> {
        G::element_to_bytes(&self.y)
    }

    /// Returns the underlying group element.
    pub fn element(&self) -> &G::Element {
        &self.y
    }
}

impl<G: Group> PartialEq for PublicKey<G> {
    fn eq(&self, other: &Self) -> bool {
        self.y == other.y
    }
}

impl<G: Group> Eq for PublicKey<G> {}

/// Derives the public key for `secret`: `x·G`.
pub fn derive_public_key<G: Group>(secret: &SecretKey<G>) -> PublicKey<G> {
    PublicKey {
        y: G::base_mul(secret.scalar()),
    }
}

/// A secret key together with its derived public key.
#[derive(Clone, Debug)]
pub struct KeyPair<G: Group> {
    secret: SecretKey<G>,
    public: PublicKey<G>,
}

impl<G: Group> KeyPair<G> {
    /// Generates a fresh key pair from a cryptographically secure source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use commitment_vrf::{KeyPair, Ristretto255, SecureRng};
    ///
    /// let mut rng = SecureRng::new();
    /// let keys = KeyPair::<Ristretto255>::generate(&mut rng);
    /// assert_eq!(keys.public_key().to_bytes().len(), 32);
    /// ```
    pub fn generate<R: CryptoRngCore>(rng: &mut R) -> Self {
        Self::from_secret(SecretKey::generate(rng))
    }

    /// Builds a key pair around an existing secret.
    pub fn from_secret(secret: SecretKey<G>) -> Self {
        let public = derive_public_key(&secret);
        Self { secret, public }
    }

    /// Returns the secret half.
    pub fn secret_key(&self) -> &SecretKey<G> {
        &self.secret
    }

    /// Returns the public half, `x·G`.
    pub fn public_key(&self) -> &PublicKey<G> {
        &self.public
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::{Ristretto255, SecureRng};

    type Sk = SecretKey<Ristretto255>;

    #[test]
    fn public_key_is_secret_times_generator() {
        let mut rng = SecureRng::new();
        let keys = KeyPair::<Ristretto255>::generate(&mut rng);
        let expected = Ristretto255::scalar_mul(
            &Ristretto255::generator(),
            keys.secret_key().scalar(),
        );
        assert_eq!(keys.public_key().element(), &expected);
        assert_eq!(&derive_public_key(keys.secret_key()), keys.public_key());
        assert_eq!(&keys.secret_key().public_key(), keys.public_key());
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = KeyPair::<Ristretto255>::generate(&mut StdRng::seed_from_u64(7));
        let b = KeyPair::<Ristretto255>::generate(&mut StdRng::seed_from_u64(7));
        assert_eq!(a.public_key(), b.public_key());
    }

    #[test]
    fn hex_export_roundtrip() {
        let mut rng = SecureRng::new();
        let sk = Sk::generate(&mut rng);
        let hex_key = sk.export_hex();
        assert_eq!(hex_key.len(), 64);

        let loaded = Sk::from_hex(&hex_key).unwrap();
        assert_eq!(loaded.public_key(), sk.public_key());
    }

    #[test]
    fn loads_known_scalar() {
        let sk = Sk::from_hex("0100000000000000000000000000000000000000000000000000000000000000")
            .unwrap();
        assert_eq!(sk.public_key().element(), &Ristretto255::generator());
    }

    #[test]
    fn rejects_bad_hex() {
        let non_hex = "0g".repeat(32);
        for bad in ["zz", "abc", non_hex.as_str()] {
            assert!(matches!(
                Sk::from_hex(bad),
                Err(Error::InvalidKeyEncoding(_))
            ));
        }
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(matches!(
            Sk::from_hex(&"01".repeat(31)),
            Err(Error::InvalidKeyEncoding(_))
        ));
        assert!(matches!(
            Sk::from_hex(&"01".repeat(33)),
            Err(Error::InvalidKeyEncoding(_))
        ));
    }

    #[test]
    fn rejects_non_canonical_and_zero() {
        assert!(matches!(
            Sk::from_hex(&"ff".repeat(32)),
            Err(Error::InvalidKeyEncoding(_))
        ));
        assert!(matches!(
            Sk::from_hex(&"00".repeat(32)),
            Err(Error::InvalidKeyEncoding(_))
        ));
    }

    #[test]
    fn public_key_bytes_roundtrip() {
        let mut rng = SecureRng::new();
        let keys = KeyPair::<Ristretto255>::generate(&mut rng);
        let decoded = PublicKey::<Ristretto255>::from_bytes(&keys.public_key().to_bytes()).unwrap();
        assert_eq!(&decoded, keys.public_key());

        let identity = Ristretto255::element_to_bytes(&Ristretto255::identity());
        assert!(matches!(
            PublicKey::<Ristretto255>::from_bytes(&identity),
            Err(Error::InvalidKeyEncoding(_))
        ));
    }

    #[test]
    fn debug_output_hides_secret() {
        let sk = Sk::generate(&mut SecureRng::new());
        let rendered = format!("{sk:?}");
        assert!(!rendered.contains(sk.export_hex().as_str()));
    }
}
