use curve25519_dalek::constants::RISTRETTO_BASEPOINT_POINT;
use curve25519_dalek::ristretto::{CompressedRistretto, RistrettoPoint};
use curve25519_dalek::scalar::Scalar as DalekScalar;
use curve25519_dalek::traits::Identity;
use rand_core::CryptoRngCore;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{Error, Group, Result};

/// Number of bytes in a Ristretto255 scalar or compressed element (32 bytes).
const RISTRETTO_BYTES: usize = 32;

/// Number of bytes used for wide scalar reduction (64 bytes).
const WIDE_REDUCTION_BYTES: usize = 64;

/// Ristretto255 group: the prime-order quotient of Curve25519.
///
/// Every valid encoding decodes to an element of the prime-order group, so
/// no cofactor handling is needed anywhere in the proof engine.
#[derive(Clone, Debug)]
pub struct Ristretto255;

/// Scalar in the Ristretto255 group.
///
/// Wiped from memory when dropped.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct Scalar(DalekScalar);

/// Element (point) in the Ristretto255 group.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Element(RistrettoPoint);

impl Scalar {
    /// Wraps a curve25519_dalek scalar.
    pub fn new(value: DalekScalar) -> Self {
        Self(value)
    }

    /// Returns a reference to the inner curve25519_dalek scalar.
    pub fn inner(&self) -> &DalekScalar {
        &self.0
    }
}

impl Element {
    /// Wraps a RistrettoPoint.
    pub fn new(value: RistrettoPoint) -> Self {
        Self(value)
    }

    /// Returns a reference to the inner RistrettoPoint.
    pub fn inner(&self) -> &RistrettoPoint {
        &self.0
    }
}

fn fixed_width(bytes: &[u8], what: &str) -> Result<[u8; RISTRETTO_BYTES]> {
    bytes.try_into().map_err(|_| {
        Error::MalformedEncoding(format!(
            "{what}: expected {RISTRETTO_BYTES} bytes, got {}",
            bytes.len()
        ))
    })
}

impl Group for Ristretto255 {
    type Scalar = Scalar;
    type Element = Element;

    const SCALAR_SIZE: usize = RISTRETTO_BYTES;
    const ELEMENT_SIZE: usize = RISTRETTO_BYTES;

    fn name() -> &'static str {
        "Ristretto255"
    }

    fn generator() -> Self::Element {
        Element(RISTRETTO_BASEPOINT_POINT)
    }

    fn identity() -> Self::Element {
        Element(RistrettoPoint::identity())
    }

    fn is_identity(e: &Self::Element) -> bool {
        e.0 == RistrettoPoint::identity()
    }

    fn validate_element(e: &Self::Element) -> Result<()> {
        if Self::is_identity(e) {
            return Err(Error::MalformedEncoding(
                "identity element is not a valid public value".to_string(),
            ));
        }
        Ok(())
    }

    fn scalar_from_bytes(b: &[u8]) -> Result<Self::Scalar> {
        let arr = fixed_width(b, "scalar")?;
        Option::<DalekScalar>::from(DalekScalar::from_canonical_bytes(arr))
            .map(Scalar)
            .ok_or_else(|| Error::MalformedEncoding("scalar is not canonical".to_string()))
    }

    fn scalar_to_bytes(s: &Self::Scalar) -> Vec<u8> {
        s.0.to_bytes().to_vec()
    }

    fn reduce_scalar(b: &[u8]) -> Result<Self::Scalar> {
        match b.len() {
            0..=RISTRETTO_BYTES => {
                let mut arr = [0u8; RISTRETTO_BYTES];
                arr[..b.len()].copy_from_slice(b);
                Ok(Scalar(DalekScalar::from_bytes_mod_order(arr)))
            }
            33..=WIDE_REDUCTION_BYTES => {
                let mut arr = [0u8; WIDE_REDUCTION_BYTES];
                arr[..b.len()].copy_from_slice(b);
                Ok(Scalar(DalekScalar::from_bytes_mod_order_wide(&arr)))
            }
            n => Err(Error::MalformedEncoding(format!(
                "cannot reduce {n} bytes, at most {WIDE_REDUCTION_BYTES} accepted"
            ))),
        }
    }

    fn element_from_bytes(b: &[u8]) -> Result<Self::Element> {
        let arr = fixed_width(b, "element")?;
        CompressedRistretto(arr)
            .decompress()
            .map(Element)
            .ok_or_else(|| {
                Error::MalformedEncoding("bytes do not encode a Ristretto point".to_string())
            })
    }

    fn element_to_bytes(e: &Self::Element) -> Vec<u8> {
        e.0.compress().to_bytes().to_vec()
    }

    fn hash_to_element(uniform: &[u8; 64]) -> Self::Element {
        Element(RistrettoPoint::from_uniform_bytes(uniform))
    }

    fn random_scalar<R: CryptoRngCore>(rng: &mut R) -> Self::Scalar {
        let mut bytes = [0u8; WIDE_REDUCTION_BYTES];
        rng.fill_bytes(&mut bytes);
        let scalar = Scalar(DalekScalar::from_bytes_mod_order_wide(&bytes));
        bytes.zeroize();
        scalar
    }

    fn base_mul(s: &Self::Scalar) -> Self::Element {
        Element(RistrettoPoint::mul_base(&s.0))
    }

    fn scalar_mul(e: &Self::Element, s: &Self::Scalar) -> Self::Element {
        Element(e.0 * s.0)
    }

    fn element_add(a: &Self::Element, b: &Self::Element) -> Self::Element {
        Element(a.0 + b.0)
    }

    fn element_negate(e: &Self::Element) -> Self::Element {
        Element(-e.0)
    }

    fn scalar_add(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar {
        Scalar(a.0 + b.0)
    }

    fn scalar_sub(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar {
        Scalar(a.0 - b.0)
    }

    fn scalar_mul_scalar(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar {
        Scalar(a.0 * b.0)
    }

    fn scalar_invert(s: &Self::Scalar) -> Option<Self::Scalar> {
        if Self::scalar_is_zero(s) {
            None
        } else {
            Some(Scalar(s.0.invert()))
        }
    }

    fn scalar_is_zero(s: &Self::Scalar) -> bool {
        s.0 == DalekScalar::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SecureRng;

    #[test]
    fn base_mul_matches_generator_mul() {
        let mut rng = SecureRng::new();
        let x = Ristretto255::random_scalar(&mut rng);
        let g = Ristretto255::generator();
        assert_eq!(Ristretto255::base_mul(&x), Ristretto255::scalar_mul(&g, &x));
    }

    #[test]
    fn scalar_add_sub() {
        let mut rng = SecureRng::new();
        let a = Ristretto255::random_scalar(&mut rng);
        let b = Ristretto255::random_scalar(&mut rng);

        let sum = Ristretto255::scalar_add(&a, &b);
        assert_eq!(Ristretto255::scalar_sub(&sum, &b), a);
    }

    #[test]
    fn scalar_inversion() {
        let mut rng = SecureRng::new();
        let a = Ristretto255::random_scalar(&mut rng);

        let a_inv = Ristretto255::scalar_invert(&a).unwrap();
        let product = Ristretto255::scalar_mul_scalar(&a, &a_inv);
        assert_eq!(product.inner(), &DalekScalar::ONE);

        let zero = Scalar::new(DalekScalar::ZERO);
        assert!(Ristretto255::scalar_invert(&zero).is_none());
    }

    #[test]
    fn element_negation_cancels() {
        let mut rng = SecureRng::new();
        let p = Ristretto255::base_mul(&Ristretto255::random_scalar(&mut rng));
        let sum = Ristretto255::element_add(&p, &Ristretto255::element_negate(&p));
        assert!(Ristretto255::is_identity(&sum));
    }

    #[test]
    fn element_addition_is_scalar_addition() {
        let mut rng = SecureRng::new();
        let a = Ristretto255::random_scalar(&mut rng);
        let b = Ristretto255::random_scalar(&mut rng);

        let ga_plus_gb =
            Ristretto255::element_add(&Ristretto255::base_mul(&a), &Ristretto255::base_mul(&b));
        let g_a_plus_b = Ristretto255::base_mul(&Ristretto255::scalar_add(&a, &b));
        assert_eq!(ga_plus_gb, g_a_plus_b);
    }

    #[test]
    fn scalar_encoding_is_fixed_width() {
        let mut rng = SecureRng::new();
        let s = Ristretto255::random_scalar(&mut rng);
        let bytes = Ristretto255::scalar_to_bytes(&s);
        assert_eq!(bytes.len(), Ristretto255::SCALAR_SIZE);
        assert_eq!(Ristretto255::scalar_from_bytes(&bytes).unwrap(), s);
    }

    #[test]
    fn non_canonical_scalar_rejected() {
        let err = Ristretto255::scalar_from_bytes(&[0xFF; 32]).unwrap_err();
        assert!(matches!(err, Error::MalformedEncoding(_)));

        let err = Ristretto255::scalar_from_bytes(&[1u8; 31]).unwrap_err();
        assert!(matches!(err, Error::MalformedEncoding(_)));
    }

    #[test]
    fn invalid_element_rejected() {
        let err = Ristretto255::element_from_bytes(&[0xFF; 32]).unwrap_err();
        assert!(matches!(err, Error::MalformedEncoding(_)));

        let err = Ristretto255::element_from_bytes(&[0u8; 33]).unwrap_err();
        assert!(matches!(err, Error::MalformedEncoding(_)));
    }

    #[test]
    fn reduce_scalar_little_endian() {
        let seven = Ristretto255::reduce_scalar(&[7]).unwrap();
        let mut expected = [0u8; 32];
        expected[0] = 7;
        assert_eq!(Ristretto255::scalar_to_bytes(&seven), expected.to_vec());

        assert!(Ristretto255::scalar_is_zero(&Ristretto255::reduce_scalar(&[]).unwrap()));
        assert!(Ristretto255::reduce_scalar(&[0u8; 48]).is_ok());
        assert!(matches!(
            Ristretto255::reduce_scalar(&[0u8; 65]),
            Err(Error::MalformedEncoding(_))
        ));
    }

    #[test]
    fn identity_is_not_a_public_value() {
        assert!(Ristretto255::validate_element(&Ristretto255::identity()).is_err());
        assert!(Ristretto255::validate_element(&Ristretto255::generator()).is_ok());
    }
}
