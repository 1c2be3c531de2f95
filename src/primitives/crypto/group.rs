use core::fmt::Debug;

use rand_core::CryptoRngCore;
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::Result;

/// Trait for the prime-order group backing commitment proofs.
///
/// Implementations are stateless: every operation is an associated function,
/// so a group is selected purely at the type level and never carried around
/// as a shared context object. Implementations must provide both group
/// operations (for elements) and field operations (for scalars).
pub trait Group: Clone + Debug + Send + Sync + 'static {
    /// Scalar type for this group (exponents/discrete logs).
    ///
    /// Scalars must be zeroizable so secret keys and nonces can be wiped.
    type Scalar: Clone
        + Debug
        + Eq
        + PartialEq
        + Zeroize
        + Serialize
        + for<'de> Deserialize<'de>
        + Send
        + Sync;

    /// Element type for this group (points).
    type Element: Clone
        + Debug
        + Eq
        + PartialEq
        + Serialize
        + for<'de> Deserialize<'de>
        + Send
        + Sync;

    /// Width in bytes of an encoded scalar.
    const SCALAR_SIZE: usize;

    /// Width in bytes of an encoded element.
    const ELEMENT_SIZE: usize;

    /// Returns the name of this group implementation.
    fn name() -> &'static str;

    /// Returns the fixed base generator `G`.
    fn generator() -> Self::Element;

    /// Returns the identity element of the group.
    fn identity() -> Self::Element;

    /// Checks if an element is the identity.
    fn is_identity(e: &Self::Element) -> bool;

    /// Validates that an element is usable as a public value.
    fn validate_element(e: &Self::Element) -> Result<()>;

    /// Decodes a canonical, fixed-width scalar.
    fn scalar_from_bytes(b: &[u8]) -> Result<Self::Scalar>;

    /// Encodes a scalar to exactly [`Group::SCALAR_SIZE`] bytes.
    fn scalar_to_bytes(s: &Self::Scalar) -> Vec<u8>;

    /// Interprets up to 64 bytes as a little-endian integer reduced modulo
    /// the group order.
    ///
    /// Unlike [`Group::scalar_from_bytes`] this accepts any bit pattern, which
    /// makes it suitable for hash digests and short integer encodings.
    fn reduce_scalar(b: &[u8]) -> Result<Self::Scalar>;

    /// Decodes a fixed-width element encoding.
    fn element_from_bytes(b: &[u8]) -> Result<Self::Element>;

    /// Encodes an element to exactly [`Group::ELEMENT_SIZE`] bytes.
    fn element_to_bytes(e: &Self::Element) -> Vec<u8>;

    /// Maps 64 uniformly distributed bytes (a wide hash) into the group.
    fn hash_to_element(uniform: &[u8; 64]) -> Self::Element;

    /// Samples a uniformly random scalar.
    fn random_scalar<R: CryptoRngCore>(rng: &mut R) -> Self::Scalar;

    /// Multiplies the base generator: `s·G`.
    fn base_mul(s: &Self::Scalar) -> Self::Element;

    /// Multiplies an arbitrary element: `s·P`.
    fn scalar_mul(e: &Self::Element, s: &Self::Scalar) -> Self::Element;

    /// Adds two elements: `a + b`.
    fn element_add(a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// Negates an element: `-e`.
    fn element_negate(e: &Self::Element) -> Self::Element;

    /// Adds two scalars: `a + b`.
    fn scalar_add(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar;

    /// Subtracts two scalars: `a - b`.
    fn scalar_sub(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar;

    /// Multiplies two scalars: `a * b`.
    fn scalar_mul_scalar(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar;

    /// Computes the multiplicative inverse of a scalar.
    ///
    /// Returns `None` if the scalar is zero.
    fn scalar_invert(s: &Self::Scalar) -> Option<Self::Scalar>;

    /// Checks if a scalar is zero.
    fn scalar_is_zero(s: &Self::Scalar) -> bool;
}
