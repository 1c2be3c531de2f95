use serde::{Deserialize, Deserializer, Serialize};

use crate::{Error, Group, Result};

/// Public suite parameters for proof generation and verification.
///
/// Replaces a process-wide curve suite with a value that is passed
/// explicitly to every [`Prover`](crate::Prover) and
/// [`Verifier`](crate::Verifier).
///
/// The generator is always the group's standard base point, the same one
/// [`derive_public_key`](crate::derive_public_key) multiplies. Parameters
/// serialize with `serde`; deserialization rejects any other generator.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Parameters<G: Group> {
    #[serde(deserialize_with = "deserialize_generator::<G, _>")]
    generator: G::Element,
}

impl<G: Group> Parameters<G> {
    /// Creates parameters with the group's standard base generator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use commitment_vrf::{Parameters, Ristretto255};
    ///
    /// let params = Parameters::<Ristretto255>::new();
    /// ```
    pub fn new() -> Self {
        Self {
            generator: G::generator(),
        }
    }

    /// Returns the base generator `G`.
    pub fn generator(&self) -> &G::Element {
        &self.generator
    }

    /// Checks that the generator is the group's standard base point.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParams`] for any other element.
    pub fn validate(&self) -> Result<()> {
        check_generator::<G>(&self.generator)
    }

    /// Computes `s·G`.
    pub fn mul_generator(&self, s: &G::Scalar) -> G::Element {
        G::base_mul(s)
    }
}

impl<G: Group> Default for Parameters<G> {
    fn default() -> Self {
        Self::new()
    }
}

fn check_generator<G: Group>(generator: &G::Element) -> Result<()> {
    if *generator != G::generator() {
        return Err(Error::InvalidParams(format!(
            "generator must be the {} base point",
            G::name()
        )));
    }
    Ok(())
}

fn deserialize_generator<'de, G, D>(deserializer: D) -> core::result::Result<G::Element, D::Error>
where
    G: Group,
    D: Deserializer<'de>,
{
    let generator = G::Element::deserialize(deserializer)?;
    check_generator::<G>(&generator).map_err(<D::Error as serde::de::Error>::custom)?;
    Ok(generator)
}
