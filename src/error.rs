//! Error types for commitment proofs.

/// Main error types for the library.
///
/// Every failure is terminal for the call that raised it. Decoding failures,
/// truncated input, and failed verification equations are reported as
/// distinct variants so callers never confuse one for another.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Bytes cannot be decoded as a valid scalar, group element, or record.
    #[error("Malformed encoding: {0}")]
    MalformedEncoding(String),

    /// The proof buffer is shorter than the two fixed-width fields.
    #[error("Truncated proof: expected {expected} bytes, got {got}")]
    TruncatedProof { expected: usize, got: usize },

    /// The proof is well-formed but fails the verification equation.
    #[error("Invalid proof")]
    InvalidProof,

    /// A private or public key could not be imported.
    #[error("Invalid key encoding: {0}")]
    InvalidKeyEncoding(String),

    /// The proof verifies but the claimed output does not match it.
    #[error("VRF output does not match proof")]
    OutputMismatch,

    /// Invalid suite parameters were provided.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
