/// Ristretto255 group implementation.
pub mod ristretto;

pub use ristretto::Ristretto255;
