//! Common test utilities shared across integration tests.

use commitment_vrf::RequestCommitment;

/// Initialize test tracing (call once at the beginning of tests).
///
/// Honors `RUST_LOG` when set and otherwise shows warnings from this crate,
/// which surfaces every use of the insecure deterministic prover.
/// Subsequent calls are safe and will be ignored.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("commitment_vrf=warn"));

    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(filter)
        .try_init();
}

/// The commitment used across the scenario tests.
#[allow(dead_code)]
pub fn sample_commitment() -> RequestCommitment {
    RequestCommitment::new(123456, "Station12", 999999, "0x123456789abcdef", 0x01)
}
