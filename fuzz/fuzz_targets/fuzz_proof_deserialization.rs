#![no_main]

use commitment_vrf::{Proof, Ristretto255};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(proof) = Proof::<Ristretto255>::from_bytes(data) {
        assert_eq!(proof.to_bytes(), data);
    }
});
