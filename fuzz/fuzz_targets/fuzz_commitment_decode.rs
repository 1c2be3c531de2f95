#![no_main]

use commitment_vrf::RequestCommitment;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(commitment) = RequestCommitment::decode(data) {
        assert_eq!(commitment.encode(), data);
    }
});
