//! Key-bound hashing of public seeds into the group.

use sha2::{Digest, Sha512};

use crate::keys::PublicKey;
use crate::Group;

/// Domain separation tag for seed-to-element hashing.
const HASH_TO_CURVE_DST: &[u8] = b"commitment-vrf-v1-hash-to-curve";

/// Suite byte placed between the tag and the public key.
const SUITE_BYTE: u8 = 0x01;

/// Maps `seed` to a group element bound to `public_key`.
///
/// Computes `SHA-512(DST || 0x01 || pk || seed)` and feeds the 64-byte digest
/// through the group's uniform map, so the result has no known discrete log
/// relative to the generator or the key.
pub fn hash_to_curve<G: Group>(public_key: &PublicKey<G>, seed: &[u8]) -> G::Element {
    let mut hasher = Sha512::new();
    hasher.update(HASH_TO_CURVE_DST);
    hasher.update([SUITE_BYTE]);
    hasher.update(G::element_to_bytes(public_key.element()));
    hasher.update(seed);
    let digest: [u8; 64] = hasher.finalize().into();
    G::hash_to_element(&digest)
}
