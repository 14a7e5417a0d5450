//! Identity commitment
//!
//! Binds an owner's raw identity to a record without storing the raw
//! identity: only `commitment = H^rounds(raw_id ∥ salt)` and the salt are
//! persisted. The raw id arrives fresh on every call and is trusted as
//! authentic by this layer; signature verification is the platform's
//! responsibility.

use crate::random::RandomSource;
use sha1::{Digest, Sha1};

/// Derive a fresh per-record salt.
pub fn derive_salt(rng: &mut dyn RandomSource, len: usize) -> String {
    rng.alphanumeric(len)
}

/// One-way commitment over `raw_id ∥ salt`.
///
/// The SHA-1 digest is applied to its own raw (not hex) output `rounds`
/// times total; only the final digest is hex-encoded. Pure function.
pub fn commit(raw_id: &str, salt: &str, rounds: u32) -> String {
    let mut buf = Vec::with_capacity(raw_id.len() + salt.len());
    buf.extend_from_slice(raw_id.as_bytes());
    buf.extend_from_slice(salt.as_bytes());

    for _ in 0..rounds {
        buf = Sha1::digest(&buf).to_vec();
    }

    hex::encode(buf)
}

/// Recompute the commitment for a caller and compare. Fails closed: any
/// mismatch yields `false`. Comparison is by value only; timing-side-channel
/// hardening is out of scope at this layer.
pub fn verify(raw_id: &str, salt: &str, commitment: &str, rounds: u32) -> bool {
    commit(raw_id, salt, rounds) == commitment
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededRandom;
    use proptest::prelude::*;

    const ROUNDS: u32 = 100;

    #[test]
    fn commit_is_deterministic() {
        assert_eq!(commit("alice", "s4lt", ROUNDS), commit("alice", "s4lt", ROUNDS));
    }

    #[test]
    fn commit_is_hex_sha1_shaped() {
        let c = commit("alice", "s4lt", ROUNDS);
        assert_eq!(c.len(), 40);
        assert!(c.bytes().all(|b| b.is_ascii_hexdigit()));
    }

    #[test]
    fn commit_depends_on_salt() {
        assert_ne!(commit("alice", "salt-a", ROUNDS), commit("alice", "salt-b", ROUNDS));
    }

    #[test]
    fn commit_depends_on_rounds() {
        assert_ne!(commit("alice", "s4lt", 99), commit("alice", "s4lt", 100));
    }

    #[test]
    fn single_round_matches_plain_sha1() {
        let expected = hex::encode(Sha1::digest(b"alices4lt"));
        assert_eq!(commit("alice", "s4lt", 1), expected);
    }

    #[test]
    fn verify_accepts_the_committed_identity() {
        let c = commit("alice", "s4lt", ROUNDS);
        assert!(verify("alice", "s4lt", &c, ROUNDS));
    }

    #[test]
    fn verify_rejects_other_identities() {
        let c = commit("alice", "s4lt", ROUNDS);
        assert!(!verify("bob", "s4lt", &c, ROUNDS));
        assert!(!verify("alice", "other", &c, ROUNDS));
        assert!(!verify("alice", "s4lt", "not-a-commitment", ROUNDS));
    }

    #[test]
    fn derive_salt_draws_from_the_source() {
        let mut rng = SeededRandom::new(9);
        let salt = derive_salt(&mut rng, 8);
        assert_eq!(salt.len(), 8);
        assert!(salt.bytes().all(|b| crate::random::ALPHANUMERIC.contains(&b)));
    }

    proptest! {
        #[test]
        fn prop_verify_round_trips(raw in "[a-zA-Z0-9]{1,24}", salt in "[a-zA-Z0-9]{1,16}") {
            let c = commit(&raw, &salt, ROUNDS);
            prop_assert!(verify(&raw, &salt, &c, ROUNDS));
        }

        #[test]
        fn prop_verify_rejects_wrong_id(
            raw in "[a-z]{1,24}",
            other in "[A-Z]{1,24}",
            salt in "[a-zA-Z0-9]{1,16}",
        ) {
            // Disjoint alphabets guarantee raw != other.
            let c = commit(&raw, &salt, ROUNDS);
            prop_assert!(!verify(&other, &salt, &c, ROUNDS));
        }

        #[test]
        fn prop_commitment_is_fixed_width_hex(raw in ".{0,32}", salt in ".{0,16}") {
            let c = commit(&raw, &salt, ROUNDS);
            prop_assert_eq!(c.len(), 40);
            prop_assert!(c.bytes().all(|b| b.is_ascii_hexdigit()));
        }
    }
}
