//! Injected randomness capability
//!
//! Salts and generated identifiers are drawn through an explicit
//! `RandomSource` rather than a process-wide generator, so tests can supply
//! a deterministic source and a replicated host can supply a
//! consensus-safe seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Alphabet used for salts and generated identifiers.
pub const ALPHANUMERIC: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Source of random alphanumeric strings.
pub trait RandomSource: Send {
    /// Produce a fresh string of `len` characters from [`ALPHANUMERIC`].
    fn alphanumeric(&mut self, len: usize) -> String;
}

fn sample_alphanumeric<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| {
            let idx = rng.random_range(0..ALPHANUMERIC.len());
            ALPHANUMERIC[idx] as char
        })
        .collect()
}

/// OS-entropy-backed source for hosts without replay requirements.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn alphanumeric(&mut self, len: usize) -> String {
        sample_alphanumeric(&mut rand::rng(), len)
    }
}

/// Deterministic source seeded from a host-supplied value.
///
/// Two instances with the same seed produce identical sequences, which
/// preserves deterministic replay on replicated hosts and makes generated
/// identifiers assertable in tests.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn alphanumeric(&mut self, len: usize) -> String {
        sample_alphanumeric(&mut self.rng, len)
    }
}

// ============================================================================
// TESTS
// ============================================================================
