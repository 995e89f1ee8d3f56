//! Explicit, injectable random source.
//!
//! Each generator owns its own stream, so two sources with the same seed
//! produce identical draws regardless of randomness consumed elsewhere in
//! the process. Unseeded sources pick a seed from OS entropy and remember it,
//! so any run can be replayed.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

struct Inner {
    rng: StdRng,
    draws: u64,
}

/// Seeded random source shared by the trial and selection steps.
pub struct ChaosRng {
    seed: u64,
    seeded: bool,
    inner: Mutex<Inner>,
}

impl ChaosRng {
    /// Deterministic source for `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::build(seed, true)
    }

    /// Source seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::build(rand::rng().random(), false)
    }

    /// Seeded when `seed` is given, entropy otherwise.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }

    fn build(seed: u64, seeded: bool) -> Self {
        Self {
            seed,
            seeded,
            inner: Mutex::new(Inner {
                rng: StdRng::seed_from_u64(seed),
                draws: 0,
            }),
        }
    }

    /// Seed in use (explicit or entropy-derived).
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Whether the caller supplied the seed.
    #[must_use]
    pub const fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Number of values drawn so far.
    #[must_use]
    pub fn draws(&self) -> u64 {
        self.inner.lock().draws
    }

    /// Uniform draw in `[0, 1)`.
    pub fn next_f64(&self) -> f64 {
        let mut inner = self.inner.lock();
        inner.draws += 1;
        inner.rng.random::<f64>()
    }

    /// Uniform index in `0..len`. Always consumes one draw; returns 0 when
    /// `len` is 0 or 1.
    pub fn next_index(&self, len: usize) -> usize {
        let mut inner = self.inner.lock();
        inner.draws += 1;
        inner.rng.random_range(0..len.max(1))
    }
}

impl std::fmt::Debug for ChaosRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChaosRng")
            .field("seed", &self.seed)
            .field("seeded", &self.seeded)
            .field("draws", &self.draws())
            .finish()
    }
}
