//! Injection statistics.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Snapshot of a generator's counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChaosStats {
    /// Bernoulli trials performed.
    pub trials: u64,
    /// Faults injected by trials.
    pub faults_injected: u64,
    /// Faults injected unconditionally via `force_raise`.
    pub forced: u64,
}

impl ChaosStats {
    /// Observed fraction of trials that injected a fault.
    pub fn actual_fault_rate(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.faults_injected as f64 / self.trials as f64
        }
    }
}

/// Live counters owned by a generator.
#[derive(Debug, Default)]
pub(crate) struct StatsCounters {
    trials: AtomicU64,
    faults_injected: AtomicU64,
    forced: AtomicU64,
}

impl StatsCounters {
    pub(crate) fn record_trial(&self, injected: bool) {
        self.trials.fetch_add(1, Ordering::Relaxed);
        if injected {
            self.faults_injected.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub(crate) fn record_forced(&self) {
        self.forced.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> ChaosStats {
        ChaosStats {
            trials: self.trials.load(Ordering::Relaxed),
            faults_injected: self.faults_injected.load(Ordering::Relaxed),
            forced: self.forced.load(Ordering::Relaxed),
        }
    }

    pub(crate) fn reset(&self) {
        self.trials.store(0, Ordering::Relaxed);
        self.faults_injected.store(0, Ordering::Relaxed);
        self.forced.store(0, Ordering::Relaxed);
    }
}
