//! Falsification Tests: Category A - Decision Engine (F001-F010)

use std::cell::Cell;

use chaotic_core::{ChaosKind, ChaoticExceptionGenerator, ConfigError};

fn generator(probability: f64, seed: u64) -> ChaoticExceptionGenerator {
    ChaoticExceptionGenerator::builder()
        .probability(probability)
        .seed(seed)
        .build()
        .unwrap()
}

// =============================================================================
// F001-F004: Trial Bounds
// =============================================================================

/// F001: Probability 0.0 never injects
///
/// # Falsification Attempt
/// Run many trials across several seeds, look for any injection.
#[test]
fn f001_zero_probability_never_injects() {
    for seed in 0..20 {
        let chaos = generator(0.0, seed);
        for _ in 0..500 {
            assert!(
                chaos.maybe_raise().is_ok(),
                "F001 FALSIFIED: probability 0.0 injected (seed {seed})"
            );
        }
    }
}

/// F002: Probability 1.0 always injects
///
/// # Falsification Attempt
/// Run many trials across several seeds, look for any miss.
#[test]
fn f002_full_probability_always_injects() {
    for seed in 0..20 {
        let chaos = generator(1.0, seed);
        for _ in 0..500 {
            assert!(
                chaos.maybe_raise().is_err(),
                "F002 FALSIFIED: probability 1.0 did not inject (seed {seed})"
            );
        }
    }
}

/// F003: force_raise injects regardless of probability
#[test]
fn f003_force_raise_ignores_probability() {
    for probability in [0.0, 0.25, 1.0] {
        let chaos = generator(probability, 3);
        for _ in 0..100 {
            assert!(
                chaos.force_raise().is_err(),
                "F003 FALSIFIED: force_raise returned Ok at p={probability}"
            );
        }
    }
}

/// F004: Injected kinds are always drawn from the candidate set
#[test]
fn f004_kind_within_candidates() {
    let chaos = ChaoticExceptionGenerator::builder()
        .probability(1.0)
        .exception_types([ChaosKind::Network, ChaosKind::Timeout])
        .seed(17)
        .build()
        .unwrap();

    for _ in 0..500 {
        let fault = chaos.maybe_raise().unwrap_err();
        assert!(
            matches!(fault.kind(), ChaosKind::Network | ChaosKind::Timeout),
            "F004 FALSIFIED: unexpected kind {}",
            fault.kind()
        );
    }
}

/// F005: Every candidate kind is eventually selected
///
/// # Falsification Attempt
/// With uniform selection over five kinds, 1000 draws must cover all.
#[test]
fn f005_all_candidates_reachable() {
    let chaos = generator(1.0, 5);
    let mut seen = Vec::new();
    for _ in 0..1_000 {
        let fault = chaos.maybe_raise().unwrap_err();
        if !seen.contains(fault.kind()) {
            seen.push(fault.kind().clone());
        }
    }
    assert_eq!(
        seen.len(),
        ChaosKind::builtin().len(),
        "F005 FALSIFIED: some kinds never selected: {seen:?}"
    );
}

// =============================================================================
// F006-F008: Construction Errors
// =============================================================================

/// F006: Out-of-range probabilities fail at construction
#[test]
fn f006_invalid_probability_fails_construction() {
    for probability in [1.5, -0.1] {
        let result = ChaoticExceptionGenerator::new(probability);
        assert!(
            matches!(result, Err(ConfigError::InvalidProbability(p)) if p == probability),
            "F006 FALSIFIED: p={probability} was accepted"
        );
    }
}

/// F007: Empty candidate set fails at construction
#[test]
fn f007_empty_kinds_fail_construction() {
    let result = ChaoticExceptionGenerator::builder()
        .probability(0.5)
        .exception_types(Vec::<ChaosKind>::new())
        .build();
    assert!(
        matches!(result, Err(ConfigError::NoCandidateKinds)),
        "F007 FALSIFIED: empty kind set accepted"
    );
}

/// F008: A fresh generator has run no trials
#[test]
fn f008_stats_start_at_zero() {
    let chaos = generator(0.5, 1);
    let stats = chaos.stats();
    assert_eq!(stats.trials, 0, "F008 FALSIFIED: trials before first call");
    assert_eq!(stats.faults_injected, 0);
}

// =============================================================================
// F009-F010: Scoped Pre-Gate
// =============================================================================

/// F009: A scope that injects never enters its body
#[test]
fn f009_injected_scope_skips_body() {
    let chaos = generator(1.0, 9);
    let entered = Cell::new(0);

    for _ in 0..100 {
        let result = chaos.in_chaos_context(|| entered.set(entered.get() + 1));
        assert!(result.is_err());
    }
    assert_eq!(entered.get(), 0, "F009 FALSIFIED: body ran after injection");

    match chaos.chaos_context() {
        Ok(_guard) => panic!("F009 FALSIFIED: guard acquired at p=1.0"),
        Err(fault) => assert!(!fault.message().is_empty()),
    }
}

/// F010: A scope that does not inject runs its body to completion
#[test]
fn f010_admitted_scope_completes() {
    let chaos = generator(0.0, 10);
    let completed = Cell::new(0);

    for _ in 0..100 {
        let guard = chaos.chaos_context();
        assert!(guard.is_ok(), "F010 FALSIFIED: exception escaped at p=0.0");
        completed.set(completed.get() + 1);
        drop(guard);
    }
    assert_eq!(completed.get(), 100);
}
