//! Falsification Tests: Category C - Taxonomy & Message Catalog (F016-F020)

use std::io;

use chaotic_core::catalog::default_messages;
use chaotic_core::{ChaosException, ChaosKind, ChaoticExceptionGenerator, FALLBACK_MESSAGE};

/// F016: Custom messages replace the built-in defaults
///
/// # Falsification Attempt
/// Supply `{Network: ["x", "y"]}` at p=1.0 and look for any other message.
#[test]
fn f016_custom_messages_only() {
    let chaos = ChaoticExceptionGenerator::builder()
        .probability(1.0)
        .exception_types([ChaosKind::Network])
        .message(ChaosKind::Network, ["x", "y"])
        .seed(16)
        .build()
        .unwrap();

    let mut seen_x = false;
    let mut seen_y = false;
    for _ in 0..500 {
        let fault = chaos.maybe_raise().unwrap_err();
        match fault.message() {
            "x" => seen_x = true,
            "y" => seen_y = true,
            other => panic!("F016 FALSIFIED: default message leaked: {other}"),
        }
    }
    assert!(seen_x && seen_y, "F016 FALSIFIED: selection is not uniform");
}

/// F017: Kinds without overrides keep their defaults
#[test]
fn f017_defaults_survive_partial_override() {
    let chaos = ChaoticExceptionGenerator::builder()
        .probability(1.0)
        .exception_types([ChaosKind::Database])
        .message(ChaosKind::Network, ["only network is overridden"])
        .seed(17)
        .build()
        .unwrap();

    let defaults = default_messages(&ChaosKind::Database).unwrap();
    for _ in 0..100 {
        let fault = chaos.maybe_raise().unwrap_err();
        assert!(
            defaults.iter().any(|m| *m == fault.message()),
            "F017 FALSIFIED: {} not a database default",
            fault.message()
        );
    }
}

/// F018: A custom kind without messages falls back to the generic message
#[test]
fn f018_custom_kind_generic_fallback() {
    let chaos = ChaoticExceptionGenerator::builder()
        .probability(1.0)
        .exception_types([ChaosKind::custom("payment")])
        .build()
        .unwrap();
    let fault = chaos.force_raise().unwrap_err();
    assert_eq!(fault.message(), FALLBACK_MESSAGE, "F018 FALSIFIED");
    assert_eq!(fault.kind().type_name(), "payment");
}

/// F019: Every kind is catchable broadly and narrowly
#[test]
fn f019_catch_by_base_and_kind() {
    let chaos = ChaoticExceptionGenerator::builder()
        .probability(1.0)
        .exception_types([ChaosKind::Network, ChaosKind::Database])
        .seed(19)
        .build()
        .unwrap();

    for _ in 0..100 {
        let err: Box<dyn std::error::Error> = Box::new(chaos.maybe_raise().unwrap_err());
        let fault = err
            .downcast_ref::<ChaosException>()
            .expect("F019 FALSIFIED: not catchable as ChaosException");
        assert!(
            fault.is(&ChaosKind::Network) || fault.is(&ChaosKind::Database),
            "F019 FALSIFIED: kind not identifiable"
        );
    }
}

/// F020: Faults carry into io::Error with a matching kind
#[test]
fn f020_io_error_interop() {
    fn read_config(chaos: &ChaoticExceptionGenerator) -> io::Result<String> {
        chaos.maybe_raise()?;
        Ok("contents".to_string())
    }

    let chaos = ChaoticExceptionGenerator::builder()
        .probability(1.0)
        .exception_types([ChaosKind::Filesystem])
        .build()
        .unwrap();
    let err = read_config(&chaos).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound, "F020 FALSIFIED");
    assert!(err.get_ref().is_some_and(|e| e.is::<ChaosException>()));
}
