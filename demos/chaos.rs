// Examples are allowed to use expect/unwrap for simplicity
#![allow(clippy::expect_used, clippy::unwrap_used)]

//! Chaotic Fault Injection Example
//!
//! Walks through every invocation surface: one-shot faults, wrapped
//! functions, a seeded generator, scoped blocks, custom messages, and a
//! caller-side retry loop.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example chaos
//!
//! # Show trial-level decisions
//! RUST_LOG=chaotic_core=debug cargo run --example chaos
//! ```

use std::collections::HashMap;
use std::thread;
use std::time::Duration;

use chaotic::prelude::*;
use tracing_subscriber::EnvFilter;

fn basic_usage() {
    println!("=== Basic Usage ===");

    println!("1. Force a random fault:");
    if let Err(err) = random_exception(1.0, None) {
        report("   Caught", &err);
    }

    println!("\n2. Maybe inject a fault (50% chance):");
    for attempt in 1..=5 {
        match random_exception(0.5, None) {
            Ok(()) => println!("   Attempt {attempt}: no fault"),
            Err(err) => report(&format!("   Attempt {attempt}: caught"), &err),
        }
    }
}

fn decorator() -> anyhow::Result<()> {
    println!("\n=== Wrapped Functions ===");

    let unreliable = ChaosMonkey::new(0.3)?.wrap(|| "Function executed successfully!");
    let network_operation = chaos_monkey(0.5, Some(vec![ChaosKind::Network]), None, None)?
        .wrap(|| "Network operation completed!");

    println!("1. Unreliable function (30% failure rate):");
    for attempt in 1..=5 {
        match unreliable() {
            Ok(result) => println!("   Attempt {attempt}: {result}"),
            Err(fault) => println!("   Attempt {attempt}: failed with {}", fault.describe()),
        }
    }

    println!("\n2. Network operation (50% failure rate, network faults only):");
    for attempt in 1..=5 {
        match network_operation() {
            Ok(result) => println!("   Attempt {attempt}: {result}"),
            Err(fault) if fault.is_network() => {
                println!("   Attempt {attempt}: network failed: {fault}");
            }
            Err(fault) => println!("   Attempt {attempt}: unexpected {}", fault.describe()),
        }
    }
    Ok(())
}

fn generator() -> anyhow::Result<()> {
    println!("\n=== Seeded Generator ===");

    let chaos = ChaoticExceptionGenerator::builder()
        .probability(0.4)
        .exception_types([ChaosKind::Network, ChaosKind::Database])
        .seed(42)
        .build()?;

    for op in 1..=5 {
        match chaos.maybe_raise() {
            Ok(()) => println!("   Operation {op}: success"),
            Err(fault) => println!("   Operation {op}: failed with {}", fault.describe()),
        }
    }
    println!("   Stats: {:?} (replay with seed {})", chaos.stats(), chaos.seed());
    Ok(())
}

fn scoped() -> anyhow::Result<()> {
    println!("\n=== Scoped Blocks ===");

    let chaos = ChaoticExceptionGenerator::new(0.3)?;
    for i in 1..=3 {
        let outcome = chaos.in_chaos_context(|| {
            println!("   Inside context {i}: doing some work...");
            thread::sleep(Duration::from_millis(100));
            println!("   Context {i}: work completed");
        });
        if let Err(fault) = outcome {
            println!("   Context {i}: failed with {}", fault.describe());
        }
    }
    Ok(())
}

fn custom_messages() -> anyhow::Result<()> {
    println!("\n=== Custom Messages ===");

    let messages = HashMap::from([
        (
            ChaosKind::Network,
            vec![
                "The internet is broken again!".to_string(),
                "Network hamsters stopped running".to_string(),
                "WiFi is having an existential crisis".to_string(),
            ],
        ),
        (
            ChaosKind::Database,
            vec![
                "Database went on vacation".to_string(),
                "SQL queries are feeling antisocial".to_string(),
                "The database is having trust issues".to_string(),
            ],
        ),
    ]);

    let chaos = ChaoticExceptionGenerator::builder()
        .probability(1.0)
        .exception_types([ChaosKind::Network, ChaosKind::Database])
        .custom_messages(messages)
        .build()?;

    for i in 1..=3 {
        if let Err(fault) = chaos.force_raise() {
            println!("   Error {i}: {}", fault.describe());
        }
    }
    Ok(())
}

fn resilience() -> anyhow::Result<()> {
    println!("\n=== Testing Resilience ===");

    let api_call = chaos_monkey(0.2, Some(vec![ChaosKind::Network]), None, None)?
        .wrap_with(|data: &str| format!("API response for: {data}"));

    let resilient_api_call = |data: &'static str| -> Result<String, ChaosException> {
        const MAX_RETRIES: u32 = 3;
        let mut attempt = 0;
        loop {
            attempt += 1;
            match api_call(data) {
                Ok(response) => return Ok(response),
                Err(fault) if attempt < MAX_RETRIES => {
                    println!("   Attempt {attempt} failed: {fault}");
                    thread::sleep(Duration::from_millis(100 * u64::from(attempt)));
                }
                Err(fault) => return Err(fault),
            }
        }
    };

    for data in ["user1", "user2", "user3", "user4", "user5"] {
        match resilient_api_call(data) {
            Ok(result) => println!("   Success: {result}"),
            Err(fault) => println!("   Final failure for {data}: {}", fault.describe()),
        }
    }
    Ok(())
}

fn report(prefix: &str, err: &ChaosError) {
    match err.as_fault() {
        Some(fault) => println!("{prefix} {}", fault.describe()),
        None => println!("{prefix} {err}"),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chaotic_core=error")),
        )
        .init();

    println!("Chaotic Fault Injection - Example Usage\n{}", "=".repeat(50));

    basic_usage();
    decorator()?;
    generator()?;
    scoped()?;
    custom_messages()?;
    resilience()?;

    println!("\n{}", "=".repeat(50));
    println!("Examples completed!");
    println!("Remember: in production, use much lower probabilities (0.01-0.05)!");
    tracing::info!("demo finished");
    Ok(())
}
