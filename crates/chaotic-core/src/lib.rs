//! # chaotic-core
//!
//! Seeded, probabilistic fault injection for resilience testing.
//!
//! This crate provides:
//! - **Fault taxonomy**: [`ChaosKind`] tags carried by one [`ChaosException`] type
//! - **Message catalog**: per-kind failure messages with caller overrides
//! - **Decision engine**: [`ChaoticExceptionGenerator`] (`maybe_raise`,
//!   `force_raise`, `chaos_context`)
//! - **Adapters**: [`ChaosMonkey`] function wrapping and [`random_exception`]
//!
//! ## Iron Lotus Framework
//!
//! - **Poka-Yoke** (ポカヨケ): Invalid configuration fails at construction
//! - **Genchi Genbutsu** (現地現物): Every run is replayable from its seed
//!
//! ## Example
//!
//! ```rust
//! use chaotic_core::{ChaosKind, ChaoticExceptionGenerator};
//!
//! let chaos = ChaoticExceptionGenerator::builder()
//!     .probability(0.4)
//!     .exception_types([ChaosKind::Network, ChaosKind::Database])
//!     .seed(42)
//!     .build()?;
//!
//! for _ in 0..5 {
//!     match chaos.maybe_raise() {
//!         Ok(()) => {}
//!         Err(fault) if fault.is_network() => {}
//!         Err(fault) => assert!(fault.is_database()),
//!     }
//! }
//! # Ok::<(), chaotic_core::ConfigError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod config;
pub mod context;
pub mod error;
pub mod fault;
pub mod generator;
pub mod kind;
pub mod monkey;
pub mod rng;
pub mod stats;

pub use catalog::{FALLBACK_MESSAGE, MessageCatalog};
pub use config::ChaosConfig;
pub use context::ChaosGuard;
pub use error::{ChaosError, ConfigError, Result};
pub use fault::ChaosException;
pub use generator::{ChaoticExceptionGenerator, DEFAULT_PROBABILITY, GeneratorBuilder};
pub use kind::ChaosKind;
pub use monkey::{ChaosMonkey, ChaosMonkeyBuilder, chaos_monkey, random_exception};
pub use rng::ChaosRng;
pub use stats::ChaosStats;
