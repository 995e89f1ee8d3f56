//! Chaotic: Seeded Fault Injection for Resilience Testing
//!
//! Part of the PAIML Sovereign AI Stack.
//!
//! # Quick Start
//!
//! ```rust
//! use chaotic::prelude::*;
//!
//! let chaos = ChaoticExceptionGenerator::new(0.0)?;
//! assert!(chaos.maybe_raise().is_ok());
//! # Ok::<(), ConfigError>(())
//! ```

pub use chaotic_core as core;

/// Prelude module for common imports.
pub mod prelude {
    pub use chaotic_core::{
        ChaosConfig, ChaosError, ChaosException, ChaosGuard, ChaosKind, ChaosMonkey, ChaosStats,
        ChaoticExceptionGenerator, ConfigError, chaos_monkey, random_exception,
    };
}
