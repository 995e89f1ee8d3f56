//! Error types for chaotic-core.
//!
//! Per Iron Lotus Framework: configuration problems surface at construction
//! time, never mid-operation. Injected faults are the product, not a failure
//! of the engine, and are carried as [`ChaosException`].

use crate::fault::ChaosException;
use crate::kind::ChaosKind;

/// Result type alias for operations that may fail on configuration or
/// return an injected fault.
pub type Result<T> = std::result::Result<T, ChaosError>;

/// Configuration errors, raised before any trial can run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Probability outside `[0, 1]` (or NaN).
    #[error("invalid probability {0}: must be within [0.0, 1.0]")]
    InvalidProbability(f64),

    /// Candidate kind set is empty.
    #[error("no candidate exception kinds configured")]
    NoCandidateKinds,

    /// A custom catalog entry has no messages.
    #[error("custom message list for '{0}' is empty")]
    EmptyMessages(ChaosKind),

    /// Configuration file could not be read.
    #[error("failed to read config: {0}")]
    Read(String),

    /// Configuration file could not be parsed.
    #[error("failed to parse config: {0}")]
    Parse(String),
}

impl ConfigError {
    /// Validates a probability, returning it unchanged when in range.
    pub fn check_probability(probability: f64) -> std::result::Result<f64, Self> {
        if (0.0..=1.0).contains(&probability) {
            Ok(probability)
        } else {
            Err(Self::InvalidProbability(probability))
        }
    }
}

/// Top-level error for one-shot entry points such as
/// [`random_exception`](crate::monkey::random_exception).
#[derive(Debug, thiserror::Error)]
pub enum ChaosError {
    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A fault was injected.
    #[error(transparent)]
    Fault(#[from] ChaosException),
}

impl ChaosError {
    /// Returns true if this is an injected fault.
    #[must_use]
    pub const fn is_fault(&self) -> bool {
        matches!(self, Self::Fault(_))
    }

    /// Returns the injected fault, if any.
    #[must_use]
    pub const fn as_fault(&self) -> Option<&ChaosException> {
        match self {
            Self::Fault(fault) => Some(fault),
            Self::Config(_) => None,
        }
    }
}
