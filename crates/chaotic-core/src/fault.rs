//! Injected fault values.

use std::collections::BTreeMap;
use std::io;

use serde::{Deserialize, Serialize};

use crate::kind::ChaosKind;

/// A synthetic failure produced by the decision engine.
///
/// This is the common base for every [`ChaosKind`]: match on the type to
/// catch any injected fault, or on [`kind`](Self::kind) to catch one category.
///
/// ```rust
/// use chaotic_core::{ChaosException, ChaosKind};
///
/// let fault = ChaosException::new(ChaosKind::Network, "connection reset by peer")
///     .with_code(104)
///     .with_context("host", "db-1");
///
/// assert!(fault.is_network());
/// assert_eq!(fault.to_string(), "connection reset by peer");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ChaosException {
    kind: ChaosKind,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    code: Option<i64>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    context: BTreeMap<String, String>,
}

impl ChaosException {
    /// Creates a fault of the given kind.
    #[must_use]
    pub fn new(kind: ChaosKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            code: None,
            context: BTreeMap::new(),
        }
    }

    /// Attaches an error code.
    #[must_use]
    pub const fn with_code(mut self, code: i64) -> Self {
        self.code = Some(code);
        self
    }

    /// Attaches a context entry.
    #[must_use]
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Kind of this fault.
    #[must_use]
    pub const fn kind(&self) -> &ChaosKind {
        &self.kind
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Error code, if attached.
    #[must_use]
    pub const fn code(&self) -> Option<i64> {
        self.code
    }

    /// Structured context.
    #[must_use]
    pub const fn context(&self) -> &BTreeMap<String, String> {
        &self.context
    }

    /// Returns true if this fault is of `kind`.
    #[must_use]
    pub fn is(&self, kind: &ChaosKind) -> bool {
        self.kind == *kind
    }

    /// Returns true for [`ChaosKind::Network`].
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self.kind, ChaosKind::Network)
    }

    /// Returns true for [`ChaosKind::Database`].
    #[must_use]
    pub const fn is_database(&self) -> bool {
        matches!(self.kind, ChaosKind::Database)
    }

    /// Type name and message, e.g. `NetworkChaosException: Connection timeout`.
    #[must_use]
    pub fn describe(&self) -> String {
        format!("{}: {}", self.kind.type_name(), self.message)
    }

    /// `io::ErrorKind` this fault maps onto.
    #[must_use]
    pub const fn io_kind(&self) -> io::ErrorKind {
        match self.kind {
            ChaosKind::Network => io::ErrorKind::ConnectionReset,
            ChaosKind::Timeout => io::ErrorKind::TimedOut,
            ChaosKind::Filesystem => io::ErrorKind::NotFound,
            ChaosKind::ResourceExhausted => io::ErrorKind::OutOfMemory,
            ChaosKind::Database | ChaosKind::Custom(_) => io::ErrorKind::Other,
        }
    }
}

impl From<ChaosException> for io::Error {
    fn from(fault: ChaosException) -> Self {
        Self::new(fault.io_kind(), fault)
    }
}
