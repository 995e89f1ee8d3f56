//! Message catalog.
//!
//! Resolution order for a kind: caller override, then the built-in default
//! list for that kind, then [`FALLBACK_MESSAGE`]. The default table is a
//! process-wide constant; overrides are layered per catalog instance.

use std::collections::HashMap;

use crate::error::ConfigError;
use crate::kind::ChaosKind;

/// Message used when a kind has neither an override nor a default list.
pub const FALLBACK_MESSAGE: &str = "Chaos strikes: an unexpected failure was injected";

const NETWORK_MESSAGES: &[&str] = &[
    "Connection timed out",
    "Connection reset by peer",
    "Network is unreachable",
    "DNS resolution failed",
    "TLS handshake failed",
];

const DATABASE_MESSAGES: &[&str] = &[
    "Database connection lost",
    "Deadlock detected",
    "Query timeout exceeded",
    "Connection pool exhausted",
    "Transaction rolled back unexpectedly",
];

const FILESYSTEM_MESSAGES: &[&str] = &[
    "No such file or directory",
    "Permission denied",
    "No space left on device",
    "Read-only file system",
];

const TIMEOUT_MESSAGES: &[&str] = &[
    "Operation timed out",
    "Deadline exceeded",
    "Request took too long to complete",
];

const RESOURCE_MESSAGES: &[&str] = &[
    "Out of memory",
    "Too many open files",
    "Thread pool exhausted",
    "Quota exceeded",
];

/// Built-in default messages for `kind`, or `None` for custom kinds.
#[must_use]
pub fn default_messages(kind: &ChaosKind) -> Option<&'static [&'static str]> {
    match kind {
        ChaosKind::Network => Some(NETWORK_MESSAGES),
        ChaosKind::Database => Some(DATABASE_MESSAGES),
        ChaosKind::Filesystem => Some(FILESYSTEM_MESSAGES),
        ChaosKind::Timeout => Some(TIMEOUT_MESSAGES),
        ChaosKind::ResourceExhausted => Some(RESOURCE_MESSAGES),
        ChaosKind::Custom(_) => None,
    }
}

/// Per-kind candidate messages, immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCatalog {
    overrides: HashMap<ChaosKind, Vec<String>>,
}

impl MessageCatalog {
    /// Catalog with no overrides (defaults and fallback only).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from caller overrides.
    ///
    /// # Errors
    /// Returns [`ConfigError::EmptyMessages`] if any entry has no messages.
    pub fn with_overrides<I, K, M, S>(overrides: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, M)>,
        K: Into<ChaosKind>,
        M: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut catalog = Self::new();
        for (kind, messages) in overrides {
            let kind = kind.into();
            let messages: Vec<String> = messages.into_iter().map(Into::into).collect();
            if messages.is_empty() {
                return Err(ConfigError::EmptyMessages(kind));
            }
            catalog.overrides.insert(kind, messages);
        }
        Ok(catalog)
    }

    /// Returns true if `kind` has a caller-supplied entry.
    #[must_use]
    pub fn has_override(&self, kind: &ChaosKind) -> bool {
        self.overrides.contains_key(kind)
    }

    /// Number of candidate messages for `kind`. Always at least one.
    #[must_use]
    pub fn len_for(&self, kind: &ChaosKind) -> usize {
        if let Some(messages) = self.overrides.get(kind) {
            messages.len()
        } else if let Some(defaults) = default_messages(kind) {
            defaults.len()
        } else {
            1
        }
    }

    /// Message at `index` among the candidates for `kind`.
    ///
    /// `index` is taken modulo [`len_for`](Self::len_for).
    #[must_use]
    pub fn message_at(&self, kind: &ChaosKind, index: usize) -> &str {
        if let Some(messages) = self.overrides.get(kind) {
            &messages[index % messages.len()]
        } else if let Some(defaults) = default_messages(kind) {
            defaults[index % defaults.len()]
        } else {
            FALLBACK_MESSAGE
        }
    }

    /// All candidate messages for `kind`, in order.
    #[must_use]
    pub fn candidates(&self, kind: &ChaosKind) -> Vec<&str> {
        (0..self.len_for(kind))
            .map(|i| self.message_at(kind, i))
            .collect()
    }

    /// Caller overrides, keyed by kind.
    #[must_use]
    pub const fn overrides(&self) -> &HashMap<ChaosKind, Vec<String>> {
        &self.overrides
    }
}
