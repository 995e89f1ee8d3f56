//! Fault taxonomy.
//!
//! Every injected fault is a [`ChaosException`](crate::ChaosException) tagged
//! with one [`ChaosKind`]. Callers catch broadly by matching the exception
//! type, or narrowly by inspecting its kind.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of an injected failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChaosKind {
    /// Network failure (timeouts, resets, DNS).
    Network,
    /// Database failure (lost connections, deadlocks).
    Database,
    /// Filesystem failure (missing files, full disks).
    Filesystem,
    /// Operation timed out.
    Timeout,
    /// Resource exhaustion (memory, handles, quotas).
    ResourceExhausted,
    /// User-registered kind.
    Custom(Cow<'static, str>),
}

static BUILTIN: [ChaosKind; 5] = [
    ChaosKind::Network,
    ChaosKind::Database,
    ChaosKind::Filesystem,
    ChaosKind::Timeout,
    ChaosKind::ResourceExhausted,
];

impl ChaosKind {
    /// All built-in kinds, in their canonical order.
    #[must_use]
    pub fn builtin() -> &'static [Self] {
        &BUILTIN
    }

    /// Creates a user-registered kind.
    ///
    /// Names matching a built-in kind resolve to that kind.
    #[must_use]
    pub fn custom(name: impl Into<Cow<'static, str>>) -> Self {
        let name = name.into();
        match Self::parse_builtin(&name) {
            Some(kind) => kind,
            None => Self::Custom(name),
        }
    }

    /// Short name used in configuration and display.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Network => "network",
            Self::Database => "database",
            Self::Filesystem => "filesystem",
            Self::Timeout => "timeout",
            Self::ResourceExhausted => "resource_exhausted",
            Self::Custom(name) => name,
        }
    }

    /// Exception type name, as shown in reports.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Network => "NetworkChaosException",
            Self::Database => "DatabaseChaosException",
            Self::Filesystem => "FilesystemChaosException",
            Self::Timeout => "TimeoutChaosException",
            Self::ResourceExhausted => "ResourceExhaustedChaosException",
            Self::Custom(name) => name,
        }
    }

    /// Returns true for built-in kinds.
    #[must_use]
    pub const fn is_builtin(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    fn parse_builtin(name: &str) -> Option<Self> {
        match name {
            "network" => Some(Self::Network),
            "database" => Some(Self::Database),
            "filesystem" => Some(Self::Filesystem),
            "timeout" => Some(Self::Timeout),
            "resource_exhausted" => Some(Self::ResourceExhausted),
            _ => None,
        }
    }
}

impl fmt::Display for ChaosKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for ChaosKind {
    fn from(name: String) -> Self {
        Self::custom(name)
    }
}

impl From<&'static str> for ChaosKind {
    fn from(name: &'static str) -> Self {
        Self::custom(name)
    }
}

impl From<ChaosKind> for String {
    fn from(kind: ChaosKind) -> Self {
        match kind {
            ChaosKind::Custom(name) => name.into_owned(),
            other => other.name().to_string(),
        }
    }
}
