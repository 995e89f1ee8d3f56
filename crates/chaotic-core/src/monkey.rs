//! Invocation adapters.
//!
//! # Reference
//! Netflix. (2012). Chaos Monkey. GitHub.
//! <https://github.com/Netflix/chaosmonkey>
//!
//! [`ChaosMonkey`] wraps functions with a trial that runs before every call:
//! when it injects, the wrapped function is never invoked. When it does not,
//! the function receives its arguments unchanged and its result is forwarded
//! unchanged. [`random_exception`] is the one-shot inline form.

use std::collections::HashMap;

use crate::error::{ChaosError, ConfigError};
use crate::fault::ChaosException;
use crate::generator::{ChaoticExceptionGenerator, GeneratorBuilder};
use crate::kind::ChaosKind;

/// A generator bound to wrapped functions.
///
/// ```rust
/// use chaotic_core::{ChaosKind, ChaosMonkey};
///
/// let api_call = ChaosMonkey::builder(0.0)
///     .exception_types([ChaosKind::Network])
///     .build()?
///     .wrap_with(|user: &str| format!("API response for: {user}"));
///
/// assert_eq!(api_call("user1").unwrap(), "API response for: user1");
/// # Ok::<(), chaotic_core::ConfigError>(())
/// ```
#[derive(Debug)]
pub struct ChaosMonkey {
    generator: ChaoticExceptionGenerator,
}

impl ChaosMonkey {
    /// Monkey over all built-in kinds with default messages.
    pub fn new(probability: f64) -> Result<Self, ConfigError> {
        Self::builder(probability).build()
    }

    /// Creates a builder with the given probability.
    #[must_use]
    pub fn builder(probability: f64) -> ChaosMonkeyBuilder {
        ChaosMonkeyBuilder {
            inner: ChaoticExceptionGenerator::builder().probability(probability),
        }
    }

    /// Binds an existing generator.
    #[must_use]
    pub const fn from_generator(generator: ChaoticExceptionGenerator) -> Self {
        Self { generator }
    }

    /// Bound generator.
    #[must_use]
    pub const fn generator(&self) -> &ChaoticExceptionGenerator {
        &self.generator
    }

    /// Runs one trial, then `f` if it did not inject.
    pub fn call<R>(&self, f: impl FnOnce() -> R) -> Result<R, ChaosException> {
        self.generator.maybe_raise()?;
        Ok(f())
    }

    /// Wraps a nullary function.
    pub fn wrap<F, R>(self, f: F) -> impl Fn() -> Result<R, ChaosException>
    where
        F: Fn() -> R,
    {
        move || self.call(&f)
    }

    /// Wraps a unary function. Pass a tuple for several arguments.
    pub fn wrap_with<A, F, R>(self, f: F) -> impl Fn(A) -> Result<R, ChaosException>
    where
        F: Fn(A) -> R,
    {
        move |args| self.call(|| f(args))
    }

    /// Wraps a fallible function; its own errors propagate unchanged and
    /// injected faults convert into its error type.
    pub fn wrap_fallible<A, F, R, E>(self, f: F) -> impl Fn(A) -> Result<R, E>
    where
        F: Fn(A) -> Result<R, E>,
        E: From<ChaosException>,
    {
        move |args| {
            self.generator.maybe_raise()?;
            f(args)
        }
    }
}

/// Builder for [`ChaosMonkey`].
#[derive(Debug, Clone)]
pub struct ChaosMonkeyBuilder {
    inner: GeneratorBuilder,
}

impl ChaosMonkeyBuilder {
    /// Restricts the candidate kinds.
    #[must_use]
    pub fn exception_types<I, K>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<ChaosKind>,
    {
        self.inner = self.inner.exception_types(kinds);
        self
    }

    /// Overrides messages for one kind.
    #[must_use]
    pub fn message<K, M, S>(mut self, kind: K, messages: M) -> Self
    where
        K: Into<ChaosKind>,
        M: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner = self.inner.message(kind, messages);
        self
    }

    /// Seeds the random source.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.inner = self.inner.seed(seed);
        self
    }

    /// Validates the settings and builds the monkey.
    pub fn build(self) -> Result<ChaosMonkey, ConfigError> {
        self.inner.build().map(ChaosMonkey::from_generator)
    }
}

/// Decorator factory: one generator, built now, for the function it wraps.
///
/// ```rust
/// use chaotic_core::{chaos_monkey, ChaosKind};
///
/// let flaky = chaos_monkey(1.0, Some(vec![ChaosKind::Database]), None, Some(42))?
///     .wrap(|| "unreachable");
///
/// assert!(flaky().unwrap_err().is_database());
/// # Ok::<(), chaotic_core::ConfigError>(())
/// ```
pub fn chaos_monkey(
    probability: f64,
    exception_types: Option<Vec<ChaosKind>>,
    custom_messages: Option<HashMap<ChaosKind, Vec<String>>>,
    seed: Option<u64>,
) -> Result<ChaosMonkey, ConfigError> {
    let mut builder = ChaoticExceptionGenerator::builder()
        .probability(probability)
        .maybe_seed(seed);
    if let Some(kinds) = exception_types {
        builder = builder.exception_types(kinds);
    }
    if let Some(messages) = custom_messages {
        builder = builder.custom_messages(messages);
    }
    builder.build().map(ChaosMonkey::from_generator)
}

/// One-shot trial with a transient, default-catalog generator.
///
/// ```rust
/// use chaotic_core::{random_exception, ChaosError};
///
/// assert!(random_exception(0.0, None).is_ok());
/// assert!(matches!(random_exception(1.0, None), Err(ChaosError::Fault(_))));
/// assert!(matches!(random_exception(2.0, None), Err(ChaosError::Config(_))));
/// ```
pub fn random_exception(
    probability: f64,
    exception_types: Option<Vec<ChaosKind>>,
) -> Result<(), ChaosError> {
    let mut builder = ChaoticExceptionGenerator::builder().probability(probability);
    if let Some(kinds) = exception_types {
        builder = builder.exception_types(kinds);
    }
    builder.build()?.maybe_raise()?;
    Ok(())
}
