//! Decision engine.
//!
//! Every entry point (direct call, wrapped function, scoped block) funnels
//! into [`ChaoticExceptionGenerator::maybe_fault`]: one Bernoulli trial, then
//! on success one draw to pick a kind and one draw to pick a message.
//!
//! # Determinism
//! For a fixed seed and call sequence the sequence of
//! `(injected?, kind, message)` decisions is exactly reproducible.

use crate::catalog::MessageCatalog;
use crate::config::ChaosConfig;
use crate::error::ConfigError;
use crate::fault::ChaosException;
use crate::kind::ChaosKind;
use crate::rng::ChaosRng;
use crate::stats::{ChaosStats, StatsCounters};

/// Default per-trial probability when none is configured.
pub const DEFAULT_PROBABILITY: f64 = 0.1;

/// Probabilistic fault generator.
///
/// ```rust
/// use chaotic_core::{ChaosKind, ChaoticExceptionGenerator};
///
/// let chaos = ChaoticExceptionGenerator::builder()
///     .probability(1.0)
///     .exception_types([ChaosKind::Network])
///     .message(ChaosKind::Network, ["link down"])
///     .seed(42)
///     .build()?;
///
/// let fault = chaos.maybe_raise().unwrap_err();
/// assert!(fault.is_network());
/// assert_eq!(fault.message(), "link down");
/// # Ok::<(), chaotic_core::ConfigError>(())
/// ```
#[derive(Debug)]
pub struct ChaoticExceptionGenerator {
    probability: f64,
    candidate_kinds: Vec<ChaosKind>,
    messages: MessageCatalog,
    rng: ChaosRng,
    stats: StatsCounters,
}

impl ChaoticExceptionGenerator {
    /// Generator over all built-in kinds with default messages.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidProbability`] outside `[0, 1]`.
    pub fn new(probability: f64) -> Result<Self, ConfigError> {
        Self::builder().probability(probability).build()
    }

    /// Creates a new generator builder.
    #[must_use]
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::new()
    }

    /// Builds a generator from a validated configuration.
    pub fn from_config(config: &ChaosConfig) -> Result<Self, ConfigError> {
        let mut builder = Self::builder().probability(config.probability);
        if let Some(kinds) = &config.exception_types {
            builder = builder.exception_types(kinds.iter().cloned());
        }
        for (kind, messages) in &config.custom_messages {
            builder = builder.message(kind.clone(), messages.iter().cloned());
        }
        if let Some(seed) = config.seed {
            builder = builder.seed(seed);
        }
        builder.build()
    }

    /// Runs one trial and returns the fault to inject, if any.
    pub fn maybe_fault(&self) -> Option<ChaosException> {
        let draw = self.rng.next_f64();
        let injected = draw < self.probability;
        self.stats.record_trial(injected);
        tracing::debug!(probability = self.probability, draw, injected, "chaos trial");

        injected.then(|| self.select())
    }

    /// Runs one trial; returns the injected fault as `Err`.
    pub fn maybe_raise(&self) -> Result<(), ChaosException> {
        match self.maybe_fault() {
            Some(fault) => Err(fault),
            None => Ok(()),
        }
    }

    /// Selects a kind and message without a trial.
    pub fn next_fault(&self) -> ChaosException {
        self.stats.record_forced();
        self.select()
    }

    /// Injects unconditionally, regardless of probability.
    pub fn force_raise(&self) -> Result<(), ChaosException> {
        Err(self.next_fault())
    }

    fn select(&self) -> ChaosException {
        let kind_index = self.rng.next_index(self.candidate_kinds.len());
        let kind = &self.candidate_kinds[kind_index];
        let message_index = self.rng.next_index(self.messages.len_for(kind));
        let message = self.messages.message_at(kind, message_index);

        tracing::warn!(kind = %kind, fault_message = message, "injecting chaos fault");
        ChaosException::new(kind.clone(), message)
    }

    /// Per-trial probability.
    #[must_use]
    pub const fn probability(&self) -> f64 {
        self.probability
    }

    /// Candidate kinds, in selection order.
    #[must_use]
    pub fn candidate_kinds(&self) -> &[ChaosKind] {
        &self.candidate_kinds
    }

    /// Message catalog.
    #[must_use]
    pub const fn messages(&self) -> &MessageCatalog {
        &self.messages
    }

    /// Seed of the random source (explicit or entropy-derived).
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Counter snapshot.
    #[must_use]
    pub fn stats(&self) -> ChaosStats {
        self.stats.snapshot()
    }

    /// Zeroes the counters. The random stream is not rewound.
    pub fn reset_stats(&self) {
        self.stats.reset();
    }
}

/// Builder for [`ChaoticExceptionGenerator`].
///
/// Validation happens in [`build`](Self::build), so invalid settings fail
/// before any trial can run.
#[derive(Debug, Clone)]
pub struct GeneratorBuilder {
    probability: f64,
    exception_types: Option<Vec<ChaosKind>>,
    custom_messages: Vec<(ChaosKind, Vec<String>)>,
    seed: Option<u64>,
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorBuilder {
    /// Builder with default probability and all built-in kinds.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            probability: DEFAULT_PROBABILITY,
            exception_types: None,
            custom_messages: Vec::new(),
            seed: None,
        }
    }

    /// Sets the per-trial probability.
    #[must_use]
    pub const fn probability(mut self, probability: f64) -> Self {
        self.probability = probability;
        self
    }

    /// Restricts the candidate kinds. Duplicates are dropped, keeping the
    /// first occurrence.
    #[must_use]
    pub fn exception_types<I, K>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<ChaosKind>,
    {
        self.exception_types = Some(kinds.into_iter().map(Into::into).collect());
        self
    }

    /// Overrides the messages for one kind.
    #[must_use]
    pub fn message<K, M, S>(mut self, kind: K, messages: M) -> Self
    where
        K: Into<ChaosKind>,
        M: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let kind = kind.into();
        let messages = messages.into_iter().map(Into::into).collect();
        self.custom_messages.retain(|(k, _)| *k != kind);
        self.custom_messages.push((kind, messages));
        self
    }

    /// Overrides messages for several kinds.
    #[must_use]
    pub fn custom_messages<I, K, M, S>(self, catalog: I) -> Self
    where
        I: IntoIterator<Item = (K, M)>,
        K: Into<ChaosKind>,
        M: IntoIterator<Item = S>,
        S: Into<String>,
    {
        catalog
            .into_iter()
            .fold(self, |builder, (kind, messages)| builder.message(kind, messages))
    }

    /// Seeds the random source for reproducible runs.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Seeds the random source when `seed` is `Some`.
    #[must_use]
    pub const fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Validates the settings and builds the generator.
    ///
    /// # Errors
    /// - [`ConfigError::InvalidProbability`] outside `[0, 1]`
    /// - [`ConfigError::NoCandidateKinds`] for an empty kind set
    /// - [`ConfigError::EmptyMessages`] for an empty override list
    pub fn build(self) -> Result<ChaoticExceptionGenerator, ConfigError> {
        let probability = ConfigError::check_probability(self.probability)?;

        let candidate_kinds = match self.exception_types {
            Some(kinds) => dedup_kinds(kinds),
            None => ChaosKind::builtin().to_vec(),
        };
        if candidate_kinds.is_empty() {
            return Err(ConfigError::NoCandidateKinds);
        }

        let messages = MessageCatalog::with_overrides(self.custom_messages)?;
        for kind in messages.overrides().keys() {
            if !candidate_kinds.contains(kind) {
                tracing::debug!(kind = %kind, "custom messages for a kind that is never selected");
            }
        }

        let rng = ChaosRng::new(self.seed);
        tracing::info!(
            probability,
            kinds = candidate_kinds.len(),
            seed = rng.seed(),
            seeded = rng.is_seeded(),
            "chaos generator ready"
        );

        Ok(ChaoticExceptionGenerator {
            probability,
            candidate_kinds,
            messages,
            rng,
            stats: StatsCounters::default(),
        })
    }
}

fn dedup_kinds(kinds: Vec<ChaosKind>) -> Vec<ChaosKind> {
    let mut unique: Vec<ChaosKind> = Vec::with_capacity(kinds.len());
    for kind in kinds {
        if !unique.contains(&kind) {
            unique.push(kind);
        }
    }
    unique
}
