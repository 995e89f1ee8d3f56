//! Scoped chaos blocks.
//!
//! Pre-gate semantics: the trial runs once when the guard is acquired. If it
//! injects, acquisition fails and the body is never entered; otherwise the
//! body runs to completion untouched. Nothing is interrupted mid-execution
//! and release holds no resource.

use std::future::Future;

use crate::fault::ChaosException;
use crate::generator::ChaoticExceptionGenerator;

/// Guard for a block that passed its chaos trial.
///
/// Dropping the guard ends the scope.
#[must_use = "the guarded scope ends when the guard is dropped"]
#[derive(Debug)]
pub struct ChaosGuard<'a> {
    generator: &'a ChaoticExceptionGenerator,
}

impl ChaosGuard<'_> {
    /// Generator that admitted this scope.
    pub const fn generator(&self) -> &ChaoticExceptionGenerator {
        self.generator
    }
}

impl Drop for ChaosGuard<'_> {
    fn drop(&mut self) {
        tracing::trace!("leaving chaos context");
    }
}

impl ChaoticExceptionGenerator {
    /// Enters a chaos scope.
    ///
    /// ```rust
    /// use chaotic_core::ChaoticExceptionGenerator;
    ///
    /// let chaos = ChaoticExceptionGenerator::new(0.0)?;
    /// {
    ///     let _scope = chaos.chaos_context().expect("probability 0 never injects");
    ///     // guarded work
    /// }
    /// # Ok::<(), chaotic_core::ConfigError>(())
    /// ```
    pub fn chaos_context(&self) -> Result<ChaosGuard<'_>, ChaosException> {
        self.maybe_raise()?;
        tracing::trace!("entering chaos context");
        Ok(ChaosGuard { generator: self })
    }

    /// Runs `body` inside a chaos scope.
    pub fn in_chaos_context<R>(&self, body: impl FnOnce() -> R) -> Result<R, ChaosException> {
        let _guard = self.chaos_context()?;
        Ok(body())
    }

    /// Gates a future: the trial runs when the returned future is first
    /// polled, before `body` is polled.
    pub async fn in_chaos_context_async<F>(&self, body: F) -> Result<F::Output, ChaosException>
    where
        F: Future,
    {
        let _guard = self.chaos_context()?;
        Ok(body.await)
    }
}
