//! Popperian Falsification Tests for Chaotic
//!
//! # Reference
//! Popper, K. (1959). *The Logic of Scientific Discovery*. Routledge.
//!
//! Each test in this module attempts to falsify a specific claim about the
//! fault injector. A passing test means the claim survived the attempt.

// Allow test-specific patterns that are denied in production code
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod catalog;
mod decision;
mod determinism;
