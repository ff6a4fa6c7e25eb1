//! Core transliteration stage abstraction.
//!
//! A [`Stage`] is one step of the fixed pipeline (NFC → replace → strip
//! diacritics → unify dashes). Every stage takes and returns `Cow<str>`:
//! `needs_apply` is a cheap pre-check that lets the pipeline skip a stage
//! entirely, so text that needs no work at a stage flows through borrowed.
//! ASCII input crosses the whole pipeline without allocating once.

pub mod normalize;
pub mod replace;
pub mod strip_diacritics;
pub mod unify_dashes;

use std::borrow::Cow;

use thiserror::Error;

use crate::context::Context;

/// Public error type for every stage.
///
/// No current stage can fail (transliteration has no invalid text inputs),
/// but the trait keeps the `Result` shape so a failing stage can be added
/// without breaking the pipeline contract.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("transliteration failed at stage `{0}`: {1}")]
    Failed(&'static str, String),
}

/// A single transliteration step.
pub trait Stage: Send + Sync {
    /// Human-readable name, used in error messages.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `Ok(false)` skips the whole stage.
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError>;

    /// Allocation-aware transformation. Must always be correct on its own;
    /// `needs_apply` is an optimization, not a precondition.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError>;
}
