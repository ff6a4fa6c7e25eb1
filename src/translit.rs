//! Public entry points.
//!
//! A [`Transliterator`] holds the merged table and the fixed stage pipeline
//! for one set of options; it is `Send + Sync` and cheap to reuse across
//! calls and threads. [`transliterate`] and [`transliterate_with`] are
//! one-shot conveniences over it.

use std::borrow::Cow;

use thiserror::Error;

use crate::{
    context::Context,
    pipeline::Pipeline,
    stage::{
        StageError, normalize::Compose, replace::Replace, strip_diacritics::StripDiacritics,
        unify_dashes::UnifyDashes,
    },
};

#[derive(Debug, Error)]
pub enum TranslitError {
    #[error("stage error: {0}")]
    Stage(#[from] StageError),
}

/// Caller-facing knobs. All fields default to "builtin behaviour only".
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Highest-precedence replacement entries, applied in order; a later
    /// pair overwrites an earlier pair with the same source.
    pub custom_replacements: Vec<(String, String)>,
    /// BCP-47-style tag selecting a locale overlay. Unknown tags resolve to
    /// no overlay.
    pub locale: Option<String>,
    /// Sources excluded from the merged table for this configuration.
    pub preserve: Vec<String>,
}

pub struct Transliterator {
    ctx: Context,
    pipeline: Pipeline,
}

impl Transliterator {
    pub fn builder() -> TransliteratorBuilder {
        TransliteratorBuilder::default()
    }

    /// Builtin dataset only, no overlays.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn from_options(options: &Options) -> Self {
        let ctx = Context::from_options(options);
        let pipeline = Pipeline::new(vec![
            Box::new(Compose),
            Box::new(Replace),
            Box::new(StripDiacritics),
            Box::new(UnifyDashes),
        ]);
        Self { ctx, pipeline }
    }

    /// Transliterate `text`. Unmapped code points pass through unchanged;
    /// ASCII-only input is returned borrowed.
    pub fn transliterate<'a>(&self, text: &'a str) -> Result<Cow<'a, str>, TranslitError> {
        let result = self.pipeline.process(Cow::Borrowed(text), &self.ctx)?;
        Ok(result)
    }
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Default)]
pub struct TransliteratorBuilder {
    options: Options,
}

impl TransliteratorBuilder {
    pub fn locale(mut self, tag: impl Into<String>) -> Self {
        self.options.locale = Some(tag.into());
        self
    }

    /// Add one custom replacement. Later calls with the same source win.
    pub fn replacement(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.options
            .custom_replacements
            .push((source.into(), target.into()));
        self
    }

    pub fn replacements<S, T>(mut self, pairs: impl IntoIterator<Item = (S, T)>) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        self.options
            .custom_replacements
            .extend(pairs.into_iter().map(|(s, t)| (s.into(), t.into())));
        self
    }

    /// Exclude a source from the merged table.
    pub fn preserve(mut self, source: impl Into<String>) -> Self {
        self.options.preserve.push(source.into());
        self
    }

    pub fn build(self) -> Transliterator {
        Transliterator::from_options(&self.options)
    }
}

/// One-shot transliteration with builtin behaviour only.
pub fn transliterate(text: &str) -> Result<String, TranslitError> {
    Ok(Transliterator::new().transliterate(text)?.into_owned())
}

/// One-shot transliteration with explicit options.
pub fn transliterate_with(text: &str, options: &Options) -> Result<String, TranslitError> {
    Ok(Transliterator::from_options(options)
        .transliterate(text)?
        .into_owned())
}
