//! stage/strip_diacritics.rs – canonical decomposition, mark removal,
//! recomposition.
//!
//! Runs after replacement, never before: a table source that is itself a
//! base-plus-mark composition (İ, ї, ặ, …) must still exist when the scan
//! looks for it. Whatever accents the table did not rewrite are handled here
//! by decomposing (NFD), dropping every nonspacing mark, and recomposing
//! (NFC), which reduces `ÿ` to `y` and `č` to `c` without any table entry.

use std::borrow::Cow;

use crate::{
    context::Context,
    stage::{Stage, StageError},
    unicode::{NFC, NFD, is_combining_mark},
};

/// Removes diacritical marks via NFD, filtering Mn, then NFC.
pub struct StripDiacritics;

impl Stage for StripDiacritics {
    fn name(&self) -> &'static str {
        "strip_diacritics"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        if text.is_ascii() {
            return Ok(false);
        }
        Ok(NFD.normalize(text).chars().any(is_combining_mark))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if text.is_ascii() {
            return Ok(text);
        }

        let mut stripped = String::with_capacity(text.len());
        let mut had_mark = false;
        for c in NFD.normalize(&text).chars() {
            if is_combining_mark(c) {
                had_mark = true;
            } else {
                stripped.push(c);
            }
        }

        if !had_mark {
            return Ok(text);
        }
        Ok(Cow::Owned(NFC.normalize(&stripped).into_owned()))
    }
}
