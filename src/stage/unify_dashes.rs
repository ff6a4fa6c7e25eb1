//! stage/unify_dashes.rs – dash punctuation to ASCII hyphen-minus.
//!
//! Last stage; runs after diacritic stripping so the replacement and
//! stripping steps can never reintroduce or disturb a dash.

use std::borrow::Cow;

use crate::{
    context::Context,
    stage::{Stage, StageError},
    unicode::unify_dash_char,
};

/// Replaces every dash-class code point with `-`.
pub struct UnifyDashes;

impl Stage for UnifyDashes {
    fn name(&self) -> &'static str {
        "unify_dashes"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(text.chars().any(|c| unify_dash_char(c) != c))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !text.chars().any(|c| unify_dash_char(c) != c) {
            return Ok(text);
        }
        Ok(Cow::Owned(text.chars().map(unify_dash_char).collect()))
    }
}
