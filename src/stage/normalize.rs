//! stage/normalize.rs – canonical composition (NFC) before replacement.
//!
//! The replacement engine matches sources in their composed form, so input
//! arriving decomposed (`I` + U+0307) must compose (`İ`) before the scan.
//! Without this step a decomposed spelling of a mapped character would slip
//! past its table entry and fall through to bare diacritic stripping.

use std::borrow::Cow;

use crate::{
    context::Context,
    stage::{Stage, StageError},
    unicode::NFC,
};

/// Unicode Normalization Form C (Canonical Composition).
#[derive(Default, Clone, Copy)]
pub struct Compose;

impl Stage for Compose {
    fn name(&self) -> &'static str {
        "nfc"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(!NFC.is_normalized(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if NFC.is_normalized(&text) {
            return Ok(text);
        }
        Ok(Cow::Owned(NFC.normalize(&text).into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_decomposed_input() {
        let ctx = Context::default();
        let result = Compose.apply(Cow::Borrowed("De\u{0301}ja\u{0300}"), &ctx).unwrap();
        assert_eq!(result, "Déjà");
    }

    #[test]
    fn ascii_is_zero_copy() {
        let ctx = Context::default();
        assert!(!Compose.needs_apply("plain ascii", &ctx).unwrap());
        let result = Compose.apply(Cow::Borrowed("plain ascii"), &ctx).unwrap();
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn idempotent() {
        let ctx = Context::default();
        let once = Compose.apply(Cow::Borrowed("cafe\u{0301}"), &ctx).unwrap();
        let twice = Compose.apply(once.clone(), &ctx).unwrap();
        assert_eq!(once, twice);
    }
}
