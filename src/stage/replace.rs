//! stage/replace.rs – merged-table substring replacement.
//!
//! The scan is strictly left to right, single pass, non-overlapping. At each
//! position the longest matching source wins; a matched region is consumed
//! whole and never re-examined, so replacement output cannot itself be
//! replaced. Positions with no match copy one code point and advance.
//!
//! The longest-match rule is what makes multi-code-point sources safe: with
//! both `ո → o` and `ու → u` in the table, the digraph is recognized before
//! the single letter can eat its first code point. A per-character pass in
//! table order would get this wrong for every source that prefixes another.

use std::borrow::Cow;

use crate::{
    context::Context,
    stage::{Stage, StageError},
};

/// Applies the merged replacement table to the input.
pub struct Replace;

impl Stage for Replace {
    fn name(&self) -> &'static str {
        "replace"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError> {
        Ok(ctx.table.matches_anywhere(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if ctx.table.is_empty() {
            return Ok(text);
        }

        let mut out = String::with_capacity(text.len() + (text.len() >> 3));
        let mut rest: &str = &text;
        let mut changed = false;

        while !rest.is_empty() {
            if let Some((source, target)) = ctx.table.longest_match(rest) {
                out.push_str(target);
                rest = &rest[source.len()..];
                changed = true;
            } else {
                let mut chars = rest.chars();
                if let Some(c) = chars.next() {
                    out.push(c);
                }
                rest = chars.as_str();
            }
        }

        if changed { Ok(Cow::Owned(out)) } else { Ok(text) }
    }
}
