// src/context.rs
// Per-invocation configuration handed to every stage. Built once from the
// caller's options, read-only afterwards.

use crate::{locale, replacements::BUILTIN, table::MergedTable, translit::Options};

/// Runtime context passed to every transliteration stage.
///
/// Carries the merged replacement table (builtin < locale < custom, with
/// preserve filtering already applied). Stages other than the replacement
/// stage ignore it.
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub table: MergedTable,
}

impl Context {
    /// Layer the builtin dataset, the resolved locale overlay, and the
    /// caller's custom replacements into one merged table.
    pub fn from_options(options: &Options) -> Self {
        let overlay = locale::resolve(options.locale.as_deref());
        let table = MergedTable::build(
            BUILTIN.iter().copied(),
            overlay.iter().copied(),
            options
                .custom_replacements
                .iter()
                .map(|(source, target)| (source.as_str(), target.as_str())),
            &options.preserve,
        );
        Self { table }
    }
}
