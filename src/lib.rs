//! Unicode → ASCII transliteration.
//!
//! Applies a large builtin replacement dataset, optional locale overlays, and
//! optional caller overrides to render Unicode text in ASCII-approximate
//! Latin. The pipeline is fixed: canonical composition (NFC), longest-match
//! table replacement, diacritic stripping (NFD → drop marks → NFC), dash
//! unification.
//!
//! ```
//! use translit::{Transliterator, transliterate};
//!
//! assert_eq!(transliterate("Déjà Vu!").unwrap(), "Deja Vu!");
//!
//! let swedish = Transliterator::builder().locale("sv").build();
//! assert_eq!(swedish.transliterate("Räksmörgås").unwrap(), "Raksmorgas");
//! ```

pub mod context;
pub mod locale;
pub mod pipeline;
pub mod replacements;
pub mod stage;
pub mod table;
pub mod translit;
pub mod unicode;

pub use table::MergedTable;
pub use translit::{
    Options, TranslitError, Transliterator, TransliteratorBuilder, transliterate,
    transliterate_with,
};

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
