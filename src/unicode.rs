//! Shared Unicode machinery: ICU4X normalizer handles and the character
//! classifications the stages rely on.

use std::sync::LazyLock;

use icu_normalizer::{
    ComposingNormalizer, ComposingNormalizerBorrowed, DecomposingNormalizer,
    DecomposingNormalizerBorrowed,
};
use icu_properties::{CodePointMapData, CodePointMapDataBorrowed, props::GeneralCategory};

pub(crate) static NFC: LazyLock<ComposingNormalizerBorrowed> =
    LazyLock::new(ComposingNormalizer::new_nfc);
pub(crate) static NFD: LazyLock<DecomposingNormalizerBorrowed<'static>> =
    LazyLock::new(DecomposingNormalizer::new_nfd);

static GENERAL_CATEGORY: LazyLock<CodePointMapDataBorrowed<'static, GeneralCategory>> =
    LazyLock::new(CodePointMapData::<GeneralCategory>::new);

/// Nonspacing combining mark (General_Category = Mn). These are what the
/// diacritic stripping stage removes after canonical decomposition.
#[inline]
pub fn is_combining_mark(c: char) -> bool {
    GENERAL_CATEGORY.get(c) == GeneralCategory::NonspacingMark
}

/// Map dash-class punctuation to ASCII hyphen-minus, everything else to
/// itself. Covers the Unicode `Dash_Punctuation` code points plus U+2212
/// MINUS SIGN and U+2053 SWUNG DASH, which render as dashes but are
/// categorized as symbol and other-punctuation respectively.
#[inline]
pub fn unify_dash_char(c: char) -> char {
    match c {
        '\u{058A}' // armenian hyphen
        | '\u{05BE}' // hebrew maqaf
        | '\u{1400}' // canadian syllabics hyphen
        | '\u{1806}' // mongolian soft hyphen
        | '\u{2010}'..='\u{2015}' // hyphen .. horizontal bar
        | '\u{2053}' // swung dash
        | '\u{2212}' // minus sign
        | '\u{2E17}' // double oblique hyphen
        | '\u{2E1A}' // hyphen with diaeresis
        | '\u{2E3A}' // two-em dash
        | '\u{2E3B}' // three-em dash
        | '\u{2E40}' // double hyphen
        | '\u{2E5D}' // oblique hyphen
        | '\u{301C}' // wave dash
        | '\u{3030}' // wavy dash
        | '\u{30A0}' // katakana-hiragana double hyphen
        | '\u{FE31}' // presentation form vertical em dash
        | '\u{FE32}' // presentation form vertical en dash
        | '\u{FE58}' // small em dash
        | '\u{FE63}' // small hyphen-minus
        | '\u{FF0D}' // fullwidth hyphen-minus
        | '\u{10EAD}' // yezidi hyphenation mark
        => '-',
        _ => c,
    }
}
