//! Locale overlay dataset and tag resolution.
//!
//! Keys of [`LOCALE_TABLE`] are lowercase primary language subtags of BCP-47
//! tags. Overlay entries override builtin entries with the same source when a
//! caller opts in via the `locale` option; callers that pass no locale get
//! builtin behaviour only.

use phf::{Map, phf_map};

/// One locale's override rules, same shape as the builtin dataset.
pub type LocaleRules = &'static [(&'static str, &'static str)];

// Danish and Norwegian Bokmål share one rule set.
const DANISH_NORWEGIAN: LocaleRules = &[
    ("æ", "ae"),
    ("Æ", "Ae"),
    ("ø", "oe"),
    ("Ø", "Oe"),
    ("å", "aa"),
    ("Å", "Aa"),
];

const SWEDISH: LocaleRules = &[
    ("ä", "a"),
    ("Ä", "A"),
    ("ö", "o"),
    ("Ö", "O"),
    ("å", "a"),
    ("Å", "A"),
];

const GERMAN: LocaleRules = &[
    ("ä", "ae"),
    ("Ä", "Ae"),
    ("ö", "oe"),
    ("Ö", "Oe"),
    ("ü", "ue"),
    ("Ü", "Ue"),
    ("ß", "ss"),
    ("ẞ", "Ss"),
];

const TURKISH: LocaleRules = &[
    ("â", "a"),
    ("Â", "A"),
    ("ö", "o"),
    ("Ö", "O"),
    ("ü", "u"),
    ("Ü", "U"),
];

const HUNGARIAN: LocaleRules = &[
    ("ű", "u"),
    ("Ű", "U"),
    ("ö", "o"),
    ("Ö", "O"),
    ("ü", "u"),
    ("Ü", "U"),
    ("á", "a"),
    ("Á", "A"),
    ("é", "e"),
    ("É", "E"),
    ("í", "i"),
    ("Í", "I"),
    ("ó", "o"),
    ("Ó", "O"),
    ("ú", "u"),
    ("Ú", "U"),
];

const SERBIAN: LocaleRules = &[
    ("ђ", "dj"),
    ("Ђ", "Dj"),
    ("џ", "dz"),
    ("Џ", "Dz"),
    ("љ", "lj"),
    ("Љ", "Lj"),
    ("њ", "nj"),
    ("Њ", "Nj"),
    ("ћ", "c"),
    ("Ћ", "C"),
    ("ч", "ch"),
    ("Ч", "Ch"),
    ("ш", "sh"),
    ("Ш", "Sh"),
    ("ж", "zh"),
    ("Ж", "Zh"),
];

pub static LOCALE_TABLE: Map<&'static str, LocaleRules> = phf_map! {
    "sv" => SWEDISH,
    "da" => DANISH_NORWEGIAN,
    "nb" => DANISH_NORWEGIAN,
    "de" => GERMAN,
    "tr" => TURKISH,
    "hu" => HUNGARIAN,
    "sr" => SERBIAN,
};

/// Resolve a BCP-47-style tag to its override rules.
///
/// The tag is lowercased and the generic Norwegian `no` prefix is rewritten to
/// `nb` (Bokmål) with any region suffix preserved. Lookup tries the full
/// normalized tag first, then the primary subtag, so `sv-SE` resolves to the
/// same rules as `sv`. Unknown or malformed tags are not an error: they
/// resolve to the empty overlay.
pub fn resolve(tag: Option<&str>) -> LocaleRules {
    let Some(tag) = tag else {
        return &[];
    };

    let mut tag = tag.to_lowercase();
    if tag == "no" {
        tag = "nb".to_owned();
    } else if let Some(region) = tag.strip_prefix("no-") {
        tag = format!("nb-{region}");
    }

    if let Some(rules) = LOCALE_TABLE.get(tag.as_str()) {
        return rules;
    }

    let base = tag.split('-').next().unwrap_or(&tag);
    LOCALE_TABLE.get(base).copied().unwrap_or(&[])
}
