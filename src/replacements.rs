//! Builtin replacement dataset.
//!
//! A flat list of `(source, target)` pairs consumed by [`crate::table::MergedTable`].
//! Sources are single code points or short sequences in NFC form; targets are
//! ASCII-leading strings (an empty target deletes the source). The list is data,
//! not logic: the engine never special-cases any entry, and the table can grow
//! without touching the engine.
//!
//! Within the list a later pair overwrites an earlier pair with the same source,
//! so keep each source in exactly one section.
//!
//! Characters whose NFC form canonically decomposes to a base letter plus
//! combining marks (å, é, č, ā, …) are deliberately absent: the diacritic
//! stripping stage reduces them to the bare base letter. Entries exist only
//! where stripping alone gives the wrong answer (ä → ae, not a) or no answer
//! at all (ж, ث, თ, …).

pub static BUILTIN: &[(&str, &str)] = &[
    // ── German ──────────────────────────────────────────────────────────
    ("ä", "ae"),
    ("Ä", "Ae"),
    ("ö", "oe"),
    ("Ö", "Oe"),
    ("ü", "ue"),
    ("Ü", "Ue"),
    ("ß", "ss"),
    ("ẞ", "Ss"),
    // ── Latin letters without a canonical decomposition ─────────────────
    ("æ", "ae"),
    ("Æ", "AE"),
    ("ø", "o"),
    ("Ø", "O"),
    ("ð", "d"),
    ("Ð", "D"),
    ("þ", "th"),
    ("Þ", "Th"),
    ("ł", "l"),
    ("Ł", "L"),
    ("œ", "oe"),
    ("Œ", "OE"),
    ("ĳ", "ij"),
    ("Ĳ", "IJ"),
    ("ſ", "s"),
    ("ŉ", "'n"),
    // ── Turkish (lowercased targets, matching the upstream dataset) ─────
    ("ç", "c"),
    ("Ç", "c"),
    ("ğ", "g"),
    ("Ğ", "g"),
    ("ı", "i"),
    ("İ", "i"),
    ("ş", "s"),
    ("Ş", "s"),
    // ── Romanian ────────────────────────────────────────────────────────
    ("ș", "s"),
    ("Ș", "S"),
    ("ț", "t"),
    ("Ț", "T"),
    // ── Vietnamese (precomposed vowels and đ) ───────────────────────────
    ("ă", "a"),
    ("Ă", "A"),
    ("â", "a"),
    ("Â", "A"),
    ("á", "a"),
    ("Á", "A"),
    ("à", "a"),
    ("À", "A"),
    ("ả", "a"),
    ("Ả", "A"),
    ("ã", "a"),
    ("Ã", "A"),
    ("ạ", "a"),
    ("Ạ", "A"),
    ("ắ", "a"),
    ("Ắ", "A"),
    ("ằ", "a"),
    ("Ằ", "A"),
    ("ẳ", "a"),
    ("Ẳ", "A"),
    ("ẵ", "a"),
    ("Ẵ", "A"),
    ("ặ", "a"),
    ("Ặ", "A"),
    ("ấ", "a"),
    ("Ấ", "A"),
    ("ầ", "a"),
    ("Ầ", "A"),
    ("ẩ", "a"),
    ("Ẩ", "A"),
    ("ẫ", "a"),
    ("Ẫ", "A"),
    ("ậ", "a"),
    ("Ậ", "A"),
    ("ê", "e"),
    ("Ê", "E"),
    ("é", "e"),
    ("É", "E"),
    ("è", "e"),
    ("È", "E"),
    ("ẻ", "e"),
    ("Ẻ", "E"),
    ("ẽ", "e"),
    ("Ẽ", "E"),
    ("ẹ", "e"),
    ("Ẹ", "E"),
    ("ế", "e"),
    ("Ế", "E"),
    ("ề", "e"),
    ("Ề", "E"),
    ("ể", "e"),
    ("Ể", "E"),
    ("ễ", "e"),
    ("Ễ", "E"),
    ("ệ", "e"),
    ("Ệ", "E"),
    ("í", "i"),
    ("Í", "I"),
    ("ì", "i"),
    ("Ì", "I"),
    ("ỉ", "i"),
    ("Ỉ", "I"),
    ("ĩ", "i"),
    ("Ĩ", "I"),
    ("ị", "i"),
    ("Ị", "I"),
    ("ô", "o"),
    ("Ô", "O"),
    ("ơ", "o"),
    ("Ơ", "O"),
    ("ó", "o"),
    ("Ó", "O"),
    ("ò", "o"),
    ("Ò", "O"),
    ("ỏ", "o"),
    ("Ỏ", "O"),
    ("õ", "o"),
    ("Õ", "O"),
    ("ọ", "o"),
    ("Ọ", "O"),
    ("ố", "o"),
    ("Ố", "O"),
    ("ồ", "o"),
    ("Ồ", "O"),
    ("ổ", "o"),
    ("Ổ", "O"),
    ("ỗ", "o"),
    ("Ỗ", "O"),
    ("ộ", "o"),
    ("Ộ", "O"),
    ("ớ", "o"),
    ("Ớ", "O"),
    ("ờ", "o"),
    ("Ờ", "O"),
    ("ở", "o"),
    ("Ở", "O"),
    ("ỡ", "o"),
    ("Ỡ", "O"),
    ("ợ", "o"),
    ("Ợ", "O"),
    ("ư", "u"),
    ("Ư", "U"),
    ("ú", "u"),
    ("Ú", "U"),
    ("ù", "u"),
    ("Ù", "U"),
    ("ủ", "u"),
    ("Ủ", "U"),
    ("ũ", "u"),
    ("Ũ", "U"),
    ("ụ", "u"),
    ("Ụ", "U"),
    ("ứ", "u"),
    ("Ứ", "U"),
    ("ừ", "u"),
    ("Ừ", "U"),
    ("ử", "u"),
    ("Ử", "U"),
    ("ữ", "u"),
    ("Ữ", "U"),
    ("ự", "u"),
    ("Ự", "U"),
    ("ý", "y"),
    ("Ý", "Y"),
    ("ỳ", "y"),
    ("Ỳ", "Y"),
    ("ỷ", "y"),
    ("Ỷ", "Y"),
    ("ỹ", "y"),
    ("Ỹ", "Y"),
    ("ỵ", "y"),
    ("Ỵ", "Y"),
    ("đ", "d"),
    ("Đ", "D"),
    // ── Arabic ──────────────────────────────────────────────────────────
    ("ء", ""),
    ("آ", "a"),
    ("أ", "a"),
    ("ؤ", "w"),
    ("إ", "i"),
    ("ئ", "y"),
    ("ا", "a"),
    ("ب", "b"),
    ("ة", "h"),
    ("ت", "t"),
    ("ث", "th"),
    ("ج", "j"),
    ("ح", "h"),
    ("خ", "kh"),
    ("د", "d"),
    ("ذ", "dh"),
    ("ر", "r"),
    ("ز", "z"),
    ("س", "s"),
    ("ش", "sh"),
    ("ص", "s"),
    ("ض", "d"),
    ("ط", "t"),
    ("ظ", "z"),
    ("ع", "a"),
    ("غ", "gh"),
    ("ف", "f"),
    ("ق", "q"),
    ("ك", "k"),
    ("ل", "l"),
    ("م", "m"),
    ("ن", "n"),
    ("ه", "h"),
    ("و", "w"),
    ("ى", "a"),
    ("ي", "y"),
    ("لا", "la"),
    ("٠", "0"),
    ("١", "1"),
    ("٢", "2"),
    ("٣", "3"),
    ("٤", "4"),
    ("٥", "5"),
    ("٦", "6"),
    ("٧", "7"),
    ("٨", "8"),
    ("٩", "9"),
    // ── Persian / Farsi additions ───────────────────────────────────────
    ("پ", "p"),
    ("چ", "ch"),
    ("ژ", "zh"),
    ("گ", "g"),
    ("ک", "k"),
    ("ی", "y"),
    ("۰", "0"),
    ("۱", "1"),
    ("۲", "2"),
    ("۳", "3"),
    ("۴", "4"),
    ("۵", "5"),
    ("۶", "6"),
    ("۷", "7"),
    ("۸", "8"),
    ("۹", "9"),
    // ── Urdu additions ──────────────────────────────────────────────────
    ("ٹ", "t"),
    ("ڈ", "d"),
    ("ڑ", "r"),
    ("ں", "n"),
    ("ہ", "h"),
    ("ھ", "h"),
    ("ے", "e"),
    // ── Pashto additions ────────────────────────────────────────────────
    ("ټ", "t"),
    ("ډ", "d"),
    ("ړ", "r"),
    ("ڼ", "n"),
    ("ښ", "x"),
    ("ږ", "zh"),
    ("ګ", "g"),
    ("څ", "c"),
    ("ځ", "z"),
    // ── Cyrillic (Russian) ──────────────────────────────────────────────
    ("а", "a"),
    ("А", "A"),
    ("б", "b"),
    ("Б", "B"),
    ("в", "v"),
    ("В", "V"),
    ("г", "g"),
    ("Г", "G"),
    ("д", "d"),
    ("Д", "D"),
    ("е", "e"),
    ("Е", "E"),
    ("ё", "yo"),
    ("Ё", "Yo"),
    ("ж", "zh"),
    ("Ж", "Zh"),
    ("з", "z"),
    ("З", "Z"),
    ("и", "i"),
    ("И", "I"),
    ("й", "y"),
    ("Й", "Y"),
    ("к", "k"),
    ("К", "K"),
    ("л", "l"),
    ("Л", "L"),
    ("м", "m"),
    ("М", "M"),
    ("н", "n"),
    ("Н", "N"),
    ("о", "o"),
    ("О", "O"),
    ("п", "p"),
    ("П", "P"),
    ("р", "r"),
    ("Р", "R"),
    ("с", "s"),
    ("С", "S"),
    ("т", "t"),
    ("Т", "T"),
    ("у", "u"),
    ("У", "U"),
    ("ф", "f"),
    ("Ф", "F"),
    ("х", "kh"),
    ("Х", "Kh"),
    ("ц", "ts"),
    ("Ц", "Ts"),
    ("ч", "ch"),
    ("Ч", "Ch"),
    ("ш", "sh"),
    ("Ш", "Sh"),
    ("щ", "shch"),
    ("Щ", "Shch"),
    ("ъ", ""),
    ("Ъ", ""),
    ("ы", "y"),
    ("Ы", "Y"),
    ("ь", ""),
    ("Ь", ""),
    ("э", "e"),
    ("Э", "E"),
    ("ю", "yu"),
    ("Ю", "Yu"),
    ("я", "ya"),
    ("Я", "Ya"),
    // ── Cyrillic (Ukrainian additions) ──────────────────────────────────
    ("є", "ye"),
    ("Є", "Ye"),
    ("і", "i"),
    ("І", "I"),
    ("ї", "yi"),
    ("Ї", "Yi"),
    ("ґ", "g"),
    ("Ґ", "G"),
    // ── Cyrillic (Macedonian / South Slavic additions) ──────────────────
    // Serbian ђ/ћ are intentionally absent here: they are locale-specific
    // and live in the "sr" overlay.
    ("ѓ", "gj"),
    ("Ѓ", "Gj"),
    ("ѕ", "dz"),
    ("Ѕ", "Dz"),
    ("ј", "j"),
    ("Ј", "J"),
    ("љ", "lj"),
    ("Љ", "Lj"),
    ("њ", "nj"),
    ("Њ", "Nj"),
    ("ќ", "kj"),
    ("Ќ", "Kj"),
    ("џ", "dz"),
    ("Џ", "Dz"),
    // ── Greek ───────────────────────────────────────────────────────────
    ("α", "a"),
    ("Α", "A"),
    ("β", "v"),
    ("Β", "V"),
    ("γ", "g"),
    ("Γ", "G"),
    ("δ", "d"),
    ("Δ", "D"),
    ("ε", "e"),
    ("Ε", "E"),
    ("ζ", "z"),
    ("Ζ", "Z"),
    ("η", "i"),
    ("Η", "I"),
    ("θ", "th"),
    ("Θ", "TH"),
    ("ι", "i"),
    ("Ι", "I"),
    ("κ", "k"),
    ("Κ", "K"),
    ("λ", "l"),
    ("Λ", "L"),
    ("μ", "m"),
    ("Μ", "M"),
    ("ν", "n"),
    ("Ν", "N"),
    ("ξ", "ks"),
    ("Ξ", "KS"),
    ("ο", "o"),
    ("Ο", "O"),
    ("π", "p"),
    ("Π", "P"),
    ("ρ", "r"),
    ("Ρ", "R"),
    ("σ", "s"),
    ("ς", "s"),
    ("Σ", "S"),
    ("τ", "t"),
    ("Τ", "T"),
    ("υ", "y"),
    ("Υ", "Y"),
    ("φ", "f"),
    ("Φ", "F"),
    ("χ", "ch"),
    ("Χ", "CH"),
    ("ψ", "ps"),
    ("Ψ", "PS"),
    ("ω", "o"),
    ("Ω", "O"),
    // Accented vowels are replaced before diacritic stripping runs, so the
    // precomposed forms need their own entries.
    ("ά", "a"),
    ("Ά", "A"),
    ("έ", "e"),
    ("Έ", "E"),
    ("ή", "i"),
    ("Ή", "I"),
    ("ί", "i"),
    ("Ί", "I"),
    ("ό", "o"),
    ("Ό", "O"),
    ("ύ", "y"),
    ("Ύ", "Y"),
    ("ώ", "o"),
    ("Ώ", "O"),
    ("ϊ", "i"),
    ("Ϊ", "I"),
    ("ϋ", "y"),
    ("Ϋ", "Y"),
    ("ΐ", "i"),
    ("ΰ", "y"),
    // ── Armenian ────────────────────────────────────────────────────────
    // "ու"/"եւ" are two-code-point sources; the longest-match rule must see
    // them before the standalone ո/ե/ւ entries.
    ("ու", "u"),
    ("Ու", "U"),
    ("ՈՒ", "U"),
    ("եւ", "ev"),
    ("Եւ", "Ev"),
    ("և", "ev"),
    ("ա", "a"),
    ("Ա", "A"),
    ("բ", "b"),
    ("Բ", "B"),
    ("գ", "g"),
    ("Գ", "G"),
    ("դ", "d"),
    ("Դ", "D"),
    ("ե", "ye"),
    ("Ե", "Ye"),
    ("զ", "z"),
    ("Զ", "Z"),
    ("է", "e"),
    ("Է", "E"),
    ("ը", "e"),
    ("Ը", "E"),
    ("թ", "t"),
    ("Թ", "T"),
    ("ժ", "zh"),
    ("Ժ", "Zh"),
    ("ի", "i"),
    ("Ի", "I"),
    ("լ", "l"),
    ("Լ", "L"),
    ("խ", "kh"),
    ("Խ", "Kh"),
    ("ծ", "ts"),
    ("Ծ", "Ts"),
    ("կ", "k"),
    ("Կ", "K"),
    ("հ", "h"),
    ("Հ", "H"),
    ("ձ", "dz"),
    ("Ձ", "Dz"),
    ("ղ", "gh"),
    ("Ղ", "Gh"),
    ("ճ", "ch"),
    ("Ճ", "Ch"),
    ("մ", "m"),
    ("Մ", "M"),
    ("յ", "y"),
    ("Յ", "Y"),
    ("ն", "n"),
    ("Ն", "N"),
    ("շ", "sh"),
    ("Շ", "Sh"),
    ("ո", "o"),
    ("Ո", "O"),
    ("չ", "ch"),
    ("Չ", "Ch"),
    ("պ", "p"),
    ("Պ", "P"),
    ("ջ", "j"),
    ("Ջ", "J"),
    ("ռ", "r"),
    ("Ռ", "R"),
    ("ս", "s"),
    ("Ս", "S"),
    ("վ", "v"),
    ("Վ", "V"),
    ("տ", "t"),
    ("Տ", "T"),
    ("ր", "re"),
    ("Ր", "R"),
    ("ց", "ts"),
    ("Ց", "Ts"),
    ("ւ", "v"),
    ("Ւ", "V"),
    ("փ", "p"),
    ("Փ", "P"),
    ("ք", "k"),
    ("Ք", "K"),
    ("օ", "o"),
    ("Օ", "O"),
    ("ֆ", "f"),
    ("Ֆ", "F"),
    // ── Georgian (Mkhedruli) ────────────────────────────────────────────
    ("ა", "a"),
    ("ბ", "b"),
    ("გ", "g"),
    ("დ", "d"),
    ("ე", "e"),
    ("ვ", "v"),
    ("ზ", "z"),
    ("თ", "t"),
    ("ი", "i"),
    ("კ", "k"),
    ("ლ", "l"),
    ("მ", "m"),
    ("ნ", "n"),
    ("ო", "o"),
    ("პ", "p"),
    ("ჟ", "zh"),
    ("რ", "r"),
    ("ს", "s"),
    ("ტ", "t"),
    ("უ", "u"),
    ("ფ", "p"),
    ("ქ", "k"),
    ("ღ", "gh"),
    ("ყ", "q"),
    ("შ", "sh"),
    ("ჩ", "ch"),
    ("ც", "ts"),
    ("ძ", "dz"),
    ("წ", "ts"),
    ("ჭ", "ch"),
    ("ხ", "kh"),
    ("ჯ", "j"),
    ("ჰ", "h"),
    // ── Dhivehi (Thaana) ────────────────────────────────────────────────
    ("ހ", "h"),
    ("ށ", "sh"),
    ("ނ", "n"),
    ("ރ", "r"),
    ("ބ", "b"),
    ("ޅ", "lh"),
    ("ކ", "k"),
    ("އ", "a"),
    ("ވ", "v"),
    ("މ", "m"),
    ("ފ", "f"),
    ("ދ", "dh"),
    ("ތ", "th"),
    ("ލ", "l"),
    ("ގ", "g"),
    ("ޏ", "gn"),
    ("ސ", "s"),
    ("ޑ", "d"),
    ("ޒ", "z"),
    ("ޓ", "t"),
    ("ޔ", "y"),
    ("ޕ", "p"),
    ("ޖ", "j"),
    ("ޗ", "ch"),
    ("ޘ", "th"),
    ("ޙ", "h"),
    ("ޚ", "kh"),
    ("ޛ", "dh"),
    ("ޜ", "z"),
    ("ޝ", "sh"),
    ("ޞ", "s"),
    ("ޟ", "d"),
    ("ޠ", "t"),
    ("ޡ", "z"),
    ("ޢ", "a"),
    ("ޣ", "gh"),
    ("ޤ", "q"),
    ("ޥ", "w"),
];

#[cfg(test)]
mod tests {
    use super::BUILTIN;

    #[test]
    fn non_empty_targets_start_ascii() {
        for (source, target) in BUILTIN {
            if let Some(first) = target.chars().next() {
                assert!(
                    first.is_ascii(),
                    "target for {source:?} leaks non-ASCII: {target:?}"
                );
            }
        }
    }

    #[test]
    fn sources_are_non_empty_and_non_ascii() {
        for (source, _) in BUILTIN {
            assert!(!source.is_empty());
            assert!(
                source.chars().next().is_some_and(|c| !c.is_ascii()),
                "builtin source {source:?} would rewrite plain ASCII"
            );
        }
    }

    #[test]
    fn sources_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for (source, _) in BUILTIN {
            assert!(seen.insert(source), "duplicate builtin source {source:?}");
        }
    }
}
