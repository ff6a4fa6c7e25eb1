#[cfg(test)]
mod integration_tests {

    use crate::{Transliterator, transliterate};

    #[test]
    fn main_scenarios() {
        assert_eq!(transliterate("Foo ÿ").unwrap(), "Foo y");
        assert_eq!(transliterate("Hællæ, hva skjera?").unwrap(), "Haellae, hva skjera?");
        assert_eq!(transliterate("Déjà Vu!").unwrap(), "Deja Vu!");
    }

    #[test]
    fn custom_replacements() {
        let t = Transliterator::builder()
            .replacements([("ä", "ae"), ("ö", "oe"), ("ü", "ue"), ("ß", "ss")])
            .build();
        assert_eq!(t.transliterate("Zürich").unwrap(), "Zuerich");

        let t = Transliterator::builder()
            .replacement("единорогов", "\u{1F984}")
            .build();
        assert_eq!(
            t.transliterate("Я люблю единорогов").unwrap(),
            "Ya lyublyu \u{1F984}"
        );
    }

    #[test]
    fn german_umlauts() {
        assert_eq!(transliterate("ä ö ü Ä Ö Ü ß").unwrap(), "ae oe ue Ae Oe Ue ss");
        assert_eq!(
            transliterate("Fußgängerübergänge").unwrap(),
            "Fussgaengeruebergaenge"
        );
    }

    #[test]
    fn vietnamese() {
        assert_eq!(transliterate("ố Ừ Đ").unwrap(), "o U D");
        assert_eq!(
            transliterate("tôi yêu những chú kỳ lân").unwrap(),
            "toi yeu nhung chu ky lan"
        );
    }

    #[test]
    fn arabic() {
        assert_eq!(transliterate("ث س و").unwrap(), "th s w");
        assert_eq!(transliterate("أنا أحب حيدات").unwrap(), "ana ahb hydat");
    }

    #[test]
    fn persian() {
        assert_eq!(transliterate("چ ی پ").unwrap(), "ch y p");
    }

    #[test]
    fn urdu() {
        assert_eq!(transliterate("ٹ ڈ ھ").unwrap(), "t d h");
    }

    #[test]
    fn pashto() {
        assert_eq!(transliterate("ګ ړ څ").unwrap(), "g r c");
    }

    #[test]
    fn russian() {
        assert_eq!(transliterate("Ж п ю").unwrap(), "Zh p yu");
        assert_eq!(
            transliterate("Я люблю единорогов").unwrap(),
            "Ya lyublyu edinorogov"
        );
    }

    #[test]
    fn romanian() {
        assert_eq!(transliterate("ș Ț").unwrap(), "s T");
    }

    #[test]
    fn turkish() {
        assert_eq!(transliterate("İ ı Ş ş Ç ç Ğ ğ").unwrap(), "i i s s c c g g");
    }

    #[test]
    fn armenian() {
        assert_eq!(transliterate("ր ե ւ ա ն").unwrap(), "re ye v a n");
        // The digraph entry beats its single-letter components.
        assert_eq!(transliterate("ու").unwrap(), "u");
    }

    #[test]
    fn georgian() {
        assert_eq!(transliterate("თ პ ღ").unwrap(), "t p gh");
    }

    #[test]
    fn latin() {
        assert_eq!(transliterate("Ä Ð Ø").unwrap(), "Ae D O");
    }

    #[test]
    fn czech() {
        assert_eq!(transliterate("č ž Ň").unwrap(), "c z N");
    }

    #[test]
    fn dhivehi() {
        assert_eq!(transliterate("ޝ ޓ ބ").unwrap(), "sh t b");
    }

    #[test]
    fn greek() {
        assert_eq!(transliterate("θ Γ Ξ").unwrap(), "th G KS");
    }

    #[test]
    fn latvian() {
        assert_eq!(transliterate("ā Ņ Ģ").unwrap(), "a N G");
    }

    #[test]
    fn lithuanian() {
        assert_eq!(transliterate("ą į Š").unwrap(), "a i S");
    }

    #[test]
    fn macedonian() {
        assert_eq!(transliterate("Ќ љ Тс").unwrap(), "Kj lj Ts");
    }

    #[test]
    fn polish() {
        assert_eq!(transliterate("ą Ą Ł").unwrap(), "a A L");
    }

    #[test]
    fn slovak() {
        assert_eq!(transliterate("ľ Ľ Ŕ").unwrap(), "l L R");
    }

    #[test]
    fn ukrainian() {
        assert_eq!(transliterate("Є Ґ ї").unwrap(), "Ye G yi");
    }

    #[test]
    fn swedish_locale() {
        let t = Transliterator::builder().locale("sv").build();
        assert_eq!(t.transliterate("ä ö Ä Ö").unwrap(), "a o A O");
        assert_eq!(t.transliterate("Räksmörgås").unwrap(), "Raksmorgas");
        // Without the overlay the builtin German-style rules apply.
        assert_eq!(transliterate("Räksmörgås").unwrap(), "Raeksmoergas");
    }

    #[test]
    fn german_locale() {
        let t = Transliterator::builder().locale("de").build();
        assert_eq!(t.transliterate("Räksmörgås").unwrap(), "Raeksmoergas");
    }

    #[test]
    fn hungarian_locale() {
        let t = Transliterator::builder().locale("hu").build();
        assert_eq!(t.transliterate("ű ö Ö").unwrap(), "u o O");
    }

    #[test]
    fn serbian_locale() {
        let t = Transliterator::builder().locale("sr").build();
        assert_eq!(t.transliterate("ђ џ Ђ Љ").unwrap(), "dj dz Dj Lj");
    }

    #[test]
    fn danish_locale() {
        let t = Transliterator::builder().locale("da").build();
        assert_eq!(t.transliterate("æble smørrebrød på Århus").unwrap(), "aeble smoerrebroed paa Aarhus");
    }

    #[test]
    fn dashes() {
        assert_eq!(transliterate("en\u{2013}dash").unwrap(), "en-dash");
        assert_eq!(
            transliterate("En\u{2013}dashes and em\u{2014}dashes are normalized").unwrap(),
            "En-dashes and em-dashes are normalized"
        );
        assert_eq!(transliterate("a\u{2212}b \u{2E3A} c\u{2053}d").unwrap(), "a-b - c-d");
    }

    #[test]
    fn diacritics_without_table_entries() {
        // Base letter plus combining acute has no table entry; stripping
        // reduces it to the bare base letter.
        assert_eq!(transliterate("s\u{0301}").unwrap(), "s");
        assert_eq!(transliterate("ś").unwrap(), "s");
    }
}
