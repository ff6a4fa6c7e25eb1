//! Layered replacement tables and the longest-match index.
//!
//! Three layers feed one merged table: builtin (lowest), locale overlay,
//! caller overrides (highest). Merging is per-source: a higher layer replaces
//! the value for a source it shares with a lower layer and adds the sources it
//! does not. The merged table is then indexed for scanning: entries are
//! bucketed by their first code point and each bucket is ordered by source
//! byte length, longest first, so a scan position always prefers the longest
//! source that matches there (a two-code-point source beats the
//! single-code-point source that is its prefix). Sources are unique after
//! merging, so equal-length ties cannot collide, but buckets are still
//! ordered lexicographically within one length so the index is deterministic.

use std::collections::HashMap;

#[derive(Debug, Clone)]
struct Entry {
    source: String,
    target: String,
}

/// The per-invocation result of layering builtin < locale < custom rules,
/// indexed for left-to-right longest-match scanning. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct MergedTable {
    buckets: HashMap<char, Vec<Entry>>,
    len: usize,
}

impl MergedTable {
    /// Merge the given layers in ascending precedence and build the scan
    /// index. `preserve` is a deny-list of sources removed from the merged
    /// table after layering; it is matched against entries once, not against
    /// the input. Empty sources are discarded, they can never match.
    pub fn build<'a, 'b, 'c>(
        builtin: impl IntoIterator<Item = (&'a str, &'a str)>,
        locale: impl IntoIterator<Item = (&'b str, &'b str)>,
        custom: impl IntoIterator<Item = (&'c str, &'c str)>,
        preserve: &[String],
    ) -> Self {
        let mut merged: HashMap<String, String> = HashMap::new();
        let mut overlay = |source: &str, target: &str| {
            if !source.is_empty() {
                merged.insert(source.to_owned(), target.to_owned());
            }
        };
        for (source, target) in builtin {
            overlay(source, target);
        }
        for (source, target) in locale {
            overlay(source, target);
        }
        for (source, target) in custom {
            overlay(source, target);
        }
        for source in preserve {
            merged.remove(source);
        }

        let mut buckets: HashMap<char, Vec<Entry>> = HashMap::new();
        let mut len = 0;
        for (source, target) in merged {
            // Non-empty by construction.
            let Some(first) = source.chars().next() else {
                continue;
            };
            buckets.entry(first).or_default().push(Entry { source, target });
            len += 1;
        }
        for bucket in buckets.values_mut() {
            bucket.sort_by(|a, b| {
                b.source
                    .len()
                    .cmp(&a.source.len())
                    .then_with(|| a.source.cmp(&b.source))
            });
        }

        Self { buckets, len }
    }

    /// Number of live entries after merging and preserve filtering.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The longest source that is a prefix of `rest`, with its target.
    /// `rest` must start at a code point boundary.
    #[inline]
    pub fn longest_match<'t>(&'t self, rest: &str) -> Option<(&'t str, &'t str)> {
        let first = rest.chars().next()?;
        let bucket = self.buckets.get(&first)?;
        bucket
            .iter()
            .find(|entry| rest.starts_with(entry.source.as_str()))
            .map(|entry| (entry.source.as_str(), entry.target.as_str()))
    }

    /// Fast pre-check: does any entry match anywhere in `text`?
    pub fn matches_anywhere(&self, text: &str) -> bool {
        if self.is_empty() {
            return false;
        }
        let mut rest = text;
        while !rest.is_empty() {
            if self.longest_match(rest).is_some() {
                return true;
            }
            let mut chars = rest.chars();
            chars.next();
            rest = chars.as_str();
        }
        false
    }

    /// Value merged for an exact source, ignoring the longest-match index.
    /// Test and diagnostics helper.
    pub fn get(&self, source: &str) -> Option<&str> {
        let first = source.chars().next()?;
        self.buckets
            .get(&first)?
            .iter()
            .find(|entry| entry.source == source)
            .map(|entry| entry.target.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(
        builtin: &[(&str, &str)],
        locale: &[(&str, &str)],
        custom: &[(&str, &str)],
    ) -> MergedTable {
        MergedTable::build(
            builtin.iter().copied(),
            locale.iter().copied(),
            custom.iter().copied(),
            &[],
        )
    }

    #[test]
    fn higher_layers_win_per_key() {
        let t = table(
            &[("ä", "builtin"), ("ö", "builtin"), ("ü", "builtin")],
            &[("ä", "locale"), ("ö", "locale")],
            &[("ä", "custom")],
        );
        assert_eq!(t.get("ä"), Some("custom"));
        assert_eq!(t.get("ö"), Some("locale"));
        assert_eq!(t.get("ü"), Some("builtin"));
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn later_entries_overwrite_within_one_layer() {
        let t = table(&[("æ", "first"), ("æ", "second")], &[], &[]);
        assert_eq!(t.get("æ"), Some("second"));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn longest_source_wins_at_a_position() {
        let t = table(&[("a", "X"), ("au", "Y")], &[], &[]);
        assert_eq!(t.longest_match("au rest"), Some(("au", "Y")));
        assert_eq!(t.longest_match("ab"), Some(("a", "X")));
    }

    #[test]
    fn preserve_removes_entries_across_layers() {
        let t = MergedTable::build(
            [("ß", "ss"), ("ä", "ae")],
            [("ß", "sz")],
            [],
            &["ß".to_owned()],
        );
        assert_eq!(t.get("ß"), None);
        assert_eq!(t.get("ä"), Some("ae"));
    }

    #[test]
    fn empty_sources_are_discarded() {
        let t = table(&[("", "boom")], &[], &[]);
        assert!(t.is_empty());
        assert_eq!(t.longest_match("anything"), None);
    }

    #[test]
    fn matches_anywhere_scans_mid_string() {
        let t = table(&[("ю", "yu")], &[], &[]);
        assert!(t.matches_anywhere("abcюdef"));
        assert!(!t.matches_anywhere("abcdef"));
        assert!(!t.matches_anywhere(""));
    }
}
