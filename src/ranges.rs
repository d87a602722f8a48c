//! Script-range aggregation.
//!
//! Groups the codepoints of a string by Unicode script and counts them, and
//! derives the one-bit signal the `--check` mode cares about: does the
//! string span more than one non-Common script? Mixed-script strings are
//! the raw material of lookalike spoofing, so that signal feeds an exit
//! code.
//!
//! Each codepoint has exactly one UAX #24 Script property value, which
//! makes the assignment deterministic: shared punctuation, digits and
//! symbols count under `"Common"`, combining marks under `"Inherited"`,
//! everything else under its specific script. Only `"Common"` is excluded
//! from the multi-range signal.
//!
//! Counts are kept in a [`RangeMap`], an insertion-ordered map, so output
//! listings and JSON reports are deterministic for a given input.

use indexmap::IndexMap;
use serde::Serialize;

use crate::classify::script_name;
use crate::error::{Error, Result};

/// The distinguished script name excluded from the multi-range signal.
pub const COMMON: &str = "Common";

/// An insertion-ordered map of script names to codepoint counts.
///
/// Scripts appear in first-seen order, which keeps listings and serialized
/// reports deterministic.
///
/// # Examples
///
/// ```rust
/// use runelens::ranges_of;
///
/// let ranges = ranges_of("aαb");
/// let keys: Vec<_> = ranges.keys().collect();
/// assert_eq!(keys, ["Latin", "Greek"]);
/// assert_eq!(ranges.get("Latin"), Some(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RangeMap(IndexMap<String, usize>);

impl RangeMap {
    /// Creates an empty `RangeMap`.
    #[must_use]
    pub fn new() -> Self {
        RangeMap(IndexMap::new())
    }

    /// Adds one codepoint to `script`'s count.
    pub fn tally(&mut self, script: &str) {
        *self.0.entry(script.to_string()).or_insert(0) += 1;
    }

    /// Returns the count for a script, if present.
    #[must_use]
    pub fn get(&self, script: &str) -> Option<usize> {
        self.0.get(script).copied()
    }

    /// Returns the number of distinct scripts seen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no codepoints have been tallied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the total number of codepoints tallied across all scripts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    /// Returns the number of distinct scripts other than `"Common"`.
    #[must_use]
    pub fn non_common_count(&self) -> usize {
        self.0.keys().filter(|name| *name != COMMON).count()
    }

    /// Returns an iterator over the script names, in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns an iterator over `(script, count)` pairs, in first-seen
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(name, count)| (name.as_str(), *count))
    }
}

impl IntoIterator for RangeMap {
    type Item = (String, usize);
    type IntoIter = indexmap::map::IntoIter<String, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, usize)> for RangeMap {
    fn from_iter<T: IntoIterator<Item = (String, usize)>>(iter: T) -> Self {
        RangeMap(IndexMap::from_iter(iter))
    }
}

/// Counts the codepoints of `s` per Unicode script.
///
/// Every codepoint is assigned exactly one script, so the counts always
/// sum to the string's codepoint count.
///
/// # Examples
///
/// ```rust
/// use runelens::ranges_of;
///
/// let ranges = ranges_of("café");
/// assert_eq!(ranges.get("Latin"), Some(4));
/// assert_eq!(ranges.total(), 4);
/// ```
#[must_use]
pub fn ranges_of(s: &str) -> RangeMap {
    let mut ranges = RangeMap::new();
    for ch in s.chars() {
        ranges.tally(script_name(ch));
    }
    ranges
}

/// Reports whether `s` contains codepoints from more than one non-Common
/// script.
///
/// # Examples
///
/// ```rust
/// use runelens::spans_multiple_ranges;
///
/// assert!(spans_multiple_ranges("aα"));
/// assert!(!spans_multiple_ranges("hello"));
/// assert!(!spans_multiple_ranges("!@#"));
/// ```
#[must_use]
pub fn spans_multiple_ranges(s: &str) -> bool {
    ranges_of(s).non_common_count() > 1
}

/// Checks the input against a locale's exemplar character set.
///
/// Not implemented. The surface exists so callers fail loudly instead of
/// treating the missing check as a pass.
///
/// # Errors
///
/// Always returns [`Error::NotImplemented`].
pub fn locale_members(_input: &str, _locale: &str) -> Result<RangeMap> {
    Err(Error::NotImplemented("locale membership check"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_script_counts() {
        let ranges = ranges_of("hello");
        assert_eq!(ranges.get("Latin"), Some(5));
        assert_eq!(ranges.len(), 1);
    }

    #[test]
    fn test_counts_conserve_codepoints() {
        for s in ["", "hello", "café", "aα!@#一", "p\u{0000}q\u{0301}"] {
            assert_eq!(ranges_of(s).total(), s.chars().count(), "input {:?}", s);
        }
    }

    #[test]
    fn test_first_seen_ordering() {
        let ranges = ranges_of("αa!");
        let keys: Vec<_> = ranges.keys().collect();
        assert_eq!(keys, ["Greek", "Latin", "Common"]);
    }

    #[test]
    fn test_multi_range_latin_greek() {
        assert!(spans_multiple_ranges("aα"));
    }

    #[test]
    fn test_single_range_not_multi() {
        assert!(!spans_multiple_ranges("hello"));
    }

    #[test]
    fn test_common_only_ignored() {
        assert!(!spans_multiple_ranges("!@#"));
        // Common plus one real script is still a single range.
        assert!(!spans_multiple_ranges("hello!"));
    }

    #[test]
    fn test_inherited_counts_as_a_range() {
        // Combining marks sit in the Inherited script, which is not Common.
        assert!(spans_multiple_ranges("a\u{0301}"));
    }

    #[test]
    fn test_locale_check_stays_unimplemented() {
        let err = locale_members("abc", "en").unwrap_err();
        assert!(matches!(err, Error::NotImplemented(_)));
    }
}
