//! Configuration options for an inspection run.
//!
//! This module provides [`InspectOptions`], the set of mode flags the
//! surrounding layer (CLI or embedding program) hands to
//! [`Inspection::of`](crate::Inspection::of):
//!
//! - `strict`: registration-grade IDNA conversion rules (STD3 ASCII rules,
//!   hyphen placement, DNS length) for the whole-string attempt
//! - `table`: gather the per-rune breakdown rows
//! - `show_ranges`: gather per-script codepoint counts
//! - `decode_punycode`: treat the input as Punycode and decode it
//!
//! ## Examples
//!
//! ```rust
//! use runelens::{inspect_with_options, InspectOptions};
//!
//! let options = InspectOptions::new().with_table(true).with_show_ranges(true);
//! let report = inspect_with_options("café", &options);
//! assert_eq!(report.rows.len(), 4);
//! assert!(report.ranges.is_some());
//! ```
#[derive(Clone, Debug, Default)]
pub struct InspectOptions {
    pub strict: bool,
    pub table: bool,
    pub show_ranges: bool,
    pub decode_punycode: bool,
}

impl InspectOptions {
    /// Creates default options: lenient conversion, header lines only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use runelens::InspectOptions;
    ///
    /// let options = InspectOptions::new();
    /// assert!(!options.strict);
    /// assert!(!options.table);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies registration-grade conversion rules to the whole-string
    /// attempt (and to Punycode decoding when that mode is active).
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Requests the per-rune table rows.
    #[must_use]
    pub fn with_table(mut self, table: bool) -> Self {
        self.table = table;
        self
    }

    /// Requests per-script codepoint counts.
    #[must_use]
    pub fn with_show_ranges(mut self, show_ranges: bool) -> Self {
        self.show_ranges = show_ranges;
        self
    }

    /// Treats the input as Punycode and decodes it to UTF-8.
    ///
    /// The byte/character counts and table rows still describe the input as
    /// given; the decoded form is reported separately.
    #[must_use]
    pub fn with_decode_punycode(mut self, decode: bool) -> Self {
        self.decode_punycode = decode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = InspectOptions::new();
        assert!(!options.strict);
        assert!(!options.table);
        assert!(!options.show_ranges);
        assert!(!options.decode_punycode);
    }

    #[test]
    fn test_builder_chains() {
        let options = InspectOptions::new()
            .with_strict(true)
            .with_table(true)
            .with_show_ranges(true)
            .with_decode_punycode(true);
        assert!(options.strict);
        assert!(options.table);
        assert!(options.show_ranges);
        assert!(options.decode_punycode);
    }
}
