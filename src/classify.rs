//! Unicode property classification for single codepoints.
//!
//! This module provides [`classify`], the pure, total lookup every other
//! component leans on: for any `char` it answers which script the codepoint
//! belongs to and which derived boolean properties it carries (control,
//! diacritic, wide, bidi-control, join-control, format, variation selector,
//! deprecated).
//!
//! All answers come from maintained Unicode property tables — the Script
//! property via `unicode-script`, General_Category via `unicode-properties`,
//! East Asian Width via `unicode-width`, and the PropList binary properties
//! via ICU4X compiled data. There are no hand-rolled codepoint ranges here:
//! range lists drift as Unicode versions add codepoints, property tables do
//! not.
//!
//! ## Examples
//!
//! ```rust
//! use runelens::classify;
//!
//! let class = classify('一');
//! assert!(class.is_wide);
//! assert_eq!(class.script_name(), "Han");
//!
//! let class = classify('\u{0301}'); // combining acute accent
//! assert!(class.is_diacritic);
//! assert!(!class.is_wide);
//! ```

use icu_properties::sets;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};
use unicode_script::{Script, UnicodeScript};
use unicode_width::UnicodeWidthChar;

/// The derived Unicode properties of one codepoint.
///
/// Produced by [`classify`]; consumed by the glyph renderer, the padder and
/// the script-range aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuneClass {
    /// General_Category Cc: the C0 range, DEL, and the C1 range.
    pub is_control: bool,
    /// The Diacritic property, or a combining mark category (Mn/Mc/Me).
    pub is_diacritic: bool,
    /// Occupies two terminal columns: East Asian Width says so, or the
    /// codepoint belongs to a CJK-family script that renders fullwidth.
    pub is_wide: bool,
    /// The Bidi_Control property (directional embeddings, overrides,
    /// isolates and implicit marks).
    pub is_bidi_control: bool,
    /// The Join_Control property (ZWJ and ZWNJ).
    pub is_join_control: bool,
    /// General_Category Cf.
    pub is_format_char: bool,
    /// The Variation_Selector property. These are category Mn, so without
    /// this flag they would be mistaken for visible combining marks.
    pub is_variation_selector: bool,
    /// The Deprecated property (includes the U+206A..U+206F format range).
    pub is_deprecated: bool,
    /// The UAX #24 Script property value.
    pub script: Script,
}

impl RuneClass {
    /// Returns the script's full name, e.g. `"Latin"`, `"Greek"`,
    /// `"Common"`.
    #[must_use]
    pub fn script_name(&self) -> &'static str {
        self.script.full_name()
    }
}

/// Classifies one codepoint.
///
/// Pure and total: every valid `char` yields an answer and there is no
/// error case.
///
/// # Examples
///
/// ```rust
/// use runelens::classify;
///
/// assert!(classify('\u{0007}').is_control);
/// assert!(classify('\u{200D}').is_join_control);
/// assert!(!classify('a').is_wide);
/// ```
#[must_use]
pub fn classify(ch: char) -> RuneClass {
    let category = ch.general_category();
    let script = ch.script();

    let combining_mark = matches!(
        category,
        GeneralCategory::NonspacingMark
            | GeneralCategory::SpacingMark
            | GeneralCategory::EnclosingMark
    );

    RuneClass {
        is_control: category == GeneralCategory::Control,
        is_diacritic: combining_mark || sets::diacritic().contains(ch),
        is_wide: is_wide(ch, script),
        is_bidi_control: sets::bidi_control().contains(ch),
        is_join_control: sets::join_control().contains(ch),
        is_format_char: category == GeneralCategory::Format,
        is_variation_selector: sets::variation_selector().contains(ch),
        is_deprecated: sets::deprecated().contains(ch),
        script,
    }
}

/// Returns the script name assigned to a codepoint.
///
/// Shared punctuation, digits and symbols answer `"Common"`; combining
/// marks answer `"Inherited"`.
#[must_use]
pub fn script_name(ch: char) -> &'static str {
    ch.script().full_name()
}

// East Asian Width covers the fullwidth blocks and wide-presentation
// symbols; the script clause catches CJK-family codepoints the width table
// leaves narrow (e.g. halfwidth-adjacent jamo additions).
fn is_wide(ch: char, script: Script) -> bool {
    if ch.width() == Some(2) {
        return true;
    }
    matches!(
        script,
        Script::Han | Script::Hiragana | Script::Katakana | Script::Bopomofo | Script::Hangul
    )
}
