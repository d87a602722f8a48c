//! Terminal-safe glyph rendering and width-aware padding.
//!
//! Printing arbitrary codepoints into a terminal is a box of mysteries:
//! control bytes drive escape sequences, an unclosed directional override
//! re-orders everything printed after it, and a bare combining mark attaches
//! itself to whatever column happens to precede it. [`render`] produces a
//! representation that cannot do any of that, and [`pad`] keeps table
//! columns aligned when single- and double-width glyphs share a column.
//!
//! ## Substitution policy
//!
//! In decision order, for one codepoint:
//!
//! 1. Controls (C0, DEL, C1), format characters (every bidirectional
//!    control, both join controls, the word joiner, the deprecated
//!    U+206A..U+206F range, soft hyphen, ...) and variation selectors
//!    render as the caret notation `^?`. A format character is invisible
//!    by definition; there is no safe visible form to show instead.
//! 2. The U+035C..U+0362 sub-range of two-sided combining diacritics
//!    renders between two dotted-circle placeholders: `◌͡◌`.
//! 3. Other combining marks and diacritics render attached to a single
//!    placeholder: ` ◌́`. Caret and backtick carry the Diacritic property
//!    but do not visually combine, so they render as themselves.
//! 4. Everything else renders as itself behind one leading space.
//!
//! Narrow output clusters at two terminal columns and wide glyphs take a
//! third; [`pad`] absorbs the difference so the table's trailing column
//! boundary stays put.

use std::ops::RangeInclusive;

use unicode_width::UnicodeWidthStr;

use crate::classify::classify;

/// Dotted circle, the conventional stand-in base for an isolated combining
/// mark.
pub const PLACEHOLDER: char = '\u{25CC}';

// Combining double diacritics that span the preceding and following
// character, e.g. the double inverted breve.
const TWO_SIDED: RangeInclusive<char> = '\u{035C}'..='\u{0362}';

/// Renders one codepoint as a printable string.
///
/// Total and deterministic: every valid `char` maps to exactly one of
/// `^?`, `◌x◌`, ` ◌x`, or ` x`. The result never contains a raw C0/C1
/// byte, a bidirectional control, a joiner, a variation selector or a
/// deprecated format character.
///
/// # Examples
///
/// ```rust
/// use runelens::render;
///
/// assert_eq!(render('A'), " A");
/// assert_eq!(render('\u{0007}'), "^?");
/// assert_eq!(render('\u{0301}'), " \u{25CC}\u{0301}");
/// ```
#[must_use]
pub fn render(ch: char) -> String {
    let class = classify(ch);

    if class.is_control
        || class.is_format_char
        || class.is_bidi_control
        || class.is_join_control
        || class.is_variation_selector
    {
        return "^?".to_string();
    }

    if TWO_SIDED.contains(&ch) {
        return format!("{PLACEHOLDER}{ch}{PLACEHOLDER}");
    }

    if class.is_diacritic && !matches!(ch, '^' | '`') {
        return format!(" {PLACEHOLDER}{ch}");
    }

    format!(" {ch}")
}

/// Renders one codepoint padded to a fixed display width.
///
/// The rendered glyph is left-padded with spaces so the total terminal
/// width equals `base_width` whether the glyph occupies one column or two;
/// wide glyphs simply receive fewer pad spaces. Occupied columns are
/// measured on the rendered string, so the trailing column boundary stays
/// constant across mixed-width rows.
///
/// # Examples
///
/// ```rust
/// use runelens::pad;
/// use unicode_width::UnicodeWidthStr;
///
/// let narrow = pad('a', 6);
/// let wide = pad('一', 6);
/// assert_eq!(narrow.width(), wide.width());
/// ```
#[must_use]
pub fn pad(ch: char, base_width: usize) -> String {
    let glyph = render(ch);
    let occupied = glyph.as_str().width();
    let padding = base_width.saturating_sub(occupied);

    let mut out = String::with_capacity(padding + glyph.len());
    for _ in 0..padding {
        out.push(' ');
    }
    out.push_str(&glyph);
    out
}
