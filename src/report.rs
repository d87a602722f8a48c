//! The inspection report model.
//!
//! [`Inspection::of`] is the gather step: it runs the whole-string
//! conversion attempt, the optional script aggregation and the optional
//! per-rune breakdown over one input string and collects the results into
//! a plain data structure. Everything here is request-scoped — built for
//! one input, dropped afterwards — and serializable, so the presentation
//! layer can render it as text or JSON without recomputing anything.
//!
//! Repeated codepoints produce identical [`RuneRow`]s by construction:
//! rows come out of a cache created for the single gather pass, so the
//! render/pad/byte/rule work happens once per distinct codepoint.

use std::collections::HashMap;

use serde::Serialize;

use crate::glyph::pad;
use crate::options::InspectOptions;
use crate::puny::{conversion_config, from_puny, to_puny, violated_rules, Rule};
use crate::ranges::{ranges_of, RangeMap};

/// Display columns reserved for the glyph column of the rune table.
pub(crate) const GLYPH_COLUMNS: usize = 6;

/// One row of the per-rune breakdown table.
///
/// Duplicated codepoints share identical row content, sourced from the
/// per-invocation cache.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuneRow {
    /// Terminal-safe, width-padded rendering of the codepoint.
    pub printable: String,
    /// The codepoint as `U+XXXX` (four hex digits minimum, uppercase).
    pub code_point_hex: String,
    /// The codepoint's UTF-8 bytes as space-separated hex pairs.
    pub utf8_hex: String,
    /// The codepoint's UTF-8 byte length.
    pub byte_length: usize,
    /// The IDNA rules this codepoint violates in isolation. Empty means
    /// none — never null.
    pub violated_rules: Vec<Rule>,
}

impl RuneRow {
    fn of(ch: char, diagnose: bool) -> Self {
        let mut buf = [0u8; 4];
        let utf8 = ch.encode_utf8(&mut buf).as_bytes();
        let utf8_hex = utf8
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect::<Vec<_>>()
            .join(" ");

        RuneRow {
            printable: pad(ch, GLYPH_COLUMNS),
            code_point_hex: format!("U+{:04X}", ch as u32),
            utf8_hex,
            byte_length: utf8.len(),
            violated_rules: if diagnose { violated_rules(ch) } else { Vec::new() },
        }
    }
}

// Per-invocation memo of finished rows. The same codepoint often repeats in
// real input; the IDNA probes in particular are worth doing once.
#[derive(Debug, Default)]
struct RowCache {
    rows: HashMap<char, RuneRow>,
}

impl RowCache {
    fn row(&mut self, ch: char, diagnose: bool) -> RuneRow {
        self.rows
            .entry(ch)
            .or_insert_with(|| RuneRow::of(ch, diagnose))
            .clone()
    }
}

/// The complete report for one input string.
///
/// # Examples
///
/// ```rust
/// use runelens::{inspect_with_options, InspectOptions};
///
/// let report = inspect_with_options("café", &InspectOptions::new().with_table(true));
/// assert_eq!(report.total_bytes, 5);
/// assert_eq!(report.character_count, 4);
/// assert_eq!(report.punycode.as_deref(), Some("xn--caf-dma"));
/// assert_eq!(report.rows.len(), 4);
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Inspection {
    /// The input string, as given.
    pub input: String,
    /// UTF-8 byte length of the input.
    pub total_bytes: usize,
    /// Number of codepoints in the input.
    pub character_count: usize,
    /// The whole-string Punycode form, when conversion was attempted and
    /// succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub punycode: Option<String>,
    /// The engine's error bundle, when conversion or decoding failed.
    /// Presence of this field is the "conversion failed" signal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub punycode_error: Option<String>,
    /// The best-effort UTF-8 form, in Punycode-decode mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decoded: Option<String>,
    /// Per-script codepoint counts, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranges: Option<RangeMap>,
    /// Per-rune breakdown, when requested.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<RuneRow>,
}

impl Inspection {
    /// Gathers the report for `input` under `options`.
    ///
    /// Conversion failure is reported inside the result, never as an
    /// error; the per-rune rule breakdown is only computed when the
    /// whole-string attempt has already failed.
    #[must_use]
    pub fn of(input: &str, options: &InspectOptions) -> Self {
        let config = conversion_config(options.strict);

        let mut punycode = None;
        let mut punycode_error = None;
        let mut decoded = None;

        if options.decode_punycode {
            // The engine always hands back its best-effort decoding; keep
            // it even when validation failed, alongside the error.
            let (utf8, result) = from_puny(input, config);
            decoded = Some(utf8);
            if let Err(err) = result {
                punycode_error = Some(format!("{err:?}"));
            }
        } else {
            match to_puny(input, config) {
                Ok(ascii) => punycode = Some(ascii),
                Err(err) => punycode_error = Some(format!("{err:?}")),
            }
        }

        let ranges = if options.show_ranges {
            Some(ranges_of(input))
        } else {
            None
        };

        let rows = if options.table {
            // Rule diagnostics explain a failed to-ASCII attempt; in
            // decode mode no such attempt was made.
            let diagnose = punycode_error.is_some() && !options.decode_punycode;
            let mut cache = RowCache::default();
            input.chars().map(|ch| cache.row(ch, diagnose)).collect()
        } else {
            Vec::new()
        };

        Inspection {
            input: input.to_string(),
            total_bytes: input.len(),
            character_count: input.chars().count(),
            punycode,
            punycode_error,
            decoded,
            ranges,
            rows,
        }
    }

    /// Reports whether the whole-string conversion (or decode) failed.
    #[must_use]
    pub fn conversion_failed(&self) -> bool {
        self.punycode_error.is_some()
    }
}
