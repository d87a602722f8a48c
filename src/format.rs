//! Plain-text and JSON presentation of an [`Inspection`].
//!
//! The gather step already decided *what* appears in the report; this
//! module only decides how it looks. Plain text mirrors the classic
//! label/value header followed by an aligned rune table; JSON is the
//! serde model, pretty-printed.

use crate::error::Result;
use crate::ranges::RangeMap;
use crate::report::{Inspection, RuneRow, GLYPH_COLUMNS};

/// Renders a report as aligned plain text.
///
/// The `conversion errors` column only appears when the whole-string
/// conversion failed — on success there is nothing to explain.
///
/// # Examples
///
/// ```rust
/// use runelens::{inspect, plain_text};
///
/// let out = plain_text(&inspect("hi"));
/// assert!(out.contains("total bytes:\t2"));
/// assert!(out.contains("punycode:\thi"));
/// ```
#[must_use]
pub fn plain_text(report: &Inspection) -> String {
    let mut out = String::new();

    out.push_str(&format!("total bytes:\t{}\n", report.total_bytes));
    out.push_str(&format!("characters:\t{}\n", report.character_count));

    if let Some(decoded) = &report.decoded {
        if report.conversion_failed() {
            out.push_str("utf-8:\tcould not decode punycode input\n");
        } else {
            out.push_str(&format!("utf-8:\t{decoded}\n"));
        }
    } else if let Some(punycode) = &report.punycode {
        out.push_str(&format!("punycode:\t{punycode}\n"));
    } else {
        out.push_str("punycode:\tcould not punycode-convert input\n");
    }

    if let Some(ranges) = &report.ranges {
        push_ranges(&mut out, ranges);
    }

    if !report.rows.is_empty() {
        push_table(&mut out, &report.rows, report.conversion_failed());
    }

    out
}

/// Renders a report as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`Error::Json`](crate::Error::Json) if serialization fails.
pub fn to_json(report: &Inspection) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

fn push_ranges(out: &mut String, ranges: &RangeMap) {
    for (script, count) in ranges.iter() {
        out.push_str(&format!("{script}: {count}\n"));
    }
}

fn push_table(out: &mut String, rows: &[RuneRow], failed: bool) {
    out.push_str(&format!(
        "{:>width$} | {:>10} | {}",
        "glyph",
        "code point",
        "bytes (len)",
        width = GLYPH_COLUMNS
    ));
    if failed {
        out.push_str(" | conversion errors");
    }
    out.push('\n');

    for row in rows {
        out.push_str(&format!(
            "{} | {:>10} | {} ({})",
            row.printable, row.code_point_hex, row.utf8_hex, row.byte_length
        ));
        if failed {
            out.push_str(" | ");
            let labels: Vec<&str> = row.violated_rules.iter().map(|rule| rule.label()).collect();
            out.push_str(&labels.join(", "));
        }
        out.push('\n');
    }
}
