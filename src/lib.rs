//! # runelens
//!
//! A terminal-safe Unicode string inspector: codepoint breakdowns, script
//! ranges, and IDNA/Punycode diagnostics.
//!
//! ## Why?
//!
//! A string that *looks* like `example` can be almost anything: mixed
//! scripts, invisible joiners, directional overrides, combining marks with
//! no base. `runelens` takes one input string and reports what is actually
//! in it — byte and codepoint counts, the Punycode conversion (or the
//! reasons it fails, rule by rule), per-script codepoint counts, and a
//! per-codepoint table rendered so that hostile input cannot corrupt your
//! terminal.
//!
//! ## Key Features
//!
//! - **Terminal-safe rendering**: control bytes, format characters and
//!   variation selectors render as `^?`; bare combining marks attach to a
//!   dotted-circle placeholder instead of your prompt
//! - **Width-aware tables**: double-width CJK glyphs and narrow glyphs
//!   share an aligned column
//! - **IDNA rule decomposition**: when a string won't convert, each
//!   codepoint is tested against six named rule sets to explain why
//! - **Script-range counting**: spot mixed-script (lookalike) strings and
//!   gate on them in scripts via an exit code
//! - **Structured output**: every report serializes to JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use runelens::{inspect, inspect_with_options, InspectOptions};
//!
//! // Header-level facts.
//! let report = inspect("exämple");
//! assert_eq!(report.character_count, 7);
//! assert_eq!(report.punycode.as_deref(), Some("xn--exmple-cua"));
//!
//! // Full per-rune breakdown plus script ranges.
//! let options = InspectOptions::new().with_table(true).with_show_ranges(true);
//! let report = inspect_with_options("exämple", &options);
//! assert_eq!(report.rows.len(), 7);
//! ```
//!
//! ## Rendering hostile input
//!
//! ```rust
//! use runelens::render;
//!
//! // A right-to-left override must never reach the terminal raw.
//! assert_eq!(render('\u{202E}'), "^?");
//!
//! // A bare combining acute accent gets a visible base to hang on.
//! assert_eq!(render('\u{0301}'), " \u{25CC}\u{0301}");
//! ```
//!
//! ## Diagnosing a conversion failure
//!
//! ```rust
//! use runelens::{inspect_with_options, InspectOptions};
//!
//! let report = inspect_with_options("a\u{202E}b", &InspectOptions::new().with_table(true));
//! assert!(report.conversion_failed());
//! // The offending codepoint carries the rule names it violates.
//! assert!(!report.rows[1].violated_rules.is_empty());
//! ```
//!
//! ## Scope
//!
//! Everything is request-scoped and synchronous: no I/O, no network, no
//! persistence, no shared state. Classification answers come from
//! maintained Unicode property tables; Punycode conversion is delegated to
//! the `idna` crate and consumed as a black box.

pub mod classify;
pub mod error;
pub mod format;
pub mod glyph;
pub mod options;
pub mod puny;
pub mod ranges;
pub mod report;

pub use classify::{classify, script_name, RuneClass};
pub use error::{Error, Result};
pub use format::{plain_text, to_json};
pub use glyph::{pad, render, PLACEHOLDER};
pub use options::InspectOptions;
pub use puny::{can_puny_convert, conversion_config, from_puny, to_puny, violated_rules, Rule};
pub use ranges::{locale_members, ranges_of, spans_multiple_ranges, RangeMap, COMMON};
pub use report::{Inspection, RuneRow};

/// Inspects a string with default options: conversion attempt and counts
/// only.
///
/// # Examples
///
/// ```rust
/// use runelens::inspect;
///
/// let report = inspect("piñata");
/// assert_eq!(report.punycode.as_deref(), Some("xn--piata-pta"));
/// ```
#[must_use]
pub fn inspect(input: &str) -> Inspection {
    Inspection::of(input, &InspectOptions::default())
}

/// Inspects a string under explicit options.
///
/// # Examples
///
/// ```rust
/// use runelens::{inspect_with_options, InspectOptions};
///
/// let options = InspectOptions::new().with_show_ranges(true);
/// let report = inspect_with_options("aα", &options);
/// assert_eq!(report.ranges.unwrap().len(), 2);
/// ```
#[must_use]
pub fn inspect_with_options(input: &str, options: &InspectOptions) -> Inspection {
    Inspection::of(input, options)
}
