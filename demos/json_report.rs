//! Emit a full inspection report as JSON.
//!
//! Run with: cargo run --example json_report

use runelens::{inspect_with_options, to_json, InspectOptions};

fn main() -> runelens::Result<()> {
    // Latin 'a' next to a Cyrillic 'а' — a classic lookalike pair.
    let input = "pаypal.com";

    let options = InspectOptions::new().with_table(true).with_show_ranges(true);
    let report = inspect_with_options(input, &options);

    println!("{}", to_json(&report)?);
    Ok(())
}
