//! Basic string inspection.
//!
//! Run with: cargo run --example simple

use runelens::{inspect_with_options, plain_text, InspectOptions};

fn main() {
    let input = "piñata";

    let options = InspectOptions::new().with_table(true).with_show_ranges(true);
    let report = inspect_with_options(input, &options);

    print!("{}", plain_text(&report));

    assert_eq!(report.punycode.as_deref(), Some("xn--piata-pta"));
    println!("✓ converts cleanly");
}
