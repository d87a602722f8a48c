//! Precomposed vs. combining-sequence input.
//!
//! `ñ` can arrive as the single codepoint U+00F1 or as `n` followed by the
//! combining tilde U+0303. The two are canonically equivalent but are not
//! the same string, and the inspector shows the difference byte by byte.
//!
//! Run with: cargo run --example composed

use runelens::{inspect_with_options, plain_text, to_puny, conversion_config, InspectOptions};

fn main() {
    let single = "piñata";
    let composed = "pin\u{0303}ata";

    println!("single == composed: {}", single == composed);
    println!();

    let options = InspectOptions::new().with_table(true);
    for (label, word) in [("single", single), ("composed", composed)] {
        println!("--- {label}: {word}");
        print!("{}", plain_text(&inspect_with_options(word, &options)));
        println!();
    }

    // The conversion engine normalizes first, so both spellings land on
    // the same Punycode.
    let config = conversion_config(false);
    let a = to_puny(single, config).unwrap();
    let b = to_puny(composed, config).unwrap();
    println!("punycode(single)   = {a}");
    println!("punycode(composed) = {b}");
    assert_eq!(a, b);
}
