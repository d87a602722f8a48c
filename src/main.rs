use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use runelens::{
    inspect_with_options, locale_members, plain_text, ranges_of, to_json, InspectOptions, COMMON,
};

#[derive(Parser, Debug)]
#[command(name = "runelens", version)]
#[command(about = "Inspect the Unicode codepoints of a string", long_about = None)]
struct Cli {
    /// The string to inspect
    input: String,

    /// Apply strict (registration-grade) Punycode conversion rules
    #[arg(short, long)]
    strict: bool,

    /// Show the per-rune breakdown table
    #[arg(short, long)]
    table: bool,

    /// Show per-script codepoint counts
    #[arg(short = 'r', long = "show-ranges")]
    show_ranges: bool,

    /// Exit 1 if the input spans multiple non-Common script ranges
    #[arg(short, long)]
    check: bool,

    /// Treat the input as Punycode and decode it to UTF-8
    #[arg(short = 'p', long = "puny")]
    puny: bool,

    /// Emit the report as JSON (takes precedence over --table formatting)
    #[arg(long)]
    json: bool,

    /// Check membership against a locale's exemplar characters
    #[arg(long, value_name = "TAG", hide = true)]
    locale: Option<String>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if let Some(locale) = cli.locale.as_deref() {
        // Unfinished feature: fails loudly rather than pretending to pass.
        locale_members(&cli.input, locale)?;
    }

    if cli.check {
        return Ok(check_ranges(&cli.input));
    }

    let options = InspectOptions::new()
        .with_strict(cli.strict)
        .with_table(cli.table)
        .with_show_ranges(cli.show_ranges)
        .with_decode_punycode(cli.puny);
    let report = inspect_with_options(&cli.input, &options);

    if cli.json {
        println!("{}", to_json(&report)?);
    } else {
        print!("{}", plain_text(&report));
    }

    Ok(ExitCode::SUCCESS)
}

// Mixed-script probe for shell pipelines: prints the offending breakdown
// and signals via the exit code.
fn check_ranges(input: &str) -> ExitCode {
    let ranges = ranges_of(input);
    if ranges.non_common_count() <= 1 {
        return ExitCode::SUCCESS;
    }
    for (script, count) in ranges.iter() {
        if script != COMMON {
            println!("{script}: {count}");
        }
    }
    ExitCode::from(1)
}
