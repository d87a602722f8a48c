use runelens::{inspect, inspect_with_options, plain_text, to_json, InspectOptions};

#[test]
fn test_table_output() {
    let options = InspectOptions::new().with_table(true);
    let report = inspect_with_options("café", &options);
    let out = plain_text(&report);

    assert!(
        out.contains("code point") && out.contains("bytes (len)"),
        "table header missing in output: {out}"
    );
    for rune in ["c", "a", "f", "é"] {
        assert!(
            report.rows.iter().any(|row| row.printable.trim() == rune),
            "expected rune {rune:?} not found in table: {out}"
        );
    }
}

#[test]
fn test_json_output() {
    struct Case {
        name: &'static str,
        input: &'static str,
        show_ranges: bool,
        want_runes: &'static [&'static str],
    }

    let cases = [
        Case {
            name: "basic table",
            input: "café",
            show_ranges: false,
            want_runes: &["c", "a", "f", "é"],
        },
        Case {
            name: "table with unicode ranges",
            input: "café",
            show_ranges: true,
            want_runes: &["c", "a", "f", "é"],
        },
    ];

    for case in cases {
        let options = InspectOptions::new()
            .with_table(true)
            .with_show_ranges(case.show_ranges);
        let report = inspect_with_options(case.input, &options);

        assert_eq!(report.input, case.input, "{}", case.name);
        assert!(!report.rows.is_empty(), "{}: expected non-empty rows", case.name);
        for rune in case.want_runes {
            assert!(
                report.rows.iter().any(|row| row.printable.trim() == *rune),
                "{}: expected rune {rune:?} in rows",
                case.name
            );
        }
        assert_eq!(
            report.ranges.is_some(),
            case.show_ranges,
            "{}: ranges presence should track the flag",
            case.name
        );

        // The serialized form must parse back with the same content.
        let json = to_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["input"], case.input, "{}", case.name);
    }
}

#[test]
fn test_strict_and_decode_combinations() {
    struct Case {
        name: &'static str,
        input: &'static str,
        strict: bool,
        decode: bool,
        want_err: bool,
    }

    let cases = [
        Case {
            name: "non-strict allows conversion from valid Punycode",
            input: "xn--piata-pta",
            strict: false,
            decode: true,
            want_err: false,
        },
        Case {
            name: "reports conversion error for overflowing Punycode",
            input: "xn--999999999",
            strict: true,
            decode: true,
            want_err: true,
        },
        Case {
            name: "strict allows valid UTF-8 input",
            input: "piñata",
            strict: true,
            decode: false,
            want_err: false,
        },
        Case {
            name: "strict blocks STD3-disallowed input",
            input: "pin_ata",
            strict: true,
            decode: false,
            want_err: true,
        },
    ];

    for case in cases {
        let options = InspectOptions::new()
            .with_strict(case.strict)
            .with_decode_punycode(case.decode);
        let report = inspect_with_options(case.input, &options);
        assert_eq!(
            report.conversion_failed(),
            case.want_err,
            "{}: punycode_error = {:?}",
            case.name,
            report.punycode_error
        );
    }
}

#[test]
fn test_decode_reports_utf8_line() {
    let options = InspectOptions::new().with_decode_punycode(true);
    let report = inspect_with_options("xn--piatasafety-2db", &options);
    let out = plain_text(&report);
    assert!(out.contains("utf-8:"), "decode output missing utf-8 line: {out}");
    assert!(!report.conversion_failed());
}

#[test]
fn test_diagnostics_only_after_whole_string_failure() {
    // Convertible string: no row may carry violations.
    let clean = inspect_with_options("exämple", &InspectOptions::new().with_table(true));
    assert!(!clean.conversion_failed());
    assert!(clean.rows.iter().all(|row| row.violated_rules.is_empty()));

    // Unconvertible string: the offender is flagged.
    let dirty = inspect_with_options("ex\u{202E}ample", &InspectOptions::new().with_table(true));
    assert!(dirty.conversion_failed());
    assert!(dirty
        .rows
        .iter()
        .any(|row| !row.violated_rules.is_empty()));
}

#[test]
fn test_default_report_shape() {
    let report = inspect("exämple");
    assert_eq!(report.total_bytes, 8);
    assert_eq!(report.character_count, 7);
    assert_eq!(report.punycode.as_deref(), Some("xn--exmple-cua"));
    assert!(report.rows.is_empty());
    assert!(report.ranges.is_none());
    assert!(report.decoded.is_none());
}

#[test]
fn test_hostile_input_renders_safely() {
    let options = InspectOptions::new().with_table(true);
    let report = inspect_with_options("a\u{202E}\u{0007}b\u{200D}", &options);
    for row in &report.rows {
        for ch in row.printable.chars() {
            let cp = ch as u32;
            assert!(
                !(cp < 0x20 || cp == 0x7F || (0x80..=0x9F).contains(&cp)),
                "printable leaked a control byte: {:?}",
                row.printable
            );
        }
    }
}
