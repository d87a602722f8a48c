//! IDNA/Punycode conversion and the per-rule violation breakdown.
//!
//! The conversion engine is the `idna` crate, consumed as a black box: this
//! module only drives it with different flag combinations and interprets
//! success or failure. Two operations sit on top of it:
//!
//! - **Whole-string conversion** ([`to_puny`] / [`from_puny`]) under the
//!   lenient or strict configuration from [`conversion_config`]. Failure
//!   here is a normal result, not a fault.
//! - **Diagnostic decomposition** ([`violated_rules`]): when the whole
//!   string would not convert, each codepoint is converted in isolation
//!   under six named rule configurations, and the failing rule names
//!   explain *why*. This is deliberately finer-grained than the
//!   whole-string attempt and is only worth computing once that attempt
//!   has already failed.
//!
//! The engine enforces the bidi rule (RFC 5893), the contextual-joiner
//! rule (RFC 5892) and label validity (RFC 5891) unconditionally, exposing
//! toggles only for STD3 ASCII rules, hyphen placement and DNS length.
//! [`Rule::CheckBidi`], [`Rule::CheckJoiners`] and [`Rule::ValidateLabels`]
//! therefore share the base configuration and agree on every codepoint; the
//! remaining three differ exactly where the engine has toggles. A codepoint
//! the engine disallows outright fails all six.

use std::fmt;

use idna::Config;
use serde::{Serialize, Serializer};

/// One of the six named IDNA validation rule sets a codepoint can violate.
///
/// The set of names is fixed; evaluation order is the declaration order
/// below and is stable within a run, but carries no meaning — compare
/// results as sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// RFC 5893 bidirectional rule.
    CheckBidi,
    /// RFC 5892 contextual joiner rule.
    CheckJoiners,
    /// UTS 46 hyphen placement rule.
    CheckHyphens,
    /// RFC 5891 registration-validity rules.
    ValidateForRegistration,
    /// RFC 5891 label-validity rules.
    ValidateLabels,
    /// RFC 1034/5891/UTS 46 strict ASCII rules.
    UseStd3AsciiRules,
}

impl Rule {
    /// Every rule, in evaluation order.
    pub const ALL: [Rule; 6] = [
        Rule::CheckBidi,
        Rule::CheckJoiners,
        Rule::CheckHyphens,
        Rule::ValidateForRegistration,
        Rule::ValidateLabels,
        Rule::UseStd3AsciiRules,
    ];

    /// The rule's display label, including the defining document.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rule::CheckBidi => "CheckBidi (RFC 5893)",
            Rule::CheckJoiners => "CheckJoiners (RFC 5892)",
            Rule::CheckHyphens => "CheckHyphens (UTS 46)",
            Rule::ValidateForRegistration => "ValidateForRegistration (RFC 5891)",
            Rule::ValidateLabels => "ValidateLabels (RFC 5891)",
            Rule::UseStd3AsciiRules => "UseSTD3ASCIIRules (RFC 1034, 5891, UTS 46)",
        }
    }

    // The engine configuration this rule name maps onto. See the module
    // docs for why three names share the base configuration.
    fn config(self) -> Config {
        let base = Config::default();
        match self {
            Rule::CheckBidi | Rule::CheckJoiners | Rule::ValidateLabels => base,
            Rule::CheckHyphens => base.check_hyphens(true),
            Rule::ValidateForRegistration => base
                .use_std3_ascii_rules(true)
                .check_hyphens(true)
                .verify_dns_length(true),
            Rule::UseStd3AsciiRules => base.use_std3_ascii_rules(true),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Rule {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

/// The whole-string conversion configuration.
///
/// Lenient mode is the engine's default processing. Strict mode adds the
/// registration-grade checks: STD3 ASCII rules, hyphen placement and DNS
/// length limits.
#[must_use]
pub fn conversion_config(strict: bool) -> Config {
    let config = Config::default();
    if strict {
        config
            .use_std3_ascii_rules(true)
            .check_hyphens(true)
            .verify_dns_length(true)
    } else {
        config
    }
}

/// Converts a string to its Punycode (ASCII) form under `config`.
///
/// # Examples
///
/// ```rust
/// use runelens::{conversion_config, to_puny};
///
/// let config = conversion_config(false);
/// assert_eq!(to_puny("example", config).unwrap(), "example");
/// assert_eq!(to_puny("exämple", config).unwrap(), "xn--exmple-cua");
/// ```
///
/// # Errors
///
/// Returns the engine's error bundle when the input violates the active
/// rule set. Callers treat this as a normal outcome.
pub fn to_puny(s: &str, config: Config) -> std::result::Result<String, idna::Errors> {
    config.to_ascii(s)
}

/// Decodes a Punycode string back to UTF-8 under `config`.
///
/// Mirrors the engine's contract: the best-effort decoded string is always
/// returned, alongside the validity verdict.
#[must_use]
pub fn from_puny(s: &str, config: Config) -> (String, std::result::Result<(), idna::Errors>) {
    config.to_unicode(s)
}

/// Reports whether `s` converts to Punycode under `config`.
#[must_use]
pub fn can_puny_convert(s: &str, config: Config) -> bool {
    to_puny(s, config).is_ok()
}

/// Tests one codepoint, in isolation, against each of the six rule sets
/// and returns the ones it violates.
///
/// An empty vector means no violations; the result is never conceptually
/// "null". Ordering follows [`Rule::ALL`].
///
/// # Examples
///
/// ```rust
/// use runelens::{violated_rules, Rule};
///
/// assert!(violated_rules('a').is_empty());
/// assert!(violated_rules('_').contains(&Rule::UseStd3AsciiRules));
/// ```
#[must_use]
pub fn violated_rules(ch: char) -> Vec<Rule> {
    let s = ch.to_string();
    Rule::ALL
        .iter()
        .copied()
        .filter(|rule| !can_puny_convert(&s, rule.config()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn as_set(rules: &[Rule]) -> HashSet<Rule> {
        rules.iter().copied().collect()
    }

    #[test]
    fn test_to_puny_ascii_passthrough() {
        assert_eq!(
            to_puny("example", conversion_config(false)).unwrap(),
            "example"
        );
    }

    #[test]
    fn test_to_puny_unicode() {
        assert_eq!(
            to_puny("exämple", conversion_config(false)).unwrap(),
            "xn--exmple-cua"
        );
    }

    #[test]
    fn test_to_puny_rejects_directional_override() {
        assert!(to_puny("ex\u{202E}ample", conversion_config(false)).is_err());
    }

    #[test]
    fn test_hyphen_placement_only_checked_when_asked() {
        let input = "--example--invalid";
        assert!(can_puny_convert(input, conversion_config(false)));
        assert!(!can_puny_convert(
            input,
            Config::default().check_hyphens(true)
        ));
    }

    #[test]
    fn test_from_puny_round_trip() {
        let (decoded, result) = from_puny("xn--exmple-cua", conversion_config(false));
        assert!(result.is_ok());
        assert_eq!(decoded, "exämple");
    }

    #[test]
    fn test_from_puny_overflowing_label() {
        // Nine trailing '9' digits overflow the Punycode delta arithmetic.
        let (_, result) = from_puny("xn--999999999", conversion_config(false));
        assert!(result.is_err());
    }

    #[test]
    fn test_no_violations_for_plain_letters() {
        assert!(violated_rules('a').is_empty());
        assert!(violated_rules('ä').is_empty());
    }

    #[test]
    fn test_underscore_violates_std3_rules() {
        let violated = as_set(&violated_rules('_'));
        let want = as_set(&[Rule::ValidateForRegistration, Rule::UseStd3AsciiRules]);
        assert_eq!(violated, want);
    }

    #[test]
    fn test_hyphen_violates_placement_rules() {
        let violated = as_set(&violated_rules('-'));
        let want = as_set(&[Rule::CheckHyphens, Rule::ValidateForRegistration]);
        assert_eq!(violated, want);
    }

    #[test]
    fn test_disallowed_codepoint_fails_every_rule() {
        // The engine disallows directional overrides under every
        // configuration, so the whole set reports failure.
        let violated = violated_rules('\u{202E}');
        assert_eq!(as_set(&violated), as_set(&Rule::ALL));
    }

    #[test]
    fn test_rule_order_is_stable() {
        // Same codepoint, same run: same sequence.
        assert_eq!(violated_rules('\u{202E}'), violated_rules('\u{202E}'));
    }

    #[test]
    fn test_labels_are_fixed() {
        assert_eq!(Rule::CheckBidi.label(), "CheckBidi (RFC 5893)");
        assert_eq!(
            Rule::UseStd3AsciiRules.label(),
            "UseSTD3ASCIIRules (RFC 1034, 5891, UTS 46)"
        );
        assert_eq!(Rule::ALL.len(), 6);
    }
}
