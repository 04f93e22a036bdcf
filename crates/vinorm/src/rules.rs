//! Preprocessing rules.
//!
//! Each rule is one pipeline stage. Order is load-bearing: year and
//! percentage ranges must run before the date recognizers (so `3-5%` is
//! never a day range), separators are stripped before currency, and the
//! standalone-number stage comes last so it only sees unclaimed digits.

use vinorm_core::NormResult;

use crate::{clean, datetime, number};

/// A text preprocessing rule.
pub trait Rule: Send + Sync + std::fmt::Debug {
    /// Get the rule name.
    fn name(&self) -> &str;

    /// Apply the rule to the input text.
    fn apply(&self, input: &str) -> NormResult<String>;
}

/// Create the full preprocessing pipeline in execution order.
pub fn preprocessing_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(UnicodeRule),
        Box::new(SpecialCharRule),
        Box::new(PunctuationRule),
        Box::new(CleanupRule),
        Box::new(YearRangeRule),
        Box::new(PercentRangeRule),
        Box::new(DateRule),
        Box::new(TimeRule),
        Box::new(OrdinalRule),
        Box::new(ThousandSeparatorRule),
        Box::new(CurrencyRule),
        Box::new(PercentRule),
        Box::new(PhoneRule),
        Box::new(DecimalRule),
        Box::new(UnitRule),
        Box::new(RomanNumeralRule),
        Box::new(StandaloneNumberRule),
        Box::new(WhitespaceRule),
    ]
}

macro_rules! stage_rule {
    ($(#[$doc:meta])* $rule:ident, $name:literal, $func:path) => {
        $(#[$doc])*
        #[derive(Debug)]
        pub struct $rule;

        impl Rule for $rule {
            fn name(&self) -> &str {
                $name
            }

            fn apply(&self, input: &str) -> NormResult<String> {
                Ok($func(input))
            }
        }
    };
}

stage_rule!(
    /// Unicode NFC composition.
    UnicodeRule,
    "unicode",
    clean::normalize_unicode
);
stage_rule!(
    /// Unspeakable characters, URLs, and e-mail addresses.
    SpecialCharRule,
    "special_chars",
    clean::replace_special_chars
);
stage_rule!(
    /// Typographic punctuation folding.
    PunctuationRule,
    "punctuation",
    clean::normalize_punctuation
);
stage_rule!(
    /// Emoji and foreign-script removal.
    CleanupRule,
    "cleanup",
    clean::clean_for_tts
);
stage_rule!(
    /// Year ranges: 1873-1907.
    YearRangeRule,
    "year_range",
    datetime::convert_year_range
);
stage_rule!(
    /// Percentage ranges: 3-5%.
    PercentRangeRule,
    "percent_range",
    number::convert_percentage_range
);
stage_rule!(
    /// Dates and date ranges.
    DateRule,
    "date",
    datetime::convert_date
);
stage_rule!(
    /// Clock times.
    TimeRule,
    "time",
    datetime::convert_time
);
stage_rule!(
    /// Counted-noun ordinals: thứ 2.
    OrdinalRule,
    "ordinal",
    number::convert_ordinals
);
stage_rule!(
    /// Dotted thousand separators.
    ThousandSeparatorRule,
    "thousand_separator",
    number::remove_thousand_separators
);
stage_rule!(
    /// VND and USD amounts.
    CurrencyRule,
    "currency",
    number::convert_currency
);
stage_rule!(
    /// Decimal and whole percentages.
    PercentRule,
    "percent",
    number::convert_percentage
);
stage_rule!(
    /// Phone numbers, digit by digit.
    PhoneRule,
    "phone",
    number::convert_phone_numbers
);
stage_rule!(
    /// Comma decimals.
    DecimalRule,
    "decimal",
    number::convert_decimals
);
stage_rule!(
    /// Measurement units.
    UnitRule,
    "unit",
    number::convert_measurement_units
);
stage_rule!(
    /// Uppercase Roman numerals below 100.
    RomanNumeralRule,
    "roman_numeral",
    number::convert_roman_numerals
);
stage_rule!(
    /// Remaining digit spans.
    StandaloneNumberRule,
    "standalone_number",
    number::convert_standalone_numbers
);

/// Collapse whitespace runs and trim.
#[derive(Debug)]
pub struct WhitespaceRule;

impl Rule for WhitespaceRule {
    fn name(&self) -> &str {
        "whitespace"
    }

    fn apply(&self, input: &str) -> NormResult<String> {
        Ok(input.split_whitespace().collect::<Vec<_>>().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_all(input: &str) -> String {
        let mut text = input.to_string();
        for rule in preprocessing_rules() {
            text = rule.apply(&text).unwrap();
        }
        text
    }

    #[test]
    fn test_rule_order() {
        let rules = preprocessing_rules();
        let names: Vec<&str> = rules.iter().map(|r| r.name()).collect();
        let year = names.iter().position(|&n| n == "year_range").unwrap();
        let pct_range = names.iter().position(|&n| n == "percent_range").unwrap();
        let date = names.iter().position(|&n| n == "date").unwrap();
        let standalone = names.iter().position(|&n| n == "standalone_number").unwrap();
        assert!(year < date);
        assert!(pct_range < date);
        assert!(date < standalone);
        assert_eq!(names.last(), Some(&"whitespace"));
    }

    #[test]
    fn test_percent_range_beats_date() {
        // Without the ordering, "3-5%" would read as a day range.
        assert_eq!(run_all("tăng 3-5%"), "tăng ba đến năm phần trăm");
    }

    #[test]
    fn test_whitespace_rule() {
        assert_eq!(WhitespaceRule.apply("  a \t b\n\nc ").unwrap(), "a b c");
    }

    #[test]
    fn test_full_chain_date_sentence() {
        assert_eq!(
            run_all("Hôm nay là 25/12/2023"),
            "Hôm nay là ngày hai mươi lăm tháng mười hai năm hai nghìn không trăm hai mươi ba"
        );
    }

    #[test]
    fn test_full_chain_mixed() {
        assert_eq!(
            run_all("giá 25.000đ, giảm 10%"),
            "giá hai mươi lăm nghìn đồng, giảm mười phần trăm"
        );
    }

    #[test]
    fn test_chain_is_idempotent_on_worded_text() {
        let once = run_all("lúc 14:30 ngày 2/9");
        assert_eq!(run_all(&once), once);
    }
}
