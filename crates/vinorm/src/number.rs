//! Numeric span recognizers.
//!
//! Each function rewrites one family of numeric expressions to words.
//! They run in a fixed order from the pipeline: separators are stripped
//! before currency, percentages go before phones, and the standalone
//! catch-all runs last so it only ever sees digits nothing else claimed.

use once_cell::sync::Lazy;
use regex::Regex;
use vinorm_core::NumberValue;

use crate::num2words::{digits_individually, number_to_words, ordinal_words, spell};
use crate::pattern::{rewrite_guarded, tail_char};

static THOUSAND_SEP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,3}(?:\.\d{3})+)").expect("thousand separator pattern"));

static CURRENCY_VND_WORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+(?:,\d+)?)\s*(?:đồng|VND|vnđ)\b").expect("vnd word pattern")
});
static CURRENCY_VND_SIGN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+(?:,\d+)?)đ").expect("vnd sign pattern"));
static CURRENCY_USD_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\s*(\d+(?:,\d+)?)").expect("usd prefix pattern"));
static CURRENCY_USD_SUFFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+(?:,\d+)?)\s*(?:USD|\$)").expect("usd suffix pattern"));

static PERCENT_RANGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*[-–—]\s*(\d+)\s*%").expect("percent range pattern"));
static PERCENT_DECIMAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+),(\d+)\s*%").expect("percent decimal pattern"));
static PERCENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s*%").expect("percent pattern"));

static PHONE_VN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"0\d{9,10}").expect("phone pattern"));
static PHONE_INTL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+84\d{9,10}").expect("intl phone pattern"));

static DECIMAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+),(\d+)").expect("decimal pattern"));

static ROMAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([IVXLC]{2,})\b").expect("roman numeral pattern"));

static STANDALONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+\b").expect("number pattern"));

static ORDINAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(thứ|lần|bước|phần|chương|tập|số)\s*(\d+)").expect("ordinal pattern")
});

/// Spoken names for measurement units. Matched longest-first so `km/h`
/// wins over `km` and `m2` over `m`.
const UNIT_TABLE: &[(&str, &str)] = &[
    // Length
    ("cm", "xăng-ti-mét"),
    ("mm", "mi-li-mét"),
    ("km", "ki-lô-mét"),
    ("dm", "đề-xi-mét"),
    ("hm", "héc-tô-mét"),
    ("dam", "đề-ca-mét"),
    ("m", "mét"),
    ("inch", "in"),
    // Weight
    ("kg", "ki-lô-gam"),
    ("mg", "mi-li-gam"),
    ("g", "gam"),
    ("t", "tấn"),
    ("tấn", "tấn"),
    ("yến", "yến"),
    ("lạng", "lạng"),
    // Volume
    ("ml", "mi-li-lít"),
    ("l", "lít"),
    ("lít", "lít"),
    // Area
    ("m²", "mét vuông"),
    ("m2", "mét vuông"),
    ("km²", "ki-lô-mét vuông"),
    ("km2", "ki-lô-mét vuông"),
    ("ha", "héc-ta"),
    ("cm²", "xăng-ti-mét vuông"),
    ("cm2", "xăng-ti-mét vuông"),
    // Cubic
    ("m³", "mét khối"),
    ("m3", "mét khối"),
    ("cm³", "xăng-ti-mét khối"),
    ("cm3", "xăng-ti-mét khối"),
    ("km³", "ki-lô-mét khối"),
    ("km3", "ki-lô-mét khối"),
    // Time
    ("s", "giây"),
    ("sec", "giây"),
    ("min", "phút"),
    ("h", "giờ"),
    ("hr", "giờ"),
    ("hrs", "giờ"),
    // Speed
    ("km/h", "ki-lô-mét trên giờ"),
    ("kmh", "ki-lô-mét trên giờ"),
    ("m/s", "mét trên giây"),
    ("ms", "mét trên giây"),
    ("mm/h", "mi-li-mét trên giờ"),
    ("cm/s", "xăng-ti-mét trên giây"),
    // Temperature
    ("°C", "độ C"),
    ("°F", "độ F"),
    ("°K", "độ K"),
    ("°R", "độ R"),
    ("°Re", "độ Re"),
    ("°Ro", "độ Ro"),
    ("°N", "độ N"),
    ("°D", "độ D"),
];

struct UnitPattern {
    re: Regex,
    spoken: &'static str,
    single_letter: bool,
}

static UNIT_PATTERNS: Lazy<Vec<UnitPattern>> = Lazy::new(|| {
    let mut units: Vec<(&str, &str)> = UNIT_TABLE.to_vec();
    units.sort_by_key(|&(unit, _)| std::cmp::Reverse(unit.chars().count()));
    units
        .into_iter()
        .map(|(unit, spoken)| UnitPattern {
            re: Regex::new(&format!(r"(?i)(\d+)\s*{}", regex::escape(unit)))
                .expect("unit pattern"),
            spoken,
            single_letter: unit.chars().count() == 1,
        })
        .collect()
});

/// Stage 9: `1.500.000` becomes `1500000`. The match must end the numeric
/// span; a trailing digit, dot, or comma means it was not a separator.
pub(crate) fn remove_thousand_separators(text: &str) -> String {
    rewrite_guarded(&THOUSAND_SEP_RE, text, |caps, tail| {
        match tail_char(tail) {
            Some(c) if c.is_ascii_digit() || c == '.' || c == ',' => caps[0].to_string(),
            _ => caps[0].replace('.', ""),
        }
    })
}

fn spell_amount(raw: &str) -> String {
    number_to_words(&raw.replace(',', ""))
}

/// Stage 10: VND and USD amounts.
pub(crate) fn convert_currency(text: &str) -> String {
    let text = CURRENCY_VND_WORD_RE
        .replace_all(text, |caps: &regex::Captures<'_>| {
            format!("{} đồng", spell_amount(&caps[1]))
        })
        .into_owned();

    // Bare "đ" suffix, but not when it starts a word ("100đen").
    let text = rewrite_guarded(&CURRENCY_VND_SIGN_RE, &text, |caps, tail| {
        if tail_char(tail).map_or(false, |c| c.is_alphabetic()) {
            caps[0].to_string()
        } else {
            format!("{} đồng", spell_amount(&caps[1]))
        }
    });

    let text = CURRENCY_USD_PREFIX_RE
        .replace_all(&text, |caps: &regex::Captures<'_>| {
            format!("{} đô la", spell_amount(&caps[1]))
        })
        .into_owned();

    CURRENCY_USD_SUFFIX_RE
        .replace_all(&text, |caps: &regex::Captures<'_>| {
            format!("{} đô la", spell_amount(&caps[1]))
        })
        .into_owned()
}

/// Stage 6: percentage ranges, ahead of the date recognizers so `3-5%`
/// is never read as a day range.
pub(crate) fn convert_percentage_range(text: &str) -> String {
    PERCENT_RANGE_RE
        .replace_all(text, |caps: &regex::Captures<'_>| {
            format!(
                "{} đến {} phần trăm",
                number_to_words(&caps[1]),
                number_to_words(&caps[2])
            )
        })
        .into_owned()
}

/// Stage 11: decimal and whole percentages (ranges were stage 6).
pub(crate) fn convert_percentage(text: &str) -> String {
    let text = PERCENT_DECIMAL_RE
        .replace_all(text, |caps: &regex::Captures<'_>| {
            format!(
                "{} phẩy {} phần trăm",
                number_to_words(&caps[1]),
                digits_individually(&caps[2])
            )
        })
        .into_owned();

    PERCENT_RE
        .replace_all(&text, |caps: &regex::Captures<'_>| {
            format!("{} phần trăm", number_to_words(&caps[1]))
        })
        .into_owned()
}

/// Stage 12: phone numbers read digit by digit.
pub(crate) fn convert_phone_numbers(text: &str) -> String {
    let text = PHONE_VN_RE
        .replace_all(text, |caps: &regex::Captures<'_>| {
            digits_individually(&caps[0])
        })
        .into_owned();

    PHONE_INTL_RE
        .replace_all(&text, |caps: &regex::Captures<'_>| {
            digits_individually(&caps[0])
        })
        .into_owned()
}

/// Stage 13: comma decimals. The fractional part reads digit by digit,
/// so `7,27` is "bảy phẩy hai bảy" and `3,05` keeps its zero.
pub(crate) fn convert_decimals(text: &str) -> String {
    rewrite_guarded(&DECIMAL_RE, text, |caps, tail| {
        match tail_char(tail) {
            Some(c) if c.is_ascii_digit() || c == ',' => caps[0].to_string(),
            _ => spell(&NumberValue::decimal(&caps[1], &caps[2])),
        }
    })
}

/// Stage 14: measurement units. The digits stay numeric here; the
/// standalone-number stage spells them afterwards.
pub(crate) fn convert_measurement_units(text: &str) -> String {
    let mut text = text.to_string();
    for unit in UNIT_PATTERNS.iter() {
        if !unit.re.is_match(&text) {
            continue;
        }
        text = rewrite_guarded(&unit.re, &text, |caps, tail| {
            let allowed = if unit.single_letter {
                // A letter after the unit (even across whitespace) means
                // this was the start of a word, not a unit.
                let t = tail.trim_start();
                !t.starts_with(|c: char| c.is_alphabetic())
            } else {
                tail_char(tail).map_or(true, |c| !c.is_alphanumeric() && c != '_')
            };
            if allowed {
                format!("{} {}", &caps[1], unit.spoken)
            } else {
                caps[0].to_string()
            }
        });
    }
    text
}

fn roman_to_int(s: &str) -> Option<u32> {
    let mut total: i32 = 0;
    let mut prev = 0;
    for c in s.chars().rev() {
        let val = match c {
            'I' => 1,
            'V' => 5,
            'X' => 10,
            'L' => 50,
            'C' => 100,
            _ => return None,
        };
        if val < prev {
            total -= val;
        } else {
            total += val;
        }
        prev = val;
    }
    u32::try_from(total).ok()
}

/// Roman numerals of two or more letters, values 1-99. Single letters are
/// left alone; "V" is far more often an initial than the number five.
pub(crate) fn convert_roman_numerals(text: &str) -> String {
    ROMAN_RE
        .replace_all(text, |caps: &regex::Captures<'_>| {
            match roman_to_int(&caps[1]) {
                Some(v) if (1..100).contains(&v) => number_to_words(&v.to_string()),
                _ => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Stage 15: whatever digit spans survive every earlier recognizer.
pub(crate) fn convert_standalone_numbers(text: &str) -> String {
    STANDALONE_RE
        .replace_all(text, |caps: &regex::Captures<'_>| {
            number_to_words(&caps[0])
        })
        .into_owned()
}

/// Stage 8: counted nouns take ordinal-style readings ("thứ 4" is
/// "thứ tư", never "thứ bốn").
pub(crate) fn convert_ordinals(text: &str) -> String {
    ORDINAL_RE
        .replace_all(text, |caps: &regex::Captures<'_>| {
            format!("{} {}", &caps[1], ordinal_words(&caps[2]))
        })
        .into_owned()
}
