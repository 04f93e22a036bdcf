//! Number to Vietnamese words conversion.
//!
//! The engine works on digit strings rather than machine integers so that
//! arbitrarily long inputs (`1.500.000.000` and beyond) never overflow.
//! Integer digits are partitioned into groups of three from the
//! least-significant end; each group renders as a 0-999 phrase and groups
//! are joined by magnitude words composed from `nghìn`/`triệu` and
//! repeated `tỷ`.

use vinorm_core::NumberValue;

/// Word forms for single digits.
const DIGITS: [&str; 10] = [
    "không", "một", "hai", "ba", "bốn", "năm", "sáu", "bảy", "tám", "chín",
];

/// Beyond this many integer digits the composed magnitude names stop being
/// conventional Vietnamese, so the engine degrades to digit-by-digit reading.
const MAX_SPELLED_DIGITS: usize = 27;

/// Spell a parsed numeric value, including sign and fractional digits.
///
/// The fractional part reads as "phẩy" followed by each digit's word form
/// in sequence, matching spoken-number convention for decimals.
pub fn spell(value: &NumberValue) -> String {
    let mut parts: Vec<String> = Vec::new();
    if value.negative {
        parts.push("âm".to_string());
    }
    parts.push(integer_to_words(value.significant_int_digits()));
    if let Some(frac) = value.frac_digits.as_deref() {
        if !frac.is_empty() {
            parts.push("phẩy".to_string());
            parts.push(digits_individually(frac));
        }
    }
    parts.join(" ")
}

/// Convert a raw digit string (optionally signed) to words.
///
/// Input that is not a plain decimal number is returned unchanged; the
/// recognizers only hand over digit spans, but a silent fallback keeps the
/// pipeline best-effort.
pub fn number_to_words(raw: &str) -> String {
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return raw.to_string();
    }
    let mut value = NumberValue::integer(digits);
    if negative {
        value = value.negated();
    }
    spell(&value)
}

/// Convert an unsigned integer digit string to words.
pub fn integer_to_words(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        return DIGITS[0].to_string();
    }
    if trimmed.len() > MAX_SPELLED_DIGITS {
        return digits_individually(trimmed);
    }

    // Split into groups of three, most significant first.
    let bytes = trimmed.as_bytes();
    let mut groups: Vec<u16> = Vec::with_capacity(bytes.len() / 3 + 1);
    let head = bytes.len() % 3;
    if head > 0 {
        groups.push(group_value(&bytes[..head]));
    }
    let mut i = head;
    while i < bytes.len() {
        groups.push(group_value(&bytes[i..i + 3]));
        i += 3;
    }

    let total = groups.len();
    let mut words: Vec<String> = Vec::new();
    let mut leading = true;
    for (pos, &group) in groups.iter().enumerate() {
        if group == 0 {
            continue;
        }
        words.push(group_to_words(group, leading));
        push_magnitude(total - 1 - pos, &mut words);
        leading = false;
    }
    words.join(" ")
}

/// Read a digit sequence one digit at a time (phone numbers, oversized
/// numerals, fractional parts).
pub fn digits_individually(digits: &str) -> String {
    digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| DIGITS[d as usize])
        .collect::<Vec<_>>()
        .join(" ")
}

/// Ordinal word for a small count: "thứ 2" reads "thứ hai", never
/// "thứ nhì"; 1 and 4 take their special forms.
pub fn ordinal_words(num: &str) -> String {
    match num.trim_start_matches('0') {
        "1" => "nhất".to_string(),
        "4" => "tư".to_string(),
        _ => number_to_words(num),
    }
}

fn group_value(digits: &[u8]) -> u16 {
    digits.iter().fold(0u16, |acc, &b| acc * 10 + (b - b'0') as u16)
}

/// Render a non-zero 1-999 group.
///
/// Non-leading groups always carry the "không trăm" filler when their
/// hundreds digit is zero, and "lẻ" bridges a zero tens digit.
fn group_to_words(group: u16, leading: bool) -> String {
    let hundreds = (group / 100) as usize;
    let rest = group % 100;
    let mut parts: Vec<String> = Vec::new();

    if hundreds > 0 {
        parts.push(format!("{} trăm", DIGITS[hundreds]));
    } else if !leading {
        parts.push("không trăm".to_string());
    }

    if rest == 0 {
        // nothing after the hundreds
    } else if rest < 10 {
        if hundreds > 0 || !leading {
            parts.push(format!("lẻ {}", DIGITS[rest as usize]));
        } else {
            parts.push(DIGITS[rest as usize].to_string());
        }
    } else {
        parts.push(tens_to_words(rest));
    }

    parts.join(" ")
}

/// Render 10-99 with the tens irregularities: "mười" for the teens,
/// "mốt"/"tư"/"lăm" after "mươi".
fn tens_to_words(rest: u16) -> String {
    if rest < 20 {
        let unit = (rest - 10) as usize;
        return match unit {
            0 => "mười".to_string(),
            5 => "mười lăm".to_string(),
            _ => format!("mười {}", DIGITS[unit]),
        };
    }
    let tens = (rest / 10) as usize;
    let unit = (rest % 10) as usize;
    let base = format!("{} mươi", DIGITS[tens]);
    match unit {
        0 => base,
        1 => format!("{base} mốt"),
        4 => format!("{base} tư"),
        5 => format!("{base} lăm"),
        _ => format!("{base} {}", DIGITS[unit]),
    }
}

/// Append the magnitude words for a group index (0 = units group).
///
/// Index % 3 selects the base word, and one "tỷ" is appended per factor
/// of a billion: nghìn, triệu, tỷ, nghìn tỷ, triệu tỷ, tỷ tỷ, ...
fn push_magnitude(index: usize, words: &mut Vec<String>) {
    match index % 3 {
        1 => words.push("nghìn".to_string()),
        2 => words.push("triệu".to_string()),
        _ => {}
    }
    for _ in 0..index / 3 {
        words.push("tỷ".to_string());
    }
}
