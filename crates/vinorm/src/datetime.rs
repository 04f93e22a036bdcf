//! Date and time recognizers.
//!
//! Patterns run from most to least specific so a full `DD/MM/YYYY` is
//! consumed before the looser `DD/MM` form can split it. Every numeric
//! component is range-checked; an out-of-range match is returned verbatim
//! and falls through to the later numeric stages.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::num2words::number_to_words;
use crate::pattern::{rewrite_guarded, tail_char};

static YEAR_RANGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{4})\s*-\s*(\d{4})").expect("year range pattern"));

static NGAY_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"ngày\s+(\d{1,2})\s*-\s*(\d{1,2})\s*[/-]\s*(\d{1,2})(?:\s*[/-]\s*(\d{4}))?")
        .expect("ngày range pattern")
});
static DAY_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{1,2})\s*-\s*(\d{1,2})\s*[/-]\s*(\d{1,2})(?:\s*[/-]\s*(\d{4}))?")
        .expect("day range pattern")
});
static MONTH_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{1,2})\s*-\s*(\d{1,2})\s*[/-]\s*(\d{4})").expect("month range pattern")
});
static BIRTH_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(Sinh|sinh)\s+ngày\s+(\d{1,2})[/-](\d{1,2})[/-](\d{4})")
        .expect("birth date pattern")
});
static FULL_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2})[/-](\d{1,2})[/-](\d{4})").expect("full date pattern"));
static MONTH_YEAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:tháng\s+)?(\d{1,2})\s*[/-]\s*(\d{4})").expect("month-year pattern")
});
static DAY_MONTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2})\s*[/-]\s*(\d{1,2})").expect("day-month pattern"));
static X_THANG_Y_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*tháng\s*(\d+)").expect("x tháng y pattern"));
static THANG_X_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"tháng\s*(\d+)").expect("tháng x pattern"));
static NGAY_X_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"ngày\s*(\d+)").expect("ngày x pattern"));

static TIME_HMS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2}):(\d{2})(?::(\d{2}))?").expect("h:mm:ss pattern"));
static TIME_HHMM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d{1,2})h(\d{2})").expect("hh'h'mm pattern"));
static TIME_H_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\d{1,2})h").expect("h pattern"));
static GIO_PHUT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*giờ\s*(\d+)\s*phút").expect("giờ phút pattern"));
static GIO_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s*giờ").expect("giờ pattern"));
static GIO_TAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\d").expect("giờ tail pattern"));

fn parse_component(s: &str) -> u32 {
    s.parse().unwrap_or(u32::MAX)
}

fn valid_day(s: &str) -> bool {
    (1..=31).contains(&parse_component(s))
}

fn valid_month(s: &str) -> bool {
    (1..=12).contains(&parse_component(s))
}

fn valid_year(s: &str) -> bool {
    (1000..=9999).contains(&parse_component(s))
}

/// Stage 5: `1873-1907` reads as "... đến ...". Runs before any other
/// numeric stage so a year pair is never mistaken for arithmetic.
pub(crate) fn convert_year_range(text: &str) -> String {
    YEAR_RANGE_RE
        .replace_all(text, |caps: &regex::Captures<'_>| {
            format!(
                "{} đến {}",
                number_to_words(&caps[1]),
                number_to_words(&caps[2])
            )
        })
        .into_owned()
}

/// Stage 7: date expressions, including day and month ranges.
pub(crate) fn convert_date(text: &str) -> String {
    // ngày D1-D2/M or ngày D1-D2/M/Y
    let text = rewrite_guarded(&NGAY_RANGE_RE, text, |caps, _| {
        let (d1, d2, m) = (&caps[1], &caps[2], &caps[3]);
        let year = caps.get(4).map(|y| y.as_str());
        if valid_day(d1) && valid_day(d2) && valid_month(m) && year.map_or(true, valid_year) {
            let mut out = format!(
                "ngày {} đến {} tháng {}",
                number_to_words(d1),
                number_to_words(d2),
                number_to_words(m)
            );
            if let Some(y) = year {
                out.push_str(&format!(" năm {}", number_to_words(y)));
            }
            out
        } else {
            caps[0].to_string()
        }
    });

    // D1-D2/M or D1-D2/M/Y
    let text = rewrite_guarded(&DAY_RANGE_RE, &text, |caps, _| {
        let (d1, d2, m) = (&caps[1], &caps[2], &caps[3]);
        let year = caps.get(4).map(|y| y.as_str());
        if valid_day(d1) && valid_day(d2) && valid_month(m) && year.map_or(true, valid_year) {
            let mut out = format!(
                "{} đến {} tháng {}",
                number_to_words(d1),
                number_to_words(d2),
                number_to_words(m)
            );
            if let Some(y) = year {
                out.push_str(&format!(" năm {}", number_to_words(y)));
            }
            out
        } else {
            caps[0].to_string()
        }
    });

    // M1-M2/Y
    let text = rewrite_guarded(&MONTH_RANGE_RE, &text, |caps, _| {
        let (m1, m2, y) = (&caps[1], &caps[2], &caps[3]);
        if valid_month(m1) && valid_month(m2) && valid_year(y) {
            format!(
                "tháng {} đến tháng {} năm {}",
                number_to_words(m1),
                number_to_words(m2),
                number_to_words(y)
            )
        } else {
            caps[0].to_string()
        }
    });

    // Sinh ngày D/M/Y
    let text = rewrite_guarded(&BIRTH_DATE_RE, &text, |caps, _| {
        let (prefix, d, m, y) = (&caps[1], &caps[2], &caps[3], &caps[4]);
        if valid_day(d) && valid_month(m) && valid_year(y) {
            format!(
                "{prefix} ngày {} tháng {} năm {}",
                number_to_words(d),
                number_to_words(m),
                number_to_words(y)
            )
        } else {
            caps[0].to_string()
        }
    });

    // D/M/Y
    let text = rewrite_guarded(&FULL_DATE_RE, &text, |caps, _| {
        let (d, m, y) = (&caps[1], &caps[2], &caps[3]);
        if valid_day(d) && valid_month(m) && valid_year(y) {
            format!(
                "ngày {} tháng {} năm {}",
                number_to_words(d),
                number_to_words(m),
                number_to_words(y)
            )
        } else {
            caps[0].to_string()
        }
    });

    // M/YYYY, not part of a longer slash chain
    let text = rewrite_guarded(&MONTH_YEAR_RE, &text, |caps, tail| {
        let chain = tail_char(tail)
            .map_or(false, |c| matches!(c, '/' | '-'))
            && tail[1..].starts_with(|c: char| c.is_ascii_digit());
        let (m, y) = (&caps[1], &caps[2]);
        if !chain && valid_month(m) && valid_year(y) {
            format!("tháng {} năm {}", number_to_words(m), number_to_words(y))
        } else {
            caps[0].to_string()
        }
    });

    // D/M, not part of a longer slash chain or a percentage
    let text = rewrite_guarded(&DAY_MONTH_RE, &text, |caps, tail| {
        let chain = tail_char(tail)
            .map_or(false, |c| matches!(c, '/' | '-'))
            && tail[1..].starts_with(|c: char| c.is_ascii_digit());
        let (d, m) = (&caps[1], &caps[2]);
        if !chain && !digits_then_percent(tail) && valid_day(d) && valid_month(m) {
            format!("{} tháng {}", number_to_words(d), number_to_words(m))
        } else {
            caps[0].to_string()
        }
    });

    // X tháng Y
    let text = rewrite_guarded(&X_THANG_Y_RE, &text, |caps, _| {
        let (d, m) = (&caps[1], &caps[2]);
        if valid_day(d) && valid_month(m) {
            format!("ngày {} tháng {}", number_to_words(d), number_to_words(m))
        } else {
            caps[0].to_string()
        }
    });

    // tháng X
    let text = rewrite_guarded(&THANG_X_RE, &text, |caps, _| {
        if valid_month(&caps[1]) {
            format!("tháng {}", number_to_words(&caps[1]))
        } else {
            caps[0].to_string()
        }
    });

    // ngày X
    rewrite_guarded(&NGAY_X_RE, &text, |caps, _| {
        if valid_day(&caps[1]) {
            format!("ngày {}", number_to_words(&caps[1]))
        } else {
            caps[0].to_string()
        }
    })
}

/// True when the text starts with one or more digits followed by `%`,
/// optionally space-separated. A day/month match with such a tail is
/// really the front of a percentage and is left for that stage.
fn digits_then_percent(tail: &str) -> bool {
    let rest = tail.trim_start_matches(|c: char| c.is_ascii_digit());
    rest.len() < tail.len() && rest.trim_start().starts_with('%')
}

fn valid_hour(s: &str) -> bool {
    parse_component(s) <= 23
}

fn valid_minsec(s: &str) -> bool {
    parse_component(s) <= 59
}

fn hour_minute_words(hour: &str, minute: &str) -> String {
    // Zero minutes read as a bare hour: 14:00 is "mười bốn giờ".
    if parse_component(minute) == 0 {
        format!("{} giờ", number_to_words(hour))
    } else {
        format!("{} giờ {} phút", number_to_words(hour), number_to_words(minute))
    }
}

/// Stage 7 (second half): clock times in `H:MM[:SS]`, `HHhMM`, `Hh`, and
/// the already-worded "X giờ Y phút" forms.
pub(crate) fn convert_time(text: &str) -> String {
    let text = rewrite_guarded(&TIME_HMS_RE, text, |caps, _| {
        let (h, m) = (&caps[1], &caps[2]);
        let second = caps.get(3).map(|s| s.as_str());
        if valid_hour(h) && valid_minsec(m) && second.map_or(true, valid_minsec) {
            let mut out = hour_minute_words(h, m);
            if let Some(s) = second {
                if parse_component(s) != 0 {
                    out.push_str(&format!(" {} giây", number_to_words(s)));
                }
            }
            out
        } else {
            caps[0].to_string()
        }
    });

    let text = rewrite_guarded(&TIME_HHMM_RE, &text, |caps, tail| {
        let followed_by_letter = tail_char(tail).map_or(false, |c| c.is_alphabetic());
        let (h, m) = (&caps[1], &caps[2]);
        if !followed_by_letter && valid_hour(h) && valid_minsec(m) {
            hour_minute_words(h, m)
        } else {
            caps[0].to_string()
        }
    });

    let text = rewrite_guarded(&TIME_H_RE, &text, |caps, tail| {
        let blocked = tail_char(tail).map_or(false, |c| c.is_alphabetic() || c.is_ascii_digit());
        if !blocked && valid_hour(&caps[1]) {
            format!("{} giờ", number_to_words(&caps[1]))
        } else {
            caps[0].to_string()
        }
    });

    let text = GIO_PHUT_RE
        .replace_all(&text, |caps: &regex::Captures<'_>| {
            format!(
                "{} giờ {} phút",
                number_to_words(&caps[1]),
                number_to_words(&caps[2])
            )
        })
        .into_owned();

    rewrite_guarded(&GIO_RE, &text, |caps, tail| {
        if GIO_TAIL_RE.is_match(tail) {
            caps[0].to_string()
        } else {
            format!("{} giờ", number_to_words(&caps[1]))
        }
    })
}
