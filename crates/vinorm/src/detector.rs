//! Vietnamese word detection.
//!
//! Structural check of a single token against Vietnamese syllable
//! phonotactics: permitted onsets, vowel nucleus, permitted finals, and
//! the diacritic short-circuit. Pure functions; the dictionary tables are
//! never consulted here.

use once_cell::sync::Lazy;
use regex::Regex;

/// Any Vietnamese diacritic vowel or đ is a strong positive signal.
static VN_ACCENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        "(?i)[àáảãạăằắẳẵặâầấẩẫậèéẻẽẹêềếểễệìíỉĩịòóỏõọôồốổỗộơờớởỡợùúủũụưừứửữựỳýỷỹỵđ]",
    )
    .expect("accent pattern")
});

/// Letters Vietnamese orthography never uses.
static FOREIGN_LETTER_RE: Lazy<Regex> = Lazy::new(|| Regex::new("(?i)[fwzj]").expect("foreign letter pattern"));

/// Onset / nucleus / coda decomposition over the ASCII vowel set.
static SYLLABLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([^ueoaiy]*)([ueoaiy]+)([^ueoaiy]*)$").expect("syllable pattern"));

/// Permitted initial consonants and clusters.
fn is_valid_onset(onset: &str) -> bool {
    matches!(
        onset,
        "b" | "c" | "d" | "g" | "h" | "k" | "l" | "m" | "n" | "p" | "q" | "r" | "s" | "t" | "v"
            | "x" | "ch" | "gh" | "gi" | "kh" | "ng" | "ngh" | "nh" | "ph" | "qu" | "th" | "tr"
    )
}

/// Permitted final consonants: a small closed set.
fn is_valid_coda(coda: &str) -> bool {
    matches!(coda, "p" | "t" | "c" | "m" | "n" | "ng" | "ch" | "nh")
}

/// Check whether a token is structurally valid Vietnamese.
///
/// ```
/// use vinorm::detector::is_vietnamese_word;
///
/// assert!(is_vietnamese_word("xin"));
/// assert!(is_vietnamese_word("chào"));
/// assert!(!is_vietnamese_word("database"));
/// ```
pub fn is_vietnamese_word(word: &str) -> bool {
    let w = word.trim().to_lowercase();
    if w.is_empty() {
        return false;
    }

    if VN_ACCENT_RE.is_match(&w) {
        return true;
    }

    if FOREIGN_LETTER_RE.is_match(&w) {
        return false;
    }

    let Some(caps) = SYLLABLE_RE.captures(&w) else {
        return false;
    };
    let onset = caps.get(1).map_or("", |m| m.as_str());
    let nucleus = caps.get(2).map_or("", |m| m.as_str());
    let coda = caps.get(3).map_or("", |m| m.as_str());

    if !onset.is_empty() && !is_valid_onset(onset) {
        return false;
    }
    if !coda.is_empty() && !is_valid_coda(coda) {
        return false;
    }

    // Vowel runs typical of English spelling are rejected unless they form
    // one of the few Vietnamese clusters that happen to overlap.
    let english_pair = ["ee", "oo", "ea", "ae", "ie"]
        .iter()
        .any(|p| nucleus.contains(p));
    if english_pair && !matches!(nucleus, "oa" | "oe" | "ua" | "uy") {
        return false;
    }

    true
}
