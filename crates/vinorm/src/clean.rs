//! Text cleanup stages.
//!
//! Everything here runs before the numeric recognizers: Unicode folding,
//! unspeakable-character replacement, punctuation normalization, and
//! emoji/foreign-script removal. Digits, Latin letters, and sentence
//! punctuation always survive these passes.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").expect("url pattern"));
static WWW_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"www\.\S+").expect("www pattern"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern"));

static DOUBLE_QUOTE_RE: Lazy<Regex> = Lazy::new(|| Regex::new("[\u{201C}\u{201D}\u{201E}\u{201F}]").expect("double quote pattern"));
static SINGLE_QUOTE_RE: Lazy<Regex> = Lazy::new(|| Regex::new("[\u{2018}\u{2019}\u{201A}\u{201B}]").expect("single quote pattern"));
static DASH_RE: Lazy<Regex> = Lazy::new(|| Regex::new("[\u{2013}\u{2014}\u{2212}]").expect("dash pattern"));
static LONG_ELLIPSIS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.{3,}").expect("ellipsis pattern"));
static REPEATED_TERMINATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([!?.]){2,}").expect("terminator pattern"));

static EMOJI_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        "[\\x{1F600}-\\x{1F64F}]|[\\x{1F300}-\\x{1F5FF}]|[\\x{1F680}-\\x{1F6FF}]|\
         [\\x{1F1E0}-\\x{1F1FF}]|[\\x{2600}-\\x{26FF}]|[\\x{2700}-\\x{27BF}]|\
         [\\x{1F900}-\\x{1F9FF}]|[\\x{1F018}-\\x{1F270}]|[\\x{238C}-\\x{2454}]|\
         [\\x{20D0}-\\x{20FF}]|\\x{FE0F}|\\x{200D}",
    )
    .expect("emoji pattern")
});
static UNSPEAKABLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("[\\\\()¯\u{201C}\u{201D}\"]").expect("unspeakable pattern"));
static NON_LATIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("[^\\x{0000}-\\x{024F}\\x{1E00}-\\x{1EFF}]").expect("non-latin pattern")
});

/// Stage 1: canonical composition. Decomposed diacritics (`e` + combining
/// hook) fold into single codepoints so every later pattern sees one form.
pub(crate) fn normalize_unicode(text: &str) -> String {
    text.nfc().collect()
}

/// Stage 2: replace or drop characters with no spoken form.
///
/// URLs and e-mail addresses are stripped before the `@` replacement so
/// an address never leaks a spurious "a còng" into the output.
pub(crate) fn replace_special_chars(text: &str) -> String {
    let text = URL_RE.replace_all(text, "");
    let text = WWW_RE.replace_all(&text, "");
    let text = EMAIL_RE.replace_all(&text, "");

    text.replace('&', " và ")
        .replace('@', " a còng ")
        .replace('#', " thăng ")
        .replace('*', "")
        .replace('_', " ")
        .replace('~', "")
        .replace('`', "")
        .replace('^', "")
}

/// Stage 3: fold typographic punctuation to its ASCII equivalent and
/// collapse repeated terminators ("!!!" reads once).
pub(crate) fn normalize_punctuation(text: &str) -> String {
    let text = DOUBLE_QUOTE_RE.replace_all(text, "\"");
    let text = SINGLE_QUOTE_RE.replace_all(&text, "'");
    let text = DASH_RE.replace_all(&text, "-");
    let text = text.replace('\u{2026}', "...");
    let text = LONG_ELLIPSIS_RE.replace_all(&text, "...");
    REPEATED_TERMINATOR_RE.replace_all(&text, "$1").into_owned()
}

/// Stage 4: strip emoji and anything outside the Latin ranges, and turn
/// hyphens that do not sit between digits into spaces so compound-word
/// dashes never glue tokens together.
pub(crate) fn clean_for_tts(text: &str) -> String {
    let text = EMOJI_RE.replace_all(text, "");
    let text = UNSPEAKABLE_RE.replace_all(&text, "");
    let text = strip_free_dashes(&text);
    let text = NON_LATIN_RE.replace_all(&text, "");
    text.trim().to_string()
}

/// A dash is kept only when both neighbours are digits ("3-5" stays for
/// the range recognizers); every other dash becomes a space.
fn strip_free_dashes(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == '-' {
            let prev_digit = i > 0 && chars[i - 1].is_ascii_digit();
            let next_digit = chars.get(i + 1).map_or(false, |n| n.is_ascii_digit());
            if !prev_digit && !next_digit {
                out.push(' ');
                continue;
            }
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nfc_composition() {
        // "e" + combining acute folds into a single codepoint.
        let decomposed = "tie\u{0301}ng";
        assert_eq!(normalize_unicode(decomposed), "tiéng");
    }

    #[test]
    fn test_special_char_replacement() {
        assert_eq!(replace_special_chars("A & B"), "A  và  B");
        assert_eq!(replace_special_chars("ký hiệu @"), "ký hiệu  a còng ");
        assert_eq!(replace_special_chars("số #1"), "số  thăng 1");
        assert_eq!(replace_special_chars("a*b~c`d^e"), "abcde");
        assert_eq!(replace_special_chars("one_two"), "one two");
    }

    #[test]
    fn test_urls_and_emails_stripped_before_at_sign() {
        let out = replace_special_chars("xem https://vd.vn/a?b=1 nhé");
        assert!(!out.contains("https"));
        assert!(!out.contains("a còng"));

        let out = replace_special_chars("mail user@example.com đi");
        assert!(!out.contains("example"));
        assert!(!out.contains("a còng"));

        let out = replace_special_chars("trang www.example.com nhé");
        assert!(!out.contains("www"));
    }

    #[test]
    fn test_punctuation_folding() {
        assert_eq!(normalize_punctuation("\u{201C}hi\u{201D}"), "\"hi\"");
        assert_eq!(normalize_punctuation("it\u{2019}s"), "it's");
        assert_eq!(normalize_punctuation("1873\u{2013}1907"), "1873-1907");
        // Ellipses fold to "..." and then collapse with the other
        // terminators: any trailing run reads as a single stop.
        assert_eq!(normalize_punctuation("chờ\u{2026}"), "chờ.");
        assert_eq!(normalize_punctuation("sao?!?!"), "sao?");
        assert_eq!(normalize_punctuation("wow!!!"), "wow!");
        assert_eq!(normalize_punctuation("rồi....."), "rồi.");
    }

    #[test]
    fn test_emoji_removed() {
        assert_eq!(clean_for_tts("chào 😀 bạn"), "chào  bạn");
        assert_eq!(clean_for_tts("ok 👍🏻"), "ok");
    }

    #[test]
    fn test_dash_between_digits_survives() {
        assert_eq!(clean_for_tts("3-5"), "3-5");
        assert_eq!(clean_for_tts("đông-tây"), "đông tây");
        assert_eq!(clean_for_tts("- gạch đầu dòng"), "gạch đầu dòng");
    }

    #[test]
    fn test_non_latin_removed() {
        assert_eq!(clean_for_tts("chào 日本語 bạn"), "chào  bạn");
        assert_eq!(clean_for_tts("tiếng Việt ổn"), "tiếng Việt ổn");
    }

    #[test]
    fn test_unspeakable_chars_removed() {
        assert_eq!(clean_for_tts("a (b) \\c\" d"), "a b c d");
    }
}
