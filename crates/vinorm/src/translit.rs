//! Rule-based English-to-Vietnamese transliteration.
//!
//! Foreign-spelled tokens that fail the phonotactic check are decomposed
//! into the longest-matching sequence of known Latin letter clusters and
//! rebuilt as Vietnamese syllable approximations joined by hyphens. The
//! segmentation is greedy and deterministic: once a cluster is consumed it
//! is never revisited.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::detector::is_vietnamese_word;

/// Special endings and consonant clusters, applied before anything else.
///
/// Cluster rules are ordered longest-first so that e.g. `str` is consumed
/// before the bare `st` rule can fire (the regex crate has no look-around,
/// so ordering replaces the original negative-lookahead guards).
const HIGH_PRIORITY_RULES: &[(&str, &str)] = &[
    // Special word endings
    ("tion$", "ân"),
    ("sion$", "ân"),
    ("age$", "ây"),
    ("ing$", "ing"),
    ("ture$", "chờ"),
    ("cial$", "xô"),
    ("tial$", "xô"),
    // Complex vowel combinations
    ("aught", "ót"),
    ("ought", "ót"),
    ("ound", "ao"),
    ("ight", "ai"),
    ("eigh", "ây"),
    ("ough", "ao"),
    // Initial consonant clusters
    ("^str", "tr"),
    ("^st", "t"),
    ("^sch", "c"),
    ("^sc|^sk", "c"),
    ("^sp", "p"),
    ("^tr", "tr"),
    ("^br", "r"),
    ("^cr|^pr|^gr|^dr|^fr", "r"),
    ("^bl|^cl|^sl|^pl", "l"),
    ("^fl", "ph"),
    // Double consonants
    ("ck", "c"),
    ("sh", "s"),
    ("wh", "q"),
    ("qu", "q"),
    ("kn", "n"),
    ("wr", "r"),
];

/// Rules that only apply at the end of a word (or syllable).
const ENDING_RULES: &[(&str, &str)] = &[
    ("le$", "ồ"),
    // Vowel + consonant endings
    ("ook$", "úc"),
    ("ood$", "út"),
    ("ool$", "un"),
    ("oom$", "um"),
    ("oon$", "un"),
    ("oot$", "út"),
    ("iend$", "en"),
    ("end$", "en"),
    ("eau$", "iu"),
    ("ail$", "ain"),
    ("ain$", "ain"),
    ("ait$", "ât"),
    ("oat$", "ốt"),
    ("oad$", "ốt"),
    ("oal$", "ôn"),
    ("eep$", "íp"),
    ("eet$", "ít"),
    ("eel$", "in"),
    // -TCH endings
    ("atch$", "át"),
    ("etch$", "éch"),
    ("itch$", "ích"),
    ("otch$", "ốt"),
    ("utch$", "út"),
    // -DGE endings
    ("edge$", "ét"),
    ("idge$", "ít"),
    ("odge$", "ót"),
    ("udge$", "út"),
    // -CK/-K endings
    ("ack$", "ác"),
    ("eck$", "éc"),
    ("ick$", "ích"),
    ("ock$", "óc"),
    ("uck$", "úc"),
    // -SH endings
    ("ash$", "át"),
    ("esh$", "ét"),
    ("ish$", "ít"),
    ("osh$", "ốt"),
    ("ush$", "út"),
    // -TH endings
    ("ath$", "át"),
    ("eth$", "ét"),
    ("ith$", "ít"),
    ("oth$", "ót"),
    ("uth$", "út"),
    // -TE endings (silent E)
    ("ate$", "ây"),
    ("ete$", "ét"),
    ("ite$", "ai"),
    ("ote$", "ốt"),
    ("ute$", "út"),
    // -DE endings
    ("ade$", "ây"),
    ("ede$", "ét"),
    ("ide$", "ai"),
    ("ode$", "ốt"),
    ("ude$", "út"),
    // Silent-E endings
    ("ake$", "ây"),
    ("ame$", "am"),
    ("ane$", "an"),
    ("ape$", "ếp"),
    ("eke$", "ét"),
    ("eme$", "êm"),
    ("ene$", "en"),
    ("ike$", "íc"),
    ("ime$", "am"),
    ("ine$", "ai"),
    ("oke$", "ốc"),
    ("ome$", "om"),
    ("one$", "oăn"),
    ("uke$", "ấc"),
    ("ume$", "uym"),
    ("une$", "uyn"),
    // -SE endings
    ("ase$", "ây"),
    ("ise$", "ai"),
    ("ose$", "âu"),
    // -LL endings
    ("all$", "âu"),
    ("ell$", "eo"),
    ("ill$", "iu"),
    ("oll$", "ôn"),
    ("ull$", "un"),
    // -NG endings
    ("ang$", "ang"),
    ("eng$", "ing"),
    ("ong$", "ong"),
    ("ung$", "âng"),
    // Complex vowel endings
    ("air$", "e"),
    ("ear$", "ia"),
    ("ire$", "ai"),
    ("ure$", "iu"),
    ("our$", "ao"),
    ("ore$", "o"),
    ("ound$", "ao"),
    ("ight$", "ai"),
    ("aught$", "ót"),
    ("ought$", "ót"),
    ("eigh$", "ây"),
    ("ork$", "ót"),
    // Double vowel endings
    ("ee$", "i"),
    ("ea$", "i"),
    ("oo$", "u"),
    ("oa$", "oa"),
    ("oe$", "oe"),
    ("ai$", "ai"),
    ("ay$", "ay"),
    ("au$", "au"),
    ("aw$", "â"),
    ("ei$", "ây"),
    ("ey$", "ây"),
    ("oi$", "oi"),
    ("oy$", "oi"),
    ("ou$", "u"),
    ("ow$", "ô"),
    ("ue$", "ue"),
    ("ui$", "ui"),
    ("ie$", "ai"),
    ("eu$", "iu"),
    // -R endings
    ("ar$", "a"),
    ("er$", "ơ"),
    ("ir$", "ơ"),
    ("or$", "o"),
    ("ur$", "ơ"),
    // -L endings
    ("al$", "an"),
    ("el$", "eo"),
    ("il$", "iu"),
    ("ol$", "ôn"),
    ("ul$", "un"),
    // Basic closed syllable endings
    ("ab$", "áp"),
    ("ad$", "át"),
    ("ag$", "ác"),
    ("ak$", "át"),
    ("ap$", "áp"),
    ("at$", "át"),
    ("eb$", "ép"),
    ("ed$", "ét"),
    ("eg$", "ét"),
    ("ek$", "éc"),
    ("ep$", "ép"),
    ("et$", "ét"),
    ("ib$", "íp"),
    ("id$", "ít"),
    ("ig$", "íc"),
    ("ik$", "íc"),
    ("ip$", "íp"),
    ("it$", "ít"),
    ("ob$", "óp"),
    ("od$", "ót"),
    ("og$", "óc"),
    ("ok$", "óc"),
    ("op$", "óp"),
    ("ot$", "ót"),
    ("ub$", "úp"),
    ("ud$", "út"),
    ("ug$", "úc"),
    ("uk$", "úc"),
    ("up$", "úp"),
    ("ut$", "út"),
    // -M/-N endings
    ("am$", "am"),
    ("an$", "an"),
    ("em$", "em"),
    ("en$", "en"),
    ("im$", "im"),
    ("in$", "in"),
    ("om$", "om"),
    ("on$", "on"),
    ("um$", "âm"),
    ("un$", "ân"),
    // -S endings
    ("as$", "ẹt"),
    ("es$", "ẹt"),
    ("is$", "ít"),
    ("os$", "ọt"),
    ("us$", "ợt"),
    // Double vowels
    ("aa$", "a"),
    ("ii$", "i"),
    ("uu$", "u"),
];

/// Single-letter fallbacks for whatever the cluster rules left behind.
const GENERAL_RULES: &[(&str, &str)] = &[
    ("j", "d"),
    ("z", "d"),
    ("w", "u"),
    ("f", "ph"),
    ("s", "x"),
    ("c", "k"),
    ("q", "ku"),
];

fn compile(rules: &'static [(&'static str, &'static str)]) -> Vec<(Regex, &'static str)> {
    rules
        .iter()
        .map(|&(pat, rep)| (Regex::new(pat).expect("transliteration rule"), rep))
        .collect()
}

static HIGH_PRIORITY: Lazy<Vec<(Regex, &'static str)>> =
    Lazy::new(|| compile(HIGH_PRIORITY_RULES));
static ENDINGS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| compile(ENDING_RULES));
static GENERAL: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| compile(GENERAL_RULES));

static CONSONANT_Y_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("([bcdfghjklmnpqrstvwxz])y").expect("consonant-y pattern"));
static Y_END_RE: Lazy<Regex> = Lazy::new(|| Regex::new("y$").expect("y-end pattern"));

/// Every vowel letter that can appear mid-transliteration, including the
/// accented forms produced by the rule tables.
const VOWELS: &str = "aeiouăâêôơưáàảãạắằẳẵặấầẩẫậéèẻẽẹếềểễệíìỉĩịóòỏõọốồổỗộớờởỡợúùủũụứừửữựýỳỷỹỵ";

const CONSONANTS: &str = "bcdfghjklmnpqrstvwxz";
const COLLAPSIBLE: &str = "brlptdgmnckxsvfzjwqh";
const SYLLABLE_FINALS: &str = "ptcmngs";
const VALID_ENDINGS: &str = "ptcmngs";

fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

fn is_consonant(c: char) -> bool {
    c.is_ascii() && CONSONANTS.contains(c)
}

fn is_valid_pair(a: char, b: char) -> bool {
    matches!(
        (a, b),
        ('c', 'h') | ('t', 'h') | ('p', 'h') | ('s', 'h') | ('n', 'g') | ('t', 'r')
            | ('n', 'h') | ('g', 'h') | ('k', 'h')
    )
}

fn apply_rules(mut w: String, rules: &[(Regex, &'static str)]) -> String {
    for (re, rep) in rules {
        if re.is_match(&w) {
            w = re.replace_all(&w, *rep).into_owned();
        }
    }
    w
}

/// Split on the syllable shape consonant* vowel+ final-consonant?, where
/// the optional final is only taken when the next letter is not a vowel.
/// Trailing consonants that never reach a vowel are dropped.
fn split_syllables(w: &str) -> Vec<String> {
    let chars: Vec<char> = w.chars().collect();
    let mut syllables = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let start = i;
        while i < chars.len() && !is_vowel(chars[i]) {
            i += 1;
        }
        if i >= chars.len() {
            break;
        }
        while i < chars.len() && is_vowel(chars[i]) {
            i += 1;
        }
        if i < chars.len()
            && SYLLABLE_FINALS.contains(chars[i])
            && chars.get(i + 1).map_or(true, |&c| !is_vowel(c))
        {
            i += 1;
        }
        syllables.push(chars[start..i].iter().collect());
    }
    syllables
}

/// Collapse repeated consonants, then reduce invalid consonant pairs so
/// only the clusters Vietnamese allows survive.
fn clean_consonant_clusters(p: &str) -> String {
    let mut collapsed: Vec<char> = Vec::with_capacity(p.len());
    for c in p.chars() {
        if collapsed.last() == Some(&c) && c.is_ascii() && COLLAPSIBLE.contains(c) {
            continue;
        }
        collapsed.push(c);
    }

    let mut result = String::with_capacity(collapsed.len());
    let mut i = 0;
    while i < collapsed.len() {
        let c = collapsed[i];
        if i + 1 < collapsed.len() && is_consonant(c) && is_consonant(collapsed[i + 1]) {
            if is_valid_pair(c, collapsed[i + 1]) {
                result.push(c);
                result.push(collapsed[i + 1]);
            } else {
                result.push(collapsed[i + 1]);
            }
            i += 2;
        } else {
            result.push(c);
            i += 1;
        }
    }
    result
}

/// C/K spelling rule: `k` before i, e, y; `c` elsewhere.
fn apply_ck_rule(p: &str) -> String {
    let mut chars = p.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    if p.starts_with("ch") || p.starts_with("th") || p.starts_with("ph") || p.starts_with("sh") {
        return p.to_string();
    }
    if first == 'k' || first == 'c' {
        let use_k = matches!(chars.clone().next(), Some('i') | Some('e') | Some('y'));
        let head = if use_k { 'k' } else { 'c' };
        return std::iter::once(head).chain(chars).collect();
    }
    p.to_string()
}

/// Drop final consonants Vietnamese disallows; a final `l` becomes `n`.
fn filter_ending(p: &str) -> String {
    let chars: Vec<char> = p.chars().collect();
    if chars.len() > 1 {
        let last = chars[chars.len() - 1];
        if !is_vowel(last) && !(last.is_ascii() && VALID_ENDINGS.contains(last)) {
            let head: String = chars[..chars.len() - 1].iter().collect();
            if last == 'l' {
                return format!("{head}n");
            }
            return head;
        }
    }
    p.to_string()
}

fn process_syllable(s: &str) -> String {
    let s = s.trim();
    if s.is_empty() {
        return String::new();
    }
    let mut w = s.to_string();
    if let Some(rest) = w.strip_prefix('y') {
        w = format!("d{rest}");
    }

    w = apply_rules(w, &HIGH_PRIORITY);
    w = apply_rules(w, &ENDINGS);
    w = apply_rules(w, &GENERAL);

    w = CONSONANT_Y_RE.replace_all(&w, "${1}i").into_owned();
    w = Y_END_RE.replace(&w, "i").into_owned();

    w = clean_consonant_clusters(&w);
    w = apply_ck_rule(&w);
    filter_ending(&w)
}

/// Unconditionally transliterate a word to Vietnamese syllables.
///
/// This skips the phonotactic short-circuit of [`transliterate_word`] and
/// always applies the rule decomposition.
pub fn english_to_vietnamese(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    let mut w = word.trim().to_lowercase();
    if let Some(rest) = w.strip_prefix('y') {
        w = format!("d{rest}");
    }
    if let Some(rest) = w.strip_prefix('d') {
        w = format!("đ{rest}");
    }

    w = apply_rules(w, &HIGH_PRIORITY);
    w = apply_rules(w, &ENDINGS);
    w = apply_rules(w, &GENERAL);

    w = CONSONANT_Y_RE.replace_all(&w, "${1}i").into_owned();
    w = Y_END_RE.replace(&w, "i").into_owned();

    let syllables = split_syllables(&w);
    if syllables.is_empty() {
        return w;
    }

    let parts: Vec<String> = syllables
        .iter()
        .map(|s| process_syllable(s))
        .filter(|s| !s.is_empty())
        .collect();
    parts.join("-")
}

/// Transliterate a word unless it is already valid Vietnamese, in which
/// case it is returned case-normalized but otherwise unchanged.
pub fn transliterate_word(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }
    if is_vietnamese_word(word) {
        return word.to_lowercase();
    }
    english_to_vietnamese(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vietnamese_words_pass_through() {
        assert_eq!(transliterate_word("xin"), "xin");
        assert_eq!(transliterate_word("chào"), "chào");
        assert_eq!(transliterate_word("tiếng"), "tiếng");
    }

    #[test]
    fn test_idempotent_on_valid_words() {
        for w in ["xin", "nam", "trang", "đồng", "việt"] {
            assert_eq!(transliterate_word(w), w);
        }
    }

    #[test]
    fn test_hyphenated_syllables() {
        let out = transliterate_word("database");
        assert_eq!(out, "đa-ta-bâi");

        let out = transliterate_word("internet");
        assert_eq!(out, "in-te-nét");
    }

    #[test]
    fn test_initial_cluster_reduction() {
        // "str" reduces before the bare "st" rule can fire.
        let strong = english_to_vietnamese("strong");
        assert!(strong.starts_with("tr"), "got {strong}");

        let stop = english_to_vietnamese("stop");
        assert!(stop.starts_with('t'), "got {stop}");
    }

    #[test]
    fn test_leading_d_becomes_dj() {
        let out = english_to_vietnamese("data");
        assert!(out.starts_with('đ'), "got {out}");
    }

    #[test]
    fn test_endings_only_at_end() {
        // "tion" maps to "ân" only as a suffix.
        let out = english_to_vietnamese("nation");
        assert!(out.ends_with("ân"), "got {out}");
    }

    #[test]
    fn test_no_invalid_finals() {
        for word in ["web", "club", "blog", "chat"] {
            let out = english_to_vietnamese(word);
            for syllable in out.split('-') {
                let last = syllable.chars().last().unwrap();
                assert!(
                    is_vowel(last) || VALID_ENDINGS.contains(last),
                    "invalid final in {out} for {word}"
                );
            }
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(transliterate_word(""), "");
        assert_eq!(english_to_vietnamese(""), "");
    }
}
