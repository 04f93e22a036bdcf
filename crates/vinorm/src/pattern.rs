//! Guarded regex replacement.
//!
//! The `regex` crate has no look-around, so recognizers that need a
//! trailing-context guard match the plain pattern and then inspect the
//! haystack after the match before deciding to rewrite. Returning the
//! matched text unchanged from the callback is the no-op case.

use regex::{Captures, Regex};

/// Replace every match, passing the callback the captures and the
/// unmatched tail of the haystack that follows the match.
pub(crate) fn rewrite_guarded<F>(re: &Regex, text: &str, f: F) -> String
where
    F: Fn(&Captures<'_>, &str) -> String,
{
    re.replace_all(text, |caps: &Captures<'_>| {
        let end = caps.get(0).map_or(text.len(), |m| m.end());
        f(caps, &text[end..])
    })
    .into_owned()
}

/// First char of the tail, if any.
pub(crate) fn tail_char(tail: &str) -> Option<char> {
    tail.chars().next()
}
