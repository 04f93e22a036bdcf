//! # vinorm
//!
//! Vietnamese text normalization for speech synthesis.
//!
//! This crate converts raw mixed-script Vietnamese text into a fully
//! spelled-out form, handling:
//! - Numbers (cardinal, ordinal, decimal, phone)
//! - Dates, times, and ranges
//! - Currency, percentages, and measurement units
//! - Acronym and foreign-word dictionaries (CSV)
//! - Rule-based transliteration of residual foreign words
//!
//! # Example
//!
//! ```
//! use vinorm::Normalizer;
//! use vinorm_core::TextNormalizer;
//!
//! let normalizer = Normalizer::new();
//! let result = normalizer.normalize("Hôm nay là 25/12/2023").unwrap();
//! assert_eq!(
//!     result,
//!     "hôm nay là ngày hai mươi lăm tháng mười hai năm hai nghìn không trăm hai mươi ba"
//! );
//! ```

mod clean;
mod datetime;
mod dict;
mod number;
mod pattern;
mod rules;

pub mod detector;
pub mod num2words;
pub mod translit;

use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use regex::Regex;
use tracing::{debug, instrument};
use vinorm_core::{
    DictionarySource, NormResult, NormalizeOptions, NormalizerConfig, TextNormalizer,
};

pub use detector::is_vietnamese_word;
pub use dict::ReplacementTable;
pub use num2words::number_to_words;
pub use rules::{preprocessing_rules, Rule};
pub use translit::{english_to_vietnamese, transliterate_word};

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").expect("word pattern"));

/// Vietnamese text normalizer with dictionary support.
///
/// The preprocessing rules and options are fixed at construction;
/// dictionary tables can be swapped at runtime with
/// [`Normalizer::reload_dictionaries`] without blocking readers.
#[derive(Debug)]
pub struct Normalizer {
    options: NormalizeOptions,
    rules: Vec<Box<dyn Rule>>,
    tables: RwLock<Arc<ReplacementTable>>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    /// Create a normalizer with default options and empty dictionaries.
    pub fn new() -> Self {
        Self {
            options: NormalizeOptions::default(),
            rules: rules::preprocessing_rules(),
            tables: RwLock::new(Arc::new(ReplacementTable::default())),
        }
    }

    /// Create a normalizer from a configuration, loading any referenced
    /// dictionary files.
    pub fn with_config(config: NormalizerConfig) -> NormResult<Self> {
        let tables = dict::resolve(&config.dictionaries)?;
        Ok(Self {
            options: config.options,
            rules: rules::preprocessing_rules(),
            tables: RwLock::new(Arc::new(tables)),
        })
    }

    /// Replace the dictionary tables from a new source.
    ///
    /// The new tables are built completely before the swap; if loading
    /// fails the previous tables stay live and readers are unaffected.
    pub fn reload_dictionaries(&self, source: &DictionarySource) -> NormResult<()> {
        let tables = dict::resolve(source)?;
        *self.tables.write() = Arc::new(tables);
        Ok(())
    }

    /// Number of dictionary entries currently loaded.
    pub fn dictionary_len(&self) -> usize {
        self.tables.read().len()
    }

    /// Names of the preprocessing rules in execution order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    fn run(&self, input: &str, options: &NormalizeOptions) -> NormResult<String> {
        if input.is_empty() {
            return Ok(String::new());
        }

        let mut text = if options.enable_preprocessing {
            let mut t = input.to_string();
            for rule in &self.rules {
                t = rule.apply(&t)?;
            }
            t
        } else {
            // Minimal pass: fold Unicode and whitespace, keep digits.
            clean::normalize_unicode(input)
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        };

        text = text.to_lowercase();

        let tables = self.tables.read().clone();
        if !tables.is_empty() {
            text = WORD_RE
                .replace_all(&text, |caps: &regex::Captures<'_>| {
                    match tables.lookup(&caps[0]) {
                        Some(replacement) => replacement.to_string(),
                        None => caps[0].to_string(),
                    }
                })
                .into_owned();
        }

        if options.enable_transliteration {
            text = self.transliterate_residual(&text, &tables);
        }

        Ok(text.split_whitespace().collect::<Vec<_>>().join(" "))
    }

    /// Transliterate tokens that survived every other stage: not a
    /// dictionary hit, not Vietnamese, longer than one character.
    fn transliterate_residual(&self, text: &str, tables: &ReplacementTable) -> String {
        WORD_RE
            .replace_all(text, |caps: &regex::Captures<'_>| {
                let word = &caps[0];
                if tables.lookup(word).is_some()
                    || word.chars().count() <= 1
                    || detector::is_vietnamese_word(word)
                {
                    return word.to_string();
                }
                let out = translit::english_to_vietnamese(word);
                debug!(word, result = %out, "transliterated residual token");
                out
            })
            .into_owned()
    }
}

impl TextNormalizer for Normalizer {
    fn normalize(&self, input: &str) -> NormResult<String> {
        self.normalize_with(input, &self.options)
    }

    #[instrument(skip(self, input), fields(input_len = input.len()))]
    fn normalize_with(&self, input: &str, options: &NormalizeOptions) -> NormResult<String> {
        self.run(input, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let n = Normalizer::new();
        assert_eq!(n.normalize("").unwrap(), "");
        assert_eq!(n.normalize("   ").unwrap(), "");
    }

    #[test]
    fn test_lowercase_output() {
        let n = Normalizer::new();
        assert_eq!(n.normalize("Xin Chào").unwrap(), "xin chào");
    }

    #[test]
    fn test_preprocessing_disabled_keeps_digits() {
        let n = Normalizer::new();
        let opts = NormalizeOptions {
            enable_preprocessing: false,
            enable_transliteration: false,
        };
        assert_eq!(n.normalize_with("Giá 25.000đ", &opts).unwrap(), "giá 25.000đ");
    }

    #[test]
    fn test_dictionary_replacement() {
        let cfg = NormalizerConfig {
            options: NormalizeOptions::default(),
            dictionaries: DictionarySource::inline([("AI", "ây ai")], []),
        };
        let n = Normalizer::with_config(cfg).unwrap();
        assert_eq!(n.normalize("AI là gì").unwrap(), "ây ai là gì");
    }

    #[test]
    fn test_dictionary_beats_transliteration() {
        let cfg = NormalizerConfig {
            options: NormalizeOptions::default(),
            dictionaries: DictionarySource::inline([], [("internet", "in-tơ-nét")]),
        };
        let n = Normalizer::with_config(cfg).unwrap();
        let out = n.normalize("dùng internet").unwrap();
        assert_eq!(out, "dùng in-tơ-nét");
    }

    #[test]
    fn test_transliteration_of_unknown_word() {
        let n = Normalizer::new();
        let out = n.normalize("dùng database").unwrap();
        assert_eq!(out, "dùng đa-ta-bâi");
    }

    #[test]
    fn test_transliteration_disabled() {
        let n = Normalizer::new();
        let opts = NormalizeOptions {
            enable_preprocessing: true,
            enable_transliteration: false,
        };
        let out = n.normalize_with("dùng database", &opts).unwrap();
        assert_eq!(out, "dùng database");
    }

    #[test]
    fn test_reload_swaps_tables() {
        let n = Normalizer::new();
        assert_eq!(n.dictionary_len(), 0);

        let src = DictionarySource::inline([("CEO", "xi i ô")], []);
        n.reload_dictionaries(&src).unwrap();
        assert_eq!(n.dictionary_len(), 1);
        assert_eq!(n.normalize("CEO nói").unwrap(), "xi i ô nói");
    }

    #[test]
    fn test_failed_reload_keeps_previous_tables() {
        let n = Normalizer::new();
        n.reload_dictionaries(&DictionarySource::inline([("AI", "ây ai")], []))
            .unwrap();

        let bad = DictionarySource::Paths {
            acronyms: Some("/nonexistent/file.csv".into()),
            words: None,
        };
        assert!(n.reload_dictionaries(&bad).is_err());
        assert_eq!(n.dictionary_len(), 1);
        assert_eq!(n.normalize("AI").unwrap(), "ây ai");
    }

    #[test]
    fn test_rule_names_exposed() {
        let n = Normalizer::new();
        let names = n.rule_names();
        assert!(names.contains(&"date"));
        assert!(names.contains(&"standalone_number"));
    }
}
