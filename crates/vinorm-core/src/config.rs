//! Configuration structures for the normalization engine.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Per-call normalization options.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NormalizeOptions {
    /// Run the numeral/date/currency preprocessing stages.
    #[serde(default = "default_true")]
    pub enable_preprocessing: bool,
    /// Transliterate residual non-Vietnamese tokens.
    #[serde(default = "default_true")]
    pub enable_transliteration: bool,
}

fn default_true() -> bool {
    true
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            enable_preprocessing: true,
            enable_transliteration: true,
        }
    }
}

/// Where the acronym and foreign-word tables come from.
///
/// Resolved exactly once (at construction or reload) into an immutable
/// replacement table; the pipeline itself never touches the filesystem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DictionarySource {
    /// No dictionaries; replacement stages become no-ops.
    #[default]
    None,
    /// Explicit CSV file paths. Either table may be omitted.
    Paths {
        acronyms: Option<PathBuf>,
        words: Option<PathBuf>,
    },
    /// Directory containing `acronyms.csv` and `non-vietnamese-words.csv`.
    Dir(PathBuf),
    /// Already-built in-memory tables.
    Inline {
        acronyms: HashMap<String, String>,
        words: HashMap<String, String>,
    },
}

impl DictionarySource {
    /// Build an inline source from key/value pairs.
    pub fn inline<K, V>(
        acronyms: impl IntoIterator<Item = (K, V)>,
        words: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::Inline {
            acronyms: acronyms
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            words: words
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Top-level normalizer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Default per-call options.
    #[serde(default)]
    pub options: NormalizeOptions,
    /// Dictionary tables to load at construction.
    #[serde(default)]
    pub dictionaries: DictionarySource,
}

impl NormalizerConfig {
    /// Configuration with explicit dictionary file paths.
    pub fn with_paths(acronyms: Option<PathBuf>, words: Option<PathBuf>) -> Self {
        Self {
            options: NormalizeOptions::default(),
            dictionaries: DictionarySource::Paths { acronyms, words },
        }
    }

    /// Configuration pointing at a dictionary directory.
    pub fn with_data_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            options: NormalizeOptions::default(),
            dictionaries: DictionarySource::Dir(dir.into()),
        }
    }
}
