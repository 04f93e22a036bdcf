//! Dictionary tables for acronym and foreign-word replacement.
//!
//! Tables are built once from a [`DictionarySource`] and never mutated;
//! the normalizer swaps whole tables on reload. CSV headers accept either
//! naming scheme (`acronym`/`transliteration` or
//! `word`/`vietnamese_pronunciation`), keys are lowercased, and a later
//! row wins over an earlier duplicate.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;
use vinorm_core::{DictionarySource, NormError, NormResult};

const ACRONYMS_FILE: &str = "acronyms.csv";
const WORDS_FILE: &str = "non-vietnamese-words.csv";

const KEY_HEADERS: &[&str] = &["acronym", "word", "original"];
const VALUE_HEADERS: &[&str] = &["transliteration", "vietnamese_pronunciation"];

/// Immutable replacement tables. Acronyms take precedence over the
/// foreign-word table when both contain a key.
#[derive(Debug, Default, Clone)]
pub struct ReplacementTable {
    acronyms: HashMap<String, String>,
    words: HashMap<String, String>,
}

impl ReplacementTable {
    pub(crate) fn from_maps(
        acronyms: HashMap<String, String>,
        words: HashMap<String, String>,
    ) -> Self {
        Self { acronyms, words }
    }

    /// Look up a lowercased token.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.acronyms
            .get(key)
            .or_else(|| self.words.get(key))
            .map(String::as_str)
    }

    /// Total number of entries across both tables.
    pub fn len(&self) -> usize {
        self.acronyms.len() + self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.acronyms.is_empty() && self.words.is_empty()
    }
}

/// Resolve a dictionary source into a ready table. Any referenced file
/// that is missing or malformed fails the whole resolution; the caller
/// keeps whatever table it had before.
pub(crate) fn resolve(source: &DictionarySource) -> NormResult<ReplacementTable> {
    let table = match source {
        DictionarySource::None => ReplacementTable::default(),
        DictionarySource::Paths { acronyms, words } => {
            let acronyms = match acronyms {
                Some(path) => load_csv(path)?,
                None => HashMap::new(),
            };
            let words = match words {
                Some(path) => load_csv(path)?,
                None => HashMap::new(),
            };
            ReplacementTable::from_maps(acronyms, words)
        }
        DictionarySource::Dir(dir) => ReplacementTable::from_maps(
            load_csv(&dir.join(ACRONYMS_FILE))?,
            load_csv(&dir.join(WORDS_FILE))?,
        ),
        DictionarySource::Inline { acronyms, words } => {
            ReplacementTable::from_maps(lowercase_keys(acronyms), lowercase_keys(words))
        }
    };
    debug!(entries = table.len(), "dictionary tables resolved");
    Ok(table)
}

fn lowercase_keys(map: &HashMap<String, String>) -> HashMap<String, String> {
    map.iter()
        .map(|(k, v)| (k.trim().to_lowercase(), v.clone()))
        .collect()
}

fn load_error(path: &Path, reason: impl ToString) -> NormError {
    NormError::dictionary_load(PathBuf::from(path), reason.to_string())
}

fn load_csv(path: &Path) -> NormResult<HashMap<String, String>> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| load_error(path, e))?;

    let headers = reader.headers().map_err(|e| load_error(path, e))?;
    let key_col = column_index(headers, KEY_HEADERS)
        .ok_or_else(|| load_error(path, "no acronym/word column in header"))?;
    let value_col = column_index(headers, VALUE_HEADERS).ok_or_else(|| {
        load_error(path, "no transliteration/vietnamese_pronunciation column in header")
    })?;

    let mut map = HashMap::new();
    for record in reader.records() {
        let record = record.map_err(|e| load_error(path, e))?;
        let key = record.get(key_col).unwrap_or("").trim().to_lowercase();
        let value = record.get(value_col).unwrap_or("").trim().to_string();
        if key.is_empty() || value.is_empty() {
            continue;
        }
        map.insert(key, value);
    }
    debug!(path = %path.display(), entries = map.len(), "loaded dictionary");
    Ok(map)
}

fn column_index(headers: &csv::StringRecord, names: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| names.contains(&h.trim().to_lowercase().as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_csv(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_acronym_csv() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "acronyms.csv",
            "acronym,transliteration\nAI,ây ai\nCEO,xi i ô\n",
        );
        let src = DictionarySource::Paths {
            acronyms: Some(path),
            words: None,
        };
        let table = resolve(&src).unwrap();
        assert_eq!(table.lookup("ai"), Some("ây ai"));
        assert_eq!(table.lookup("ceo"), Some("xi i ô"));
        assert_eq!(table.lookup("gdp"), None);
    }

    #[test]
    fn test_alternate_headers() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "words.csv",
            "word,vietnamese_pronunciation\nhello,heo-lô\n",
        );
        let src = DictionarySource::Paths {
            acronyms: None,
            words: Some(path),
        };
        let table = resolve(&src).unwrap();
        assert_eq!(table.lookup("hello"), Some("heo-lô"));
    }

    #[test]
    fn test_duplicate_last_wins_and_empty_rows_skipped() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "acronyms.csv",
            "acronym,transliteration\nAI,cũ\n,trống\nAI,ây ai\nX,\n",
        );
        let src = DictionarySource::Paths {
            acronyms: Some(path),
            words: None,
        };
        let table = resolve(&src).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("ai"), Some("ây ai"));
    }

    #[test]
    fn test_acronyms_shadow_words() {
        let src = DictionarySource::inline([("AI", "ây ai")], [("ai", "khác")]);
        let table = resolve(&src).unwrap();
        assert_eq!(table.lookup("ai"), Some("ây ai"));
    }

    #[test]
    fn test_dir_source() {
        let dir = TempDir::new().unwrap();
        write_csv(&dir, ACRONYMS_FILE, "acronym,transliteration\nAI,ây ai\n");
        write_csv(&dir, WORDS_FILE, "word,vietnamese_pronunciation\ntaxi,tắc-xi\n");
        let table = resolve(&DictionarySource::Dir(dir.path().to_path_buf())).unwrap();
        assert_eq!(table.lookup("ai"), Some("ây ai"));
        assert_eq!(table.lookup("taxi"), Some("tắc-xi"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let src = DictionarySource::Paths {
            acronyms: Some(PathBuf::from("/nonexistent/acronyms.csv")),
            words: None,
        };
        let err = resolve(&src).unwrap_err();
        assert!(matches!(err, NormError::DictionaryLoad { .. }));
    }

    #[test]
    fn test_bad_header_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "bad.csv", "foo,bar\na,b\n");
        let src = DictionarySource::Paths {
            acronyms: Some(path),
            words: None,
        };
        assert!(resolve(&src).is_err());
    }

    #[test]
    fn test_none_source_is_empty() {
        let table = resolve(&DictionarySource::None).unwrap();
        assert!(table.is_empty());
    }
}
