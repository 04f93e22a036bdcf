//! Normalize command implementation.

use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use vinorm::Normalizer;
use vinorm_core::{DictionarySource, NormalizeOptions, NormalizerConfig, TextNormalizer};

/// Arguments for the normalize command.
pub struct NormalizeArgs {
    pub input: String,
    pub no_preprocessing: bool,
    pub no_transliteration: bool,
    pub acronyms: Option<PathBuf>,
    pub words: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
}

/// Run the normalize command.
pub fn run(args: NormalizeArgs) -> Result<()> {
    let dictionaries = match (args.data_dir, args.acronyms, args.words) {
        (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
            bail!("--data-dir cannot be combined with --acronyms or --words")
        }
        (Some(dir), None, None) => DictionarySource::Dir(dir),
        (None, None, None) => DictionarySource::None,
        (None, acronyms, words) => DictionarySource::Paths { acronyms, words },
    };

    let config = NormalizerConfig {
        options: NormalizeOptions {
            enable_preprocessing: !args.no_preprocessing,
            enable_transliteration: !args.no_transliteration,
        },
        dictionaries,
    };

    let normalizer = Normalizer::with_config(config).context("failed to build normalizer")?;
    let result = normalizer.normalize(&args.input)?;
    println!("{result}");

    Ok(())
}
