//! Vietnamese text normalization command-line interface.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::info;

mod commands;
mod logging;

/// Vietnamese TTS text normalizer CLI
#[derive(Debug, Parser)]
#[command(name = "vinorm")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level
    #[arg(short, long, default_value = "warn", global = true)]
    log_level: String,

    /// Log format (json or text)
    #[arg(long, default_value = "text", global = true)]
    log_format: LogFormatArg,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormatArg {
    Json,
    Text,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Normalize text for speech synthesis
    Normalize {
        /// Input text
        input: String,

        /// Skip the numeric/date/currency preprocessing stages
        #[arg(long)]
        no_preprocessing: bool,

        /// Skip transliteration of residual foreign words
        #[arg(long)]
        no_transliteration: bool,

        /// Path to an acronyms CSV file
        #[arg(long)]
        acronyms: Option<PathBuf>,

        /// Path to a foreign-words CSV file
        #[arg(long)]
        words: Option<PathBuf>,

        /// Directory containing acronyms.csv and non-vietnamese-words.csv
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },

    /// Check whether a word is structurally valid Vietnamese
    Check {
        /// Word to check
        word: String,
    },

    /// Transliterate a single word to Vietnamese syllables
    Transliterate {
        /// Word to transliterate
        word: String,
    },

    /// Show version and pipeline info
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let format = match cli.log_format {
        LogFormatArg::Json => logging::LogFormat::Json,
        LogFormatArg::Text => logging::LogFormat::Text,
    };
    logging::init_logging(&cli.log_level, format);

    info!(version = env!("CARGO_PKG_VERSION"), "starting vinorm CLI");

    match cli.command {
        Commands::Normalize {
            input,
            no_preprocessing,
            no_transliteration,
            acronyms,
            words,
            data_dir,
        } => {
            commands::normalize::run(commands::normalize::NormalizeArgs {
                input,
                no_preprocessing,
                no_transliteration,
                acronyms,
                words,
                data_dir,
            })
            .context("normalization failed")?;
        }
        Commands::Check { word } => {
            commands::check::run(&word);
        }
        Commands::Transliterate { word } => {
            commands::transliterate::run(&word);
        }
        Commands::Info => {
            commands::info::run();
        }
    }

    Ok(())
}
