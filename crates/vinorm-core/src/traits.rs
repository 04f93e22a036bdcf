//! Trait definitions for normalization pipeline components.

use crate::config::NormalizeOptions;
use crate::error::NormResult;

/// Text normalization trait.
///
/// Implementations convert raw mixed-script Vietnamese text into a fully
/// spelled-out form suitable for speech synthesis, handling numbers,
/// dates, currency, acronyms, and foreign words.
pub trait TextNormalizer: Send + Sync {
    /// Normalize the input text using the instance's default options.
    fn normalize(&self, input: &str) -> NormResult<String>;

    /// Normalize with explicit per-call options.
    ///
    /// With `enable_preprocessing` off, only Unicode folding, dictionary
    /// replacement, and transliteration run; digit spans are left intact.
    fn normalize_with(&self, input: &str, options: &NormalizeOptions) -> NormResult<String>;
}
