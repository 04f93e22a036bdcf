//! Transliterate command implementation.

use vinorm::transliterate_word;

/// Run the transliterate command.
pub fn run(word: &str) {
    println!("{}", transliterate_word(word));
}
