//! Check command implementation.

use vinorm::is_vietnamese_word;

/// Run the check command.
pub fn run(word: &str) {
    if is_vietnamese_word(word) {
        println!("{word}: Vietnamese");
    } else {
        println!("{word}: not Vietnamese");
    }
}
