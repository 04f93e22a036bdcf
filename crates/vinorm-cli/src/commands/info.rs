//! Info command implementation.

use vinorm::Normalizer;

/// Run the info command.
pub fn run() {
    println!("vinorm - Vietnamese TTS text normalizer");
    println!("=======================================");
    println!();
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Preprocessing stages:");
    let normalizer = Normalizer::new();
    for name in normalizer.rule_names() {
        println!("  {name}");
    }
    println!();
    println!("Post-processing: lowercase, dictionary replacement, transliteration");
    println!();
    println!("Crates:");
    println!("  vinorm-core: Core types, errors, and configuration");
    println!("  vinorm: Normalization engine");
    println!("  vinorm-cli: This CLI tool");
}
