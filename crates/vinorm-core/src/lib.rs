//! # vinorm-core
//!
//! Core types, traits, and error definitions for the vinorm Vietnamese
//! text normalization engine.
//!
//! This crate provides the foundational abstractions shared by the engine
//! and its front ends:
//!
//! - Common data types (`NumberValue`)
//! - The `TextNormalizer` trait implemented by the pipeline
//! - Unified error handling via `NormError`
//! - Configuration structures (`NormalizerConfig`, `DictionarySource`)

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use config::{DictionarySource, NormalizeOptions, NormalizerConfig};
pub use error::{NormError, NormResult};
pub use traits::TextNormalizer;
pub use types::NumberValue;
