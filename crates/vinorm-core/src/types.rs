//! Core data types for the normalization pipeline.

use serde::{Deserialize, Serialize};

/// A parsed numeric span, decoupled from machine integer width.
///
/// Digits are stored as strings so that inputs like `1.500.000.000`
/// round-trip exactly no matter how long they are; the numeral grammar
/// engine never converts the sequence to a fixed-width integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberValue {
    /// True for negative values (read as "âm").
    pub negative: bool,
    /// Integer part as a sequence of ASCII decimal digits.
    pub int_digits: String,
    /// Fractional part digits, read one by one after "phẩy".
    pub frac_digits: Option<String>,
}

impl NumberValue {
    /// Create an integer value from a digit string.
    pub fn integer(digits: impl Into<String>) -> Self {
        Self {
            negative: false,
            int_digits: digits.into(),
            frac_digits: None,
        }
    }

    /// Create a decimal value from integer and fractional digit strings.
    pub fn decimal(int_digits: impl Into<String>, frac_digits: impl Into<String>) -> Self {
        Self {
            negative: false,
            int_digits: int_digits.into(),
            frac_digits: Some(frac_digits.into()),
        }
    }

    /// Mark the value as negative.
    pub fn negated(mut self) -> Self {
        self.negative = true;
        self
    }

    /// Integer digits with leading zeros stripped ("007" reads as "bảy").
    ///
    /// A value that is all zeros keeps a single "0".
    pub fn significant_int_digits(&self) -> &str {
        let trimmed = self.int_digits.trim_start_matches('0');
        if trimmed.is_empty() {
            "0"
        } else {
            trimmed
        }
    }

    /// True when both parts are zero (or absent).
    pub fn is_zero(&self) -> bool {
        self.int_digits.bytes().all(|b| b == b'0')
            && self
                .frac_digits
                .as_deref()
                .map_or(true, |f| f.bytes().all(|b| b == b'0'))
    }
}
