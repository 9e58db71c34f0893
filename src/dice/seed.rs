//! Seed parsing for callers that collect seeds as text.

use crate::core::{LudoError, Result};

/// Parse a user-supplied seed.
///
/// Accepts any decimal `u64`, or a negative `i64` which is reinterpreted
/// bit-for-bit. Surrounding whitespace is ignored.
///
/// ```
/// use rust_ludo::dice::parse_seed;
///
/// assert_eq!(parse_seed("42").unwrap(), 42);
/// assert_eq!(parse_seed("-1").unwrap(), u64::MAX);
/// assert!(parse_seed("lucky").is_err());
/// ```
pub fn parse_seed(input: &str) -> Result<u64> {
    let trimmed = input.trim();

    trimmed
        .parse::<u64>()
        .or_else(|_| trimmed.parse::<i64>().map(|signed| signed as u64))
        .map_err(|_| LudoError::InvalidSeed {
            input: input.to_string(),
        })
}
