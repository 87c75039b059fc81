//! # Validate - Field checks for air-quality records
//!
//! Pure functions, no state. Two families of checks live here:
//!
//! - **Structural** checks ([`validate_integer`], [`validate_name`]) run while
//!   parsing a line of the backing file. Failing one means the line is
//!   malformed and can be skipped.
//! - **Semantic** checks ([`validate_aqi_value`], [`validate_aqi_category`],
//!   [`validate_air_quality`]) decide whether a reading set is acceptable.
//!   Write paths must run [`validate_air_quality`] before touching the store.
//!
//! ## Example
//!
//! ```rust
//! use validate::{validate_aqi_value, validate_aqi_category};
//!
//! assert!(validate_aqi_value("42").is_ok());
//! assert!(validate_aqi_value("N/A").is_ok());
//! assert!(validate_aqi_value("-1").is_err());
//! assert!(validate_aqi_category("unhealthy for sensitive groups").is_ok());
//! ```
use model::{AirQuality, AqiCategory, Pollutant, SENTINEL};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Digits only; the empty string matches.
static INTEGER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]*$").expect("valid regex"));

/// Empty, whitespace-only, or a single letter followed by whitespace.
static MALFORMED_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*|[a-zA-Z]\s+)$").expect("valid regex"));

/// Errors produced by the field checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A field failed structural parsing (bad integer or bad name).
    #[error("database record entry invalid: {0:?}")]
    InvalidRecord(String),

    /// An AQI value is neither a non-negative integer nor the sentinel.
    #[error("AQI value invalid: {0:?}")]
    InvalidAqiValue(String),

    /// An AQI category is not one of the allowed labels.
    #[error(
        "AQI category must be \"Good\", \"Moderate\", \"Unhealthy for Sensitive Groups\", \
         \"Unhealthy\", \"Very Unhealthy\", \"Hazardous\", or \"N/A\" (got {0:?})"
    )]
    InvalidAqiCategory(String),
}

/// Returns `true` if `s` is exactly the sentinel.
#[inline]
pub fn is_sentinel(s: &str) -> bool {
    s == SENTINEL
}

/// Accepts a digit string (including the empty string) or the sentinel.
pub fn validate_integer(s: &str) -> Result<&str, ValidationError> {
    if INTEGER_RE.is_match(s) || is_sentinel(s) {
        Ok(s)
    } else {
        Err(ValidationError::InvalidRecord(s.to_string()))
    }
}

/// Rejects malformed location fields.
///
/// This is a parse-time sanity check and not a general name policy: anything
/// other than blank text or a lone letter followed by whitespace passes.
pub fn validate_name(s: &str) -> Result<&str, ValidationError> {
    if MALFORMED_NAME_RE.is_match(s) {
        Err(ValidationError::InvalidRecord(s.to_string()))
    } else {
        Ok(s)
    }
}

/// Accepts the sentinel or a non-empty digit string that fits a `u32`.
///
/// Unlike [`validate_integer`], the empty string is rejected here.
pub fn validate_aqi_value(s: &str) -> Result<bool, ValidationError> {
    if is_sentinel(s) {
        return Ok(true);
    }
    if !s.is_empty() && INTEGER_RE.is_match(s) && s.parse::<u32>().is_ok() {
        Ok(true)
    } else {
        Err(ValidationError::InvalidAqiValue(s.to_string()))
    }
}

/// Accepts one of the six category labels in any case, or the sentinel.
pub fn validate_aqi_category(s: &str) -> Result<bool, ValidationError> {
    if is_sentinel(s) || AqiCategory::parse(s).is_some() {
        Ok(true)
    } else {
        Err(ValidationError::InvalidAqiCategory(s.to_string()))
    }
}

/// Checks all five (value, category) pairs in column order.
///
/// The first failing field's error is returned.
pub fn validate_air_quality(aq: &AirQuality) -> Result<bool, ValidationError> {
    for pollutant in Pollutant::ALL {
        validate_aqi_value(aq.value(pollutant))?;
        validate_aqi_category(aq.category(pollutant))?;
    }
    Ok(true)
}

#[cfg(test)]
mod tests;
