//! Errors raised while validating a formatter's option bag.
//!
//! Every variant is produced before any numeric work starts; once a
//! [`crate::NumberFormatter`] has been constructed, formatting itself cannot
//! fail. Locale-data gaps are recovered with fallback patterns and are never
//! surfaced here.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A recognized option key was given a value outside its allowed set.
    #[error("invalid value {value:?} for option {key:?}; expected one of {allowed:?}")]
    InvalidOption {
        key: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },

    /// The selected style implies an option that was not supplied.
    #[error("option {key:?} is required when style is {style:?}")]
    MissingRequiredOption {
        key: &'static str,
        style: &'static str,
    },

    /// Currency codes must be exactly three ASCII letters.
    #[error("invalid currency code {0:?}")]
    InvalidCurrencyCode(String),

    /// Unit identifiers must come from the sanctioned-unit table, either
    /// alone or composed as `<unit>-per-<unit>`.
    #[error("invalid unit identifier {0:?}")]
    InvalidUnit(String),

    /// A digit-count bound is out of range, or the minimum exceeds the
    /// maximum. Ordering violations report the effective range, so
    /// `minimumFractionDigits > maximumFractionDigits` shows up as the
    /// minimum being outside `0..=max`.
    #[error("option {key:?} must be between {min} and {max}, got {value}")]
    InvalidDigitRange {
        key: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_offending_key() {
        let err = FormatError::InvalidOption {
            key: "notation",
            value: "fancy".to_string(),
            allowed: &["standard", "scientific", "engineering", "compact"],
        };
        let msg = err.to_string();
        assert!(msg.contains("notation"));
        assert!(msg.contains("fancy"));
        assert!(msg.contains("scientific"));
    }

    #[test]
    fn digit_range_display() {
        let err = FormatError::InvalidDigitRange {
            key: "minimumIntegerDigits",
            value: 40,
            min: 1,
            max: 21,
        };
        assert!(err.to_string().contains("between 1 and 21"));
    }
}
