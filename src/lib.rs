//! Locale-aware number formatting.
//!
//! Formats numbers the way a locale writes them: grouping and decimal
//! separators, percent and currency styles, measurement-unit wording, and
//! standard, scientific, engineering or compact notation. Options are
//! validated once when a formatter is built; formatting itself never fails,
//! and locale-data gaps fall back to well-formed root patterns instead of
//! erroring.
//!
//! Digit generation runs on exact decimal arithmetic ([`fixed_decimal`])
//! with half-to-even rounding at the digit boundary, so output is
//! bit-for-bit reproducible across platforms. Locale data (separators,
//! grouping positions, plural rules) comes from the CLDR tables baked into
//! [`icu`].
//!
//! # Quick start
//!
//! ```
//! use intlnum::{NumberFormatter, RawOptions};
//!
//! let speed = NumberFormatter::new(
//!     "en-US",
//!     RawOptions {
//!         style: Some("unit".into()),
//!         unit: Some("meter-per-second".into()),
//!         ..Default::default()
//!     },
//! )
//! .unwrap();
//! assert_eq!(speed.format(299_792_458.0), "299,792,458 m/s");
//!
//! let compact = NumberFormatter::new(
//!     "en-US",
//!     RawOptions {
//!         notation: Some("compact".into()),
//!         compact_display: Some("long".into()),
//!         ..Default::default()
//!     },
//! )
//! .unwrap();
//! assert_eq!(compact.format(987_654_321.0), "988 million");
//! ```
//!
//! [`NumberFormatter::format_to_parts`] returns the same output as a
//! sequence of typed [`Part`]s for callers that need to inspect or restyle
//! individual fragments.

mod decorate;
mod digits;
mod error;
mod notation;
mod options;
mod pattern;

pub use decorate::{FormattedNumber, Part, PartKind};
pub use error::FormatError;
pub use options::RawOptions;

use std::sync::Arc;

use options::FormatOptions;
use pattern::LocalePattern;

/// A formatter bound to one locale and one resolved option set.
///
/// Construction runs the whole validation pass, so every option error
/// surfaces before any value is formatted. Formatters are cheap to clone
/// and safe to share across threads; the underlying locale pattern is
/// cached per locale and shared.
#[derive(Clone)]
pub struct NumberFormatter {
    options: FormatOptions,
    pattern: Arc<LocalePattern>,
}

impl NumberFormatter {
    /// Validates the option bag and binds the formatter to a locale.
    ///
    /// Unsupported locales do not fail; the provider supplies a
    /// best-effort fallback pattern instead.
    pub fn new(locale: &str, options: RawOptions) -> Result<Self, FormatError> {
        let options = options.resolve()?;
        let pattern = pattern::lookup(
            locale,
            options.grouping,
            options.numbering_system.as_deref(),
        );
        Ok(NumberFormatter { options, pattern })
    }

    /// Formats a value. `NaN` and the infinities render as locale tokens;
    /// negative zero keeps its sign where the sign-display policy shows it.
    pub fn format(&self, value: f64) -> String {
        self.format_to_parts(value).to_string()
    }

    /// Formats a value into an ordered sequence of typed parts.
    pub fn format_to_parts(&self, value: f64) -> FormattedNumber {
        decorate::format_value(value, &self.options, &self.pattern)
    }
}

/// One-shot convenience over [`NumberFormatter::new`] + `format`.
pub fn format(value: f64, locale: &str, options: RawOptions) -> Result<String, FormatError> {
    Ok(NumberFormatter::new(locale, options)?.format(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(value: f64, locale: &str, options: RawOptions) -> String {
        format(value, locale, options).unwrap()
    }

    /// Locale-data-dependent renderings are asserted as membership in the
    /// acceptable set; the provider guarantees a valid pattern, not a
    /// canonical one.
    fn assert_one_of(actual: &str, expected: &[&str]) {
        assert!(
            expected.contains(&actual),
            "got {actual:?}, expected one of {expected:?}"
        );
    }

    #[test]
    fn speed_of_light_in_short_units() {
        assert_eq!(
            fmt(
                299_792_458.0,
                "en-US",
                RawOptions {
                    style: Some("unit".into()),
                    unit: Some("meter-per-second".into()),
                    unit_display: Some("short".into()),
                    ..Default::default()
                }
            ),
            "299,792,458 m/s"
        );
    }

    #[test]
    fn scientific_notation() {
        assert_eq!(
            fmt(
                987_654_321.0,
                "en-US",
                RawOptions {
                    notation: Some("scientific".into()),
                    ..Default::default()
                }
            ),
            "9.877E8"
        );
    }

    #[test]
    fn engineering_notation() {
        assert_eq!(
            fmt(
                987_654_321.0,
                "en-US",
                RawOptions {
                    notation: Some("engineering".into()),
                    ..Default::default()
                }
            ),
            "987.654E6"
        );
    }

    #[test]
    fn long_compact_notation() {
        assert_eq!(
            fmt(
                987_654_321.0,
                "en-US",
                RawOptions {
                    notation: Some("compact".into()),
                    compact_display: Some("long".into()),
                    ..Default::default()
                }
            ),
            "988 million"
        );
    }

    #[test]
    fn scientific_with_fixed_fractions_and_unit() {
        assert_eq!(
            fmt(
                299_792_458.0,
                "en-US",
                RawOptions {
                    notation: Some("scientific".into()),
                    minimum_fraction_digits: Some(2),
                    maximum_fraction_digits: Some(2),
                    style: Some("unit".into()),
                    unit: Some("meter-per-second".into()),
                    ..Default::default()
                }
            ),
            "3.00E8 m/s"
        );
    }

    #[test]
    fn always_signed() {
        assert_eq!(
            fmt(
                55.0,
                "en-US",
                RawOptions {
                    sign_display: Some("always".into()),
                    ..Default::default()
                }
            ),
            "+55"
        );
    }

    #[test]
    fn percent_with_except_zero_sign() {
        assert_eq!(
            fmt(
                0.55,
                "en-US",
                RawOptions {
                    style: Some("percent".into()),
                    sign_display: Some("exceptZero".into()),
                    ..Default::default()
                }
            ),
            "+55%"
        );
    }

    #[test]
    fn bengali_accounting_currency_is_parenthesized() {
        let out = fmt(
            -100.0,
            "bn",
            RawOptions {
                style: Some("currency".into()),
                currency: Some("EUR".into()),
                currency_sign: Some("accounting".into()),
                ..Default::default()
            },
        );
        // Digit glyphs depend on the provider's numbering-system tables.
        assert_one_of(
            &out,
            &[
                "(\u{09E7}\u{09E6}\u{09E6}.\u{09E6}\u{09E6}\u{20AC})",
                "(100.00\u{20AC})",
            ],
        );
        assert!(out.starts_with('(') && out.ends_with(')'));
    }

    #[test]
    fn narrow_symbol_rendering_may_vary() {
        let out = fmt(
            100.0,
            "en-CA",
            RawOptions {
                style: Some("currency".into()),
                currency: Some("USD".into()),
                currency_display: Some("narrowSymbol".into()),
                ..Default::default()
            },
        );
        assert_one_of(&out, &["US$100.00", "$100.00"]);
    }

    #[test]
    fn default_format_round_trips() {
        let formatter = NumberFormatter::new(
            "en-US",
            RawOptions {
                use_grouping: Some("never".into()),
                ..Default::default()
            },
        )
        .unwrap();
        for value in [0.0, 1.0, -1.5, 1234.567, 98765.4321, -0.125] {
            let out = formatter.format(value);
            let parsed: f64 = out.parse().unwrap();
            // Default precision keeps three fraction digits.
            assert!((parsed - value).abs() <= 0.0005, "{value} -> {out}");
        }
    }

    #[test]
    fn parts_concatenate_to_the_string() {
        let formatter = NumberFormatter::new(
            "de-DE",
            RawOptions {
                style: Some("currency".into()),
                currency: Some("EUR".into()),
                ..Default::default()
            },
        )
        .unwrap();
        let parts = formatter.format_to_parts(-1234.5);
        assert_eq!(parts.to_string(), formatter.format(-1234.5));
        assert!(parts.parts().iter().any(|p| p.kind == PartKind::Currency));
        assert!(parts.parts().iter().any(|p| p.kind == PartKind::Group));
    }

    #[test]
    fn option_errors_fire_before_any_formatting() {
        assert!(matches!(
            format(1.0, "en-US", RawOptions {
                style: Some("currency".into()),
                ..Default::default()
            }),
            Err(FormatError::MissingRequiredOption { key: "currency", .. })
        ));
        assert!(matches!(
            format(1.0, "en-US", RawOptions {
                style: Some("unit".into()),
                unit: Some("smoot".into()),
                ..Default::default()
            }),
            Err(FormatError::InvalidUnit(_))
        ));
    }

    #[test]
    fn zero_never_takes_a_nonzero_exponent() {
        assert_eq!(
            fmt(
                0.0,
                "en-US",
                RawOptions {
                    notation: Some("scientific".into()),
                    ..Default::default()
                }
            ),
            "0E0"
        );
        assert_eq!(
            fmt(
                0.0,
                "en-US",
                RawOptions {
                    notation: Some("compact".into()),
                    ..Default::default()
                }
            ),
            "0"
        );
    }

    #[test]
    fn compact_carry_selects_next_breakpoint() {
        assert_eq!(
            fmt(
                999_999_999.0,
                "en-US",
                RawOptions {
                    notation: Some("compact".into()),
                    ..Default::default()
                }
            ),
            "1B"
        );
        assert_eq!(
            fmt(
                999_999.0,
                "en-US",
                RawOptions {
                    notation: Some("scientific".into()),
                    maximum_significant_digits: Some(2),
                    ..Default::default()
                }
            ),
            "1E6"
        );
    }

    #[test]
    fn german_compact_long_pluralizes() {
        assert_eq!(
            fmt(
                1_000_000.0,
                "de-DE",
                RawOptions {
                    notation: Some("compact".into()),
                    compact_display: Some("long".into()),
                    ..Default::default()
                }
            ),
            "1 Million"
        );
        assert_eq!(
            fmt(
                2_000_000.0,
                "de-DE",
                RawOptions {
                    notation: Some("compact".into()),
                    compact_display: Some("long".into()),
                    ..Default::default()
                }
            ),
            "2 Millionen"
        );
    }
}
