//! Option bag validation and resolution.
//!
//! A [`RawOptions`] carries the caller's option bag exactly as written:
//! enum-valued keys are plain strings, digit bounds are plain integers.
//! [`RawOptions::resolve`] is the single normalization pass that checks every
//! value against its allowed set, cross-validates style against
//! currency/unit, and collapses the four digit-count knobs into exactly one
//! active [`DigitPolicy`]. Nothing downstream ever re-validates.

use crate::error::FormatError;
use tinystr::TinyAsciiStr;

/// The caller-facing option bag. All fields are optional; `Default` is a
/// plain decimal formatter.
#[derive(Debug, Clone, Default)]
pub struct RawOptions {
    pub style: Option<String>,
    pub currency: Option<String>,
    pub currency_display: Option<String>,
    pub currency_sign: Option<String>,
    pub unit: Option<String>,
    pub unit_display: Option<String>,
    pub notation: Option<String>,
    pub compact_display: Option<String>,
    pub sign_display: Option<String>,
    pub use_grouping: Option<String>,
    pub rounding_mode: Option<String>,
    pub rounding_priority: Option<String>,
    pub trailing_zero_display: Option<String>,
    pub numbering_system: Option<String>,
    pub minimum_integer_digits: Option<u32>,
    pub minimum_fraction_digits: Option<u32>,
    pub maximum_fraction_digits: Option<u32>,
    pub minimum_significant_digits: Option<u32>,
    pub maximum_significant_digits: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Decimal,
    Percent,
    Currency,
    Unit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurrencyDisplay {
    #[default]
    Symbol,
    NarrowSymbol,
    Code,
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurrencySign {
    #[default]
    Standard,
    Accounting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitDisplay {
    #[default]
    Short,
    Narrow,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    #[default]
    Standard,
    Scientific,
    Engineering,
    Compact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompactDisplay {
    #[default]
    Short,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignDisplay {
    #[default]
    Auto,
    Always,
    Never,
    ExceptZero,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Grouping {
    #[default]
    Auto,
    Always,
    Min2,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingMode {
    Ceil,
    Floor,
    Expand,
    Trunc,
    HalfCeil,
    HalfFloor,
    HalfExpand,
    HalfTrunc,
    #[default]
    HalfEven,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingPriority {
    #[default]
    Auto,
    MorePrecision,
    LessPrecision,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingZeroDisplay {
    #[default]
    Auto,
    StripIfInteger,
}

/// A sanctioned unit identifier, single or compound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Single(&'static str),
    Per(&'static str, &'static str),
}

/// Exactly one digit-count policy is active after resolution. `Mixed` keeps
/// both bounds alive and lets the rounding-priority rule pick per value;
/// it is also how compact notation's default precision is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DigitPolicy {
    Fraction {
        min: u16,
        max: u16,
    },
    Significant {
        min: u16,
        max: u16,
    },
    Mixed {
        sig_min: u16,
        sig_max: u16,
        frac_min: u16,
        frac_max: u16,
        priority: RoundingPriority,
    },
}

/// Fully resolved, immutable formatter configuration.
#[derive(Debug, Clone)]
pub(crate) struct FormatOptions {
    pub style: Style,
    pub currency: Option<TinyAsciiStr<3>>,
    pub currency_display: CurrencyDisplay,
    pub currency_sign: CurrencySign,
    pub unit: Option<Unit>,
    pub unit_display: UnitDisplay,
    pub notation: Notation,
    pub compact_display: CompactDisplay,
    pub sign_display: SignDisplay,
    pub grouping: Grouping,
    pub rounding_mode: RoundingMode,
    pub trailing_zero_display: TrailingZeroDisplay,
    pub numbering_system: Option<String>,
    pub minimum_integer_digits: u16,
    pub digit_policy: DigitPolicy,
}

fn get_option<T: Copy>(
    key: &'static str,
    raw: &Option<String>,
    table: &[(&'static str, T)],
    allowed: &'static [&'static str],
    default: T,
) -> Result<T, FormatError> {
    match raw.as_deref() {
        None => Ok(default),
        Some(v) => table
            .iter()
            .find(|(name, _)| *name == v)
            .map(|&(_, t)| t)
            .ok_or_else(|| FormatError::InvalidOption {
                key,
                value: v.to_string(),
                allowed,
            }),
    }
}

fn get_digit_count(
    key: &'static str,
    raw: Option<u32>,
    min: u32,
    max: u32,
) -> Result<Option<u16>, FormatError> {
    match raw {
        None => Ok(None),
        Some(v) if v < min || v > max => Err(FormatError::InvalidDigitRange {
            key,
            value: v,
            min,
            max,
        }),
        Some(v) => Ok(Some(v as u16)),
    }
}

fn is_well_formed_currency_code(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic())
}

/// Default fraction digits for a currency under standard notation.
/// Most currencies use two minor-unit digits; the dinar family uses three
/// and the yen family none.
pub(crate) fn currency_digits(currency: &str) -> u16 {
    match currency {
        "BHD" | "IQD" | "JOD" | "KWD" | "LYD" | "OMR" | "TND" => 3,
        "BIF" | "CLP" | "DJF" | "GNF" | "ISK" | "JPY" | "KMF" | "KRW" | "PYG" | "RWF" | "UGX"
        | "UYI" | "VND" | "VUV" | "XAF" | "XOF" | "XPF" => 0,
        _ => 2,
    }
}

const SANCTIONED_UNITS: &[&str] = &[
    "acre",
    "bit",
    "byte",
    "celsius",
    "centimeter",
    "day",
    "degree",
    "fahrenheit",
    "fluid-ounce",
    "foot",
    "gallon",
    "gigabit",
    "gigabyte",
    "gram",
    "hectare",
    "hour",
    "inch",
    "kilobit",
    "kilobyte",
    "kilogram",
    "kilometer",
    "liter",
    "megabit",
    "megabyte",
    "meter",
    "microsecond",
    "mile",
    "mile-scandinavian",
    "milliliter",
    "millimeter",
    "millisecond",
    "minute",
    "month",
    "nanosecond",
    "ounce",
    "percent",
    "petabyte",
    "pound",
    "second",
    "stone",
    "terabit",
    "terabyte",
    "week",
    "yard",
    "year",
];

fn sanctioned_single_unit(unit: &str) -> Option<&'static str> {
    SANCTIONED_UNITS.iter().find(|&&u| u == unit).copied()
}

fn parse_unit(unit: &str) -> Option<Unit> {
    if let Some((num, den)) = unit.split_once("-per-") {
        // Compound denominators ("a-per-b-per-c") are not sanctioned.
        if den.contains("-per-") {
            return None;
        }
        let num = sanctioned_single_unit(num)?;
        let den = sanctioned_single_unit(den)?;
        return Some(Unit::Per(num, den));
    }
    sanctioned_single_unit(unit).map(Unit::Single)
}

fn is_well_formed_numbering_system(ns: &str) -> bool {
    !ns.is_empty()
        && ns.split('-').all(|part| {
            part.len() >= 3 && part.len() <= 8 && part.chars().all(|c| c.is_ascii_alphanumeric())
        })
}

impl RawOptions {
    /// Runs the full validation pass and produces the resolved
    /// configuration. Every error this crate can raise comes from here.
    pub(crate) fn resolve(&self) -> Result<FormatOptions, FormatError> {
        let style = get_option(
            "style",
            &self.style,
            &[
                ("decimal", Style::Decimal),
                ("percent", Style::Percent),
                ("currency", Style::Currency),
                ("unit", Style::Unit),
            ],
            &["decimal", "percent", "currency", "unit"],
            Style::Decimal,
        )?;

        let currency = match self.currency.as_deref() {
            Some(code) => {
                if !is_well_formed_currency_code(code) {
                    return Err(FormatError::InvalidCurrencyCode(code.to_string()));
                }
                let upper = code.to_ascii_uppercase();
                // Length was checked above, so the parse cannot fail.
                Some(
                    upper
                        .parse::<TinyAsciiStr<3>>()
                        .map_err(|_| FormatError::InvalidCurrencyCode(code.to_string()))?,
                )
            }
            None => None,
        };
        if style == Style::Currency && currency.is_none() {
            return Err(FormatError::MissingRequiredOption {
                key: "currency",
                style: "currency",
            });
        }

        // Display options are validated even when the style does not use
        // them, so a typo never passes silently.
        let currency_display = get_option(
            "currencyDisplay",
            &self.currency_display,
            &[
                ("symbol", CurrencyDisplay::Symbol),
                ("narrowSymbol", CurrencyDisplay::NarrowSymbol),
                ("code", CurrencyDisplay::Code),
                ("name", CurrencyDisplay::Name),
            ],
            &["symbol", "narrowSymbol", "code", "name"],
            CurrencyDisplay::Symbol,
        )?;
        let currency_sign = get_option(
            "currencySign",
            &self.currency_sign,
            &[
                ("standard", CurrencySign::Standard),
                ("accounting", CurrencySign::Accounting),
            ],
            &["standard", "accounting"],
            CurrencySign::Standard,
        )?;

        let unit = match self.unit.as_deref() {
            Some(u) => Some(parse_unit(u).ok_or_else(|| FormatError::InvalidUnit(u.to_string()))?),
            None => None,
        };
        if style == Style::Unit && unit.is_none() {
            return Err(FormatError::MissingRequiredOption {
                key: "unit",
                style: "unit",
            });
        }
        let unit_display = get_option(
            "unitDisplay",
            &self.unit_display,
            &[
                ("short", UnitDisplay::Short),
                ("narrow", UnitDisplay::Narrow),
                ("long", UnitDisplay::Long),
            ],
            &["short", "narrow", "long"],
            UnitDisplay::Short,
        )?;

        let notation = get_option(
            "notation",
            &self.notation,
            &[
                ("standard", Notation::Standard),
                ("scientific", Notation::Scientific),
                ("engineering", Notation::Engineering),
                ("compact", Notation::Compact),
            ],
            &["standard", "scientific", "engineering", "compact"],
            Notation::Standard,
        )?;
        let compact_display = get_option(
            "compactDisplay",
            &self.compact_display,
            &[
                ("short", CompactDisplay::Short),
                ("long", CompactDisplay::Long),
            ],
            &["short", "long"],
            CompactDisplay::Short,
        )?;

        let sign_display = get_option(
            "signDisplay",
            &self.sign_display,
            &[
                ("auto", SignDisplay::Auto),
                ("always", SignDisplay::Always),
                ("never", SignDisplay::Never),
                ("exceptZero", SignDisplay::ExceptZero),
                ("negative", SignDisplay::Negative),
            ],
            &["auto", "always", "never", "exceptZero", "negative"],
            SignDisplay::Auto,
        )?;

        let grouping_default = if notation == Notation::Compact {
            Grouping::Min2
        } else {
            Grouping::Auto
        };
        let grouping = get_option(
            "useGrouping",
            &self.use_grouping,
            &[
                ("auto", Grouping::Auto),
                ("always", Grouping::Always),
                ("min2", Grouping::Min2),
                ("never", Grouping::Never),
            ],
            &["auto", "always", "min2", "never"],
            grouping_default,
        )?;

        let rounding_mode = get_option(
            "roundingMode",
            &self.rounding_mode,
            &[
                ("ceil", RoundingMode::Ceil),
                ("floor", RoundingMode::Floor),
                ("expand", RoundingMode::Expand),
                ("trunc", RoundingMode::Trunc),
                ("halfCeil", RoundingMode::HalfCeil),
                ("halfFloor", RoundingMode::HalfFloor),
                ("halfExpand", RoundingMode::HalfExpand),
                ("halfTrunc", RoundingMode::HalfTrunc),
                ("halfEven", RoundingMode::HalfEven),
            ],
            &[
                "ceil",
                "floor",
                "expand",
                "trunc",
                "halfCeil",
                "halfFloor",
                "halfExpand",
                "halfTrunc",
                "halfEven",
            ],
            RoundingMode::HalfEven,
        )?;
        let rounding_priority = get_option(
            "roundingPriority",
            &self.rounding_priority,
            &[
                ("auto", RoundingPriority::Auto),
                ("morePrecision", RoundingPriority::MorePrecision),
                ("lessPrecision", RoundingPriority::LessPrecision),
            ],
            &["auto", "morePrecision", "lessPrecision"],
            RoundingPriority::Auto,
        )?;
        let trailing_zero_display = get_option(
            "trailingZeroDisplay",
            &self.trailing_zero_display,
            &[
                ("auto", TrailingZeroDisplay::Auto),
                ("stripIfInteger", TrailingZeroDisplay::StripIfInteger),
            ],
            &["auto", "stripIfInteger"],
            TrailingZeroDisplay::Auto,
        )?;

        let numbering_system = match self.numbering_system.as_deref() {
            Some(ns) if !is_well_formed_numbering_system(ns) => {
                return Err(FormatError::InvalidOption {
                    key: "numberingSystem",
                    value: ns.to_string(),
                    allowed: &["<type sequence of 3-8 alphanumerics>"],
                });
            }
            other => other.map(str::to_string),
        };

        let minimum_integer_digits =
            get_digit_count("minimumIntegerDigits", self.minimum_integer_digits, 1, 21)?
                .unwrap_or(1);

        let digit_policy = self.resolve_digit_policy(style, notation, currency, rounding_priority)?;

        Ok(FormatOptions {
            style,
            currency,
            currency_display,
            currency_sign,
            unit,
            unit_display,
            notation,
            compact_display,
            sign_display,
            grouping,
            rounding_mode,
            trailing_zero_display,
            numbering_system,
            minimum_integer_digits,
            digit_policy,
        })
    }

    /// Collapses the four digit-count knobs into one policy.
    ///
    /// Defaults depend on style: currency gets its minor-unit digits,
    /// percent gets none, everything else up to three fraction digits.
    /// Compact notation with no explicit bounds gets the 1..=2
    /// significant-digit default, expressed as a more-precision mix with
    /// zero fraction digits so the integer part is never truncated. When
    /// both significant and fraction bounds are given, significant digits
    /// win unless a non-auto rounding priority asks for the mix.
    fn resolve_digit_policy(
        &self,
        style: Style,
        notation: Notation,
        currency: Option<TinyAsciiStr<3>>,
        priority: RoundingPriority,
    ) -> Result<DigitPolicy, FormatError> {
        let min_sd = get_digit_count(
            "minimumSignificantDigits",
            self.minimum_significant_digits,
            1,
            21,
        )?;
        let max_sd = get_digit_count(
            "maximumSignificantDigits",
            self.maximum_significant_digits,
            1,
            21,
        )?;
        let min_fd = get_digit_count(
            "minimumFractionDigits",
            self.minimum_fraction_digits,
            0,
            100,
        )?;
        let max_fd = get_digit_count(
            "maximumFractionDigits",
            self.maximum_fraction_digits,
            0,
            100,
        )?;

        let has_sd = min_sd.is_some() || max_sd.is_some();
        let has_fd = min_fd.is_some() || max_fd.is_some();
        let compact = notation == Notation::Compact;

        let (fd_default_min, fd_default_max) = match style {
            Style::Currency if notation == Notation::Standard => {
                let d = currency_digits(currency.map(|c| c.to_string()).as_deref().unwrap_or("USD"));
                (d, d)
            }
            Style::Percent => (0, 0),
            _ => (0, if compact { 0 } else { 3 }),
        };

        let resolve_sd = |min: Option<u16>, max: Option<u16>| -> Result<(u16, u16), FormatError> {
            let min = min.unwrap_or(1);
            let max = max.unwrap_or(21);
            if min > max {
                return Err(FormatError::InvalidDigitRange {
                    key: "minimumSignificantDigits",
                    value: min as u32,
                    min: 1,
                    max: max as u32,
                });
            }
            Ok((min, max))
        };
        let resolve_fd = |min: Option<u16>, max: Option<u16>| -> Result<(u16, u16), FormatError> {
            // An omitted bound is derived from the other one, so a lone
            // `minimumFractionDigits: 5` widens the maximum with it.
            let (min, max) = match (min, max) {
                (Some(mn), Some(mx)) => (mn, mx),
                (Some(mn), None) => (mn, fd_default_max.max(mn)),
                (None, Some(mx)) => (fd_default_min.min(mx), mx),
                (None, None) => (fd_default_min, fd_default_max),
            };
            if min > max {
                return Err(FormatError::InvalidDigitRange {
                    key: "minimumFractionDigits",
                    value: min as u32,
                    min: 0,
                    max: max as u32,
                });
            }
            Ok((min, max))
        };

        match (has_sd, has_fd) {
            (false, false) if compact => Ok(DigitPolicy::Mixed {
                sig_min: 1,
                sig_max: 2,
                frac_min: 0,
                frac_max: 0,
                priority: RoundingPriority::MorePrecision,
            }),
            (false, false) => {
                let (min, max) = resolve_fd(None, None)?;
                Ok(DigitPolicy::Fraction { min, max })
            }
            (true, false) => {
                let (min, max) = resolve_sd(min_sd, max_sd)?;
                Ok(DigitPolicy::Significant { min, max })
            }
            (false, true) => {
                let (min, max) = resolve_fd(min_fd, max_fd)?;
                Ok(DigitPolicy::Fraction { min, max })
            }
            (true, true) => {
                let (sig_min, sig_max) = resolve_sd(min_sd, max_sd)?;
                let (frac_min, frac_max) = resolve_fd(min_fd, max_fd)?;
                if priority == RoundingPriority::Auto {
                    // Both families specified: significant digits win.
                    Ok(DigitPolicy::Significant {
                        min: sig_min,
                        max: sig_max,
                    })
                } else {
                    Ok(DigitPolicy::Mixed {
                        sig_min,
                        sig_max,
                        frac_min,
                        frac_max,
                        priority,
                    })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(raw: RawOptions) -> Result<FormatOptions, FormatError> {
        raw.resolve()
    }

    #[test]
    fn defaults() {
        let opts = resolve(RawOptions::default()).unwrap();
        assert_eq!(opts.style, Style::Decimal);
        assert_eq!(opts.notation, Notation::Standard);
        assert_eq!(opts.sign_display, SignDisplay::Auto);
        assert_eq!(opts.minimum_integer_digits, 1);
        assert_eq!(opts.digit_policy, DigitPolicy::Fraction { min: 0, max: 3 });
    }

    #[test]
    fn invalid_enum_value_names_key_and_allowed_set() {
        let err = resolve(RawOptions {
            notation: Some("fancy".into()),
            ..Default::default()
        })
        .unwrap_err();
        match err {
            FormatError::InvalidOption { key, value, allowed } => {
                assert_eq!(key, "notation");
                assert_eq!(value, "fancy");
                assert!(allowed.contains(&"engineering"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn currency_style_requires_currency() {
        let err = resolve(RawOptions {
            style: Some("currency".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(
            err,
            FormatError::MissingRequiredOption { key: "currency", .. }
        ));
    }

    #[test]
    fn currency_code_must_be_three_letters() {
        let err = resolve(RawOptions {
            style: Some("currency".into()),
            currency: Some("EURO".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err, FormatError::InvalidCurrencyCode("EURO".into()));
    }

    #[test]
    fn currency_code_uppercased() {
        let opts = resolve(RawOptions {
            style: Some("currency".into()),
            currency: Some("eur".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(opts.currency.unwrap().as_str(), "EUR");
    }

    #[test]
    fn unit_style_requires_sanctioned_unit() {
        let err = resolve(RawOptions {
            style: Some("unit".into()),
            unit: Some("furlong".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err, FormatError::InvalidUnit("furlong".into()));

        let err = resolve(RawOptions {
            style: Some("unit".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(
            err,
            FormatError::MissingRequiredOption { key: "unit", .. }
        ));
    }

    #[test]
    fn compound_unit_resolves_both_halves() {
        let opts = resolve(RawOptions {
            style: Some("unit".into()),
            unit: Some("meter-per-second".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(opts.unit, Some(Unit::Per("meter", "second")));

        let err = resolve(RawOptions {
            style: Some("unit".into()),
            unit: Some("meter-per-parsec".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err, FormatError::InvalidUnit("meter-per-parsec".into()));
    }

    #[test]
    fn digit_bounds_are_range_checked() {
        let err = resolve(RawOptions {
            minimum_integer_digits: Some(22),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(
            err,
            FormatError::InvalidDigitRange { key: "minimumIntegerDigits", value: 22, .. }
        ));

        let err = resolve(RawOptions {
            maximum_fraction_digits: Some(101),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(
            err,
            FormatError::InvalidDigitRange { key: "maximumFractionDigits", .. }
        ));
    }

    #[test]
    fn fraction_min_over_max_is_rejected() {
        let err = resolve(RawOptions {
            minimum_fraction_digits: Some(4),
            maximum_fraction_digits: Some(2),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(
            err,
            FormatError::InvalidDigitRange { key: "minimumFractionDigits", value: 4, max: 2, .. }
        ));
    }

    #[test]
    fn lone_minimum_fraction_widens_maximum() {
        let opts = resolve(RawOptions {
            minimum_fraction_digits: Some(5),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(opts.digit_policy, DigitPolicy::Fraction { min: 5, max: 5 });
    }

    #[test]
    fn significant_wins_when_both_families_given() {
        let opts = resolve(RawOptions {
            minimum_significant_digits: Some(2),
            maximum_significant_digits: Some(4),
            minimum_fraction_digits: Some(1),
            maximum_fraction_digits: Some(6),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(opts.digit_policy, DigitPolicy::Significant { min: 2, max: 4 });
    }

    #[test]
    fn rounding_priority_keeps_both_families() {
        let opts = resolve(RawOptions {
            minimum_significant_digits: Some(1),
            maximum_significant_digits: Some(2),
            maximum_fraction_digits: Some(0),
            rounding_priority: Some("lessPrecision".into()),
            ..Default::default()
        })
        .unwrap();
        assert!(matches!(
            opts.digit_policy,
            DigitPolicy::Mixed { priority: RoundingPriority::LessPrecision, .. }
        ));
    }

    #[test]
    fn compact_defaults_to_two_significant_digits() {
        let opts = resolve(RawOptions {
            notation: Some("compact".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            opts.digit_policy,
            DigitPolicy::Mixed {
                sig_min: 1,
                sig_max: 2,
                frac_min: 0,
                frac_max: 0,
                priority: RoundingPriority::MorePrecision,
            }
        );
        assert_eq!(opts.grouping, Grouping::Min2);
    }

    #[test]
    fn compact_default_yields_to_explicit_digits() {
        let opts = resolve(RawOptions {
            notation: Some("compact".into()),
            maximum_fraction_digits: Some(1),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(opts.digit_policy, DigitPolicy::Fraction { min: 0, max: 1 });
    }

    #[test]
    fn currency_minor_units_drive_fraction_defaults() {
        let eur = resolve(RawOptions {
            style: Some("currency".into()),
            currency: Some("EUR".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(eur.digit_policy, DigitPolicy::Fraction { min: 2, max: 2 });

        let jpy = resolve(RawOptions {
            style: Some("currency".into()),
            currency: Some("JPY".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(jpy.digit_policy, DigitPolicy::Fraction { min: 0, max: 0 });
    }

    #[test]
    fn malformed_numbering_system_is_rejected() {
        let err = resolve(RawOptions {
            numbering_system: Some("no".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(
            err,
            FormatError::InvalidOption { key: "numberingSystem", .. }
        ));
    }
}
