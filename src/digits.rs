//! Digit-string construction.
//!
//! All digit work happens on [`fixed_decimal::Decimal`]: a decimal digit
//! sequence with an explicit magnitude range and a separate sign. Rounding,
//! trimming and padding are exact decimal operations, so results are
//! identical across platforms regardless of the host's floating-point
//! rounding mode. The default digit-boundary rounding is half-to-even.

use fixed_decimal::{Decimal, FloatPrecision, SignedRoundingMode, UnsignedRoundingMode};

use crate::options::{DigitPolicy, RoundingMode, RoundingPriority};

pub(crate) fn signed_rounding_mode(mode: RoundingMode) -> SignedRoundingMode {
    match mode {
        RoundingMode::Ceil => SignedRoundingMode::Ceil,
        RoundingMode::Floor => SignedRoundingMode::Floor,
        RoundingMode::Expand => SignedRoundingMode::Unsigned(UnsignedRoundingMode::Expand),
        RoundingMode::Trunc => SignedRoundingMode::Unsigned(UnsignedRoundingMode::Trunc),
        RoundingMode::HalfCeil => SignedRoundingMode::HalfCeil,
        RoundingMode::HalfFloor => SignedRoundingMode::HalfFloor,
        RoundingMode::HalfExpand => SignedRoundingMode::Unsigned(UnsignedRoundingMode::HalfExpand),
        RoundingMode::HalfTrunc => SignedRoundingMode::Unsigned(UnsignedRoundingMode::HalfTrunc),
        RoundingMode::HalfEven => SignedRoundingMode::Unsigned(UnsignedRoundingMode::HalfEven),
    }
}

/// Converts a finite double into its shortest round-tripping digit string.
/// The sign of a negative zero is preserved.
pub(crate) fn from_f64(value: f64) -> Decimal {
    match Decimal::try_from_f64(value, FloatPrecision::RoundTrip) {
        Ok(d) => d,
        Err(_) => match Decimal::try_from_str(&format!("{value}")) {
            Ok(d) => d,
            Err(_) => Decimal::from(0),
        },
    }
}

fn magnitude(dec: &Decimal) -> i16 {
    if dec.absolute.is_zero() {
        0
    } else {
        dec.absolute.nonzero_magnitude_start()
    }
}

fn significant_count(dec: &Decimal) -> i16 {
    if dec.absolute.is_zero() {
        1
    } else {
        let start = dec.absolute.nonzero_magnitude_start();
        let end = dec.absolute.nonzero_magnitude_end();
        (start - end + 1).max(1)
    }
}

fn apply_fraction(dec: &mut Decimal, min: u16, max: u16, mode: SignedRoundingMode) {
    dec.round_with_mode(-(max as i16), mode);
    dec.absolute.trim_end();
    if min > 0 {
        dec.absolute.pad_end(-(min as i16));
    }
}

fn apply_significant(dec: &mut Decimal, min: u16, max: u16, mode: SignedRoundingMode) {
    if significant_count(dec) > max as i16 {
        let pos = magnitude(dec) - max as i16 + 1;
        dec.round_with_mode(pos, mode);
    }
    dec.absolute.trim_end();
    if significant_count(dec) < min as i16 {
        let pad_to = magnitude(dec) - min as i16 + 1;
        dec.absolute.pad_end(pad_to);
    }
}

/// Applies the resolved digit-count policy to a mantissa.
///
/// For the mixed policy, the rounding position is the more or less precise
/// of the two bounds, compared by decimal magnitude; trailing zeros beyond
/// the winning minimum are shed, which is what keeps compact notation's
/// default from printing `1.0 billion`.
pub(crate) fn apply_policy(dec: &mut Decimal, policy: DigitPolicy, mode: SignedRoundingMode) {
    match policy {
        DigitPolicy::Fraction { min, max } => apply_fraction(dec, min, max, mode),
        DigitPolicy::Significant { min, max } => apply_significant(dec, min, max, mode),
        DigitPolicy::Mixed {
            sig_min,
            sig_max,
            frac_min,
            frac_max,
            priority,
        } => {
            let sig_pos = magnitude(dec) - sig_max as i16 + 1;
            let frac_pos = -(frac_max as i16);
            let use_sig = match priority {
                RoundingPriority::MorePrecision => sig_pos <= frac_pos,
                RoundingPriority::LessPrecision => sig_pos >= frac_pos,
                RoundingPriority::Auto => true,
            };
            if use_sig {
                apply_significant(dec, sig_min, sig_max, mode);
            } else {
                apply_fraction(dec, frac_min, frac_max, mode);
            }
        }
    }
}

/// Left-pads the integer part with zero digits up to the requested count.
pub(crate) fn pad_integer(dec: &mut Decimal, minimum_integer_digits: u16) {
    if minimum_integer_digits > 1 {
        dec.absolute.pad_start(minimum_integer_digits as i16 - 1);
    }
}
