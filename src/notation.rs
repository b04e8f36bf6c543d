//! Notation resolution.
//!
//! Decides the power-of-ten scale for scientific, engineering and compact
//! notations, divides the digit string down to its mantissa, applies the
//! digit-count policy, and then re-resolves the scale if rounding carried
//! the mantissa past its upper bound. The re-resolution is what turns
//! `999999` at two significant digits into `1E6` rather than `10E5`, and
//! `999999999` in compact notation into the next magnitude bucket rather
//! than a four-digit mantissa.

use fixed_decimal::{Decimal, SignedRoundingMode};

use crate::digits;
use crate::options::{CompactDisplay, DigitPolicy, Notation};
use crate::pattern::{CompactEntry, LocalePattern};

/// The scale applied before digit generation. `exponent` is nonzero only
/// for scientific, engineering and compact notation; `compact` names the
/// selected magnitude bucket for later suffix lookup.
pub(crate) struct ResolvedMagnitude {
    pub exponent: i16,
    pub compact: Option<&'static CompactEntry>,
}

impl ResolvedMagnitude {
    const STANDARD: ResolvedMagnitude = ResolvedMagnitude {
        exponent: 0,
        compact: None,
    };
}

fn magnitude(dec: &Decimal) -> i16 {
    if dec.absolute.is_zero() {
        0
    } else {
        dec.absolute.nonzero_magnitude_start()
    }
}

/// Scales `dec` to its mantissa for the requested notation and applies the
/// digit-count policy, re-resolving the exponent after rounding.
///
/// Zero always resolves to exponent 0, whatever the notation.
pub(crate) fn scale_and_round(
    dec: &mut Decimal,
    notation: Notation,
    compact_display: CompactDisplay,
    policy: DigitPolicy,
    mode: SignedRoundingMode,
    pattern: &LocalePattern,
) -> ResolvedMagnitude {
    match notation {
        Notation::Standard => {
            digits::apply_policy(dec, policy, mode);
            ResolvedMagnitude::STANDARD
        }
        Notation::Scientific | Notation::Engineering => {
            if dec.absolute.is_zero() {
                digits::apply_policy(dec, policy, mode);
                return ResolvedMagnitude::STANDARD;
            }
            let engineering = notation == Notation::Engineering;
            let mag = magnitude(dec);
            let mut exponent = if engineering {
                mag.div_euclid(3) * 3
            } else {
                mag
            };
            dec.multiply_pow10(-exponent);
            digits::apply_policy(dec, policy, mode);

            // Rounding can carry the mantissa to 10 (or 1000); shift it
            // back down and round again at the new scale.
            let limit = if engineering { 2 } else { 0 };
            let rounded_mag = magnitude(dec);
            if !dec.absolute.is_zero() && rounded_mag > limit {
                let shift = if engineering { 3 } else { rounded_mag };
                dec.multiply_pow10(-shift);
                exponent += shift;
                digits::apply_policy(dec, policy, mode);
            }
            ResolvedMagnitude {
                exponent,
                compact: None,
            }
        }
        Notation::Compact => {
            if dec.absolute.is_zero() {
                digits::apply_policy(dec, policy, mode);
                return ResolvedMagnitude::STANDARD;
            }
            let mut entry = pattern.compact_entry(magnitude(dec), compact_display);
            let mut exponent = entry.map_or(0, |e| e.exponent);
            dec.multiply_pow10(-exponent);
            digits::apply_policy(dec, policy, mode);

            // A carry past the bucket boundary moves the value into the
            // next bucket; rescale the already-rounded mantissa.
            let full_mag = exponent + magnitude(dec);
            let carried = pattern.compact_entry(full_mag, compact_display);
            if carried.map(|e| e.exponent) != entry.map(|e| e.exponent) {
                let new_exponent = carried.map_or(0, |e| e.exponent);
                dec.multiply_pow10(exponent - new_exponent);
                digits::apply_policy(dec, policy, mode);
                entry = carried;
                exponent = new_exponent;
            }
            ResolvedMagnitude {
                exponent,
                compact: entry,
            }
        }
    }
}
