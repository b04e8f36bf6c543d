//! Sign and style decoration.
//!
//! Takes a rounded digit string plus its resolved magnitude and assembles
//! the final sequence of typed parts: sign glyph per the sign-display
//! policy, grouped integer digits, fraction digits, exponent marker,
//! compact suffix, and the style affixes (percent glyph, currency symbol
//! with accounting parentheses, unit wording). Concatenating the parts in
//! order yields the formatted string.

use std::fmt;

use fixed_decimal::Sign;
use icu::plurals::PluralCategory;

use crate::digits;
use crate::notation;
use crate::options::{
    CurrencyDisplay, CurrencySign, FormatOptions, Notation, SignDisplay, Style,
    TrailingZeroDisplay,
};
use crate::pattern::LocalePattern;

/// The role a fragment of formatted output plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    Literal,
    Integer,
    Fraction,
    Group,
    Sign,
    Currency,
    Unit,
    Compact,
    Exponent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    pub kind: PartKind,
    pub value: String,
}

impl Part {
    fn new(kind: PartKind, value: impl Into<String>) -> Self {
        Part {
            kind,
            value: value.into(),
        }
    }
}

/// An ordered sequence of typed parts; `to_string` concatenates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedNumber {
    parts: Vec<Part>,
}

impl FormattedNumber {
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<Part> {
        self.parts
    }
}

impl fmt::Display for FormattedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            f.write_str(&part.value)?;
        }
        Ok(())
    }
}

/// Whether a sign glyph is emitted, per policy. Zero is judged on the
/// resolved digits, so a value that rounds to zero is signless under
/// `exceptZero`; negative zero counts as negative for `auto` but not for
/// `negative`.
fn sign_glyph(policy: SignDisplay, negative: bool, zero: bool) -> Option<&'static str> {
    let emit = match policy {
        SignDisplay::Auto => negative,
        SignDisplay::Always => true,
        SignDisplay::Never => false,
        SignDisplay::ExceptZero => !zero,
        SignDisplay::Negative => negative && !zero,
    };
    if !emit {
        return None;
    }
    Some(if negative { "-" } else { "+" })
}

/// Splits a formatter-rendered number into integer, group, decimal and
/// fraction parts. The renderer's own decimal separator is matched as a
/// substring; any other non-digit run inside the integer portion is a
/// grouping separator.
fn decompose(rendered: &str, decimal_sep: &str) -> Vec<Part> {
    let mut parts = Vec::new();
    let mut rest = rendered;
    let mut in_fraction = false;
    while !rest.is_empty() {
        if !in_fraction && rest.starts_with(decimal_sep) {
            parts.push(Part::new(PartKind::Literal, decimal_sep));
            rest = &rest[decimal_sep.len()..];
            in_fraction = true;
            continue;
        }
        let digit_len: usize = rest
            .chars()
            .take_while(|c| c.is_numeric())
            .map(char::len_utf8)
            .sum();
        if digit_len > 0 {
            let kind = if in_fraction {
                PartKind::Fraction
            } else {
                PartKind::Integer
            };
            parts.push(Part::new(kind, &rest[..digit_len]));
            rest = &rest[digit_len..];
            continue;
        }
        let mut run_len = 0;
        let mut probe = rest;
        while let Some(c) = probe.chars().next() {
            if c.is_numeric() || (!in_fraction && probe.starts_with(decimal_sep)) {
                break;
            }
            run_len += c.len_utf8();
            probe = &probe[c.len_utf8()..];
        }
        let kind = if in_fraction {
            PartKind::Literal
        } else {
            PartKind::Group
        };
        parts.push(Part::new(kind, &rest[..run_len]));
        rest = &rest[run_len..];
    }
    parts
}

/// Splits an affix into its leading-whitespace literal and the payload
/// part, so `" m/s"` becomes a literal space followed by a unit part.
fn push_suffix_affix(parts: &mut Vec<Part>, kind: PartKind, affix: &str) {
    let payload = affix.trim_start_matches([' ', '\u{00A0}']);
    let spacing = &affix[..affix.len() - payload.len()];
    if !spacing.is_empty() {
        parts.push(Part::new(PartKind::Literal, spacing));
    }
    if !payload.is_empty() {
        parts.push(Part::new(kind, payload));
    }
}

fn push_prefix_affix(parts: &mut Vec<Part>, kind: PartKind, affix: &str) {
    let payload = affix.trim_end_matches([' ', '\u{00A0}']);
    let spacing = &affix[payload.len()..];
    if !payload.is_empty() {
        parts.push(Part::new(kind, payload));
    }
    if !spacing.is_empty() {
        parts.push(Part::new(PartKind::Literal, spacing));
    }
}

fn transliterate_digit_parts(parts: &mut [Part], pattern: &LocalePattern) {
    for part in parts {
        if matches!(
            part.kind,
            PartKind::Integer | PartKind::Fraction | PartKind::Exponent
        ) {
            part.value = pattern.transliterate(&part.value);
        }
    }
}

/// Formats one value through the whole pipeline. Never fails; option
/// errors were consumed when the formatter was built.
pub(crate) fn format_value(
    value: f64,
    opts: &FormatOptions,
    pattern: &LocalePattern,
) -> FormattedNumber {
    if value.is_nan() {
        return special_token(pattern.nan, None, false, opts, pattern);
    }
    if value.is_infinite() {
        let negative = value < 0.0;
        let sign = sign_glyph(opts.sign_display, negative, false);
        return special_token(pattern.infinity, sign, negative, opts, pattern);
    }

    let mut dec = digits::from_f64(value);
    if opts.style == Style::Percent {
        dec.multiply_pow10(2);
    }
    let mode = digits::signed_rounding_mode(opts.rounding_mode);
    let rm = notation::scale_and_round(
        &mut dec,
        opts.notation,
        opts.compact_display,
        opts.digit_policy,
        mode,
        pattern,
    );
    if matches!(opts.notation, Notation::Standard | Notation::Compact) {
        digits::pad_integer(&mut dec, opts.minimum_integer_digits);
        if opts.trailing_zero_display == TrailingZeroDisplay::StripIfInteger {
            dec.absolute.trim_end_if_integer();
        }
    }

    let plural = pattern.plural_category(&dec);
    let negative = dec.sign == Sign::Negative;
    let zero = dec.absolute.is_zero();
    let sign = sign_glyph(opts.sign_display, negative, zero);
    dec.sign = Sign::None;

    let formatter = if opts.notation == Notation::Standard
        || (opts.notation == Notation::Compact && rm.exponent == 0)
    {
        &pattern.grouped
    } else {
        &pattern.plain
    };
    let rendered = formatter.format(&dec).to_string();
    let digit_parts = decompose(&rendered, &pattern.decimal_sep);

    let mut body = digit_parts;
    if matches!(opts.notation, Notation::Scientific | Notation::Engineering) {
        body.push(Part::new(PartKind::Exponent, format!("E{}", rm.exponent)));
    }
    if let Some(entry) = rm.compact {
        let suffix = entry.form(opts.compact_display, plural);
        push_suffix_affix(&mut body, PartKind::Compact, suffix);
    }

    let mut parts = wrap_style(body, sign, negative, opts, pattern, plural);
    transliterate_digit_parts(&mut parts, pattern);
    FormattedNumber { parts }
}

fn wrap_style(
    body: Vec<Part>,
    sign: Option<&'static str>,
    negative: bool,
    opts: &FormatOptions,
    pattern: &LocalePattern,
    plural: PluralCategory,
) -> Vec<Part> {
    let mut parts = Vec::with_capacity(body.len() + 4);
    match opts.style {
        Style::Decimal => {
            if let Some(glyph) = sign {
                parts.push(Part::new(PartKind::Sign, glyph));
            }
            parts.extend(body);
        }
        Style::Percent => {
            if let Some(glyph) = sign {
                parts.push(Part::new(PartKind::Sign, glyph));
            }
            parts.extend(body);
            if pattern.percent_space {
                parts.push(Part::new(PartKind::Literal, "\u{00A0}"));
            }
            parts.push(Part::new(PartKind::Unit, "%"));
        }
        Style::Currency => {
            let code = opts
                .currency
                .map(|c| c.to_string())
                .unwrap_or_else(|| "USD".to_string());
            if opts.currency_display == CurrencyDisplay::Name {
                if let Some(glyph) = sign {
                    parts.push(Part::new(PartKind::Sign, glyph));
                }
                parts.extend(body);
                parts.push(Part::new(PartKind::Literal, " "));
                parts.push(Part::new(
                    PartKind::Currency,
                    pattern.currency_name(&code, plural),
                ));
                return parts;
            }

            let symbol = match opts.currency_display {
                CurrencyDisplay::Code => code.clone(),
                _ => pattern.currency_symbol(&code, opts.currency_display),
            };
            // Parentheses replace the sign glyph, so a policy that
            // suppresses the sign suppresses them too.
            let accounting = opts.currency_sign == CurrencySign::Accounting
                && negative
                && pattern.accounting_parens
                && sign.is_some();
            if accounting {
                parts.push(Part::new(PartKind::Literal, "("));
            } else if let Some(glyph) = sign {
                parts.push(Part::new(PartKind::Sign, glyph));
            }
            if pattern.currency_after {
                parts.extend(body);
                push_suffix_affix(
                    &mut parts,
                    PartKind::Currency,
                    &format!("{}{}", pattern.currency_sep(), symbol),
                );
            } else {
                parts.push(Part::new(PartKind::Currency, symbol));
                if opts.currency_display == CurrencyDisplay::Code {
                    parts.push(Part::new(PartKind::Literal, "\u{00A0}"));
                }
                parts.extend(body);
            }
            if accounting {
                parts.push(Part::new(PartKind::Literal, ")"));
            }
        }
        Style::Unit => {
            // Unit style always has a resolved unit; validation enforced it.
            let unit = opts.unit.unwrap_or(crate::options::Unit::Single("degree"));
            let (prefix, suffix) = pattern.unit_affix(unit, opts.unit_display, plural);
            if !prefix.is_empty() {
                push_prefix_affix(&mut parts, PartKind::Unit, &prefix);
            }
            if let Some(glyph) = sign {
                parts.push(Part::new(PartKind::Sign, glyph));
            }
            parts.extend(body);
            push_suffix_affix(&mut parts, PartKind::Unit, &suffix);
        }
    }
    parts
}

/// NaN and infinity skip the digit pipeline entirely: a literal token with
/// the sign policy and style affixes applied around it.
fn special_token(
    token: &str,
    sign: Option<&'static str>,
    negative: bool,
    opts: &FormatOptions,
    pattern: &LocalePattern,
) -> FormattedNumber {
    let body = vec![Part::new(PartKind::Literal, token)];
    let sign = match (sign, opts.sign_display) {
        (s, _) if s.is_some() => s,
        // NaN carries no sign of its own; only `always` forces one.
        (None, SignDisplay::Always) => Some("+"),
        _ => None,
    };
    let parts = wrap_style(body, sign, negative, opts, pattern, PluralCategory::Other);
    FormattedNumber { parts }
}
