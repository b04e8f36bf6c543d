//! Property tests for the notation math: mantissa ranges, breakpoint
//! monotonicity and sign-policy invariants across generated inputs.

use proptest::prelude::*;

use intlnum::{NumberFormatter, RawOptions};

fn formatter(options: RawOptions) -> NumberFormatter {
    NumberFormatter::new("en-US", options).unwrap()
}

fn scientific() -> NumberFormatter {
    formatter(RawOptions {
        notation: Some("scientific".into()),
        ..Default::default()
    })
}

fn engineering() -> NumberFormatter {
    formatter(RawOptions {
        notation: Some("engineering".into()),
        ..Default::default()
    })
}

fn compact() -> NumberFormatter {
    formatter(RawOptions {
        notation: Some("compact".into()),
        ..Default::default()
    })
}

/// Mantissa of an `<digits>E<exp>` rendering, as a float.
fn mantissa_of(rendered: &str) -> f64 {
    let (mantissa, _) = rendered
        .split_once('E')
        .unwrap_or_else(|| panic!("no exponent in {rendered:?}"));
    mantissa.trim_start_matches(['+', '-']).parse().unwrap()
}

/// Rank of a compact rendering's magnitude suffix on the en ladder.
fn compact_rank(rendered: &str) -> usize {
    match rendered.chars().rev().find(|c| c.is_ascii_alphabetic()) {
        None => 0,
        Some('K') => 1,
        Some('M') => 2,
        Some('B') => 3,
        Some('T') => 4,
        Some(other) => panic!("unexpected suffix {other:?} in {rendered:?}"),
    }
}

proptest! {
    #[test]
    fn scientific_mantissa_stays_in_decade(value in 1e-60f64..1e60) {
        let m = mantissa_of(&scientific().format(value));
        prop_assert!((1.0..10.0).contains(&m), "mantissa {m}");
    }

    #[test]
    fn scientific_mantissa_negative_values(value in -1e60f64..-1e-60) {
        let m = mantissa_of(&scientific().format(value));
        prop_assert!((1.0..10.0).contains(&m), "mantissa {m}");
    }

    #[test]
    fn engineering_mantissa_stays_below_a_thousand(value in 1e-60f64..1e60) {
        let out = engineering().format(value);
        let m = mantissa_of(&out);
        prop_assert!((1.0..1000.0).contains(&m), "mantissa {m} in {out}");
        let exp: i32 = out.split_once('E').unwrap().1.parse().unwrap();
        prop_assert_eq!(exp.rem_euclid(3), 0);
    }

    #[test]
    fn compact_breakpoints_are_monotonic(a in 0f64..1e13, b in 0f64..1e13) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let fmt = compact();
        prop_assert!(
            compact_rank(&fmt.format(lo)) <= compact_rank(&fmt.format(hi)),
            "{lo} -> {:?}, {hi} -> {:?}",
            fmt.format(lo),
            fmt.format(hi)
        );
    }

    #[test]
    fn compact_mantissa_never_reaches_a_thousand(value in 0f64..1e13) {
        let out = compact().format(value);
        let digits: String = out
            .chars()
            .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
            .filter(|c| *c != ',')
            .collect();
        let mantissa: f64 = digits.parse().unwrap();
        prop_assert!(mantissa < 1000.0, "mantissa {mantissa} in {out:?}");
    }

    #[test]
    fn except_zero_never_signs_zero_digits(value in -0.49f64..0.49) {
        let fmt = formatter(RawOptions {
            sign_display: Some("exceptZero".into()),
            maximum_fraction_digits: Some(0),
            ..Default::default()
        });
        let out = fmt.format(value);
        prop_assert_eq!(out, "0");
    }

    #[test]
    fn standard_default_round_trips(value in -1e9f64..1e9) {
        let fmt = formatter(RawOptions {
            use_grouping: Some("never".into()),
            ..Default::default()
        });
        let parsed: f64 = fmt.format(value).parse().unwrap();
        // Default precision rounds at the third fraction digit.
        prop_assert!((parsed - value).abs() <= 0.0005);
    }
}
