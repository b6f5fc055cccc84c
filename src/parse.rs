// ============================================================================
// Text Parsing
// `digits[.digits]` with optional leading minus, optional target scale
// ============================================================================

use crate::errors::{DecimalError, DecimalResult};
use crate::rounding::Rounding;
use crate::value::Decimal;
use num_bigint::{BigInt, BigUint};
use num_traits::{Pow, Zero};
use std::str::FromStr;

/// Parse a digit segment as a natural number. Rejects anything the
/// natural-number parser would accept beyond plain ASCII digits (signs,
/// underscores).
fn parse_digits(segment: &str) -> DecimalResult<BigUint> {
    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DecimalError::InvalidFormat);
    }
    BigUint::from_str(segment).map_err(|_| DecimalError::InvalidFormat)
}

fn ten_pow_u(exp: u32) -> BigUint {
    BigUint::from(10u8).pow(exp)
}

impl Decimal {
    /// Parse decimal text.
    ///
    /// The body after an optional leading `-` must be `digits[.digits]`;
    /// an empty integer segment reads as `0` (so `".5"` parses). Empty
    /// input, a lone `-`, a second decimal point, a trailing point, or
    /// any non-digit character is [`DecimalError::InvalidFormat`].
    ///
    /// With no target `scale` the scale is inferred from the fractional
    /// digit count and `mode` is ignored. With a target, fewer fractional
    /// digits are zero-padded (exact); more are dropped with a rounding
    /// bump computed from the dropped digits under `mode` (default
    /// [`Rounding::TowardZero`]), applied with the sign of the parsed
    /// value. This entry point always rounds and never reports
    /// [`DecimalError::TooManyFractionDigits`]; see
    /// [`Decimal::parse_exact`] for the erroring variant.
    ///
    /// # Example
    /// ```
    /// use fixed_decimal::{Decimal, Rounding};
    ///
    /// let x = Decimal::parse("12.345", None, None).unwrap();
    /// assert_eq!((x.base_units(), x.scale()), (&12345.into(), 3));
    ///
    /// let y = Decimal::parse("12.345", Some(2), Some(Rounding::HalfAwayFromZero)).unwrap();
    /// assert_eq!((y.base_units(), y.scale()), (&1235.into(), 2));
    /// ```
    pub fn parse(text: &str, scale: Option<u32>, mode: Option<Rounding>) -> DecimalResult<Decimal> {
        let (negative, body) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        // Covers empty input and a lone sign marker
        if body.is_empty() {
            return Err(DecimalError::InvalidFormat);
        }

        let (int_text, frac_text) = match body.split_once('.') {
            Some((_, fraction)) if fraction.is_empty() || fraction.contains('.') => {
                return Err(DecimalError::InvalidFormat);
            },
            Some((integer, fraction)) => (integer, fraction),
            None => (body, ""),
        };

        let int_value = parse_digits(if int_text.is_empty() { "0" } else { int_text })?;
        let frac_len = frac_text.len() as u32;
        let target = scale.unwrap_or(frac_len);

        let magnitude = if frac_len <= target {
            // Information-preserving widening: zero-pad the fraction
            let frac_value = if frac_text.is_empty() {
                BigUint::zero()
            } else {
                parse_digits(frac_text)?
            };
            int_value * ten_pow_u(target) + frac_value * ten_pow_u(target - frac_len)
        } else {
            let (kept, dropped) = frac_text.split_at(target as usize);
            let kept_value = if kept.is_empty() {
                BigUint::zero()
            } else {
                parse_digits(kept)?
            };
            parse_digits(dropped)?;
            let mut magnitude = int_value * ten_pow_u(target) + kept_value;
            let bump = match mode.unwrap_or_default() {
                Rounding::TowardZero => false,
                Rounding::AwayFromZero => dropped.bytes().any(|b| b != b'0'),
                Rounding::HalfAwayFromZero => {
                    matches!(dropped.as_bytes().first(), Some(&(b'5'..=b'9')))
                },
            };
            if bump {
                magnitude += 1u8;
            }
            magnitude
        };

        let magnitude = if negative {
            -BigInt::from(magnitude)
        } else {
            BigInt::from(magnitude)
        };
        Ok(Decimal {
            magnitude,
            scale: target,
        })
    }

    /// Parse decimal text requiring an exact scale match.
    ///
    /// Like [`Decimal::parse`] but fails with
    /// [`DecimalError::TooManyFractionDigits`] instead of rounding when
    /// the input carries more fractional digits than `scale`; fewer
    /// digits are still zero-padded exactly.
    pub fn parse_exact(text: &str, scale: u32) -> DecimalResult<Decimal> {
        let parsed = Self::parse(text, None, None)?;
        if parsed.scale > scale {
            return Err(DecimalError::TooManyFractionDigits);
        }
        Ok(parsed.quantize(scale, Rounding::TowardZero))
    }
}

impl FromStr for Decimal {
    type Err = DecimalError;

    /// Parse with inferred scale: `"12.345"` → magnitude 12345, scale 3.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::parse(s, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_inferred_scale() {
        let x = Decimal::parse("12.345", None, None).unwrap();
        assert_eq!(x.base_units(), &12345.into());
        assert_eq!(x.scale(), 3);

        let y = Decimal::parse("42", None, None).unwrap();
        assert_eq!(y.base_units(), &42.into());
        assert_eq!(y.scale(), 0);
    }

    #[test]
    fn test_parse_negative() {
        let x = Decimal::parse("-0.001", None, None).unwrap();
        assert_eq!(x.base_units(), &(-1).into());
        assert_eq!(x.scale(), 3);
    }

    #[test]
    fn test_parse_empty_integer_segment() {
        let x = Decimal::parse(".5", None, None).unwrap();
        assert_eq!(x.base_units(), &5.into());
        assert_eq!(x.scale(), 1);

        let y = Decimal::parse("-.25", None, None).unwrap();
        assert_eq!(y.base_units(), &(-25).into());
    }

    #[test]
    fn test_parse_widening_pads_fraction() {
        let x = Decimal::parse("12.3", Some(4), None).unwrap();
        assert_eq!(x.base_units(), &123000.into());
        assert_eq!(x.scale(), 4);
    }

    #[test]
    fn test_parse_narrowing_rounds() {
        // default mode truncates
        let x = Decimal::parse("12.345", Some(2), None).unwrap();
        assert_eq!(x.base_units(), &1234.into());

        let y = Decimal::parse("12.345", Some(2), Some(Rounding::HalfAwayFromZero)).unwrap();
        assert_eq!(y.base_units(), &1235.into());

        let z = Decimal::parse("12.341", Some(2), Some(Rounding::AwayFromZero)).unwrap();
        assert_eq!(z.base_units(), &1235.into());

        // all dropped digits zero: no bump in any mode
        let w = Decimal::parse("12.300", Some(2), Some(Rounding::AwayFromZero)).unwrap();
        assert_eq!(w.base_units(), &1230.into());
    }

    #[test]
    fn test_parse_narrowing_negative_bumps_with_sign() {
        let x = Decimal::parse("-0.05", Some(1), Some(Rounding::HalfAwayFromZero)).unwrap();
        assert_eq!(x.base_units(), &(-1).into());
        assert_eq!(x.scale(), 1);
    }

    #[test]
    fn test_parse_narrowing_to_scale_zero() {
        let x = Decimal::parse("9.99", Some(0), Some(Rounding::HalfAwayFromZero)).unwrap();
        assert_eq!(x.base_units(), &10.into());
        assert_eq!(x.scale(), 0);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for text in ["", "-", "1.2.3", "1.", "abc", "1a.2", "1.2b", "+5", "1_000", "--1"] {
            assert_eq!(
                Decimal::parse(text, None, None),
                Err(DecimalError::InvalidFormat),
                "expected InvalidFormat for {text:?}"
            );
        }
    }

    #[test]
    fn test_lone_minus_is_not_zero() {
        assert_eq!(
            Decimal::parse("-", None, None),
            Err(DecimalError::InvalidFormat)
        );
        assert_eq!(
            Decimal::parse("-", Some(2), None),
            Err(DecimalError::InvalidFormat)
        );
    }

    #[test]
    fn test_parse_exact() {
        let x = Decimal::parse_exact("12.34", 4).unwrap();
        assert_eq!(x.base_units(), &123400.into());
        assert_eq!(x.scale(), 4);

        assert_eq!(
            Decimal::parse_exact("12.345", 2),
            Err(DecimalError::TooManyFractionDigits)
        );
    }

    #[test]
    fn test_from_str() {
        let x: Decimal = "100.25".parse().unwrap();
        assert_eq!(x.base_units(), &10025.into());

        let err = "nope".parse::<Decimal>();
        assert_eq!(err, Err(DecimalError::InvalidFormat));
    }
}
