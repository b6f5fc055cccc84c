// ============================================================================
// Normalization & Formatting
// Cosmetic layer: trailing-zero stripping, text rendering, JSON templates
// ============================================================================

use crate::value::{ten_pow, Decimal};
use num_bigint::Sign;
use num_integer::Integer;
use num_traits::Zero;
use std::fmt;

/// Insert `sep` into `digits` in groups of three from the right.
fn group_thousands(digits: &str, sep: char) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(*b as char);
    }
    out
}

impl Decimal {
    /// Strip trailing fractional zeros, minimizing the scale without
    /// changing the numeric value. Chunked: divide by 1000, then 100,
    /// then 10 while the magnitude divides evenly and the scale permits.
    ///
    /// Zero is returned unchanged, keeping its original scale.
    /// Idempotent.
    pub fn normalize(&self) -> Decimal {
        if self.magnitude.is_zero() {
            return self.clone();
        }
        let mut magnitude = self.magnitude.clone();
        let mut scale = self.scale;
        for chunk in [3u32, 2, 1] {
            let divisor = ten_pow(chunk);
            while scale >= chunk {
                let (quotient, remainder) = magnitude.div_rem(&divisor);
                if !remainder.is_zero() {
                    break;
                }
                magnitude = quotient;
                scale -= chunk;
            }
        }
        Decimal { magnitude, scale }
    }

    /// Render with a thousands separator in the integer part.
    ///
    /// Conventional separators; see [`Decimal::format_with`] to pick
    /// different ones.
    #[inline]
    pub fn format(&self) -> String {
        self.format_with(',', '.')
    }

    /// Render with configurable thousands and decimal separators.
    ///
    /// ```
    /// use fixed_decimal::Decimal;
    ///
    /// let x = Decimal::from_unscaled(-123456789, 2);
    /// assert_eq!(x.format_with('.', ','), "-1.234.567,89");
    /// ```
    pub fn format_with(&self, thousands_sep: char, decimal_sep: char) -> String {
        let plain = self.to_string();
        let (sign, body) = match plain.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", plain.as_str()),
        };
        match body.split_once('.') {
            Some((int_part, frac_part)) => format!(
                "{sign}{}{decimal_sep}{frac_part}",
                group_thousands(int_part, thousands_sep)
            ),
            None => format!("{sign}{}", group_thousands(body, thousands_sep)),
        }
    }

    /// JSON document exposing the raw pair:
    /// `{"magnitude":"-12345","scale":3}`.
    pub fn to_json(&self) -> String {
        format!(
            r#"{{"magnitude":"{}","scale":{}}}"#,
            self.magnitude, self.scale
        )
    }

    /// JSON document using big-decimal field naming for interoperability:
    /// `{"unscaledValue":"-12345","scale":3}`.
    pub fn to_json_big_decimal(&self) -> String {
        format!(
            r#"{{"unscaledValue":"{}","scale":{}}}"#,
            self.magnitude, self.scale
        )
    }
}

impl fmt::Display for Decimal {
    /// Sign, integer digits, and exactly `scale` fraction digits:
    /// `{magnitude: -5, scale: 3}` renders as `-0.005`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.magnitude.sign() == Sign::Minus {
            "-"
        } else {
            ""
        };
        let digits = self.magnitude.magnitude().to_string();
        if self.scale == 0 {
            return write!(f, "{sign}{digits}");
        }
        let scale = self.scale as usize;
        // Pad so at least one integer digit survives left of the point
        let padded = if digits.len() <= scale {
            format!("{digits:0>width$}", width = scale + 1)
        } else {
            digits
        };
        let (int_part, frac_part) = padded.split_at(padded.len() - scale);
        write!(f, "{sign}{int_part}.{frac_part}")
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Decimal({}, magnitude={}, scale={})",
            self, self.magnitude, self.scale
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(magnitude: i64, scale: u32) -> Decimal {
        Decimal::from_unscaled(magnitude, scale)
    }

    #[test]
    fn test_display() {
        assert_eq!(dec(12345, 3).to_string(), "12.345");
        assert_eq!(dec(12345, 0).to_string(), "12345");
        assert_eq!(dec(-5, 3).to_string(), "-0.005");
        assert_eq!(dec(5, 1).to_string(), "0.5");
        assert_eq!(dec(0, 2).to_string(), "0.00");
        assert_eq!(dec(-10000, 4).to_string(), "-1.0000");
    }

    #[test]
    fn test_normalize_strips_trailing_zeros() {
        let x = dec(1230, 3).normalize(); // 1.230 → 1.23
        assert!(x.eq_exact(&dec(123, 2)));

        let y = dec(1_000_000, 6).normalize(); // 1.000000 → 1
        assert!(y.eq_exact(&dec(1, 0)));

        // No trailing zeros: untouched
        let z = dec(123, 2).normalize();
        assert!(z.eq_exact(&dec(123, 2)));
    }

    #[test]
    fn test_normalize_stops_at_scale_zero() {
        // Integer trailing zeros are not fractional zeros
        let x = dec(1200, 0).normalize();
        assert!(x.eq_exact(&dec(1200, 0)));

        let y = dec(12000, 2).normalize(); // 120.00 → 120
        assert!(y.eq_exact(&dec(120, 0)));
    }

    #[test]
    fn test_normalize_zero_keeps_scale() {
        let z = dec(0, 5).normalize();
        assert!(z.eq_exact(&dec(0, 5)));
    }

    #[test]
    fn test_normalize_idempotent() {
        for x in [dec(1230, 3), dec(0, 4), dec(-999000, 5), dec(7, 0)] {
            let once = x.normalize();
            assert!(once.normalize().eq_exact(&once));
        }
    }

    #[test]
    fn test_format_groups_thousands() {
        assert_eq!(dec(123456789, 2).format(), "1,234,567.89");
        assert_eq!(dec(-123456789, 2).format(), "-1,234,567.89");
        assert_eq!(dec(1234, 0).format(), "1,234");
        assert_eq!(dec(123, 0).format(), "123");
        assert_eq!(dec(-5, 3).format(), "-0.005");
    }

    #[test]
    fn test_format_with_custom_separators() {
        assert_eq!(dec(123456789, 2).format_with('.', ','), "1.234.567,89");
        assert_eq!(dec(123456789, 2).format_with(' ', '.'), "1 234 567.89");
    }

    #[test]
    fn test_debug_template() {
        assert_eq!(
            format!("{:?}", dec(-12345, 3)),
            "Decimal(-12.345, magnitude=-12345, scale=3)"
        );
    }

    #[test]
    fn test_json_templates() {
        let x = dec(-12345, 3);
        assert_eq!(x.to_json(), r#"{"magnitude":"-12345","scale":3}"#);
        assert_eq!(
            x.to_json_big_decimal(),
            r#"{"unscaledValue":"-12345","scale":3}"#
        );
    }
}
