// ============================================================================
// Scale/Rounding Kernel
// The single rounding authority: every narrowing in the crate routes here
// ============================================================================

use crate::rounding::{should_bump, Rounding};
use crate::value::{ten_pow, Decimal};
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::Zero;
use std::cmp::Ordering;

/// Truncating division of `numerator` by `divisor` with a rounding bump
/// applied away from zero per `mode`. The bump direction follows the sign
/// of the exact quotient, not the (possibly zero) truncated one.
pub(crate) fn rounded_quotient(numerator: &BigInt, divisor: &BigInt, mode: Rounding) -> BigInt {
    let (quotient, remainder) = numerator.div_rem(divisor);
    if should_bump(remainder.magnitude(), divisor.magnitude(), mode) {
        let negative = (numerator.sign() == Sign::Minus) != (divisor.sign() == Sign::Minus);
        if negative {
            quotient - 1
        } else {
            quotient + 1
        }
    } else {
        quotient
    }
}

impl Decimal {
    /// Rescale to exactly `scale` fractional digits.
    ///
    /// Widening multiplies the magnitude by a power of ten and is always
    /// exact; the mode only matters when narrowing, where the discarded
    /// digits feed the rounding decision.
    ///
    /// # Example
    /// ```
    /// use fixed_decimal::{Decimal, Rounding};
    ///
    /// let x = Decimal::from_unscaled(-12345, 3); // -12.345
    /// let q = x.quantize(2, Rounding::HalfAwayFromZero);
    /// assert_eq!(q.base_units(), &(-1235).into());
    /// ```
    pub fn quantize(&self, scale: u32, mode: Rounding) -> Decimal {
        match scale.cmp(&self.scale) {
            Ordering::Equal => self.clone(),
            Ordering::Greater => Decimal {
                magnitude: &self.magnitude * ten_pow(scale - self.scale),
                scale,
            },
            Ordering::Less => Decimal {
                magnitude: rounded_quotient(&self.magnitude, &ten_pow(self.scale - scale), mode),
                scale,
            },
        }
    }

    /// Narrow to `scale` discarding excess digits (round toward zero).
    #[inline]
    pub fn trunc_to(&self, scale: u32) -> Decimal {
        self.quantize(scale, Rounding::TowardZero)
    }

    /// Rescale to `scale` rounding toward negative infinity.
    ///
    /// Degrades to exact widening when `scale` is not narrower.
    pub fn floor_to(&self, scale: u32) -> Decimal {
        if scale >= self.scale {
            return self.quantize(scale, Rounding::TowardZero);
        }
        let (quotient, remainder) = self.magnitude.div_rem(&ten_pow(self.scale - scale));
        let magnitude = if !remainder.is_zero() && self.is_negative() {
            quotient - 1
        } else {
            quotient
        };
        Decimal { magnitude, scale }
    }

    /// Rescale to `scale` rounding toward positive infinity.
    ///
    /// Degrades to exact widening when `scale` is not narrower.
    pub fn ceil_to(&self, scale: u32) -> Decimal {
        if scale >= self.scale {
            return self.quantize(scale, Rounding::TowardZero);
        }
        let (quotient, remainder) = self.magnitude.div_rem(&ten_pow(self.scale - scale));
        let magnitude = if !remainder.is_zero() && !self.is_negative() {
            quotient + 1
        } else {
            quotient
        };
        Decimal { magnitude, scale }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(magnitude: i64, scale: u32) -> Decimal {
        Decimal::from_unscaled(magnitude, scale)
    }

    #[test]
    fn test_quantize_identity() {
        let x = dec(12345, 3);
        let q = x.quantize(3, Rounding::AwayFromZero);
        assert!(q.eq_exact(&x));
    }

    #[test]
    fn test_quantize_widening_is_exact() {
        let x = dec(123, 1); // 12.3
        for mode in [
            Rounding::TowardZero,
            Rounding::AwayFromZero,
            Rounding::HalfAwayFromZero,
        ] {
            let q = x.quantize(4, mode);
            assert_eq!(q.base_units(), &123000.into());
            assert_eq!(q.scale(), 4);
        }
    }

    #[test]
    fn test_quantize_narrowing_toward_zero() {
        assert_eq!(
            dec(12999, 3).quantize(1, Rounding::TowardZero).base_units(),
            &129.into()
        );
        assert_eq!(
            dec(-12999, 3).quantize(1, Rounding::TowardZero).base_units(),
            &(-129).into()
        );
    }

    #[test]
    fn test_quantize_narrowing_away_from_zero() {
        assert_eq!(
            dec(12001, 3).quantize(1, Rounding::AwayFromZero).base_units(),
            &121.into()
        );
        assert_eq!(
            dec(-12001, 3)
                .quantize(1, Rounding::AwayFromZero)
                .base_units(),
            &(-121).into()
        );
        // Exact narrowing never bumps
        assert_eq!(
            dec(12000, 3).quantize(1, Rounding::AwayFromZero).base_units(),
            &120.into()
        );
    }

    #[test]
    fn test_quantize_half_away_negative_tie() {
        // -12.345 → -12.35: tie digit rounds away from zero
        let q = dec(-12345, 3).quantize(2, Rounding::HalfAwayFromZero);
        assert_eq!(q.base_units(), &(-1235).into());
        assert_eq!(q.scale(), 2);
    }

    #[test]
    fn test_quantize_half_below_does_not_bump() {
        let q = dec(12344, 3).quantize(2, Rounding::HalfAwayFromZero);
        assert_eq!(q.base_units(), &1234.into());
    }

    #[test]
    fn test_quantize_negative_crossing_zero() {
        // -0.4 → 0 toward zero, but -1 away from zero
        assert_eq!(
            dec(-4, 1).quantize(0, Rounding::TowardZero).base_units(),
            &0.into()
        );
        assert_eq!(
            dec(-4, 1).quantize(0, Rounding::AwayFromZero).base_units(),
            &(-1).into()
        );
        // -0.5 rounds half away to -1
        assert_eq!(
            dec(-5, 1)
                .quantize(0, Rounding::HalfAwayFromZero)
                .base_units(),
            &(-1).into()
        );
    }

    #[test]
    fn test_trunc_to() {
        assert_eq!(dec(-12999, 3).trunc_to(0).base_units(), &(-12).into());
    }

    #[test]
    fn test_floor_to() {
        assert_eq!(dec(129, 1).floor_to(0).base_units(), &12.into());
        assert_eq!(dec(-121, 1).floor_to(0).base_units(), &(-13).into());
        // Exact values do not move
        assert_eq!(dec(-120, 1).floor_to(0).base_units(), &(-12).into());
        // Widening stays exact
        assert_eq!(dec(-12, 0).floor_to(2).base_units(), &(-1200).into());
    }

    #[test]
    fn test_ceil_to() {
        assert_eq!(dec(121, 1).ceil_to(0).base_units(), &13.into());
        assert_eq!(dec(-129, 1).ceil_to(0).base_units(), &(-12).into());
        assert_eq!(dec(120, 1).ceil_to(0).base_units(), &12.into());
        assert_eq!(dec(12, 0).ceil_to(2).base_units(), &1200.into());
    }
}
