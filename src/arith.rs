// ============================================================================
// Arithmetic Operators
// add / sub / mul / div / pow, each routed through the rounding kernel
// ============================================================================

use crate::errors::{DecimalError, DecimalResult};
use crate::quantize::rounded_quotient;
use crate::rounding::Rounding;
use crate::value::{ten_pow, Decimal};
use num_bigint::BigInt;
use num_traits::{One, Zero};
use std::ops::{Add, Mul, Neg, Sub};

impl Decimal {
    /// Add, producing a result at `scale` (default: the wider operand
    /// scale). Both operands are quantized to the target with
    /// [`Rounding::HalfAwayFromZero`] first, which only matters when the
    /// requested scale is narrower than an operand's own.
    pub fn add(&self, rhs: &Decimal, scale: Option<u32>) -> Decimal {
        let target = scale.unwrap_or_else(|| self.scale.max(rhs.scale));
        let a = self.quantize(target, Rounding::HalfAwayFromZero);
        let b = rhs.quantize(target, Rounding::HalfAwayFromZero);
        Decimal {
            magnitude: a.magnitude + b.magnitude,
            scale: target,
        }
    }

    /// Subtract, with the same target-scale rule as [`Decimal::add`].
    pub fn sub(&self, rhs: &Decimal, scale: Option<u32>) -> Decimal {
        let target = scale.unwrap_or_else(|| self.scale.max(rhs.scale));
        let a = self.quantize(target, Rounding::HalfAwayFromZero);
        let b = rhs.quantize(target, Rounding::HalfAwayFromZero);
        Decimal {
            magnitude: a.magnitude - b.magnitude,
            scale: target,
        }
    }

    /// Multiply. The natural product (magnitudes multiplied, scales
    /// added) is exact; it is quantized to `scale` under `mode` only when
    /// a target is given, otherwise returned at the wider natural scale.
    pub fn mul(&self, rhs: &Decimal, scale: Option<u32>, mode: Rounding) -> Decimal {
        let product = Decimal {
            magnitude: &self.magnitude * &rhs.magnitude,
            scale: self.scale + rhs.scale,
        };
        match scale {
            Some(target) => product.quantize(target, mode),
            None => product,
        }
    }

    /// Divide, producing a result at `scale`.
    ///
    /// When no target is given the result scale is
    /// `max(self.scale, rhs.scale) + DIV_EXTRA_SCALE` so a plain division
    /// does not silently truncate useful precision. The numerator and
    /// denominator are aligned by the power of ten that makes the integer
    /// division land exactly on the target scale; the remainder drives
    /// the same rounding bump as [`Decimal::quantize`].
    ///
    /// # Errors
    /// Returns [`DecimalError::DivideByZero`] when the divisor magnitude
    /// is zero.
    pub fn div(&self, rhs: &Decimal, scale: Option<u32>, mode: Rounding) -> DecimalResult<Decimal> {
        if rhs.magnitude.is_zero() {
            return Err(DecimalError::DivideByZero);
        }
        let target = scale.unwrap_or_else(|| {
            let default = self.scale.max(rhs.scale) + Self::DIV_EXTRA_SCALE;
            tracing::debug!(scale = default, "divide defaulting to widened scale");
            default
        });

        // Shift so that numerator/denominator sit at exactly the right ratio
        let shift = i64::from(target) + i64::from(rhs.scale) - i64::from(self.scale);
        let (numerator, denominator) = if shift >= 0 {
            (&self.magnitude * ten_pow(shift as u32), rhs.magnitude.clone())
        } else {
            (
                self.magnitude.clone(),
                &rhs.magnitude * ten_pow(shift.unsigned_abs() as u32),
            )
        };
        if denominator.is_zero() {
            return Err(DecimalError::DivideByZero);
        }

        Ok(Decimal {
            magnitude: rounded_quotient(&numerator, &denominator, mode),
            scale: target,
        })
    }

    /// Raise to an integer power.
    ///
    /// Uses exponentiation by squaring on the magnitude, accumulating the
    /// scale additively; nothing is rounded until the final quantize, so
    /// a positive power with no target scale returns the exact natural
    /// result at scale `self.scale × n`. Negative exponents take the
    /// reciprocal of the positive power via [`Decimal::div`], inheriting
    /// its default-scale and precision semantics.
    ///
    /// # Errors
    /// - [`DecimalError::ZeroToNegativePower`] for `0^n` with `n < 0`.
    /// - [`DecimalError::DivideByZero`] propagated from the reciprocal.
    pub fn pow(&self, exp: i32, scale: Option<u32>, mode: Rounding) -> DecimalResult<Decimal> {
        if exp == 0 {
            let one = Decimal::one();
            return Ok(match scale {
                Some(target) => one.quantize(target, mode),
                None => one,
            });
        }
        if exp < 0 {
            if self.magnitude.is_zero() {
                return Err(DecimalError::ZeroToNegativePower);
            }
            let positive = self.pow_magnitude(exp.unsigned_abs());
            return Decimal::one().div(&positive, scale, mode);
        }
        let natural = self.pow_magnitude(exp as u32);
        Ok(match scale {
            Some(target) => natural.quantize(target, mode),
            None => natural,
        })
    }

    /// Exact `self^exp` for `exp ≥ 1` by squaring; O(log exp)
    /// multiplications, scale doubled on each squaring.
    fn pow_magnitude(&self, mut exp: u32) -> Decimal {
        let mut base_magnitude = self.magnitude.clone();
        let mut base_scale = self.scale;
        let mut acc_magnitude = BigInt::one();
        let mut acc_scale: u32 = 0;
        while exp > 0 {
            if exp & 1 == 1 {
                acc_magnitude *= &base_magnitude;
                acc_scale += base_scale;
            }
            exp >>= 1;
            if exp > 0 {
                base_magnitude = &base_magnitude * &base_magnitude;
                base_scale *= 2;
            }
        }
        Decimal {
            magnitude: acc_magnitude,
            scale: acc_scale,
        }
    }
}

// ============================================================================
// Operator Traits
// Ergonomic forms using each operator's omitted-scale default
// ============================================================================

impl Add for Decimal {
    type Output = Decimal;

    #[inline]
    fn add(self, rhs: Decimal) -> Decimal {
        Decimal::add(&self, &rhs, None)
    }
}

impl Sub for Decimal {
    type Output = Decimal;

    #[inline]
    fn sub(self, rhs: Decimal) -> Decimal {
        Decimal::sub(&self, &rhs, None)
    }
}

impl Mul for Decimal {
    type Output = Decimal;

    #[inline]
    fn mul(self, rhs: Decimal) -> Decimal {
        Decimal::mul(&self, &rhs, None, Rounding::TowardZero)
    }
}

impl Neg for Decimal {
    type Output = Decimal;

    #[inline]
    fn neg(self) -> Decimal {
        Decimal {
            magnitude: -self.magnitude,
            scale: self.scale,
        }
    }
}

impl Neg for &Decimal {
    type Output = Decimal;

    #[inline]
    fn neg(self) -> Decimal {
        Decimal {
            magnitude: -&self.magnitude,
            scale: self.scale,
        }
    }
}
