// ============================================================================
// Conversions
// Float/integer bridging at the API boundary
// ============================================================================

use crate::errors::{DecimalError, DecimalResult};
use crate::rounding::Rounding;
use crate::value::Decimal;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{FromPrimitive, ToPrimitive};

impl Decimal {
    /// Create from a floating-point value at the given scale.
    ///
    /// The input is scaled by `10^scale` and the remaining fraction is
    /// rounded per `mode`. Intended for API boundaries; prefer
    /// [`Decimal::parse`] or the integer constructors when exactness
    /// matters.
    ///
    /// # Errors
    /// [`DecimalError::InvalidFloat`] when the input is NaN or infinite,
    /// or when scaling pushes it outside f64's finite range.
    pub fn from_f64(value: f64, scale: u32, mode: Rounding) -> DecimalResult<Decimal> {
        if !value.is_finite() {
            return Err(DecimalError::InvalidFloat);
        }
        let scaled = value * 10f64.powi(scale as i32);
        let truncated = scaled.trunc();
        let fraction = scaled - truncated;
        let mut magnitude = BigInt::from_f64(truncated).ok_or(DecimalError::InvalidFloat)?;
        let bump = match mode {
            Rounding::TowardZero => false,
            Rounding::AwayFromZero => fraction != 0.0,
            Rounding::HalfAwayFromZero => fraction.abs() >= 0.5,
        };
        if bump {
            if scaled.is_sign_negative() {
                magnitude -= 1;
            } else {
                magnitude += 1;
            }
        }
        Ok(Decimal { magnitude, scale })
    }

    /// Round to a whole number per `mode` and return it.
    #[inline]
    pub fn to_integer(&self, mode: Rounding) -> BigInt {
        self.quantize(0, mode).magnitude
    }

    /// Round to a whole number per `mode` and return it unsigned.
    ///
    /// # Errors
    /// [`DecimalError::NegativeValue`] when the rounded result is
    /// negative.
    pub fn to_natural(&self, mode: Rounding) -> DecimalResult<BigUint> {
        let n = self.to_integer(mode);
        match n.sign() {
            Sign::Minus => Err(DecimalError::NegativeValue),
            _ => Ok(n.magnitude().clone()),
        }
    }

    /// Approximate as an f64: `magnitude / 10^scale` in floating point.
    ///
    /// Lossy escape hatch; magnitudes beyond f64 range saturate to
    /// infinity the way float division does.
    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.magnitude.to_f64().unwrap_or(f64::NAN) / 10f64.powi(self.scale as i32)
    }
}
