// ============================================================================
// Decimal Value
// Arbitrary-magnitude fixed-point representation and constructors
// ============================================================================

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Pow, Signed, Zero};

/// Fixed-point decimal number with arbitrary magnitude.
///
/// Internally stores `value × 10^scale` as a [`BigInt`], so the value is
/// `magnitude / 10^scale`. The scale is always non-negative; sign lives in
/// the magnitude.
///
/// Two decimals with different `(magnitude, scale)` pairs can denote the
/// same number (`1.20` vs `1.2000`). Equality via `==` is numeric; use
/// [`Decimal::eq_exact`] for structural equality.
///
/// Every operation is a pure function returning a new value; a `Decimal`
/// is never mutated in place.
///
/// # Example
/// ```
/// use fixed_decimal::{Decimal, Rounding};
///
/// let price: Decimal = "12.345".parse().unwrap();
/// let cents = price.quantize(2, Rounding::HalfAwayFromZero);
/// assert_eq!(cents.to_string(), "12.35");
/// ```
#[derive(Clone)]
pub struct Decimal {
    pub(crate) magnitude: BigInt,
    pub(crate) scale: u32,
}

/// `10^exp` as a [`BigInt`].
pub(crate) fn ten_pow(exp: u32) -> BigInt {
    BigInt::from(10u8).pow(exp)
}

impl Decimal {
    /// Extra fractional digits granted to division when the caller does
    /// not request a target scale. See [`Decimal::div`].
    pub const DIV_EXTRA_SCALE: u32 = 12;

    // ========================================================================
    // Construction
    // ========================================================================

    /// Zero at the given scale.
    #[inline]
    pub fn zero(scale: u32) -> Self {
        Self {
            magnitude: BigInt::zero(),
            scale,
        }
    }

    /// The multiplicative identity, `{magnitude: 1, scale: 0}`.
    #[inline]
    pub fn one() -> Self {
        Self {
            magnitude: BigInt::one(),
            scale: 0,
        }
    }

    /// Create from a signed integer, scaling it up to `scale` fractional
    /// digits. The numeric value is preserved exactly:
    /// `Decimal::from_integer(7, 3)` is `7.000`.
    #[inline]
    pub fn from_integer(n: impl Into<BigInt>, scale: u32) -> Self {
        Self {
            magnitude: n.into() * ten_pow(scale),
            scale,
        }
    }

    /// Create from an unsigned integer, scaling it up to `scale`.
    #[inline]
    pub fn from_natural(n: impl Into<BigUint>, scale: u32) -> Self {
        Self::from_integer(BigInt::from(n.into()), scale)
    }

    /// Create from a raw fixed-point magnitude: no scaling is applied.
    ///
    /// Use this when the caller already holds base units (e8s, satoshis,
    /// wei, cents): `Decimal::from_unscaled(12345, 2)` is `123.45`.
    #[inline]
    pub fn from_unscaled(n: impl Into<BigInt>, scale: u32) -> Self {
        Self {
            magnitude: n.into(),
            scale,
        }
    }

    /// Create from a raw unsigned fixed-point magnitude.
    #[inline]
    pub fn from_unscaled_natural(n: impl Into<BigUint>, scale: u32) -> Self {
        Self::from_unscaled(BigInt::from(n.into()), scale)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of fractional digits encoded in the magnitude.
    #[inline]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// The stored magnitude in base units, without any scale change.
    ///
    /// This is the exact underlying integer: `123.45` at scale 2 yields
    /// `12345`.
    #[inline]
    pub fn base_units(&self) -> &BigInt {
        &self.magnitude
    }

    /// Consume the value and return its magnitude in base units.
    #[inline]
    pub fn into_base_units(self) -> BigInt {
        self.magnitude
    }

    // ========================================================================
    // Sign inspection
    // ========================================================================

    /// Check if the value is zero (at any scale).
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    /// Check if the value is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.magnitude.sign() == Sign::Plus
    }

    /// Check if the value is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.magnitude.sign() == Sign::Minus
    }

    /// Sign of the value: `-1`, `0`, or `1`.
    #[inline]
    pub fn signum(&self) -> i8 {
        match self.magnitude.sign() {
            Sign::Minus => -1,
            Sign::NoSign => 0,
            Sign::Plus => 1,
        }
    }

    /// Absolute value; the scale is unchanged.
    #[inline]
    pub fn abs(&self) -> Self {
        Self {
            magnitude: self.magnitude.abs(),
            scale: self.scale,
        }
    }
}

impl Default for Decimal {
    #[inline]
    fn default() -> Self {
        Self::zero(0)
    }
}
