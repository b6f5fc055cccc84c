// ============================================================================
// Rounding Modes
// The three-way rounding policy shared by quantize, divide and parse
// ============================================================================

use num_bigint::BigUint;
use num_traits::Zero;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How to dispose of digits discarded when narrowing a scale.
///
/// A narrowing step produces a truncated quotient plus a remainder; the
/// mode decides whether the quotient is bumped by one in the direction of
/// the value's sign (away from zero).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rounding {
    /// Never bump: discard the remainder (truncate).
    TowardZero,
    /// Bump whenever any discarded digit is non-zero.
    AwayFromZero,
    /// Bump when the discarded fraction is at least half; ties go away
    /// from zero.
    HalfAwayFromZero,
}

impl Default for Rounding {
    #[inline]
    fn default() -> Self {
        Rounding::TowardZero
    }
}

/// Whether a truncated quotient must be bumped by one away from zero.
///
/// `remainder` and `divisor` are magnitudes; the half comparison is
/// `2·remainder ≥ divisor` so ties bump.
pub(crate) fn should_bump(remainder: &BigUint, divisor: &BigUint, mode: Rounding) -> bool {
    if remainder.is_zero() {
        return false;
    }
    match mode {
        Rounding::TowardZero => false,
        Rounding::AwayFromZero => true,
        Rounding::HalfAwayFromZero => remainder * 2u8 >= *divisor,
    }
}
