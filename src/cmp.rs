// ============================================================================
// Comparison & Ordering
// Numeric equality across scales; structural equality on request
// ============================================================================

use crate::rounding::Rounding;
use crate::value::Decimal;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl Decimal {
    /// Structural equality: identical magnitude *and* scale.
    ///
    /// Stricter than `==`, which treats `1.20` and `1.2000` as equal.
    #[inline]
    pub fn eq_exact(&self, other: &Decimal) -> bool {
        self.scale == other.scale && self.magnitude == other.magnitude
    }

    /// Three-way numeric comparison after aligning both operands to the
    /// wider scale. The target is the max of the two scales, so only
    /// exact widening ever happens; the mode passed to quantize is a
    /// formality.
    fn aligned_cmp(&self, other: &Decimal) -> Ordering {
        let target = self.scale.max(other.scale);
        let a = self.quantize(target, Rounding::TowardZero);
        let b = other.quantize(target, Rounding::TowardZero);
        a.magnitude.cmp(&b.magnitude)
    }
}

impl PartialEq for Decimal {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.aligned_cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.aligned_cmp(other))
    }
}

/// Total numeric order; `min`, `max` and `clamp` come with it.
impl Ord for Decimal {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.aligned_cmp(other)
    }
}

/// Hash of the normalized pair so numerically equal values hash alike.
/// Zero hashes independently of its scale, since `0.00 == 0`.
impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.is_zero() {
            0u32.hash(state);
        } else {
            let n = self.normalize();
            n.magnitude.hash(state);
            n.scale.hash(state);
        }
    }
}
