// ============================================================================
// Fixed Decimal Library
// Arbitrary-magnitude fixed-point decimal arithmetic for financial use
// ============================================================================

//! # Fixed Decimal
//!
//! A fixed-point decimal number: an arbitrary-magnitude signed integer
//! paired with a non-negative scale, giving deterministic arithmetic free
//! of binary floating-point rounding error. Built for currency-style
//! amounts with fixed decimal places (e8s, satoshis, wei, cents).
//!
//! ## Features
//!
//! - **Single rounding authority**: every narrowing conversion and every
//!   operator routes through [`Decimal::quantize`] with an explicit
//!   three-variant [`Rounding`] mode
//! - **Exact by default**: widening, multiplication and integer
//!   construction never lose information
//! - **Arbitrary magnitude** backed by `num-bigint`; no overflow
//! - **Pure values**: every operation returns a new immutable `Decimal`,
//!   safe to share across threads
//!
//! ## Example
//!
//! ```rust
//! use fixed_decimal::{Decimal, Rounding};
//!
//! let price = Decimal::parse("19.99", None, None).unwrap();
//! let qty = Decimal::from_integer(3, 0);
//! let total = price.mul(&qty, Some(2), Rounding::HalfAwayFromZero);
//! assert_eq!(total.to_string(), "59.97");
//!
//! let each = total
//!     .div(&Decimal::from_integer(2, 0), Some(2), Rounding::HalfAwayFromZero)
//!     .unwrap();
//! assert_eq!(each.format(), "29.99");
//! ```

mod arith;
mod cmp;
mod convert;
mod errors;
mod format;
mod parse;
mod quantize;
mod rounding;
mod value;

#[cfg(feature = "serde")]
mod serde_impl;

pub use errors::{DecimalError, DecimalResult};
pub use rounding::Rounding;
pub use value::Decimal;

// Re-exports for convenience
pub mod prelude {
    pub use crate::{Decimal, DecimalError, DecimalResult, Rounding};
}
