// ============================================================================
// Decimal Errors
// Closed error taxonomy for fixed-point decimal operations
// ============================================================================

use std::fmt;

/// Errors that can occur during decimal construction, arithmetic and
/// conversion.
///
/// Every variant is an expected, recoverable failure; the library never
/// panics on bad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecimalError {
    /// Divisor's effective magnitude is zero
    DivideByZero,
    /// Text input is empty, a lone sign, or contains non-digit characters
    InvalidFormat,
    /// Input carries more fractional digits than an exact-match target
    /// scale allows
    TooManyFractionDigits,
    /// Conversion to an unsigned integer produced a negative result
    NegativeValue,
    /// Floating-point input is NaN or infinite
    InvalidFloat,
    /// Zero base raised to a negative exponent
    ZeroToNegativePower,
}

impl fmt::Display for DecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecimalError::DivideByZero => write!(f, "division by zero"),
            DecimalError::InvalidFormat => {
                write!(f, "invalid format: could not parse decimal text")
            },
            DecimalError::TooManyFractionDigits => {
                write!(f, "too many fraction digits for the requested scale")
            },
            DecimalError::NegativeValue => {
                write!(f, "negative value cannot convert to a natural number")
            },
            DecimalError::InvalidFloat => {
                write!(f, "invalid float: input is NaN or infinite")
            },
            DecimalError::ZeroToNegativePower => {
                write!(f, "zero cannot be raised to a negative power")
            },
        }
    }
}

impl std::error::Error for DecimalError {}

/// Result type alias for decimal operations
pub type DecimalResult<T> = Result<T, DecimalError>;
