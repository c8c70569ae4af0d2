//! Error type for field and group operations.
use core::fmt;

/// Result of a field, group or codec operation.
pub type CurveResult<T> = Result<T, CurveError>;

/// Errors raised by the BN254 arithmetic layer.
///
/// All of them are fatal to the call that produced them; none can be fixed
/// by retrying with the same input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurveError {
    /// Coordinates do not satisfy the curve equation, or the point lies
    /// outside the prime-order subgroup.
    InvalidPoint,
    /// Modular inverse of the additive identity.
    DivisionByZero,
    /// Big-endian bytes encode an integer not below the field modulus.
    NonCanonicalFieldElement,
    /// Byte input has the wrong length for the reader.
    InvalidLength {
        /// Length the reader expects.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },
}

impl core::error::Error for CurveError {}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPoint => f.write_str("point is not on the curve or not in the subgroup"),
            Self::DivisionByZero => f.write_str("inverse of zero"),
            Self::NonCanonicalFieldElement => f.write_str("field element is not below the modulus"),
            Self::InvalidLength { expected, actual } => {
                write!(f, "invalid input length {actual}, expected {expected}")
            }
        }
    }
}
