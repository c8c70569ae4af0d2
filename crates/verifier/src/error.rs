//! Verifier error type.
use bn254::CurveError;
use core::fmt;

/// Result of a verifier call.
pub type VerifyResult<T> = Result<T, VerifyError>;

/// Malformed input to a verifier.
///
/// A well-formed claim that does not hold is not an error: verifiers return
/// `Ok(false)` for it.
///
/// The verifiers themselves only raise [`InvalidPoint`](Self::InvalidPoint),
/// [`InvalidRational`](Self::InvalidRational) and
/// [`DimensionMismatch`](Self::DimensionMismatch). The remaining variants carry a
/// [`CurveError`] from the field and codec helpers through `?`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VerifyError {
    /// A point is not on its curve or not in the prime-order subgroup.
    InvalidPoint,
    /// Zero denominator, or a numerator or denominator outside the supported
    /// range.
    InvalidRational,
    /// Matrix, vector and output sizes disagree.
    DimensionMismatch {
        /// Which input has the wrong size.
        what: &'static str,
        /// Size implied by `n`.
        expected: usize,
        /// Size that was supplied.
        actual: usize,
    },
    /// Modular inverse of zero, from [`CurveError::DivisionByZero`].
    DivisionByZero,
    /// Field element encoding is not below the modulus, from
    /// [`CurveError::NonCanonicalFieldElement`].
    NonCanonicalFieldElement,
    /// Byte input of the wrong length, from [`CurveError::InvalidLength`].
    InvalidLength {
        /// Expected length.
        expected: usize,
        /// Supplied length.
        actual: usize,
    },
}

impl From<CurveError> for VerifyError {
    fn from(err: CurveError) -> Self {
        match err {
            CurveError::InvalidPoint => Self::InvalidPoint,
            CurveError::DivisionByZero => Self::DivisionByZero,
            CurveError::NonCanonicalFieldElement => Self::NonCanonicalFieldElement,
            CurveError::InvalidLength { expected, actual } => {
                Self::InvalidLength { expected, actual }
            }
        }
    }
}

impl core::error::Error for VerifyError {}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPoint => f.write_str("point is not on the curve or not in the subgroup"),
            Self::InvalidRational => f.write_str("invalid rational"),
            Self::DimensionMismatch {
                what,
                expected,
                actual,
            } => write!(f, "{what} has {actual} entries, expected {expected}"),
            Self::DivisionByZero => f.write_str("inverse of zero"),
            Self::NonCanonicalFieldElement => f.write_str("field element is not below the modulus"),
            Self::InvalidLength { expected, actual } => {
                write!(f, "invalid input length {actual}, expected {expected}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_curve_errors() {
        assert_eq!(
            VerifyError::from(CurveError::InvalidPoint),
            VerifyError::InvalidPoint
        );
        assert_eq!(
            VerifyError::from(CurveError::DivisionByZero),
            VerifyError::DivisionByZero
        );
        assert_eq!(
            VerifyError::from(CurveError::NonCanonicalFieldElement),
            VerifyError::NonCanonicalFieldElement
        );
        assert_eq!(
            VerifyError::from(CurveError::InvalidLength {
                expected: 192,
                actual: 7
            }),
            VerifyError::InvalidLength {
                expected: 192,
                actual: 7
            }
        );
    }

    #[test]
    fn codec_errors_pass_through() {
        fn decode(bytes: &[u8]) -> VerifyResult<bn254::G1Point> {
            Ok(bn254::codec::read_g1_point(bytes)?)
        }
        assert_eq!(
            decode(&[0u8; 10]),
            Err(VerifyError::InvalidLength {
                expected: 64,
                actual: 10
            })
        );
        assert_eq!(
            decode(&[0xffu8; 64]),
            Err(VerifyError::NonCanonicalFieldElement)
        );
    }

    #[test]
    fn display() {
        let err = VerifyError::DimensionMismatch {
            what: "matrix",
            expected: 9,
            actual: 8,
        };
        assert_eq!(err.to_string(), "matrix has 8 entries, expected 9");
    }
}
