//! # zkarith
//!
//! Verifiable arithmetic over BN254. Values are hidden behind G1 points and
//! claims about them are checked with the group law and the pairing:
//!
//! - [`encode_rational`] and [`verify_rational_add`] for sums of rationals,
//! - [`verify_mat_mul`] for a public matrix applied to an encoded vector,
//! - [`pairing_check`] for a linear pairing equation with public scalars.
//!
//! All entry points take the curve parameters explicitly; use
//! [`CurveParams::bn254`] for the shared instance.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

#[doc(inline)]
pub use bn254;
#[doc(inline)]
pub use verifier;

pub use bn254::{
    AffinePoint, Curve, CurveError, CurveParams, Fq, Fq2, G1Point, G2Point, Gt, Scalar, G1, G2,
};
pub use verifier::{
    LinearPairingEquation, MatMulVerifier, PairingCheckInput, PairingChecker, PairingEquation,
    Rational, RationalEncoder, VerifyError, VerifyResult,
};

/// Encodes `numerator / denominator` as `(numerator * denominator^-1) * G1`.
///
/// Fails with [`VerifyError::InvalidRational`] for a zero denominator.
pub fn encode_rational(
    params: &CurveParams,
    numerator: i128,
    denominator: i128,
) -> VerifyResult<G1Point> {
    RationalEncoder::new(params).encode_parts(numerator, denominator)
}

/// Checks that `a + b` encodes `numerator / denominator`.
pub fn verify_rational_add(
    params: &CurveParams,
    a: &G1Point,
    b: &G1Point,
    numerator: i128,
    denominator: i128,
) -> VerifyResult<bool> {
    RationalEncoder::new(params).verify_add(a, b, numerator, denominator)
}

/// `k * point` on either group.
#[inline]
pub fn scalar_multiply<C: Curve>(point: &AffinePoint<C>, k: impl Into<Scalar>) -> AffinePoint<C> {
    point.scalar_mul(&k.into())
}

/// Checks the claimed product of a row-major `n x n` matrix and an encoded
/// vector.
pub fn verify_mat_mul<T>(
    params: &CurveParams,
    matrix: &[T],
    n: usize,
    encoded_vector: &[G1Point],
    claimed_output: &[T],
) -> VerifyResult<bool>
where
    T: Copy + Into<Scalar>,
{
    MatMulVerifier::new(params).verify(matrix, n, encoded_vector, claimed_output)
}

/// Checks version 1 of the linear pairing equation, see
/// [`LinearPairingEquation`].
pub fn pairing_check(
    params: &CurveParams,
    a: &G1Point,
    b: &G2Point,
    c: &G1Point,
    x1: impl Into<Scalar>,
    x2: impl Into<Scalar>,
    x3: impl Into<Scalar>,
) -> VerifyResult<bool> {
    PairingChecker::new(params).check(a, b, c, x1, x2, x3)
}

/// Checks a caller-supplied pairing equation.
#[allow(clippy::too_many_arguments)]
pub fn pairing_check_with<E: PairingEquation>(
    params: &CurveParams,
    equation: E,
    a: &G1Point,
    b: &G2Point,
    c: &G1Point,
    x1: impl Into<Scalar>,
    x2: impl Into<Scalar>,
    x3: impl Into<Scalar>,
) -> VerifyResult<bool> {
    PairingChecker::with_equation(params, equation).check(a, b, c, x1, x2, x3)
}

/// Group law on either group.
#[inline]
pub fn point_add<C: Curve>(a: &AffinePoint<C>, b: &AffinePoint<C>) -> AffinePoint<C> {
    a.add_point(b)
}

/// Additive inverse on either group.
#[inline]
pub fn point_negate<C: Curve>(point: &AffinePoint<C>) -> AffinePoint<C> {
    point.negate()
}
