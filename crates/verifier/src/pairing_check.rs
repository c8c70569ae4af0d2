//! Pairing equation over two G1 points, one G2 point and three public scalars.
//!
//! The shape of the equation is a [`PairingEquation`]. It yields the `(G1, G2)`
//! terms whose pairing product must be the target-group identity, so the
//! whole check costs one multi-pairing.
use crate::VerifyResult;
use bn254::{pairing_product_is_identity, CurveParams, G1Point, G2Point, Scalar};
use core::fmt::Debug;
use std::vec::Vec;
use tracing::{debug, trace};

/// `alpha` of [`LinearPairingEquation::v1`], applied to G1.
pub const EQUATION_V1_ALPHA: u64 = 5;
/// `beta` of [`LinearPairingEquation::v1`], applied to G2.
pub const EQUATION_V1_BETA: u64 = 6;
/// `gamma` of [`LinearPairingEquation::v1`], applied to G2.
pub const EQUATION_V1_GAMMA: u64 = 2;
/// `delta` of [`LinearPairingEquation::v1`], applied to G2.
pub const EQUATION_V1_DELTA: u64 = 11;

/// Points and public scalars of one pairing check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PairingCheckInput {
    /// First G1 point.
    pub a: G1Point,
    /// The G2 point paired with `a`.
    pub b: G2Point,
    /// Second G1 point.
    pub c: G1Point,
    /// Public scalars `x1, x2, x3`.
    pub x: [Scalar; 3],
}

/// Shape of a pairing check.
///
/// The check holds iff the product of `e(p, q)` over the returned terms is the
/// identity of the target group.
pub trait PairingEquation: Debug + Send + Sync {
    /// Terms of the pairing product for `input`.
    fn terms(&self, params: &CurveParams, input: &PairingCheckInput) -> Vec<(G1Point, G2Point)>;
}

/// `e(A, B) * e(alpha * G1, beta * G2) * e(X, gamma * G2) * e(C, delta * G2) == 1`
/// with `X = (x1 + x2 + x3) * G1`.
///
/// In exponents this is `ab + alpha * beta + gamma * (x1 + x2 + x3) + c * delta == 0 mod r`
/// where `A = a * G1`, `B = b * G2` and `C = c * G1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinearPairingEquation {
    alpha: G1Point,
    beta: G2Point,
    gamma: G2Point,
    delta: G2Point,
}

impl LinearPairingEquation {
    /// Equation with explicit fixed points.
    pub fn new(alpha: G1Point, beta: G2Point, gamma: G2Point, delta: G2Point) -> Self {
        Self {
            alpha,
            beta,
            gamma,
            delta,
        }
    }

    /// Version 1 of the equation, using the `EQUATION_V1_*` coefficients.
    pub fn v1(params: &CurveParams) -> Self {
        Self::new(
            params.g1_mul_generator(&Scalar::from(EQUATION_V1_ALPHA)),
            params.g2_mul_generator(&Scalar::from(EQUATION_V1_BETA)),
            params.g2_mul_generator(&Scalar::from(EQUATION_V1_GAMMA)),
            params.g2_mul_generator(&Scalar::from(EQUATION_V1_DELTA)),
        )
    }
}

impl PairingEquation for LinearPairingEquation {
    fn terms(&self, params: &CurveParams, input: &PairingCheckInput) -> Vec<(G1Point, G2Point)> {
        let [x1, x2, x3] = input.x;
        let x = params.g1_mul_generator(&(x1 + x2 + x3));
        Vec::from([
            (input.a, input.b),
            (self.alpha, self.beta),
            (x, self.gamma),
            (input.c, self.delta),
        ])
    }
}

/// Evaluates a [`PairingEquation`] on caller-supplied points and scalars.
#[derive(Clone, Debug)]
pub struct PairingChecker<'a, E = LinearPairingEquation> {
    params: &'a CurveParams,
    equation: E,
}

impl<'a> PairingChecker<'a> {
    /// Checker for [`LinearPairingEquation::v1`].
    pub fn new(params: &'a CurveParams) -> Self {
        Self {
            params,
            equation: LinearPairingEquation::v1(params),
        }
    }
}

impl<'a, E: PairingEquation> PairingChecker<'a, E> {
    /// Checker for a caller-supplied equation.
    pub fn with_equation(params: &'a CurveParams, equation: E) -> Self {
        Self { params, equation }
    }

    /// The equation being checked.
    pub fn equation(&self) -> &E {
        &self.equation
    }

    /// Returns whether the equation holds for `a`, `b`, `c` and `x1, x2, x3`.
    ///
    /// Points off their curve or outside the prime-order subgroup fail with
    /// [`crate::VerifyError::InvalidPoint`].
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn check(
        &self,
        a: &G1Point,
        b: &G2Point,
        c: &G1Point,
        x1: impl Into<Scalar>,
        x2: impl Into<Scalar>,
        x3: impl Into<Scalar>,
    ) -> VerifyResult<bool> {
        a.validate()?;
        b.validate()?;
        c.validate()?;

        let input = PairingCheckInput {
            a: *a,
            b: *b,
            c: *c,
            x: [x1.into(), x2.into(), x3.into()],
        };
        let terms = self.equation.terms(self.params, &input);
        if !pairing_product_is_identity(&terms) {
            debug!(equation = ?self.equation, "pairing product is not the identity");
            return Ok(false);
        }
        trace!("pairing equation holds");
        Ok(true)
    }
}
