//! Optimal ate pairing `e: G1 x G2 -> GT`.
//!
//! Miller loop and final exponentiation are delegated to `ark-bn254`; this
//! module converts between the crate's point types and the arkworks ones and
//! exposes the target group as [`Gt`].
use crate::{
    curve::{G1Point, G2Point},
    field::Scalar,
};
use ark_bn254::{Bn254, Fq12, G1Affine, G2Affine};
use ark_ec::pairing::Pairing;
use ark_ff::{Field, One};
use core::{fmt, ops::Mul};
use std::vec::Vec;

/// Element of the target group, a multiplicative subgroup of `Fq12`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gt(Fq12);

impl Gt {
    /// Multiplicative identity of the target group.
    #[inline]
    pub fn identity() -> Self {
        Self(Fq12::one())
    }

    /// Returns `true` for the identity.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.0.is_one()
    }

    /// Group law of the target group.
    #[inline]
    pub fn combine(&self, other: &Self) -> Self {
        Self(self.0 * other.0)
    }

    /// `self^k`.
    #[inline]
    pub fn pow(&self, k: &Scalar) -> Self {
        Self(self.0.pow(k.to_limbs()))
    }

    /// The underlying `Fq12` element.
    #[inline]
    pub fn into_inner(self) -> Fq12 {
        self.0
    }
}

impl Mul for Gt {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.combine(&rhs)
    }
}

impl fmt::Debug for Gt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identity() {
            f.write_str("Gt(1)")
        } else {
            f.debug_tuple("Gt").field(&self.0).finish()
        }
    }
}

/// Evaluates the pairing on one pair of points.
///
/// Either argument being the point at infinity yields [`Gt::identity`].
pub fn pair(p: &G1Point, q: &G2Point) -> Gt {
    let p: G1Affine = (*p).into();
    let q: G2Affine = (*q).into();
    Gt(Bn254::pairing(p, q).0)
}

/// Equality in the target group.
#[inline]
pub fn pairing_equals(a: &Gt, b: &Gt) -> bool {
    a == b
}

/// Checks `e(p_1, q_1) * ... * e(p_n, q_n) == 1` with a single shared final
/// exponentiation.
///
/// Note: If the input is empty, this function returns true, as the alt_bn128
/// pairing precompile does.
pub fn pairing_product_is_identity(pairs: &[(G1Point, G2Point)]) -> bool {
    if pairs.is_empty() {
        return true;
    }

    let (g1_points, g2_points): (Vec<G1Affine>, Vec<G2Affine>) = pairs
        .iter()
        .map(|(p, q)| (G1Affine::from(*p), G2Affine::from(*q)))
        .unzip();

    Bn254::multi_pairing(g1_points, g2_points).0.is_one()
}
