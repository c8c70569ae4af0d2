//! Group law on the two BN254 curves.
//!
//! G1 is `y^2 = x^3 + 3` over `Fq`; G2 is the sextic twist
//! `y^2 = x^3 + 3 / (9 + i)` over `Fq2`. Both share the same prime order `r`,
//! the modulus of [`Scalar`]. Points are affine with an explicit point at
//! infinity; the arithmetic itself runs on `ark-ec` projective points.
use crate::{
    field::{FieldElement, Scalar},
    CurveError, CurveResult,
};
use ark_ec::{
    short_weierstrass::{Affine, Projective, SWCurveConfig},
    AffineRepr, CurveGroup,
};
use ark_ff::{AdditiveGroup, Field, Zero};
use core::{
    fmt,
    hash::Hash,
    iter::Sum,
    ops::{Add, Mul, Neg, Sub},
};

/// A short-Weierstrass curve of order `r` used by the pairing.
pub trait Curve: Copy + fmt::Debug + Eq + Hash + Send + Sync + 'static {
    /// Field the coordinates live in.
    type Base: Field;

    /// `ark-ec` parameters of the curve.
    type Config: SWCurveConfig<BaseField = Self::Base, ScalarField = ark_bn254::Fr>;

    /// Human readable group name.
    const NAME: &'static str;
}

/// Marker for the group over the base field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum G1 {}

/// Marker for the group over the quadratic extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum G2 {}

impl Curve for G1 {
    type Base = ark_bn254::Fq;
    type Config = ark_bn254::g1::Config;

    const NAME: &'static str = "G1";
}

impl Curve for G2 {
    type Base = ark_bn254::Fq2;
    type Config = ark_bn254::g2::Config;

    const NAME: &'static str = "G2";
}

/// Point of G1.
pub type G1Point = AffinePoint<G1>;

/// Point of G2.
pub type G2Point = AffinePoint<G2>;

/// Affine point on curve `C`, or the point at infinity.
///
/// Results of the group law are normalized, so the identity has a single
/// representation and derived equality is group equality.
#[derive(PartialEq, Eq, Hash)]
pub struct AffinePoint<C: Curve>(Affine<C::Config>);

// Written by hand: the derive would require `C::Config: Copy`.
impl<C: Curve> Clone for AffinePoint<C> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Curve> Copy for AffinePoint<C> {}

impl<C: Curve> AffinePoint<C> {
    /// The point at infinity.
    #[inline]
    pub const fn identity() -> Self {
        Self(Affine::identity())
    }

    /// Creates a point from affine coordinates.
    ///
    /// `(0, 0)` is accepted as the encoding of the point at infinity, as the
    /// alt_bn128 precompiles do. Any other pair must satisfy the curve equation
    /// and lie in the order-`r` subgroup, otherwise
    /// [`CurveError::InvalidPoint`] is returned.
    pub fn new(x: FieldElement<C::Base>, y: FieldElement<C::Base>) -> CurveResult<Self> {
        if x.is_zero() && y.is_zero() {
            return Ok(Self::identity());
        }
        let point = Self::new_unchecked(x, y);
        point.validate()?;
        Ok(point)
    }

    /// Creates a point without checking the curve equation.
    ///
    /// Use [`AffinePoint::validate`] before trusting a point built this way.
    #[inline]
    pub fn new_unchecked(x: FieldElement<C::Base>, y: FieldElement<C::Base>) -> Self {
        Self(Affine::new_unchecked(x.into_inner(), y.into_inner()))
    }

    /// Affine coordinates, `None` for the point at infinity.
    #[inline]
    pub fn xy(&self) -> Option<(FieldElement<C::Base>, FieldElement<C::Base>)> {
        self.0
            .xy()
            .map(|(x, y)| (FieldElement::from_inner(x), FieldElement::from_inner(y)))
    }

    /// `x` coordinate, `None` for the point at infinity.
    #[inline]
    pub fn x(&self) -> Option<FieldElement<C::Base>> {
        self.xy().map(|(x, _)| x)
    }

    /// `y` coordinate, `None` for the point at infinity.
    #[inline]
    pub fn y(&self) -> Option<FieldElement<C::Base>> {
        self.xy().map(|(_, y)| y)
    }

    /// Returns `true` for the point at infinity.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.0.infinity
    }

    /// Checks `y^2 = x^3 + b`. The point at infinity is on every curve.
    #[inline]
    pub fn is_on_curve(&self) -> bool {
        self.0.is_on_curve()
    }

    /// Checks membership of the order-`r` subgroup, assuming the point is on
    /// the curve.
    #[inline]
    pub fn is_in_subgroup(&self) -> bool {
        self.0.is_in_correct_subgroup_assuming_on_curve()
    }

    /// Fails with [`CurveError::InvalidPoint`] unless the point is on the curve
    /// and in the prime-order subgroup.
    pub fn validate(&self) -> CurveResult<()> {
        if !self.is_on_curve() || !self.is_in_subgroup() {
            return Err(CurveError::InvalidPoint);
        }
        Ok(())
    }

    /// Additive inverse: `(x, -y)`. The identity maps to itself.
    #[inline]
    pub fn negate(&self) -> Self {
        Self(-self.0)
    }

    /// `2 * self`.
    #[inline]
    pub fn double(&self) -> Self {
        Self(self.0.into_group().double().into_affine())
    }

    /// `self + other`.
    #[inline]
    pub fn add_point(&self, other: &Self) -> Self {
        Self((self.0 + other.0).into_affine())
    }

    /// `k * self`. The scalar is already reduced modulo the group order.
    #[inline]
    pub fn scalar_mul(&self, k: &Scalar) -> Self {
        Self((self.0 * k.into_inner()).into_affine())
    }

    /// Multiplies by an integer given as little-endian 64-bit limbs, without
    /// reducing it modulo the group order.
    #[inline]
    pub fn mul_bigint(&self, limbs: impl AsRef<[u64]>) -> Self {
        Self(self.0.mul_bigint(limbs).into_affine())
    }
}

impl<C: Curve> Default for AffinePoint<C> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<C: Curve> fmt::Debug for AffinePoint<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.xy() {
            None => write!(f, "{}(infinity)", C::NAME),
            Some((x, y)) => f.debug_struct(C::NAME).field("x", &x).field("y", &y).finish(),
        }
    }
}

impl<C: Curve> Add for AffinePoint<C> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.add_point(&rhs)
    }
}

impl<C: Curve> Sub for AffinePoint<C> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.add_point(&rhs.negate())
    }
}

impl<C: Curve> Neg for AffinePoint<C> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.negate()
    }
}

impl<C: Curve> Mul<Scalar> for AffinePoint<C> {
    type Output = Self;

    #[inline]
    fn mul(self, k: Scalar) -> Self {
        self.scalar_mul(&k)
    }
}

impl<C: Curve> Sum for AffinePoint<C> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        let sum = iter.fold(Projective::<C::Config>::zero(), |acc, p| acc + p.0);
        Self(sum.into_affine())
    }
}

impl From<ark_bn254::G1Affine> for G1Point {
    fn from(p: ark_bn254::G1Affine) -> Self {
        Self(p)
    }
}

impl From<G1Point> for ark_bn254::G1Affine {
    fn from(p: G1Point) -> Self {
        p.0
    }
}

impl From<ark_bn254::G2Affine> for G2Point {
    fn from(p: ark_bn254::G2Affine) -> Self {
        Self(p)
    }
}

impl From<G2Point> for ark_bn254::G2Affine {
    fn from(p: G2Point) -> Self {
        p.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{Fq, Fq2};
    use ark_ff::PrimeField;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use rstest::rstest;

    fn g1() -> G1Point {
        ark_bn254::G1Affine::generator().into()
    }

    fn g2() -> G2Point {
        ark_bn254::G2Affine::generator().into()
    }

    fn random_scalar(rng: &mut StdRng) -> Scalar {
        let mut bytes = [0u8; 32];
        rng.fill(&mut bytes);
        Scalar::from_be_bytes_mod_order(&bytes)
    }

    #[test]
    fn generator_is_one_two() {
        assert_eq!(g1().xy(), Some((Fq::from(1u64), Fq::from(2u64))));
        assert_eq!(G1Point::new(Fq::from(1u64), Fq::from(2u64)), Ok(g1()));
        assert!(g2().is_on_curve());
        assert!(g2().is_in_subgroup());
    }

    #[test]
    fn rejects_points_off_the_curve() {
        assert_eq!(
            G1Point::new(Fq::from(1u64), Fq::from(3u64)),
            Err(CurveError::InvalidPoint)
        );
        let (x, y) = g2().xy().unwrap();
        assert_eq!(
            G2Point::new(x, y + Fq2::one()),
            Err(CurveError::InvalidPoint)
        );
        assert!(!G1Point::new_unchecked(Fq::one(), Fq::one()).is_on_curve());
    }

    #[test]
    fn zero_coordinates_are_identity() {
        assert_eq!(G1Point::new(Fq::zero(), Fq::zero()), Ok(G1Point::identity()));
        assert_eq!(G2Point::new(Fq2::zero(), Fq2::zero()), Ok(G2Point::identity()));
        assert!(G1Point::identity().is_on_curve());
        assert_eq!(G1Point::identity().x(), None);
    }

    #[test]
    fn rejects_twist_point_outside_subgroup() {
        let twist_point = twist_point_outside_subgroup();
        assert!(twist_point.is_on_curve());
        assert!(!twist_point.is_in_subgroup());
        let (x, y) = twist_point.xy().unwrap();
        assert_eq!(G2Point::new(x, y), Err(CurveError::InvalidPoint));
    }

    #[test]
    fn group_axioms() {
        let mut rng = StdRng::seed_from_u64(0x67_726f_7570);
        for _ in 0..4 {
            let p = g1() * random_scalar(&mut rng);
            let q = g1() * random_scalar(&mut rng);
            let r = g1() * random_scalar(&mut rng);

            assert_eq!(p + G1Point::identity(), p);
            assert_eq!(G1Point::identity() + p, p);
            assert_eq!(p + p.negate(), G1Point::identity());
            assert_eq!((p + q) + r, p + (q + r));
            assert_eq!(p + q, q + p);
            assert_eq!(p + p, p.double());
            assert_eq!(p - q + q, p);
        }
    }

    #[test]
    fn g2_group_axioms() {
        let mut rng = StdRng::seed_from_u64(0x6732);
        let p = g2() * random_scalar(&mut rng);
        let q = g2() * random_scalar(&mut rng);
        let r = g2() * random_scalar(&mut rng);

        assert_eq!(p + G2Point::identity(), p);
        assert_eq!(G2Point::identity() + p, p);
        assert_eq!(p + p.negate(), G2Point::identity());
        assert_eq!((p + q) + r, p + (q + r));
        assert_eq!(p + q, q + p);
        assert_eq!(p - q + q, p);
        assert_eq!(p + p, p.double());
        assert!((p + q).is_on_curve());
    }

    #[test]
    fn scalar_multiplication_is_a_homomorphism() {
        let mut rng = StdRng::seed_from_u64(0x686f_6d6f);
        for _ in 0..4 {
            let a = random_scalar(&mut rng);
            let b = random_scalar(&mut rng);
            let p = g1() * random_scalar(&mut rng);
            assert_eq!(p * (a + b), p * a + p * b);
        }
        let a = Scalar::from(rng.random::<u64>());
        let b = Scalar::from(rng.random::<u64>());
        assert_eq!(g2() * (a + b), g2() * a + g2() * b);
    }

    #[rstest]
    #[case::zero(0)]
    #[case::one(1)]
    #[case::two(2)]
    #[case::three(3)]
    #[case::odd(17)]
    #[case::power_of_two(64)]
    fn matches_repeated_addition(#[case] k: usize) {
        let scalar = Scalar::from(k as u64);

        let expected: G1Point = core::iter::repeat(g1()).take(k).sum();
        assert_eq!(g1().scalar_mul(&scalar), expected);
        assert_eq!(g1().mul_bigint([k as u64]), expected);

        let expected: G2Point = core::iter::repeat(g2()).take(k).sum();
        assert_eq!(g2().scalar_mul(&scalar), expected);
    }

    #[test]
    fn scalar_edge_cases() {
        assert_eq!(g1() * Scalar::zero(), G1Point::identity());
        assert_eq!(g1() * Scalar::one(), g1());
        assert_eq!(g1() * -Scalar::one(), g1().negate());
        assert_eq!(G1Point::identity() * Scalar::from(7u64), G1Point::identity());
        assert_eq!(g1().mul_bigint(ark_bn254::Fr::MODULUS), G1Point::identity());
        assert_eq!(g2().mul_bigint(ark_bn254::Fr::MODULUS), G2Point::identity());
    }

    #[test]
    fn round_trips_through_arkworks() {
        let p = g1() * Scalar::from(42u64);
        let ark: ark_bn254::G1Affine = p.into();
        assert_eq!(G1Point::from(ark), p);

        let ark: ark_bn254::G2Affine = G2Point::identity().into();
        assert!(ark.infinity);
        assert_eq!(G2Point::from(ark), G2Point::identity());
    }

    #[test]
    fn sums_points() {
        let points = [1u64, 2, 3].map(|k| g1() * Scalar::from(k));
        assert_eq!(points.into_iter().sum::<G1Point>(), g1() * Scalar::from(6u64));
        assert_eq!(core::iter::empty::<G1Point>().sum::<G1Point>(), G1Point::identity());
    }

    fn hex_32(s: &str) -> [u8; 32] {
        let mut out = [0u8; 32];
        out.copy_from_slice(&hex::decode(s).unwrap());
        out
    }

    /// A point on the twist that is not `r`-torsion.
    fn twist_point_outside_subgroup() -> G2Point {
        G2Point::new_unchecked(
            Fq2::new(
                Fq::from_be_bytes(&hex_32(TWIST_X_C0)).unwrap(),
                Fq::from_be_bytes(&hex_32(TWIST_X_C1)).unwrap(),
            ),
            Fq2::new(
                Fq::from_be_bytes(&hex_32(TWIST_Y_C0)).unwrap(),
                Fq::from_be_bytes(&hex_32(TWIST_Y_C1)).unwrap(),
            ),
        )
    }

    const TWIST_X_C0: &str = "0000000000000000000000000000000000000000000000000000000000000001";
    const TWIST_X_C1: &str = "0000000000000000000000000000000000000000000000000000000000000000";
    const TWIST_Y_C0: &str = "2869111d5381f072f8e2728fdb825a51aadd70e52c9830e9ab4b871c0531f1bb";
    const TWIST_Y_C1: &str = "0d1271953ed9ea0836846e70a1934187998c7f790cb4d7511b7f8da82de048a4";
}
