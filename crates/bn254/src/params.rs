//! Process-wide BN254 parameters.
use crate::{
    curve::{G1Point, G2Point},
    field::{Fq, Scalar, FQ_LEN},
};
use ark_ec::AffineRepr;
use once_cell::race::OnceBox;
use std::boxed::Box;

/// Version of the mapping from rationals to G1 points.
///
/// Version 1 maps `n / d` to `(n * d^-1 mod r) * G1`.
pub const RATIONAL_ENCODING_VERSION: u8 = 1;

/// Immutable curve parameters shared by every verifier.
///
/// Obtain the BN254 instance with [`CurveParams::bn254`]; it is built on first
/// use and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveParams {
    g1_generator: G1Point,
    g2_generator: G2Point,
    base_modulus: [u8; FQ_LEN],
    scalar_modulus: [u8; FQ_LEN],
    rational_encoding_version: u8,
}

impl CurveParams {
    /// Returns the BN254 (alt_bn128) parameters.
    pub fn bn254() -> &'static Self {
        static INSTANCE: OnceBox<CurveParams> = OnceBox::new();
        INSTANCE.get_or_init(|| Box::new(Self::new_bn254()))
    }

    fn new_bn254() -> Self {
        Self {
            g1_generator: ark_bn254::G1Affine::generator().into(),
            g2_generator: ark_bn254::G2Affine::generator().into(),
            base_modulus: Fq::modulus_be_bytes(),
            scalar_modulus: Scalar::modulus_be_bytes(),
            rational_encoding_version: RATIONAL_ENCODING_VERSION,
        }
    }

    /// Generator `(1, 2)` of G1.
    #[inline]
    pub fn g1_generator(&self) -> &G1Point {
        &self.g1_generator
    }

    /// Generator of G2.
    #[inline]
    pub fn g2_generator(&self) -> &G2Point {
        &self.g2_generator
    }

    /// `k * G1`.
    #[inline]
    pub fn g1_mul_generator(&self, k: &Scalar) -> G1Point {
        self.g1_generator.scalar_mul(k)
    }

    /// `k * G2`.
    #[inline]
    pub fn g2_mul_generator(&self, k: &Scalar) -> G2Point {
        self.g2_generator.scalar_mul(k)
    }

    /// Big-endian base field modulus `p`.
    #[inline]
    pub fn base_modulus(&self) -> &[u8; FQ_LEN] {
        &self.base_modulus
    }

    /// Big-endian group order `r`, the scalar field modulus.
    #[inline]
    pub fn group_order(&self) -> &[u8; FQ_LEN] {
        &self.scalar_modulus
    }

    /// Version of the rational encoding, see [`RATIONAL_ENCODING_VERSION`].
    #[inline]
    pub fn rational_encoding_version(&self) -> u8 {
        self.rational_encoding_version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialised_once() {
        let a = CurveParams::bn254();
        let b = CurveParams::bn254();
        assert!(core::ptr::eq(a, b));
        assert_eq!(a.rational_encoding_version(), RATIONAL_ENCODING_VERSION);
    }

    #[test]
    fn generators() {
        let params = CurveParams::bn254();
        assert_eq!(
            params.g1_generator().xy(),
            Some((Fq::from(1u64), Fq::from(2u64)))
        );
        assert!(params.g2_generator().is_on_curve());
        assert_eq!(params.g1_mul_generator(&Scalar::one()), *params.g1_generator());
        assert!(params.g2_mul_generator(&Scalar::zero()).is_identity());
    }

    #[test]
    fn moduli() {
        let params = CurveParams::bn254();
        assert_eq!(
            hex::encode(params.base_modulus()),
            "30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47"
        );
        assert_eq!(
            hex::encode(params.group_order()),
            "30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001"
        );
    }
}
