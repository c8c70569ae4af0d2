//! Modular arithmetic over the BN254 base field, its quadratic extension and
//! the scalar field.
//!
//! Every value is a [`FieldElement`] tagged with the field it belongs to, so
//! mixing a base-field coordinate with a scalar is rejected by the compiler.
use crate::{CurveError, CurveResult};
use ark_ff::{BigInteger, Field, PrimeField};
use core::{
    fmt,
    ops::{Add, Mul, Neg, Sub},
};

/// Length of a big-endian encoded prime field element.
pub const FQ_LEN: usize = 32;

/// Length of a big-endian encoded scalar.
pub const SCALAR_LEN: usize = 32;

/// Element of the base field `Fq`, the field of G1 coordinates.
pub type Fq = FieldElement<ark_bn254::Fq>;

/// Element of `Fq2 = Fq[i] / (i^2 + 1)`, the field of G2 coordinates.
pub type Fq2 = FieldElement<ark_bn254::Fq2>;

/// Element of the scalar field `Fr`, whose modulus is the order of G1 and G2.
pub type Scalar = FieldElement<ark_bn254::Fr>;

/// A field element in canonical form.
///
/// The wrapped arkworks type keeps the value reduced, so two elements are
/// equal exactly when their canonical representatives are.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FieldElement<F>(F);

#[allow(clippy::should_implement_trait)]
impl<F: Field> FieldElement<F> {
    /// Wraps an arkworks field element.
    #[inline]
    pub const fn from_inner(inner: F) -> Self {
        Self(inner)
    }

    /// Returns the wrapped arkworks field element.
    #[inline]
    pub fn into_inner(self) -> F {
        self.0
    }

    /// Additive identity.
    #[inline]
    pub fn zero() -> Self {
        Self(F::zero())
    }

    /// Multiplicative identity.
    #[inline]
    pub fn one() -> Self {
        Self(F::one())
    }

    /// Returns `true` for the additive identity.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// `self + rhs`.
    #[inline]
    pub fn add(&self, rhs: &Self) -> Self {
        Self(self.0 + rhs.0)
    }

    /// `self - rhs`.
    #[inline]
    pub fn sub(&self, rhs: &Self) -> Self {
        Self(self.0 - rhs.0)
    }

    /// `self * rhs`.
    #[inline]
    pub fn mul(&self, rhs: &Self) -> Self {
        Self(self.0 * rhs.0)
    }

    /// `-self`.
    #[inline]
    pub fn neg(&self) -> Self {
        Self(-self.0)
    }

    /// `2 * self`.
    #[inline]
    pub fn double(&self) -> Self {
        Self(self.0 + self.0)
    }

    /// `self * self`.
    #[inline]
    pub fn square(&self) -> Self {
        Self(self.0.square())
    }

    /// Multiplicative inverse.
    ///
    /// Fails with [`CurveError::DivisionByZero`] for zero.
    #[inline]
    pub fn inverse(&self) -> CurveResult<Self> {
        self.0
            .inverse()
            .map(Self)
            .ok_or(CurveError::DivisionByZero)
    }

    /// `self / rhs`, failing when `rhs` is zero.
    #[inline]
    pub fn div(&self, rhs: &Self) -> CurveResult<Self> {
        Ok(self.mul(&rhs.inverse()?))
    }
}

impl<F: PrimeField> FieldElement<F> {
    /// Reduces big-endian bytes of any length modulo the field prime.
    #[inline]
    pub fn from_be_bytes_mod_order(bytes: &[u8]) -> Self {
        Self(F::from_be_bytes_mod_order(bytes))
    }

    /// Parses a canonical big-endian encoding.
    ///
    /// Values not below the modulus are rejected with
    /// [`CurveError::NonCanonicalFieldElement`].
    pub fn from_be_bytes(bytes: &[u8; FQ_LEN]) -> CurveResult<Self> {
        let element = Self::from_be_bytes_mod_order(bytes);
        if element.to_be_bytes() != *bytes {
            return Err(CurveError::NonCanonicalFieldElement);
        }
        Ok(element)
    }

    /// Canonical 32-byte big-endian encoding.
    pub fn to_be_bytes(&self) -> [u8; FQ_LEN] {
        let bytes = self.0.into_bigint().to_bytes_be();
        let mut out = [0u8; FQ_LEN];
        out[FQ_LEN - bytes.len()..].copy_from_slice(&bytes);
        out
    }

    /// Big-endian bytes of the field modulus.
    pub fn modulus_be_bytes() -> [u8; FQ_LEN] {
        let bytes = F::MODULUS.to_bytes_be();
        let mut out = [0u8; FQ_LEN];
        out[FQ_LEN - bytes.len()..].copy_from_slice(&bytes);
        out
    }

    /// Little-endian 64-bit limbs of the canonical representative.
    pub fn to_limbs(&self) -> F::BigInt {
        self.0.into_bigint()
    }
}

impl Fq2 {
    /// Builds `c0 + c1 * i`.
    #[inline]
    pub fn new(c0: Fq, c1: Fq) -> Self {
        Self(ark_bn254::Fq2::new(c0.0, c1.0))
    }

    /// Real part.
    #[inline]
    pub fn c0(&self) -> Fq {
        FieldElement(self.0.c0)
    }

    /// Imaginary part.
    #[inline]
    pub fn c1(&self) -> Fq {
        FieldElement(self.0.c1)
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl<F: PrimeField> From<$t> for FieldElement<F> {
                #[inline]
                fn from(value: $t) -> Self {
                    Self(F::from(value))
                }
            }
        )*
    };
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl<F: PrimeField> From<$t> for FieldElement<F> {
                /// Negative values map to `modulus - |value|`.
                #[inline]
                fn from(value: $t) -> Self {
                    let magnitude = F::from(value.unsigned_abs());
                    if value < 0 {
                        Self(-magnitude)
                    } else {
                        Self(magnitude)
                    }
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, u128);
impl_from_signed!(i8, i16, i32, i64, i128);

impl<F: Field> Add for FieldElement<F> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        FieldElement::add(&self, &rhs)
    }
}

impl<F: Field> Sub for FieldElement<F> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        FieldElement::sub(&self, &rhs)
    }
}

impl<F: Field> Mul for FieldElement<F> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        FieldElement::mul(&self, &rhs)
    }
}

impl<F: Field> Neg for FieldElement<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        FieldElement::neg(&self)
    }
}

impl<F: Field> fmt::Debug for FieldElement<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<F: Field> fmt::Display for FieldElement<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
