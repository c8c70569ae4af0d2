//! Rationals hidden behind G1 points, and verification of their sum.
//!
//! Encoding version 1 ([`bn254::RATIONAL_ENCODING_VERSION`]) maps `n / d` to
//! `(n * d^-1 mod r) * G1`. The map is additive: `encode(a/b) + encode(c/d)`
//! equals `encode((ad + bc) / bd)`, so a sum can be checked on the points
//! alone without ever recovering `a/b` or `c/d`.
use crate::{VerifyError, VerifyResult};
use bn254::{CurveParams, G1Point, Scalar};
use core::fmt;
use tracing::{debug, trace};

/// Exclusive bound on numerator and denominator magnitudes.
///
/// Below it `ad - bc` cannot wrap around `r`, so distinct reduced rationals
/// always encode to distinct points.
pub const RATIONAL_BOUND: u128 = 1 << 126;

/// A rational number `numerator / denominator` with a non-zero denominator.
///
/// Deserialization goes through [`Rational::new`] and fails on the same input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRational"))]
pub struct Rational {
    numerator: i128,
    denominator: i128,
}

impl Rational {
    /// Creates `numerator / denominator`.
    ///
    /// Fails with [`VerifyError::InvalidRational`] when the denominator is zero
    /// or either magnitude is not below [`RATIONAL_BOUND`].
    pub fn new(numerator: i128, denominator: i128) -> VerifyResult<Self> {
        let rational = Self {
            numerator,
            denominator,
        };
        rational.check()?;
        Ok(rational)
    }

    fn check(&self) -> VerifyResult<()> {
        if self.denominator == 0
            || self.numerator.unsigned_abs() >= RATIONAL_BOUND
            || self.denominator.unsigned_abs() >= RATIONAL_BOUND
        {
            return Err(VerifyError::InvalidRational);
        }
        Ok(())
    }

    /// Numerator as given.
    #[inline]
    pub fn numerator(&self) -> i128 {
        self.numerator
    }

    /// Denominator as given.
    #[inline]
    pub fn denominator(&self) -> i128 {
        self.denominator
    }

    /// `numerator * denominator^-1` in the scalar field.
    pub fn to_scalar(&self) -> VerifyResult<Scalar> {
        self.check()?;
        Ok(Scalar::from(self.numerator).div(&Scalar::from(self.denominator))?)
    }

    /// Lowest terms with a positive denominator.
    pub fn reduced(&self) -> Self {
        let divisor = gcd(self.numerator.unsigned_abs(), self.denominator.unsigned_abs());
        // magnitudes are below 2^126, so the casts and negation cannot overflow
        let mut numerator = (self.numerator.unsigned_abs() / divisor) as i128;
        let denominator = (self.denominator.unsigned_abs() / divisor) as i128;
        if (self.numerator < 0) != (self.denominator < 0) {
            numerator = -numerator;
        }
        Self {
            numerator,
            denominator,
        }
    }

    /// `a/b + c/d = (ad + bc) / bd`, without reducing.
    ///
    /// Returns `None` if the result leaves the supported range.
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        let numerator = self
            .numerator
            .checked_mul(other.denominator)?
            .checked_add(other.numerator.checked_mul(self.denominator)?)?;
        let denominator = self.denominator.checked_mul(other.denominator)?;
        Self::new(numerator, denominator).ok()
    }

    /// Whether both rationals denote the same number.
    pub fn same_value(&self, other: &Self) -> bool {
        self.reduced() == other.reduced()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRational {
    numerator: i128,
    denominator: i128,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRational> for Rational {
    type Error = VerifyError;

    fn try_from(raw: RawRational) -> VerifyResult<Self> {
        Self::new(raw.numerator, raw.denominator)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Encodes rationals as G1 points and checks sums of encoded rationals.
#[derive(Clone, Copy, Debug)]
pub struct RationalEncoder<'a> {
    params: &'a CurveParams,
}

impl<'a> RationalEncoder<'a> {
    /// Creates an encoder over the given curve parameters.
    pub fn new(params: &'a CurveParams) -> Self {
        Self { params }
    }

    /// `(n * d^-1) * G1`.
    pub fn encode(&self, rational: &Rational) -> VerifyResult<G1Point> {
        Ok(self.params.g1_mul_generator(&rational.to_scalar()?))
    }

    /// Shorthand for [`Rational::new`] followed by [`RationalEncoder::encode`].
    pub fn encode_parts(&self, numerator: i128, denominator: i128) -> VerifyResult<G1Point> {
        self.encode(&Rational::new(numerator, denominator)?)
    }

    /// Checks that `a + b` is the encoding of `numerator / denominator`.
    ///
    /// `a` and `b` are compared through the group law only; their hidden
    /// rationals are never recovered. A false claim returns `Ok(false)`;
    /// points off the curve fail with [`VerifyError::InvalidPoint`] and an
    /// unusable claimed rational with [`VerifyError::InvalidRational`].
    pub fn verify_add(
        &self,
        a: &G1Point,
        b: &G1Point,
        numerator: i128,
        denominator: i128,
    ) -> VerifyResult<bool> {
        a.validate()?;
        b.validate()?;
        let claimed = Rational::new(numerator, denominator)?;

        let sum = *a + *b;
        if sum != self.encode(&claimed)? {
            debug!(%claimed, "encoded sum does not match claimed rational");
            return Ok(false);
        }
        trace!(%claimed, "rational sum verified");
        Ok(true)
    }
}
