//! Big-endian byte encodings of field elements, points and scalars, laid
//! out as the alt_bn128 precompiles (EIP-196, EIP-197) expect them.
//!
//! * field element: 32 bytes, must be below `p`
//! * G1 point: `x || y`, 64 bytes, `(0, 0)` is the point at infinity
//! * G2 point: `x.c1 || x.c0 || y.c1 || y.c0`, 128 bytes
//! * scalar: 32 bytes, reduced modulo `r`
//!
//! Readers reject input of the wrong length with
//! [`CurveError::InvalidLength`].
use crate::{
    curve::{G1Point, G2Point},
    field::{Fq, Fq2, Scalar, FQ_LEN, SCALAR_LEN},
    CurveError, CurveResult,
};

/// Quadratic extension field element length.
pub const FQ2_LEN: usize = 2 * FQ_LEN;

/// G1 point length.
pub const G1_LEN: usize = 2 * FQ_LEN;

/// G2 point length.
pub const G2_LEN: usize = 2 * FQ2_LEN;

#[inline]
fn check_len(input: &[u8], expected: usize) -> CurveResult<()> {
    if input.len() != expected {
        return Err(CurveError::InvalidLength {
            expected,
            actual: input.len(),
        });
    }
    Ok(())
}

/// Reads a single `Fq` field element from exactly 32 bytes.
#[inline]
pub fn read_fq(input: &[u8]) -> CurveResult<Fq> {
    check_len(input, FQ_LEN)?;
    let mut bytes = [0u8; FQ_LEN];
    bytes.copy_from_slice(input);
    Fq::from_be_bytes(&bytes)
}

/// Reads an `Fq2` element from exactly 64 bytes.
///
/// The imaginary part comes first: for `x = c0 + c1 * i` the input is
/// `c1 || c0`.
#[inline]
pub fn read_fq2(input: &[u8]) -> CurveResult<Fq2> {
    check_len(input, FQ2_LEN)?;
    let c1 = read_fq(&input[..FQ_LEN])?;
    let c0 = read_fq(&input[FQ_LEN..])?;
    Ok(Fq2::new(c0, c1))
}

/// Reads a G1 point from exactly 64 bytes and checks that it is on the curve.
#[inline]
pub fn read_g1_point(input: &[u8]) -> CurveResult<G1Point> {
    check_len(input, G1_LEN)?;
    let px = read_fq(&input[..FQ_LEN])?;
    let py = read_fq(&input[FQ_LEN..])?;
    G1Point::new(px, py)
}

/// Reads a G2 point from exactly 128 bytes and checks that it is on the
/// twist and in the prime-order subgroup.
#[inline]
pub fn read_g2_point(input: &[u8]) -> CurveResult<G2Point> {
    check_len(input, G2_LEN)?;
    let x = read_fq2(&input[..FQ2_LEN])?;
    let y = read_fq2(&input[FQ2_LEN..])?;
    G2Point::new(x, y)
}

/// Reads a scalar from exactly 32 bytes. The value does not need to be
/// canonical.
#[inline]
pub fn read_scalar(input: &[u8]) -> CurveResult<Scalar> {
    check_len(input, SCALAR_LEN)?;
    Ok(Scalar::from_be_bytes_mod_order(input))
}

/// Encodes a G1 point. The point at infinity encodes as all zeroes.
pub fn encode_g1_point(point: &G1Point) -> [u8; G1_LEN] {
    let mut output = [0u8; G1_LEN];
    let Some((x, y)) = point.xy() else {
        return output;
    };
    output[..FQ_LEN].copy_from_slice(&x.to_be_bytes());
    output[FQ_LEN..].copy_from_slice(&y.to_be_bytes());
    output
}

/// Encodes a G2 point. The point at infinity encodes as all zeroes.
pub fn encode_g2_point(point: &G2Point) -> [u8; G2_LEN] {
    let mut output = [0u8; G2_LEN];
    let Some((x, y)) = point.xy() else {
        return output;
    };
    for (i, coordinate) in [x.c1(), x.c0(), y.c1(), y.c0()].iter().enumerate() {
        output[i * FQ_LEN..(i + 1) * FQ_LEN].copy_from_slice(&coordinate.to_be_bytes());
    }
    output
}
