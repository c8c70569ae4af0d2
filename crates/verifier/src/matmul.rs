//! Verification of a public matrix applied to a hidden vector.
//!
//! The vector `v` is only known through its encoding `s_j = v_j * G1`. Since
//! scalar multiplication is linear, `sum_j M[i][j] * s_j` is the encoding of
//! `(M v)_i`, which is compared against `o_i * G1` for the claimed output `o`.
use crate::{VerifyError, VerifyResult};
use bn254::{CurveParams, G1Point, Scalar};
use tracing::{debug, trace};

/// Checks claimed products `M v` against an encoded vector.
#[derive(Clone, Copy, Debug)]
pub struct MatMulVerifier<'a> {
    params: &'a CurveParams,
}

impl<'a> MatMulVerifier<'a> {
    /// Creates a verifier over the given curve parameters.
    pub fn new(params: &'a CurveParams) -> Self {
        Self { params }
    }

    /// Checks that `matrix * v == claimed` where `encoded[j] = v_j * G1`.
    ///
    /// `matrix` is row-major with `n * n` entries. Returns `Ok(false)` as soon
    /// as one row disagrees. Sizes that do not match `n` fail with
    /// [`VerifyError::DimensionMismatch`] and points off the curve with
    /// [`VerifyError::InvalidPoint`].
    #[tracing::instrument(level = "debug", skip_all, fields(n = n))]
    pub fn verify<T>(
        &self,
        matrix: &[T],
        n: usize,
        encoded: &[G1Point],
        claimed: &[T],
    ) -> VerifyResult<bool>
    where
        T: Copy + Into<Scalar>,
    {
        check_len("encoded vector", n, encoded.len())?;
        check_len("claimed output", n, claimed.len())?;
        match n.checked_mul(n) {
            Some(entries) => check_len("matrix", entries, matrix.len())?,
            // n > 0 here, and no slice holds n * n entries
            None => check_len("matrix rows", n, matrix.len() / n)?,
        }

        if n == 0 {
            return Ok(true);
        }

        for point in encoded {
            point.validate()?;
        }

        for (i, (row, output)) in matrix.chunks_exact(n).zip(claimed).enumerate() {
            let lhs: G1Point = row
                .iter()
                .zip(encoded)
                .map(|(entry, point)| point.scalar_mul(&(*entry).into()))
                .sum();
            let rhs = self.params.g1_mul_generator(&(*output).into());
            if lhs != rhs {
                debug!(row = i, "row does not match claimed output");
                return Ok(false);
            }
        }

        trace!("all rows match");
        Ok(true)
    }
}

fn check_len(what: &'static str, expected: usize, actual: usize) -> VerifyResult<()> {
    if expected != actual {
        return Err(VerifyError::DimensionMismatch {
            what,
            expected,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bn254::Fq;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use rstest::rstest;

    const MATRIX: [u64; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
    const VECTOR: [u64; 3] = [3, 6, 9];
    const OUTPUT: [u64; 3] = [42, 96, 150];

    fn verifier() -> MatMulVerifier<'static> {
        MatMulVerifier::new(CurveParams::bn254())
    }

    fn encode(values: &[u64]) -> Vec<G1Point> {
        let params = CurveParams::bn254();
        values
            .iter()
            .map(|v| params.g1_mul_generator(&Scalar::from(*v)))
            .collect()
    }

    #[test]
    fn three_by_three() {
        assert_eq!(
            verifier().verify(&MATRIX, 3, &encode(&VECTOR), &OUTPUT),
            Ok(true)
        );
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2)]
    fn rejects_altered_output(#[case] row: usize) {
        let mut output = OUTPUT;
        output[row] += 1;
        assert_eq!(
            verifier().verify(&MATRIX, 3, &encode(&VECTOR), &output),
            Ok(false)
        );
    }

    #[test]
    fn rejects_altered_vector() {
        assert_eq!(
            verifier().verify(&MATRIX, 3, &encode(&[3, 6, 10]), &OUTPUT),
            Ok(false)
        );
    }

    #[test]
    fn signed_entries() {
        // [[1, -1], [-2, 3]] * (5, 4) = (1, 2)
        assert_eq!(
            verifier().verify(&[1i64, -1, -2, 3], 2, &encode(&[5, 4]), &[1i64, 2]),
            Ok(true)
        );
        assert_eq!(
            verifier().verify(&[1i64, -1, -2, 3], 2, &encode(&[5, 4]), &[1i64, -2]),
            Ok(false)
        );
    }

    #[test]
    fn empty_is_vacuous() {
        assert_eq!(verifier().verify::<u64>(&[], 0, &[], &[]), Ok(true));
    }

    #[rstest]
    #[case::matrix(&MATRIX[..8], 3, 3, "matrix", 9, 8)]
    #[case::vector(&MATRIX, 2, 3, "encoded vector", 3, 2)]
    #[case::output(&MATRIX, 3, 2, "claimed output", 3, 2)]
    fn dimension_mismatch(
        #[case] matrix: &[u64],
        #[case] vector_len: usize,
        #[case] output_len: usize,
        #[case] what: &'static str,
        #[case] expected: usize,
        #[case] actual: usize,
    ) {
        let encoded = encode(&VECTOR[..vector_len]);
        assert_eq!(
            verifier().verify(matrix, 3, &encoded, &OUTPUT[..output_len]),
            Err(VerifyError::DimensionMismatch {
                what,
                expected,
                actual
            })
        );
    }

    #[test]
    fn overflowing_dimension() {
        assert_eq!(
            verifier().verify::<u64>(&[], usize::MAX, &[], &[]),
            Err(VerifyError::DimensionMismatch {
                what: "encoded vector",
                expected: usize::MAX,
                actual: 0,
            })
        );
        let huge = 1usize << (usize::BITS / 2);
        assert_eq!(
            verifier().verify::<u64>(&[1, 2, 3], huge, &[], &[]),
            Err(VerifyError::DimensionMismatch {
                what: "encoded vector",
                expected: huge,
                actual: 0,
            })
        );
    }

    #[test]
    fn rejects_point_off_curve() {
        let mut encoded = encode(&VECTOR);
        encoded[1] = G1Point::new_unchecked(Fq::from(1u64), Fq::from(3u64));
        assert_eq!(
            verifier().verify(&MATRIX, 3, &encoded, &OUTPUT),
            Err(VerifyError::InvalidPoint)
        );
    }

    #[test]
    fn random_products() {
        let mut rng = StdRng::seed_from_u64(0x6d61_746d);
        for n in 1..=4usize {
            let matrix: Vec<u64> = (0..n * n).map(|_| rng.random_range(0..1000)).collect();
            let vector: Vec<u64> = (0..n).map(|_| rng.random_range(0..1000)).collect();
            let output: Vec<u64> = matrix
                .chunks_exact(n)
                .map(|row| row.iter().zip(&vector).map(|(m, v)| m * v).sum())
                .collect();
            assert_eq!(
                verifier().verify(&matrix, n, &encode(&vector), &output),
                Ok(true)
            );
        }
    }
}
