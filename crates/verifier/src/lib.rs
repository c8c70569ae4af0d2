//! # zkarith-verifier
//!
//! Checks claims about values hidden behind BN254 points: sums of encoded
//! rationals, matrix products over an encoded vector, and pairing equations.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc as std;

mod error;
pub mod matmul;
pub mod pairing_check;
pub mod rational;

pub use error::{VerifyError, VerifyResult};
pub use matmul::MatMulVerifier;
pub use pairing_check::{
    LinearPairingEquation, PairingCheckInput, PairingChecker, PairingEquation,
    EQUATION_V1_ALPHA, EQUATION_V1_BETA, EQUATION_V1_DELTA, EQUATION_V1_GAMMA,
};
pub use rational::{Rational, RationalEncoder, RATIONAL_BOUND};
