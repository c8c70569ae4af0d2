//! # zkarith-bn254
//!
//! Field, group and pairing arithmetic on the BN254 (alt_bn128) curve.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc as std;

pub mod codec;
pub mod curve;
mod error;
pub mod field;
pub mod pairing;
pub mod params;

pub use curve::{AffinePoint, Curve, G1Point, G2Point, G1, G2};
pub use error::{CurveError, CurveResult};
pub use field::{FieldElement, Fq, Fq2, Scalar};
pub use pairing::{pair, pairing_equals, pairing_product_is_identity, Gt};
pub use params::{CurveParams, RATIONAL_ENCODING_VERSION};
