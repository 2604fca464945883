//! Linear algebra for interactive graphics and gameplay code.
//!
//! Fixed size vectors, square matrices and quaternions follow the column vector
//! convention and store their matrix entries row by row. [`Matrix`] covers the
//! variable size case and solves linear systems by Gauss-Jordan elimination.
//! The [`scalar`] and [`easing`] modules hold the free standing number helpers.

#[macro_use]
mod macros;

mod angle;
pub mod easing;
mod error;
mod mat;
mod projection;
mod quat;
pub mod scalar;
mod vec;

pub use angle::*;
pub use easing::Easing;
pub use error::*;
pub use mat::*;
pub use projection::*;
pub use quat::*;
pub use scalar::{Component, Scalar};
pub use vec::*;

pub use num_traits::{Float, FloatConst, One, Zero};
