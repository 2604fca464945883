use std::ops::*;

use serde::{Deserialize, Serialize};

use crate::*;

#[repr(C)]
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, Default)]
pub struct Mat2<T> {
  pub rows: [Vec2<T>; 2],
}

impl_square_matrix!(Mat2, Vec2, 2);

impl<T> Mat2<T> {
  #[rustfmt::skip]
  pub const fn new(
    m00: T, m01: T,
    m10: T, m11: T,
  ) -> Self {
    Self {
      rows: [
        Vec2::new(m00, m01),
        Vec2::new(m10, m11),
      ],
    }
  }
}

impl<T: Scalar> SquareMatrix<T> for Mat2<T> {
  const DIM: usize = 2;

  fn identity() -> Self {
    Self::one()
  }
  fn transpose(&self) -> Self {
    Self::from_fn(|r, c| self.rows[c][r])
  }
  fn entry(&self, row: usize, col: usize) -> T {
    self.rows[row][col]
  }
  fn det(&self) -> T {
    let [[a, b], [c, d]] = self.to_arrays();
    a * d - b * c
  }
  fn inverse(&self) -> MathResult<Self> {
    let det = self.det();
    if det == T::zero() {
      log::debug!("inverse of singular Mat2 requested");
      return Err(MathError::SingularMatrix);
    }
    let inv_det = T::one() / det;
    let [[a, b], [c, d]] = self.to_arrays();
    #[rustfmt::skip]
    let inv = Self::new(
       d * inv_det, -b * inv_det,
      -c * inv_det,  a * inv_det,
    );
    Ok(inv)
  }
}

impl<T: Scalar> Mat2<T> {
  /// Counter clockwise rotation of the plane.
  pub fn rotation(radians: T) -> Self {
    let (s, c) = radians.sin_cos();
    #[rustfmt::skip]
    let mat = Self::new(
      c, -s,
      s,  c,
    );
    mat
  }

  pub fn scaling(scale: impl Into<Vec2<T>>) -> Self {
    let scale = scale.into();
    #[rustfmt::skip]
    let mat = Self::new(
      scale.x,   T::zero(),
      T::zero(), scale.y,
    );
    mat
  }
}

impl<T: Copy> From<Mat3<T>> for Mat2<T> {
  /// Upper left block.
  fn from(m: Mat3<T>) -> Self {
    let [r0, r1, _] = m.rows;
    Self::from_rows([Vec2::new(r0.x, r0.y), Vec2::new(r1.x, r1.y)])
  }
}

impl<T: Copy> From<Mat4<T>> for Mat2<T> {
  fn from(m: Mat4<T>) -> Self {
    Self::from_fn(|r, c| m.rows[r][c])
  }
}
