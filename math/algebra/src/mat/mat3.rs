use std::ops::*;

use serde::{Deserialize, Serialize};

use crate::*;

#[repr(C)]
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, Default)]
pub struct Mat3<T> {
  pub rows: [Vec3<T>; 3],
}

impl_square_matrix!(Mat3, Vec3, 3);

impl<T> Mat3<T> {
  #[rustfmt::skip]
  pub const fn new(
    m00: T, m01: T, m02: T,
    m10: T, m11: T, m12: T,
    m20: T, m21: T, m22: T,
  ) -> Self {
    Self {
      rows: [
        Vec3::new(m00, m01, m02),
        Vec3::new(m10, m11, m12),
        Vec3::new(m20, m21, m22),
      ],
    }
  }
}

impl<T: Scalar> SquareMatrix<T> for Mat3<T> {
  const DIM: usize = 3;

  fn identity() -> Self {
    Self::one()
  }
  fn transpose(&self) -> Self {
    Self::from_fn(|r, c| self.rows[c][r])
  }
  fn entry(&self, row: usize, col: usize) -> T {
    self.rows[row][col]
  }
  /// Cofactor expansion along the first column.
  fn det(&self) -> T {
    let [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]] = self.to_arrays();
    m00 * (m11 * m22 - m12 * m21) - m10 * (m01 * m22 - m02 * m21)
      + m20 * (m01 * m12 - m02 * m11)
  }
  fn inverse(&self) -> MathResult<Self> {
    let det = self.det();
    if det == T::zero() {
      log::debug!("inverse of singular Mat3 requested");
      return Err(MathError::SingularMatrix);
    }
    let inv_det = T::one() / det;
    let [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]] = self.to_arrays();

    #[rustfmt::skip]
    let adjugate = Self::new(
      m11 * m22 - m12 * m21, m02 * m21 - m01 * m22, m01 * m12 - m02 * m11,
      m12 * m20 - m10 * m22, m00 * m22 - m02 * m20, m02 * m10 - m00 * m12,
      m10 * m21 - m11 * m20, m01 * m20 - m00 * m21, m00 * m11 - m01 * m10,
    );
    Ok(adjugate * inv_det)
  }
}

impl<T> Mul<Vec2<T>> for Mat3<T>
where
  T: Scalar,
{
  type Output = Vec2<T>;

  /// Transform a 2D point, dividing by the homogeneous coordinate.
  fn mul(self, v: Vec2<T>) -> Vec2<T> {
    let v = self * v.expand_with(T::one());
    Vec2::new(v.x, v.y) / v.z
  }
}

impl<T> Mat3<T>
where
  T: Scalar,
{
  pub fn rotation_x_cs(c: T, s: T) -> Self {
    let (m00, m01, m02) = (T::one(), T::zero(), T::zero());
    let (m10, m11, m12) = (T::zero(), c, -s);
    let (m20, m21, m22) = (T::zero(), s, c);

    #[rustfmt::skip]
    let mat = Mat3::new(
      m00, m01, m02,
      m10, m11, m12,
      m20, m21, m22,
    );
    mat
  }

  pub fn rotation_y_cs(c: T, s: T) -> Self {
    let (m00, m01, m02) = (c, T::zero(), s);
    let (m10, m11, m12) = (T::zero(), T::one(), T::zero());
    let (m20, m21, m22) = (-s, T::zero(), c);

    #[rustfmt::skip]
    let mat = Mat3::new(
      m00, m01, m02,
      m10, m11, m12,
      m20, m21, m22,
    );
    mat
  }

  pub fn rotation_z_cs(c: T, s: T) -> Self {
    let (m00, m01, m02) = (c, -s, T::zero());
    let (m10, m11, m12) = (s, c, T::zero());
    let (m20, m21, m22) = (T::zero(), T::zero(), T::one());

    #[rustfmt::skip]
    let mat = Mat3::new(
      m00, m01, m02,
      m10, m11, m12,
      m20, m21, m22,
    );
    mat
  }

  pub fn rotation_x(theta: T) -> Self {
    let (s, c) = theta.sin_cos();
    Self::rotation_x_cs(c, s)
  }

  pub fn rotation_y(theta: T) -> Self {
    let (s, c) = theta.sin_cos();
    Self::rotation_y_cs(c, s)
  }

  pub fn rotation_z(theta: T) -> Self {
    let (s, c) = theta.sin_cos();
    Self::rotation_z_cs(c, s)
  }

  /// Rotation about an arbitrary axis, the axis is normalized first.
  pub fn rotation(axis: Vec3<T>, theta: T) -> Self {
    let (s, c) = theta.sin_cos();
    let Vec3 { x, y, z } = axis.normalize();

    let t = T::one() - c;
    let tx = t * x;
    let ty = t * y;
    let tz = t * z;

    let m00 = tx * x + c;
    let m01 = tx * y - s * z;
    let m02 = tx * z + s * y;

    let m10 = tx * y + s * z;
    let m11 = ty * y + c;
    let m12 = ty * z - s * x;

    let m20 = tx * z - s * y;
    let m21 = ty * z + s * x;
    let m22 = tz * z + c;

    #[rustfmt::skip]
    let mat = Mat3::new(
      m00, m01, m02,
      m10, m11, m12,
      m20, m21, m22,
    );
    mat
  }

  /// Euler angles in radians, applied about x first, then y, then z.
  pub fn rotation_euler(euler: Vec3<T>) -> Self {
    Self::rotation_z(euler.z) * Self::rotation_y(euler.y) * Self::rotation_x(euler.x)
  }

  pub fn scaling(scale: impl Into<Vec3<T>>) -> Self {
    let Vec3 { x, y, z } = scale.into();
    let (m00, m01, m02) = (x, T::zero(), T::zero());
    let (m10, m11, m12) = (T::zero(), y, T::zero());
    let (m20, m21, m22) = (T::zero(), T::zero(), z);

    #[rustfmt::skip]
    let mat = Mat3::new(
      m00, m01, m02,
      m10, m11, m12,
      m20, m21, m22,
    );
    mat
  }

  /// Homogeneous 2D scale.
  pub fn scale_2d(scale: impl Into<Vec2<T>>) -> Self {
    let Vec2 { x, y } = scale.into();
    Self::scaling(Vec3::new(x, y, T::one()))
  }

  /// Homogeneous 2D translation.
  pub fn translate_2d(translate: impl Into<Vec2<T>>) -> Self {
    let Vec2 { x, y } = translate.into();
    let (m00, m01, m02) = (T::one(), T::zero(), x);
    let (m10, m11, m12) = (T::zero(), T::one(), y);
    let (m20, m21, m22) = (T::zero(), T::zero(), T::one());

    #[rustfmt::skip]
    let mat = Mat3::new(
      m00, m01, m02,
      m10, m11, m12,
      m20, m21, m22,
    );
    mat
  }

  /// Homogeneous 2D rotation.
  pub fn rotation_2d(theta: T) -> Self {
    Self::rotation_z(theta)
  }
}

impl<T: Scalar> From<Quat<T>> for Mat3<T> {
  /// Rotation matrix of a unit quaternion.
  fn from(q: Quat<T>) -> Self {
    let (xs, ys, zs) = (q.x * T::two(), q.y * T::two(), q.z * T::two());

    let (xx, xy, xz) = (q.x * xs, q.x * ys, q.x * zs);
    let (yy, yz, zz) = (q.y * ys, q.y * zs, q.z * zs);
    let (wx, wy, wz) = (q.w * xs, q.w * ys, q.w * zs);

    #[rustfmt::skip]
    let mat = Self::new(
      T::one() - (yy + zz), xy - wz,              xz + wy,
      xy + wz,              T::one() - (xx + zz), yz - wx,
      xz - wy,              yz + wx,              T::one() - (xx + yy),
    );
    mat
  }
}

impl<T: Component> From<Mat2<T>> for Mat3<T> {
  /// Embed in the upper left block, one on the remaining diagonal.
  fn from(m: Mat2<T>) -> Self {
    Self::from_fn(|r, c| match (r, c) {
      (0..=1, 0..=1) => m.rows[r][c],
      _ if r == c => T::one(),
      _ => T::zero(),
    })
  }
}

impl<T: Copy> From<Mat4<T>> for Mat3<T> {
  /// Upper left block.
  fn from(m: Mat4<T>) -> Self {
    Self::from_fn(|r, c| m.rows[r][c])
  }
}

#[cfg(test)]
mod tests {
  use crate::*;

  #[test]
  fn determinant_and_inverse() {
    #[rustfmt::skip]
    let m = Mat3::new(
      2_f32, 0., 1.,
      1.,    3., 2.,
      1.,    1., 2.,
    );
    assert_eq!(m.det(), 6.);
    let inv = m.inverse().unwrap();
    assert_eq!(m * inv, Mat3::identity());
    assert_eq!(inv * m, Mat3::identity());

    #[rustfmt::skip]
    let singular = Mat3::new(
      1_f32, 2., 3.,
      4.,    5., 6.,
      7.,    8., 9.,
    );
    assert_eq!(singular.det(), 0.);
    assert_eq!(singular.inverse(), Err(MathError::SingularMatrix));
  }

  #[test]
  fn rotations() {
    let half_pi = scalar::PI_OVER_2;
    assert_eq!(Mat3::rotation_z(half_pi) * Vec3::unit_x(), Vec3::unit_y());
    assert_eq!(Mat3::rotation_x(half_pi) * Vec3::unit_y(), Vec3::unit_z());
    assert_eq!(Mat3::rotation_y(half_pi) * Vec3::unit_z(), Vec3::unit_x());

    let axis = vec3(1_f32, 2., 3.).normalize();
    let by_axis = Mat3::rotation(axis, 0.7);
    assert_eq!(by_axis * axis, axis);
    approx::assert_abs_diff_eq!(by_axis.det(), 1., epsilon = 1e-6);
    assert_eq!(Mat3::rotation(Vec3::unit_z(), 0.7), Mat3::rotation_z(0.7));

    let euler = vec3(0.1_f32, 0.2, 0.3);
    let expect = Mat3::rotation_z(0.3) * Mat3::rotation_y(0.2) * Mat3::rotation_x(0.1);
    assert_eq!(Mat3::rotation_euler(euler), expect);
  }

  #[test]
  fn homogeneous_2d() {
    let m = Mat3::translate_2d(vec2(1_f32, 2.)) * Mat3::scale_2d(vec2(3_f32, -2.));
    assert_eq!(m * vec2(1., 1.), vec2(4., 0.));
    assert_eq!(Mat3::rotation_2d(scalar::PI_OVER_2) * vec2(1_f32, 0.), vec2(0., 1.));
  }

  #[test]
  fn block_conversions() {
    let m2 = Mat2::new(1_f32, 2., 3., 4.);
    let m3 = Mat3::from(m2);
    assert_eq!(m3, Mat3::new(1., 2., 0., 3., 4., 0., 0., 0., 1.));
    assert_eq!(Mat2::from(m3), m2);
  }

  #[test]
  fn compare_with_cgmath() {
    use cgmath::{Rad, SquareMatrix as _};
    let axis = vec3(0.3_f32, -0.5, 0.8).normalize();
    let ours = Mat3::rotation(axis, 1.1);
    let theirs = cgmath::Matrix3::from_axis_angle(cgmath::vec3(axis.x, axis.y, axis.z), Rad(1.1));
    // cgmath stores columns, which are our rows transposed
    let columns: [[f32; 3]; 3] = theirs.into();
    assert_eq!(ours.transpose(), Mat3::from(columns));
    approx::assert_abs_diff_eq!(ours.det(), theirs.determinant(), epsilon = 1e-6);
  }
}
