use std::ops::*;

use serde::{Deserialize, Serialize};

use crate::*;

#[repr(C)]
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, Default)]
pub struct Mat4<T> {
  pub rows: [Vec4<T>; 4],
}

impl_square_matrix!(Mat4, Vec4, 4);

impl<T> Mat4<T> {
  #[rustfmt::skip]
  pub const fn new(
    m00: T, m01: T, m02: T, m03: T,
    m10: T, m11: T, m12: T, m13: T,
    m20: T, m21: T, m22: T, m23: T,
    m30: T, m31: T, m32: T, m33: T,
  ) -> Self {
    Self {
      rows: [
        Vec4::new(m00, m01, m02, m03),
        Vec4::new(m10, m11, m12, m13),
        Vec4::new(m20, m21, m22, m23),
        Vec4::new(m30, m31, m32, m33),
      ],
    }
  }
}

impl<T: Copy> Mat4<T> {
  /// The 3x3 matrix left after removing `row` and `col`.
  pub fn minor(&self, row: usize, col: usize) -> Mat3<T> {
    let skip = |i: usize, removed: usize| if i >= removed { i + 1 } else { i };
    Mat3::from_fn(|r, c| self.rows[skip(r, row)][skip(c, col)])
  }
}

impl<T: Scalar> SquareMatrix<T> for Mat4<T> {
  const DIM: usize = 4;

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
    (0..4).fold(T::zero(), |acc, i| {
      let term = self.rows[i].x * self.minor(i, 0).det();
      if i % 2 == 0 {
        acc + term
      } else {
        acc - term
      }
    })
  }
  fn inverse(&self) -> MathResult<Self> {
    if self.det() == T::zero() {
      log::debug!("inverse of singular Mat4 requested");
      return Err(MathError::SingularMatrix);
    }

    #[rustfmt::skip]
    let [
      [m00, m01, m02, m03],
      [m10, m11, m12, m13],
      [m20, m21, m22, m23],
      [m30, m31, m32, m33],
    ] = self.to_arrays();

    // 2x2 sub determinants of the lower two rows
    let d2323 = m22 * m33 - m23 * m32;
    let d1323 = m21 * m33 - m23 * m31;
    let d1223 = m21 * m32 - m22 * m31;
    let d0323 = m20 * m33 - m23 * m30;
    let d0223 = m20 * m32 - m22 * m30;
    let d0123 = m20 * m31 - m21 * m30;

    let c00 = m11 * d2323 - m12 * d1323 + m13 * d1223;
    let c01 = -(m10 * d2323 - m12 * d0323 + m13 * d0223);
    let c02 = m10 * d1323 - m11 * d0323 + m13 * d0123;
    let c03 = -(m10 * d1223 - m11 * d0223 + m12 * d0123);
    let inv_det = T::one() / (m00 * c00 + m01 * c01 + m02 * c02 + m03 * c03);

    let r00 = c00 * inv_det;
    let r10 = c01 * inv_det;
    let r20 = c02 * inv_det;
    let r30 = c03 * inv_det;

    let r01 = -(m01 * d2323 - m02 * d1323 + m03 * d1223) * inv_det;
    let r11 = (m00 * d2323 - m02 * d0323 + m03 * d0223) * inv_det;
    let r21 = -(m00 * d1323 - m01 * d0323 + m03 * d0123) * inv_det;
    let r31 = (m00 * d1223 - m01 * d0223 + m02 * d0123) * inv_det;

    // 2x2 sub determinants mixing rows one and three
    let d2313 = m12 * m33 - m13 * m32;
    let d1313 = m11 * m33 - m13 * m31;
    let d1213 = m11 * m32 - m12 * m31;
    let d0313 = m10 * m33 - m13 * m30;
    let d0213 = m10 * m32 - m12 * m30;
    let d0113 = m10 * m31 - m11 * m30;

    let r02 = (m01 * d2313 - m02 * d1313 + m03 * d1213) * inv_det;
    let r12 = -(m00 * d2313 - m02 * d0313 + m03 * d0213) * inv_det;
    let r22 = (m00 * d1313 - m01 * d0313 + m03 * d0113) * inv_det;
    let r32 = -(m00 * d1213 - m01 * d0213 + m02 * d0113) * inv_det;

    // 2x2 sub determinants of the middle two rows
    let d2312 = m12 * m23 - m13 * m22;
    let d1312 = m11 * m23 - m13 * m21;
    let d1212 = m11 * m22 - m12 * m21;
    let d0312 = m10 * m23 - m13 * m20;
    let d0212 = m10 * m22 - m12 * m20;
    let d0112 = m10 * m21 - m11 * m20;

    let r03 = -(m01 * d2312 - m02 * d1312 + m03 * d1212) * inv_det;
    let r13 = (m00 * d2312 - m02 * d0312 + m03 * d0212) * inv_det;
    let r23 = -(m00 * d1312 - m01 * d0312 + m03 * d0112) * inv_det;
    let r33 = (m00 * d1212 - m01 * d0212 + m02 * d0112) * inv_det;

    #[rustfmt::skip]
    let inv = Self::new(
      r00, r01, r02, r03,
      r10, r11, r12, r13,
      r20, r21, r22, r23,
      r30, r31, r32, r33,
    );
    Ok(inv)
  }
}

impl<T: Scalar> Mul<Vec3<T>> for Mat4<T> {
  type Output = Vec3<T>;

  /// Transform a point, dividing by the homogeneous coordinate.
  fn mul(self, v: Vec3<T>) -> Vec3<T> {
    let v = self * v.expand_with_one();
    v.xyz() / v.w
  }
}

impl<T: Scalar> Mat4<T> {
  /// Transform a direction, translation and projection are ignored.
  pub fn transform_direction(&self, v: Vec3<T>) -> Vec3<T> {
    Mat3::from(*self) * v
  }

  pub fn rotation_x_cs(c: T, s: T) -> Self {
    Mat3::rotation_x_cs(c, s).into()
  }

  pub fn rotation_y_cs(c: T, s: T) -> Self {
    Mat3::rotation_y_cs(c, s).into()
  }

  pub fn rotation_z_cs(c: T, s: T) -> Self {
    Mat3::rotation_z_cs(c, s).into()
  }

  pub fn rotation_x(theta: T) -> Self {
    Mat3::rotation_x(theta).into()
  }

  pub fn rotation_y(theta: T) -> Self {
    Mat3::rotation_y(theta).into()
  }

  pub fn rotation_z(theta: T) -> Self {
    Mat3::rotation_z(theta).into()
  }

  pub fn rotation(axis: Vec3<T>, theta: T) -> Self {
    Mat3::rotation(axis, theta).into()
  }

  pub fn rotation_euler(euler: Vec3<T>) -> Self {
    Mat3::rotation_euler(euler).into()
  }

  pub fn scaling(scale: impl Into<Vec3<T>>) -> Self {
    Mat3::scaling(scale).into()
  }

  pub fn translation(translate: impl Into<Vec3<T>>) -> Self {
    let Vec3 { x, y, z } = translate.into();
    let (m00, m01, m02, m03) = (T::one(), T::zero(), T::zero(), x);
    let (m10, m11, m12, m13) = (T::zero(), T::one(), T::zero(), y);
    let (m20, m21, m22, m23) = (T::zero(), T::zero(), T::one(), z);
    let (m30, m31, m32, m33) = (T::zero(), T::zero(), T::zero(), T::one());

    #[rustfmt::skip]
    let mat = Mat4::new(
      m00, m01, m02, m03,
      m10, m11, m12, m13,
      m20, m21, m22, m23,
      m30, m31, m32, m33,
    );
    mat
  }

  /// Translation * rotation * scaling, so scale applies first.
  pub fn trs_with_rotation(translation: Vec3<T>, rotation: Self, scale: Vec3<T>) -> Self {
    Self::translation(translation) * rotation * Self::scaling(scale)
  }

  /// See [`Mat4::trs_with_rotation`], rotation given as euler angles.
  pub fn trs(translation: Vec3<T>, euler: Vec3<T>, scale: Vec3<T>) -> Self {
    Self::trs_with_rotation(translation, Self::rotation_euler(euler), scale)
  }

  pub fn trs_axis_angle(translation: Vec3<T>, axis: Vec3<T>, theta: T, scale: Vec3<T>) -> Self {
    Self::trs_with_rotation(translation, Self::rotation(axis, theta), scale)
  }

  pub fn trs_quat(translation: Vec3<T>, rotation: Quat<T>, scale: Vec3<T>) -> Self {
    Self::trs_with_rotation(translation, rotation.into(), scale)
  }

  /// View matrix looking from `eye` toward `center`, the camera looks down
  /// its local -z axis with `up` roughly along +y.
  pub fn look_at(eye: Vec3<T>, center: Vec3<T>, up: Vec3<T>) -> Self {
    let f = (center - eye).normalize();
    let s = f.cross(up).normalize();
    let u = s.cross(f);

    #[rustfmt::skip]
    let mat = Mat4::new(
       s.x,  s.y,  s.z, -s.dot(eye),
       u.x,  u.y,  u.z, -u.dot(eye),
      -f.x, -f.y, -f.z,  f.dot(eye),
      T::zero(), T::zero(), T::zero(), T::one(),
    );
    mat
  }

  pub fn position(&self) -> Vec3<T> {
    Vec3::new(self.rows[0].w, self.rows[1].w, self.rows[2].w)
  }
}

impl<T: Component> From<Mat2<T>> for Mat4<T> {
  fn from(m: Mat2<T>) -> Self {
    Self::from_fn(|r, c| match (r, c) {
      (0..=1, 0..=1) => m.rows[r][c],
      _ if r == c => T::one(),
      _ => T::zero(),
    })
  }
}

impl<T: Component> From<Mat3<T>> for Mat4<T> {
  /// Embed in the upper left block, one on the remaining diagonal.
  fn from(m: Mat3<T>) -> Self {
    Self::from_fn(|r, c| match (r, c) {
      (0..=2, 0..=2) => m.rows[r][c],
      _ if r == c => T::one(),
      _ => T::zero(),
    })
  }
}

impl<T: Scalar> From<Quat<T>> for Mat4<T> {
  fn from(q: Quat<T>) -> Self {
    Mat3::from(q).into()
  }
}

#[cfg(test)]
mod tests {
  use crate::*;

  fn sample_trs() -> Mat4<f32> {
    Mat4::trs(
      Vec3f::one(),
      vec3(0., 0., scalar::PI_OVER_2),
      Vec3f::splat(2.),
    )
  }

  #[rustfmt::skip]
  fn one_to_sixteen() -> Mat4<f32> {
    Mat4::new(
      1.,  2.,  3.,  4.,
      5.,  6.,  7.,  8.,
      9.,  10., 11., 12.,
      13., 14., 15., 16.,
    )
  }

  #[test]
  fn transforms() {
    assert_eq!(Mat4::rotation_z(scalar::PI_OVER_2) * Vec3::unit_x(), Vec3::unit_y());
    assert_eq!(Mat4::translation(vec3(1_f32, 2., 3.)) * Vec3f::one(), vec3(2., 3., 4.));
    assert_eq!(sample_trs() * Vec3f::one(), vec3(-1., 3., 3.));
    assert_eq!(
      Mat4::translation(Vec3f::one()) * Mat4::translation(Vec3f::one()),
      Mat4::translation(Vec3f::splat(2.))
    );
    let m = Mat4::translation(Vec3f::one()) * Mat4::scaling(Vec3f::splat(-5.));
    assert_eq!(m * Vec3f::one(), Vec3f::splat(-4.));
    assert_eq!(m.transform_direction(Vec3f::one()), Vec3f::splat(-5.));
    assert_eq!(m.position(), Vec3f::one());
  }

  #[test]
  fn look_at() {
    let view = Mat4::look_at(vec3(0_f32, 0., 5.), Vec3::zero(), Vec3::unit_y());
    assert_eq!(view * vec3(0., 0., 5.), Vec3::zero());
    assert_eq!(view * Vec3::zero(), vec3(0., 0., -5.));
    assert_eq!(view * vec3(1., 0., 5.), Vec3::unit_x());

    let view = Mat4::look_at(vec3(3_f32, 0., 0.), Vec3::zero(), Vec3::unit_y());
    assert_eq!(view.transform_direction(vec3(-1., 0., 0.)), vec3(0., 0., -1.));
  }

  #[test]
  fn full_vector_product_uses_w() {
    let m = Mat4::translation(vec3(1_f32, 2., 3.));
    assert_eq!(m * vec4(1., 1., 1., 0.), vec4(1., 1., 1., 0.));
    assert_eq!(m * vec4(1., 1., 1., 1.), vec4(2., 3., 4., 1.));
  }

  #[test]
  fn determinant() {
    assert_eq!(one_to_sixteen().det(), 0.);
    approx::assert_abs_diff_eq!(sample_trs().det(), 8., epsilon = 1e-5);
    assert_eq!(Mat4::<f32>::identity().det(), 1.);
    assert_eq!(Mat4::<f32>::zero().det(), 0.);
  }

  #[test]
  fn inverse() {
    assert_eq!(one_to_sixteen().inverse(), Err(MathError::SingularMatrix));
    let m = sample_trs();
    let inv = m.inverse().unwrap();
    assert_eq!(m * inv, Mat4::identity());
    assert_eq!(inv * m, Mat4::identity());
    assert_eq!(inv * vec3(-1., 3., 3.), Vec3f::one());
  }

  #[test]
  fn predicates() {
    let id = Mat4::<f32>::identity();
    assert!(id.is_identity() && id.is_diagonal() && id.is_symmetric() && id.is_antisymmetric());
    assert!(!id.is_null());
    assert!(Mat4::<f32>::zero().is_null());

    let m = sample_trs();
    assert!(!m.is_identity());
    assert!(!m.is_diagonal());
    assert!(!m.is_symmetric());
    assert!(!m.is_antisymmetric());

    #[rustfmt::skip]
    let symmetric = Mat4::new(
      1_f32, 2., 3., 4.,
      2.,    5., 6., 7.,
      3.,    6., 8., 9.,
      4.,    7., 9., 10.,
    );
    assert!(symmetric.is_symmetric());
    assert!(!symmetric.is_antisymmetric());

    #[rustfmt::skip]
    let antisymmetric = Mat4::new(
       1_f32,  2.,  3., 4.,
      -2.,     5.,  6., 7.,
      -3.,    -6.,  8., 9.,
      -4.,    -7., -9., 10.,
    );
    assert!(antisymmetric.is_antisymmetric());
    assert!(!antisymmetric.is_symmetric());
    assert_eq!(antisymmetric.trace(), 24.);
  }

  #[test]
  fn identity_is_neutral() {
    let id = Mat4::<f32>::identity();
    let m = one_to_sixteen();
    assert_eq!(id * id, id);
    assert_eq!(m * id, m);
    assert_eq!(id * m, m);

    let m3 = Mat3::rotation_euler(vec3(0.3_f32, -0.2, 1.1));
    assert_eq!(Mat3::identity() * Mat3::identity(), Mat3::<f32>::identity());
    assert_eq!(m3 * Mat3::identity(), m3);

    let m2 = Mat2::new(1_f32, 2., 3., 4.);
    assert_eq!(Mat2::identity() * Mat2::identity(), Mat2::<f32>::identity());
    assert_eq!(m2 * Mat2::identity(), m2);

    let dynamic = Matrix::from(m);
    let dynamic_id = Matrix::<f32>::identity(4).unwrap();
    assert_eq!(&dynamic_id * &dynamic_id, dynamic_id);
    assert_eq!(&dynamic * &dynamic_id, dynamic);
  }

  #[test]
  fn rows_columns_and_raw() {
    let m = one_to_sixteen();
    assert_eq!(m[1], vec4(5., 6., 7., 8.));
    assert_eq!(m.column(2), Ok(vec4(3., 7., 11., 15.)));
    assert_eq!(m.at(3, 0), Ok(13.));
    assert_eq!(m.diagonal(), vec4(1., 6., 11., 16.));
    assert_eq!(m.raw()[1], 2.);
    assert_eq!(m.raw().len(), 16);
    assert_eq!(m.transpose().row(0), Ok(vec4(1., 5., 9., 13.)));
    assert_eq!(m.minor(0, 0), Mat3::new(6., 7., 8., 10., 11., 12., 14., 15., 16.));

    let v = vec4(1_f32, 2., 3., 4.);
    assert_eq!(Vec4::from(Mat4::from(v)), v);
  }

  #[test]
  #[should_panic]
  fn row_index_out_of_range() {
    let m = Mat4::<f32>::identity();
    let _row = m[4];
  }

  #[test]
  fn compare_with_cgmath() {
    use cgmath::SquareMatrix as _;
    let ours = Mat4::trs(vec3(1_f32, -2., 0.5), vec3(0.3, -0.2, 1.1), vec3(1., 2., 0.5));
    let columns: [[f32; 4]; 4] = ours.transpose().into();
    let theirs = cgmath::Matrix4::from(columns);
    approx::assert_relative_eq!(ours.det(), theirs.determinant(), max_relative = 1e-5);
    let inv: [[f32; 4]; 4] = theirs.invert().unwrap().into();
    assert_eq!(ours.inverse().unwrap().transpose(), Mat4::from(inv));
  }
}
