use std::ops::*;

use serde::{Deserialize, Serialize};

use crate::*;

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize)]
pub struct Vec2<T> {
  pub x: T,
  pub y: T,
}

pub fn vec2<T>(x: T, y: T) -> Vec2<T> {
  Vec2::new(x, y)
}

impl_components!(Vec2<T> { x: 0, y: 1 }, 2, (T, T));
impl_vector_ops!(Vec2 { x, y });

impl<T: Component> VectorDimension<2> for Vec2<T> {}

impl<T: Component> Vec2<T> {
  #[inline]
  pub fn unit_x() -> Self {
    Self::new(T::one(), T::zero())
  }
  #[inline]
  pub fn unit_y() -> Self {
    Self::new(T::zero(), T::one())
  }

  /// Signed area of the parallelogram spanned by the two vectors.
  #[inline]
  pub fn cross(&self, b: Self) -> T {
    self.x * b.y - self.y * b.x
  }

  /// Determinant of the 2x2 matrix with `self` and `b` as columns, same
  /// value as [`Vec2::cross`].
  #[inline]
  pub fn determinant(&self, b: Self) -> T {
    self.cross(b)
  }

  #[inline]
  pub fn expand_with(&self, z: T) -> Vec3<T> {
    Vec3::new(self.x, self.y, z)
  }
}

impl<T: Scalar> Vec2<T> {
  /// The vector rotated a quarter turn counter clockwise, normalized.
  #[inline]
  pub fn normal(&self) -> Self {
    Self::new(-self.y, self.x).normalize()
  }

  /// Rotate around the origin.
  #[inline]
  pub fn rotate(&self, radians: T) -> Self {
    let (s, c) = radians.sin_cos();
    Self {
      x: self.x * c - self.y * s,
      y: self.x * s + self.y * c,
    }
  }

  #[inline]
  pub fn rotate_around(&self, center: Self, radians: T) -> Self {
    (*self - center).rotate(radians) + center
  }
}

impl<T: Component> From<Vec3<T>> for Vec2<T> {
  #[inline]
  fn from(v: Vec3<T>) -> Self {
    v.xy()
  }
}

impl<T: Component> From<Vec4<T>> for Vec2<T> {
  #[inline]
  fn from(v: Vec4<T>) -> Self {
    Self::new(v.x, v.y)
  }
}

#[cfg(test)]
mod tests {
  use crate::*;

  #[test]
  fn arithmetic() {
    let a = vec2(1_f32, 2.);
    let b = vec2(3_f32, 5.);
    assert_eq!(a + b, vec2(4., 7.));
    assert_eq!(b - a, vec2(2., 3.));
    assert_eq!(a * b, vec2(3., 10.));
    assert_eq!(b / a, vec2(3., 2.5));
    assert_eq!(a * 2., vec2(2., 4.));
    assert_eq!(2. * a, vec2(2., 4.));
    assert_eq!(-a, vec2(-1., -2.));

    let mut c = a;
    c += b;
    c *= 2.;
    c -= Vec2::one();
    c /= vec2(1., 2.);
    assert_eq!(c, vec2(7., 6.5));
  }

  #[test]
  fn products_and_length() {
    let a = vec2(3_f32, 4.);
    assert_eq!(a.length(), 5.);
    assert_eq!(a.length2(), 25.);
    assert_eq!(a.normalize(), vec2(0.6, 0.8));
    assert_eq!(Vec2f::zero().normalize(), Vec2::zero());
    assert_eq!(a.dot(vec2(1., 1.)), 7.);
    assert_eq!(Vec2f::unit_x().cross(Vec2::unit_y()), 1.);
    assert_eq!(vec2(2_f32, 1.).determinant(vec2(1., 3.)), 5.);
    assert_eq!(a.dot(vec2(-1., 2.)), vec2(-1_f32, 2.).dot(a));
    assert_eq!(a.distance(vec2(0., 0.)), 5.);
  }

  #[test]
  fn normal_and_rotation() {
    assert_eq!(Vec2f::unit_x().normal(), Vec2::unit_y());
    assert_eq!(vec2(0_f32, 2.).normal(), vec2(-1., 0.));

    let r = Vec2f::unit_x().rotate(scalar::PI_OVER_2);
    assert_eq!(r, Vec2::unit_y());
    let r = vec2(2_f32, 1.).rotate_around(vec2(1., 1.), std::f32::consts::PI);
    assert_eq!(r, vec2(0., 1.));
  }

  #[test]
  fn special_values() {
    let inf = Vec2f::one() / 0.;
    assert!(inf.is_infinity());
    assert!((-(Vec2f::splat(-1.) / 0.)).is_infinity());
    assert!(!Vec2f::one().is_infinity());

    let nan = Vec2f::zero() / 0.;
    assert!(nan.is_nan());
    assert!(!Vec2f::one().is_nan());
  }

  #[test]
  fn indexing() {
    let mut v = vec2(1_f32, 2.);
    assert_eq!(v[0], 1.);
    assert_eq!(v[1], 2.);
    v[1] = 5.;
    assert_eq!(v.y, 5.);
    assert_eq!(v.get(2), Err(MathError::OutOfRange { index: 2, len: 2 }));
  }

  #[test]
  #[should_panic]
  fn index_out_of_range() {
    let v = Vec2f::unit_x();
    let _out = v[2];
  }

  #[test]
  fn conversions() {
    let v: Vec2f = [1., 2.].into();
    assert_eq!(v, vec2(1., 2.));
    let arr: [f32; 2] = v.into();
    assert_eq!(arr, [1., 2.]);
    let t: (f32, f32) = v.into();
    assert_eq!(t, (1., 2.));
    assert_eq!(Vec2f::from(vec3(1., 2., 3.)), v);
    assert_eq!(v.expand_with(3.), vec3(1., 2., 3.));
    assert_eq!(format!("{v}"), "(1.0, 2.0)");
  }

  #[test]
  fn min_max_clamp() {
    let a = vec2(1_f32, 5.);
    let b = vec2(3_f32, 2.);
    assert_eq!(a.min(b), vec2(1., 2.));
    assert_eq!(a.max(b), vec2(3., 5.));
    assert_eq!(vec2(-1_f32, 2.).saturate(), vec2(0., 1.));
    assert_eq!(vec2(1.4_f32, 1.6).round(), vec2(1., 2.));
    assert_eq!(a.lerp(b, 0.5), vec2(2., 3.5));
    assert_eq!(a.lerp(b, 0.), a);
    assert_eq!(a.lerp(b, 1.), b);
    assert_eq!(vec3(1_f32, 2., 3.).lerp(vec3(-1., 0., 7.), 1.), vec3(-1., 0., 7.));
    assert_eq!(vec2(1_f32, -1.).reflect(Vec2::unit_y()), vec2(1., 1.));
  }

  #[test]
  fn compare_with_cgmath() {
    use cgmath::InnerSpace;
    let a = vec2(0.3_f32, -1.7);
    let b = cgmath::Vector2::new(0.3_f32, -1.7);
    let n = a.normalize();
    let m = b.normalize();
    assert_eq!(n, vec2(m.x, m.y));
    assert_eq!(a.length(), b.magnitude());
  }
}
