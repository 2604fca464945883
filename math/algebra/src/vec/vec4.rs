use std::ops::*;

use serde::{Deserialize, Serialize};

use crate::*;

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize)]
pub struct Vec4<T> {
  pub x: T,
  pub y: T,
  pub z: T,
  pub w: T,
}

pub fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
  Vec4::new(x, y, z, w)
}

impl_components!(Vec4<T> { x: 0, y: 1, z: 2, w: 3 }, 4, (T, T, T, T));
impl_vector_ops!(Vec4 { x, y, z, w });

impl<T: Component> VectorDimension<4> for Vec4<T> {}

impl<T: Component> Vec4<T> {
  #[inline]
  pub fn unit_x() -> Self {
    Self::new(T::one(), T::zero(), T::zero(), T::zero())
  }
  #[inline]
  pub fn unit_y() -> Self {
    Self::new(T::zero(), T::one(), T::zero(), T::zero())
  }
  #[inline]
  pub fn unit_z() -> Self {
    Self::new(T::zero(), T::zero(), T::one(), T::zero())
  }
  #[inline]
  pub fn unit_w() -> Self {
    Self::new(T::zero(), T::zero(), T::zero(), T::one())
  }

  #[inline]
  pub fn xyz(&self) -> Vec3<T> {
    Vec3::new(self.x, self.y, self.z)
  }
}

impl<T: Component> From<Vec2<T>> for Vec4<T> {
  #[inline]
  fn from(v: Vec2<T>) -> Self {
    Self::new(v.x, v.y, T::zero(), T::zero())
  }
}

#[test]
fn vec4_basics() {
  let v = vec4(1_f32, 2., 3., 4.);
  assert_eq!(v.dot(Vec4::one()), 10.);
  assert_eq!(v.xyz(), vec3(1., 2., 3.));
  assert_eq!(v + Vec4::unit_w(), vec4(1., 2., 3., 5.));
  assert_eq!(Vec4::from(vec2(1_f32, 2.)), vec4(1., 2., 0., 0.));
  assert_eq!(v[3], 4.);
  assert_eq!(v.get(4), Err(MathError::OutOfRange { index: 4, len: 4 }));
  assert_eq!(format!("{v}"), "(1.0, 2.0, 3.0, 4.0)");
  assert_eq!(Vec4f::splat(2.).length(), 4.);
  assert!(Vec4f::zero().normalize().all(|c| c == 0.));

  let raw: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&v));
  assert_eq!(raw, &[1., 2., 3., 4.]);
}
