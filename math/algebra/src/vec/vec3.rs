use std::ops::*;

use serde::{Deserialize, Serialize};

use crate::*;

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize)]
pub struct Vec3<T> {
  pub x: T,
  pub y: T,
  pub z: T,
}

pub fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
  Vec3::new(x, y, z)
}

impl_components!(Vec3<T> { x: 0, y: 1, z: 2 }, 3, (T, T, T));
impl_vector_ops!(Vec3 { x, y, z });

impl<T: Component> VectorDimension<3> for Vec3<T> {}

impl<T: Component> Vec3<T> {
  #[inline]
  pub fn unit_x() -> Self {
    Self::new(T::one(), T::zero(), T::zero())
  }
  #[inline]
  pub fn unit_y() -> Self {
    Self::new(T::zero(), T::one(), T::zero())
  }
  #[inline]
  pub fn unit_z() -> Self {
    Self::new(T::zero(), T::zero(), T::one())
  }

  #[inline]
  pub fn cross(&self, b: Self) -> Self {
    Self {
      x: self.y * b.z - self.z * b.y,
      y: self.z * b.x - self.x * b.z,
      z: self.x * b.y - self.y * b.x,
    }
  }

  #[inline]
  pub fn xy(&self) -> Vec2<T> {
    Vec2::new(self.x, self.y)
  }

  /// Homogeneous point.
  #[inline]
  pub fn expand_with_one(&self) -> Vec4<T> {
    Vec4::new(self.x, self.y, self.z, T::one())
  }

  /// Homogeneous direction.
  #[inline]
  pub fn expand_with_zero(&self) -> Vec4<T> {
    Vec4::new(self.x, self.y, self.z, T::zero())
  }

  #[inline]
  pub fn max_channel(&self) -> T {
    let xy = if self.x > self.y { self.x } else { self.y };
    if xy > self.z {
      xy
    } else {
      self.z
    }
  }
}

impl<T: Component> From<Vec2<T>> for Vec3<T> {
  #[inline]
  fn from(v: Vec2<T>) -> Self {
    v.expand_with(T::zero())
  }
}

impl<T: Component> From<Vec4<T>> for Vec3<T> {
  #[inline]
  fn from(v: Vec4<T>) -> Self {
    v.xyz()
  }
}
