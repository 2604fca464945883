use std::ops::*;

use serde::{Deserialize, Serialize};

use crate::*;

/// Rotation quaternion with imaginary part `(x, y, z)` and real part `w`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize)]
pub struct Quat<T> {
  pub x: T,
  pub y: T,
  pub z: T,
  pub w: T,
}

pub type Quatf = Quat<f32>;
pub type Quatd = Quat<f64>;

impl_components!(Quat<T> { x: 0, y: 1, z: 2, w: 3 }, 4, (T, T, T, T));

impl<T: Component> Quat<T> {
  #[inline]
  pub fn from_parts(imaginary: Vec3<T>, real: T) -> Self {
    Self::new(imaginary.x, imaginary.y, imaginary.z, real)
  }

  #[inline]
  pub fn imaginary(&self) -> Vec3<T> {
    Vec3::new(self.x, self.y, self.z)
  }

  #[inline]
  pub fn real(&self) -> T {
    self.w
  }

  /// The rotation that does nothing.
  #[inline]
  pub fn identity() -> Self {
    Self::new(T::zero(), T::zero(), T::zero(), T::one())
  }

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
    Self::identity()
  }

  #[inline]
  pub fn conjugate(&self) -> Self {
    Self::new(-self.x, -self.y, -self.z, self.w)
  }

  #[inline]
  pub fn from_vec4(v: Vec4<T>) -> Self {
    Self::new(v.x, v.y, v.z, v.w)
  }

  #[inline]
  pub fn to_vec4(&self) -> Vec4<T> {
    Vec4::new(self.x, self.y, self.z, self.w)
  }
}

impl<T: Component> From<Vec4<T>> for Quat<T> {
  #[inline]
  fn from(v: Vec4<T>) -> Self {
    Self::from_vec4(v)
  }
}

impl<T: Component> From<Quat<T>> for Vec4<T> {
  #[inline]
  fn from(q: Quat<T>) -> Self {
    q.to_vec4()
  }
}

impl<T: Component> Add for Quat<T> {
  type Output = Self;
  #[inline]
  fn add(self, rhs: Self) -> Self {
    self.zip(rhs, |a, b| a + b)
  }
}

impl<T: Component> Sub for Quat<T> {
  type Output = Self;
  #[inline]
  fn sub(self, rhs: Self) -> Self {
    self.zip(rhs, |a, b| a - b)
  }
}

impl<T: Component> Neg for Quat<T> {
  type Output = Self;
  #[inline]
  fn neg(self) -> Self {
    self.map(|a| -a)
  }
}

impl<T: Component> Mul<T> for Quat<T> {
  type Output = Self;
  #[inline]
  fn mul(self, rhs: T) -> Self {
    self.map(|a| a * rhs)
  }
}

impl<T: Component> Div<T> for Quat<T> {
  type Output = Self;
  #[inline]
  fn div(self, rhs: T) -> Self {
    self.map(|a| a / rhs)
  }
}

impl<T: Component> Mul for Quat<T> {
  type Output = Self;

  /// Hamilton product, `self * rhs` applies `rhs` first when rotating.
  fn mul(self, rhs: Self) -> Self {
    let (v1, w1) = (self.imaginary(), self.w);
    let (v2, w2) = (rhs.imaginary(), rhs.w);
    let dot = v1.x * v2.x + v1.y * v2.y + v1.z * v2.z;
    Self::from_parts(v2 * w1 + v1 * w2 + v1.cross(v2), w1 * w2 - dot)
  }
}

impl<T: Component> Mul<Vec3<T>> for Quat<T> {
  type Output = Self;

  /// Product with the pure quaternion `(v, 0)`.
  #[inline]
  fn mul(self, v: Vec3<T>) -> Self {
    self * Self::from_parts(v, T::zero())
  }
}

impl_assign_op!(Quat<T>, Quat<T>, AddAssign::add_assign => Add::add);
impl_assign_op!(Quat<T>, Quat<T>, SubAssign::sub_assign => Sub::sub);
impl_assign_op!(Quat<T>, Quat<T>, MulAssign::mul_assign => Mul::mul);
impl_assign_op!(Quat<T>, T, MulAssign::mul_assign => Mul::mul);
impl_assign_op!(Quat<T>, T, DivAssign::div_assign => Div::div);

impl_scalar_lhs_mul!(Quat, f32);
impl_scalar_lhs_mul!(Quat, f64);

impl<T: Scalar> Quat<T> {
  /// Conjugate over squared length, zero for the zero quaternion.
  pub fn inverse(&self) -> Self {
    let length2 = self.length2();
    if scalar::is_zero(length2) {
      return Self::zero();
    }
    self.conjugate() / length2
  }

  /// Rotate a point, `q * p * q⁻¹` with the conjugate standing in for the
  /// inverse of a unit quaternion.
  pub fn rotate(&self, point: Vec3<T>) -> Vec3<T> {
    (*self * point * self.conjugate()).imaginary()
  }

  pub fn from_axis_angle(axis: Vec3<T>, radians: T) -> Self {
    let (s, c) = (radians * T::half()).sin_cos();
    Self::from_parts(axis.normalize() * s, c)
  }

  /// Euler angles in radians: x is roll, y is pitch, z is yaw.
  pub fn from_euler(euler: Vec3<T>) -> Self {
    let (sr, cr) = (euler.x * T::half()).sin_cos();
    let (sp, cp) = (euler.y * T::half()).sin_cos();
    let (sy, cy) = (euler.z * T::half()).sin_cos();

    Self::new(
      sr * cp * cy - cr * sp * sy,
      cr * sp * cy + sr * cp * sy,
      cr * cp * sy - sr * sp * cy,
      cr * cp * cy + sr * sp * sy,
    )
  }

  /// Inverse of [`Quat::from_euler`]. The pitch radicands are clamped so
  /// slightly denormalized input stays finite.
  pub fn to_euler(&self) -> Vec3<T> {
    let Self { x, y, z, w } = *self;
    let two = T::two();
    let one = T::one();

    let roll = (two * (w * x + y * z)).atan2(one - two * (x * x + y * y));

    let sin_pitch = two * (w * y - x * z);
    let a = (one + sin_pitch).max(T::zero()).sqrt();
    let b = (one - sin_pitch).max(T::zero()).sqrt();
    let pitch = two * a.atan2(b) - T::FRAC_PI_2();

    let yaw = (two * (w * z + x * y)).atan2(one - two * (y * y + z * z));

    Vec3::new(roll, pitch, yaw)
  }

  /// Rotation part of an orthonormal matrix.
  pub fn from_rotation_mat3(m: Mat3<T>) -> Self {
    let [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]] = m.to_arrays();
    let trace = m00 + m11 + m22;
    let quarter = T::eval(0.25);

    if trace > T::zero() {
      let s = (trace + T::one()).sqrt() * T::two();
      Self::new((m21 - m12) / s, (m02 - m20) / s, (m10 - m01) / s, quarter * s)
    } else if m00 >= m11 && m00 >= m22 {
      let s = (T::one() + m00 - m11 - m22).sqrt() * T::two();
      Self::new(quarter * s, (m01 + m10) / s, (m02 + m20) / s, (m21 - m12) / s)
    } else if m11 > m22 {
      let s = (T::one() + m11 - m00 - m22).sqrt() * T::two();
      Self::new((m01 + m10) / s, quarter * s, (m12 + m21) / s, (m02 - m20) / s)
    } else {
      let s = (T::one() + m22 - m00 - m11).sqrt() * T::two();
      Self::new((m02 + m20) / s, (m12 + m21) / s, quarter * s, (m10 - m01) / s)
    }
  }

  /// See [`Quat::from_rotation_mat3`], reads the upper left block.
  pub fn from_rotation_mat4(m: Mat4<T>) -> Self {
    Self::from_rotation_mat3(m.into())
  }

  #[inline]
  pub fn to_mat3(&self) -> Mat3<T> {
    (*self).into()
  }

  #[inline]
  pub fn to_mat4(&self) -> Mat4<T> {
    (*self).into()
  }
}

impl<T: Scalar> Lerp<T> for Quat<T> {
  /// Blend along the shorter arc, then normalize.
  fn lerp(self, target: Self, t: T) -> Self {
    let target = if self.dot(target) < T::zero() {
      -target
    } else {
      target
    };
    (self * (T::one() - t) + target * t).normalize()
  }
}

impl<T: Scalar> Slerp<T> for Quat<T> {
  /// Constant speed interpolation along the shorter arc. Nearly parallel
  /// inputs fall back to a linear blend, the result is not normalized.
  fn slerp(self, target: Self, t: T) -> Self {
    let mut cos_omega = self.dot(target);
    let flip = if cos_omega < T::zero() {
      cos_omega = -cos_omega;
      -T::one()
    } else {
      T::one()
    };

    let (s1, s2) = if cos_omega > T::one() - T::zero_epsilon() {
      (T::one() - t, t * flip)
    } else {
      let omega = cos_omega.acos();
      let inv_sin = T::one() / omega.sin();
      (
        ((T::one() - t) * omega).sin() * inv_sin,
        (t * omega).sin() * inv_sin * flip,
      )
    };

    self * s1 + target * s2
  }
}
