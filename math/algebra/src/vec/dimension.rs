use std::ops::*;

use crate::*;

/// Marks the componentwise vector types, keeps the blanket [`Lerp`] impl off
/// quaternions.
pub trait VectorImpl {}

/// Component count as a const parameter.
pub trait VectorDimension<const D: usize> {}

/// Construction and per component traversal shared by vectors and
/// quaternions.
pub trait Vector<T: Component>: Copy {
  fn create<F>(f: F) -> Self
  where
    F: Fn() -> T;

  /// Apply `f` to every component.
  #[must_use]
  fn map<F>(self, f: F) -> Self
  where
    F: Fn(T) -> T;

  /// Combine matching components of two values with `f`.
  #[must_use]
  fn zip<F>(self, v2: Self, f: F) -> Self
  where
    F: Fn(T, T) -> T;

  /// Whether the predicate holds for every component.
  fn all<F>(self, f: F) -> bool
  where
    F: Fn(T) -> bool;

  #[inline]
  #[must_use]
  fn one() -> Self {
    Self::create(T::one)
  }
  #[inline]
  #[must_use]
  fn zero() -> Self {
    Self::create(T::zero)
  }
  #[inline]
  #[must_use]
  fn splat(v: T) -> Self {
    Self::create(|| v)
  }
}

/// Componentwise helpers for floating point vectors.
pub trait RealVector<T: Scalar>: Vector<T> {
  #[inline]
  fn min(self, rhs: Self) -> Self {
    self.zip(rhs, |a, b| a.min(b))
  }
  #[inline]
  fn max(self, rhs: Self) -> Self {
    self.zip(rhs, |a, b| a.max(b))
  }
  #[inline]
  fn clamp(self, min: Self, max: Self) -> Self {
    self.max(min).min(max)
  }
  #[inline]
  fn saturate(self) -> Self {
    self.clamp(Self::zero(), Self::one())
  }
  /// Round every component to the nearest integer value.
  #[inline]
  fn round(self) -> Self {
    self.map(|c| c.round())
  }
  #[inline]
  fn abs(self) -> Self {
    self.map(|c| c.abs())
  }
}

/// Closed under addition and scaling by `T`.
pub trait VectorSpace<T>:
  Add<Self, Output = Self>
  + Sub<Self, Output = Self>
  + Mul<T, Output = Self>
  + Div<T, Output = Self>
  + Sized
  + Copy
{
}

impl<T, V> VectorSpace<T> for V where
  V: Add<V, Output = V> + Sub<V, Output = V> + Mul<T, Output = V> + Div<T, Output = V> + Copy
{
}

/// Vector space with a dot product, which gives length, distance and
/// direction.
pub trait InnerProductSpace<T: Scalar>: VectorSpace<T> + Vector<T> {
  /// Unit length copy of the vector. Vectors whose length is within the zero
  /// epsilon normalize to the zero vector.
  #[inline]
  fn normalize(&self) -> Self {
    let length = self.length();
    if scalar::is_zero(length) {
      return Self::zero();
    }
    *self / length
  }

  #[inline]
  fn reflect(&self, normal: Self) -> Self {
    *self - normal * self.dot(normal) * T::two()
  }

  #[inline]
  fn length(&self) -> T {
    self.length2().sqrt()
  }

  #[inline]
  fn length2(&self) -> T {
    self.dot(*self)
  }

  #[inline]
  fn distance(&self, b: Self) -> T {
    (*self - b).length()
  }

  #[inline]
  fn reverse(&self) -> Self {
    *self * -T::one()
  }

  #[inline]
  fn dot(&self, b: Self) -> T {
    self.dot_impl(b)
  }
  fn dot_impl(&self, b: Self) -> T;
}

pub trait Lerp<T> {
  fn lerp(self, target: Self, t: T) -> Self;
}

pub trait Slerp<T> {
  fn slerp(self, target: Self, t: T) -> Self;
}

impl<T, V> Lerp<T> for V
where
  T: Scalar,
  V: VectorImpl + VectorSpace<T>,
{
  #[inline(always)]
  fn lerp(self, b: Self, t: T) -> Self {
    self + (b - self) * t
  }
}
