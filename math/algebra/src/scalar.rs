//! Number traits shared by every algebra type, plus small scalar helpers used
//! by gameplay code.

use std::fmt::Debug;
use std::ops::*;

use num_traits::{Float, FloatConst, Num, NumCast};

/// Magnitudes at or below this are treated as zero by [`is_zero`] and every
/// epsilon comparison in the crate.
pub const ZERO: f64 = 1e-6;

pub const PI_OVER_2: f32 = std::f32::consts::FRAC_PI_2;
pub const PI_OVER_4: f32 = std::f32::consts::FRAC_PI_4;
pub const DEG_TO_RAD: f32 = std::f32::consts::PI / 180.;
pub const RAD_TO_DEG: f32 = 180. / std::f32::consts::PI;

/// Anything that can be stored in a vector or quaternion.
pub trait Component:
  Num + NumCast + Neg<Output = Self> + PartialOrd + Copy + Default + Debug + Send + Sync + 'static
{
  /// Equality used by the `==` operator of the composite types. Floating point
  /// components compare within [`ZERO`], integers compare exactly.
  fn approx_eq(self, other: Self) -> bool;
}

impl Component for i32 {
  #[inline]
  fn approx_eq(self, other: Self) -> bool {
    self == other
  }
}

impl Component for f32 {
  #[inline]
  fn approx_eq(self, other: Self) -> bool {
    equals(self, other)
  }
}

impl Component for f64 {
  #[inline]
  fn approx_eq(self, other: Self) -> bool {
    equals(self, other)
  }
}

/// Real numbers: `f32` and `f64`.
pub trait Scalar:
  Component + Float + FloatConst + AddAssign + SubAssign + MulAssign + DivAssign
{
  fn eval(v: f64) -> Self;

  #[inline(always)]
  fn two() -> Self {
    Self::one() + Self::one()
  }
  #[inline(always)]
  fn half() -> Self {
    Self::one() / Self::two()
  }
  #[inline(always)]
  fn zero_epsilon() -> Self {
    Self::eval(ZERO)
  }
}

impl Scalar for f32 {
  #[inline(always)]
  fn eval(v: f64) -> Self {
    v as f32
  }
}

impl Scalar for f64 {
  #[inline(always)]
  fn eval(v: f64) -> Self {
    v
  }
}

/// `-1` for negative values, `1` otherwise (zero included).
#[inline]
pub fn sign<T: Scalar>(v: T) -> T {
  if v < T::zero() {
    -T::one()
  } else {
    T::one()
  }
}

#[inline]
pub fn abs<T: Scalar>(v: T) -> T {
  v.abs()
}

#[inline]
pub fn is_zero<T: Scalar>(v: T) -> bool {
  is_zero_with(v, T::zero_epsilon())
}

#[inline]
pub fn is_zero_with<T: Scalar>(v: T, zero: T) -> bool {
  v.abs() <= zero
}

#[inline]
pub fn equals<T: Scalar>(a: T, b: T) -> bool {
  is_zero(a - b)
}

/// Set `value` to exactly zero when it is within [`ZERO`] of it. Returns
/// whether the value was snapped.
pub fn nullify<T: Scalar>(value: &mut T) -> bool {
  if is_zero(*value) {
    *value = T::zero();
    true
  } else {
    false
  }
}

/// Move `value` toward `target` by at most `step`, never overshooting.
pub fn approach<T: Scalar>(value: &mut T, target: T, step: T) {
  if equals(*value, target) {
    return;
  }
  let diff = target - *value;
  *value += step.min(diff.abs()) * sign(diff);
}

/// Folds `[0, 1]` into a triangle wave: rises to 1 at one half and falls back.
pub fn yoyo<T: Scalar>(v: T) -> T {
  if v <= T::half() {
    v * T::two()
  } else {
    T::one() - (v - T::half()) * T::two()
  }
}

/// Count a cooldown timer down by `dt` while it is still running.
pub fn update_cooldown<T: Scalar>(cooldown: &mut T, dt: T) {
  if *cooldown > T::zero() {
    *cooldown -= dt;
  }
}

#[inline]
pub fn lerp<T: Scalar>(a: T, b: T, t: T) -> T {
  a + (b - a) * t
}

#[inline]
pub fn deg_to_rad<T: Scalar>(deg: T) -> T {
  deg * T::PI() / T::eval(180.)
}

#[inline]
pub fn rad_to_deg<T: Scalar>(rad: T) -> T {
  rad * T::eval(180.) / T::PI()
}
