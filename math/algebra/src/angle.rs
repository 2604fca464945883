use std::fmt;
use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::{scalar, Scalar};

/// An angle in degrees.
///
/// Every trigonometric routine in the crate takes radians, so degree values
/// from configuration or UI are wrapped here and converted once with
/// [`Deg::to_rad`].
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Deg<T> {
  pub value: T,
}

impl<T: Scalar> Deg<T> {
  pub fn by(value: T) -> Self {
    Deg { value }
  }

  pub fn to_rad(&self) -> T {
    scalar::deg_to_rad(self.value)
  }

  pub fn from_rad(rad: T) -> Self {
    Self::by(scalar::rad_to_deg(rad))
  }

  /// The same direction expressed in `[0, 360)`.
  pub fn wrapped(&self) -> Self {
    let full = T::eval(360.);
    let v = self.value % full;
    Self::by(if v < T::zero() { v + full } else { v })
  }
}

impl<T: Scalar> Add for Deg<T> {
  type Output = Self;
  fn add(self, rhs: Self) -> Self {
    Self::by(self.value + rhs.value)
  }
}

impl<T: Scalar> Sub for Deg<T> {
  type Output = Self;
  fn sub(self, rhs: Self) -> Self {
    Self::by(self.value - rhs.value)
  }
}

impl<T: Scalar> Neg for Deg<T> {
  type Output = Self;
  fn neg(self) -> Self {
    Self::by(-self.value)
  }
}

impl<T: fmt::Display> fmt::Display for Deg<T> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}°", self.value)
  }
}

#[test]
fn degree_conversion() {
  let d = Deg::by(90_f64);
  approx::assert_abs_diff_eq!(d.to_rad(), std::f64::consts::FRAC_PI_2);
  approx::assert_abs_diff_eq!(Deg::from_rad(std::f64::consts::PI).value, 180.);

  assert_eq!(Deg::by(-90_f64).wrapped(), Deg::by(270.));
  assert_eq!(Deg::by(725_f64).wrapped(), Deg::by(5.));
  assert_eq!(Deg::by(30_f64) + Deg::by(60.) - Deg::by(45.), Deg::by(45.));
  assert_eq!(-Deg::by(30_f64), Deg::by(-30.));
  assert_eq!(format!("{}", Deg::by(45_f32)), "45°");
}
