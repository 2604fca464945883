use crate::*;

/// Integer 2D vector, typically a grid cell or pixel coordinate.
pub type Vec2i = Vec2<i32>;

impl Vec2<i32> {
  #[inline]
  pub fn dot(&self, b: Self) -> i32 {
    self.x * b.x + self.y * b.y
  }

  #[inline]
  pub fn length2(&self) -> i32 {
    self.dot(*self)
  }

  #[inline]
  pub fn length(&self) -> f32 {
    (self.length2() as f32).sqrt()
  }

  /// Unit length direction as a float vector, zero for the zero vector.
  #[inline]
  pub fn normalize(&self) -> Vec2<f32> {
    Vec2::<f32>::from(*self).normalize()
  }

  /// Float normal, see [`Vec2::normal`].
  #[inline]
  pub fn normal(&self) -> Vec2<f32> {
    Vec2::<f32>::from(*self).normal()
  }
}

impl From<Vec2<i32>> for Vec2<f32> {
  #[inline]
  fn from(v: Vec2<i32>) -> Self {
    Self::new(v.x as f32, v.y as f32)
  }
}

impl From<Vec2<f32>> for Vec2<i32> {
  /// Truncates toward zero, round first for nearest.
  #[inline]
  fn from(v: Vec2<f32>) -> Self {
    Self::new(v.x as i32, v.y as i32)
  }
}

#[test]
fn integer_vector() {
  let a = Vec2i::new(3, 4);
  assert_eq!(a + Vec2i::unit_x(), vec2(4, 4));
  assert_eq!(a * 2, vec2(6, 8));
  assert_eq!(2 * a, vec2(6, 8));
  assert_eq!(a / 2, vec2(1, 2));
  assert_eq!(a.length2(), 25);
  assert_eq!(a.length(), 5.);
  assert_eq!(a.normalize(), vec2(0.6, 0.8));
  assert_eq!(Vec2i::zero().normalize(), Vec2f::zero());
  assert_eq!(a.cross(Vec2i::unit_x()), -4);
  assert_eq!(Vec2i::unit_y().normal(), vec2(-1., 0.));

  assert_eq!(Vec2i::from(vec2(1.7_f32, -2.2)), vec2(1, -2));
  assert_eq!(Vec2i::from(vec2(1.7_f32, -2.2).round()), vec2(2, -2));
  assert_eq!(format!("{a}"), "(3, 4)");
}
