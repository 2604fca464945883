use crate::*;

#[derive(Debug, Copy, Clone, serde::Serialize, serde::Deserialize)]
pub struct PerspectiveProjection<T> {
  pub near: T,
  pub far: T,
  pub fov: Deg<T>,
  pub aspect: T,
}

impl<T: Scalar> Default for PerspectiveProjection<T> {
  fn default() -> Self {
    Self {
      near: T::eval(1.),
      far: T::eval(100_000.),
      fov: Deg::by(T::eval(90.)),
      aspect: T::eval(1.),
    }
  }
}

impl<T: Scalar> Projection<T> for PerspectiveProjection<T> {
  fn compute_projection_mat(&self) -> MathResult<Mat4<T>> {
    Mat4::perspective(self.fov.to_rad(), self.aspect, self.near, self.far)
  }

  fn pixels_per_unit(&self, distance: T, view_height: T) -> T {
    // world height visible at unit distance
    let extent = T::two() * (self.fov.to_rad() * T::half()).tan();
    view_height / (extent * distance)
  }
}

impl<T: Scalar> ResizableProjection<T> for PerspectiveProjection<T> {
  fn resize(&mut self, size: (T, T)) {
    self.aspect = size.0 / size.1;
  }
}

impl<T: Scalar> Mat4<T> {
  /// `fov` is the vertical field of view in radians, `aspect` is width over
  /// height. Requires `near < far`.
  pub fn perspective(fov: T, aspect: T, near: T, far: T) -> MathResult<Self> {
    super::check_depth_range(near, far)?;
    let h = T::one() / (fov * T::half()).tan();
    let w = h / aspect;
    let range = far - near;
    let a = -(far + near) / range;
    let b = -T::two() * far * near / range;

    #[rustfmt::skip]
    let mat = Mat4::new(
      w,         T::zero(), T::zero(), T::zero(),
      T::zero(), h,         T::zero(), T::zero(),
      T::zero(), T::zero(), a,         b,
      T::zero(), T::zero(), -T::one(), T::zero(),
    );
    Ok(mat)
  }
}
