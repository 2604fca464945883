use crate::*;

#[derive(Debug, Copy, Clone, serde::Serialize, serde::Deserialize)]
pub struct OrthographicProjection<T> {
  pub left: T,
  pub right: T,
  pub top: T,
  pub bottom: T,
  pub near: T,
  pub far: T,
}

impl<T: Scalar> Default for OrthographicProjection<T> {
  fn default() -> Self {
    Self {
      left: -T::one(),
      right: T::one(),
      top: T::one(),
      bottom: -T::one(),
      near: T::zero(),
      far: T::eval(100_000.),
    }
  }
}

impl<T: Scalar> Projection<T> for OrthographicProjection<T> {
  fn compute_projection_mat(&self) -> MathResult<Mat4<T>> {
    Mat4::orthographic(self.left, self.right, self.bottom, self.top, self.near, self.far)
  }

  fn pixels_per_unit(&self, _distance: T, view_height: T) -> T {
    view_height / (self.top - self.bottom)
  }
}

impl<T: Scalar> ResizableProjection<T> for OrthographicProjection<T> {
  /// Keep the vertical extent and center, widen or narrow to the new aspect.
  fn resize(&mut self, size: (T, T)) {
    let aspect = size.0 / size.1;
    let center = (self.left + self.right) * T::half();
    let half_width = (self.top - self.bottom) * T::half() * aspect;
    self.left = center - half_width;
    self.right = center + half_width;
  }
}

impl<T: Scalar> Mat4<T> {
  /// Maps the box to the `[-1, 1]` cube. Requires `near < far`.
  pub fn orthographic(left: T, right: T, bottom: T, top: T, near: T, far: T) -> MathResult<Self> {
    super::check_depth_range(near, far)?;
    if left == right || bottom == top {
      return Err(MathError::InvalidArgument("orthographic box has no extent"));
    }
    let two = T::two();
    let w = right - left;
    let h = top - bottom;
    let d = far - near;

    #[rustfmt::skip]
    let mat = Mat4::new(
      two / w,   T::zero(), T::zero(), -(right + left) / w,
      T::zero(), two / h,   T::zero(), -(top + bottom) / h,
      T::zero(), T::zero(), -two / d,  -(far + near) / d,
      T::zero(), T::zero(), T::zero(), T::one(),
    );
    Ok(mat)
  }
}

#[cfg(test)]
mod tests {
  use crate::*;

  #[test]
  fn box_maps_to_cube() {
    let p = Mat4::orthographic(-2_f32, 2., -1., 1., 1., 11.).unwrap();
    assert_eq!(p * vec3(-2., -1., -1.), vec3(-1., -1., -1.));
    assert_eq!(p * vec3(2., 1., -11.), vec3(1., 1., 1.));
    assert_eq!(p * vec3(0., 0., -6.), Vec3::zero());
  }

  #[test]
  fn rejects_degenerate_box() {
    assert!(Mat4::orthographic(0_f32, 1., 0., 1., 5., 1.).is_err());
    assert!(Mat4::orthographic(1_f32, 1., 0., 1., 0., 1.).is_err());
  }

  #[test]
  fn resize_keeps_height() {
    let mut lens = OrthographicProjection::<f32>::default();
    lens.resize((200., 100.));
    assert_eq!((lens.left, lens.right), (-2., 2.));
    assert_eq!((lens.bottom, lens.top), (-1., 1.));
    assert_eq!(lens.pixels_per_unit(10., 100.), 50.);
    assert!(lens.compute_projection_mat().is_ok());
  }

  #[test]
  fn compare_with_cgmath() {
    let ours = Mat4::orthographic(-3_f32, 1., -2., 4., 0.5, 20.).unwrap();
    let theirs = cgmath::ortho(-3_f32, 1., -2., 4., 0.5, 20.);
    let columns: [[f32; 4]; 4] = theirs.into();
    assert_eq!(ours.transpose(), Mat4::from(columns));
  }
}
