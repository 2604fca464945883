use crate::{MathResult, Mat4, Scalar};

pub mod perspective;
pub use perspective::*;
pub mod orth;
pub use orth::*;

/// A camera lens: anything that produces a clip space projection matrix.
///
/// Matrices follow the OpenGL clip convention, view space looks down -z and
/// depth maps to `[-1, 1]`.
pub trait Projection<T: Scalar>: Send + Sync {
  fn compute_projection_mat(&self) -> MathResult<Mat4<T>>;

  /// Write the projection into `projection`, leaving it untouched on error.
  fn update_projection(&self, projection: &mut Mat4<T>) -> MathResult<()> {
    *projection = self.compute_projection_mat()?;
    Ok(())
  }

  /// How many screen pixels one world unit covers at `distance`.
  fn pixels_per_unit(&self, distance: T, view_height: T) -> T;
}

pub trait ResizableProjection<T: Scalar>: Projection<T> {
  fn resize(&mut self, size: (T, T));
}

fn check_depth_range<T: Scalar>(near: T, far: T) -> MathResult<()> {
  if near < far {
    Ok(())
  } else {
    log::debug!("rejected projection depth range near {near:?} far {far:?}");
    Err(crate::MathError::InvalidArgument("projection near must be less than far"))
  }
}
