use crate::*;

/// The parts an affine (optionally projective) 4x4 transform is built from.
#[derive(Debug, Copy, Clone)]
pub struct Decomposed<T> {
  pub translation: Vec3<T>,
  pub rotation: Quat<T>,
  pub scale: Vec3<T>,
  /// Shear factors: `x` is yz, `y` is xz and `z` is xy.
  pub skew: Vec3<T>,
  /// Bottom row of the matrix once translation, rotation, scale and skew are
  /// factored out. `(0, 0, 0, 1)` for affine input.
  pub perspective: Vec4<T>,
}

impl<T: Component> PartialEq for Decomposed<T> {
  fn eq(&self, other: &Self) -> bool {
    self.translation == other.translation
      && self.rotation == other.rotation
      && self.scale == other.scale
      && self.skew == other.skew
      && self.perspective == other.perspective
  }
}

impl<T: Scalar> Mat4<T> {
  /// Split the transform into translation, rotation, scale, skew and
  /// perspective.
  ///
  /// Fails when the bottom right entry is (near) zero or the upper 3x3 block
  /// has an exactly zero determinant. Mirrored transforms report negative scales.
  pub fn decompose(&self) -> MathResult<Decomposed<T>> {
    let m33 = self.rows[3].w;
    if scalar::is_zero(m33) {
      log::debug!("decompose rejected matrix with zero w scale");
      return Err(MathError::DecompositionFailed("bottom right entry is zero"));
    }
    let mut local = *self / m33;

    // solving for perspective also isolates the upper 3x3 block
    let mut perspective_matrix = local;
    perspective_matrix.rows[3] = Vec4::unit_w();
    if perspective_matrix.det() == T::zero() {
      log::debug!("decompose rejected matrix with singular linear part");
      return Err(MathError::DecompositionFailed("linear part is singular"));
    }

    let bottom = local.rows[3];
    let perspective = if bottom.xyz() != Vec3::zero() {
      let projected = perspective_matrix.inverse()?.transpose() * bottom;
      local.rows[3] = Vec4::unit_w();
      projected
    } else {
      Vec4::unit_w()
    };

    let translation = local.position();
    for row in local.rows.iter_mut().take(3) {
      row.w = T::zero();
    }

    let mut basis = [0, 1, 2].map(|i| Vec3::new(local.rows[0][i], local.rows[1][i], local.rows[2][i]));
    let mut scale = Vec3::zero();
    let mut skew = Vec3::zero();

    scale.x = basis[0].length();
    basis[0] = basis[0].normalize();

    skew.z = basis[0].dot(basis[1]);
    basis[1] -= basis[0] * skew.z;
    scale.y = basis[1].length();
    basis[1] = basis[1].normalize();
    skew.z /= scale.y;

    skew.y = basis[0].dot(basis[2]);
    basis[2] -= basis[0] * skew.y;
    skew.x = basis[1].dot(basis[2]);
    basis[2] -= basis[1] * skew.x;
    scale.z = basis[2].length();
    basis[2] = basis[2].normalize();
    skew.y /= scale.z;
    skew.x /= scale.z;

    if basis[0].dot(basis[1].cross(basis[2])) < T::zero() {
      scale = -scale;
      basis = basis.map(|b| -b);
    }

    let rotation_matrix = Mat3::from_fn(|r, c| basis[c][r]);
    let rotation = Quat::from_rotation_mat3(rotation_matrix);

    Ok(Decomposed {
      translation,
      rotation,
      scale,
      skew,
      perspective,
    })
  }
}

#[cfg(test)]
mod tests {
  use crate::*;

  fn near(a: Vec3<f32>, b: Vec3<f32>) -> bool {
    (a - b).length() < 1e-5
  }

  #[test]
  fn recover_trs() {
    let translation = vec3(1_f32, 2., 3.);
    let rotation = Quat::from_axis_angle(vec3(1., 2., -1.), 0.9);
    let scale = vec3(2_f32, 3., 4.);
    let m = Mat4::trs_quat(translation, rotation, scale);

    let d = m.decompose().unwrap();
    assert!(near(d.translation, translation));
    assert!(near(d.scale, scale));
    assert!(near(d.skew, Vec3::zero()));
    assert!((d.rotation - rotation).length() < 1e-5);
    assert_eq!(d.perspective, Vec4::unit_w());
  }

  #[test]
  fn recover_small_scale() {
    let translation = vec3(1_f32, 2., 3.);
    let rotation = Quat::from_axis_angle(Vec3::unit_z(), 0.3);
    for s in [0.01_f32, 0.001] {
      let d = Mat4::trs_quat(translation, rotation, Vec3::splat(s)).decompose().unwrap();
      assert!(near(d.translation, translation));
      approx::assert_relative_eq!(d.scale.x, s, max_relative = 1e-4);
      approx::assert_relative_eq!(d.scale.y, s, max_relative = 1e-4);
      approx::assert_relative_eq!(d.scale.z, s, max_relative = 1e-4);
      assert!((d.rotation - rotation).length() < 1e-4);
    }
  }

  #[test]
  fn uniform_w_scale_is_divided_out() {
    let m = Mat4::translation(vec3(1_f32, 2., 3.)) * 2.;
    let d = m.decompose().unwrap();
    assert!(near(d.translation, vec3(1., 2., 3.)));
    assert!(near(d.scale, Vec3::one()));
    assert!((d.rotation - Quat::identity()).length() < 1e-5);
  }

  #[test]
  fn mirrored_transform() {
    let m = Mat4::scaling(vec3(-1_f32, 2., 3.));
    let d = m.decompose().unwrap();
    assert!(near(d.scale, vec3(-1., -2., -3.)));
    let back = Mat4::trs_quat(d.translation, d.rotation, d.scale);
    assert_eq!(back, m);
  }

  #[test]
  fn recover_perspective() {
    let affine = Mat4::trs_quat(Vec3::zero(), Quat::from_axis_angle(Vec3::unit_y(), 0.4), vec3(1_f32, 2., 0.5));
    let mut projective = Mat4::identity();
    projective.rows[3] = vec4(0.1, 0.2, 0.3, 1.);

    let d = (projective * affine).decompose().unwrap();
    assert!((d.perspective - vec4(0.1, 0.2, 0.3, 1.)).length() < 1e-5);
    assert!(near(d.scale, vec3(1., 2., 0.5)));
    assert!(near(d.translation, Vec3::zero()));
  }

  #[test]
  fn recover_skew() {
    #[rustfmt::skip]
    let shear = Mat4::new(
      1_f32, 0.5, 0., 0.,
      0.,    1.,  0., 0.,
      0.,    0.,  1., 0.,
      0.,    0.,  0., 1.,
    );
    let d = shear.decompose().unwrap();
    assert!(near(d.skew, vec3(0., 0., 0.5)));
    assert!(near(d.scale, Vec3::one()));
  }

  #[test]
  fn reject_degenerate() {
    assert_eq!(
      Mat4::<f32>::zero().decompose(),
      Err(MathError::DecompositionFailed("bottom right entry is zero"))
    );
    assert_eq!(
      Mat4::scaling(vec3(0_f32, 1., 1.)).decompose(),
      Err(MathError::DecompositionFailed("linear part is singular"))
    );
  }
}
