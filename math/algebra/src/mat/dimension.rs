use crate::*;

pub trait SquareMatrixDimension<const D: usize> {}

pub trait SquareMatrix<T: Scalar>: Sized + Copy {
  /// Rows (and columns) of the matrix.
  const DIM: usize;

  #[must_use]
  fn identity() -> Self;

  #[must_use]
  fn transpose(&self) -> Self;

  /// Fails with `SingularMatrix` when the determinant is exactly zero.
  fn inverse(&self) -> MathResult<Self>;

  #[must_use]
  fn inverse_or_identity(&self) -> Self {
    self.inverse().unwrap_or_else(|_| Self::identity())
  }

  #[must_use]
  fn det(&self) -> T;

  /// Entry at `row`, `col`, panics when out of range.
  fn entry(&self, row: usize, col: usize) -> T;

  fn all_entries(&self, f: impl Fn(usize, usize, T) -> bool) -> bool {
    (0..Self::DIM).all(|r| (0..Self::DIM).all(|c| f(r, c, self.entry(r, c))))
  }

  fn trace(&self) -> T {
    (0..Self::DIM).fold(T::zero(), |acc, i| acc + self.entry(i, i))
  }

  // the predicates below compare exactly, no epsilon

  fn is_identity(&self) -> bool {
    self.all_entries(|r, c, v| v == if r == c { T::one() } else { T::zero() })
  }

  fn is_null(&self) -> bool {
    self.all_entries(|_, _, v| v == T::zero())
  }

  fn is_diagonal(&self) -> bool {
    self.all_entries(|r, c, v| r == c || v == T::zero())
  }

  fn is_symmetric(&self) -> bool {
    self.all_entries(|r, c, v| v == self.entry(c, r))
  }

  /// Off diagonal entries mirror with the opposite sign, the diagonal is
  /// not checked.
  fn is_antisymmetric(&self) -> bool {
    self.all_entries(|r, c, v| r == c || v == -self.entry(c, r))
  }
}
