use std::fmt;
use std::ops::*;

use serde::{Deserialize, Serialize};

use crate::*;

/// Dense matrix whose shape is decided at runtime, stored row by row.
///
/// Both dimensions are always at least one. Operators panic on shape
/// mismatch, the `try_` methods report it as an error instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "MatrixRepr<T>")]
pub struct Matrix<T = f32> {
  rows: usize,
  cols: usize,
  data: Vec<T>,
}

/// Unchecked wire form of [`Matrix`], validated on the way in.
#[derive(Deserialize)]
struct MatrixRepr<T> {
  rows: usize,
  cols: usize,
  data: Vec<T>,
}

impl<T> TryFrom<MatrixRepr<T>> for Matrix<T> {
  type Error = MathError;

  fn try_from(MatrixRepr { rows, cols, data }: MatrixRepr<T>) -> MathResult<Self> {
    if rows == 0 || cols == 0 {
      return Err(MathError::InvalidArgument("matrix dimensions must be positive"));
    }
    if rows.checked_mul(cols) != Some(data.len()) {
      return Err(MathError::ShapeMismatch {
        expected: (rows, cols),
        found: (1, data.len()),
      });
    }
    Ok(Self { rows, cols, data })
  }
}

impl<T: Scalar> Matrix<T> {
  /// Zero filled matrix.
  pub fn new(rows: usize, cols: usize) -> MathResult<Self> {
    Self::filled(rows, cols, T::zero())
  }

  pub fn filled(rows: usize, cols: usize, value: T) -> MathResult<Self> {
    if rows == 0 || cols == 0 {
      return Err(MathError::InvalidArgument("matrix dimensions must be positive"));
    }
    Ok(Self {
      rows,
      cols,
      data: vec![value; rows * cols],
    })
  }

  pub fn identity(size: usize) -> MathResult<Self> {
    let mut m = Self::new(size, size)?;
    for i in 0..size {
      m[(i, i)] = T::one();
    }
    Ok(m)
  }

  /// Entries given row by row in a flat buffer.
  pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> MathResult<Self> {
    MatrixRepr { rows, cols, data }.try_into()
  }

  /// Every row must have the same, non zero, length.
  pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> MathResult<Self> {
    let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
    if cols == 0 {
      return Err(MathError::InvalidArgument("matrix dimensions must be positive"));
    }
    let mut data = Vec::with_capacity(rows.len() * cols);
    for (i, row) in rows.iter().enumerate() {
      let row = row.as_ref();
      if row.len() != cols {
        log::debug!("ragged row {i}: {} entries, expect {cols}", row.len());
        return Err(MathError::ShapeMismatch {
          expected: (rows.len(), cols),
          found: (rows.len(), row.len()),
        });
      }
      data.extend_from_slice(row);
    }
    Self::from_vec(rows.len(), cols, data)
  }

  #[inline]
  pub fn rows(&self) -> usize {
    self.rows
  }

  #[inline]
  pub fn cols(&self) -> usize {
    self.cols
  }

  #[inline]
  pub fn shape(&self) -> (usize, usize) {
    (self.rows, self.cols)
  }

  #[inline]
  pub fn is_square(&self) -> bool {
    self.rows == self.cols
  }

  /// Entries laid out row by row.
  #[inline]
  pub fn raw(&self) -> &[T] {
    &self.data
  }

  pub fn get(&self, row: usize, col: usize) -> MathResult<T> {
    self.check_entry(row, col)?;
    Ok(self.data[row * self.cols + col])
  }

  pub fn get_mut(&mut self, row: usize, col: usize) -> MathResult<&mut T> {
    self.check_entry(row, col)?;
    Ok(&mut self.data[row * self.cols + col])
  }

  pub fn row(&self, index: usize) -> MathResult<&[T]> {
    if index >= self.rows {
      return Err(MathError::OutOfRange {
        index,
        len: self.rows,
      });
    }
    Ok(&self.data[index * self.cols..(index + 1) * self.cols])
  }

  pub fn column(&self, index: usize) -> MathResult<Vec<T>> {
    if index >= self.cols {
      return Err(MathError::OutOfRange {
        index,
        len: self.cols,
      });
    }
    Ok((0..self.rows).map(|r| self[(r, index)]).collect())
  }

  fn check_entry(&self, row: usize, col: usize) -> MathResult<()> {
    if row >= self.rows {
      return Err(MathError::OutOfRange {
        index: row,
        len: self.rows,
      });
    }
    if col >= self.cols {
      return Err(MathError::OutOfRange {
        index: col,
        len: self.cols,
      });
    }
    Ok(())
  }

  fn ensure_square(&self) -> MathResult<()> {
    if self.is_square() {
      Ok(())
    } else {
      Err(MathError::NotSquare {
        rows: self.rows,
        cols: self.cols,
      })
    }
  }

  fn ensure_shape(&self, expected: (usize, usize)) -> MathResult<()> {
    if self.shape() == expected {
      Ok(())
    } else {
      Err(MathError::ShapeMismatch {
        expected,
        found: self.shape(),
      })
    }
  }

  fn all_entries(&self, f: impl Fn(usize, usize, T) -> bool) -> bool {
    (0..self.rows).all(|r| (0..self.cols).all(|c| f(r, c, self[(r, c)])))
  }

  pub fn is_null(&self) -> bool {
    self.data.iter().all(|v| *v == T::zero())
  }

  pub fn is_identity(&self) -> bool {
    self.is_square() && self.all_entries(|r, c, v| v == if r == c { T::one() } else { T::zero() })
  }

  pub fn is_diagonal(&self) -> bool {
    self.is_square() && self.all_entries(|r, c, v| r == c || v == T::zero())
  }

  pub fn is_symmetric(&self) -> bool {
    self.is_square() && self.all_entries(|r, c, v| v == self[(c, r)])
  }

  /// Diagonal entries are not checked.
  pub fn is_antisymmetric(&self) -> bool {
    self.is_square() && self.all_entries(|r, c, v| r == c || v == -self[(c, r)])
  }

  pub fn diagonal(&self) -> MathResult<Vec<T>> {
    self.ensure_square()?;
    Ok((0..self.rows).map(|i| self[(i, i)]).collect())
  }

  pub fn trace(&self) -> MathResult<T> {
    Ok(self.diagonal()?.into_iter().fold(T::zero(), |acc, v| acc + v))
  }

  pub fn transpose(&self) -> Self {
    let mut data = Vec::with_capacity(self.data.len());
    for c in 0..self.cols {
      data.extend((0..self.rows).map(|r| self[(r, c)]));
    }
    Self {
      rows: self.cols,
      cols: self.rows,
      data,
    }
  }

  /// The contiguous block starting at `row`, `col`.
  pub fn sub_matrix(&self, row: usize, col: usize, rows: usize, cols: usize) -> MathResult<Self> {
    if rows == 0 || cols == 0 {
      return Err(MathError::InvalidArgument("matrix dimensions must be positive"));
    }
    let last_row = row.checked_add(rows - 1).ok_or(MathError::OutOfRange {
      index: row,
      len: self.rows,
    })?;
    let last_col = col.checked_add(cols - 1).ok_or(MathError::OutOfRange {
      index: col,
      len: self.cols,
    })?;
    self.check_entry(last_row, last_col)?;
    let mut data = Vec::with_capacity(rows * cols);
    for r in row..row + rows {
      data.extend_from_slice(&self.data[r * self.cols + col..r * self.cols + col + cols]);
    }
    Ok(Self { rows, cols, data })
  }

  /// The matrix left after removing `row` and `col`.
  pub fn minor(&self, row: usize, col: usize) -> MathResult<Self> {
    self.check_entry(row, col)?;
    if self.rows < 2 || self.cols < 2 {
      return Err(MathError::InvalidArgument("minor of a single row or column matrix"));
    }
    Ok(self.minor_unchecked(row, col))
  }

  fn minor_unchecked(&self, row: usize, col: usize) -> Self {
    let data = (0..self.rows)
      .filter(|r| *r != row)
      .flat_map(|r| (0..self.cols).filter(move |c| *c != col).map(move |c| (r, c)))
      .map(|(r, c)| self[(r, c)])
      .collect();
    Self {
      rows: self.rows - 1,
      cols: self.cols - 1,
      data,
    }
  }

  /// Signed determinant of [`Matrix::minor`].
  pub fn cofactor(&self, row: usize, col: usize) -> MathResult<T> {
    self.ensure_square()?;
    self.check_entry(row, col)?;
    if self.rows < 2 {
      return Err(MathError::InvalidArgument("cofactor of a 1x1 matrix"));
    }
    Ok(self.cofactor_unchecked(row, col))
  }

  fn cofactor_unchecked(&self, row: usize, col: usize) -> T {
    let minor = self.minor_unchecked(row, col).determinant_unchecked();
    if (row + col) % 2 == 0 {
      minor
    } else {
      -minor
    }
  }

  /// Cofactor expansion along the first column.
  pub fn determinant(&self) -> MathResult<T> {
    self.ensure_square()?;
    Ok(self.determinant_unchecked())
  }

  fn determinant_unchecked(&self) -> T {
    match self.rows {
      1 => self.data[0],
      2 => self.data[0] * self.data[3] - self.data[1] * self.data[2],
      n => (0..n).fold(T::zero(), |acc, r| acc + self[(r, 0)] * self.cofactor_unchecked(r, 0)),
    }
  }

  /// `[self | other]`, both must have the same row count.
  pub fn augmented(&self, other: &Self) -> MathResult<Self> {
    if self.rows != other.rows {
      return Err(MathError::ShapeMismatch {
        expected: (self.rows, other.cols),
        found: other.shape(),
      });
    }
    let cols = self.cols + other.cols;
    let mut data = Vec::with_capacity(self.rows * cols);
    for r in 0..self.rows {
      data.extend_from_slice(&self[r]);
      data.extend_from_slice(&other[r]);
    }
    Ok(Self {
      rows: self.rows,
      cols,
      data,
    })
  }

  fn swap_rows(&mut self, a: usize, b: usize) {
    if a == b {
      return;
    }
    for c in 0..self.cols {
      self.data.swap(a * self.cols + c, b * self.cols + c);
    }
  }

  /// Reduced row echelon form by Gauss-Jordan elimination with partial
  /// pivoting. Columns without a non zero pivot are skipped.
  pub fn gauss_jordan(&self) -> Self {
    let mut m = self.clone();
    let mut pivot_row = 0;

    for col in 0..m.cols {
      if pivot_row >= m.rows {
        break;
      }

      let (best, best_value) = (pivot_row..m.rows)
        .map(|r| (r, m[(r, col)].abs()))
        .fold((pivot_row, -T::one()), |best, candidate| {
          if candidate.1 > best.1 {
            candidate
          } else {
            best
          }
        });
      if best_value == T::zero() {
        continue;
      }
      log::trace!("gauss-jordan pivot {best_value:?} at row {best}, column {col}");

      m.swap_rows(pivot_row, best);
      let pivot = m[(pivot_row, col)];
      for c in 0..m.cols {
        m[(pivot_row, c)] /= pivot;
      }

      for r in 0..m.rows {
        if r == pivot_row {
          continue;
        }
        let factor = m[(r, col)];
        if factor == T::zero() {
          continue;
        }
        for c in 0..m.cols {
          let delta = factor * m[(pivot_row, c)];
          m[(r, c)] -= delta;
        }
      }
      pivot_row += 1;
    }
    m
  }

  /// Fails with `NotSquare` or `SingularMatrix` (determinant exactly zero).
  pub fn inverse(&self) -> MathResult<Self> {
    self.ensure_square()?;
    if self.determinant_unchecked() == T::zero() {
      log::debug!("inverse of singular {}x{} matrix requested", self.rows, self.cols);
      return Err(MathError::SingularMatrix);
    }
    let n = self.rows;
    self.augmented(&Self::identity(n)?)?.reduce_left_to_identity(n)
  }

  /// Solve `self * x = rhs` for `x`, one solution column per `rhs` column.
  pub fn solve(&self, rhs: &Self) -> MathResult<Self> {
    self.ensure_square()?;
    if self.determinant_unchecked() == T::zero() {
      return Err(MathError::SingularMatrix);
    }
    self.augmented(rhs)?.reduce_left_to_identity(self.rows)
  }

  /// Eliminates `[A | B]` with `A` n x n and returns the right block. Fails
  /// unless every column of `A` received a pivot.
  fn reduce_left_to_identity(&self, n: usize) -> MathResult<Self> {
    let reduced = self.gauss_jordan();
    if !reduced.sub_matrix(0, 0, n, n)?.is_identity() {
      log::debug!("elimination left a {n}x{n} block without full rank");
      return Err(MathError::SingularMatrix);
    }
    reduced.sub_matrix(0, n, n, self.cols - n)
  }

  pub fn try_add(&self, rhs: &Self) -> MathResult<Self> {
    rhs.ensure_shape(self.shape())?;
    Ok(self.zip_entries(rhs, |a, b| a + b))
  }

  pub fn try_sub(&self, rhs: &Self) -> MathResult<Self> {
    rhs.ensure_shape(self.shape())?;
    Ok(self.zip_entries(rhs, |a, b| a - b))
  }

  pub fn try_mul(&self, rhs: &Self) -> MathResult<Self> {
    if self.cols != rhs.rows {
      return Err(MathError::ShapeMismatch {
        expected: (self.cols, rhs.cols),
        found: rhs.shape(),
      });
    }
    let mut data = Vec::with_capacity(self.rows * rhs.cols);
    for r in 0..self.rows {
      for c in 0..rhs.cols {
        data.push((0..self.cols).fold(T::zero(), |acc, k| acc + self[(r, k)] * rhs[(k, c)]));
      }
    }
    Ok(Self {
      rows: self.rows,
      cols: rhs.cols,
      data,
    })
  }

  pub fn map(&self, f: impl Fn(T) -> T) -> Self {
    Self {
      rows: self.rows,
      cols: self.cols,
      data: self.data.iter().map(|v| f(*v)).collect(),
    }
  }

  fn zip_entries(&self, rhs: &Self, f: impl Fn(T, T) -> T) -> Self {
    Self {
      rows: self.rows,
      cols: self.cols,
      data: self.data.iter().zip(&rhs.data).map(|(a, b)| f(*a, *b)).collect(),
    }
  }
}

impl<T: Scalar> Matrix<T> {
  /// Homogeneous 2D rotation, 3x3.
  pub fn rotation_2d(theta: T) -> Self {
    Mat3::rotation_2d(theta).into()
  }

  /// Homogeneous 2D scale, 3x3.
  pub fn scaling_2d(scale: Vec2<T>) -> Self {
    Mat3::scale_2d(scale).into()
  }

  /// Homogeneous 2D translation, 3x3.
  pub fn translation_2d(translate: Vec2<T>) -> Self {
    Mat3::translate_2d(translate).into()
  }

  /// Homogeneous 3D rotation about x, 4x4.
  pub fn rotation_x(theta: T) -> Self {
    Mat4::rotation_x(theta).into()
  }

  pub fn rotation_y(theta: T) -> Self {
    Mat4::rotation_y(theta).into()
  }

  pub fn rotation_z(theta: T) -> Self {
    Mat4::rotation_z(theta).into()
  }

  pub fn rotation(axis: Vec3<T>, theta: T) -> Self {
    Mat4::rotation(axis, theta).into()
  }

  pub fn rotation_euler(euler: Vec3<T>) -> Self {
    Mat4::rotation_euler(euler).into()
  }

  pub fn scaling(scale: Vec3<T>) -> Self {
    Mat4::scaling(scale).into()
  }

  pub fn translation(translate: Vec3<T>) -> Self {
    Mat4::translation(translate).into()
  }

  pub fn trs(translation: Vec3<T>, euler: Vec3<T>, scale: Vec3<T>) -> Self {
    Mat4::trs(translation, euler, scale).into()
  }
}

impl<T> Index<usize> for Matrix<T> {
  type Output = [T];
  fn index(&self, row: usize) -> &[T] {
    if row >= self.rows {
      panic!("{}", MathError::OutOfRange { index: row, len: self.rows });
    }
    &self.data[row * self.cols..(row + 1) * self.cols]
  }
}

impl<T> IndexMut<usize> for Matrix<T> {
  fn index_mut(&mut self, row: usize) -> &mut [T] {
    if row >= self.rows {
      panic!("{}", MathError::OutOfRange { index: row, len: self.rows });
    }
    &mut self.data[row * self.cols..(row + 1) * self.cols]
  }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
  type Output = T;
  fn index(&self, (row, col): (usize, usize)) -> &T {
    &self[row][col]
  }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
  fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
    &mut self[row][col]
  }
}

impl<T: Component> PartialEq for Matrix<T> {
  fn eq(&self, other: &Self) -> bool {
    self.rows == other.rows
      && self.cols == other.cols
      && self.data.iter().zip(&other.data).all(|(a, b)| a.approx_eq(*b))
  }
}

impl<T: fmt::Debug> fmt::Display for Matrix<T> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    for (i, row) in self.data.chunks(self.cols).enumerate() {
      if i > 0 {
        writeln!(f)?;
      }
      write!(f, "{row:?}")?;
    }
    Ok(())
  }
}

fn expect_shape<T>(result: MathResult<T>) -> T {
  match result {
    Ok(v) => v,
    Err(e) => panic!("{e}"),
  }
}

impl<T: Scalar> Add for &Matrix<T> {
  type Output = Matrix<T>;
  fn add(self, rhs: Self) -> Matrix<T> {
    expect_shape(self.try_add(rhs))
  }
}

impl<T: Scalar> Sub for &Matrix<T> {
  type Output = Matrix<T>;
  fn sub(self, rhs: Self) -> Matrix<T> {
    expect_shape(self.try_sub(rhs))
  }
}

impl<T: Scalar> Mul for &Matrix<T> {
  type Output = Matrix<T>;
  fn mul(self, rhs: Self) -> Matrix<T> {
    expect_shape(self.try_mul(rhs))
  }
}

impl<T: Scalar> Add for Matrix<T> {
  type Output = Self;
  fn add(self, rhs: Self) -> Self {
    &self + &rhs
  }
}

impl<T: Scalar> Sub for Matrix<T> {
  type Output = Self;
  fn sub(self, rhs: Self) -> Self {
    &self - &rhs
  }
}

impl<T: Scalar> Mul for Matrix<T> {
  type Output = Self;
  fn mul(self, rhs: Self) -> Self {
    &self * &rhs
  }
}

impl<T: Scalar> Mul<T> for Matrix<T> {
  type Output = Self;
  fn mul(self, rhs: T) -> Self {
    self.map(|v| v * rhs)
  }
}

impl<T: Scalar> Div<T> for Matrix<T> {
  type Output = Self;
  fn div(self, rhs: T) -> Self {
    self.map(|v| v / rhs)
  }
}

impl<T: Scalar> Neg for Matrix<T> {
  type Output = Self;
  fn neg(self) -> Self {
    self.map(|v| -v)
  }
}

impl<T: Scalar> AddAssign<&Matrix<T>> for Matrix<T> {
  fn add_assign(&mut self, rhs: &Matrix<T>) {
    *self = &*self + rhs;
  }
}

impl<T: Scalar> SubAssign<&Matrix<T>> for Matrix<T> {
  fn sub_assign(&mut self, rhs: &Matrix<T>) {
    *self = &*self - rhs;
  }
}

impl<T: Scalar> MulAssign<&Matrix<T>> for Matrix<T> {
  fn mul_assign(&mut self, rhs: &Matrix<T>) {
    *self = &*self * rhs;
  }
}

impl<T: Scalar> MulAssign<T> for Matrix<T> {
  fn mul_assign(&mut self, rhs: T) {
    self.data.iter_mut().for_each(|v| *v *= rhs);
  }
}

impl<T: Scalar> DivAssign<T> for Matrix<T> {
  fn div_assign(&mut self, rhs: T) {
    self.data.iter_mut().for_each(|v| *v /= rhs);
  }
}

macro_rules! impl_fixed_conversions {
  ($Mat:ident, $Vec:ident, $n:literal) => {
    impl<T: Scalar> From<$Mat<T>> for Matrix<T> {
      fn from(m: $Mat<T>) -> Self {
        Self {
          rows: $n,
          cols: $n,
          data: m.to_arrays().into_iter().flatten().collect(),
        }
      }
    }

    impl<T: Scalar> TryFrom<&Matrix<T>> for $Mat<T> {
      type Error = MathError;
      fn try_from(m: &Matrix<T>) -> MathResult<Self> {
        m.ensure_shape(($n, $n))?;
        Ok($Mat::from_fn(|r, c| m[(r, c)]))
      }
    }

    /// Column vector.
    impl<T: Scalar> From<$Vec<T>> for Matrix<T> {
      fn from(v: $Vec<T>) -> Self {
        let data: [T; $n] = v.into();
        Self {
          rows: $n,
          cols: 1,
          data: data.to_vec(),
        }
      }
    }

    /// Accepts a single column or a single row.
    impl<T: Scalar> TryFrom<&Matrix<T>> for $Vec<T> {
      type Error = MathError;
      fn try_from(m: &Matrix<T>) -> MathResult<Self> {
        if m.shape() != ($n, 1) && m.shape() != (1, $n) {
          return Err(MathError::ShapeMismatch {
            expected: ($n, 1),
            found: m.shape(),
          });
        }
        Ok($Vec::from(std::array::from_fn::<T, $n, _>(|i| m.data[i])))
      }
    }
  };
}

impl_fixed_conversions!(Mat2, Vec2, 2);
impl_fixed_conversions!(Mat3, Vec3, 3);
impl_fixed_conversions!(Mat4, Vec4, 4);

#[cfg(test)]
mod tests {
  use crate::*;

  fn m(rows: &[&[f64]]) -> Matrix<f64> {
    Matrix::from_rows(rows).unwrap()
  }

  #[test]
  fn construction() {
    assert_eq!(
      Matrix::<f32>::new(0, 3),
      Err(MathError::InvalidArgument("matrix dimensions must be positive"))
    );
    assert!(Matrix::<f32>::from_rows(&[[1., 2.].as_slice(), [3.].as_slice()]).is_err());
    assert!(Matrix::<f32>::from_vec(2, 2, vec![1., 2., 3.]).is_err());

    let a = m(&[&[1., 2., 3.], &[4., 5., 6.]]);
    assert_eq!(a.shape(), (2, 3));
    assert_eq!(a[1], [4., 5., 6.]);
    assert_eq!(a[(0, 2)], 3.);
    assert_eq!(a.get(1, 0), Ok(4.));
    assert_eq!(a.get(2, 0), Err(MathError::OutOfRange { index: 2, len: 2 }));
    assert_eq!(a.column(1), Ok(vec![2., 5.]));
    assert_eq!(format!("{a}"), "[1.0, 2.0, 3.0]\n[4.0, 5.0, 6.0]");
    assert!(Matrix::<f64>::identity(3).unwrap().is_identity());
  }

  #[test]
  fn shape_rules() {
    let a = m(&[&[1., 2., 3.], &[4., 5., 6.]]);
    assert_eq!(a.determinant(), Err(MathError::NotSquare { rows: 2, cols: 3 }));
    assert!(a.trace().is_err());
    assert!(a.inverse().is_err());
    assert!(!a.is_symmetric());
    assert!(a.try_add(&a.transpose()).is_err());
    assert_eq!(a.transpose().shape(), (3, 2));
    assert_eq!(&a * &a.transpose(), m(&[&[14., 32.], &[32., 77.]]));
  }

  #[test]
  #[should_panic]
  fn mismatched_product_panics() {
    let a = m(&[&[1., 2., 3.]]);
    let _product = &a * &a;
  }

  #[test]
  fn determinant_matches_fixed() {
    #[rustfmt::skip]
    let fixed = Mat4::new(
      2_f64, -1., 0.,  3.,
      1.,    4.,  2., -1.,
      0.,    3.,  5.,  2.,
      -2.,   1.,  1.,  1.,
    );
    let dynamic = Matrix::from(fixed);
    approx::assert_abs_diff_eq!(dynamic.determinant().unwrap(), fixed.det(), epsilon = 1e-9);
    assert_eq!(
      Mat4::try_from(&dynamic.inverse().unwrap()).unwrap(),
      fixed.inverse().unwrap()
    );
    assert_eq!(Matrix::<f64>::from(Mat4::one()).determinant(), Ok(1.));
  }

  #[test]
  fn gauss_jordan_reduces() {
    let a = m(&[&[0., 2., 1.], &[1., -2., -3.], &[-1., 1., 2.]]);
    assert_eq!(a.gauss_jordan(), Matrix::identity(3).unwrap());

    // rank deficient rows reduce to zero
    let b = m(&[&[1., 2.], &[2., 4.]]);
    assert_eq!(b.gauss_jordan(), m(&[&[1., 2.], &[0., 0.]]));
  }

  #[test]
  fn inverse_and_solve() {
    let a = m(&[&[4., 7.], &[2., 6.]]);
    let inv = a.inverse().unwrap();
    assert_eq!(inv, m(&[&[0.6, -0.7], &[-0.2, 0.4]]));
    assert_eq!(&a * &inv, Matrix::identity(2).unwrap());

    let singular = m(&[&[1., 2.], &[2., 4.]]);
    assert_eq!(singular.inverse(), Err(MathError::SingularMatrix));

    let x = a.solve(&m(&[&[1.], &[2.]])).unwrap();
    assert_eq!(&a * &x, m(&[&[1.], &[2.]]));
  }

  #[test]
  fn small_entries_keep_their_pivots() {
    let a = m(&[&[1e-7, 0.], &[0., 1.]]);
    let inv = a.inverse().unwrap();
    approx::assert_relative_eq!(inv[(0, 0)], 1e7, max_relative = 1e-9);
    assert_eq!(inv[(0, 1)], 0.);
    assert_eq!(inv[(1, 0)], 0.);
    assert_eq!(inv[(1, 1)], 1.);
    assert_eq!(&a * &inv, Matrix::identity(2).unwrap());

    let tiny = Matrix::from(Mat3::scaling(Vec3::splat(1e-8_f64)));
    let inv = tiny.inverse().unwrap();
    for i in 0..3 {
      approx::assert_relative_eq!(inv[(i, i)], 1e8, max_relative = 1e-9);
    }

    let x = tiny.solve(&m(&[&[1e-8], &[2e-8], &[3e-8]])).unwrap();
    assert_eq!(x, m(&[&[1.], &[2.], &[3.]]));
  }

  #[test]
  fn deserialize_checks_layout() {
    #[derive(serde::Serialize)]
    struct Raw {
      rows: usize,
      cols: usize,
      data: Vec<f64>,
    }
    let decode = |rows, cols, data| {
      let bytes = rmp_serde::to_vec_named(&Raw { rows, cols, data }).unwrap();
      rmp_serde::from_slice::<Matrix<f64>>(&bytes)
    };

    assert!(decode(2, 2, vec![]).is_err());
    assert!(decode(0, 2, vec![]).is_err());
    assert!(decode(usize::MAX, 2, vec![1.]).is_err());
    assert_eq!(decode(1, 2, vec![1., 2.]).unwrap(), m(&[&[1., 2.]]));

    let a = m(&[&[1., 2.], &[3., 4.]]);
    let bytes = rmp_serde::to_vec_named(&a).unwrap();
    assert_eq!(rmp_serde::from_slice::<Matrix<f64>>(&bytes).unwrap(), a);
  }

  #[test]
  fn augmented_and_sub_matrix() {
    let a = m(&[&[1., 2.], &[3., 4.]]);
    let b = m(&[&[5.], &[6.]]);
    let ab = a.augmented(&b).unwrap();
    assert_eq!(ab, m(&[&[1., 2., 5.], &[3., 4., 6.]]));
    assert_eq!(ab.sub_matrix(0, 1, 2, 2).unwrap(), m(&[&[2., 5.], &[4., 6.]]));
    assert!(ab.sub_matrix(1, 1, 2, 2).is_err());
    assert!(a.augmented(&m(&[&[1.]])).is_err());
    assert_eq!(
      a.sub_matrix(usize::MAX, 0, 2, 1),
      Err(MathError::OutOfRange { index: usize::MAX, len: 2 })
    );
    assert_eq!(ab.minor(0, 2).unwrap(), m(&[&[3., 4.]]));
    assert_eq!(a.cofactor(0, 1), Ok(-3.));
    assert_eq!(a.cofactor(1, 1), Ok(1.));
    assert!(ab.cofactor(0, 0).is_err());
  }

  #[test]
  fn predicates() {
    let sym = m(&[&[1., 2.], &[2., 1.]]);
    assert!(sym.is_symmetric() && !sym.is_antisymmetric());
    let anti = m(&[&[0., 2.], &[-2., 0.]]);
    assert!(anti.is_antisymmetric() && !anti.is_symmetric());
    assert!(m(&[&[3., 0.], &[0., 1.]]).is_diagonal());
    assert!(Matrix::<f64>::new(2, 3).unwrap().is_null());
    assert_eq!(m(&[&[3., 0.], &[0., 1.]]).diagonal(), Ok(vec![3., 1.]));
    assert_eq!(sym.trace(), Ok(2.));
  }

  #[test]
  fn builders_agree_with_fixed() {
    let theta = 0.4_f64;
    let rot = Matrix::rotation_z(theta);
    assert_eq!(rot.shape(), (4, 4));
    assert_eq!(Mat4::try_from(&rot).unwrap(), Mat4::rotation_z(theta));
    assert_eq!(Matrix::rotation_2d(theta).shape(), (3, 3));

    let trs = Matrix::trs(Vec3::one(), vec3(0., 0., std::f64::consts::FRAC_PI_2), Vec3::splat(2.));
    let point = &trs * &Matrix::from(vec4(1., 1., 1., 1.));
    assert_eq!(Vec4::try_from(&point).unwrap(), vec4(-1., 3., 3., 1.));
    assert!(Vec3::<f64>::try_from(&point).is_err());
    assert!(Mat3::<f64>::try_from(&trs).is_err());
  }

  #[test]
  fn arithmetic() {
    let a = m(&[&[1., 2.], &[3., 4.]]);
    let b = m(&[&[1., 1.], &[1., 1.]]);
    assert_eq!(a.clone() + b.clone(), m(&[&[2., 3.], &[4., 5.]]));
    assert_eq!(a.clone() - b.clone(), m(&[&[0., 1.], &[2., 3.]]));
    assert_eq!(a.clone() * 2., m(&[&[2., 4.], &[6., 8.]]));
    assert_eq!(-a.clone(), a.clone() * -1.);

    let mut c = a.clone();
    c += &b;
    c *= 2.;
    c -= &b;
    assert_eq!(c, m(&[&[3., 5.], &[7., 9.]]));
    c *= &Matrix::identity(2).unwrap();
    assert_eq!(c, m(&[&[3., 5.], &[7., 9.]]));
  }
}
