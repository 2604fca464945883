/// Construction, bounds checked component access, epsilon equality, array and
/// tuple conversions and display for a fixed component type.
macro_rules! impl_components {
  ($Type:ident <$S:ident> { $($field:ident : $index:literal),+ }, $n:literal, $Tuple:ty) => {
    impl<$S> $Type<$S> {
      pub const COMPONENTS: usize = $n;

      #[inline]
      pub const fn new($($field: $S),+) -> Self {
        Self { $($field),+ }
      }

      /// Component at `index`, or `OutOfRange`.
      #[inline]
      pub fn get(&self, index: usize) -> MathResult<&$S> {
        match index {
          $($index => Ok(&self.$field),)+
          _ => Err(MathError::OutOfRange { index, len: $n }),
        }
      }

      #[inline]
      pub fn get_mut(&mut self, index: usize) -> MathResult<&mut $S> {
        match index {
          $($index => Ok(&mut self.$field),)+
          _ => Err(MathError::OutOfRange { index, len: $n }),
        }
      }
    }

    impl<$S> std::ops::Index<usize> for $Type<$S> {
      type Output = $S;
      #[inline]
      fn index(&self, index: usize) -> &$S {
        match self.get(index) {
          Ok(v) => v,
          Err(e) => panic!("{e}"),
        }
      }
    }

    impl<$S> std::ops::IndexMut<usize> for $Type<$S> {
      #[inline]
      fn index_mut(&mut self, index: usize) -> &mut $S {
        match self.get_mut(index) {
          Ok(v) => v,
          Err(e) => panic!("{e}"),
        }
      }
    }

    impl<$S: Component> PartialEq for $Type<$S> {
      #[inline]
      fn eq(&self, other: &Self) -> bool {
        true $(&& self.$field.approx_eq(other.$field))+
      }
    }

    impl<$S> From<[$S; $n]> for $Type<$S> {
      #[inline]
      fn from(v: [$S; $n]) -> Self {
        let [$($field),+] = v;
        Self { $($field),+ }
      }
    }

    #[allow(clippy::from_over_into)]
    impl<$S> Into<[$S; $n]> for $Type<$S> {
      #[inline]
      fn into(self) -> [$S; $n] {
        [$(self.$field),+]
      }
    }

    impl<$S> From<$Tuple> for $Type<$S> {
      #[inline]
      fn from(v: $Tuple) -> Self {
        let ($($field),+,) = v;
        Self { $($field),+ }
      }
    }

    #[allow(clippy::from_over_into)]
    impl<$S> Into<$Tuple> for $Type<$S> {
      #[inline]
      fn into(self) -> $Tuple {
        ($(self.$field),+,)
      }
    }

    impl<$S: std::fmt::Debug> std::fmt::Display for $Type<$S> {
      fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let parts = [$(format!("{:?}", self.$field)),+];
        write!(f, "({})", parts.join(", "))
      }
    }

    unsafe impl<$S: bytemuck::Zeroable> bytemuck::Zeroable for $Type<$S> {}
    unsafe impl<$S: bytemuck::Pod> bytemuck::Pod for $Type<$S> {}

    impl<$S: Component> Vector<$S> for $Type<$S> {
      #[inline]
      fn create<F>(f: F) -> Self
      where
        F: Fn() -> $S,
      {
        Self { $($field: f()),+ }
      }

      #[inline]
      fn map<F>(self, f: F) -> Self
      where
        F: Fn($S) -> $S,
      {
        Self { $($field: f(self.$field)),+ }
      }

      #[inline]
      fn zip<F>(self, v2: Self, f: F) -> Self
      where
        F: Fn($S, $S) -> $S,
      {
        Self { $($field: f(self.$field, v2.$field)),+ }
      }

      #[inline]
      fn all<F>(self, f: F) -> bool
      where
        F: Fn($S) -> bool,
      {
        true $(&& f(self.$field))+
      }
    }

    impl<$S: Scalar> $Type<$S> {
      /// Every component is infinite.
      #[inline]
      pub fn is_infinity(&self) -> bool {
        self.all(|c| c.is_infinite())
      }

      /// Every component is NaN.
      #[inline]
      pub fn is_nan(&self) -> bool {
        self.all(|c| c.is_nan())
      }
    }

    impl<$S: Scalar> InnerProductSpace<$S> for $Type<$S> {
      #[inline]
      fn dot_impl(&self, b: Self) -> $S {
        $S::zero() $(+ self.$field * b.$field)+
      }
    }
  };
}

/// Componentwise arithmetic for the vector types: vector with vector, vector
/// with scalar and the compound assignment forms.
macro_rules! impl_vector_ops {
  ($Type:ident { $($field:ident),+ }) => {
    impl<T: Component> VectorImpl for $Type<T> {}
    impl<T: Scalar> RealVector<T> for $Type<T> {}

    impl<T: Component> Add for $Type<T> {
      type Output = Self;
      #[inline]
      fn add(self, rhs: Self) -> Self {
        Self { $($field: self.$field + rhs.$field),+ }
      }
    }

    impl<T: Component> Sub for $Type<T> {
      type Output = Self;
      #[inline]
      fn sub(self, rhs: Self) -> Self {
        Self { $($field: self.$field - rhs.$field),+ }
      }
    }

    impl<T: Component> Mul for $Type<T> {
      type Output = Self;
      #[inline]
      fn mul(self, rhs: Self) -> Self {
        Self { $($field: self.$field * rhs.$field),+ }
      }
    }

    impl<T: Component> Div for $Type<T> {
      type Output = Self;
      #[inline]
      fn div(self, rhs: Self) -> Self {
        Self { $($field: self.$field / rhs.$field),+ }
      }
    }

    impl<T: Component> Mul<T> for $Type<T> {
      type Output = Self;
      #[inline]
      fn mul(self, rhs: T) -> Self {
        Self { $($field: self.$field * rhs),+ }
      }
    }

    impl<T: Component> Div<T> for $Type<T> {
      type Output = Self;
      #[inline]
      fn div(self, rhs: T) -> Self {
        Self { $($field: self.$field / rhs),+ }
      }
    }

    impl<T: Component> Neg for $Type<T> {
      type Output = Self;
      #[inline]
      fn neg(self) -> Self {
        Self { $($field: -self.$field),+ }
      }
    }

    impl_assign_op!($Type<T>, $Type<T>, AddAssign::add_assign => Add::add);
    impl_assign_op!($Type<T>, $Type<T>, SubAssign::sub_assign => Sub::sub);
    impl_assign_op!($Type<T>, $Type<T>, MulAssign::mul_assign => Mul::mul);
    impl_assign_op!($Type<T>, $Type<T>, DivAssign::div_assign => Div::div);
    impl_assign_op!($Type<T>, T, MulAssign::mul_assign => Mul::mul);
    impl_assign_op!($Type<T>, T, DivAssign::div_assign => Div::div);

    impl_scalar_lhs_mul!($Type, f32);
    impl_scalar_lhs_mul!($Type, f64);
    impl_scalar_lhs_mul!($Type, i32);
  };
}

/// Compound assignment form of a binary operator for `$Rhs`.
macro_rules! impl_assign_op {
  ($Type:ident <$S:ident>, $Rhs:ty, $Assign:ident :: $assign:ident => $Op:ident :: $op:ident) => {
    impl<$S: Component> $Assign<$Rhs> for $Type<$S> {
      #[inline]
      fn $assign(&mut self, rhs: $Rhs) {
        *self = $Op::$op(*self, rhs);
      }
    }
  };
}

/// `scalar * value` for a concrete scalar type.
macro_rules! impl_scalar_lhs_mul {
  ($Type:ident, $S:ty) => {
    impl Mul<$Type<$S>> for $S {
      type Output = $Type<$S>;
      #[inline]
      fn mul(self, rhs: $Type<$S>) -> $Type<$S> {
        rhs * self
      }
    }
  };
}

/// Row storage, entry access, conversions and the arithmetic shared by the
/// fixed size square matrices.
macro_rules! impl_square_matrix {
  ($Mat:ident, $Vec:ident, $n:literal) => {
    impl<T> $Mat<T> {
      #[inline]
      pub const fn from_rows(rows: [$Vec<T>; $n]) -> Self {
        Self { rows }
      }
    }

    impl<T: Copy> $Mat<T> {
      /// Build from a function of (row, column).
      #[inline]
      pub fn from_fn(f: impl Fn(usize, usize) -> T) -> Self {
        Self {
          rows: std::array::from_fn(|r| $Vec::from(std::array::from_fn::<T, $n, _>(|c| f(r, c)))),
        }
      }

      #[inline]
      pub fn to_arrays(&self) -> [[T; $n]; $n] {
        self.rows.map(|row| row.into())
      }

      pub fn row(&self, index: usize) -> MathResult<$Vec<T>> {
        self
          .rows
          .get(index)
          .copied()
          .ok_or(MathError::OutOfRange { index, len: $n })
      }

      pub fn column(&self, index: usize) -> MathResult<$Vec<T>> {
        if index >= $n {
          return Err(MathError::OutOfRange { index, len: $n });
        }
        Ok($Vec::from(self.rows.map(|row| row[index])))
      }

      /// Entries on the main diagonal.
      pub fn diagonal(&self) -> $Vec<T> {
        $Vec::from(std::array::from_fn::<T, $n, _>(|i| self.rows[i][i]))
      }

      pub fn at(&self, row: usize, col: usize) -> MathResult<T> {
        self.row(row)?.get(col).copied()
      }

      pub fn at_mut(&mut self, row: usize, col: usize) -> MathResult<&mut T> {
        self
          .rows
          .get_mut(row)
          .ok_or(MathError::OutOfRange { index: row, len: $n })?
          .get_mut(col)
      }
    }

    impl<T: Scalar + bytemuck::Pod> $Mat<T> {
      /// Entries laid out row by row.
      #[inline]
      pub fn raw(&self) -> &[T] {
        bytemuck::cast_slice(&self.rows)
      }
    }

    impl<T> std::ops::Index<usize> for $Mat<T> {
      type Output = $Vec<T>;
      #[inline]
      fn index(&self, index: usize) -> &$Vec<T> {
        match self.rows.get(index) {
          Some(row) => row,
          None => panic!("{}", MathError::OutOfRange { index, len: $n }),
        }
      }
    }

    impl<T> std::ops::IndexMut<usize> for $Mat<T> {
      #[inline]
      fn index_mut(&mut self, index: usize) -> &mut $Vec<T> {
        match self.rows.get_mut(index) {
          Some(row) => row,
          None => panic!("{}", MathError::OutOfRange { index, len: $n }),
        }
      }
    }

    impl<T: Component> PartialEq for $Mat<T> {
      fn eq(&self, other: &Self) -> bool {
        self.rows.iter().zip(other.rows.iter()).all(|(a, b)| a == b)
      }
    }

    impl<T: std::fmt::Debug> std::fmt::Display for $Mat<T> {
      fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
          if i > 0 {
            writeln!(f)?;
          }
          write!(f, "{row}")?;
        }
        Ok(())
      }
    }

    impl<T: Copy> From<[[T; $n]; $n]> for $Mat<T> {
      #[inline]
      fn from(v: [[T; $n]; $n]) -> Self {
        Self { rows: v.map($Vec::from) }
      }
    }

    #[allow(clippy::from_over_into)]
    impl<T: Copy> Into<[[T; $n]; $n]> for $Mat<T> {
      #[inline]
      fn into(self) -> [[T; $n]; $n] {
        self.to_arrays()
      }
    }

    /// The vector becomes the first column, every other entry is zero.
    impl<T: Component> From<$Vec<T>> for $Mat<T> {
      fn from(v: $Vec<T>) -> Self {
        Self::from_fn(|r, c| if c == 0 { v[r] } else { T::zero() })
      }
    }

    /// First column of the matrix.
    impl<T: Component> From<$Mat<T>> for $Vec<T> {
      fn from(m: $Mat<T>) -> Self {
        $Vec::from(m.rows.map(|row| row[0]))
      }
    }

    unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for $Mat<T> {}
    unsafe impl<T: bytemuck::Pod> bytemuck::Pod for $Mat<T> {}

    impl<T: Scalar> SquareMatrixDimension<$n> for $Mat<T> {}

    impl<T: Scalar> num_traits::Zero for $Mat<T> {
      #[inline]
      fn zero() -> Self {
        Self::from_fn(|_, _| T::zero())
      }
      #[inline]
      fn is_zero(&self) -> bool {
        self.is_null()
      }
    }

    impl<T: Scalar> num_traits::One for $Mat<T> {
      #[inline]
      fn one() -> Self {
        Self::from_fn(|r, c| if r == c { T::one() } else { T::zero() })
      }
    }

    impl<T: Scalar> Add for $Mat<T> {
      type Output = Self;
      #[inline]
      fn add(self, rhs: Self) -> Self {
        Self::from_fn(|r, c| self.rows[r][c] + rhs.rows[r][c])
      }
    }

    impl<T: Scalar> Sub for $Mat<T> {
      type Output = Self;
      #[inline]
      fn sub(self, rhs: Self) -> Self {
        Self::from_fn(|r, c| self.rows[r][c] - rhs.rows[r][c])
      }
    }

    impl<T: Scalar> Neg for $Mat<T> {
      type Output = Self;
      #[inline]
      fn neg(self) -> Self {
        Self::from_fn(|r, c| -self.rows[r][c])
      }
    }

    impl<T: Scalar> Mul<T> for $Mat<T> {
      type Output = Self;
      #[inline]
      fn mul(self, rhs: T) -> Self {
        Self::from_fn(|r, c| self.rows[r][c] * rhs)
      }
    }

    impl<T: Scalar> Div<T> for $Mat<T> {
      type Output = Self;
      #[inline]
      fn div(self, rhs: T) -> Self {
        Self::from_fn(|r, c| self.rows[r][c] / rhs)
      }
    }

    impl<T: Scalar> Mul for $Mat<T> {
      type Output = Self;
      fn mul(self, rhs: Self) -> Self {
        Self::from_fn(|r, c| (0..$n).fold(T::zero(), |acc, k| acc + self.rows[r][k] * rhs.rows[k][c]))
      }
    }

    impl<T: Scalar> Mul<$Vec<T>> for $Mat<T> {
      type Output = $Vec<T>;
      #[inline]
      fn mul(self, v: $Vec<T>) -> $Vec<T> {
        $Vec::from(self.rows.map(|row| row.dot(v)))
      }
    }

    impl<T: Scalar> AddAssign for $Mat<T> {
      #[inline]
      fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
      }
    }

    impl<T: Scalar> SubAssign for $Mat<T> {
      #[inline]
      fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
      }
    }

    impl<T: Scalar> MulAssign for $Mat<T> {
      #[inline]
      fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
      }
    }

    impl<T: Scalar> MulAssign<T> for $Mat<T> {
      #[inline]
      fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
      }
    }

    impl<T: Scalar> DivAssign<T> for $Mat<T> {
      #[inline]
      fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
      }
    }

    impl_scalar_lhs_mul!($Mat, f32);
    impl_scalar_lhs_mul!($Mat, f64);
  };
}
