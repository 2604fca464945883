use thiserror::Error;

/// Everything that can go wrong inside the algebra types.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
  #[error("index {index} is out of range for a value with {len} components")]
  OutOfRange { index: usize, len: usize },
  #[error("the matrix is singular and has no inverse")]
  SingularMatrix,
  #[error("invalid argument: {0}")]
  InvalidArgument(&'static str),
  #[error("expect a square matrix, got {rows}x{cols}")]
  NotSquare { rows: usize, cols: usize },
  #[error("shape mismatch, expect {expected:?} but found {found:?}")]
  ShapeMismatch {
    expected: (usize, usize),
    found: (usize, usize),
  },
  #[error("failed to decompose the matrix: {0}")]
  DecompositionFailed(&'static str),
}

pub type MathResult<T> = Result<T, MathError>;

#[test]
fn error_messages() {
  let err = MathError::OutOfRange { index: 3, len: 2 };
  assert_eq!(
    err.to_string(),
    "index 3 is out of range for a value with 2 components"
  );
  let err = MathError::NotSquare { rows: 2, cols: 3 };
  assert_eq!(err.to_string(), "expect a square matrix, got 2x3");
}
