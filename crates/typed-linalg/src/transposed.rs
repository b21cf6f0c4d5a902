use crate::{Matrix, Result};

/// A read-only view of a `C`x`R` matrix with rows and columns swapped.
///
/// The view borrows the matrix it was created from; it neither copies nor owns its elements, so
/// creating one is free. Reading `(row, col)` reads `(col, row)` of the underlying matrix.
///
/// Transposing a [`Transposed`] view returns the reference it was created from instead of
/// wrapping it again:
///
/// ```
/// # use typed_linalg::*;
/// let mat = Dense::from_rows([[1.0, 2.0, 3.0]]);
/// let t = mat.transpose();
/// assert_eq!(t.shape(), (3, 1));
/// assert_eq!(t.get(2, 0), Ok(3.0));
/// assert!(std::ptr::eq(t.transpose(), &mat));
/// ```
///
/// The view cannot outlive the matrix it borrows:
///
/// ```compile_fail
/// # use typed_linalg::*;
/// let t = {
///     let mat = Dense::from_rows([[1.0, 2.0, 3.0]]);
///     mat.transpose()
/// };
/// ```
pub struct Transposed<'a, M, const R: usize, const C: usize> {
    base: &'a M,
}

impl<'a, M, const R: usize, const C: usize> Transposed<'a, M, R, C>
where
    M: Matrix<C, R>,
{
    /// Creates a view of `base` with rows and columns swapped.
    #[inline]
    pub fn new(base: &'a M) -> Self {
        Self { base }
    }

    /// Returns the matrix this view borrows.
    #[inline]
    pub fn base(&self) -> &'a M {
        self.base
    }
}

impl<'a, M, const R: usize, const C: usize> Clone for Transposed<'a, M, R, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, M, const R: usize, const C: usize> Copy for Transposed<'a, M, R, C> {}

impl<'a, M, const R: usize, const C: usize> Matrix<R, C> for Transposed<'a, M, R, C>
where
    M: Matrix<C, R>,
{
    type Transpose<'b> = &'a M where Self: 'b;

    #[inline]
    fn get(&self, row: usize, col: usize) -> Result<f64> {
        // Checked here so that the error reports the view's shape, not the base's.
        crate::error::check_bounds::<R, C>(row, col)?;
        self.base.get(col, row)
    }

    #[inline]
    fn transpose(&self) -> Self::Transpose<'_> {
        self.base
    }
}
