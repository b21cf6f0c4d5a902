use std::fmt;

use itertools::Itertools;

use crate::{Dense, Dim, Result};

mod ops;

/// A grid of `R`x`C` real numbers.
///
/// This is the contract shared by every representation in this crate ([`Dense`],
/// [`Constant`][crate::Constant] and [`Transposed`][crate::Transposed]). An implementation only
/// has to provide bounds-checked element access through [`Matrix::get`] and decide what its
/// transpose looks like. Everything else (arithmetic, equality, formatting) is implemented once,
/// as default methods that read elements through [`Matrix::get`] and allocate a new [`Dense`]
/// result. No operation ever mutates an operand.
///
/// The shape is part of the type, so operations that combine two matrices only accept operands of
/// compatible shape:
///
/// ```
/// # use typed_linalg::*;
/// let a = fill(S2, S3, 1.0);
/// let b = dense(S2, S3, |r, c| (r * 3 + c) as f64);
/// let sum = a.plus(&b);
/// assert_eq!(sum.get(1, 2), Ok(6.0));
/// ```
///
/// ```compile_fail
/// # use typed_linalg::*;
/// let a = fill(S2, S3, 1.0);
/// let b = fill(S3, S3, 1.0);
/// let sum = a.plus(&b);
/// ```
///
/// Multiplication requires the column count of the receiver to match the row count of the
/// operand:
///
/// ```compile_fail
/// # use typed_linalg::*;
/// let a = fill(S2, S3, 1.0);
/// let product = a.matmul(&a);
/// ```
pub trait Matrix<const R: usize, const C: usize> {
    /// The type returned by [`Matrix::transpose`].
    ///
    /// Owning representations return a [`Transposed`][crate::Transposed] view borrowing `self`.
    /// A [`Transposed`][crate::Transposed] view returns the matrix it borrows instead, so
    /// transposing twice never nests views.
    type Transpose<'a>: Matrix<C, R>
    where
        Self: 'a;

    /// Returns the element at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Index`][crate::Error::Index] if `row >= R` or `col >= C`.
    fn get(&self, row: usize, col: usize) -> Result<f64>;

    /// Returns a view of this matrix with rows and columns swapped.
    ///
    /// This does not copy any elements.
    fn transpose(&self) -> Self::Transpose<'_>;

    /// Shorthand for [`Matrix::transpose`].
    #[inline]
    fn t(&self) -> Self::Transpose<'_> {
        self.transpose()
    }

    /// Returns the row dimension tag.
    #[inline]
    fn row_count(&self) -> Dim<R> {
        Dim
    }

    /// Returns the column dimension tag.
    #[inline]
    fn column_count(&self) -> Dim<C> {
        Dim
    }

    /// Returns `(rows, columns)`.
    #[inline]
    fn shape(&self) -> (usize, usize) {
        (R, C)
    }

    /// Returns the element at `(row, col)`, panicking if it is out of bounds.
    ///
    /// The default operators use this to read elements they know to be in bounds.
    #[track_caller]
    fn elem(&self, row: usize, col: usize) -> f64 {
        match self.get(row, col) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }

    /// Applies `f` to each element, returning a new [`Dense`] matrix.
    fn map<F>(&self, mut f: F) -> Dense<R, C>
    where
        F: FnMut(f64) -> f64,
    {
        Dense::from_fn(|row, col| f(self.elem(row, col)))
    }

    /// Combines each element with the element at the same position in `other`.
    fn zip_map<M, F>(&self, other: &M, mut f: F) -> Dense<R, C>
    where
        M: Matrix<R, C>,
        F: FnMut(f64, f64) -> f64,
    {
        Dense::from_fn(|row, col| f(self.elem(row, col), other.elem(row, col)))
    }

    /// Copies every element into a new [`Dense`] matrix.
    fn to_dense(&self) -> Dense<R, C> {
        self.map(|v| v)
    }

    /// Element-wise negation.
    fn negated(&self) -> Dense<R, C> {
        self.map(|v| -v)
    }

    /// Adds `scalar` to every element.
    fn plus_scalar(&self, scalar: f64) -> Dense<R, C> {
        self.map(|v| v + scalar)
    }

    /// Subtracts `scalar` from every element.
    fn minus_scalar(&self, scalar: f64) -> Dense<R, C> {
        self.map(|v| v - scalar)
    }

    /// Multiplies every element by `scalar`.
    fn times_scalar(&self, scalar: f64) -> Dense<R, C> {
        self.map(|v| v * scalar)
    }

    /// Divides every element by `scalar`.
    fn div_scalar(&self, scalar: f64) -> Dense<R, C> {
        self.map(|v| v / scalar)
    }

    /// Element-wise addition.
    fn plus<M: Matrix<R, C>>(&self, other: &M) -> Dense<R, C> {
        self.zip_map(other, |a, b| a + b)
    }

    /// Element-wise subtraction.
    fn minus<M: Matrix<R, C>>(&self, other: &M) -> Dense<R, C> {
        self.zip_map(other, |a, b| a - b)
    }

    /// Matrix product of `self` (`R`x`C`) and `other` (`C`x`T`).
    ///
    /// # Examples
    ///
    /// ```
    /// # use typed_linalg::*;
    /// let a = fill(S2, S3, 1.0);
    /// let b = dense(S3, S4, |r, _| r as f64);
    /// let product: Dense<2, 4> = a.matmul(&b);
    /// assert_eq!(product, fill(S2, S4, 3.0));
    /// ```
    fn matmul<M, const T: usize>(&self, other: &M) -> Dense<R, T>
    where
        M: Matrix<C, T>,
    {
        log::trace!("matrix product {R}x{C} * {C}x{T}");
        Dense::from_fn(|row, col| {
            (0..C).fold(0.0, |acc, j| acc + self.elem(row, j) * other.elem(j, col))
        })
    }

    /// Structural equality: `true` if every element equals the element at the same position in
    /// `other`, regardless of either matrix's representation.
    ///
    /// Only matrices of the same shape can be compared, whether through this method or `==`:
    ///
    /// ```compile_fail
    /// # use typed_linalg::*;
    /// let same = fill(S2, S2, 1.0) == fill(S2, S3, 1.0);
    /// ```
    ///
    /// ```compile_fail
    /// # use typed_linalg::*;
    /// let same = fill(S2, S2, 1.0).matrix_eq(&fill(S3, S2, 1.0));
    /// ```
    ///
    /// Neither can a matrix be compared with a value that is not one:
    ///
    /// ```compile_fail
    /// # use typed_linalg::*;
    /// let same = fill(S2, S2, 1.0) == 1.0;
    /// ```
    ///
    /// ```
    /// # use typed_linalg::*;
    /// assert!(fill(S2, S2, 1.0) == dense_splat(S2, S2, 1.0));
    /// ```
    fn matrix_eq<M: Matrix<R, C>>(&self, other: &M) -> bool {
        (0..R).all(|row| (0..C).all(|col| self.elem(row, col) == other.elem(row, col)))
    }
}

impl<'m, M, const R: usize, const C: usize> Matrix<R, C> for &'m M
where
    M: Matrix<R, C>,
{
    type Transpose<'a> = M::Transpose<'m> where Self: 'a;

    #[inline]
    fn get(&self, row: usize, col: usize) -> Result<f64> {
        M::get(self, row, col)
    }

    #[inline]
    fn transpose(&self) -> Self::Transpose<'_> {
        M::transpose(*self)
    }
}

/// Renders `[a, b|c, d]`: rows separated by `|`, elements by `, `.
pub(crate) fn display_rows<M, const R: usize, const C: usize>(
    mat: &M,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result
where
    M: Matrix<R, C>,
{
    f.write_str("[")?;
    for row in 0..R {
        if row != 0 {
            f.write_str("|")?;
        }
        write!(f, "{:?}", (0..C).map(|col| mat.elem(row, col)).format(", "))?;
    }
    f.write_str("]")
}

/// Renders a list of rows, each as a list of elements.
pub(crate) fn debug_rows<M, const R: usize, const C: usize>(
    mat: &M,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result
where
    M: Matrix<R, C>,
{
    struct FormatRow<'a, M, const R: usize, const C: usize>(&'a M, usize);
    impl<'a, M: Matrix<R, C>, const R: usize, const C: usize> fmt::Debug for FormatRow<'a, M, R, C> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_list()
                .entries((0..C).map(|col| self.0.elem(self.1, col)))
                .finish()
        }
    }

    f.debug_list()
        .entries((0..R).map(|row| FormatRow::<M, R, C>(mat, row)))
        .finish()
}
