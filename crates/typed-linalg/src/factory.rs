//! Factory functions keyed by dimension tags.
//!
//! These mirror the constructors on [`Dense`] and [`Constant`], but take the shape as [`Dim`]
//! values so that call sites read like `dense(S2, S3, ...)`.

use crate::{Constant, ConstantVector, Dense, DenseVector, Dim, Error, Result};

/// Creates a [`Dense`] matrix by invoking `f` once with the row and column of each element.
///
/// # Examples
///
/// ```
/// # use typed_linalg::*;
/// let m = dense(S2, S2, |r, c| if r == c { 1.0 } else { 0.0 });
/// assert_eq!(m, Dense::identity());
/// ```
pub fn dense<F, const R: usize, const C: usize>(_rows: Dim<R>, _cols: Dim<C>, f: F) -> Dense<R, C>
where
    F: FnMut(usize, usize) -> f64,
{
    Dense::from_fn(f)
}

/// Creates a [`Dense`] matrix from row data, checking it against the given dimension tags.
///
/// # Errors
///
/// Returns [`Error::RowCount`] or [`Error::RowLength`] if the data doesn't have exactly `R` rows
/// of `C` elements.
///
/// # Examples
///
/// ```
/// # use typed_linalg::*;
/// let m = matrix_of(S2, S3, &[
///     [3.0, 2.0, 1.0],
///     [1.0, 0.0, 2.0],
/// ])?;
/// assert_eq!(m.get(1, 2), Ok(2.0));
///
/// let bad: &[&[f64]] = &[&[3.0, 2.0, 1.0], &[1.0, 0.0]];
/// assert!(matrix_of(S2, S3, bad).is_err());
/// # Ok::<(), Error>(())
/// ```
pub fn matrix_of<Row, const R: usize, const C: usize>(
    _rows: Dim<R>,
    _cols: Dim<C>,
    data: &[Row],
) -> Result<Dense<R, C>>
where
    Row: AsRef<[f64]>,
{
    Dense::try_from_rows(data)
}

/// Creates a [`Dense`] matrix with `value` copied into every element.
pub fn dense_splat<const R: usize, const C: usize>(
    _rows: Dim<R>,
    _cols: Dim<C>,
    value: f64,
) -> Dense<R, C> {
    Dense::splat(value)
}

/// Creates a [`Constant`] matrix, storing `value` once for every element.
///
/// # Examples
///
/// ```
/// # use typed_linalg::*;
/// let m = fill(S3, S2, 1.5);
/// assert_eq!(m, dense_splat(S3, S2, 1.5));
/// ```
pub fn fill<const R: usize, const C: usize>(
    _rows: Dim<R>,
    _cols: Dim<C>,
    value: f64,
) -> Constant<R, C> {
    Constant::new(value)
}

/// Creates a [`DenseVector`] by invoking `f` once with the index of each element.
pub fn dense_vector<F, const R: usize>(_rows: Dim<R>, mut f: F) -> DenseVector<R>
where
    F: FnMut(usize) -> f64,
{
    Dense::from_fn(|row, _| f(row))
}

/// Creates a [`DenseVector`] from its elements, checking their number against `R`.
///
/// # Errors
///
/// Returns [`Error::RowCount`] if `values` doesn't contain exactly `R` elements.
pub fn vector_of<const R: usize>(_rows: Dim<R>, values: &[f64]) -> Result<DenseVector<R>> {
    if values.len() != R {
        log::debug!(
            "rejecting vector data of length {} for {R}-element vector",
            values.len()
        );
        return Err(Error::row_count(R, values.len()));
    }
    Ok(Dense::from_fn(|row, _| values[row]))
}

/// Creates a [`DenseVector`] with `value` copied into every element.
pub fn dense_vector_splat<const R: usize>(_rows: Dim<R>, value: f64) -> DenseVector<R> {
    Dense::splat(value)
}

/// Creates a [`ConstantVector`], storing `value` once for every element.
pub fn fill_vector<const R: usize>(_rows: Dim<R>, value: f64) -> ConstantVector<R> {
    Constant::new(value)
}
