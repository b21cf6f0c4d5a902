use std::{array, ops::Index};

use crate::{error::check_bounds, Dim, Error, Matrix, Result, Transposed};

/// A matrix that stores each of its `R`x`C` elements.
///
/// Elements are stored row-major in a single heap allocation, so large shapes never put their
/// elements on the stack. [`Dense`] is the result type of every operation in this crate.
///
/// # Construction
///
/// - [`Dense::from_fn`] computes each element once by invoking a closure with its row and column.
/// - [`Dense::from_rows`] takes nested arrays, whose shape is checked by the compiler.
/// - [`Dense::try_from_rows`] takes row data whose shape is only known at runtime, and returns an
///   error if it doesn't match `R`x`C`.
/// - [`Dense::splat`] copies a single value into every element. Use
///   [`Constant`][crate::Constant] to avoid storing the value `R * C` times.
/// - [`Dense::zeros`] and, for square matrices, [`Dense::identity`].
///
/// # Element Access
///
/// [`Matrix::get`] performs checked access. [`Dense`] also implements [`Index`] for tuples of
/// `(row, col)`, which panics when out of bounds:
///
/// ```
/// # use typed_linalg::*;
/// let mat = Dense::from_rows([
///     [0.0, 1.0],
/// ]);
/// assert_eq!(mat[(0, 1)], 1.0);
/// assert!(mat.get(0, 2).is_err());
/// ```
#[derive(Clone)]
pub struct Dense<const R: usize, const C: usize> {
    /// `R * C` elements, row-major.
    elems: Box<[f64]>,
}

impl<const R: usize, const C: usize> Dense<R, C> {
    /// Creates a matrix with every element set to 0.
    pub fn zeros() -> Self {
        Self::splat(0.0)
    }

    /// Creates a [`Dense`] matrix by invoking a closure with the position (row and column) of
    /// each element.
    ///
    /// The closure is called exactly once per element, in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use typed_linalg::*;
    /// let mat = Dense::from_fn(|row, col| (row * 10 + col) as f64);
    /// assert_eq!(mat, Dense::from_rows([
    ///     [ 0.0,  1.0,  2.0],
    ///     [10.0, 11.0, 12.0],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        let () = Dim::<R>::ASSERT_POSITIVE;
        let () = Dim::<C>::ASSERT_POSITIVE;
        let mut elems = Vec::with_capacity(R * C);
        for row in 0..R {
            for col in 0..C {
                elems.push(cb(row, col));
            }
        }
        Self {
            elems: elems.into_boxed_slice(),
        }
    }

    /// Creates a [`Dense`] matrix from an array of rows.
    pub fn from_rows(rows: [[f64; C]; R]) -> Self {
        Self::from_fn(|row, col| rows[row][col])
    }
    /// Creates a [`Dense`] matrix from row data whose shape is only known at runtime.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RowCount`] if `rows` doesn't contain exactly `R` rows, or
    /// [`Error::RowLength`] if any row doesn't contain exactly `C` elements. Nothing is truncated
    /// or padded.
    ///
    /// # Examples
    ///
    /// ```
    /// # use typed_linalg::*;
    /// let data = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
    /// let mat = Dense::<2, 2>::try_from_rows(&data).unwrap();
    /// assert_eq!(mat, Dense::from_rows([[1.0, 2.0], [3.0, 4.0]]));
    ///
    /// let err = Dense::<3, 2>::try_from_rows(&data).unwrap_err();
    /// assert_eq!(err.to_string(), "expected 3 rows, got 2");
    /// ```
    pub fn try_from_rows<Row: AsRef<[f64]>>(rows: &[Row]) -> Result<Self> {
        if rows.len() != R {
            log::debug!("rejecting row data for {R}x{C} matrix: got {} rows", rows.len());
            return Err(Error::row_count(R, rows.len()));
        }
        if let Some((row, data)) = rows
            .iter()
            .map(AsRef::<[f64]>::as_ref)
            .enumerate()
            .find(|(_, data)| data.len() != C)
        {
            log::debug!(
                "rejecting row data for {R}x{C} matrix: row {row} has {} elements",
                data.len()
            );
            return Err(Error::row_length(row, C, data.len()));
        }

        Ok(Self::from_fn(|row, col| rows[row].as_ref()[col]))
    }

    /// Creates a [`Dense`] matrix with each element initialized to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use typed_linalg::*;
    /// let mat = Dense::<2, 2>::splat(7.0);
    /// assert_eq!(mat, Dense::from_rows([[7.0, 7.0], [7.0, 7.0]]));
    /// ```
    pub fn splat(value: f64) -> Self {
        Self::from_fn(|_, _| value)
    }

    /// Returns an iterator over the rows of this matrix, each a slice of `C` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use typed_linalg::*;
    /// let mat = Dense::from_rows([[1.0, 2.0], [3.0, 4.0]]);
    /// let rows: Vec<&[f64]> = mat.rows().collect();
    /// assert_eq!(rows, [[1.0, 2.0], [3.0, 4.0]]);
    /// ```
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.elems.chunks_exact(C)
    }

    /// Copies the elements into an array of rows.
    ///
    /// The array lives wherever the caller puts it, so this is meant for small shapes.
    pub fn to_rows(&self) -> [[f64; C]; R] {
        array::from_fn(|row| array::from_fn(|col| self.elems[row * C + col]))
    }

    /// Returns all elements as a flat slice, in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use typed_linalg::*;
    /// let mat = Dense::from_rows([[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(mat.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.elems
    }

    /// Returns the elements as raw bytes, in row-major order.
    #[cfg(feature = "bytemuck")]
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.elems)
    }
}

impl<const N: usize> Dense<N, N> {
    /// Returns the `N`x`N` identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else. Multiplying a matrix by it
    /// returns an equal matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use typed_linalg::*;
    /// let mat = Dense::from_rows([[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(&mat * Dense::identity(), mat);
    /// ```
    pub fn identity() -> Self {
        Self::from_fn(|row, col| if row == col { 1.0 } else { 0.0 })
    }
}

impl<const R: usize, const C: usize> Default for Dense<R, C> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const R: usize, const C: usize> From<[[f64; C]; R]> for Dense<R, C> {
    #[inline]
    fn from(rows: [[f64; C]; R]) -> Self {
        Self::from_rows(rows)
    }
}

impl<const R: usize, const C: usize> From<Dense<R, C>> for Vec<f64> {
    #[inline]
    fn from(mat: Dense<R, C>) -> Self {
        mat.elems.into_vec()
    }
}

impl<const R: usize, const C: usize> Matrix<R, C> for Dense<R, C> {
    type Transpose<'a> = Transposed<'a, Self, C, R> where Self: 'a;

    #[inline]
    fn get(&self, row: usize, col: usize) -> Result<f64> {
        check_bounds::<R, C>(row, col)?;
        Ok(self.elems[row * C + col])
    }

    #[inline]
    fn transpose(&self) -> Self::Transpose<'_> {
        Transposed::new(self)
    }
}

impl<const R: usize, const C: usize> Index<(usize, usize)> for Dense<R, C> {
    type Output = f64;

    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        if let Err(e) = check_bounds::<R, C>(row, col) {
            panic!("{e}");
        }
        &self.elems[row * C + col]
    }
}
