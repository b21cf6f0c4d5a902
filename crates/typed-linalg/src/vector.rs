use crate::{Constant, Dense, Matrix, Result};

/// A column vector with `R` elements, stored as a [`Dense`] matrix.
pub type DenseVector<const R: usize> = Dense<R, 1>;

/// A column vector with `R` elements that all have the same value.
pub type ConstantVector<const R: usize> = Constant<R, 1>;

/// A matrix with a single column.
///
/// This is implemented for every [`Matrix`] with one column; it adds nothing but a narrower
/// contract and a few conveniences.
///
/// # Examples
///
/// ```
/// # use typed_linalg::*;
/// let a = fill_vector(S3, 1.0);
/// let b = fill_vector(S3, 2.0);
/// assert_eq!((a.transpose() * b).to_scalar(), 6.0);
/// assert_eq!(a.dot(&b), 6.0);
/// ```
pub trait Vector<const R: usize>: Matrix<R, 1> {
    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Index`][crate::Error::Index] if `index >= R`.
    #[inline]
    fn at(&self, index: usize) -> Result<f64> {
        self.get(index, 0)
    }

    /// Computes the dot product of `self` and `other`.
    fn dot<V: Vector<R>>(&self, other: &V) -> f64 {
        (0..R).fold(0.0, |acc, i| acc + self.elem(i, 0) * other.elem(i, 0))
    }
}

impl<V, const R: usize> Vector<R> for V where V: Matrix<R, 1> {}

/// Extracts the only element of a 1x1 matrix.
///
/// This is only implemented for matrices with exactly one row and one column, so collapsing a
/// product like `aᵀ * b` into a scalar is checked by the compiler:
///
/// ```
/// # use typed_linalg::*;
/// let a = vector_of(S2, &[1.0, 2.0])?;
/// let b = vector_of(S2, &[3.0, 4.0])?;
/// assert_eq!(a.t().matmul(&b).to_scalar(), 11.0);
/// # Ok::<(), Error>(())
/// ```
///
/// ```compile_fail
/// # use typed_linalg::*;
/// let a = fill_vector(S3, 1.0);
/// let x = a.to_scalar(); // a 3x1 matrix is not a scalar
/// ```
///
/// ```compile_fail
/// # use typed_linalg::*;
/// let a = fill_vector(S3, 1.0);
/// let x = (a * a.transpose()).to_scalar(); // neither is a 3x3 one
/// ```
pub trait ToScalar: Matrix<1, 1> {
    /// Returns the element at `(0, 0)`.
    #[inline]
    fn to_scalar(&self) -> f64 {
        self.elem(0, 0)
    }
}

impl<M> ToScalar for M where M: Matrix<1, 1> {}

impl<const R: usize> Dense<R, 1> {
    /// Creates a column vector from its elements.
    pub fn from_column(values: [f64; R]) -> Self {
        Self::from_fn(|row, _| values[row])
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn at() {
        let v = DenseVector::from_column([1.0, 2.0, 3.0]);
        assert_eq!(v.at(0), Ok(1.0));
        assert_eq!(v.at(2), Ok(3.0));
        assert!(v.at(3).unwrap_err().is_index());
        assert!(v.get(0, 1).is_err());
    }

    #[test]
    fn contraction() {
        let a = fill_vector(S3, 1.0);
        let b = fill_vector(S3, 2.0);
        assert_eq!((a.transpose() * b).to_scalar(), 6.0);
        assert_eq!(a.t().matmul(&b).to_scalar(), 6.0);

        let big = fill_vector(Dim::<100>, 0.5);
        assert_eq!((big.t() * big).to_scalar(), 25.0);
    }

    #[test]
    fn outer_product() {
        let a = DenseVector::from_column([1.0, 2.0]);
        let b = DenseVector::from_column([3.0, 4.0, 5.0]);
        let outer: Dense<2, 3> = a * b.transpose();
        assert_eq!(
            outer,
            Dense::from_rows([
                [3.0, 4.0, 5.0], //
                [6.0, 8.0, 10.0],
            ])
        );
    }

    #[test]
    fn dot() {
        let a = DenseVector::from_column([1.0, 3.0, -5.0]);
        let b = DenseVector::from_column([4.0, -2.0, -1.0]);
        assert_eq!(a.dot(&b), 3.0);
        assert_eq!(a.dot(&fill_vector(S3, 1.0)), -1.0);
    }

    #[test]
    fn vectors_are_matrices() {
        let v = fill_vector(S2, 1.0);
        assert_eq!(v + DenseVector::from_column([1.0, 2.0]), Dense::from_rows([[2.0], [3.0]]));
        assert_eq!(v.to_string(), "[1.0|1.0]");
        assert_eq!(Dense::<1, 1>::splat(4.0).to_scalar(), 4.0);
    }
}
