use std::ops::Index;

use crate::{error::check_bounds, Dim, Matrix, Result, Transposed};

/// An `R`x`C` matrix in which every element has the same value.
///
/// Only the value is stored, regardless of the shape. Element access is still bounds-checked
/// against `R`x`C`.
///
/// # Examples
///
/// ```
/// # use typed_linalg::*;
/// let ones = Constant::<2, 3>::new(1.0);
/// assert_eq!(ones.get(1, 2), Ok(1.0));
/// assert!(ones.get(2, 0).is_err());
/// assert_eq!(ones, Dense::from_rows([[1.0; 3]; 2]));
/// ```
#[derive(Clone, Copy)]
pub struct Constant<const R: usize, const C: usize> {
    value: f64,
}

impl<const R: usize, const C: usize> Constant<R, C> {
    /// Creates a matrix whose elements are all `value`.
    pub fn new(value: f64) -> Self {
        let () = Dim::<R>::ASSERT_POSITIVE;
        let () = Dim::<C>::ASSERT_POSITIVE;
        Self { value }
    }

    /// Returns the value of every element.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl<const R: usize, const C: usize> Matrix<R, C> for Constant<R, C> {
    type Transpose<'a> = Transposed<'a, Self, C, R> where Self: 'a;

    #[inline]
    fn get(&self, row: usize, col: usize) -> Result<f64> {
        check_bounds::<R, C>(row, col)?;
        Ok(self.value)
    }

    #[inline]
    fn transpose(&self) -> Self::Transpose<'_> {
        Transposed::new(self)
    }
}

impl<const R: usize, const C: usize> Index<(usize, usize)> for Constant<R, C> {
    type Output = f64;

    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        if let Err(e) = check_bounds::<R, C>(row, col) {
            panic!("{e}");
        }
        &self.value
    }
}
