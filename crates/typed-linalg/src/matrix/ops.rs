//! Implementations of `std::ops`, `std::fmt` and comparison traits for every representation.

use std::{
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use super::{debug_rows, display_rows, Matrix};
use crate::{Constant, Dense, Transposed};

/// Operators, implemented for a representation or a reference to one.
///
/// Every operator returns a new [`Dense`] matrix.
macro_rules! operators {
    ($(impl[$($params:tt)*] $lhs:ty;)+) => {
        $(
            /// Element-wise negation.
            impl<$($params)*> Neg for $lhs {
                type Output = Dense<R, C>;

                fn neg(self) -> Self::Output {
                    self.negated()
                }
            }

            /// Matrix + Scalar.
            impl<$($params)*> Add<f64> for $lhs {
                type Output = Dense<R, C>;

                fn add(self, rhs: f64) -> Self::Output {
                    self.plus_scalar(rhs)
                }
            }

            /// Matrix - Scalar.
            impl<$($params)*> Sub<f64> for $lhs {
                type Output = Dense<R, C>;

                fn sub(self, rhs: f64) -> Self::Output {
                    self.minus_scalar(rhs)
                }
            }

            /// Matrix * Scalar.
            impl<$($params)*> Mul<f64> for $lhs {
                type Output = Dense<R, C>;

                fn mul(self, rhs: f64) -> Self::Output {
                    self.times_scalar(rhs)
                }
            }

            /// Matrix / Scalar.
            impl<$($params)*> Div<f64> for $lhs {
                type Output = Dense<R, C>;

                fn div(self, rhs: f64) -> Self::Output {
                    self.div_scalar(rhs)
                }
            }

            /// Element-wise addition.
            impl<$($params)*, Rhs: Matrix<R, C>> Add<Rhs> for $lhs {
                type Output = Dense<R, C>;

                fn add(self, rhs: Rhs) -> Self::Output {
                    self.plus(&rhs)
                }
            }

            /// Element-wise subtraction.
            impl<$($params)*, Rhs: Matrix<R, C>> Sub<Rhs> for $lhs {
                type Output = Dense<R, C>;

                fn sub(self, rhs: Rhs) -> Self::Output {
                    self.minus(&rhs)
                }
            }

            /// Matrix * Matrix.
            impl<$($params)*, const T: usize> Mul<Dense<C, T>> for $lhs {
                type Output = Dense<R, T>;

                fn mul(self, rhs: Dense<C, T>) -> Self::Output {
                    self.matmul(&rhs)
                }
            }

            /// Matrix * Matrix.
            impl<$($params)*, const T: usize> Mul<&Dense<C, T>> for $lhs {
                type Output = Dense<R, T>;

                fn mul(self, rhs: &Dense<C, T>) -> Self::Output {
                    self.matmul(rhs)
                }
            }

            /// Matrix * Matrix.
            impl<$($params)*, const T: usize> Mul<Constant<C, T>> for $lhs {
                type Output = Dense<R, T>;

                fn mul(self, rhs: Constant<C, T>) -> Self::Output {
                    self.matmul(&rhs)
                }
            }

            /// Matrix * Matrix.
            impl<$($params)*, const T: usize> Mul<&Constant<C, T>> for $lhs {
                type Output = Dense<R, T>;

                fn mul(self, rhs: &Constant<C, T>) -> Self::Output {
                    self.matmul(rhs)
                }
            }

            /// Matrix * Transposed view.
            impl<'v, $($params)*, V: Matrix<T, C>, const T: usize> Mul<Transposed<'v, V, C, T>> for $lhs {
                type Output = Dense<R, T>;

                fn mul(self, rhs: Transposed<'v, V, C, T>) -> Self::Output {
                    self.matmul(&rhs)
                }
            }

            /// Matrix * Transposed view.
            impl<'v, $($params)*, V: Matrix<T, C>, const T: usize> Mul<&Transposed<'v, V, C, T>> for $lhs {
                type Output = Dense<R, T>;

                fn mul(self, rhs: &Transposed<'v, V, C, T>) -> Self::Output {
                    self.matmul(rhs)
                }
            }
        )+
    };
}

operators! {
    impl[const R: usize, const C: usize] Dense<R, C>;
    impl[const R: usize, const C: usize] &Dense<R, C>;
    impl[const R: usize, const C: usize] Constant<R, C>;
    impl[const R: usize, const C: usize] &Constant<R, C>;
    impl['a, M: Matrix<C, R>, const R: usize, const C: usize] Transposed<'a, M, R, C>;
    impl['a, M: Matrix<C, R>, const R: usize, const C: usize] &Transposed<'a, M, R, C>;
}

/// Formatting and comparisons, implemented for each representation.
///
/// All of them go through [`Matrix::get`], so they treat every representation the same way.
macro_rules! comparisons {
    ($(impl[$($params:tt)*] $ty:ty;)+) => {
        $(
            impl<$($params)*> fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    display_rows(self, f)
                }
            }

            impl<$($params)*> fmt::Debug for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    debug_rows(self, f)
                }
            }

            impl<$($params)*, Rhs: Matrix<R, C>> PartialEq<Rhs> for $ty {
                fn eq(&self, other: &Rhs) -> bool {
                    self.matrix_eq(other)
                }
            }

            impl<$($params)*, Rhs: Matrix<R, C>> AbsDiffEq<Rhs> for $ty {
                type Epsilon = f64;

                fn default_epsilon() -> f64 {
                    f64::default_epsilon()
                }

                fn abs_diff_eq(&self, other: &Rhs, epsilon: f64) -> bool {
                    all_pairs(self, other, |a, b| a.abs_diff_eq(&b, epsilon))
                }
            }

            impl<$($params)*, Rhs: Matrix<R, C>> RelativeEq<Rhs> for $ty {
                fn default_max_relative() -> f64 {
                    f64::default_max_relative()
                }

                fn relative_eq(&self, other: &Rhs, epsilon: f64, max_relative: f64) -> bool {
                    all_pairs(self, other, |a, b| a.relative_eq(&b, epsilon, max_relative))
                }
            }

            impl<$($params)*, Rhs: Matrix<R, C>> UlpsEq<Rhs> for $ty {
                fn default_max_ulps() -> u32 {
                    f64::default_max_ulps()
                }

                fn ulps_eq(&self, other: &Rhs, epsilon: f64, max_ulps: u32) -> bool {
                    all_pairs(self, other, |a, b| a.ulps_eq(&b, epsilon, max_ulps))
                }
            }
        )+
    };
}

comparisons! {
    impl[const R: usize, const C: usize] Dense<R, C>;
    impl[const R: usize, const C: usize] Constant<R, C>;
    impl['a, M: Matrix<C, R>, const R: usize, const C: usize] Transposed<'a, M, R, C>;
}

fn all_pairs<A, B, F, const R: usize, const C: usize>(a: &A, b: &B, mut pred: F) -> bool
where
    A: Matrix<R, C>,
    B: Matrix<R, C>,
    F: FnMut(f64, f64) -> bool,
{
    (0..R).all(|row| (0..C).all(|col| pred(a.elem(row, col), b.elem(row, col))))
}
