//! A small linear algebra library with compile-time checked matrix dimensions.
//!
//! # Motivation
//!
//! Most matrix libraries check shapes when an operation runs: adding a 2x3 matrix to a 3x2 matrix
//! compiles fine and fails (or, worse, silently broadcasts) at runtime. This library encodes the
//! number of rows and columns in the type of every matrix, so those programs are rejected by the
//! compiler instead:
//!
//! ```compile_fail
//! # use typed_linalg::*;
//! let a = dense(S2, S3, |r, c| (r + c) as f64);
//! let b = dense(S3, S2, |r, c| (r * c) as f64);
//! let _ = &a + &b; // 2x3 + 3x2 does not type-check
//! ```
//!
//! Multiplication is the only operation that changes the shape, and it only accepts operands that
//! share the contracted dimension:
//!
//! ```
//! # use typed_linalg::*;
//! let a = Dense::from_rows([
//!     [3.0, 2.0, 1.0],
//!     [1.0, 0.0, 2.0],
//! ]);
//! let b = Dense::from_rows([
//!     [1.0, 2.0],
//!     [0.0, 1.0],
//!     [4.0, 0.0],
//! ]);
//! assert_eq!(&a * &b, Dense::from_rows([
//!     [7.0, 8.0],
//!     [9.0, 2.0],
//! ]));
//! ```
//!
//! # Design
//!
//! - Dimensions are [`Dim`] tags, one type per positive size. `S1` to `S16` are provided as
//!   shorthands, any other size is written `Dim::<N>`.
//! - [`Matrix`] is the contract every representation implements. A representation only supplies
//!   checked element access and its transpose type; arithmetic, equality and formatting are
//!   default methods implemented once in terms of element access.
//! - There are three representations: [`Dense`] owns its elements, [`Constant`] stores a single
//!   value for every element, and [`Transposed`] is a borrowing view that swaps rows and columns.
//! - [`Vector`] is any matrix with a single column. [`ToScalar`] extracts the value of a 1x1
//!   matrix and is only implemented for that shape.
//!
//! # Non-Goals
//!
//! - No decompositions (LU, QR, eigenvalues), sparse storage, or SIMD/parallel kernels.
//! - No serialization format and no dynamically-sized matrices.

mod constant;
mod dense;
mod dim;
mod error;
mod factory;
mod matrix;
mod transposed;
mod vector;

pub use constant::*;
pub use dense::*;
pub use dim::*;
pub use error::*;
pub use factory::*;
pub use matrix::*;
pub use transposed::*;
pub use vector::*;
