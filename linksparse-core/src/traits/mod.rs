//! Abstract read-only interfaces over sparse matrices

pub mod matrix;

pub use matrix::{MatrixOperations, SparseMatrix};
