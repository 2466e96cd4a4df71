//! Matrix algebra
//!
//! Every operation borrows its operands and builds a fresh result through the
//! store's `get`/`set`/iteration contract. Inputs are never mutated,
//! and a failed precondition returns an error before anything is built.

pub mod arith;
pub mod convolution;
pub mod structure;

pub use arith::{elementwise_product, multiply, scalar_multiply, sum};
pub use convolution::convolution;
pub use structure::{slice, swap_columns, swap_rows, transpose};
