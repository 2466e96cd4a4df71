//! Input validation for store and algebra operations
//!
//! Pure functions on coordinates and shapes; none of them touch matrix
//! storage.

pub mod bounds;
pub mod shape;

pub use bounds::{validate_coordinate, validate_extent, validate_swap_pair, SliceBox};
pub use shape::{ensure_product_compatible, ensure_same_shape, kernel_half_extent};
