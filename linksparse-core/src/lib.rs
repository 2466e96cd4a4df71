#![no_std]

//! linksparse core - cross-linked sparse matrix engine
//!
//! This crate holds the storage engine, the algebra built on it and the flat
//! binary stream format. It performs no I/O; see the `linksparse` crate for
//! files and memory mapping.

extern crate alloc;

pub mod algebra;
pub mod cell;
pub mod error;
pub mod format;
pub mod store;
pub mod traits;
pub mod validation;

pub use cell::{Cell, CellId, Value};
pub use error::*;
pub use format::{ByteOrder, CellRecord};
pub use store::{Cells, LineIter, ListOrder, Matrix};
pub use traits::*;
