//! linksparse - cross-linked sparse matrices
//!
//! Every stored entry lives on two singly linked lists at once: one for its
//! row and one for its column. Reads, writes and removals walk a single line,
//! and row or column scans never touch empty lines.
//!
//! ## Architecture
//!
//! - **linksparse-core**: storage engine, algebra and the flat stream format (no I/O)
//! - **linksparse**: file persistence, memory-mapped loading and configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use linksparse::{algebra, CodecConfig, ListOrder, Matrix, MatrixFile};
//!
//! fn example() -> linksparse::Result<()> {
//!     let mut matrix = Matrix::new();
//!     matrix.set(0, 0, 4.0)?;
//!     matrix.set(0, 1, 2.0)?;
//!     matrix.set(1, 1, 3.0)?;
//!
//!     let squared = algebra::multiply(&matrix, &matrix)?;
//!     println!("squared[0, 1] = {}", squared.get(0, 1));
//!
//!     let file = MatrixFile::with_config(
//!         "squared.bin",
//!         CodecConfig::default().with_list_order(ListOrder::Sorted),
//!     );
//!     file.save(&squared)?;
//!     assert_eq!(file.load()?, squared);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **mmap** (default): memory-map large files on load
//! - **serde**: serialize configuration and format types

pub use linksparse_core::{
    // Storage
    Cell, Cells, LineIter, ListOrder, Matrix, Value,
    // Traits
    MatrixOperations, SparseMatrix,
    // Stream format
    ByteOrder, CellRecord,
    // Error handling
    ErrorCategory, IoFailure, MatrixError, Result,
};
pub use linksparse_core::{algebra, format};

pub mod config;
pub mod file_io;
#[cfg(feature = "mmap")]
pub mod mmap_backend;

pub use config::{CodecConfig, DEFAULT_MMAP_THRESHOLD};
pub use file_io::{read_from, write_to, MatrixFile, DEFAULT_FILE_NAME};
#[cfg(feature = "mmap")]
pub use mmap_backend::MappedFile;
