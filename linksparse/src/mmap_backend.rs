//! Memory-mapped loading of matrix files
//!
//! The mapping is only held while the stream is decoded; the resulting matrix
//! owns its cells and does not borrow from the file.

use crate::config::CodecConfig;
use linksparse_core::{format, IoFailure, Matrix, Result};
use memmap2::{Mmap, MmapOptions};
use std::{fs::File, path::Path};

/// Read-only mapping of a matrix file
pub struct MappedFile {
    mmap: Mmap,
}

impl MappedFile {
    /// Map the file at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref()).map_err(|error| {
            tracing::debug!(%error, path = %path.as_ref().display(), "failed to open matrix file");
            IoFailure::Open
        })?;

        // SAFETY: Read-only mapping; the file is not modified while mapped
        let mmap = unsafe {
            MmapOptions::new().map(&file).map_err(|error| {
                tracing::debug!(%error, "failed to memory map matrix file");
                IoFailure::Read
            })?
        };
        Ok(Self { mmap })
    }

    /// Raw stream bytes
    pub fn bytes(&self) -> &[u8] {
        &self.mmap
    }

    /// Decode the mapped stream into a new matrix
    pub fn decode(&self, config: &CodecConfig) -> Result<Matrix> {
        format::decode_with(self.bytes(), config.byte_order, config.list_order)
    }
}
