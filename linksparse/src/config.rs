//! Configuration for reading and writing matrix streams

use linksparse_core::{ByteOrder, ListOrder};

/// Default size at which loads switch from buffered reads to memory mapping
pub const DEFAULT_MMAP_THRESHOLD: usize = 64 * 1024;

/// Settings shared by matrix file saves and loads
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodecConfig {
    /// Byte order of every stream field
    pub byte_order: ByteOrder,
    /// Memory-map large files on load
    pub use_mmap: bool,
    /// Smallest file size, in bytes, that is memory-mapped
    pub mmap_threshold_bytes: usize,
    /// List order of matrices built by a load
    pub list_order: ListOrder,
}

impl CodecConfig {
    /// Set the stream byte order
    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Enable or disable memory-mapped loads
    pub fn with_mmap(mut self, use_mmap: bool) -> Self {
        self.use_mmap = use_mmap;
        self
    }

    /// Set the file size at which loads are memory-mapped
    pub fn with_mmap_threshold(mut self, bytes: usize) -> Self {
        self.mmap_threshold_bytes = bytes;
        self
    }

    /// Set the list order of loaded matrices
    pub fn with_list_order(mut self, list_order: ListOrder) -> Self {
        self.list_order = list_order;
        self
    }

    /// Whether a file of `len` bytes should be memory-mapped
    pub fn should_map(&self, len: u64) -> bool {
        cfg!(feature = "mmap")
            && self.use_mmap
            && len > 0
            && len >= self.mmap_threshold_bytes as u64
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            byte_order: ByteOrder::Native,
            use_mmap: true,
            mmap_threshold_bytes: DEFAULT_MMAP_THRESHOLD,
            list_order: ListOrder::Append,
        }
    }
}
