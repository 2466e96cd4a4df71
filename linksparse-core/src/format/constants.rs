//! Layout constants for the flat cell stream

/// Size of the leading entry count in bytes
pub const COUNT_SIZE: usize = 4;

/// Size of one `(row, column, value)` record in bytes
pub const RECORD_SIZE: usize = 12;

/// Largest row or column index the stream can carry
pub const MAX_COORDINATE: usize = i32::MAX as usize;

/// Largest number of entries the stream can declare
pub const MAX_ENTRIES: usize = i32::MAX as usize;
