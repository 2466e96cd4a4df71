//! Error types for sparse matrix operations

/// Ways a persistence stream can fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoFailure {
    /// The file could not be opened or created
    Open,
    /// The underlying reader failed
    Read,
    /// The underlying writer failed, or the matrix is too large to persist
    Write,
    /// The stream ended before the declared number of entries
    Truncated,
    /// The stream declares an impossible entry count
    Corrupted,
}

impl core::fmt::Display for IoFailure {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            IoFailure::Open => "could not open stream",
            IoFailure::Read => "read failed",
            IoFailure::Write => "write failed",
            IoFailure::Truncated => "stream truncated",
            IoFailure::Corrupted => "stream corrupted",
        };
        write!(f, "{msg}")
    }
}

/// Errors that can occur during matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Coordinate or shape not accepted by the operation
    InvalidIndex,
    /// Operands have incompatible shapes
    DimensionMismatch,
    /// Convolution kernel has an even dimension
    InvalidKernel,
    /// Persistence stream failure
    IoFailure(IoFailure),
}

/// Coarse classification of [`MatrixError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A precondition of a store or algebra call was violated
    InvalidOperation,
    /// Reading or writing a stream failed
    Io,
}

impl MatrixError {
    /// Classify this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            MatrixError::InvalidIndex
            | MatrixError::DimensionMismatch
            | MatrixError::InvalidKernel => ErrorCategory::InvalidOperation,
            MatrixError::IoFailure(_) => ErrorCategory::Io,
        }
    }
}

impl From<IoFailure> for MatrixError {
    fn from(failure: IoFailure) -> Self {
        MatrixError::IoFailure(failure)
    }
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::InvalidIndex => write!(f, "Invalid matrix index"),
            MatrixError::DimensionMismatch => write!(f, "Matrix dimensions do not match"),
            MatrixError::InvalidKernel => write!(f, "Convolution kernel must have odd dimensions"),
            MatrixError::IoFailure(failure) => write!(f, "I/O failure: {failure}"),
        }
    }
}

impl core::error::Error for MatrixError {}

/// Result type for matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;
