//! Saving and loading matrices as flat cell streams
//!
//! Files hold a 4-byte entry count followed by one 12-byte record per stored
//! cell. Saves always rewrite the whole file.

use crate::config::CodecConfig;
use linksparse_core::format::{self, COUNT_SIZE, RECORD_SIZE};
use linksparse_core::{ByteOrder, CellRecord, IoFailure, ListOrder, Matrix, MatrixError, Result};
use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::{Path, PathBuf},
};
use tracing::instrument;

/// File name used by [`MatrixFile::save_default`]
pub const DEFAULT_FILE_NAME: &str = "matrix.bin";

/// A matrix file on disk together with the settings used to access it
#[derive(Debug, Clone)]
pub struct MatrixFile {
    path: PathBuf,
    config: CodecConfig,
}

impl MatrixFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self::with_config(path, CodecConfig::default())
    }

    pub fn with_config<P: AsRef<Path>>(path: P, config: CodecConfig) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            config,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Write `matrix` to the file, replacing any previous contents
    #[instrument(
        level = "debug",
        skip_all,
        fields(path = %self.path.display(), nnz = matrix.nnz())
    )]
    pub fn save(&self, matrix: &Matrix) -> Result<()> {
        let file = File::create(&self.path).map_err(|error| {
            tracing::debug!(%error, "failed to create matrix file");
            IoFailure::Open
        })?;
        write_to(file, matrix, self.config.byte_order)
    }

    /// Read the file into a new matrix
    ///
    /// Large files are memory-mapped when the `mmap` feature is enabled and
    /// the configuration allows it.
    #[instrument(level = "debug", skip_all, fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Matrix> {
        let file = File::open(&self.path).map_err(|error| {
            tracing::debug!(%error, "failed to open matrix file");
            IoFailure::Open
        })?;
        let len = file.metadata().map_err(read_failure)?.len();

        #[cfg(feature = "mmap")]
        if self.config.should_map(len) {
            tracing::debug!(len, "memory mapping matrix file");
            return crate::mmap_backend::MappedFile::open(&self.path)?.decode(&self.config);
        }

        let mut bytes = Vec::with_capacity(usize::try_from(len).unwrap_or_default());
        BufReader::new(file)
            .read_to_end(&mut bytes)
            .map_err(read_failure)?;
        format::decode_with(&bytes, self.config.byte_order, self.config.list_order)
    }

    /// Save `matrix` to [`DEFAULT_FILE_NAME`] in the working directory
    pub fn save_default(matrix: &Matrix) -> Result<Self> {
        let file = Self::new(DEFAULT_FILE_NAME);
        file.save(matrix)?;
        Ok(file)
    }
}

/// Stream `matrix` into `writer` in traversal order
pub fn write_to<W: Write>(writer: W, matrix: &Matrix, order: ByteOrder) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    writer
        .write_all(&format::encode_count(matrix.nnz(), order)?)
        .map_err(write_failure)?;
    for cell in matrix.iter() {
        writer
            .write_all(&CellRecord::from_cell(cell)?.to_bytes(order))
            .map_err(write_failure)?;
    }
    writer.flush().map_err(write_failure)
}

/// Read one stream from `reader` into a new matrix
///
/// Exactly the declared number of records is consumed; anything after them is
/// left unread.
pub fn read_from<R: Read>(
    mut reader: R,
    order: ByteOrder,
    list_order: ListOrder,
) -> Result<Matrix> {
    let mut count_bytes = [0u8; COUNT_SIZE];
    reader.read_exact(&mut count_bytes).map_err(read_failure)?;
    let count = format::decode_count(count_bytes, order)?;

    let mut matrix = Matrix::with_list_order(list_order);
    let mut raw = [0u8; RECORD_SIZE];
    for _ in 0..count {
        reader.read_exact(&mut raw).map_err(read_failure)?;
        let record = CellRecord::from_bytes(raw, order);
        let (row, column) = record.coordinates()?;
        matrix.set(row, column, record.value())?;
    }
    Ok(matrix)
}

fn read_failure(error: io::Error) -> MatrixError {
    tracing::debug!(%error, "matrix read failed");
    match error.kind() {
        io::ErrorKind::UnexpectedEof => IoFailure::Truncated.into(),
        _ => IoFailure::Read.into(),
    }
}

fn write_failure(error: io::Error) -> MatrixError {
    tracing::debug!(%error, "matrix write failed");
    IoFailure::Write.into()
}
