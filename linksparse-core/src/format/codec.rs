//! In-memory encoding and decoding of the flat cell stream

use super::constants::{COUNT_SIZE, MAX_ENTRIES, RECORD_SIZE};
use super::record::{ByteOrder, CellRecord};
use crate::error::{IoFailure, Result};
use crate::store::{ListOrder, Matrix};
use alloc::vec::Vec;
use tracing::instrument;

/// Encode the leading entry count
pub fn encode_count(count: usize, order: ByteOrder) -> Result<[u8; COUNT_SIZE]> {
    if count > MAX_ENTRIES {
        return Err(IoFailure::Write.into());
    }
    Ok(order.encode_i32(count as i32))
}

/// Decode the leading entry count; negative counts are corrupt
pub fn decode_count(bytes: [u8; COUNT_SIZE], order: ByteOrder) -> Result<usize> {
    usize::try_from(order.decode_i32(bytes)).map_err(|_| IoFailure::Corrupted.into())
}

/// Encode every cell of `matrix` in host byte order
pub fn encode(matrix: &Matrix) -> Result<Vec<u8>> {
    encode_with(matrix, ByteOrder::Native)
}

/// Encode every cell of `matrix`, in traversal order, using `order`
#[instrument(level = "debug", skip_all, fields(nnz = matrix.nnz(), order = ?order))]
pub fn encode_with(matrix: &Matrix, order: ByteOrder) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(COUNT_SIZE + matrix.nnz() * RECORD_SIZE);
    bytes.extend_from_slice(&encode_count(matrix.nnz(), order)?);
    for cell in matrix.iter() {
        bytes.extend_from_slice(&CellRecord::from_cell(cell)?.to_bytes(order));
    }
    Ok(bytes)
}

/// Decode a host byte order stream into a new matrix
pub fn decode(bytes: &[u8]) -> Result<Matrix> {
    decode_with(bytes, ByteOrder::Native, ListOrder::default())
}

/// Decode a stream into a new matrix whose lists follow `list_order`
///
/// Dimensions are inferred from the largest coordinates written. Bytes past
/// the declared entries are ignored.
#[instrument(level = "debug", skip_all, fields(len = bytes.len(), order = ?order))]
pub fn decode_with(bytes: &[u8], order: ByteOrder, list_order: ListOrder) -> Result<Matrix> {
    let (count_bytes, body) = bytes
        .split_first_chunk::<COUNT_SIZE>()
        .ok_or(IoFailure::Truncated)?;
    let count = decode_count(*count_bytes, order)?;
    let needed = count
        .checked_mul(RECORD_SIZE)
        .ok_or(IoFailure::Corrupted)?;
    if body.len() < needed {
        tracing::debug!(count, available = body.len(), "stream shorter than declared");
        return Err(IoFailure::Truncated.into());
    }
    if body.len() > needed {
        tracing::debug!(trailing = body.len() - needed, "ignoring trailing bytes");
    }

    let mut matrix = Matrix::with_list_order(list_order);
    for chunk in body[..needed].chunks_exact(RECORD_SIZE) {
        let mut raw = [0u8; RECORD_SIZE];
        raw.copy_from_slice(chunk);
        let record = CellRecord::from_bytes(raw, order);
        let (row, column) = record.coordinates()?;
        matrix.set(row, column, record.value())?;
    }

    #[cfg(debug_assertions)]
    matrix.assert_invariants();
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatrixError;
    use alloc::vec;

    fn sample() -> Matrix {
        Matrix::from_dense(&[[4.0f32, 2.0, 0.0], [1.0, 3.0, 0.0], [0.0, 0.0, 7.0]]).unwrap()
    }

    #[test]
    fn test_encode_layout() {
        let mut matrix = Matrix::new();
        matrix.set(1, 2, 0.5).unwrap();

        let bytes = encode(&matrix).unwrap();
        assert_eq!(bytes.len(), COUNT_SIZE + RECORD_SIZE);
        assert_eq!(&bytes[0..4], &1i32.to_ne_bytes());
        assert_eq!(&bytes[4..8], &1i32.to_ne_bytes());
        assert_eq!(&bytes[8..12], &2i32.to_ne_bytes());
        assert_eq!(&bytes[12..16], &0.5f32.to_ne_bytes());
    }

    #[test]
    fn test_round_trip() {
        let matrix = sample();
        let restored = decode(&encode(&matrix).unwrap()).unwrap();
        assert_eq!(restored, matrix);
    }

    #[test]
    fn test_round_trip_loses_trailing_zero_extent() {
        let mut matrix = Matrix::with_dimensions(6, 6).unwrap();
        matrix.set(1, 2, 3.0).unwrap();

        let restored = decode(&encode(&matrix).unwrap()).unwrap();
        assert_eq!(restored.dimensions(), (2, 3));
        assert_eq!(restored.get(1, 2), 3.0);
        assert_eq!(restored.nnz(), 1);
    }

    #[test]
    fn test_empty_matrix() {
        let bytes = encode(&Matrix::new()).unwrap();
        assert_eq!(bytes, 0i32.to_ne_bytes().to_vec());

        let restored = decode(&bytes).unwrap();
        assert_eq!(restored.dimensions(), (1, 1));
        assert_eq!(restored.nnz(), 0);
    }

    #[test]
    fn test_explicit_byte_order() {
        let matrix = sample();
        let bytes = encode_with(&matrix, ByteOrder::Big).unwrap();
        assert_eq!(&bytes[0..4], &[0, 0, 0, 5]);

        let restored = decode_with(&bytes, ByteOrder::Big, ListOrder::Sorted).unwrap();
        assert_eq!(restored, matrix);
        assert_eq!(restored.list_order(), ListOrder::Sorted);
    }

    #[test]
    fn test_largest_coordinate_decodes_without_dense_index() {
        let mut bytes = encode_count(1, ByteOrder::Native).unwrap().to_vec();
        let record = CellRecord {
            row: i32::MAX,
            column: 0,
            value: 1.0,
        };
        bytes.extend_from_slice(&record.to_bytes(ByteOrder::Native));
        assert_eq!(bytes.len(), 16);

        let matrix = decode(&bytes).unwrap();
        assert_eq!(matrix.dimensions(), (i32::MAX as usize + 1, 1));
        assert_eq!(matrix.nnz(), 1);
        assert_eq!(matrix.get(i32::MAX as usize, 0), 1.0);
        assert_eq!(encode(&matrix).unwrap(), bytes);
    }

    #[test]
    fn test_truncated_stream() {
        let bytes = encode(&sample()).unwrap();
        assert_eq!(
            decode(&bytes[..bytes.len() - 1]),
            Err(MatrixError::IoFailure(IoFailure::Truncated))
        );
        assert_eq!(
            decode(&bytes[..2]),
            Err(MatrixError::IoFailure(IoFailure::Truncated))
        );
    }

    #[test]
    fn test_negative_count_is_corrupt() {
        let bytes = (-3i32).to_ne_bytes();
        assert_eq!(
            decode(&bytes),
            Err(MatrixError::IoFailure(IoFailure::Corrupted))
        );
    }

    #[test]
    fn test_negative_coordinate_is_invalid_index() {
        let mut bytes = vec![];
        bytes.extend_from_slice(&1i32.to_ne_bytes());
        bytes.extend_from_slice(&(-1i32).to_ne_bytes());
        bytes.extend_from_slice(&0i32.to_ne_bytes());
        bytes.extend_from_slice(&2.0f32.to_ne_bytes());
        assert_eq!(decode(&bytes), Err(MatrixError::InvalidIndex));
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let mut bytes = encode(&sample()).unwrap();
        bytes.extend_from_slice(&[0xAA; 5]);
        assert_eq!(decode(&bytes).unwrap(), sample());
    }
}
