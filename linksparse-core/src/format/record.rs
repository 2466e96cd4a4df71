//! Fixed-size cell record and byte order handling

use super::constants::RECORD_SIZE;
use crate::cell::{Cell, Value};
use crate::error::{MatrixError, Result};
use bytemuck::{Pod, Zeroable};

/// Byte order used for every field of a stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ByteOrder {
    /// Order of the host that writes the stream
    #[default]
    Native,
    Little,
    Big,
}

impl ByteOrder {
    pub fn encode_i32(self, value: i32) -> [u8; 4] {
        match self {
            ByteOrder::Native => value.to_ne_bytes(),
            ByteOrder::Little => value.to_le_bytes(),
            ByteOrder::Big => value.to_be_bytes(),
        }
    }

    pub fn decode_i32(self, bytes: [u8; 4]) -> i32 {
        match self {
            ByteOrder::Native => i32::from_ne_bytes(bytes),
            ByteOrder::Little => i32::from_le_bytes(bytes),
            ByteOrder::Big => i32::from_be_bytes(bytes),
        }
    }

    fn encode_f32(self, value: f32) -> [u8; 4] {
        match self {
            ByteOrder::Native => value.to_ne_bytes(),
            ByteOrder::Little => value.to_le_bytes(),
            ByteOrder::Big => value.to_be_bytes(),
        }
    }

    fn decode_f32(self, bytes: [u8; 4]) -> f32 {
        match self {
            ByteOrder::Native => f32::from_ne_bytes(bytes),
            ByteOrder::Little => f32::from_le_bytes(bytes),
            ByteOrder::Big => f32::from_be_bytes(bytes),
        }
    }
}

/// On-stream representation of one cell
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRecord {
    pub row: i32,
    pub column: i32,
    pub value: f32,
}

impl CellRecord {
    /// Size of the record in bytes
    pub const SIZE: usize = core::mem::size_of::<Self>();

    pub fn from_cell(cell: &Cell) -> Result<Self> {
        let row = i32::try_from(cell.row()).map_err(|_| MatrixError::InvalidIndex)?;
        let column = i32::try_from(cell.column()).map_err(|_| MatrixError::InvalidIndex)?;
        Ok(Self {
            row,
            column,
            value: cell.value(),
        })
    }

    /// Coordinates as store indices; negative values are rejected
    pub fn coordinates(&self) -> Result<(usize, usize)> {
        let row = usize::try_from(self.row).map_err(|_| MatrixError::InvalidIndex)?;
        let column = usize::try_from(self.column).map_err(|_| MatrixError::InvalidIndex)?;
        Ok((row, column))
    }

    pub fn value(&self) -> Value {
        self.value
    }

    pub fn to_bytes(self, order: ByteOrder) -> [u8; RECORD_SIZE] {
        if order == ByteOrder::Native {
            return bytemuck::cast(self);
        }
        let mut bytes = [0u8; RECORD_SIZE];
        bytes[0..4].copy_from_slice(&order.encode_i32(self.row));
        bytes[4..8].copy_from_slice(&order.encode_i32(self.column));
        bytes[8..12].copy_from_slice(&order.encode_f32(self.value));
        bytes
    }

    pub fn from_bytes(bytes: [u8; RECORD_SIZE], order: ByteOrder) -> Self {
        if order == ByteOrder::Native {
            return bytemuck::cast(bytes);
        }
        let field =
            |start: usize| [bytes[start], bytes[start + 1], bytes[start + 2], bytes[start + 3]];
        Self {
            row: order.decode_i32(field(0)),
            column: order.decode_i32(field(4)),
            value: order.decode_f32(field(8)),
        }
    }
}
