//! Flat binary stream format for matrix entries
//!
//! A stream is an `i32` entry count followed by that many
//! `(i32 row, i32 column, f32 value)` records. There is no header, no
//! dimension field and no version tag; dimensions are recovered on load from
//! the largest coordinates present.

pub mod codec;
pub mod constants;
pub mod record;

pub use codec::{decode, decode_count, decode_with, encode, encode_count, encode_with};
pub use constants::{COUNT_SIZE, MAX_COORDINATE, MAX_ENTRIES, RECORD_SIZE};
pub use record::{ByteOrder, CellRecord};
