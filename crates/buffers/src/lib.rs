//! Binary buffer utilities for Simple Binary Encoding.
//!
//! Every read and write is addressed by an absolute index and parameterized
//! by the [`ByteOrder`] of the field being accessed. Nothing in this crate
//! assumes a global byte order.
//!
//! # Overview
//!
//! - [`Reader`] - Bounds-checked random access over a borrowed byte slice
//! - [`Writer`] - Random-access writes into an auto-growing buffer
//! - [`print_octets`] - Hex rendering for opaque bytes
//!
//! # Example
//!
//! ```
//! use sbe_buffers::{ByteOrder, Reader, Writer};
//!
//! let mut writer = Writer::new();
//! writer.put_u8(0, 0x01);
//! writer.put_u16(1, 0x0203, ByteOrder::BigEndian);
//! writer.put_bytes(3, b"hello");
//! let data = writer.flush();
//!
//! let reader = Reader::new(&data);
//! assert_eq!(reader.get_u8(0).unwrap(), 0x01);
//! assert_eq!(reader.get_u16(1, ByteOrder::BigEndian).unwrap(), 0x0203);
//! assert_eq!(reader.get_bytes(3, 5).unwrap(), b"hello");
//! assert!(reader.get_u32(6, ByteOrder::LittleEndian).is_err());
//! ```

mod print_octets;
mod reader;
mod writer;

pub use print_octets::print_octets;
pub use reader::Reader;
pub use writer::Writer;

use thiserror::Error;

/// Byte order of a single encoded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder {
    #[default]
    LittleEndian,
    BigEndian,
}

impl ByteOrder {
    /// Byte order of the host.
    #[cfg(target_endian = "little")]
    pub const NATIVE: ByteOrder = ByteOrder::LittleEndian;
    /// Byte order of the host.
    #[cfg(target_endian = "big")]
    pub const NATIVE: ByteOrder = ByteOrder::BigEndian;

    /// Whether values in this order can be read without swapping.
    pub fn is_native(self) -> bool {
        self == Self::NATIVE
    }
}

impl std::fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ByteOrder::LittleEndian => write!(f, "littleEndian"),
            ByteOrder::BigEndian => write!(f, "bigEndian"),
        }
    }
}

/// Error type for buffer operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Attempted to access bytes past the end of the buffer.
    #[error("index {index} with length {length} is out of bounds for capacity {capacity}")]
    OutOfBounds {
        index: usize,
        length: usize,
        capacity: usize,
    },
}

pub type BufferResult<T> = Result<T, BufferError>;
