//! Random-access writer over an auto-growing buffer.

use crate::ByteOrder;

/// Writes encoded values at absolute indices.
///
/// Writing past the current length grows the buffer, zero-filling any gap,
/// so block padding and reserved bytes come out as zeros.
///
/// # Example
///
/// ```
/// use sbe_buffers::{ByteOrder, Writer};
///
/// let mut writer = Writer::new();
/// writer.put_u32(4, 0x01020304, ByteOrder::LittleEndian);
/// assert_eq!(writer.flush(), vec![0, 0, 0, 0, 0x04, 0x03, 0x02, 0x01]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Writer {
    /// The written bytes.
    pub uint8: Vec<u8>,
}

macro_rules! put_int {
    ($(#[$meta:meta])* $name:ident, $ty:ty) => {
        $(#[$meta])*
        #[inline]
        pub fn $name(&mut self, index: usize, value: $ty, order: ByteOrder) {
            let bytes = match order {
                ByteOrder::LittleEndian => value.to_le_bytes(),
                ByteOrder::BigEndian => value.to_be_bytes(),
            };
            self.put_bytes(index, &bytes);
        }
    };
}

impl Writer {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self { uint8: Vec::new() }
    }

    /// Creates an empty writer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            uint8: Vec::with_capacity(capacity),
        }
    }

    /// Number of bytes written so far, including zero-filled gaps.
    pub fn len(&self) -> usize {
        self.uint8.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uint8.is_empty()
    }

    /// Discards all written bytes.
    pub fn reset(&mut self) {
        self.uint8.clear();
    }

    fn ensure(&mut self, end: usize) {
        if end > self.uint8.len() {
            self.uint8.resize(end, 0);
        }
    }

    /// Writes raw bytes starting at `index`.
    pub fn put_bytes(&mut self, index: usize, src: &[u8]) {
        let end = index + src.len();
        self.ensure(end);
        self.uint8[index..end].copy_from_slice(src);
    }

    /// Writes an unsigned 8-bit integer.
    #[inline]
    pub fn put_u8(&mut self, index: usize, value: u8) {
        self.put_bytes(index, &[value]);
    }

    /// Writes a signed 8-bit integer.
    #[inline]
    pub fn put_i8(&mut self, index: usize, value: i8) {
        self.put_bytes(index, &[value as u8]);
    }

    put_int!(
        /// Writes an unsigned 16-bit integer.
        put_u16, u16
    );
    put_int!(
        /// Writes a signed 16-bit integer.
        put_i16, i16
    );
    put_int!(
        /// Writes an unsigned 32-bit integer.
        put_u32, u32
    );
    put_int!(
        /// Writes a signed 32-bit integer.
        put_i32, i32
    );
    put_int!(
        /// Writes an unsigned 64-bit integer.
        put_u64, u64
    );
    put_int!(
        /// Writes a signed 64-bit integer.
        put_i64, i64
    );

    /// Writes a 32-bit float via its raw bits.
    #[inline]
    pub fn put_f32(&mut self, index: usize, value: f32, order: ByteOrder) {
        self.put_u32(index, value.to_bits(), order);
    }

    /// Writes a 64-bit float via its raw bits.
    #[inline]
    pub fn put_f64(&mut self, index: usize, value: f64, order: ByteOrder) {
        self.put_u64(index, value.to_bits(), order);
    }

    /// Borrows the bytes written so far.
    pub fn as_slice(&self) -> &[u8] {
        &self.uint8
    }

    /// Takes the written bytes, leaving the writer empty.
    pub fn flush(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.uint8)
    }
}
