//! Bounds-checked random-access reader.

use crate::{BufferError, BufferResult, ByteOrder};

/// A non-owning view over encoded bytes.
///
/// Unlike a cursor, a `Reader` never moves: every accessor takes the absolute
/// index to read from. This lets one view be shared by every level of a
/// decode without any bookkeeping beyond the index itself.
///
/// # Example
///
/// ```
/// use sbe_buffers::{ByteOrder, Reader};
///
/// let data = [0x01, 0x02, 0x03, 0x04];
/// let reader = Reader::new(&data);
///
/// assert_eq!(reader.get_u16(0, ByteOrder::BigEndian).unwrap(), 0x0102);
/// assert_eq!(reader.get_u16(0, ByteOrder::LittleEndian).unwrap(), 0x0201);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Reader<'a> {
    /// The underlying byte slice.
    pub uint8: &'a [u8],
}

macro_rules! get_int {
    ($(#[$meta:meta])* $name:ident, $ty:ty, $width:expr) => {
        $(#[$meta])*
        #[inline]
        pub fn $name(&self, index: usize, order: ByteOrder) -> BufferResult<$ty> {
            let bytes: [u8; $width] = self.array(index)?;
            Ok(match order {
                ByteOrder::LittleEndian => <$ty>::from_le_bytes(bytes),
                ByteOrder::BigEndian => <$ty>::from_be_bytes(bytes),
            })
        }
    };
}

impl<'a> Reader<'a> {
    /// Creates a new reader for the given byte slice.
    pub fn new(uint8: &'a [u8]) -> Self {
        Self { uint8 }
    }

    /// Number of readable bytes.
    pub fn capacity(&self) -> usize {
        self.uint8.len()
    }

    /// Fails unless `length` bytes starting at `index` are readable.
    #[inline]
    pub fn check_limit(&self, index: usize, length: usize) -> BufferResult<()> {
        match index.checked_add(length) {
            Some(end) if end <= self.uint8.len() => Ok(()),
            _ => Err(BufferError::OutOfBounds {
                index,
                length,
                capacity: self.uint8.len(),
            }),
        }
    }

    #[inline]
    fn array<const N: usize>(&self, index: usize) -> BufferResult<[u8; N]> {
        self.check_limit(index, N)?;
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(&self.uint8[index..index + N]);
        Ok(bytes)
    }

    /// Reads an unsigned 8-bit integer.
    #[inline]
    pub fn get_u8(&self, index: usize) -> BufferResult<u8> {
        self.check_limit(index, 1)?;
        Ok(self.uint8[index])
    }

    /// Reads a signed 8-bit integer.
    #[inline]
    pub fn get_i8(&self, index: usize) -> BufferResult<i8> {
        Ok(self.get_u8(index)? as i8)
    }

    get_int!(
        /// Reads an unsigned 16-bit integer.
        get_u16, u16, 2
    );
    get_int!(
        /// Reads a signed 16-bit integer.
        get_i16, i16, 2
    );
    get_int!(
        /// Reads an unsigned 32-bit integer.
        get_u32, u32, 4
    );
    get_int!(
        /// Reads a signed 32-bit integer.
        get_i32, i32, 4
    );
    get_int!(
        /// Reads an unsigned 64-bit integer.
        get_u64, u64, 8
    );
    get_int!(
        /// Reads a signed 64-bit integer.
        get_i64, i64, 8
    );

    /// Reads a 32-bit float.
    ///
    /// The raw bits are read as an integer in `order` and then reinterpreted,
    /// so a swapped float never passes through a float register.
    #[inline]
    pub fn get_f32(&self, index: usize, order: ByteOrder) -> BufferResult<f32> {
        Ok(f32::from_bits(self.get_u32(index, order)?))
    }

    /// Reads a 64-bit float. See [`Reader::get_f32`].
    #[inline]
    pub fn get_f64(&self, index: usize, order: ByteOrder) -> BufferResult<f64> {
        Ok(f64::from_bits(self.get_u64(index, order)?))
    }

    /// Borrows `length` bytes starting at `index`.
    pub fn get_bytes(&self, index: usize, length: usize) -> BufferResult<&'a [u8]> {
        self.check_limit(index, length)?;
        Ok(&self.uint8[index..index + length])
    }

    /// Copies `dst.len()` bytes starting at `index` into `dst`.
    pub fn get_bytes_into(&self, index: usize, dst: &mut [u8]) -> BufferResult<()> {
        let src = self.get_bytes(index, dst.len())?;
        dst.copy_from_slice(src);
        Ok(())
    }
}
