//! Width and byte-order aware primitive accessors.
//!
//! Every read is parameterised by the primitive type and byte order of the
//! token being read. Nothing here assumes a global byte order.

use sbe_buffers::{ByteOrder, Reader};
use sbe_ir::{PrimitiveType, PrimitiveValue, Token};

use crate::{OtfError, OtfResult};

/// Reads an integer used to drive control flow, such as a group count or a
/// var data length.
///
/// Unsigned values are widened without sign extension. `uint64` values that
/// do not fit in an `i64` fail with [`OtfError::Overflow`], and floating point
/// types are rejected.
pub fn get_int(
    buffer: Reader<'_>,
    index: usize,
    primitive_type: PrimitiveType,
    byte_order: ByteOrder,
) -> OtfResult<i64> {
    Ok(match primitive_type {
        PrimitiveType::Char | PrimitiveType::Uint8 => buffer.get_u8(index)? as i64,
        PrimitiveType::Int8 => buffer.get_i8(index)? as i64,
        PrimitiveType::Int16 => buffer.get_i16(index, byte_order)? as i64,
        PrimitiveType::Uint16 => buffer.get_u16(index, byte_order)? as i64,
        PrimitiveType::Int32 => buffer.get_i32(index, byte_order)? as i64,
        PrimitiveType::Uint32 => buffer.get_u32(index, byte_order)? as i64,
        PrimitiveType::Int64 => buffer.get_i64(index, byte_order)?,
        PrimitiveType::Uint64 => {
            let value = buffer.get_u64(index, byte_order)?;
            i64::try_from(value).map_err(|_| OtfError::Overflow(value))?
        }
        PrimitiveType::Float | PrimitiveType::Double => {
            return Err(OtfError::UnsupportedType(primitive_type))
        }
    })
}

/// Reads the raw value of an enum or bit set.
///
/// `uint64` is returned bit for bit, so choice bit 63 stays testable.
pub fn get_long(
    buffer: Reader<'_>,
    index: usize,
    primitive_type: PrimitiveType,
    byte_order: ByteOrder,
) -> OtfResult<i64> {
    match primitive_type {
        PrimitiveType::Uint64 => Ok(buffer.get_u64(index, byte_order)? as i64),
        _ => get_int(buffer, index, primitive_type, byte_order),
    }
}

/// Reads any primitive as a [`PrimitiveValue`].
pub fn get_value(
    buffer: Reader<'_>,
    index: usize,
    primitive_type: PrimitiveType,
    byte_order: ByteOrder,
) -> OtfResult<PrimitiveValue> {
    Ok(match primitive_type {
        PrimitiveType::Char => PrimitiveValue::Int(buffer.get_u8(index)? as i64),
        PrimitiveType::Int8 => PrimitiveValue::Int(buffer.get_i8(index)? as i64),
        PrimitiveType::Int16 => PrimitiveValue::Int(buffer.get_i16(index, byte_order)? as i64),
        PrimitiveType::Int32 => PrimitiveValue::Int(buffer.get_i32(index, byte_order)? as i64),
        PrimitiveType::Int64 => PrimitiveValue::Int(buffer.get_i64(index, byte_order)?),
        PrimitiveType::Uint8 => PrimitiveValue::UInt(buffer.get_u8(index)? as u64),
        PrimitiveType::Uint16 => PrimitiveValue::UInt(buffer.get_u16(index, byte_order)? as u64),
        PrimitiveType::Uint32 => PrimitiveValue::UInt(buffer.get_u32(index, byte_order)? as u64),
        PrimitiveType::Uint64 => PrimitiveValue::UInt(buffer.get_u64(index, byte_order)?),
        PrimitiveType::Float => PrimitiveValue::Float(buffer.get_f32(index, byte_order)?),
        PrimitiveType::Double => PrimitiveValue::Double(buffer.get_f64(index, byte_order)?),
    })
}

/// Reads the control value described by `token`, relative to `block_index`,
/// as a length or count.
pub fn get_control(buffer: Reader<'_>, block_index: usize, token: &Token) -> OtfResult<usize> {
    let primitive_type = token
        .primitive_type()
        .ok_or_else(|| OtfError::MissingPrimitiveType(token.name().to_string()))?;
    let value = get_int(
        buffer,
        block_index + token.offset(),
        primitive_type,
        token.encoding().byte_order(),
    )?;
    usize::try_from(value).map_err(|_| OtfError::InvalidControlValue {
        name: token.name().to_string(),
        value,
    })
}

/// The raw integer bits of an enum or choice constant, matching [`get_long`].
pub fn raw_long(value: &PrimitiveValue) -> Option<i64> {
    match value {
        PrimitiveValue::Int(v) => Some(*v),
        PrimitiveValue::UInt(v) => Some(*v as i64),
        PrimitiveValue::Bytes(b) if b.len() == 1 => Some(b[0] as i64),
        _ => None,
    }
}

/// Decodes text in one of the supported character encodings.
pub fn decode_text(bytes: &[u8], character_encoding: &str) -> OtfResult<String> {
    match character_encoding.to_ascii_lowercase().as_str() {
        "utf-8" | "utf8" => Ok(String::from_utf8_lossy(bytes).into_owned()),
        "us-ascii" | "ascii" => Ok(bytes
            .iter()
            .map(|&b| if b.is_ascii() { b as char } else { char::REPLACEMENT_CHARACTER })
            .collect()),
        "iso-8859-1" | "iso_8859_1" | "latin1" => Ok(bytes.iter().map(|&b| b as char).collect()),
        _ => Err(OtfError::UnsupportedCharacterEncoding(
            character_encoding.to_string(),
        )),
    }
}
