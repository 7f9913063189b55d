//! Presence and version resolution for leaf values.
//!
//! A constant is never read from the buffer. An optional value introduced in
//! a schema version newer than the acting version resolves to its null
//! sentinel without reading either, since older encoders never wrote it.

use sbe_buffers::Reader;
use sbe_ir::{PrimitiveType, PrimitiveValue, Token};

use crate::types::{get_long, get_value, raw_long};
use crate::{OtfError, OtfResult};

/// The value of `token` if it can be known without reading the buffer.
pub fn const_or_not_present_value(token: &Token, acting_version: u32) -> Option<PrimitiveValue> {
    let encoding = token.encoding();
    if token.is_constant_encoding() {
        encoding.const_value().cloned()
    } else if token.is_optional_encoding() && acting_version < token.version() {
        encoding.applicable_null_value()
    } else {
        None
    }
}

fn primitive_type(token: &Token) -> OtfResult<PrimitiveType> {
    token
        .primitive_type()
        .ok_or_else(|| OtfError::MissingPrimitiveType(token.name().to_string()))
}

/// Resolves a leaf value. A char array resolves to [`PrimitiveValue::Bytes`],
/// any other array to its first element.
pub fn resolve_value(
    buffer: Reader<'_>,
    index: usize,
    type_token: &Token,
    acting_version: u32,
) -> OtfResult<PrimitiveValue> {
    if let Some(value) = const_or_not_present_value(type_token, acting_version) {
        return Ok(value);
    }
    let primitive_type = primitive_type(type_token)?;
    if primitive_type == PrimitiveType::Char && type_token.array_length() > 1 {
        let bytes = buffer.get_bytes(index, type_token.array_length())?;
        return Ok(PrimitiveValue::Bytes(bytes.to_vec()));
    }
    get_value(
        buffer,
        index,
        primitive_type,
        type_token.encoding().byte_order(),
    )
}

/// Resolves every element of a fixed array, or the single value of a scalar.
pub fn resolve_values(
    buffer: Reader<'_>,
    index: usize,
    type_token: &Token,
    acting_version: u32,
) -> OtfResult<Vec<PrimitiveValue>> {
    if let Some(value) = const_or_not_present_value(type_token, acting_version) {
        return Ok(vec![value]);
    }
    let primitive_type = primitive_type(type_token)?;
    let byte_order = type_token.encoding().byte_order();
    (0..type_token.array_length().max(1))
        .map(|i| get_value(buffer, index + i * primitive_type.size(), primitive_type, byte_order))
        .collect()
}

/// Resolves the raw value of an enum or bit set from its `BEGIN_ENUM` or
/// `BEGIN_SET` token.
pub fn resolve_long(
    buffer: Reader<'_>,
    index: usize,
    type_token: &Token,
    acting_version: u32,
) -> OtfResult<i64> {
    let primitive_type = primitive_type(type_token)?;
    match const_or_not_present_value(type_token, acting_version) {
        Some(value) => raw_long(&value).ok_or(OtfError::UnsupportedType(primitive_type)),
        None => get_long(
            buffer,
            index,
            primitive_type,
            type_token.encoding().byte_order(),
        ),
    }
}
