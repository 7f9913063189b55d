//! Decoding of the message header preamble.

use sbe_buffers::Reader;
use sbe_ir::{HeaderField, HeaderStructure};

use crate::types::get_int;
use crate::{OtfError, OtfResult};

/// The decoded values of one message header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageHeader {
    pub block_length: usize,
    pub template_id: i64,
    pub schema_id: Option<i64>,
    pub schema_version: u32,
}

/// Reads message headers laid out as described by a [`HeaderStructure`].
#[derive(Debug, Clone, Copy)]
pub struct OtfHeaderDecoder {
    encoded_length: usize,
    block_length: HeaderField,
    template_id: HeaderField,
    schema_id: Option<HeaderField>,
    schema_version: HeaderField,
}

impl OtfHeaderDecoder {
    pub fn new(header: &HeaderStructure) -> Self {
        Self {
            encoded_length: header.encoded_length(),
            block_length: header.block_length(),
            template_id: header.template_id(),
            schema_id: header.schema_id(),
            schema_version: header.schema_version(),
        }
    }

    pub fn encoded_length(&self) -> usize {
        self.encoded_length
    }

    fn read(buffer: Reader<'_>, offset: usize, field: HeaderField) -> OtfResult<i64> {
        get_int(buffer, offset + field.offset, field.primitive_type, field.byte_order)
    }

    pub fn block_length(&self, buffer: Reader<'_>, offset: usize) -> OtfResult<usize> {
        let value = Self::read(buffer, offset, self.block_length)?;
        usize::try_from(value).map_err(|_| OtfError::InvalidControlValue {
            name: HeaderStructure::BLOCK_LENGTH.to_string(),
            value,
        })
    }

    pub fn template_id(&self, buffer: Reader<'_>, offset: usize) -> OtfResult<i64> {
        Self::read(buffer, offset, self.template_id)
    }

    /// `None` when the header has no schema id field.
    pub fn schema_id(&self, buffer: Reader<'_>, offset: usize) -> OtfResult<Option<i64>> {
        self.schema_id
            .map(|field| Self::read(buffer, offset, field))
            .transpose()
    }

    pub fn schema_version(&self, buffer: Reader<'_>, offset: usize) -> OtfResult<u32> {
        let value = Self::read(buffer, offset, self.schema_version)?;
        u32::try_from(value).map_err(|_| OtfError::InvalidControlValue {
            name: HeaderStructure::SCHEMA_VERSION.to_string(),
            value,
        })
    }

    pub fn decode(&self, buffer: Reader<'_>, offset: usize) -> OtfResult<MessageHeader> {
        buffer.check_limit(offset, self.encoded_length)?;
        Ok(MessageHeader {
            block_length: self.block_length(buffer, offset)?,
            template_id: self.template_id(buffer, offset)?,
            schema_id: self.schema_id(buffer, offset)?,
            schema_version: self.schema_version(buffer, offset)?,
        })
    }
}
