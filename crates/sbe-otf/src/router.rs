//! Routing of encoded messages to their token lists by template id.

use sbe_buffers::Reader;
use sbe_ir::Ir;
use tracing::{debug, warn};

use crate::{
    MessageHeader, OtfError, OtfHeaderDecoder, OtfMessageDecoder, OtfResult, TokenListener,
};

/// Reads a message header, selects the message's token list from an [`Ir`]
/// and decodes the message.
#[derive(Debug, Clone, Copy)]
pub struct OtfMessageRouter<'ir> {
    ir: &'ir Ir,
    header_decoder: OtfHeaderDecoder,
}

impl<'ir> OtfMessageRouter<'ir> {
    pub fn new(ir: &'ir Ir) -> Self {
        Self {
            ir,
            header_decoder: OtfHeaderDecoder::new(ir.header_structure()),
        }
    }

    pub fn ir(&self) -> &'ir Ir {
        self.ir
    }

    pub fn header_decoder(&self) -> &OtfHeaderDecoder {
        &self.header_decoder
    }

    /// Decodes and validates the header at `offset`.
    ///
    /// A schema id other than the IR's is rejected. A newer schema version is
    /// accepted: its block lengths are trusted and unknown trailing fields are
    /// skipped.
    pub fn header(&self, buffer: Reader<'_>, offset: usize) -> OtfResult<MessageHeader> {
        let header = self.header_decoder.decode(buffer, offset)?;
        if let Some(schema_id) = header.schema_id {
            if schema_id != self.ir.id() {
                warn!(expected = self.ir.id(), found = schema_id, "schema id mismatch");
                return Err(OtfError::SchemaIdMismatch {
                    expected: self.ir.id(),
                    found: schema_id,
                });
            }
        }
        Ok(header)
    }

    /// Decodes the message whose header starts at `offset` and returns the
    /// index just past it.
    pub fn decode<L: TokenListener + ?Sized>(
        &self,
        buffer: Reader<'_>,
        offset: usize,
        listener: &mut L,
    ) -> OtfResult<usize> {
        let header = self.header(buffer, offset)?;
        let tokens = self.ir.message(header.template_id).ok_or_else(|| {
            warn!(template_id = header.template_id, "unknown template");
            OtfError::UnknownTemplate(header.template_id)
        })?;
        debug!(
            template_id = header.template_id,
            block_length = header.block_length,
            acting_version = header.schema_version,
            "decoding message"
        );
        OtfMessageDecoder::decode(
            buffer,
            offset + self.header_decoder.encoded_length(),
            header.schema_version,
            header.block_length,
            tokens,
            listener,
        )
    }
}
