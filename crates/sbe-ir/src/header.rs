//! The message header that precedes every encoded message.

use crate::{ByteOrder, IrError, IrResult, PrimitiveType, Signal, Token};

/// Where one header field sits and how it is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderField {
    pub offset: usize,
    pub primitive_type: PrimitiveType,
    pub byte_order: ByteOrder,
}

impl HeaderField {
    fn from_token(token: &Token) -> Option<Self> {
        Some(Self {
            offset: token.offset(),
            primitive_type: token.primitive_type()?,
            byte_order: token.encoding().byte_order(),
        })
    }
}

/// Layout of the message header, captured from the header composite's tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderStructure {
    tokens: Vec<Token>,
    block_length: HeaderField,
    template_id: HeaderField,
    schema_id: Option<HeaderField>,
    schema_version: HeaderField,
}

impl HeaderStructure {
    pub const BLOCK_LENGTH: &'static str = "blockLength";
    pub const TEMPLATE_ID: &'static str = "templateId";
    pub const SCHEMA_ID: &'static str = "schemaId";
    pub const SCHEMA_VERSION: &'static str = "version";

    /// Captures the header fields. `blockLength`, `templateId` and `version`
    /// must each appear exactly once; `schemaId` at most once.
    pub fn new(tokens: Vec<Token>) -> IrResult<Self> {
        let mut block_length = None;
        let mut template_id = None;
        let mut schema_id = None;
        let mut schema_version = None;

        for token in tokens.iter().filter(|t| t.signal() == Signal::Encoding) {
            let (slot, name) = match token.name() {
                Self::BLOCK_LENGTH => (&mut block_length, Self::BLOCK_LENGTH),
                Self::TEMPLATE_ID => (&mut template_id, Self::TEMPLATE_ID),
                Self::SCHEMA_ID => (&mut schema_id, Self::SCHEMA_ID),
                Self::SCHEMA_VERSION => (&mut schema_version, Self::SCHEMA_VERSION),
                _ => continue,
            };
            if slot.is_some() {
                return Err(IrError::DuplicateHeaderField(name));
            }
            *slot = Some(HeaderField::from_token(token).ok_or(IrError::MissingHeaderField(name))?);
        }

        Ok(Self {
            block_length: block_length.ok_or(IrError::MissingHeaderField(Self::BLOCK_LENGTH))?,
            template_id: template_id.ok_or(IrError::MissingHeaderField(Self::TEMPLATE_ID))?,
            schema_version: schema_version
                .ok_or(IrError::MissingHeaderField(Self::SCHEMA_VERSION))?,
            schema_id,
            tokens,
        })
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn block_length(&self) -> HeaderField {
        self.block_length
    }

    pub fn template_id(&self) -> HeaderField {
        self.template_id
    }

    pub fn schema_id(&self) -> Option<HeaderField> {
        self.schema_id
    }

    pub fn schema_version(&self) -> HeaderField {
        self.schema_version
    }

    /// Length of the header in bytes, taken from the header composite.
    pub fn encoded_length(&self) -> usize {
        self.tokens.first().map_or(0, Token::encoded_length)
    }
}
