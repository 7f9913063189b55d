//! One entry of the flattened IR stream.

use std::sync::Arc;

use crate::{Encoding, PrimitiveType, Signal};

/// A structural marker or leaf of a flattened schema.
///
/// Offsets are relative to the start of the enclosing block: the message root
/// block, the current group element, or the enclosing composite.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    signal: Signal,
    name: String,
    referenced_name: Option<String>,
    description: Option<String>,
    id: i32,
    version: u32,
    deprecated: Option<u32>,
    offset: usize,
    encoded_length: usize,
    component_token_count: usize,
    encoding: Arc<Encoding>,
}

impl Token {
    /// Encoded length of a variable length payload.
    pub const VARIABLE_LENGTH: usize = usize::MAX;

    /// Id of tokens that do not carry a schema id.
    pub const INVALID_ID: i32 = -1;

    pub fn builder(signal: Signal, name: impl Into<String>) -> TokenBuilder {
        TokenBuilder::new(signal, name)
    }

    pub fn signal(&self) -> Signal {
        self.signal
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn referenced_name(&self) -> Option<&str> {
        self.referenced_name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    /// Schema version in which this element first appeared.
    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn deprecated(&self) -> Option<u32> {
        self.deprecated
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn encoded_length(&self) -> usize {
        self.encoded_length
    }

    /// Number of tokens making up this element, itself and its end token included.
    pub fn component_token_count(&self) -> usize {
        self.component_token_count
    }

    pub fn encoding(&self) -> &Encoding {
        &self.encoding
    }

    pub fn shared_encoding(&self) -> &Arc<Encoding> {
        &self.encoding
    }

    pub fn primitive_type(&self) -> Option<PrimitiveType> {
        self.encoding.primitive_type()
    }

    /// Number of primitives encoded by this token, zero for structural tokens.
    pub fn array_length(&self) -> usize {
        match self.encoding.primitive_type() {
            Some(primitive_type)
                if self.encoded_length != 0 && self.encoded_length != Self::VARIABLE_LENGTH =>
            {
                self.encoded_length / primitive_type.size()
            }
            _ => 0,
        }
    }

    /// The referenced type name if there is one, else the token's own name.
    pub fn applicable_type_name(&self) -> &str {
        self.referenced_name.as_deref().unwrap_or(&self.name)
    }

    pub fn is_constant_encoding(&self) -> bool {
        self.encoding.presence() == crate::Presence::Constant
    }

    pub fn is_optional_encoding(&self) -> bool {
        self.encoding.presence() == crate::Presence::Optional
    }

    pub(crate) fn set_component_token_count(&mut self, count: usize) {
        self.component_token_count = count;
    }

    /// A copy of this token carrying a different signal, used to close containers.
    pub(crate) fn with_signal(&self, signal: Signal) -> Token {
        Token {
            signal,
            ..self.clone()
        }
    }
}

/// Fluent builder for [`Token`].
#[derive(Debug, Clone)]
pub struct TokenBuilder {
    token: Token,
}

impl TokenBuilder {
    pub fn new(signal: Signal, name: impl Into<String>) -> Self {
        Self {
            token: Token {
                signal,
                name: name.into(),
                referenced_name: None,
                description: None,
                id: Token::INVALID_ID,
                version: 0,
                deprecated: None,
                offset: 0,
                encoded_length: 0,
                component_token_count: 1,
                encoding: Arc::default(),
            },
        }
    }

    pub fn referenced_name(mut self, name: impl Into<String>) -> Self {
        self.token.referenced_name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.token.description = Some(description.into());
        self
    }

    pub fn id(mut self, id: i32) -> Self {
        self.token.id = id;
        self
    }

    pub fn version(mut self, version: u32) -> Self {
        self.token.version = version;
        self
    }

    pub fn deprecated(mut self, version: u32) -> Self {
        self.token.deprecated = Some(version);
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.token.offset = offset;
        self
    }

    pub fn encoded_length(mut self, encoded_length: usize) -> Self {
        self.token.encoded_length = encoded_length;
        self
    }

    pub fn component_token_count(mut self, count: usize) -> Self {
        self.token.component_token_count = count;
        self
    }

    pub fn encoding(mut self, encoding: impl Into<Arc<Encoding>>) -> Self {
        self.token.encoding = encoding.into();
        self
    }

    pub fn build(self) -> Token {
        self.token
    }
}
