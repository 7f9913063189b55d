//! Encoding metadata for a scalar or a fixed array of scalars.

use crate::{ByteOrder, IrError, IrResult, PrimitiveType, PrimitiveValue};

/// Presence rule for a field or type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presence {
    #[default]
    Required,
    Optional,
    Constant,
}

/// Describes how one scalar is laid out in a buffer and how it is interpreted.
///
/// Structural tokens (`BEGIN_MESSAGE`, `BEGIN_GROUP`, ...) carry an encoding
/// without a primitive type. Encodings are immutable once built and are
/// shared through `Arc` by every token that uses them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Encoding {
    primitive_type: Option<PrimitiveType>,
    presence: Presence,
    byte_order: ByteOrder,
    min_value: Option<PrimitiveValue>,
    max_value: Option<PrimitiveValue>,
    null_value: Option<PrimitiveValue>,
    const_value: Option<PrimitiveValue>,
    character_encoding: Option<String>,
    epoch: Option<String>,
    time_unit: Option<String>,
    semantic_type: Option<String>,
}

impl Encoding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> EncodingBuilder {
        EncodingBuilder::default()
    }

    /// Shorthand for a required scalar of `primitive_type` in `byte_order`.
    pub fn of(primitive_type: PrimitiveType, byte_order: ByteOrder) -> Self {
        Self {
            primitive_type: Some(primitive_type),
            byte_order,
            ..Self::default()
        }
    }

    pub fn primitive_type(&self) -> Option<PrimitiveType> {
        self.primitive_type
    }

    pub fn presence(&self) -> Presence {
        self.presence
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    pub fn min_value(&self) -> Option<&PrimitiveValue> {
        self.min_value.as_ref()
    }

    pub fn max_value(&self) -> Option<&PrimitiveValue> {
        self.max_value.as_ref()
    }

    pub fn null_value(&self) -> Option<&PrimitiveValue> {
        self.null_value.as_ref()
    }

    pub fn const_value(&self) -> Option<&PrimitiveValue> {
        self.const_value.as_ref()
    }

    pub fn character_encoding(&self) -> Option<&str> {
        self.character_encoding.as_deref()
    }

    pub fn epoch(&self) -> Option<&str> {
        self.epoch.as_deref()
    }

    pub fn time_unit(&self) -> Option<&str> {
        self.time_unit.as_deref()
    }

    pub fn semantic_type(&self) -> Option<&str> {
        self.semantic_type.as_deref()
    }

    /// The null sentinel in effect: the override if set, else the type default.
    pub fn applicable_null_value(&self) -> Option<PrimitiveValue> {
        self.null_value
            .clone()
            .or_else(|| self.primitive_type.map(PrimitiveType::null_value))
    }

    pub fn applicable_min_value(&self) -> Option<PrimitiveValue> {
        self.min_value
            .clone()
            .or_else(|| self.primitive_type.map(PrimitiveType::min_value))
    }

    pub fn applicable_max_value(&self) -> Option<PrimitiveValue> {
        self.max_value
            .clone()
            .or_else(|| self.primitive_type.map(PrimitiveType::max_value))
    }
}

/// Fluent builder for [`Encoding`].
#[derive(Debug, Clone, Default)]
pub struct EncodingBuilder {
    encoding: Encoding,
}

impl EncodingBuilder {
    pub fn primitive_type(mut self, primitive_type: PrimitiveType) -> Self {
        self.encoding.primitive_type = Some(primitive_type);
        self
    }

    pub fn presence(mut self, presence: Presence) -> Self {
        self.encoding.presence = presence;
        self
    }

    pub fn byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.encoding.byte_order = byte_order;
        self
    }

    pub fn min_value(mut self, value: PrimitiveValue) -> Self {
        self.encoding.min_value = Some(value);
        self
    }

    pub fn max_value(mut self, value: PrimitiveValue) -> Self {
        self.encoding.max_value = Some(value);
        self
    }

    pub fn null_value(mut self, value: PrimitiveValue) -> Self {
        self.encoding.null_value = Some(value);
        self
    }

    pub fn const_value(mut self, value: PrimitiveValue) -> Self {
        self.encoding.const_value = Some(value);
        self
    }

    pub fn character_encoding(mut self, name: impl Into<String>) -> Self {
        self.encoding.character_encoding = Some(name.into());
        self
    }

    pub fn epoch(mut self, epoch: impl Into<String>) -> Self {
        self.encoding.epoch = Some(epoch.into());
        self
    }

    pub fn time_unit(mut self, time_unit: impl Into<String>) -> Self {
        self.encoding.time_unit = Some(time_unit.into());
        self
    }

    pub fn semantic_type(mut self, semantic_type: impl Into<String>) -> Self {
        self.encoding.semantic_type = Some(semantic_type.into());
        self
    }

    /// Finishes the encoding. A constant presence must carry a constant value.
    pub fn build(self) -> IrResult<Encoding> {
        if self.encoding.presence == Presence::Constant && self.encoding.const_value.is_none() {
            return Err(IrError::MissingConstantValue);
        }
        Ok(self.encoding)
    }
}
