use sbe_buffers::BufferError;
use sbe_ir::{IrError, PrimitiveType};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum OtfError {
    #[error(transparent)]
    Buffer(#[from] BufferError),
    #[error(transparent)]
    Ir(#[from] IrError),
    #[error("unsupported type: {0}")]
    UnsupportedType(PrimitiveType),
    #[error("token {0:?} has no primitive type")]
    MissingPrimitiveType(String),
    #[error("{0} does not fit in a signed 64-bit integer")]
    Overflow(u64),
    #[error("invalid {name} value {value}")]
    InvalidControlValue { name: String, value: i64 },
    #[error("unsupported character encoding {0:?}")]
    UnsupportedCharacterEncoding(String),
    #[error("required schema id {expected} but was {found}")]
    SchemaIdMismatch { expected: i64, found: i64 },
    #[error("no message with template id {0}")]
    UnknownTemplate(i64),
}

pub type OtfResult<T> = Result<T, OtfError>;
