//! Error type for IR construction.

use thiserror::Error;

use crate::{PrimitiveType, Signal};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IrError {
    #[error("no primitive type named {0:?}")]
    UnknownPrimitiveType(String),
    #[error("cannot parse {text:?} as {primitive_type}")]
    InvalidValue {
        primitive_type: PrimitiveType,
        text: String,
    },
    #[error("constant encoding has no constant value")]
    MissingConstantValue,
    #[error("header is missing the {0:?} field")]
    MissingHeaderField(&'static str),
    #[error("header declares the {0:?} field more than once")]
    DuplicateHeaderField(&'static str),
    #[error("expected {expected} to close {name:?} but found {found}")]
    UnbalancedSignal {
        name: String,
        expected: Signal,
        found: Signal,
    },
    #[error("{signal} without an open container")]
    UnexpectedEnd { signal: Signal },
    #[error("{0:?} is never closed")]
    UnclosedToken(String),
    #[error("{0} is not a container signal")]
    NotAContainer(Signal),
    #[error("{0} opens a container and cannot be pushed as a leaf")]
    UnexpectedBegin(Signal),
    #[error("message token list must start with BEGIN_MESSAGE and end with END_MESSAGE")]
    MalformedMessage,
}

pub type IrResult<T> = Result<T, IrError>;
