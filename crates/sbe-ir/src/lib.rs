//! Intermediate representation for Simple Binary Encoding.
//!
//! A schema is flattened into a linear stream of [`Token`]s. Every container
//! token (`BEGIN_MESSAGE`, `BEGIN_FIELD`, `BEGIN_GROUP`, `BEGIN_COMPOSITE`,
//! `BEGIN_ENUM`, `BEGIN_SET`, `BEGIN_VAR_DATA`) records its
//! `component_token_count`, the number of tokens spanning it up to and
//! including its matching end token. Given the index `i` of a begin token,
//! `i + component_token_count` is the index of the first token after its
//! subtree, which is what lets consumers skip or descend without recursion
//! bookkeeping.
//!
//! # Overview
//!
//! - [`PrimitiveType`] / [`PrimitiveValue`] - the primitive value model
//! - [`Encoding`] - how a scalar is laid out and interpreted
//! - [`Token`] / [`Signal`] - one entry of the flattened stream
//! - [`TokenListBuilder`] - assembles well-formed token lists
//! - [`MessageComponents`] - field/group/var-data view over a message
//! - [`HeaderStructure`] / [`Ir`] - the message header and the message table

mod builder;
mod components;
mod encoding;
mod error;
mod header;
mod ir;
mod primitive;
mod signal;
mod token;
mod value;

pub use builder::TokenListBuilder;
pub use components::{
    collect, collect_fields, collect_groups, collect_var_data, each_field, find_end_signal,
    message_body, MessageComponents,
};
pub use encoding::{Encoding, EncodingBuilder, Presence};
pub use error::{IrError, IrResult};
pub use header::{HeaderField, HeaderStructure};
pub use ir::Ir;
pub use primitive::PrimitiveType;
pub use sbe_buffers::ByteOrder;
pub use signal::Signal;
pub use token::{Token, TokenBuilder};
pub use value::PrimitiveValue;
