//! On-the-fly (OTF) decoding of SBE messages.
//!
//! The decoder interprets an encoded message using nothing but the message's
//! IR token list. It makes one forward pass over the buffer, reading only the
//! control values it needs (group counts, block lengths, var data lengths),
//! and reports what it finds to a [`TokenListener`].
//!
//! # Overview
//!
//! - [`OtfMessageDecoder`] - walks fields, composites, groups and var data
//! - [`TokenListener`] - the callbacks driven by the decoder
//! - [`OtfHeaderDecoder`] - reads the message header preamble
//! - [`OtfMessageRouter`] - header decode, template lookup and message decode
//! - [`types`] / [`presence`] - primitive accessors and presence resolution
//!
//! # Example
//!
//! ```
//! use sbe_buffers::Reader;
//! use sbe_ir::{ByteOrder, Encoding, PrimitiveType, Signal, Token, TokenListBuilder};
//! use sbe_otf::{OtfMessageDecoder, OtfResult, TokenListener};
//!
//! #[derive(Default)]
//! struct Names(Vec<String>);
//!
//! impl TokenListener for Names {
//!     fn on_encoding(
//!         &mut self,
//!         field_token: &Token,
//!         _buffer: Reader<'_>,
//!         _index: usize,
//!         _type_token: &Token,
//!         _acting_version: u32,
//!     ) -> OtfResult<()> {
//!         self.0.push(field_token.name().to_string());
//!         Ok(())
//!     }
//! }
//!
//! let mut builder = TokenListBuilder::new();
//! builder
//!     .begin(Token::builder(Signal::BeginMessage, "Ping").id(1).build())?
//!     .encoding_field(
//!         Token::builder(Signal::BeginField, "seq").build(),
//!         Token::builder(Signal::Encoding, "uint32")
//!             .encoded_length(4)
//!             .encoding(Encoding::of(PrimitiveType::Uint32, ByteOrder::LittleEndian))
//!             .build(),
//!     )?
//!     .end(Signal::EndMessage)?;
//! let tokens = builder.build()?;
//!
//! let bytes = 7u32.to_le_bytes();
//! let mut names = Names::default();
//! let end = OtfMessageDecoder::decode(Reader::new(&bytes), 0, 0, 4, &tokens, &mut names)?;
//! assert_eq!(end, 4);
//! assert_eq!(names.0, ["seq"]);
//! # Ok::<(), sbe_otf::OtfError>(())
//! ```

mod decoder;
mod error;
mod header;
mod listener;
pub mod presence;
mod router;
pub mod types;

pub use decoder::OtfMessageDecoder;
pub use error::{OtfError, OtfResult};
pub use header::{MessageHeader, OtfHeaderDecoder};
pub use listener::TokenListener;
pub use router::OtfMessageRouter;
