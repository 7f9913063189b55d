//! JSON rendering of SBE messages.
//!
//! [`JsonTokenListener`] turns the callbacks of an OTF decode into a JSON
//! document, and [`JsonPrinter`] ties header decoding, template lookup and
//! decoding together for a whole encoded message.
//!
//! # Example
//!
//! ```no_run
//! use sbe_ir::Ir;
//! use sbe_json::{JsonOptions, JsonPrinter};
//!
//! fn dump(ir: &Ir, encoded: &[u8]) -> Result<String, sbe_otf::OtfError> {
//!     JsonPrinter::with_options(ir, JsonOptions::default().with_indent(2)).print(encoded)
//! }
//! ```

mod listener;
mod printer;

pub use listener::JsonTokenListener;
pub use printer::{JsonOptions, JsonPrinter};
