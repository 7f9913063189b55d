use sbe_buffers::Reader;
use sbe_ir::Ir;
use sbe_otf::{OtfMessageRouter, OtfResult};

use crate::JsonTokenListener;

/// Output options for [`JsonPrinter`] and [`JsonTokenListener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonOptions {
    /// Spaces per nesting level. Zero renders compact JSON on one line.
    pub indent: usize,
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self { indent: 4 }
    }
}

impl JsonOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

/// Prints encoded messages, header included, as JSON.
#[derive(Debug, Clone, Copy)]
pub struct JsonPrinter<'ir> {
    router: OtfMessageRouter<'ir>,
    options: JsonOptions,
}

impl<'ir> JsonPrinter<'ir> {
    pub fn new(ir: &'ir Ir) -> Self {
        Self::with_options(ir, JsonOptions::default())
    }

    pub fn with_options(ir: &'ir Ir, options: JsonOptions) -> Self {
        Self {
            router: OtfMessageRouter::new(ir),
            options,
        }
    }

    pub fn options(&self) -> JsonOptions {
        self.options
    }

    /// Prints the message at the start of `encoded`.
    pub fn print(&self, encoded: &[u8]) -> OtfResult<String> {
        let mut output = String::new();
        self.print_at(&mut output, Reader::new(encoded), 0)?;
        Ok(output)
    }

    /// Appends the message whose header starts at `offset` to `output` and
    /// returns the index just past the message.
    pub fn print_at(
        &self,
        output: &mut String,
        buffer: Reader<'_>,
        offset: usize,
    ) -> OtfResult<usize> {
        let mut listener = JsonTokenListener::with_options(output, self.options);
        self.router.decode(buffer, offset, &mut listener)
    }
}
