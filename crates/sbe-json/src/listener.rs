use sbe_buffers::{print_octets, Reader};
use sbe_ir::{PrimitiveType, PrimitiveValue, Signal, Token};
use sbe_otf::presence::{
    const_or_not_present_value, resolve_long, resolve_value, resolve_values,
};
use sbe_otf::types::{decode_text, raw_long};
use sbe_otf::{OtfResult, TokenListener};
use serde_json::Value;

use crate::JsonOptions;

const DEFAULT_CHARACTER_ENCODING: &str = "US-ASCII";

/// Writes a decoded message into a `String` as JSON.
///
/// The message, each group element and each composite become objects; groups
/// become arrays. Enums are written as the name of the matching valid value
/// (`null` when none matches), bit sets as an object of choice flags, char
/// arrays and text var data as strings, and other var data as a hex string.
/// Optional values equal to their null sentinel are written as `null`.
pub struct JsonTokenListener<'o> {
    output: &'o mut String,
    options: JsonOptions,
    /// One entry per open object or array: whether it has no members yet.
    frames: Vec<bool>,
}

impl<'o> JsonTokenListener<'o> {
    pub fn new(output: &'o mut String) -> Self {
        Self::with_options(output, JsonOptions::default())
    }

    pub fn with_options(output: &'o mut String, options: JsonOptions) -> Self {
        Self {
            output,
            options,
            frames: Vec::new(),
        }
    }

    fn newline(&mut self) {
        if self.options.indent > 0 {
            self.output.push('\n');
            let width = self.frames.len() * self.options.indent;
            self.output.extend(std::iter::repeat(' ').take(width));
        }
    }

    /// Starts a member of the innermost object or array.
    fn entry(&mut self) {
        if let Some(empty) = self.frames.last_mut() {
            if !*empty {
                self.output.push(',');
            }
            *empty = false;
            self.newline();
        }
    }

    fn property(&mut self, name: &str) {
        self.entry();
        self.string(name);
        self.output
            .push_str(if self.options.indent > 0 { ": " } else { ":" });
    }

    fn open(&mut self, bracket: char) {
        self.output.push(bracket);
        self.frames.push(true);
    }

    fn close(&mut self, bracket: char) {
        if let Some(false) = self.frames.pop() {
            self.newline();
        }
        self.output.push(bracket);
    }

    fn string(&mut self, text: &str) {
        self.output
            .push_str(&Value::String(text.to_string()).to_string());
    }

    fn null(&mut self) {
        self.output.push_str("null");
    }

    fn text(&mut self, bytes: &[u8], character_encoding: Option<&str>) -> OtfResult<()> {
        let text = decode_text(
            bytes,
            character_encoding.unwrap_or(DEFAULT_CHARACTER_ENCODING),
        )?;
        self.string(&text);
        Ok(())
    }

    fn scalar(&mut self, value: &PrimitiveValue, type_token: &Token) -> OtfResult<()> {
        match value {
            PrimitiveValue::Float(v) if !v.is_finite() => self.null(),
            PrimitiveValue::Double(v) if !v.is_finite() => self.null(),
            PrimitiveValue::Float(v) => self.output.push_str(&format!("{v:?}")),
            PrimitiveValue::Double(v) => self.output.push_str(&format!("{v:?}")),
            PrimitiveValue::Bytes(bytes) => {
                let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
                self.text(&bytes[..end], type_token.encoding().character_encoding())?;
            }
            PrimitiveValue::Int(v) if type_token.primitive_type() == Some(PrimitiveType::Char) => {
                let byte = [u8::try_from(*v).unwrap_or(0)];
                let end = usize::from(byte[0] != 0);
                self.text(&byte[..end], type_token.encoding().character_encoding())?;
            }
            _ => self.output.push_str(&value.to_string()),
        }
        Ok(())
    }

    /// Writes `null` for an optional value equal to its null sentinel.
    fn optional_scalar(&mut self, value: &PrimitiveValue, type_token: &Token) -> OtfResult<()> {
        let is_null = type_token.is_optional_encoding()
            && type_token.encoding().applicable_null_value().as_ref() == Some(value);
        if is_null {
            self.null();
            Ok(())
        } else {
            self.scalar(value, type_token)
        }
    }
}

/// Valid values or choices inside an enum or set span.
fn members(tokens: &[Token], signal: Signal) -> impl Iterator<Item = &Token> {
    tokens.iter().filter(move |t| t.signal() == signal)
}

impl TokenListener for JsonTokenListener<'_> {
    fn on_begin_message(&mut self, _token: &Token) -> OtfResult<()> {
        self.entry();
        self.open('{');
        Ok(())
    }

    fn on_end_message(&mut self, _token: &Token) -> OtfResult<()> {
        self.close('}');
        Ok(())
    }

    fn on_encoding(
        &mut self,
        field_token: &Token,
        buffer: Reader<'_>,
        index: usize,
        type_token: &Token,
        acting_version: u32,
    ) -> OtfResult<()> {
        self.property(field_token.name());
        let is_char = type_token.primitive_type() == Some(PrimitiveType::Char);
        if type_token.array_length() > 1 && !is_char {
            if type_token.is_optional_encoding()
                && const_or_not_present_value(type_token, acting_version).is_some()
            {
                self.null();
                return Ok(());
            }
            let values = resolve_values(buffer, index, type_token, acting_version)?;
            self.open('[');
            for value in &values {
                self.entry();
                self.optional_scalar(value, type_token)?;
            }
            self.close(']');
        } else {
            let value = resolve_value(buffer, index, type_token, acting_version)?;
            self.optional_scalar(&value, type_token)?;
        }
        Ok(())
    }

    fn on_enum(
        &mut self,
        field_token: &Token,
        buffer: Reader<'_>,
        index: usize,
        tokens: &[Token],
        acting_version: u32,
    ) -> OtfResult<()> {
        self.property(field_token.name());
        let Some(type_token) = tokens.first() else {
            self.null();
            return Ok(());
        };
        let value = resolve_long(buffer, index, type_token, acting_version)?;
        let matching = members(tokens, Signal::ValidValue).find(|t| {
            t.encoding().const_value().and_then(raw_long) == Some(value)
        });
        match matching {
            Some(valid_value) => self.string(valid_value.name()),
            None => self.null(),
        }
        Ok(())
    }

    fn on_bit_set(
        &mut self,
        field_token: &Token,
        buffer: Reader<'_>,
        index: usize,
        tokens: &[Token],
        acting_version: u32,
    ) -> OtfResult<()> {
        self.property(field_token.name());
        let Some(type_token) = tokens.first() else {
            self.null();
            return Ok(());
        };
        let bits = resolve_long(buffer, index, type_token, acting_version)? as u64;
        self.open('{');
        for choice in members(tokens, Signal::Choice) {
            let bit = choice.encoding().const_value().and_then(raw_long);
            let set = matches!(bit, Some(bit @ 0..=63) if bits & (1u64 << bit) != 0);
            self.property(choice.name());
            self.output.push_str(if set { "true" } else { "false" });
        }
        self.close('}');
        Ok(())
    }

    fn on_begin_composite(&mut self, field_token: &Token, _tokens: &[Token]) -> OtfResult<()> {
        self.property(field_token.name());
        self.open('{');
        Ok(())
    }

    fn on_end_composite(&mut self, _field_token: &Token, _tokens: &[Token]) -> OtfResult<()> {
        self.close('}');
        Ok(())
    }

    fn on_group_header(&mut self, token: &Token, num_in_group: usize) -> OtfResult<()> {
        self.property(token.name());
        self.open('[');
        if num_in_group == 0 {
            self.close(']');
        }
        Ok(())
    }

    fn on_begin_group(
        &mut self,
        _token: &Token,
        _group_index: usize,
        _num_in_group: usize,
    ) -> OtfResult<()> {
        self.entry();
        self.open('{');
        Ok(())
    }

    fn on_end_group(
        &mut self,
        _token: &Token,
        group_index: usize,
        num_in_group: usize,
    ) -> OtfResult<()> {
        self.close('}');
        if group_index + 1 == num_in_group {
            self.close(']');
        }
        Ok(())
    }

    fn on_var_data(
        &mut self,
        field_token: &Token,
        buffer: Reader<'_>,
        index: usize,
        length: usize,
        type_token: &Token,
    ) -> OtfResult<()> {
        self.property(field_token.name());
        let bytes = buffer.get_bytes(index, length)?;
        match type_token.encoding().character_encoding() {
            Some(character_encoding) => self.text(bytes, Some(character_encoding))?,
            None => self.string(&print_octets(bytes, bytes.len())),
        }
        Ok(())
    }
}
