//! Structural decoding of one message against its token list.

use sbe_buffers::Reader;
use sbe_ir::{IrError, Signal, Token};
use tracing::trace;

use crate::types::get_control;
use crate::{OtfResult, TokenListener};

/// Decodes a message by walking its IR tokens.
///
/// Decoding is a single forward pass. Within a block every offset is taken
/// from the tokens; only group dimensions and var data lengths are read to
/// find where the next block starts. The decoder keeps no state between
/// calls and allocates nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct OtfMessageDecoder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursor {
    buffer_index: usize,
    token_index: usize,
}

struct Walk<'a, 't> {
    buffer: Reader<'a>,
    tokens: &'t [Token],
    /// Index of the `END_MESSAGE` token.
    num_tokens: usize,
    acting_version: u32,
}

impl OtfMessageDecoder {
    /// Decodes the message whose root block starts at `buffer_index`.
    ///
    /// `tokens` is the message's full token list, from `BEGIN_MESSAGE` to
    /// `END_MESSAGE`. The root block is taken to be `block_length` bytes long
    /// whatever its fields imply, so trailing padding is skipped. Returns the
    /// index just past the message, var data included.
    pub fn decode<L: TokenListener + ?Sized>(
        buffer: Reader<'_>,
        buffer_index: usize,
        acting_version: u32,
        block_length: usize,
        tokens: &[Token],
        listener: &mut L,
    ) -> OtfResult<usize> {
        let (first, last) = match tokens {
            [first, .., last] => (first, last),
            _ => return Err(IrError::MalformedMessage.into()),
        };
        let walk = Walk {
            buffer,
            tokens,
            num_tokens: tokens.len() - 1,
            acting_version,
        };

        buffer.check_limit(buffer_index, block_length)?;
        listener.on_begin_message(first)?;
        let token_index = walk.decode_fields(buffer_index, 1, listener)?;
        let cursor = walk.decode_groups(buffer_index + block_length, token_index, listener)?;
        let buffer_index = walk.decode_data(cursor.buffer_index, cursor.token_index, listener)?;
        listener.on_end_message(last)?;

        Ok(buffer_index)
    }
}

impl<'a, 't> Walk<'a, 't> {
    fn token(&self, index: usize) -> OtfResult<&'t Token> {
        self.tokens
            .get(index)
            .ok_or_else(|| IrError::MalformedMessage.into())
    }

    /// The tokens of the container starting at `index`, end token included.
    fn span(&self, index: usize) -> OtfResult<&'t [Token]> {
        let count = self.token(index)?.component_token_count().max(1);
        self.tokens
            .get(index..index + count)
            .ok_or_else(|| IrError::MalformedMessage.into())
    }

    fn next(&self, index: usize) -> OtfResult<usize> {
        Ok(index + self.token(index)?.component_token_count().max(1))
    }

    fn decode_fields<L: TokenListener + ?Sized>(
        &self,
        buffer_index: usize,
        mut token_index: usize,
        listener: &mut L,
    ) -> OtfResult<usize> {
        while token_index < self.num_tokens {
            let field_token = self.token(token_index)?;
            if field_token.signal() != Signal::BeginField {
                break;
            }
            let type_index = token_index + 1;
            let offset = self.token(type_index)?.offset();
            self.decode_type(field_token, buffer_index + offset, type_index, listener)?;
            token_index = self.next(token_index)?;
        }

        Ok(token_index)
    }

    /// Dispatches on the type token at `type_index`, located at `index`.
    fn decode_type<L: TokenListener + ?Sized>(
        &self,
        field_token: &Token,
        index: usize,
        type_index: usize,
        listener: &mut L,
    ) -> OtfResult<()> {
        let type_token = self.token(type_index)?;
        match type_token.signal() {
            Signal::BeginComposite => {
                self.decode_composite(field_token, index, type_index, listener)
            }
            Signal::BeginEnum => listener.on_enum(
                field_token,
                self.buffer,
                index,
                self.span(type_index)?,
                self.acting_version,
            ),
            Signal::BeginSet => listener.on_bit_set(
                field_token,
                self.buffer,
                index,
                self.span(type_index)?,
                self.acting_version,
            ),
            Signal::Encoding => listener.on_encoding(
                field_token,
                self.buffer,
                index,
                type_token,
                self.acting_version,
            ),
            _ => Ok(()),
        }
    }

    /// Walks a composite whose members are addressed from `index`. Members
    /// are reported with their own token as the field token.
    fn decode_composite<L: TokenListener + ?Sized>(
        &self,
        field_token: &Token,
        index: usize,
        composite_index: usize,
        listener: &mut L,
    ) -> OtfResult<()> {
        let span = self.span(composite_index)?;
        listener.on_begin_composite(field_token, span)?;

        let end = composite_index + span.len() - 1;
        let mut i = composite_index + 1;
        while i < end {
            let member = self.token(i)?;
            self.decode_type(member, index + member.offset(), i, listener)?;
            i = self.next(i)?;
        }

        listener.on_end_composite(field_token, span)
    }

    fn decode_groups<L: TokenListener + ?Sized>(
        &self,
        mut buffer_index: usize,
        mut token_index: usize,
        listener: &mut L,
    ) -> OtfResult<Cursor> {
        while token_index < self.num_tokens {
            let token = self.token(token_index)?;
            if token.signal() != Signal::BeginGroup {
                break;
            }
            let dimensions = self.token(token_index + 1)?;

            let (block_length, num_in_group) = if token.version() > self.acting_version {
                (0, 0)
            } else {
                self.buffer
                    .check_limit(buffer_index, dimensions.encoded_length())?;
                let block_length =
                    get_control(self.buffer, buffer_index, self.token(token_index + 2)?)?;
                let num_in_group =
                    get_control(self.buffer, buffer_index, self.token(token_index + 3)?)?;
                buffer_index += dimensions.encoded_length();
                (block_length, num_in_group)
            };
            trace!(group = token.name(), block_length, num_in_group, "group header");
            listener.on_group_header(token, num_in_group)?;

            let begin_fields_index = token_index + dimensions.component_token_count().max(1) + 1;
            for group_index in 0..num_in_group {
                self.buffer.check_limit(buffer_index, block_length)?;
                listener.on_begin_group(token, group_index, num_in_group)?;
                let after_fields_index =
                    self.decode_fields(buffer_index, begin_fields_index, listener)?;
                buffer_index += block_length;
                let cursor = self.decode_groups(buffer_index, after_fields_index, listener)?;
                buffer_index = self.decode_data(cursor.buffer_index, cursor.token_index, listener)?;
                listener.on_end_group(token, group_index, num_in_group)?;
            }

            token_index = self.next(token_index)?;
        }

        Ok(Cursor {
            buffer_index,
            token_index,
        })
    }

    fn decode_data<L: TokenListener + ?Sized>(
        &self,
        mut buffer_index: usize,
        mut token_index: usize,
        listener: &mut L,
    ) -> OtfResult<usize> {
        while token_index < self.num_tokens {
            let token = self.token(token_index)?;
            if token.signal() != Signal::BeginVarData {
                break;
            }
            let data_token = self.token(token_index + 3)?;

            let length = if token.version() > self.acting_version {
                0
            } else {
                let length = get_control(self.buffer, buffer_index, self.token(token_index + 2)?)?;
                buffer_index += data_token.offset();
                length
            };
            self.buffer.check_limit(buffer_index, length)?;
            trace!(var_data = token.name(), length, "var data");
            listener.on_var_data(token, self.buffer, buffer_index, length, data_token)?;

            buffer_index += length;
            token_index = self.next(token_index)?;
        }

        Ok(buffer_index)
    }
}
