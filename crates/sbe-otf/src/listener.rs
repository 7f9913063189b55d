use sbe_buffers::Reader;
use sbe_ir::Token;

use crate::OtfResult;

/// Callbacks driven by [`OtfMessageDecoder`](crate::OtfMessageDecoder), in
/// document order.
///
/// Every callback defaults to doing nothing, so a listener only implements
/// what it cares about. An error returned from a callback aborts the decode.
///
/// Enum, bit set and composite callbacks receive the type's whole token span,
/// from its `BEGIN_*` token up to and including its `END_*` token.
pub trait TokenListener {
    fn on_begin_message(&mut self, _token: &Token) -> OtfResult<()> {
        Ok(())
    }

    fn on_end_message(&mut self, _token: &Token) -> OtfResult<()> {
        Ok(())
    }

    /// A primitive leaf at absolute `index`. Constant and version gated
    /// values are left to the listener to resolve, see [`crate::presence`].
    fn on_encoding(
        &mut self,
        _field_token: &Token,
        _buffer: Reader<'_>,
        _index: usize,
        _type_token: &Token,
        _acting_version: u32,
    ) -> OtfResult<()> {
        Ok(())
    }

    fn on_enum(
        &mut self,
        _field_token: &Token,
        _buffer: Reader<'_>,
        _index: usize,
        _tokens: &[Token],
        _acting_version: u32,
    ) -> OtfResult<()> {
        Ok(())
    }

    fn on_bit_set(
        &mut self,
        _field_token: &Token,
        _buffer: Reader<'_>,
        _index: usize,
        _tokens: &[Token],
        _acting_version: u32,
    ) -> OtfResult<()> {
        Ok(())
    }

    fn on_begin_composite(&mut self, _field_token: &Token, _tokens: &[Token]) -> OtfResult<()> {
        Ok(())
    }

    fn on_end_composite(&mut self, _field_token: &Token, _tokens: &[Token]) -> OtfResult<()> {
        Ok(())
    }

    /// Called once per group, before any element, even when it is empty.
    fn on_group_header(&mut self, _token: &Token, _num_in_group: usize) -> OtfResult<()> {
        Ok(())
    }

    fn on_begin_group(
        &mut self,
        _token: &Token,
        _group_index: usize,
        _num_in_group: usize,
    ) -> OtfResult<()> {
        Ok(())
    }

    fn on_end_group(
        &mut self,
        _token: &Token,
        _group_index: usize,
        _num_in_group: usize,
    ) -> OtfResult<()> {
        Ok(())
    }

    /// A var data payload of `length` bytes at absolute `index`. The type
    /// token carries the character encoding when the data is text.
    fn on_var_data(
        &mut self,
        _field_token: &Token,
        _buffer: Reader<'_>,
        _index: usize,
        _length: usize,
        _type_token: &Token,
    ) -> OtfResult<()> {
        Ok(())
    }
}

impl<L: TokenListener + ?Sized> TokenListener for &mut L {
    fn on_begin_message(&mut self, token: &Token) -> OtfResult<()> {
        (**self).on_begin_message(token)
    }

    fn on_end_message(&mut self, token: &Token) -> OtfResult<()> {
        (**self).on_end_message(token)
    }

    fn on_encoding(
        &mut self,
        field_token: &Token,
        buffer: Reader<'_>,
        index: usize,
        type_token: &Token,
        acting_version: u32,
    ) -> OtfResult<()> {
        (**self).on_encoding(field_token, buffer, index, type_token, acting_version)
    }

    fn on_enum(
        &mut self,
        field_token: &Token,
        buffer: Reader<'_>,
        index: usize,
        tokens: &[Token],
        acting_version: u32,
    ) -> OtfResult<()> {
        (**self).on_enum(field_token, buffer, index, tokens, acting_version)
    }

    fn on_bit_set(
        &mut self,
        field_token: &Token,
        buffer: Reader<'_>,
        index: usize,
        tokens: &[Token],
        acting_version: u32,
    ) -> OtfResult<()> {
        (**self).on_bit_set(field_token, buffer, index, tokens, acting_version)
    }

    fn on_begin_composite(&mut self, field_token: &Token, tokens: &[Token]) -> OtfResult<()> {
        (**self).on_begin_composite(field_token, tokens)
    }

    fn on_end_composite(&mut self, field_token: &Token, tokens: &[Token]) -> OtfResult<()> {
        (**self).on_end_composite(field_token, tokens)
    }

    fn on_group_header(&mut self, token: &Token, num_in_group: usize) -> OtfResult<()> {
        (**self).on_group_header(token, num_in_group)
    }

    fn on_begin_group(
        &mut self,
        token: &Token,
        group_index: usize,
        num_in_group: usize,
    ) -> OtfResult<()> {
        (**self).on_begin_group(token, group_index, num_in_group)
    }

    fn on_end_group(
        &mut self,
        token: &Token,
        group_index: usize,
        num_in_group: usize,
    ) -> OtfResult<()> {
        (**self).on_end_group(token, group_index, num_in_group)
    }

    fn on_var_data(
        &mut self,
        field_token: &Token,
        buffer: Reader<'_>,
        index: usize,
        length: usize,
        type_token: &Token,
    ) -> OtfResult<()> {
        (**self).on_var_data(field_token, buffer, index, length, type_token)
    }
}
