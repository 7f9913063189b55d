//! Views that split a message's token list into fields, groups and var data.

use crate::{IrError, IrResult, Signal, Token};

/// One message's tokens split into its top-level parts.
///
/// All members borrow from the message's token list.
#[derive(Debug, Clone, Copy)]
pub struct MessageComponents<'a> {
    pub message_token: &'a Token,
    pub fields: &'a [Token],
    pub groups: &'a [Token],
    pub var_data: &'a [Token],
}

impl<'a> MessageComponents<'a> {
    pub fn collect(tokens: &'a [Token]) -> IrResult<Self> {
        let body = message_body(tokens)?;
        let fields_end = collect_fields(body, 0);
        let groups_end = collect_groups(body, fields_end);
        let var_data_end = collect_var_data(body, groups_end);
        Ok(Self {
            message_token: &tokens[0],
            fields: &body[..fields_end],
            groups: &body[fields_end..groups_end],
            var_data: &body[groups_end..var_data_end],
        })
    }
}

/// Skips the contiguous run of `signal` containers starting at `index` and
/// returns the index just past it.
pub fn collect(signal: Signal, tokens: &[Token], index: usize) -> usize {
    let mut i = index;
    while let Some(token) = tokens.get(i) {
        if token.signal() != signal {
            break;
        }
        i += token.component_token_count().max(1);
    }
    i.min(tokens.len())
}

pub fn collect_fields(tokens: &[Token], index: usize) -> usize {
    collect(Signal::BeginField, tokens, index)
}

pub fn collect_groups(tokens: &[Token], index: usize) -> usize {
    collect(Signal::BeginGroup, tokens, index)
}

pub fn collect_var_data(tokens: &[Token], index: usize) -> usize {
    collect(Signal::BeginVarData, tokens, index)
}

/// The tokens between `BEGIN_MESSAGE` and `END_MESSAGE`.
pub fn message_body(tokens: &[Token]) -> IrResult<&[Token]> {
    match tokens {
        [first, body @ .., last]
            if first.signal() == Signal::BeginMessage && last.signal() == Signal::EndMessage =>
        {
            Ok(body)
        }
        _ => Err(IrError::MalformedMessage),
    }
}

/// Index of the first `signal` token named `name` at or after `start`, or the
/// last index when there is none.
pub fn find_end_signal(tokens: &[Token], start: usize, signal: Signal, name: &str) -> usize {
    let last = tokens.len().saturating_sub(1);
    (start..last)
        .find(|&i| tokens[i].signal() == signal && tokens[i].name() == name)
        .unwrap_or(last)
}

/// Calls `f(field_token, type_token)` for every field in `tokens`, skipping
/// each field's interior.
pub fn each_field(tokens: &[Token], mut f: impl FnMut(&Token, &Token)) {
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        match (token.signal(), tokens.get(i + 1)) {
            (Signal::BeginField, Some(type_token)) => {
                f(token, type_token);
                i += token.component_token_count().max(1);
            }
            _ => i += 1,
        }
    }
}
