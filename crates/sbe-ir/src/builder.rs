//! Assembly of well-formed token lists.

use crate::{IrError, IrResult, Signal, Token};

/// Builds a token list, closing containers and back-patching their
/// `component_token_count`.
///
/// # Example
///
/// ```
/// use sbe_ir::{ByteOrder, Encoding, PrimitiveType, Signal, Token, TokenListBuilder};
///
/// let mut builder = TokenListBuilder::new();
/// builder
///     .begin(Token::builder(Signal::BeginMessage, "Ping").id(1).build())?
///     .begin(Token::builder(Signal::BeginField, "seq").build())?
///     .push(
///         Token::builder(Signal::Encoding, "uint32")
///             .encoded_length(4)
///             .encoding(Encoding::of(PrimitiveType::Uint32, ByteOrder::LittleEndian))
///             .build(),
///     )?
///     .end(Signal::EndField)?
///     .end(Signal::EndMessage)?;
/// let tokens = builder.build()?;
///
/// assert_eq!(tokens.len(), 5);
/// assert_eq!(tokens[0].component_token_count(), 5);
/// assert_eq!(tokens[1].component_token_count(), 3);
/// # Ok::<(), sbe_ir::IrError>(())
/// ```
#[derive(Debug, Default)]
pub struct TokenListBuilder {
    tokens: Vec<Token>,
    open: Vec<usize>,
}

impl TokenListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Opens a container. The token's signal must be a `BEGIN_*` signal.
    pub fn begin(&mut self, token: Token) -> IrResult<&mut Self> {
        if !token.signal().is_begin() {
            return Err(IrError::NotAContainer(token.signal()));
        }
        self.open.push(self.tokens.len());
        self.tokens.push(token);
        Ok(self)
    }

    /// Appends a leaf token (`ENCODING`, `VALID_VALUE` or `CHOICE`).
    pub fn push(&mut self, mut token: Token) -> IrResult<&mut Self> {
        if token.signal().is_begin() {
            return Err(IrError::UnexpectedBegin(token.signal()));
        }
        token.set_component_token_count(1);
        self.tokens.push(token);
        Ok(self)
    }

    /// Closes the innermost open container with `signal`.
    ///
    /// The end token mirrors the begin token, and both carry the span of the
    /// whole container.
    pub fn end(&mut self, signal: Signal) -> IrResult<&mut Self> {
        let begin_index = self
            .open
            .pop()
            .ok_or(IrError::UnexpectedEnd { signal })?;
        let begin = &self.tokens[begin_index];
        let expected = begin.signal().matching_end();
        if expected != Some(signal) {
            return Err(IrError::UnbalancedSignal {
                name: begin.name().to_string(),
                expected: expected.unwrap_or(signal),
                found: signal,
            });
        }
        let count = self.tokens.len() - begin_index + 1;
        self.tokens[begin_index].set_component_token_count(count);
        let end = self.tokens[begin_index].with_signal(signal);
        self.tokens.push(end);
        Ok(self)
    }

    /// Appends a whole `BEGIN_FIELD`, type token, `END_FIELD` triple.
    pub fn encoding_field(&mut self, field: Token, encoding: Token) -> IrResult<&mut Self> {
        self.begin(field)?.push(encoding)?.end(Signal::EndField)
    }

    /// Appends tokens that are already well formed, such as a shared type.
    pub fn extend<'t>(&mut self, tokens: impl IntoIterator<Item = &'t Token>) -> &mut Self {
        self.tokens.extend(tokens.into_iter().cloned());
        self
    }

    pub fn build(self) -> IrResult<Vec<Token>> {
        if let Some(&index) = self.open.last() {
            return Err(IrError::UnclosedToken(self.tokens[index].name().to_string()));
        }
        Ok(self.tokens)
    }
}
