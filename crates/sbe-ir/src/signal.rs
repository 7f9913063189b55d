//! Structural markers of the token stream.

use std::fmt;

/// The role a [`Token`](crate::Token) plays in the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    BeginMessage,
    EndMessage,
    BeginComposite,
    EndComposite,
    BeginField,
    EndField,
    BeginGroup,
    EndGroup,
    BeginEnum,
    ValidValue,
    EndEnum,
    BeginSet,
    Choice,
    EndSet,
    BeginVarData,
    EndVarData,
    Encoding,
}

impl Signal {
    /// Whether this signal opens a container closed by [`Signal::matching_end`].
    pub fn is_begin(self) -> bool {
        self.matching_end().is_some()
    }

    /// The end signal closing a container opened by this signal.
    pub fn matching_end(self) -> Option<Signal> {
        match self {
            Signal::BeginMessage => Some(Signal::EndMessage),
            Signal::BeginComposite => Some(Signal::EndComposite),
            Signal::BeginField => Some(Signal::EndField),
            Signal::BeginGroup => Some(Signal::EndGroup),
            Signal::BeginEnum => Some(Signal::EndEnum),
            Signal::BeginSet => Some(Signal::EndSet),
            Signal::BeginVarData => Some(Signal::EndVarData),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Signal::BeginMessage => "BEGIN_MESSAGE",
            Signal::EndMessage => "END_MESSAGE",
            Signal::BeginComposite => "BEGIN_COMPOSITE",
            Signal::EndComposite => "END_COMPOSITE",
            Signal::BeginField => "BEGIN_FIELD",
            Signal::EndField => "END_FIELD",
            Signal::BeginGroup => "BEGIN_GROUP",
            Signal::EndGroup => "END_GROUP",
            Signal::BeginEnum => "BEGIN_ENUM",
            Signal::ValidValue => "VALID_VALUE",
            Signal::EndEnum => "END_ENUM",
            Signal::BeginSet => "BEGIN_SET",
            Signal::Choice => "CHOICE",
            Signal::EndSet => "END_SET",
            Signal::BeginVarData => "BEGIN_VAR_DATA",
            Signal::EndVarData => "END_VAR_DATA",
            Signal::Encoding => "ENCODING",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
