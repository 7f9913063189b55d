//! The in-memory IR: header layout plus the message and type tables.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::{message_body, ByteOrder, HeaderStructure, IrResult, Signal, Token};

/// A schema's complete set of message layouts.
///
/// Message token lists are stored behind `Arc<[Token]>` so decoders on
/// several threads can hold them without copying.
#[derive(Debug, Clone)]
pub struct Ir {
    package_name: String,
    namespace: Option<String>,
    id: i64,
    version: u32,
    semantic_version: Option<String>,
    byte_order: ByteOrder,
    header_structure: HeaderStructure,
    messages: BTreeMap<i64, Arc<[Token]>>,
    types: BTreeMap<String, Arc<[Token]>>,
}

impl Ir {
    pub fn new(
        package_name: impl Into<String>,
        id: i64,
        version: u32,
        header_tokens: Vec<Token>,
    ) -> IrResult<Self> {
        Ok(Self {
            package_name: package_name.into(),
            namespace: None,
            id,
            version,
            semantic_version: None,
            byte_order: ByteOrder::LittleEndian,
            header_structure: HeaderStructure::new(header_tokens)?,
            messages: BTreeMap::new(),
            types: BTreeMap::new(),
        })
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_semantic_version(mut self, semantic_version: impl Into<String>) -> Self {
        self.semantic_version = Some(semantic_version.into());
        self
    }

    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// The namespace if set, else the package name.
    pub fn applicable_namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or(&self.package_name)
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn semantic_version(&self) -> Option<&str> {
        self.semantic_version.as_deref()
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    pub fn header_structure(&self) -> &HeaderStructure {
        &self.header_structure
    }

    /// Registers a message under the id of its `BEGIN_MESSAGE` token and
    /// records the composite, enum and set types it uses.
    pub fn add_message(&mut self, tokens: Vec<Token>) -> IrResult<()> {
        message_body(&tokens)?;
        let template_id = i64::from(tokens[0].id());
        self.capture_types(&tokens);
        tracing::debug!(
            template_id,
            name = tokens[0].name(),
            tokens = tokens.len(),
            "message added"
        );
        self.messages.insert(template_id, tokens.into());
        Ok(())
    }

    pub fn message(&self, template_id: i64) -> Option<&Arc<[Token]>> {
        self.messages.get(&template_id)
    }

    /// Message token lists ordered by template id.
    pub fn messages(&self) -> impl Iterator<Item = &Arc<[Token]>> {
        self.messages.values()
    }

    pub fn type_by_name(&self, name: &str) -> Option<&Arc<[Token]>> {
        self.types.get(name)
    }

    pub fn types(&self) -> impl Iterator<Item = &Arc<[Token]>> {
        self.types.values()
    }

    fn capture_types(&mut self, tokens: &[Token]) {
        for (i, token) in tokens.iter().enumerate() {
            if matches!(
                token.signal(),
                Signal::BeginComposite | Signal::BeginEnum | Signal::BeginSet
            ) {
                let end = (i + token.component_token_count()).min(tokens.len());
                self.types
                    .entry(token.applicable_type_name().to_string())
                    .or_insert_with(|| tokens[i..end].into());
            }
        }
    }
}
