//! # Type Registry
//!
//! Explicit type-url to decoder table. Every entry is registered by hand at
//! construction; an unknown url is an error, never a silent skip.

use crate::domain::AssemblerError;
use serde_json::Value;
use shared_types::{
    Any, Message, MsgWriteContractSpecification, MsgWriteRecord, MsgWriteRecordSpecification,
    MsgWriteScope, MsgWriteScopeSpecification, MsgWriteSession, TypesError, WriteOperation,
};
use std::collections::BTreeMap;

type DecodeFn = fn(&[u8]) -> Result<WriteOperation, TypesError>;
type RenderFn = fn(&[u8]) -> Result<Value, AssemblerError>;

#[derive(Clone, Copy)]
struct Registration {
    decode: DecodeFn,
    render: RenderFn,
}

fn decode_as<M: Message + Into<WriteOperation>>(bytes: &[u8]) -> Result<WriteOperation, TypesError> {
    M::decode(bytes).map(Into::into)
}

fn render_as<M: Message>(bytes: &[u8]) -> Result<Value, AssemblerError> {
    let message = M::decode(bytes)?;
    Ok(serde_json::to_value(&message)?)
}

/// Registry of message types the assembler can decode and render.
#[derive(Clone, Default)]
pub struct TypeRegistry {
    entries: BTreeMap<&'static str, Registration>,
}

impl TypeRegistry {
    /// Registry with no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry holding all six metadata write operations.
    pub fn metadata() -> Self {
        let mut registry = Self::empty();
        registry.register::<MsgWriteContractSpecification>();
        registry.register::<MsgWriteScopeSpecification>();
        registry.register::<MsgWriteScope>();
        registry.register::<MsgWriteSession>();
        registry.register::<MsgWriteRecordSpecification>();
        registry.register::<MsgWriteRecord>();
        registry
    }

    /// Register `M` under its type url.
    pub fn register<M: Message + Into<WriteOperation>>(&mut self) -> &mut Self {
        self.entries.insert(
            M::TYPE_URL,
            Registration {
                decode: decode_as::<M>,
                render: render_as::<M>,
            },
        );
        self
    }

    /// Whether `type_url` is registered.
    pub fn contains(&self, type_url: &str) -> bool {
        self.entries.contains_key(type_url)
    }

    /// Registered type urls, sorted.
    pub fn type_urls(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    fn lookup(&self, type_url: &str) -> Result<Registration, AssemblerError> {
        self.entries
            .get(type_url)
            .copied()
            .ok_or_else(|| AssemblerError::UnregisteredMessageType(type_url.to_string()))
    }

    /// Decode a packed message into its typed write operation.
    pub fn decode(&self, any: &Any) -> Result<WriteOperation, AssemblerError> {
        let registration = self.lookup(&any.type_url)?;
        Ok((registration.decode)(&any.value)?)
    }

    /// JSON object for a packed message, tagged with `@type`.
    pub fn render(&self, any: &Any) -> Result<Value, AssemblerError> {
        let registration = self.lookup(&any.type_url)?;
        let body = (registration.render)(&any.value)?;
        let mut tagged = serde_json::Map::new();
        tagged.insert("@type".to_string(), Value::String(any.type_url.clone()));
        match body {
            Value::Object(fields) => tagged.extend(fields),
            other => {
                tagged.insert("value".to_string(), other);
            }
        }
        Ok(Value::Object(tagged))
    }
}

impl std::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.entries.keys()).finish()
    }
}
