//! Stored values.

/// A value held by the registry or produced by a function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A raw byte sequence, used verbatim.
    Bytes(Vec<u8>),
    /// A decoded string, UTF-8 encoded when it reaches the wire.
    Text(String),
}

impl Value {
    /// Human-readable type name, used in `/vars` output and type errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bytes(_) => "binary",
            Value::Text(_) => "text",
        }
    }

    /// Byte length of the encoded value.
    pub fn len(&self) -> usize {
        match self {
            Value::Bytes(b) => b.len(),
            Value::Text(t) => t.len(),
        }
    }

    /// Whether the value is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consume the value into its byte encoding.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Value::Bytes(b) => b,
            Value::Text(t) => t.into_bytes(),
        }
    }

    /// The byte encoding without consuming.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Value::Bytes(b) => b.clone(),
            Value::Text(t) => t.as_bytes().to_vec(),
        }
    }

    /// Build a value from an evaluated buffer: `Text` when it decodes as
    /// UTF-8, `Bytes` otherwise.
    pub fn from_buffer(buffer: Vec<u8>) -> Self {
        match String::from_utf8(buffer) {
            Ok(text) => Value::Text(text),
            Err(err) => Value::Bytes(err.into_bytes()),
        }
    }
}
