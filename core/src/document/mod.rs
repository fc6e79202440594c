#![deny(missing_docs)]

//! # Documents
//!
//! Format-agnostic output trees of the generator.
//!
//! - **generator**: The shared traversal.
//! - **schema**: JSON Schema emitter.
//! - **example**: Example payload emitter.
//!
//! A [`Document`] is built bottom-up and never mutated once a subtree is
//! closed. Object keys keep insertion order so fields appear in declaration
//! order after serialization.

pub mod example;
pub mod generator;
pub mod schema;

pub use example::ExampleEmitter;
pub use generator::{DocumentGenerator, Emitter, Node};
pub use schema::SchemaEmitter;

use indexmap::IndexMap;
use serde::ser::{Serialize, Serializer};
use serde_json::{Number, Value};

/// Leaf value of a document.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// `null`
    Null,
    /// `true`/`false`
    Boolean(bool),
    /// Integral number.
    Integer(i64),
    /// Floating point number.
    Float(f64),
    /// Text.
    String(String),
}

/// Tree of scalars, arrays and ordered objects.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    /// Leaf.
    Scalar(Scalar),
    /// Ordered sequence.
    Array(Vec<Document>),
    /// Ordered mapping of keys to subtrees.
    Object(IndexMap<String, Document>),
}

impl Document {
    /// A string leaf.
    pub fn string(value: impl Into<String>) -> Self {
        Document::Scalar(Scalar::String(value.into()))
    }

    /// An object from key/value pairs, in order.
    pub fn object<K: Into<String>>(entries: impl IntoIterator<Item = (K, Document)>) -> Self {
        Document::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Member of an object document.
    pub fn get(&self, key: &str) -> Option<&Document> {
        match self {
            Document::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Text of a string leaf.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Document::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Keys of an object document, in order.
    pub fn keys(&self) -> Vec<&str> {
        match self {
            Document::Object(map) => map.keys().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Converts to a JSON value, keeping key order.
    pub fn to_json(&self) -> Value {
        Value::from(self)
    }
}

impl From<bool> for Document {
    fn from(value: bool) -> Self {
        Document::Scalar(Scalar::Boolean(value))
    }
}

impl From<i64> for Document {
    fn from(value: i64) -> Self {
        Document::Scalar(Scalar::Integer(value))
    }
}

impl From<f64> for Document {
    fn from(value: f64) -> Self {
        Document::Scalar(Scalar::Float(value))
    }
}

impl From<&str> for Document {
    fn from(value: &str) -> Self {
        Document::string(value)
    }
}

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Document::Scalar(Scalar::Null),
            Value::Bool(b) => b.into(),
            Value::Number(n) => match n.as_i64() {
                Some(i) => i.into(),
                None => n.as_f64().map(Document::from).unwrap_or(Document::Scalar(Scalar::Null)),
            },
            Value::String(s) => Document::string(s),
            Value::Array(items) => Document::Array(items.into_iter().map(Document::from).collect()),
            Value::Object(map) => Document::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Document::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&Document> for Value {
    fn from(doc: &Document) -> Self {
        match doc {
            Document::Scalar(Scalar::Null) => Value::Null,
            Document::Scalar(Scalar::Boolean(b)) => Value::Bool(*b),
            Document::Scalar(Scalar::Integer(i)) => Value::Number((*i).into()),
            Document::Scalar(Scalar::Float(f)) => {
                Number::from_f64(*f).map(Value::Number).unwrap_or(Value::Null)
            }
            Document::Scalar(Scalar::String(s)) => Value::String(s.clone()),
            Document::Array(items) => Value::Array(items.iter().map(Value::from).collect()),
            Document::Object(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Document::Scalar(Scalar::Null) => serializer.serialize_unit(),
            Document::Scalar(Scalar::Boolean(b)) => serializer.serialize_bool(*b),
            Document::Scalar(Scalar::Integer(i)) => serializer.serialize_i64(*i),
            Document::Scalar(Scalar::Float(f)) => serializer.serialize_f64(*f),
            Document::Scalar(Scalar::String(s)) => serializer.serialize_str(s),
            Document::Array(items) => serializer.collect_seq(items),
            Document::Object(map) => serializer.collect_map(map),
        }
    }
}
