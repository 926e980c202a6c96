//! Object codecs: persistent vs. transient state of structured types
//!
//! A type opts in by implementing [`Persistable`], which names the type and
//! enumerates its fields. An [`ObjectCodec`] built for that type lists which
//! fields are transient; those are never written on encode and are never read
//! back on decode, so a decoded instance keeps the values its `Default`
//! construction assigns. Codecs live in an explicit [`CodecRegistry`] keyed by
//! type name.

pub mod graph;
pub mod object;
pub mod registry;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use graph::{graph_codec, register_graph_codec, CellRenderer, Graph, GraphField, GraphView};
pub use object::ObjectCodec;
pub use registry::CodecRegistry;

/// A field identifier of a [`Persistable`] type.
///
/// Transient lists are built from these rather than from strings, so naming
/// a field the type does not have fails to compile.
pub trait FieldName: Copy {
    /// Name of the field in the type's serialized form
    fn name(self) -> &'static str;
}

/// A type whose instances can be encoded by an [`ObjectCodec`].
///
/// The serialized form must be a map of field name to value, and `Default`
/// is the construction path used as the starting point of every decode.
pub trait Persistable: Serialize + DeserializeOwned + Default {
    /// Stable identifier used as the registry key and record tag
    const TYPE_NAME: &'static str;

    type Field: FieldName;
}

/// The persisted form of one object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodedObject {
    #[serde(rename = "type")]
    pub type_name: String,
    pub fields: Map<String, Value>,
}

impl EncodedObject {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Map::new(),
        }
    }

    /// Persisted value of an attribute, if it was written
    pub fn get(&self, attribute: &str) -> Option<&Value> {
        self.fields.get(attribute)
    }

    pub fn contains(&self, attribute: &str) -> bool {
        self.fields.contains_key(attribute)
    }
}
