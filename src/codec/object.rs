/// Field-level codec for a single persistable type

use std::collections::BTreeMap;

use log::debug;
use serde::Serialize;
use serde_json::{Map, Value};

use super::{EncodedObject, FieldName, Persistable};
use crate::{CodecConfig, Error, Result};

/// Encodes and decodes one [`Persistable`] type, leaving out its transient
/// fields.
///
/// Fields are persisted unless listed as transient. Unless
/// [`CodecConfig::encode_defaults`] is set, values equal to the template's are
/// not written; nulls are only written when the template holds a value.
/// Decoding restores omitted fields from the template, so both directions
/// share the same baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectCodec {
    name: String,
    transient: Vec<&'static str>,
    defaults: Map<String, Value>,
    mapping: BTreeMap<String, String>,
}

impl ObjectCodec {
    /// Build a codec for the template's type. The template is only read: its
    /// persistent field values become the baseline that encoding omits and
    /// decoding restores.
    pub fn from_template<T: Persistable>(template: &T, transient: &[T::Field]) -> Result<Self> {
        Ok(Self {
            name: T::TYPE_NAME.to_string(),
            transient: transient.iter().map(|f| f.name()).collect(),
            defaults: to_field_map(template, T::TYPE_NAME)?,
            mapping: BTreeMap::new(),
        })
    }

    /// Persist `field` under a different attribute name.
    ///
    /// Fails with [`Error::Config`] when another field is already written
    /// under `attribute`.
    pub fn with_mapping(mut self, field: impl FieldName, attribute: impl Into<String>) -> Result<Self> {
        let field = field.name();
        let attribute = attribute.into();

        let taken_by = self
            .defaults
            .keys()
            .map(String::as_str)
            .chain(self.mapping.keys().map(String::as_str))
            .filter(|other| *other != field)
            .find(|other| self.attribute_name(other) == attribute);
        if let Some(other) = taken_by {
            return Err(Error::Config(format!(
                "{}: attribute '{}' for field '{}' is already used by field '{}'",
                self.name, attribute, field, other
            )));
        }

        self.mapping.insert(field.to_string(), attribute);
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Transient field names, in declaration order
    pub fn transient(&self) -> &[&'static str] {
        &self.transient
    }

    pub fn is_transient(&self, field: &str) -> bool {
        self.transient.iter().any(|t| *t == field)
    }

    /// Attribute name a field is written under
    pub fn attribute_name<'a>(&'a self, field: &'a str) -> &'a str {
        self.mapping.get(field).map(String::as_str).unwrap_or(field)
    }

    /// Field name an attribute is read into
    pub fn field_name<'a>(&'a self, attribute: &'a str) -> &'a str {
        self.mapping
            .iter()
            .find(|(_, attr)| attr.as_str() == attribute)
            .map(|(field, _)| field.as_str())
            .unwrap_or(attribute)
    }

    pub fn encode<T: Persistable>(&self, obj: &T, config: &CodecConfig) -> Result<EncodedObject> {
        self.check_type(T::TYPE_NAME)?;

        let mut record = EncodedObject::new(self.name.clone());
        for (field, value) in to_field_map(obj, T::TYPE_NAME)? {
            if self.is_transient(&field) {
                continue;
            }
            let default = self.defaults.get(&field);
            if value.is_null() && default.map_or(true, Value::is_null) {
                continue;
            }
            if !config.encode_defaults && default == Some(&value) {
                continue;
            }
            let attribute = self.attribute_name(&field).to_string();
            record.fields.insert(attribute, value);
        }

        Ok(record)
    }

    pub fn decode<T: Persistable>(&self, record: &EncodedObject) -> Result<T> {
        self.check_type(&record.type_name)?;
        self.decode_fields(&record.fields)
    }

    /// Start from a freshly constructed `T`, reset its persistent fields to
    /// the template's values and overlay every persisted, non-transient field
    /// the type knows about. Transient fields keep their `Default` values.
    pub(crate) fn decode_fields<T: Persistable>(&self, fields: &Map<String, Value>) -> Result<T> {
        self.check_type(T::TYPE_NAME)?;

        let mut base = to_field_map(&T::default(), T::TYPE_NAME)?;
        for (field, slot) in base.iter_mut() {
            if self.is_transient(field) {
                continue;
            }
            if let Some(value) = self.defaults.get(field) {
                *slot = value.clone();
            }
        }
        for (attribute, value) in fields {
            let field = self.field_name(attribute);
            if self.is_transient(field) {
                debug!("{}: ignoring persisted transient field '{}'", self.name, field);
                continue;
            }
            match base.get_mut(field) {
                Some(slot) => *slot = value.clone(),
                None => debug!("{}: ignoring unknown field '{}'", self.name, field),
            }
        }

        Ok(serde_json::from_value(Value::Object(base))?)
    }

    fn check_type(&self, found: &str) -> Result<()> {
        if found == self.name {
            Ok(())
        } else {
            Err(Error::TypeMismatch {
                expected: self.name.clone(),
                found: found.to_string(),
            })
        }
    }
}

fn to_field_map<T: Serialize>(value: &T, type_name: &str) -> Result<Map<String, Value>> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(Error::Other(format!(
            "{} serialized to a non-map value: {}",
            type_name, other
        ))),
    }
}
