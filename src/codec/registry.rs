/// Registry mapping type names to object codecs

use std::collections::HashMap;

use log::{debug, warn};

use super::{register_graph_codec, EncodedObject, ObjectCodec, Persistable};
use crate::{CodecConfig, Error, Result};

/// Map from type name to the codec that persists it.
///
/// A type has at most one codec: registering again for the same name
/// replaces the earlier entry. Types without a registered codec are encoded
/// with every field persisted.
#[derive(Debug, Clone, Default)]
pub struct CodecRegistry {
    config: CodecConfig,
    codecs: HashMap<String, ObjectCodec>,
    aliases: HashMap<String, String>,
}

impl CodecRegistry {
    pub fn new(config: CodecConfig) -> Self {
        Self {
            config,
            codecs: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    /// Registry with the built-in codecs (currently the graph codec)
    pub fn with_defaults(config: CodecConfig) -> Result<Self> {
        let mut registry = Self::new(config);
        register_graph_codec(&mut registry)?;
        Ok(registry)
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Register `codec` under its type name and return the codec it replaced
    pub fn register(&mut self, codec: ObjectCodec) -> Option<ObjectCodec> {
        let name = codec.name().to_string();
        debug!("registering codec for {} (transient: {:?})", name, codec.transient());
        let previous = self.codecs.insert(name.clone(), codec);
        if previous.is_some() {
            warn!("codec for {} replaced by a later registration", name);
        }
        previous
    }

    /// Let records tagged `alias` resolve to the codec registered as `name`
    pub fn add_alias(&mut self, alias: impl Into<String>, name: impl Into<String>) {
        self.aliases.insert(alias.into(), name.into());
    }

    /// Resolve an alias to its registered type name
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        match self.aliases.get(name) {
            Some(target) if !target.is_empty() => target.as_str(),
            _ => name,
        }
    }

    pub fn codec(&self, name: &str) -> Option<&ObjectCodec> {
        self.codecs.get(self.resolve(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.codec(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }

    pub fn encode<T: Persistable>(&self, obj: &T) -> Result<EncodedObject> {
        match self.codec(T::TYPE_NAME) {
            Some(codec) => codec.encode(obj, &self.config),
            None => fallback_codec::<T>()?.encode(obj, &self.config),
        }
    }

    /// Decode a record into `T`. The record's type tag, after alias
    /// resolution, must name `T`.
    pub fn decode<T: Persistable>(&self, record: &EncodedObject) -> Result<T> {
        let name = self.resolve(&record.type_name);
        if name != T::TYPE_NAME {
            return Err(Error::TypeMismatch {
                expected: T::TYPE_NAME.to_string(),
                found: record.type_name.clone(),
            });
        }

        match self.codec(name) {
            Some(codec) => codec.decode_fields(&record.fields),
            None => fallback_codec::<T>()?.decode_fields(&record.fields),
        }
    }
}

fn fallback_codec<T: Persistable>() -> Result<ObjectCodec> {
    debug!("no codec registered for {}, persisting every field", T::TYPE_NAME);
    ObjectCodec::from_template(&T::default(), &[])
}
