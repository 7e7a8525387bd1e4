use crate::{link::Link, model::EntityDescriptor, view::ViewKind};
use derive_more::Deref;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::{collections::BTreeMap, sync::Arc};

///
/// PersistentResource
///
/// Hook input: the serialized representation of one persisted entity,
/// its metamodel descriptor, and any hypermedia links already attached.
///

#[derive(Clone, Debug)]
pub struct PersistentResource {
    descriptor: Arc<EntityDescriptor>,
    content: Value,
    links: Vec<Link>,
}

impl PersistentResource {
    #[must_use]
    pub const fn new(descriptor: Arc<EntityDescriptor>, content: Value, links: Vec<Link>) -> Self {
        Self {
            descriptor,
            content,
            links,
        }
    }

    #[must_use]
    pub const fn descriptor(&self) -> &Arc<EntityDescriptor> {
        &self.descriptor
    }

    #[must_use]
    pub const fn content(&self) -> &Value {
        &self.content
    }

    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub(crate) fn into_parts(self) -> (Arc<EntityDescriptor>, Value, Vec<Link>) {
        (self.descriptor, self.content, self.links)
    }
}

///
/// DynamicProperties
///
/// Insertion-ordered field-id to value map for one view. Keys are unique;
/// inserting an existing id replaces the value but keeps the original
/// position. Serializes as a JSON object in insertion order.
///

#[derive(Clone, Debug, Default, Deref, PartialEq)]
pub struct DynamicProperties(Vec<(String, Value)>);

impl DynamicProperties {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert a field value; replaces in place when the id already exists.
    pub fn insert(&mut self, id: impl Into<String>, value: Value) {
        let id = id.into();
        if let Some(entry) = self.0.iter_mut().find(|(k, _)| *k == id) {
            entry.1 = value;
        } else {
            self.0.push((id, value));
        }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Value> {
        self.0.iter().find(|(k, _)| k == id).map(|(_, v)| v)
    }

    /// Field ids in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }
}

impl Serialize for DynamicProperties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (id, value) in &self.0 {
            map.serialize_entry(id, value)?;
        }
        map.end()
    }
}

///
/// EntityWrapper
///
/// The enriched entity as it goes on the wire. Field names are a fixed
/// contract with the console client; `domain_link` is omitted when the
/// type has no canonical link and `dynamic_properties` when the type is
/// unmanaged.
///

#[derive(Debug, Serialize)]
pub struct EntityWrapper {
    pub string_representation: String,
    pub primary_key: String,
    pub managed_type: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_link: Option<Link>,
    pub original_properties: Value,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub dynamic_properties: BTreeMap<ViewKind, DynamicProperties>,
}

///
/// EnrichedResource
///
/// Hook output: the wrapper in place of the raw entity, with the input's
/// hypermedia links preserved unchanged.
///

#[derive(Debug, Serialize)]
pub struct EnrichedResource {
    #[serde(flatten)]
    wrapper: EntityWrapper,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    links: Vec<Link>,
    #[serde(skip)]
    descriptor: Arc<EntityDescriptor>,
}

impl EnrichedResource {
    #[must_use]
    pub const fn new(
        descriptor: Arc<EntityDescriptor>,
        wrapper: EntityWrapper,
        links: Vec<Link>,
    ) -> Self {
        Self {
            wrapper,
            links,
            descriptor,
        }
    }

    #[must_use]
    pub const fn descriptor(&self) -> &Arc<EntityDescriptor> {
        &self.descriptor
    }

    #[must_use]
    pub const fn wrapper(&self) -> &EntityWrapper {
        &self.wrapper
    }

    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }
}

///
/// TESTS
///
