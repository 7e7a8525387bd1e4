use crate::{
    error::InternalError,
    link::Link,
    model::{EntityDescriptor, PropertyModel},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

///
/// FileStorage
///
/// Existence checks for stored file properties. May block on I/O; the
/// enricher imposes no timeout or retry of its own, and converts any
/// failure into omission of the affected field.
///

pub trait FileStorage {
    fn file_exists(
        &self,
        descriptor: &EntityDescriptor,
        entity: &Value,
        property: &PropertyModel,
    ) -> Result<bool, InternalError>;
}

///
/// FilePropertyValue
///
/// Resolved value of a file property. An empty file slot is a *present*
/// entry with `file_exists: false`, so consumers can distinguish "slot
/// absent" from "slot present with a link".
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FilePropertyValue {
    pub file_exists: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<Link>,
}

impl FilePropertyValue {
    /// The "no file stored in this slot" sentinel.
    #[must_use]
    pub const fn absent() -> Self {
        Self {
            file_exists: false,
            file_url: None,
        }
    }

    /// A stored file with its resolved link.
    #[must_use]
    pub const fn present(link: Link) -> Self {
        Self {
            file_exists: true,
            file_url: Some(link),
        }
    }
}

impl From<FilePropertyValue> for Value {
    fn from(value: FilePropertyValue) -> Self {
        let mut map = serde_json::Map::new();
        map.insert("file_exists".to_string(), Self::Bool(value.file_exists));
        if let Some(link) = value.file_url {
            map.insert(
                "file_url".to_string(),
                serde_json::json!({ "rel": link.rel, "href": link.href }),
            );
        }

        Self::Object(map)
    }
}

///
/// TESTS
///
