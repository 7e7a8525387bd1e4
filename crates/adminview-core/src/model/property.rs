use serde::{Deserialize, Serialize};

///
/// PropertyKind
///
/// Runtime shape of one persisted property. This is a lossy projection of
/// whatever type system the persistence layer uses; the enricher only
/// dispatches on `File`, the rest exist for callers and diagnostics.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum PropertyKind {
    Bool,
    Date,
    Decimal,
    File,
    Float64,
    Int,
    List,
    Map,
    Text,
    Timestamp,
    Uint,
    /// Marker for properties the admin layer cannot render.
    Unsupported,
}

impl PropertyKind {
    #[must_use]
    pub const fn is_file(self) -> bool {
        matches!(self, Self::File)
    }
}

///
/// PropertyModel
/// One declared property on an entity type.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PropertyModel {
    /// Property name as it appears in the serialized representation.
    pub name: String,
    /// Runtime type shape.
    pub kind: PropertyKind,
}

impl PropertyModel {
    pub fn new(name: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

///
/// TESTS
///
