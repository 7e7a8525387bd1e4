//! Resource enrichment runtime for entity-backed admin consoles: per-type
//! configuration registry, view/field metadata, and the enricher that
//! wraps serialized entities with console-facing properties.
#![warn(unreachable_pub)]

pub mod config;
pub mod enrich;
pub mod error;
pub mod field;
pub mod link;
pub mod model;
pub mod obs;
pub mod registry;
pub mod resource;
pub mod storage;
pub mod view;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, metrics, or helper functions are re-exported here.
///

pub mod prelude {
    pub use crate::{
        config::EntityAdminConfig,
        enrich::ResourceEnricher,
        field::{FieldMetadata, FieldSource},
        link::Link,
        model::{EntityDescriptor, PropertyKind, PropertyModel},
        registry::AdminRegistry,
        resource::{EnrichedResource, PersistentResource},
        storage::FilePropertyValue,
        view::ViewKind,
    };
}
