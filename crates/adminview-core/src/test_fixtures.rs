use crate::{
    error::InternalError,
    link::{DomainLinkResolver, FilePropertyLinkResolver, Link},
    model::{EntityDescriptor, PropertyKind, PropertyModel},
    resource::PersistentResource,
    storage::FileStorage,
};
use serde_json::Value;
use std::collections::HashMap;

/// Build a descriptor with the standard fixture property set: `id`,
/// `name`, plus two file properties (`avatar`, `contract`).
pub(crate) fn descriptor(path: &str, entity_name: &str) -> EntityDescriptor {
    EntityDescriptor::new(
        path,
        entity_name,
        "id",
        vec![
            PropertyModel::new("id", PropertyKind::Uint),
            PropertyModel::new("name", PropertyKind::Text),
            PropertyModel::new("avatar", PropertyKind::File),
            PropertyModel::new("contract", PropertyKind::File),
        ],
    )
    .expect("fixture descriptor should construct")
}

pub(crate) fn customer_descriptor() -> EntityDescriptor {
    descriptor("crm::Customer", "Customer")
}

///
/// FileOutcome
/// Canned result of one stubbed existence check.
///

#[derive(Clone, Copy, Debug)]
pub(crate) enum FileOutcome {
    Exists,
    Absent,
    Fails,
}

///
/// StubFileStorage
///

pub(crate) struct StubFileStorage {
    default: FileOutcome,
    overrides: HashMap<String, FileOutcome>,
}

impl StubFileStorage {
    pub(crate) fn all(default: FileOutcome) -> Self {
        Self {
            default,
            overrides: HashMap::new(),
        }
    }

    pub(crate) fn with(mut self, property: &str, outcome: FileOutcome) -> Self {
        self.overrides.insert(property.to_string(), outcome);
        self
    }
}

impl FileStorage for StubFileStorage {
    fn file_exists(
        &self,
        _descriptor: &EntityDescriptor,
        _entity: &Value,
        property: &PropertyModel,
    ) -> Result<bool, InternalError> {
        let outcome = self
            .overrides
            .get(&property.name)
            .copied()
            .unwrap_or(self.default);

        match outcome {
            FileOutcome::Exists => Ok(true),
            FileOutcome::Absent => Ok(false),
            FileOutcome::Fails => Err(InternalError::storage_internal("stubbed storage failure")),
        }
    }
}

///
/// StubFileLinks
///

pub(crate) struct StubFileLinks {
    fails: bool,
}

impl StubFileLinks {
    pub(crate) const fn resolving() -> Self {
        Self { fails: false }
    }

    pub(crate) const fn failing() -> Self {
        Self { fails: true }
    }
}

impl FilePropertyLinkResolver for StubFileLinks {
    fn link_for_file_property(
        &self,
        descriptor: &EntityDescriptor,
        _entity: &Value,
        property: &PropertyModel,
    ) -> Result<Link, InternalError> {
        if self.fails {
            return Err(InternalError::link_internal("stubbed link failure"));
        }

        Ok(Link::new(
            "file",
            format!(
                "/files/{}/{}",
                descriptor.entity_name().to_lowercase(),
                property.name
            ),
        ))
    }
}

///
/// StubDomainLinks
///

pub(crate) struct StubDomainLinks {
    supports: bool,
}

impl StubDomainLinks {
    pub(crate) const fn supported() -> Self {
        Self { supports: true }
    }

    pub(crate) const fn unsupported() -> Self {
        Self { supports: false }
    }
}

impl DomainLinkResolver for StubDomainLinks {
    fn supports(&self, _descriptor: &EntityDescriptor) -> bool {
        self.supports
    }

    fn link_for(&self, resource: &PersistentResource) -> Link {
        let descriptor = resource.descriptor();
        let pk = &resource.content()[descriptor.primary_key()];

        Link::new(
            "domain",
            format!("/admin/{}/{pk}", descriptor.entity_name().to_lowercase()),
        )
    }
}
