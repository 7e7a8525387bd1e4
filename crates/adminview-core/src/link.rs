use crate::{
    error::InternalError,
    model::{EntityDescriptor, PropertyModel},
    resource::PersistentResource,
};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::Value;

///
/// Link
/// One hypermedia link: relation name plus resolved href.
///

#[derive(Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[display("{rel}: {href}")]
pub struct Link {
    pub rel: String,
    pub href: String,
}

impl Link {
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
        }
    }

    /// A `self`-relation link.
    pub fn self_link(href: impl Into<String>) -> Self {
        Self::new("self", href)
    }
}

///
/// DomainLinkResolver
///
/// Builds the canonical console link for an entity. A resolver that does
/// not support a type simply yields no link; that is not an error.
///

pub trait DomainLinkResolver {
    fn supports(&self, descriptor: &EntityDescriptor) -> bool;

    fn link_for(&self, resource: &PersistentResource) -> Link;
}

///
/// FilePropertyLinkResolver
///
/// Builds the download link for a stored file property. Resolution may
/// fail; the enricher converts failure into omission of that field.
///

pub trait FilePropertyLinkResolver {
    fn link_for_file_property(
        &self,
        descriptor: &EntityDescriptor,
        entity: &Value,
        property: &PropertyModel,
    ) -> Result<Link, InternalError>;
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_link_uses_the_self_relation() {
        let link = Link::self_link("/admin/customers/7");

        assert_eq!(link.rel, "self");
        assert_eq!(link.href, "/admin/customers/7");
        assert_eq!(link.to_string(), "self: /admin/customers/7");
    }

    #[test]
    fn link_round_trips_through_json() {
        let link = Link::new("edit", "/admin/customers/7/edit");
        let json = serde_json::to_string(&link).expect("link should serialize");
        let back: Link = serde_json::from_str(&json).expect("link should deserialize");

        assert_eq!(back, link);
    }
}
