use crate::{
    config::extract_name_or,
    error::InternalError,
    field::{custom_fields, transient_fields},
    link::{DomainLinkResolver, FilePropertyLinkResolver, Link},
    model::{EntityDescriptor, PropertyModel},
    obs::{self, MetricsEvent},
    registry::{AdminRegistry, RegisteredType},
    resource::{DynamicProperties, EnrichedResource, EntityWrapper, PersistentResource},
    storage::{FilePropertyValue, FileStorage},
    view::ViewKind,
};
use serde_json::Value;
use std::{collections::BTreeMap, sync::Arc};

///
/// ResourceEnricher
///
/// Single-pass, stateless, per-call transform from a serialized entity
/// resource to its enriched wrapper. Reads the startup-populated registry
/// and delegates file existence and link building to its collaborators.
///

pub struct ResourceEnricher {
    registry: Arc<AdminRegistry>,
    file_storage: Arc<dyn FileStorage + Send + Sync>,
    file_links: Arc<dyn FilePropertyLinkResolver + Send + Sync>,
    domain_links: Arc<dyn DomainLinkResolver + Send + Sync>,
}

impl ResourceEnricher {
    #[must_use]
    pub fn new(
        registry: Arc<AdminRegistry>,
        file_storage: Arc<dyn FileStorage + Send + Sync>,
        file_links: Arc<dyn FilePropertyLinkResolver + Send + Sync>,
        domain_links: Arc<dyn DomainLinkResolver + Send + Sync>,
    ) -> Self {
        Self {
            registry,
            file_storage,
            file_links,
            domain_links,
        }
    }

    /// Enrich one resource, replacing its raw entity with the wrapper and
    /// preserving the attached links unchanged.
    ///
    /// The only error path is an unregistered type; everything downstream
    /// degrades instead of failing (fallback display string, omitted file
    /// fields).
    pub fn enrich(&self, resource: PersistentResource) -> Result<EnrichedResource, InternalError> {
        let registered = self.registry.try_get(resource.descriptor().path())?;

        let string_representation = extract_name_or(
            registered.name_extractor(),
            resource.content(),
            registered.descriptor().entity_name(),
        );
        let domain_link = self.domain_link(&resource);
        let managed_type = registered.is_managed();
        let primary_key = resource.descriptor().primary_key().to_string();
        let dynamic_properties = self.dynamic_properties_per_view(registered, resource.content());

        obs::record(MetricsEvent::Enriched {
            managed: managed_type,
        });

        let (descriptor, content, links) = resource.into_parts();

        Ok(EnrichedResource::new(
            descriptor,
            EntityWrapper {
                string_representation,
                primary_key,
                managed_type,
                domain_link,
                original_properties: content,
                dynamic_properties,
            },
            links,
        ))
    }

    fn domain_link(&self, resource: &PersistentResource) -> Option<Link> {
        if self.domain_links.supports(resource.descriptor()) {
            Some(self.domain_links.link_for(resource))
        } else {
            None
        }
    }

    /// Ordered per-view field values: file properties first, then custom
    /// fields, then transient fields. Empty for unmanaged types; all four
    /// view keys are present for managed ones.
    fn dynamic_properties_per_view(
        &self,
        registered: &RegisteredType,
        entity: &Value,
    ) -> BTreeMap<ViewKind, DynamicProperties> {
        let Some(config) = registered.admin_config() else {
            return BTreeMap::new();
        };

        let descriptor = registered.descriptor();
        let file_properties: Vec<&PropertyModel> = descriptor.file_properties().collect();

        let mut per_view = BTreeMap::new();
        for view in ViewKind::ALL {
            let mut properties = DynamicProperties::new();

            for property in &file_properties {
                if let Some(value) = self.file_property_value(descriptor, entity, property) {
                    properties.insert(property.name.as_str(), value.into());
                }
            }

            let declared = config.fields_for_view(view);
            for field in custom_fields(declared) {
                properties.insert(field.id(), field.evaluate(entity));
            }
            for field in transient_fields(declared) {
                properties.insert(field.id(), field.evaluate(entity));
            }

            per_view.insert(view, properties);
        }

        per_view
    }

    /// Two-tier degrade: a missing file is a present entry with the
    /// absent sentinel; any failure during the existence check or link
    /// resolution drops the entry entirely.
    fn file_property_value(
        &self,
        descriptor: &EntityDescriptor,
        entity: &Value,
        property: &PropertyModel,
    ) -> Option<FilePropertyValue> {
        let resolved = self
            .file_storage
            .file_exists(descriptor, entity, property)
            .and_then(|exists| {
                if exists {
                    self.file_links
                        .link_for_file_property(descriptor, entity, property)
                        .map(FilePropertyValue::present)
                } else {
                    Ok(FilePropertyValue::absent())
                }
            });

        match resolved {
            Ok(value) => {
                obs::record(if value.file_exists {
                    MetricsEvent::FileValueResolved
                } else {
                    MetricsEvent::FileValueAbsent
                });
                Some(value)
            }
            Err(_) => {
                obs::record(MetricsEvent::FileValueDropped);
                None
            }
        }
    }
}

///
/// TESTS
///
