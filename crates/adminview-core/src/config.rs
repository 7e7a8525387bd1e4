use crate::{
    field::FieldMetadata,
    obs::{self, MetricsEvent},
    view::ViewKind,
};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// NameExtractError
///
/// The failure domain of a name extractor. Extraction failure never
/// propagates out of this crate; it degrades to a fallback string.
///

#[derive(Debug, ThisError)]
#[error("name extraction failed: {message}")]
pub struct NameExtractError {
    pub message: String,
}

impl NameExtractError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

///
/// NameExtractor
/// Entity instance to human-readable display string.
///

pub type NameExtractor = Box<dyn Fn(&Value) -> Result<String, NameExtractError> + Send + Sync>;

///
/// EntityAdminConfig
///
/// Per-type admin configuration: a name extractor plus the declared
/// field sets keyed by view. Built once at startup, read-only at
/// request time.
///

pub struct EntityAdminConfig {
    name_extractor: NameExtractor,
    fields: BTreeMap<ViewKind, Vec<FieldMetadata>>,
}

impl EntityAdminConfig {
    pub fn new(
        name_extractor: impl Fn(&Value) -> Result<String, NameExtractError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name_extractor: Box::new(name_extractor),
            fields: BTreeMap::new(),
        }
    }

    /// Declare the field set for one view, replacing any previous set.
    #[must_use]
    pub fn with_fields(mut self, view: ViewKind, fields: Vec<FieldMetadata>) -> Self {
        self.fields.insert(view, fields);
        self
    }

    /// Declared fields for a view; empty when the view declares nothing.
    #[must_use]
    pub fn fields_for_view(&self, view: ViewKind) -> &[FieldMetadata] {
        self.fields.get(&view).map_or(&[], Vec::as_slice)
    }

    /// The configured name extractor.
    #[must_use]
    pub const fn name_extractor(&self) -> &NameExtractor {
        &self.name_extractor
    }
}

/// Apply a name extractor, substituting `fallback` when extraction fails.
///
/// Only the extractor's own failure domain is caught; the degrade is
/// counted so a misconfigured extractor is visible in metrics.
pub fn extract_name_or(extractor: &NameExtractor, entity: &Value, fallback: &str) -> String {
    match extractor(entity) {
        Ok(name) => name,
        Err(_) => {
            obs::record(MetricsEvent::NameDegraded);
            fallback.to_string()
        }
    }
}

///
/// TESTS
///
