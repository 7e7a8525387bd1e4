use crate::{
    error::{ErrorClass, ErrorOrigin, InternalError},
    model::property::PropertyModel,
};
use thiserror::Error as ThisError;

///
/// DescriptorError
///

#[derive(Debug, ThisError)]
pub enum DescriptorError {
    #[error("primary key '{primary_key}' is not a declared property of '{path}'")]
    PrimaryKeyNotDeclared { path: String, primary_key: String },
}

impl DescriptorError {
    pub(crate) const fn class(&self) -> ErrorClass {
        match self {
            Self::PrimaryKeyNotDeclared { .. } => ErrorClass::InvariantViolation,
        }
    }
}

impl From<DescriptorError> for InternalError {
    fn from(err: DescriptorError) -> Self {
        Self::new(err.class(), ErrorOrigin::Config, err.to_string())
    }
}

///
/// EntityDescriptor
///
/// Runtime metamodel record for one persisted entity type: stable path,
/// display name, primary key, and the declared property list in
/// declaration order. Built once at startup; the primary-key precondition
/// is enforced here so enrichment never re-checks it.
///

#[derive(Clone, Debug)]
pub struct EntityDescriptor {
    path: String,
    entity_name: String,
    primary_key: String,
    properties: Vec<PropertyModel>,
}

impl EntityDescriptor {
    /// Build a descriptor, validating that the primary key names a
    /// declared property.
    pub fn new(
        path: impl Into<String>,
        entity_name: impl Into<String>,
        primary_key: impl Into<String>,
        properties: Vec<PropertyModel>,
    ) -> Result<Self, InternalError> {
        let path = path.into();
        let primary_key = primary_key.into();

        if !properties.iter().any(|p| p.name == primary_key) {
            return Err(DescriptorError::PrimaryKeyNotDeclared { path, primary_key }.into());
        }

        Ok(Self {
            path,
            entity_name: entity_name.into(),
            primary_key,
            properties,
        })
    }

    /// Fully-qualified type path; the registry key.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Human-oriented short name; the display-string fallback.
    #[must_use]
    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    /// Name of the primary-key property.
    #[must_use]
    pub fn primary_key(&self) -> &str {
        &self.primary_key
    }

    /// Declared properties, in declaration order.
    #[must_use]
    pub fn properties(&self) -> &[PropertyModel] {
        &self.properties
    }

    /// Declared file-reference properties, in declaration order.
    pub fn file_properties(&self) -> impl Iterator<Item = &PropertyModel> {
        self.properties.iter().filter(|p| p.kind.is_file())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorClass, model::property::PropertyKind};

    fn properties() -> Vec<PropertyModel> {
        vec![
            PropertyModel::new("id", PropertyKind::Uint),
            PropertyModel::new("name", PropertyKind::Text),
            PropertyModel::new("avatar", PropertyKind::File),
            PropertyModel::new("attachment", PropertyKind::File),
        ]
    }

    #[test]
    fn descriptor_exposes_declared_metadata() {
        let descriptor = EntityDescriptor::new("crm::Customer", "Customer", "id", properties())
            .expect("valid descriptor should construct");

        assert_eq!(descriptor.path(), "crm::Customer");
        assert_eq!(descriptor.entity_name(), "Customer");
        assert_eq!(descriptor.primary_key(), "id");
        assert_eq!(descriptor.properties().len(), 4);
    }

    #[test]
    fn file_properties_keep_declaration_order() {
        let descriptor = EntityDescriptor::new("crm::Customer", "Customer", "id", properties())
            .expect("valid descriptor should construct");

        let names: Vec<&str> = descriptor.file_properties().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["avatar", "attachment"]);
    }

    #[test]
    fn undeclared_primary_key_is_rejected() {
        let err = EntityDescriptor::new("crm::Customer", "Customer", "uuid", properties())
            .expect_err("undeclared primary key should fail");

        assert_eq!(err.class, ErrorClass::InvariantViolation);
        assert!(
            err.message.contains("'uuid' is not a declared property"),
            "error should name the missing primary key"
        );
    }
}
