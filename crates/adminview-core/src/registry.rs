use crate::{
    config::{EntityAdminConfig, NameExtractError, NameExtractor},
    error::{ErrorClass, ErrorOrigin, InternalError},
    model::EntityDescriptor,
};
use serde_json::Value;
use std::{collections::HashMap, sync::Arc};
use thiserror::Error as ThisError;

///
/// RegistryError
///

#[derive(Debug, ThisError)]
pub enum RegistryError {
    #[error("type '{0}' is not registered")]
    TypeNotRegistered(String),

    #[error("type '{0}' already registered")]
    TypeAlreadyRegistered(String),
}

impl RegistryError {
    pub(crate) const fn class(&self) -> ErrorClass {
        match self {
            Self::TypeNotRegistered(_) => ErrorClass::NotFound,
            Self::TypeAlreadyRegistered(_) => ErrorClass::InvariantViolation,
        }
    }
}

impl From<RegistryError> for InternalError {
    fn from(err: RegistryError) -> Self {
        Self::new(err.class(), ErrorOrigin::Registry, err.to_string())
    }
}

///
/// TypeEntry
/// Basic registrations carry a name extractor only; managed ones carry
/// the full admin configuration.
///

enum TypeEntry {
    Basic(NameExtractor),
    Managed(EntityAdminConfig),
}

///
/// RegisteredType
///
/// One registered domain type: its metamodel descriptor plus admin
/// configuration when the type is managed.
///

pub struct RegisteredType {
    descriptor: Arc<EntityDescriptor>,
    entry: TypeEntry,
}

impl std::fmt::Debug for RegisteredType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredType")
            .field("descriptor", &self.descriptor)
            .field("is_managed", &self.is_managed())
            .finish()
    }
}

impl RegisteredType {
    #[must_use]
    pub const fn descriptor(&self) -> &Arc<EntityDescriptor> {
        &self.descriptor
    }

    /// Whether the type has admin configuration (field sets, views).
    #[must_use]
    pub const fn is_managed(&self) -> bool {
        matches!(self.entry, TypeEntry::Managed(_))
    }

    /// The admin configuration; `None` for basic registrations.
    #[must_use]
    pub const fn admin_config(&self) -> Option<&EntityAdminConfig> {
        match &self.entry {
            TypeEntry::Managed(config) => Some(config),
            TypeEntry::Basic(_) => None,
        }
    }

    /// The registered name extractor for this type.
    #[must_use]
    pub const fn name_extractor(&self) -> &NameExtractor {
        match &self.entry {
            TypeEntry::Basic(extractor) => extractor,
            TypeEntry::Managed(config) => config.name_extractor(),
        }
    }
}

///
/// AdminRegistry
///
/// Maps domain type paths to their registrations. Populated once at
/// process startup and treated as read-only thereafter; all request-time
/// access goes through `&self`.
///

#[derive(Default)]
pub struct AdminRegistry {
    types: HashMap<String, RegisteredType>,
}

impl AdminRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a managed type with its full admin configuration.
    pub fn register_managed(
        &mut self,
        descriptor: EntityDescriptor,
        config: EntityAdminConfig,
    ) -> Result<(), InternalError> {
        self.insert(descriptor, TypeEntry::Managed(config))
    }

    /// Register an unmanaged type: metamodel plus a name extractor only.
    pub fn register_basic(
        &mut self,
        descriptor: EntityDescriptor,
        name_extractor: impl Fn(&Value) -> Result<String, NameExtractError> + Send + Sync + 'static,
    ) -> Result<(), InternalError> {
        self.insert(descriptor, TypeEntry::Basic(Box::new(name_extractor)))
    }

    fn insert(
        &mut self,
        descriptor: EntityDescriptor,
        entry: TypeEntry,
    ) -> Result<(), InternalError> {
        let path = descriptor.path().to_string();
        if self.types.contains_key(&path) {
            return Err(RegistryError::TypeAlreadyRegistered(path).into());
        }

        self.types.insert(
            path,
            RegisteredType {
                descriptor: Arc::new(descriptor),
                entry,
            },
        );
        Ok(())
    }

    /// Whether the path names a managed type.
    #[must_use]
    pub fn is_managed_type(&self, path: &str) -> bool {
        self.types.get(path).is_some_and(RegisteredType::is_managed)
    }

    /// Look up a registration by path.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&RegisteredType> {
        self.types.get(path)
    }

    /// Look up a registration by path, classifying a miss.
    pub fn try_get(&self, path: &str) -> Result<&RegisteredType, InternalError> {
        self.types
            .get(path)
            .ok_or_else(|| RegistryError::TypeNotRegistered(path.to_string()).into())
    }

    /// Iterate registered paths.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }
}

///
/// TESTS
///
