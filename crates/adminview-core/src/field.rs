use serde_json::Value;
use std::fmt;

///
/// ValueEvaluator
///
/// Computes a field value from the serialized entity representation.
/// Evaluators are configured at startup and must be infallible; anything
/// that can fail belongs behind the storage or link boundaries instead.
///

pub type ValueEvaluator = Box<dyn Fn(&Value) -> Value + Send + Sync>;

///
/// FieldSource
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldSource {
    /// Raw mapped property; never contributes to dynamic properties.
    Persistent,
    /// Value computed by admin-configured logic.
    Custom,
    /// Computed value not backed by persistent storage.
    Transient,
}

///
/// FieldMetadata
///
/// One declared field: a stable identifier plus the capability to
/// evaluate its value against an entity instance. For custom and
/// transient fields the identifier is a generated id, not a property name.
///

pub struct FieldMetadata {
    id: String,
    source: FieldSource,
    evaluator: ValueEvaluator,
}

impl FieldMetadata {
    pub fn new(
        id: impl Into<String>,
        source: FieldSource,
        evaluator: impl Fn(&Value) -> Value + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            source,
            evaluator: Box::new(evaluator),
        }
    }

    /// Declare a custom field.
    pub fn custom(
        id: impl Into<String>,
        evaluator: impl Fn(&Value) -> Value + Send + Sync + 'static,
    ) -> Self {
        Self::new(id, FieldSource::Custom, evaluator)
    }

    /// Declare a transient field.
    pub fn transient(
        id: impl Into<String>,
        evaluator: impl Fn(&Value) -> Value + Send + Sync + 'static,
    ) -> Self {
        Self::new(id, FieldSource::Transient, evaluator)
    }

    /// Declare a persistent (raw mapped) field.
    pub fn persistent(name: impl Into<String>) -> Self {
        let name = name.into();
        let property = name.clone();

        Self::new(name, FieldSource::Persistent, move |entity| {
            entity.get(&property).cloned().unwrap_or(Value::Null)
        })
    }

    /// Stable field identifier; the key in dynamic-property maps.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub const fn source(&self) -> FieldSource {
        self.source
    }

    /// Evaluate the field against an entity instance.
    #[must_use]
    pub fn evaluate(&self, entity: &Value) -> Value {
        (self.evaluator)(entity)
    }
}

impl fmt::Debug for FieldMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldMetadata")
            .field("id", &self.id)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// Custom fields of a declared field set, in declaration order.
pub fn custom_fields(fields: &[FieldMetadata]) -> impl Iterator<Item = &FieldMetadata> {
    fields.iter().filter(|f| f.source() == FieldSource::Custom)
}

/// Transient fields of a declared field set, in declaration order.
pub fn transient_fields(fields: &[FieldMetadata]) -> impl Iterator<Item = &FieldMetadata> {
    fields
        .iter()
        .filter(|f| f.source() == FieldSource::Transient)
}

///
/// TESTS
///
