//! Runtime metamodel descriptors.
//!
//! Types in `model` describe *what a persisted entity looks like* at
//! request time: its stable path, primary key, and property shapes. They
//! are produced once at startup by whatever introspection layer binds
//! this crate to a persistence framework, and read-only afterwards.

pub mod entity;
pub mod property;

pub use entity::EntityDescriptor;
pub use property::{PropertyKind, PropertyModel};
