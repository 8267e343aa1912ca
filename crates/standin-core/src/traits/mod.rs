use crate::{
    dispatch::{NullObject, NullObjectType, TypeRegistry},
    error::{MemberError, RegistryError},
    model::EntityModel,
    value::Value,
};
use std::sync::Arc;

// ============================================================================
// IDENTITY
// ============================================================================

///
/// Path
///
/// Fully-qualified type path, used as a registry key.
///

pub trait Path {
    const PATH: &'static str;
}

///
/// ModelKind
///
/// Host record types expose their reflected model through this trait.
///

pub trait ModelKind {
    const MODEL: &'static EntityModel;
}

// ============================================================================
// INSTANCES
// ============================================================================

///
/// Record
///
/// The member-access surface shared by real records and null objects.
/// Code written against `Record` cannot tell the two apart except through
/// `is_null`.
///

pub trait Record {
    fn model(&self) -> &'static EntityModel;

    /// Read one member by name.
    fn read(&self, member: &str) -> Result<Value, MemberError>;

    fn responds_to(&self, member: &str) -> bool {
        self.model().responds_to(member)
    }

    fn is_null(&self) -> bool {
        false
    }
}

///
/// Mimics
///
/// Declares a null object type for `Self::Model`. Implemented by the
/// marker structs that `null_object!` generates.
///

pub trait Mimics: Path {
    type Model: ModelKind;

    /// Register this type (idempotent) in `registry`.
    fn declare_in(registry: &TypeRegistry) -> Result<Arc<NullObjectType>, RegistryError> {
        registry.declare(Self::PATH, <Self::Model as ModelKind>::MODEL)
    }

    /// Build an instance backed by `registry`.
    fn null_in(registry: &Arc<TypeRegistry>) -> Result<NullObject, RegistryError> {
        let ty = Self::declare_in(registry)?;
        Ok(NullObject::new(ty, Arc::clone(registry)))
    }

    /// Build an instance backed by the process-wide registry.
    fn null() -> Result<NullObject, RegistryError> {
        Self::null_in(&TypeRegistry::global())
    }
}
