//! Null object instances, their types and the registry that owns them.

mod registry;
mod ty;


use crate::{
    config::DeclinePolicy,
    error::MemberError,
    model::EntityModel,
    obs::sink::{self, MetricsEvent},
    resolve::{AttributeKind, Resolution},
    traits::Record,
    value::Value,
};
use std::{fmt, sync::Arc};

pub use registry::TypeRegistry;
pub use ty::NullObjectType;

///
/// NullObject
///
/// Stand-in for an absent record. Answers the mimicked model's columns and
/// associations with synthesized defaults and fails on anything else
/// exactly as a real record would. Holds no attribute state.
///

#[derive(Clone)]
pub struct NullObject {
    ty: Arc<NullObjectType>,
    registry: Arc<TypeRegistry>,
}

impl NullObject {
    #[must_use]
    pub const fn new(ty: Arc<NullObjectType>, registry: Arc<TypeRegistry>) -> Self {
        Self { ty, registry }
    }

    #[must_use]
    pub const fn ty(&self) -> &Arc<NullObjectType> {
        &self.ty
    }

    #[must_use]
    pub fn type_path(&self) -> &str {
        self.ty.path()
    }

    #[must_use]
    pub fn type_name(&self) -> &str {
        self.ty.name()
    }

    #[must_use]
    pub fn mimics(&self) -> &'static EntityModel {
        self.ty.mimics()
    }

    #[must_use]
    pub const fn registry(&self) -> &Arc<TypeRegistry> {
        &self.registry
    }

    #[must_use]
    pub fn classify(&self, member: &str) -> AttributeKind {
        self.ty.resolver().classifier().classify(member)
    }

    /// Same answer a fresh instance of the mimicked model would give.
    #[must_use]
    pub fn responds_to(&self, member: &str) -> bool {
        self.mimics().responds_to(member)
    }

    /// Resolve one attribute without applying the decline policy.
    #[must_use]
    pub fn resolve(&self, attribute: &str) -> Resolution {
        self.ty
            .resolver()
            .synthesize(&self.ty, &self.registry, attribute)
    }

    ///
    /// Read one member.
    ///
    /// Unknown names fail with `MemberError::Undefined`. Recognised names
    /// that have no default follow the type's `DeclinePolicy`.
    ///
    pub fn read(&self, member: &str) -> Result<Value, MemberError> {
        let kind = self.classify(member);

        if !kind.is_handled() {
            return Err(self.undefined(member));
        }

        match self.resolve(member) {
            Resolution::Value(value) => {
                tracing::trace!(
                    target: "standin::dispatch",
                    receiver = self.type_path(),
                    member,
                    %kind,
                    value = value.kind_label(),
                    "answered member"
                );
                Ok(value)
            }
            Resolution::NoDefault => match self.ty.config().decline {
                DeclinePolicy::Absent => Ok(Value::Null),
                DeclinePolicy::Undefined => Err(self.undefined(member)),
            },
        }
    }

    fn undefined(&self, member: &str) -> MemberError {
        tracing::debug!(
            target: "standin::dispatch",
            receiver = self.type_path(),
            member,
            "undefined member"
        );
        if self.ty.config().metrics {
            sink::record(MetricsEvent::Undefined {
                entity_path: self.mimics().path,
            });
        }

        MemberError::undefined(self.type_name(), member)
    }
}

impl Record for NullObject {
    fn model(&self) -> &'static EntityModel {
        self.mimics()
    }

    fn read(&self, member: &str) -> Result<Value, MemberError> {
        Self::read(self, member)
    }

    fn responds_to(&self, member: &str) -> bool {
        Self::responds_to(self, member)
    }

    fn is_null(&self) -> bool {
        true
    }
}

impl PartialEq for NullObject {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.ty, &other.ty)
            || (self.ty.path() == other.ty.path() && self.ty.mimics() == other.ty.mimics())
    }
}

impl fmt::Debug for NullObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NullObject").field(&self.ty.path()).finish()
    }
}
