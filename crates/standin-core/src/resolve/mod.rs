//! Default-value resolution.
//!
//! `classify` answers what a name denotes, `presence` whether a real record
//! is guaranteed to hold a value for it, and `synthesize` turns both into
//! the stand-in a null object answers with.

mod classify;
mod presence;
mod synthesize;


use crate::{
    model::{AssociationModel, EntityModel},
    value::{Value, coerce_default},
};

pub use classify::{AttributeClassifier, AttributeKind};
pub use presence::{PresenceGuarantee, PresenceOracle};

///
/// Resolution
///
/// Outcome of resolving one attribute. `NoDefault` is not an error: the
/// caller decides what an unresolved attribute means.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Resolution {
    Value(Value),
    NoDefault,
}

impl Resolution {
    #[must_use]
    pub const fn is_no_default(&self) -> bool {
        matches!(self, Self::NoDefault)
    }

    #[must_use]
    pub const fn value(&self) -> Option<&Value> {
        match self {
            Self::Value(v) => Some(v),
            Self::NoDefault => None,
        }
    }

    #[must_use]
    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::Value(v) => Some(v),
            Self::NoDefault => None,
        }
    }
}

///
/// DeclineReason
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeclineReason {
    /// No storage column backs the name (has-one, unknown).
    NoColumn,
    /// Belongs-to whose foreign key may be null.
    OptionalAssociation,
    /// The backing column has no schema default.
    NoSchemaDefault,
    /// The schema default does not parse as the column type.
    Unparseable,
}

impl DeclineReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoColumn => "no_column",
            Self::OptionalAssociation => "optional_association",
            Self::NoSchemaDefault => "no_schema_default",
            Self::Unparseable => "unparseable",
        }
    }
}

///
/// DefaultPlan
///
/// Side-effect-free decision for one attribute. Nested types are only
/// named here; `synthesize` registers them.
///

#[derive(Clone, Debug, PartialEq)]
pub enum DefaultPlan {
    EmptyRelation(&'static EntityModel),
    NullObject(&'static AssociationModel),
    Value(Value),
    NoDefault(DeclineReason),
}

///
/// DefaultResolver
///
/// Decision order: collections, then belongs-to (nested when required,
/// declined otherwise), then the backing column's schema default.
///

#[derive(Clone, Copy, Debug)]
pub struct DefaultResolver {
    presence: PresenceOracle,
}

impl DefaultResolver {
    #[must_use]
    pub const fn new(model: &'static EntityModel) -> Self {
        Self {
            presence: PresenceOracle::new(model),
        }
    }

    #[must_use]
    pub const fn classifier(&self) -> &AttributeClassifier {
        self.presence.classifier()
    }

    #[must_use]
    pub const fn presence(&self) -> &PresenceOracle {
        &self.presence
    }

    #[must_use]
    pub fn plan(&self, name: &str) -> DefaultPlan {
        let classifier = self.classifier();

        if let Some(assoc) = classifier.association(name) {
            if assoc.kind.is_collection() {
                return DefaultPlan::EmptyRelation(assoc.target);
            }
            if assoc.kind.is_belongs_to() {
                return if self.is_required_to_one(name) {
                    DefaultPlan::NullObject(assoc)
                } else {
                    DefaultPlan::NoDefault(DeclineReason::OptionalAssociation)
                };
            }
        }

        self.plan_content(name)
    }

    // Both guards are needed: a presence validator alone does not make the
    // foreign key NOT NULL.
    fn is_required_to_one(&self, name: &str) -> bool {
        let required = self.presence.must_be_present(name)
            && self
                .classifier()
                .column_for(name)
                .is_some_and(|column| column.is_required());

        if !required {
            tracing::debug!(
                target: "standin::resolve",
                model = self.classifier().model().path,
                attribute = name,
                "belongs-to is optional"
            );
        }

        required
    }

    fn plan_content(&self, name: &str) -> DefaultPlan {
        let model = self.classifier().model();

        let Some(column) = self.classifier().column_for(name) else {
            return DefaultPlan::NoDefault(DeclineReason::NoColumn);
        };
        let Some(raw) = column.default else {
            return DefaultPlan::NoDefault(DeclineReason::NoSchemaDefault);
        };

        match coerce_default(column.ty, raw) {
            Ok(value) => DefaultPlan::Value(value),
            Err(err) => {
                tracing::warn!(
                    target: "standin::resolve",
                    model = model.path,
                    attribute = name,
                    column = column.name,
                    error = %err,
                    "ignoring unparseable schema default"
                );

                DefaultPlan::NoDefault(DeclineReason::Unparseable)
            }
        }
    }
}
