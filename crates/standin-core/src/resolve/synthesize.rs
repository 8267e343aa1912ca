use crate::{
    dispatch::{NullObject, NullObjectType, TypeRegistry},
    obs::sink::{self, MetricsEvent, ResolveKind},
    relation::EmptyRelation,
    resolve::{DefaultPlan, DefaultResolver, Resolution},
    value::Value,
};
use std::sync::Arc;

impl DefaultResolver {
    ///
    /// Resolve `name` on behalf of `owner`.
    ///
    /// Required belongs-to associations yield an instance of a nested null
    /// object type registered under `owner`. The nested type is created on
    /// first use and reused afterwards.
    ///
    pub fn synthesize(
        &self,
        owner: &NullObjectType,
        registry: &Arc<TypeRegistry>,
        name: &str,
    ) -> Resolution {
        let entity_path = owner.mimics().path;
        let metrics = owner.config().metrics;

        let (resolution, kind) = match self.plan(name) {
            DefaultPlan::EmptyRelation(target) => (
                Resolution::Value(Value::Relation(EmptyRelation::none(target))),
                Some(ResolveKind::Relation),
            ),

            DefaultPlan::NullObject(assoc) => match registry.nested(owner, assoc.target) {
                Ok(ty) => (
                    Resolution::Value(Value::Record(NullObject::new(ty, Arc::clone(registry)))),
                    Some(ResolveKind::NullObject),
                ),
                Err(err) => {
                    tracing::warn!(
                        target: "standin::resolve",
                        owner = owner.path(),
                        attribute = name,
                        error = %err,
                        "cannot define nested null object type"
                    );
                    (Resolution::NoDefault, None)
                }
            },

            DefaultPlan::Value(value) => (Resolution::Value(value), Some(ResolveKind::Scalar)),

            DefaultPlan::NoDefault(reason) => {
                tracing::debug!(
                    target: "standin::resolve",
                    owner = owner.path(),
                    attribute = name,
                    reason = reason.as_str(),
                    "no default"
                );
                (Resolution::NoDefault, None)
            }
        };

        if metrics {
            sink::record(match kind {
                Some(kind) => MetricsEvent::Resolved { kind, entity_path },
                None => MetricsEvent::Declined { entity_path },
            });
        }

        resolution
    }
}
