use crate::{model::EntityModel, resolve::classify::AttributeClassifier};

///
/// PresenceGuarantee
/// Why an attribute can be assumed to hold a value on a real record.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PresenceGuarantee {
    /// Unconditional presence validator.
    Validator,
    /// Backing column is NOT NULL.
    NotNull,
    /// Collections always exist, possibly empty.
    Collection,
}

///
/// PresenceOracle
///

#[derive(Clone, Copy, Debug)]
pub struct PresenceOracle {
    classifier: AttributeClassifier,
}

impl PresenceOracle {
    #[must_use]
    pub const fn new(model: &'static EntityModel) -> Self {
        Self {
            classifier: AttributeClassifier::new(model),
        }
    }

    #[must_use]
    pub const fn classifier(&self) -> &AttributeClassifier {
        &self.classifier
    }

    #[must_use]
    pub fn must_be_present(&self, name: &str) -> bool {
        self.guarantee(name).is_some()
    }

    /// First guarantee that holds, checked validator, then column, then
    /// collection.
    #[must_use]
    pub fn guarantee(&self, name: &str) -> Option<PresenceGuarantee> {
        if self.is_validated_for_presence(name) {
            Some(PresenceGuarantee::Validator)
        } else if self.is_constrained_for_presence(name) {
            Some(PresenceGuarantee::NotNull)
        } else if self.classifier.is_collection_association(name) {
            Some(PresenceGuarantee::Collection)
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_validated_for_presence(&self, name: &str) -> bool {
        self.classifier
            .model()
            .validators_on(name)
            .any(|validator| validator.guarantees_presence())
    }

    #[must_use]
    pub fn is_constrained_for_presence(&self, name: &str) -> bool {
        self.classifier
            .column_for(name)
            .is_some_and(|column| column.is_required())
    }
}
