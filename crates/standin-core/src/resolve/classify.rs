use crate::model::{AssociationModel, ColumnModel, EntityModel};
use std::fmt;

///
/// AttributeKind
///
/// What a member name denotes on a model. Associations win over a column
/// of the same name.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AttributeKind {
    Column,
    ToOne,
    HasOne,
    ToMany,
    Unknown,
}

impl AttributeKind {
    /// Recognised by the model; a null object answers it without error.
    #[must_use]
    pub const fn is_handled(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    #[must_use]
    pub const fn is_association(self) -> bool {
        matches!(self, Self::ToOne | Self::HasOne | Self::ToMany)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Column => "column",
            Self::ToOne => "to_one",
            Self::HasOne => "has_one",
            Self::ToMany => "to_many",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// AttributeClassifier
///
/// Pure lookups over one model's reflection.
///

#[derive(Clone, Copy, Debug)]
pub struct AttributeClassifier {
    model: &'static EntityModel,
}

impl AttributeClassifier {
    #[must_use]
    pub const fn new(model: &'static EntityModel) -> Self {
        Self { model }
    }

    #[must_use]
    pub const fn model(&self) -> &'static EntityModel {
        self.model
    }

    #[must_use]
    pub fn association(&self, name: &str) -> Option<&'static AssociationModel> {
        self.model.association(name)
    }

    #[must_use]
    pub fn is_association(&self, name: &str) -> bool {
        self.association(name).is_some()
    }

    #[must_use]
    pub fn is_collection_association(&self, name: &str) -> bool {
        self.association(name)
            .is_some_and(|assoc| assoc.kind.is_collection())
    }

    #[must_use]
    pub fn is_to_one_association(&self, name: &str) -> bool {
        self.association(name)
            .is_some_and(|assoc| assoc.kind.is_belongs_to())
    }

    #[must_use]
    pub fn is_has_one_association(&self, name: &str) -> bool {
        self.association(name)
            .is_some_and(|assoc| assoc.kind.is_has_one())
    }

    ///
    /// Storage column backing `name`.
    ///
    /// A direct column maps to itself; a belongs-to association maps to its
    /// foreign key, whether or not the model has that column.
    ///
    #[must_use]
    pub fn column_name_for(&self, name: &str) -> Option<&'static str> {
        if let Some(column) = self.model.column(name) {
            return Some(column.name);
        }

        self.association(name)
            .filter(|assoc| assoc.kind.is_belongs_to())
            .map(|assoc| assoc.foreign_key)
    }

    #[must_use]
    pub fn column_for(&self, name: &str) -> Option<&'static ColumnModel> {
        self.model.column(self.column_name_for(name)?)
    }

    /// Backed by an existing column, directly or through a foreign key.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.column_for(name).is_some()
    }

    #[must_use]
    pub fn classify(&self, name: &str) -> AttributeKind {
        let kind = match self.association(name) {
            Some(assoc) if assoc.kind.is_collection() => AttributeKind::ToMany,
            Some(assoc) if assoc.kind.is_belongs_to() => AttributeKind::ToOne,
            Some(_) => AttributeKind::HasOne,
            None if self.has_column(name) => AttributeKind::Column,
            None => AttributeKind::Unknown,
        };

        tracing::trace!(
            target: "standin::resolve",
            model = self.model.path,
            attribute = name,
            %kind,
            "classified attribute"
        );

        kind
    }
}
