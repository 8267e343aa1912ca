use crate::model::entity::EntityModel;
use std::fmt;

///
/// AssociationKind
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AssociationKind {
    BelongsTo,
    HasOne,
    HasMany,
    HasAndBelongsToMany,
}

impl AssociationKind {
    /// Yields zero-or-more related records.
    #[must_use]
    pub const fn is_collection(self) -> bool {
        matches!(self, Self::HasMany | Self::HasAndBelongsToMany)
    }

    /// Foreign key lives on the owning record.
    #[must_use]
    pub const fn is_belongs_to(self) -> bool {
        matches!(self, Self::BelongsTo)
    }

    /// Foreign key lives on the target record.
    #[must_use]
    pub const fn is_has_one(self) -> bool {
        matches!(self, Self::HasOne)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BelongsTo => "belongs_to",
            Self::HasOne => "has_one",
            Self::HasMany => "has_many",
            Self::HasAndBelongsToMany => "has_and_belongs_to_many",
        }
    }
}

impl fmt::Display for AssociationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// AssociationModel
///
/// One declared association. `foreign_key` names the column that stores
/// the reference: on the owner for belongs-to, on the target for has-one
/// and has-many, and empty for join-table collections.
///

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct AssociationModel {
    pub name: &'static str,
    pub kind: AssociationKind,
    pub target: &'static EntityModel,
    pub foreign_key: &'static str,
}

impl AssociationModel {
    #[must_use]
    pub const fn belongs_to(
        name: &'static str,
        target: &'static EntityModel,
        foreign_key: &'static str,
    ) -> Self {
        Self {
            name,
            kind: AssociationKind::BelongsTo,
            target,
            foreign_key,
        }
    }

    #[must_use]
    pub const fn has_one(
        name: &'static str,
        target: &'static EntityModel,
        foreign_key: &'static str,
    ) -> Self {
        Self {
            name,
            kind: AssociationKind::HasOne,
            target,
            foreign_key,
        }
    }

    #[must_use]
    pub const fn has_many(
        name: &'static str,
        target: &'static EntityModel,
        foreign_key: &'static str,
    ) -> Self {
        Self {
            name,
            kind: AssociationKind::HasMany,
            target,
            foreign_key,
        }
    }

    #[must_use]
    pub const fn has_and_belongs_to_many(name: &'static str, target: &'static EntityModel) -> Self {
        Self {
            name,
            kind: AssociationKind::HasAndBelongsToMany,
            target,
            foreign_key: "",
        }
    }

    /// Short type name of the associated model.
    #[must_use]
    pub const fn class_name(&self) -> &'static str {
        self.target.name
    }
}

// Targets may point back at the owner, so only the target path is printed.
impl fmt::Debug for AssociationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssociationModel")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("target", &self.target.path)
            .field("foreign_key", &self.foreign_key)
            .finish()
    }
}
