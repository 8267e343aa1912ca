use crate::model::{
    association::AssociationModel, column::ColumnModel, validator::ValidatorModel,
};
use std::fmt;

///
/// EntityModel
/// Runtime reflection for one host record type.
///

pub struct EntityModel {
    /// Fully-qualified type path (for dispatch and diagnostics).
    pub path: &'static str,
    /// Short type name; nested null object types are named after it.
    pub name: &'static str,
    /// Ordered column list.
    pub columns: &'static [ColumnModel],
    /// Declared associations.
    pub associations: &'static [AssociationModel],
    /// Declared validators, in declaration order.
    pub validators: &'static [ValidatorModel],
    /// Public methods that are neither columns nor associations.
    pub methods: &'static [&'static str],
}

impl EntityModel {
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&'static ColumnModel> {
        self.columns.iter().find(|column| column.name == name)
    }

    #[must_use]
    pub fn association(&self, name: &str) -> Option<&'static AssociationModel> {
        self.associations.iter().find(|assoc| assoc.name == name)
    }

    /// Validators declared against one attribute.
    pub fn validators_on<'a>(
        &self,
        attribute: &'a str,
    ) -> impl Iterator<Item = &'static ValidatorModel> + use<'a> {
        let validators: &'static [ValidatorModel] = self.validators;
        validators
            .iter()
            .filter(move |validator| validator.attribute == attribute)
    }

    /// Column names followed by association names.
    pub fn attribute_names(&self) -> impl Iterator<Item = &'static str> + use<> {
        let columns: &'static [ColumnModel] = self.columns;
        let associations: &'static [AssociationModel] = self.associations;

        columns
            .iter()
            .map(|column| column.name)
            .chain(associations.iter().map(|assoc| assoc.name))
    }

    ///
    /// Whether an instance of this type answers `member`.
    ///
    /// Columns answer their reader, `name?` predicate and `name=` writer.
    /// Associations answer their reader and writer. Declared methods answer
    /// by exact name.
    ///
    #[must_use]
    pub fn responds_to(&self, member: &str) -> bool {
        if let Some(base) = member.strip_suffix('=') {
            return self.column(base).is_some() || self.association(base).is_some();
        }
        if let Some(base) = member.strip_suffix('?') {
            if self.column(base).is_some() {
                return true;
            }
        }

        self.column(member).is_some()
            || self.association(member).is_some()
            || self.methods.contains(&member)
    }
}

// Identity is the type path; structural comparison could recurse through
// cyclic associations.
impl PartialEq for EntityModel {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.path == other.path
    }
}

impl Eq for EntityModel {}

impl fmt::Debug for EntityModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityModel")
            .field("path", &self.path)
            .field("name", &self.name)
            .field("columns", &self.columns.len())
            .field("associations", &self.associations.len())
            .field("validators", &self.validators.len())
            .finish_non_exhaustive()
    }
}
