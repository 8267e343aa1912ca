//! Core runtime for standin: reflected models, default resolution, null
//! object dispatch and the type registry, plus the vocabulary exported via
//! the `prelude`.

// public exports are one module level down
pub mod config;
pub mod dispatch;
pub mod error;
pub mod model;
pub mod obs;
pub mod relation;
pub mod resolve;
pub mod traits;
pub mod types;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_support;

pub use standin_primitives::{ColumnType, DefaultCoercion};

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors or metrics helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        dispatch::NullObject,
        model::{
            AssociationKind, AssociationModel, ColumnModel, EntityModel, ValidatorKind,
            ValidatorModel, ValidatorOption,
        },
        relation::EmptyRelation,
        traits::{Mimics, ModelKind, Path, Record},
        value::Value,
    };
    pub use standin_primitives::ColumnType;
}
