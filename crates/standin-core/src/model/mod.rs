//! Reflected schema metadata for host records.
//!
//! These are the runtime representations of what the host's mapping layer
//! knows about a record type: its columns, associations, validators and
//! public methods. Models are declared as `'static` items so associations
//! can point at each other, including cycles.
//!
//! In general:
//! - The host schema defines *what exists*
//! - `model` is the read-only view the resolver reasons over

pub mod association;
pub mod column;
pub mod entity;
pub mod validator;

pub use association::{AssociationKind, AssociationModel};
pub use column::ColumnModel;
pub use entity::EntityModel;
pub use validator::{ValidatorKind, ValidatorModel, ValidatorOption};
