//! # standin
//!
//! Null objects for relational model records. A null object mimics a host
//! model: collection associations read as empty relations, required
//! belongs-to associations read as nested null objects, and columns read as
//! their schema defaults. Anything the model does not define is an error,
//! exactly as it would be on a real record.
//!
//! ## Crate layout
//! - `core`: reflected models, default resolution, dispatch and the type registry.
//! - `primitives`: column types and how their raw defaults coerce.
//! - `error`: the public error type.
//!
//! Declare a type with [`null_object!`] and read it through [`Record`]:
//!
//! ```ignore
//! use standin::prelude::*;
//!
//! standin::null_object!(pub OrderNullObject mimics Order);
//!
//! let order = OrderNullObject::null()?;
//! assert_eq!(order.read("status")?, Value::from("pending"));
//! ```
//!
//! [`Record`]: core::traits::Record

pub use standin_core as core;
pub use standin_primitives as primitives;

mod error;
mod macros;

pub use error::{Error, ErrorKind, ErrorOrigin};

pub use standin_core::{
    config::{DeclinePolicy, StandinConfig},
    dispatch::{NullObject, NullObjectType, TypeRegistry},
    obs::{EventReport, MetricsSink, metrics_report, metrics_reset_all, with_metrics_sink},
    resolve::Resolution,
};

use standin_core::{model::EntityModel, traits::Mimics};
use std::sync::Arc;

/// Crate version, for diagnostics.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///
/// Domain vocabulary for host code declaring and reading null objects.
///

pub mod prelude {
    pub use crate::null_object;
    pub use standin_core::prelude::*;
}

/// Build a registry from a TOML config document.
pub fn registry_from_toml(source: &str) -> Result<Arc<TypeRegistry>, Error> {
    let config = StandinConfig::from_toml_str(source)?;

    Ok(TypeRegistry::shared(config))
}

/// Declare `path` in the process-wide registry and return an instance.
pub fn null_object_for(path: &str, model: &'static EntityModel) -> Result<NullObject, Error> {
    Ok(TypeRegistry::global().null_object(path, model)?)
}

/// Instance of a declared null object type from the process-wide registry.
pub fn null<N: Mimics>() -> Result<NullObject, Error> {
    Ok(N::null()?)
}

/// Instance of a declared null object type from `registry`.
pub fn null_in<N: Mimics>(registry: &Arc<TypeRegistry>) -> Result<NullObject, Error> {
    Ok(N::null_in(registry)?)
}
