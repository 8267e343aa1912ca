pub mod fixtures;

use crate::{
    config::StandinConfig,
    dispatch::{NullObject, TypeRegistry},
    model::EntityModel,
};
use std::sync::{Arc, Once};

static TRACING: Once = Once::new();

/// Route `standin` logs to the test writer; `RUST_LOG` overrides the filter.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("standin=debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Fresh registry so tests never share declared types.
#[must_use]
pub fn registry(config: StandinConfig) -> Arc<TypeRegistry> {
    init_tracing();
    TypeRegistry::shared(config)
}

/// Declare `path` for `model` in a fresh default registry and instantiate it.
#[must_use]
pub fn null_object(path: &str, model: &'static EntityModel) -> NullObject {
    registry(StandinConfig::default())
        .null_object(path, model)
        .expect("test null object declaration should succeed")
}
