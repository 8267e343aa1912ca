use crate::{config::StandinConfig, model::EntityModel, resolve::DefaultResolver};
use std::sync::Arc;

///
/// NullObjectType
///
/// Registered descriptor for one generated null object type. Nested types
/// keep the path of the type that owns them.
///

#[derive(Debug)]
pub struct NullObjectType {
    path: String,
    name_start: usize,
    mimics: &'static EntityModel,
    owner: Option<String>,
    config: Arc<StandinConfig>,
    resolver: DefaultResolver,
}

impl NullObjectType {
    pub(crate) fn new(
        path: String,
        mimics: &'static EntityModel,
        owner: Option<String>,
        config: Arc<StandinConfig>,
    ) -> Self {
        let name_start = path.rfind("::").map_or(0, |i| i + 2);

        Self {
            path,
            name_start,
            mimics,
            owner,
            config,
            resolver: DefaultResolver::new(mimics),
        }
    }

    /// Fully-qualified path, unique within a registry.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Last path segment.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.path[self.name_start..]
    }

    #[must_use]
    pub const fn mimics(&self) -> &'static EntityModel {
        self.mimics
    }

    #[must_use]
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    #[must_use]
    pub const fn is_nested(&self) -> bool {
        self.owner.is_some()
    }

    #[must_use]
    pub fn config(&self) -> &StandinConfig {
        &self.config
    }

    #[must_use]
    pub const fn resolver(&self) -> &DefaultResolver {
        &self.resolver
    }

    /// Path a nested type for `target` takes under this type.
    #[must_use]
    pub fn nested_path(&self, target: &EntityModel) -> String {
        format!("{}::{}{}", self.path, target.name, self.config.type_suffix)
    }
}
