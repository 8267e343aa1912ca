use crate::{
    config::StandinConfig,
    dispatch::{NullObject, NullObjectType},
    error::RegistryError,
    model::EntityModel,
    obs::sink::{self, MetricsEvent},
};
use std::{
    collections::HashMap,
    sync::{Arc, LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

static GLOBAL_REGISTRY: LazyLock<Arc<TypeRegistry>> =
    LazyLock::new(|| Arc::new(TypeRegistry::default()));

///
/// TypeRegistry
///
/// Path-keyed set of declared null object types. Declaring the same path
/// for the same model is idempotent; a second model under a taken path is
/// a conflict. Safe to share across threads.
///

#[derive(Debug)]
pub struct TypeRegistry {
    types: RwLock<HashMap<String, Arc<NullObjectType>>>,
    config: Arc<StandinConfig>,
}

impl TypeRegistry {
    #[must_use]
    pub fn new(config: StandinConfig) -> Self {
        Self {
            types: RwLock::new(HashMap::new()),
            config: Arc::new(config),
        }
    }

    #[must_use]
    pub fn shared(config: StandinConfig) -> Arc<Self> {
        Arc::new(Self::new(config))
    }

    /// Process-wide registry with the default config.
    #[must_use]
    pub fn global() -> Arc<Self> {
        Arc::clone(&GLOBAL_REGISTRY)
    }

    #[must_use]
    pub fn config(&self) -> &StandinConfig {
        &self.config
    }

    /// Declare a top-level type at `path` mimicking `model`.
    pub fn declare(
        &self,
        path: &str,
        model: &'static EntityModel,
    ) -> Result<Arc<NullObjectType>, RegistryError> {
        validate_path(path)?;

        self.define(path, model, None)
    }

    /// Declare (or reuse) the type `owner` answers a required belongs-to
    /// association targeting `target` with.
    ///
    /// A type on the owner chain (`owner` included) that already mimics
    /// `target` is reused, so cyclic associations define at most one type
    /// per model along any chain.
    pub fn nested(
        &self,
        owner: &NullObjectType,
        target: &'static EntityModel,
    ) -> Result<Arc<NullObjectType>, RegistryError> {
        if let Some(ancestor) = self.ancestor_mimicking(owner, target) {
            return self.reuse(&ancestor, target);
        }

        let path = owner.nested_path(target);

        self.define(&path, target, Some(owner.path()))
    }

    /// Declare a type and return an instance of it.
    pub fn null_object(
        self: &Arc<Self>,
        path: &str,
        model: &'static EntityModel,
    ) -> Result<NullObject, RegistryError> {
        let ty = self.declare(path, model)?;

        Ok(NullObject::new(ty, Arc::clone(self)))
    }

    /// Instance of an already declared type.
    pub fn instantiate(self: &Arc<Self>, path: &str) -> Result<NullObject, RegistryError> {
        let ty = self
            .get(path)
            .ok_or_else(|| RegistryError::NotDeclared(path.to_string()))?;

        Ok(NullObject::new(ty, Arc::clone(self)))
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<Arc<NullObjectType>> {
        self.read_types().get(path).cloned()
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.read_types().contains_key(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.read_types().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read_types().is_empty()
    }

    /// Declared paths, sorted.
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        let mut paths: Vec<_> = self.read_types().keys().cloned().collect();
        paths.sort_unstable();
        paths
    }

    fn define(
        &self,
        path: &str,
        model: &'static EntityModel,
        owner: Option<&str>,
    ) -> Result<Arc<NullObjectType>, RegistryError> {
        let existing = self.get(path);
        if let Some(existing) = existing {
            return self.reuse(&existing, model);
        }

        let mut types = self.write_types();

        // another thread may have won the race since the read above
        if let Some(existing) = types.get(path).cloned() {
            drop(types);
            return self.reuse(&existing, model);
        }

        let ty = Arc::new(NullObjectType::new(
            path.to_string(),
            model,
            owner.map(str::to_string),
            Arc::clone(&self.config),
        ));
        types.insert(path.to_string(), Arc::clone(&ty));
        drop(types);

        tracing::debug!(
            target: "standin::registry",
            path,
            mimics = model.path,
            nested = owner.is_some(),
            "defined null object type"
        );
        if self.config.metrics {
            sink::record(MetricsEvent::TypeDefined {
                entity_path: model.path,
                nested: owner.is_some(),
            });
        }

        Ok(ty)
    }

    fn ancestor_mimicking(
        &self,
        owner: &NullObjectType,
        target: &'static EntityModel,
    ) -> Option<Arc<NullObjectType>> {
        let mut current = self.get(owner.path());

        while let Some(ty) = current {
            if ty.mimics() == target {
                return Some(ty);
            }
            current = ty.owner().and_then(|path| self.get(path));
        }

        None
    }

    fn reuse(
        &self,
        existing: &Arc<NullObjectType>,
        model: &'static EntityModel,
    ) -> Result<Arc<NullObjectType>, RegistryError> {
        if existing.mimics() != model {
            return Err(RegistryError::MimicsConflict {
                path: existing.path().to_string(),
                existing: existing.mimics().path,
                requested: model.path,
            });
        }

        tracing::trace!(
            target: "standin::registry",
            path = existing.path(),
            "reused null object type"
        );
        if self.config.metrics {
            sink::record(MetricsEvent::TypeReused {
                entity_path: model.path,
            });
        }

        Ok(Arc::clone(existing))
    }

    // Writes are single inserts, so a poisoned map is still consistent.
    fn read_types(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<NullObjectType>>> {
        self.types.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_types(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<NullObjectType>>> {
        self.types.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new(StandinConfig::default())
    }
}

// Each `::`-separated segment must be an identifier.
fn validate_path(path: &str) -> Result<(), RegistryError> {
    let valid = path.split("::").all(|segment| {
        let mut chars = segment.chars();
        chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    });

    if valid {
        Ok(())
    } else {
        Err(RegistryError::InvalidName(path.to_string()))
    }
}
