//! Startup-time registry mapping type names to constructors.

use crate::decorator::{Decorated, DecoratorHook};
use crate::error::{ManagerError, Result};
use crate::manager::ManagerHandle;
use crate::path::TypeName;
use crate::resolver::Resolver;
use fxhash::FxHashMap;
use mshop_kernel::Context;
use std::fmt;
use std::sync::Arc;

/// Builds a manager. The resolver gives access to the context and lets the manager
/// resolve its own sub-managers later on.
pub type ManagerFactory = Arc<dyn Fn(&Resolver) -> Result<ManagerHandle> + Send + Sync>;

/// Wraps an existing manager in a decorator.
pub type DecoratorFactory = Arc<dyn Fn(ManagerHandle, &Context) -> Result<ManagerHandle> + Send + Sync>;

/// Immutable map of every constructible manager and decorator type.
///
/// Cheap to clone; clones share the same tables.
#[derive(Clone)]
pub struct Registry {
    inner: Arc<RegistryInner>,
}

struct RegistryInner {
    managers: FxHashMap<TypeName, ManagerFactory>,
    decorators: FxHashMap<TypeName, DecoratorFactory>,
}

impl Registry {
    #[must_use = "Creates an empty registry builder"]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    #[must_use]
    pub fn manager(&self, class: &TypeName) -> Option<&ManagerFactory> {
        self.inner.managers.get(class)
    }

    #[must_use]
    pub fn decorator(&self, class: &TypeName) -> Option<&DecoratorFactory> {
        self.inner.decorators.get(class)
    }

    /// Registered manager types, sorted.
    #[must_use]
    pub fn managers(&self) -> Vec<&TypeName> {
        sorted(self.inner.managers.keys())
    }

    /// Registered decorator types, sorted.
    #[must_use]
    pub fn decorators(&self) -> Vec<&TypeName> {
        sorted(self.inner.decorators.keys())
    }
}

fn sorted<'a>(keys: impl Iterator<Item = &'a TypeName>) -> Vec<&'a TypeName> {
    let mut keys: Vec<_> = keys.collect();
    keys.sort();
    keys
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("managers", &self.managers())
            .field("decorators", &self.decorators())
            .finish()
    }
}

/// Collects factories during startup. Names are checked in [`RegistryBuilder::build`].
#[derive(Default)]
pub struct RegistryBuilder {
    managers: Vec<(String, ManagerFactory)>,
    decorators: Vec<(String, DecoratorFactory)>,
}

impl fmt::Debug for RegistryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("managers", &self.managers.iter().map(|(name, _)| name).collect::<Vec<_>>())
            .field("decorators", &self.decorators.iter().map(|(name, _)| name).collect::<Vec<_>>())
            .finish()
    }
}

impl RegistryBuilder {
    #[must_use = "Registers a manager factory"]
    pub fn manager<F>(mut self, class: impl Into<String>, factory: F) -> Self
    where
        F: Fn(&Resolver) -> Result<ManagerHandle> + Send + Sync + 'static,
    {
        self.managers.push((class.into(), Arc::new(factory)));
        self
    }

    #[must_use = "Registers a decorator factory"]
    pub fn decorator<F>(mut self, class: impl Into<String>, factory: F) -> Self
    where
        F: Fn(ManagerHandle, &Context) -> Result<ManagerHandle> + Send + Sync + 'static,
    {
        self.decorators.push((class.into(), Arc::new(factory)));
        self
    }

    /// Registers a decorator built from a [`DecoratorHook`], wrapped in [`Decorated`].
    #[must_use = "Registers a decorator factory"]
    pub fn hook<H, F>(self, class: impl Into<String>, make: F) -> Self
    where
        H: DecoratorHook,
        F: Fn(&Context) -> H + Send + Sync + 'static,
    {
        let class = class.into();
        let name = TypeName::parse(&class);
        self.decorator(class, move |inner, context| {
            let name = name.clone()?;
            Ok(Arc::new(Decorated::new(name, inner, make(context))) as ManagerHandle)
        })
    }

    /// Freezes the registry.
    ///
    /// # Errors
    /// * [`ManagerError::Validation`] for a malformed type name.
    /// * [`ManagerError::Composition`] when a type is registered twice.
    pub fn build(self) -> Result<Registry> {
        let managers = index(self.managers)?;
        let decorators = index(self.decorators)?;
        tracing::debug!(managers = managers.len(), decorators = decorators.len(), "Registry built");

        Ok(Registry { inner: Arc::new(RegistryInner { managers, decorators }) })
    }
}

fn index<F>(entries: Vec<(String, F)>) -> Result<FxHashMap<TypeName, F>> {
    let mut map = FxHashMap::default();
    map.reserve(entries.len());

    for (class, factory) in entries {
        let name = TypeName::parse(&class)?;
        if map.insert(name, factory).is_some() {
            return Err(ManagerError::Composition {
                message: format!("class \"{class}\" registered twice").into(),
                context: None,
            });
        }
    }
    Ok(map)
}
