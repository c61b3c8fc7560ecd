use crate::cache::{ManagerCache, ManagerKey};
use crate::error::Result;
use crate::manager::ManagerHandle;
use crate::resolver::Resolver;

/// Per-owner sub-manager cache.
///
/// Each manager embeds one, so a manager hands out the same sub-manager instance for
/// the same (domain, path, name) for as long as it lives. Clones share the cache.
#[derive(Debug, Clone)]
pub struct SubManagers {
    resolver: Resolver,
    cache: ManagerCache,
}

impl SubManagers {
    #[must_use]
    pub fn new(resolver: Resolver) -> Self {
        Self { resolver, cache: ManagerCache::new() }
    }

    #[must_use]
    pub const fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Sub-manager `path` of `domain`, implementation `name` or the configured one.
    ///
    /// The first call per key resolves and decorates; later calls return the same handle.
    /// Failures are not remembered, so a failing key fails again on every call.
    ///
    /// # Errors
    /// Anything [`Resolver::resolve`] reports.
    pub fn get(&self, domain: &str, path: &str, name: Option<&str>) -> Result<ManagerHandle> {
        let key = ManagerKey::new(domain, Some(path), name);
        self.cache.get_or_try_insert(key, || self.resolver.resolve(domain, Some(path), name))
    }

    /// Number of sub-managers built so far.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.cache.len()
    }
}
