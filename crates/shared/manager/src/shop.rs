use crate::cache::{ManagerCache, ManagerKey};
use crate::error::Result;
use crate::manager::ManagerHandle;
use crate::registry::Registry;
use crate::resolver::Resolver;
use mshop_kernel::Context;

/// Entry point for creating managers by path.
///
/// ```rust,ignore
/// let shop = Shop::new(context, registry);
/// let types = shop.create("supplier/lists/type")?;
/// ```
#[derive(Debug, Clone)]
pub struct Shop {
    resolver: Resolver,
    roots: ManagerCache,
}

impl Shop {
    #[must_use]
    pub fn new(context: Context, registry: Registry) -> Self {
        Self { resolver: Resolver::new(context, registry), roots: ManagerCache::new() }
    }

    #[must_use]
    pub const fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Root manager of the first segment, then one sub-manager per following segment.
    ///
    /// Root managers are cached here; sub-managers are cached by their parents.
    ///
    /// # Errors
    /// Anything [`Resolver::resolve`] or [`crate::Manager::sub_manager`] reports.
    pub fn create(&self, path: &str) -> Result<ManagerHandle> {
        let (domain, rest) = path.split_once('/').map_or((path, None), |(domain, rest)| (domain, Some(rest)));

        let key = ManagerKey::new(domain, None, None);
        let mut manager = self.roots.get_or_try_insert(key, || self.resolver.resolve(domain, None, None))?;

        for part in rest.into_iter().flat_map(|rest| rest.split('/')) {
            manager = manager.sub_manager(part, None)?;
        }
        Ok(manager)
    }
}
