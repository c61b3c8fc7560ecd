use crate::decorator::{DecoratorSpec, compose};
use crate::error::{ManagerError, Result};
use crate::manager::ManagerHandle;
use crate::names::ImplName;
use crate::path::ManagerLocation;
use crate::registry::Registry;
use mshop_domain::constants::DEFAULT_IMPLEMENTATION;
use mshop_kernel::Context;
use mshop_kernel::config::ConfigLookup;
use tracing::{debug, warn};

/// Builds decorated managers from the registry. Nothing is cached here; see
/// [`crate::SubManagers`] and [`crate::Shop`] for the memoizing front ends.
#[derive(Debug, Clone)]
pub struct Resolver {
    context: Context,
    registry: Registry,
}

impl Resolver {
    #[must_use]
    pub const fn new(context: Context, registry: Registry) -> Self {
        Self { context, registry }
    }

    #[must_use]
    pub const fn context(&self) -> &Context {
        &self.context
    }

    #[must_use]
    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Resolves the manager at `domain`/`path` (the root manager when `path` is `None`).
    ///
    /// Steps:
    /// 1. validate `domain` and `path`,
    /// 2. pick the implementation: `name`, else `<prefix>/name`, else `Standard`,
    /// 3. construct `<Domain>::Manager[::<Sub>...]::<Name>` and check it implements
    ///    `<Domain>::Manager[::<Sub>...]::Iface`,
    /// 4. wrap it in the configured decorators.
    ///
    /// # Errors
    /// [`ManagerError::Validation`], [`ManagerError::NotAvailable`],
    /// [`ManagerError::Composition`] or [`ManagerError::Config`] as the step fails.
    pub fn resolve(&self, domain: &str, path: Option<&str>, name: Option<&str>) -> Result<ManagerHandle> {
        self.try_resolve(domain, path, name).inspect_err(|err| {
            warn!(domain, path, name, kind = err.kind(), "Manager resolution failed: {err}");
        })
    }

    fn try_resolve(&self, domain: &str, path: Option<&str>, name: Option<&str>) -> Result<ManagerHandle> {
        let location = ManagerLocation::parse(domain, path)?;
        let name = self.implementation(&location, name)?;
        let class = location.class(&name);

        let factory = self.registry.manager(&class).ok_or_else(|| ManagerError::NotAvailable {
            message: format!("class \"{class}\"").into(),
            context: Some("manager".into()),
        })?;

        let manager = factory(self)?;
        let iface = location.interface();
        if !manager.implements(&iface) {
            return Err(ManagerError::Composition {
                message: format!("class \"{class}\" does not implement interface \"{iface}\"").into(),
                context: None,
            });
        }

        let chain = DecoratorSpec::from_config(self.context.config(), &location)?.chain(&location)?;
        let manager = compose(manager, &chain, &self.registry, &self.context)?;

        debug!(location = %location, class = %class, decorators = chain.len(), "Manager resolved");
        Ok(manager)
    }

    fn implementation(&self, location: &ManagerLocation, name: Option<&str>) -> Result<ImplName> {
        match name {
            Some(name) => ImplName::try_from(name),
            None => {
                let key = location.config_key("name");
                let configured = self.context.config().string(&key, DEFAULT_IMPLEMENTATION)?;
                ImplName::try_from(configured.as_str())
            },
        }
    }
}
