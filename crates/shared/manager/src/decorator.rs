//! Decorator chain composition.
//!
//! Decorators come from three configuration lists, applied in this order:
//!
//! 1. `mshop/common/manager/decorators/default` minus `<prefix>/decorators/excludes`
//! 2. `<prefix>/decorators/global`
//! 3. `<prefix>/decorators/local`
//!
//! The first two resolve to `Common::Manager::Decorator::<Name>`, the local list to
//! `<Domain>::Manager[::<Sub>...]::Decorator::<Name>`. The last decorator applied is the
//! outermost one.

use crate::error::{ManagerError, Result};
use crate::manager::{Manager, ManagerHandle};
use crate::path::{ManagerLocation, TypeName};
use crate::registry::Registry;
use fxhash::FxHashSet;
use mshop_domain::constants::DEFAULT_DECORATORS;
use mshop_domain::search::SearchAttribute;
use mshop_kernel::Context;
use mshop_kernel::config::ConfigLookup;
use std::any::Any;
use std::fmt::Debug;
use tracing::trace;

/// Decorator names configured for one manager location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecoratorSpec {
    pub defaults: Vec<String>,
    pub excludes: FxHashSet<String>,
    pub global: Vec<String>,
    pub local: Vec<String>,
}

impl DecoratorSpec {
    /// Reads the three lists and the exclusions for `location`.
    ///
    /// # Errors
    /// [`ManagerError::Config`] if one of the lists is not a list of strings.
    pub fn from_config(config: &dyn ConfigLookup, location: &ManagerLocation) -> Result<Self> {
        Ok(Self {
            defaults: config.strings(DEFAULT_DECORATORS)?,
            excludes: config.strings(&location.config_key("decorators/excludes"))?.into_iter().collect(),
            global: config.strings(&location.config_key("decorators/global"))?,
            local: config.strings(&location.config_key("decorators/local"))?,
        })
    }

    /// Defaults that survive the exclusions, in configuration order.
    pub fn effective_defaults(&self) -> impl Iterator<Item = &str> {
        self.defaults.iter().map(String::as_str).filter(|name| !self.excludes.contains(*name))
    }

    /// Every decorator name in application order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.effective_defaults()
            .chain(self.global.iter().map(String::as_str))
            .chain(self.local.iter().map(String::as_str))
            .collect()
    }

    /// Decorator types in application order.
    ///
    /// # Errors
    /// [`ManagerError::Validation`] for a name that is not alphanumeric.
    pub fn chain(&self, location: &ManagerLocation) -> Result<Vec<TypeName>> {
        let common = self
            .effective_defaults()
            .chain(self.global.iter().map(String::as_str))
            .map(|name| -> Result<TypeName> { Ok(TypeName::common_decorator(&name.try_into()?)) });
        let local = self
            .local
            .iter()
            .map(|name| -> Result<TypeName> { Ok(location.local_decorator(&name.as_str().try_into()?)) });

        common.chain(local).collect()
    }
}

/// Wraps `manager` in every decorator of `chain`, first entry innermost.
///
/// # Errors
/// * [`ManagerError::NotAvailable`] if a decorator type is not registered.
/// * [`ManagerError::Composition`] if a constructed decorator does not provide
///   `Common::Manager::Decorator::Iface`.
/// * Anything a decorator factory reports.
pub fn compose(
    manager: ManagerHandle,
    chain: &[TypeName],
    registry: &Registry,
    context: &Context,
) -> Result<ManagerHandle> {
    let iface = TypeName::decorator_interface();

    chain.iter().try_fold(manager, |manager, class| {
        let factory = registry.decorator(class).ok_or_else(|| ManagerError::NotAvailable {
            message: format!("class \"{class}\"").into(),
            context: Some("decorator".into()),
        })?;

        let decorated = factory(manager, context)?;
        if !decorated.implements(&iface) {
            return Err(ManagerError::Composition {
                message: format!("class \"{class}\" does not implement interface \"{iface}\"").into(),
                context: None,
            });
        }

        trace!(decorator = %class, "Decorator applied");
        Ok(decorated)
    })
}

/// Behavior a decorator adds on top of the manager it wraps.
///
/// Every method defaults to forwarding, so a hook only overrides what it changes.
pub trait DecoratorHook: Debug + Send + Sync + 'static {
    fn search_attributes(&self, inner: &dyn Manager, with_sub: bool) -> Result<Vec<SearchAttribute>> {
        inner.search_attributes(with_sub)
    }

    fn sub_manager(&self, inner: &dyn Manager, manager: &str, name: Option<&str>) -> Result<ManagerHandle> {
        inner.sub_manager(manager, name)
    }
}

/// A manager decorator: reports the decorator interface, forwards to `inner` through
/// the hook.
#[derive(Debug)]
pub struct Decorated<H> {
    name: TypeName,
    inner: ManagerHandle,
    hook: H,
}

impl<H: DecoratorHook> Decorated<H> {
    #[must_use]
    pub const fn new(name: TypeName, inner: ManagerHandle, hook: H) -> Self {
        Self { name, inner, hook }
    }
}

impl<H: DecoratorHook> Manager for Decorated<H> {
    fn name(&self) -> &TypeName {
        &self.name
    }

    fn implements(&self, iface: &TypeName) -> bool {
        *iface == TypeName::decorator_interface() || self.inner.implements(iface)
    }

    fn search_attributes(&self, with_sub: bool) -> Result<Vec<SearchAttribute>> {
        self.hook.search_attributes(self.inner.as_ref(), with_sub)
    }

    fn sub_manager(&self, manager: &str, name: Option<&str>) -> Result<ManagerHandle> {
        self.hook.sub_manager(self.inner.as_ref(), manager, name)
    }

    fn inner(&self) -> Option<&ManagerHandle> {
        Some(&self.inner)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
