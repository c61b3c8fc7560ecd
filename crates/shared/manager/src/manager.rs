use crate::error::Result;
use crate::path::{ManagerLocation, TypeName};
use crate::resolver::Resolver;
use crate::sub::SubManagers;
use mshop_domain::search::SearchAttribute;
use mshop_kernel::Context;
use mshop_kernel::config::ConfigLookup;
use serde_json::Value;
use std::any::Any;
use std::fmt::Debug;
use std::sync::Arc;

/// Capability interface shared by managers and manager decorators.
pub trait Manager: Any + Debug + Send + Sync {
    /// Registered type of this object, e.g. `Supplier::Manager::Lists::Standard`.
    fn name(&self) -> &TypeName;

    /// Whether this object provides the interface `iface`.
    fn implements(&self, iface: &TypeName) -> bool;

    /// Attributes available for searching. With `with_sub`, the attributes of the
    /// configured sub-managers are appended.
    fn search_attributes(&self, with_sub: bool) -> Result<Vec<SearchAttribute>>;

    /// Sub-manager `manager` (relative to this one) using implementation `name`, or the
    /// configured one when `None`.
    fn sub_manager(&self, manager: &str, name: Option<&str>) -> Result<ManagerHandle>;

    /// The wrapped manager when this object is a decorator.
    fn inner(&self) -> Option<&ManagerHandle> {
        None
    }

    fn as_any(&self) -> &dyn Any;
}

/// Shared, type-erased manager. Cloning shares the instance.
pub type ManagerHandle = Arc<dyn Manager>;

/// Decorators wrapped around `handle`, innermost first.
#[must_use]
pub fn decorator_names(handle: &ManagerHandle) -> Vec<TypeName> {
    let mut names = Vec::new();
    let mut current = handle;
    while let Some(inner) = current.inner() {
        names.push(current.name().clone());
        current = inner;
    }
    names.reverse();
    names
}

/// The undecorated manager at the bottom of the chain.
#[must_use]
pub fn innermost(handle: &ManagerHandle) -> &ManagerHandle {
    let mut current = handle;
    while let Some(inner) = current.inner() {
        current = inner;
    }
    current
}

/// State every concrete manager carries: its type, its location and its own
/// sub-manager cache.
#[derive(Debug, Clone)]
pub struct ManagerBase {
    class: TypeName,
    location: ManagerLocation,
    subs: SubManagers,
}

impl ManagerBase {
    /// # Errors
    /// [`crate::ManagerError::Validation`] if the location or `name` is malformed.
    pub fn new(resolver: &Resolver, domain: &str, path: Option<&str>, name: &str) -> Result<Self> {
        let location = ManagerLocation::parse(domain, path)?;
        let class = location.class(&name.try_into()?);
        Ok(Self { class, location, subs: SubManagers::new(resolver.clone()) })
    }

    #[must_use]
    pub const fn class(&self) -> &TypeName {
        &self.class
    }

    #[must_use]
    pub const fn location(&self) -> &ManagerLocation {
        &self.location
    }

    #[must_use]
    pub fn context(&self) -> &Context {
        self.subs.resolver().context()
    }

    /// A concrete manager provides its own interface and the generic manager interface.
    #[must_use]
    pub fn implements(&self, iface: &TypeName) -> bool {
        *iface == self.location.interface() || *iface == TypeName::manager_interface()
    }

    /// # Errors
    /// Anything [`SubManagers::get`] reports.
    pub fn sub_manager(&self, manager: &str, name: Option<&str>) -> Result<ManagerHandle> {
        let path = match self.location.path() {
            Some(path) => format!("{path}/{manager}"),
            None => manager.to_owned(),
        };
        self.subs.get(self.location.domain().as_str(), &path, name)
    }

    /// Attributes of the sub-managers listed under `<prefix>/submanagers`, falling back
    /// to `defaults` when nothing is configured.
    ///
    /// # Errors
    /// Propagates configuration, resolution and search attribute failures.
    pub fn sub_attributes(&self, defaults: &[&str]) -> Result<Vec<SearchAttribute>> {
        let key = self.location.config_key("submanagers");
        let config = self.context().config();
        let names = match config.lookup(&key) {
            None | Some(Value::Null) => defaults.iter().map(|&name| name.to_owned()).collect(),
            Some(_) => config.strings(&key)?,
        };

        let mut attributes = Vec::new();
        for name in names {
            attributes.extend(self.sub_manager(&name, None)?.search_attributes(true)?);
        }
        Ok(attributes)
    }
}
