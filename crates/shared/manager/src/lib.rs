//! # Manager resolution
//!
//! Resolves domain managers by name, wraps them in configured decorators and caches
//! the result per (domain, path, name).
//!
//! * [`names`] validates the tokens of a request.
//! * [`path`] turns them into type names (`Supplier::Manager::Lists::Standard`) and
//!   configuration keys (`mshop/supplier/manager/lists`).
//! * [`decorator`] reads the decorator lists and builds the chain.
//! * [`ManagerCache`] memoizes decorated managers, constructing each key at most once.
//!
//! Types are constructed through a [`Registry`] filled at startup.
//!
//! ## Example
//! ```rust
//! use mshop_kernel::Context;
//! use mshop_kernel::config::Settings;
//! use mshop_manager::prelude::*;
//! use std::any::Any;
//! use std::sync::Arc;
//!
//! #[derive(Debug)]
//! struct Standard(ManagerBase);
//!
//! impl Manager for Standard {
//!     fn name(&self) -> &TypeName { self.0.class() }
//!     fn implements(&self, iface: &TypeName) -> bool { self.0.implements(iface) }
//!     fn search_attributes(&self, _: bool) -> Result<Vec<SearchAttribute>, ManagerError> { Ok(Vec::new()) }
//!     fn sub_manager(&self, manager: &str, name: Option<&str>) -> Result<ManagerHandle, ManagerError> {
//!         self.0.sub_manager(manager, name)
//!     }
//!     fn as_any(&self) -> &dyn Any { self }
//! }
//!
//! let registry = Registry::builder()
//!     .manager("Stock::Manager::Type::Standard", |resolver| {
//!         let base = ManagerBase::new(resolver, "stock", Some("type"), "Standard")?;
//!         Ok(Arc::new(Standard(base)) as ManagerHandle)
//!     })
//!     .build()
//!     .unwrap();
//!
//! let context = Context::builder().config(Settings::default()).build();
//! let subs = SubManagers::new(Resolver::new(context, registry));
//!
//! let first = subs.get("stock", "type", None).unwrap();
//! let second = subs.get("Stock", "Type", None).unwrap();
//! assert!(Arc::ptr_eq(&first, &second));
//! ```

mod cache;
pub mod decorator;
pub mod decorators;
mod error;
mod manager;
pub mod names;
pub mod path;
mod registry;
mod resolver;
mod shop;
mod sub;

pub use crate::cache::{ManagerCache, ManagerKey};
pub use crate::decorator::{Decorated, DecoratorHook, DecoratorSpec};
pub use crate::error::{ManagerError, ManagerErrorExt, Result};
pub use crate::manager::{Manager, ManagerBase, ManagerHandle, decorator_names, innermost};
pub use crate::names::{DomainName, ImplName, ManagerPath};
pub use crate::path::{ManagerLocation, TypeName};
pub use crate::registry::{DecoratorFactory, ManagerFactory, Registry, RegistryBuilder};
pub use crate::resolver::Resolver;
pub use crate::shop::Shop;
pub use crate::sub::SubManagers;

pub mod prelude {
    pub use crate::{
        Decorated, DecoratorHook, Manager, ManagerBase, ManagerError, ManagerHandle, Registry,
        RegistryBuilder, Resolver, Shop, SubManagers, TypeName,
    };
    pub use mshop_domain::search::{AttributeKind, SearchAttribute};
}
