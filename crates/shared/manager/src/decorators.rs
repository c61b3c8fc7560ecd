//! Decorators available to every domain under `Common::Manager::Decorator`.

use crate::decorator::DecoratorHook;
use crate::error::Result;
use crate::manager::{Manager, ManagerHandle};
use crate::registry::RegistryBuilder;
use mshop_domain::constants::LOG_FACILITY;
use mshop_domain::search::SearchAttribute;
use mshop_kernel::Context;
use mshop_logger::Priority;

/// Writes every call to the context logger at debug priority.
#[derive(Debug, Clone)]
pub struct DebugLog {
    context: Context,
}

impl DecoratorHook for DebugLog {
    fn search_attributes(&self, inner: &dyn Manager, with_sub: bool) -> Result<Vec<SearchAttribute>> {
        let message = format!("{}: search attributes (with_sub: {with_sub})", inner.name());
        self.context.log().log(&message, Priority::Debug, LOG_FACILITY);
        inner.search_attributes(with_sub)
    }

    fn sub_manager(&self, inner: &dyn Manager, manager: &str, name: Option<&str>) -> Result<ManagerHandle> {
        let message = format!("{}: sub-manager \"{manager}\" ({})", inner.name(), name.unwrap_or("configured"));
        self.context.log().log(&message, Priority::Debug, LOG_FACILITY);
        inner.sub_manager(manager, name)
    }
}

/// Hides private search attributes.
#[derive(Debug, Clone, Copy)]
pub struct Public;

impl DecoratorHook for Public {
    fn search_attributes(&self, inner: &dyn Manager, with_sub: bool) -> Result<Vec<SearchAttribute>> {
        let mut attributes = inner.search_attributes(with_sub)?;
        attributes.retain(|attribute| attribute.public);
        Ok(attributes)
    }
}

/// Adds the common decorators to `builder`.
#[must_use]
pub fn register(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .hook("Common::Manager::Decorator::Debug", |context| DebugLog { context: context.clone() })
        .hook("Common::Manager::Decorator::Public", |_| Public)
}
