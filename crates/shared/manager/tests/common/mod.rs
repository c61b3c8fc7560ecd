#![allow(dead_code, unreachable_pub)]

use mshop_domain::search::{AttributeKind, SearchAttribute};
use mshop_kernel::Context;
use mshop_kernel::config::Settings;
use mshop_manager::prelude::*;
use mshop_manager::{ImplName, ManagerLocation};
use std::any::Any;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Manager with one `<location>.id` attribute that honours `submanagers`.
#[derive(Debug)]
pub struct Probe {
    base: ManagerBase,
}

impl Manager for Probe {
    fn name(&self) -> &TypeName {
        self.base.class()
    }

    fn implements(&self, iface: &TypeName) -> bool {
        self.base.implements(iface)
    }

    fn search_attributes(&self, with_sub: bool) -> Result<Vec<SearchAttribute>, ManagerError> {
        let code = format!("{}.id", self.base.location().to_string().replace('/', "."));
        let mut attributes = vec![SearchAttribute::new(code, "id", "ID", AttributeKind::Integer)];
        if with_sub {
            attributes.extend(self.base.sub_attributes(&[])?);
        }
        Ok(attributes)
    }

    fn sub_manager(&self, manager: &str, name: Option<&str>) -> Result<ManagerHandle, ManagerError> {
        self.base.sub_manager(manager, name)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl From<ManagerBase> for Probe {
    fn from(base: ManagerBase) -> Self {
        Self { base }
    }
}

/// Manager that does not provide the interface it is registered for.
#[derive(Debug)]
pub struct Rogue(pub TypeName);

impl Manager for Rogue {
    fn name(&self) -> &TypeName {
        &self.0
    }

    fn implements(&self, _iface: &TypeName) -> bool {
        false
    }

    fn search_attributes(&self, _with_sub: bool) -> Result<Vec<SearchAttribute>, ManagerError> {
        Ok(Vec::new())
    }

    fn sub_manager(&self, manager: &str, _name: Option<&str>) -> Result<ManagerHandle, ManagerError> {
        Err(ManagerError::NotAvailable { message: manager.to_owned().into(), context: None })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug)]
pub struct Tag;

impl DecoratorHook for Tag {}

pub fn class(domain: &str, path: Option<&str>, name: &str) -> String {
    let location = ManagerLocation::parse(domain, path).unwrap();
    location.class(&ImplName::try_from(name).unwrap()).to_string()
}

/// Registers a [`Probe`] and counts its constructions in `built`.
pub fn probe(
    builder: RegistryBuilder,
    domain: &'static str,
    path: Option<&'static str>,
    name: &'static str,
    built: &Arc<AtomicUsize>,
) -> RegistryBuilder {
    let built = Arc::clone(built);
    builder.manager(class(domain, path, name), move |resolver| {
        built.fetch_add(1, Ordering::SeqCst);
        let base = ManagerBase::new(resolver, domain, path, name)?;
        Ok(Arc::new(Probe { base }) as ManagerHandle)
    })
}

/// Registers a pass-through decorator for every class.
pub fn tags(builder: RegistryBuilder, classes: &[&str]) -> RegistryBuilder {
    classes.iter().fold(builder, |builder, class| builder.hook(*class, |_| Tag))
}

pub fn context(settings: Settings) -> Context {
    Context::builder().config(settings).build()
}

pub fn counter() -> Arc<AtomicUsize> {
    Arc::new(AtomicUsize::new(0))
}

pub fn short_names(handle: &ManagerHandle) -> Vec<String> {
    mshop_manager::decorator_names(handle).iter().map(|name| name.short_name().to_owned()).collect()
}
