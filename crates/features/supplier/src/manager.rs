use crate::tables::Table;
use mshop_domain::constants::{DEFAULT_IMPLEMENTATION, SUPPLIER};
use mshop_domain::search::SearchAttribute;
use mshop_manager::{Manager, ManagerBase, ManagerError, ManagerHandle, Resolver, TypeName};
use std::any::Any;

/// Standard implementation of every supplier manager; the table decides which one.
#[derive(Debug)]
pub struct TableManager {
    base: ManagerBase,
    table: &'static Table,
}

impl TableManager {
    /// # Errors
    /// [`ManagerError::Validation`] if the table path is malformed.
    pub fn new(resolver: &Resolver, table: &'static Table) -> Result<Self, ManagerError> {
        let base = ManagerBase::new(resolver, SUPPLIER, table.path, DEFAULT_IMPLEMENTATION)?;
        Ok(Self { base, table })
    }

    #[must_use]
    pub const fn table(&self) -> &'static Table {
        self.table
    }
}

impl Manager for TableManager {
    fn name(&self) -> &TypeName {
        self.base.class()
    }

    fn implements(&self, iface: &TypeName) -> bool {
        self.base.implements(iface)
    }

    fn search_attributes(&self, with_sub: bool) -> Result<Vec<SearchAttribute>, ManagerError> {
        let mut attributes = self.table.attributes();
        if with_sub {
            attributes.extend(self.base.sub_attributes(self.table.submanagers)?);
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
