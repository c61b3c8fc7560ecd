//! Supplier domain: suppliers, their addresses and their list references.
//!
//! | path | type |
//! |---|---|
//! | (root) | `Supplier::Manager::Standard` |
//! | `address` | `Supplier::Manager::Address::Standard` |
//! | `lists` | `Supplier::Manager::Lists::Standard` |
//! | `lists/type` | `Supplier::Manager::Lists::Type::Standard` |

mod manager;
pub mod tables;

pub use crate::manager::TableManager;
pub use crate::tables::{Field, Table};

use mshop_manager::{ManagerError, ManagerHandle, RegistryBuilder};
use std::sync::Arc;

/// Adds every supplier manager to `builder`.
///
/// # Errors
/// [`ManagerError::Validation`] if a table path does not form a valid type name.
pub fn register(builder: RegistryBuilder) -> Result<RegistryBuilder, ManagerError> {
    tables::ALL.into_iter().try_fold(builder, |builder, table| {
        let class = table.class()?;
        tracing::trace!(class = %class, "Supplier manager registered");
        Ok(builder.manager(class.as_str(), move |resolver| {
            Ok(Arc::new(TableManager::new(resolver, table)?) as ManagerHandle)
        }))
    })
}
