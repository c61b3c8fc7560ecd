//! Facade crate for the mshop manager framework.
//! Re-exports the shared crates and assembles the default registry from the enabled
//! domain features.
//! Keep this crate thin: it composes other crates, it does not implement managers.
//!
//! ## Usage
//! - Add `mshop` with the desired domain features (`supplier` is on by default).
//! - Call [`shop`] with a request context and create managers by path.

pub use mshop_domain as domain;
pub use mshop_kernel as kernel;
pub use mshop_logger as logger;
pub use mshop_manager as manager;

use mshop_kernel::Context;
use mshop_manager::{ManagerError, Registry, RegistryBuilder, Shop, decorators};

/// Domain features compiled into this build.
pub mod features {
    #[cfg(feature = "supplier")]
    pub use mshop_supplier as supplier;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "supplier")]
        "supplier",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Registry builder with the common decorators and every enabled domain.
///
/// # Errors
/// Returns an error if a domain cannot describe its managers.
pub fn builder() -> Result<RegistryBuilder, ManagerError> {
    let builder = decorators::register(Registry::builder());

    #[cfg(feature = "supplier")]
    let builder = features::supplier::register(builder)?;

    Ok(builder)
}

/// The default registry.
///
/// # Errors
/// Returns an error if a type is malformed or registered twice.
pub fn registry() -> Result<Registry, ManagerError> {
    let registry = builder()?.build()?;
    tracing::info!(
        features = ?features::ENABLED,
        managers = registry.managers().len(),
        decorators = registry.decorators().len(),
        "Manager registry ready"
    );
    Ok(registry)
}

/// A [`Shop`] over the default registry.
///
/// # Errors
/// Returns an error if the default registry cannot be built.
pub fn shop(context: Context) -> Result<Shop, ManagerError> {
    Ok(Shop::new(context, registry()?))
}
