//! Well-known names shared by the manager framework and the domain crates.

/// Implementation name used when neither the caller nor the configuration picks one.
pub const DEFAULT_IMPLEMENTATION: &str = "Standard";

/// First segment of every configuration key read by the managers.
pub const CONFIG_ROOT: &str = "mshop";

/// Key holding the decorators wrapped around every manager.
pub const DEFAULT_DECORATORS: &str = "mshop/common/manager/decorators/default";

/// Site code used when a context is built without a locale.
pub const DEFAULT_SITE: &str = "default";

/// Log facility for messages written by the manager framework.
pub const LOG_FACILITY: &str = "mshop";

pub const SUPPLIER: &str = "supplier";
