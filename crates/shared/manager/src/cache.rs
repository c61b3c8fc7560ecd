use crate::error::{ManagerError, Result};
use crate::manager::ManagerHandle;
use moka::sync::Cache;
use std::fmt;
use std::sync::Arc;

/// Cache key of a resolved manager.
///
/// Domain and path are ASCII lower-cased like the validator does; the implementation name is
/// kept as requested, so `None` and `Some("Standard")` are separate entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ManagerKey {
    domain: String,
    path: Option<String>,
    name: Option<String>,
}

impl ManagerKey {
    #[must_use]
    pub fn new(domain: &str, path: Option<&str>, name: Option<&str>) -> Self {
        Self {
            domain: domain.to_ascii_lowercase(),
            path: path.map(str::to_ascii_lowercase),
            name: name.map(str::to_owned),
        }
    }
}

impl fmt::Display for ManagerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}",
            self.domain,
            self.path.as_deref().unwrap_or_default(),
            self.name.as_deref().unwrap_or("*")
        )
    }
}

/// Memoized managers, at most one construction per key.
///
/// Concurrent callers asking for a missing key wait for the single construction and
/// share its outcome; lookups of present keys do not lock. Errors are handed to every
/// waiter but never stored.
#[derive(Clone)]
pub struct ManagerCache {
    entries: Cache<ManagerKey, ManagerHandle>,
}

impl ManagerCache {
    #[must_use]
    pub fn new() -> Self {
        Self { entries: Cache::builder().name("managers").build() }
    }

    /// Cached manager for `key`, running `init` if there is none yet.
    ///
    /// # Errors
    /// Whatever `init` returns.
    pub fn get_or_try_insert<F>(&self, key: ManagerKey, init: F) -> Result<ManagerHandle>
    where
        F: FnOnce() -> Result<ManagerHandle>,
    {
        if let Some(handle) = self.entries.get(&key) {
            return Ok(handle);
        }

        tracing::trace!(key = %key, "Manager cache miss");
        self.entries.try_get_with(key, init).map_err(|err: Arc<ManagerError>| (*err).clone())
    }

    #[must_use]
    pub fn contains(&self, key: &ManagerKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of cached managers.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.entries.run_pending_tasks();
        self.entries.entry_count()
    }
}

impl Default for ManagerCache {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ManagerCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManagerCache").field("entries", &self.entries.entry_count()).finish()
    }
}
