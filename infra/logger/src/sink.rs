use parking_lot::Mutex;
use serde::Deserialize;
use std::fmt;

/// Syslog-style message priorities, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Emerg,
    Alert,
    Crit,
    Err,
    Warn,
    Notice,
    Info,
    Debug,
}

impl Priority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Emerg => "emerg",
            Self::Alert => "alert",
            Self::Crit => "crit",
            Self::Err => "err",
            Self::Warn => "warn",
            Self::Notice => "notice",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The logger carried by the request context.
///
/// `facility` names the subsystem writing the message (`"mshop"`, `"supplier"`, ...).
pub trait Log: fmt::Debug + Send + Sync {
    fn log(&self, message: &str, priority: Priority, facility: &str);
}

/// Forwards context log messages to `tracing`, dropping anything less severe than `threshold`.
#[derive(Debug, Clone, Copy)]
pub struct TracingLog {
    threshold: Priority,
}

impl TracingLog {
    #[must_use]
    pub const fn new(threshold: Priority) -> Self {
        Self { threshold }
    }
}

impl Default for TracingLog {
    fn default() -> Self {
        Self::new(Priority::Debug)
    }
}

impl Log for TracingLog {
    fn log(&self, message: &str, priority: Priority, facility: &str) {
        if priority > self.threshold {
            return;
        }

        match priority {
            Priority::Emerg | Priority::Alert | Priority::Crit | Priority::Err => {
                tracing::error!(target: "mshop", facility, %priority, "{message}");
            },
            Priority::Warn => tracing::warn!(target: "mshop", facility, %priority, "{message}"),
            Priority::Notice | Priority::Info => {
                tracing::info!(target: "mshop", facility, %priority, "{message}");
            },
            Priority::Debug => tracing::debug!(target: "mshop", facility, %priority, "{message}"),
        }
    }
}

/// One message captured by [`MemoryLog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub message: String,
    pub priority: Priority,
    pub facility: String,
}

/// Keeps every message in memory; meant for tests and diagnostics.
#[derive(Debug, Default)]
pub struct MemoryLog {
    entries: Mutex<Vec<LogEntry>>,
}

impl MemoryLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }

    /// Messages written for `facility`, oldest first.
    #[must_use]
    pub fn messages(&self, facility: &str) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .filter(|entry| entry.facility == facility)
            .map(|entry| entry.message.clone())
            .collect()
    }
}

impl Log for MemoryLog {
    fn log(&self, message: &str, priority: Priority, facility: &str) {
        self.entries.lock().push(LogEntry {
            message: message.to_owned(),
            priority,
            facility: facility.to_owned(),
        });
    }
}
