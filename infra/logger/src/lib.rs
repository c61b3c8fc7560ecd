//! # Logger
//!
//! Logging for the mshop workspace, in two parts:
//!
//! * [`Logger`] installs the process-wide `tracing` subscriber (console, rolling files,
//!   optional JSON, `RUST_LOG`-style filtering). Applications call it once at startup.
//! * [`Log`] is the logger handed to managers through the request context.
//!   [`TracingLog`] forwards to `tracing`, [`MemoryLog`] keeps messages for tests.
//!
//! ## Example
//!
//! ```rust
//! use mshop_logger::{LevelFilter, Log, Logger, Priority, TracingLog};
//!
//! let _logger = Logger::builder().name("shop").level(LevelFilter::DEBUG).init().unwrap();
//!
//! let log = TracingLog::new(Priority::Info);
//! log.log("supplier manager ready", Priority::Info, "supplier");
//! ```

mod error;
mod sink;
mod subscriber;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use crate::sink::{Log, LogEntry, MemoryLog, Priority, TracingLog};
pub use crate::subscriber::{LogSettings, Logger, LoggerBuilder, NoName, WithName};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;
