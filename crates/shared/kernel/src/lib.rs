//! Kernel utilities shared by every manager crate.
//! Keep this crate lightweight: it owns configuration lookup and the per-request [`Context`].
//!
//! ## Settings
//! ```rust
//! use mshop_kernel::config::{ConfigLookup, Settings};
//! use serde_json::json;
//!
//! let mut settings = Settings::default();
//! settings.insert("mshop/supplier/manager/name", json!("Standard"));
//!
//! assert_eq!(settings.string("mshop/supplier/manager/name", "Other").unwrap(), "Standard");
//! assert!(settings.strings("mshop/supplier/manager/decorators/local").unwrap().is_empty());
//! ```
//!
//! ## Context
//! ```rust
//! use mshop_kernel::Context;
//! use mshop_kernel::config::Settings;
//!
//! let context = Context::builder().config(Settings::default()).build();
//! assert_eq!(context.locale().site_id, "default");
//! ```
pub mod config;
mod context;

pub use crate::context::{Context, ContextBuilder, ContextInner, NoConfig, WithConfig};
pub use mshop_domain as domain;
pub use mshop_logger as logger;
