#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros shared by the mshop crates.
//!
//! The only macro today is [`macro@mshop_error`], which turns a plain enum into the error
//! type every library crate in the workspace exposes.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! mshop-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a `source` field
///   (or a field marked `#[source]`/`#[from]`), enabling the `?` operator for upstream errors.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` if an `Internal` variant exists.
/// * **Introspection**: `kind()` returns the variant name, `context_message()` the attached context.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Variants that support context must include a `context: Option<Cow<'static, str>>` field.
/// 3. Variants wrapping external errors must also carry the `context` field.
/// 4. Tuple or unit variants are rejected.
///
/// # Example
///
/// ```rust,ignore
/// use mshop_derive::mshop_error;
/// use std::borrow::Cow;
///
/// #[mshop_error]
/// pub enum ConfigError {
///     #[error("Config source error{}: {source}", format_context(.context))]
///     Source { source: config::ConfigError, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn load() -> Result<config::Config, ConfigError> {
///     config::Config::builder().build().context("Building settings")
/// }
/// ```
#[proc_macro_attribute]
pub fn mshop_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
