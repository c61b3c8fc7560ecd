use mshop_kernel::config::ConfigError;
use std::borrow::Cow;

/// Errors raised while resolving and decorating managers.
///
/// The type is `Clone` because a failed construction is reported to every caller that
/// waited on the same cache entry.
#[mshop_derive::mshop_error]
#[derive(Clone)]
pub enum ManagerError {
    #[error("Invalid characters{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Class not available{}: {message}", format_context(.context))]
    NotAvailable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Composition failed{}: {message}", format_context(.context))]
    Composition { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Configuration error{}: {message}", format_context(.context))]
    Config { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal manager fault{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl From<ConfigError> for ManagerError {
    fn from(err: ConfigError) -> Self {
        let context = err.context_message().map(|c| Cow::Owned(c.to_owned()));
        Self::Config { message: err.to_string().into(), context }
    }
}

pub type Result<T, E = ManagerError> = std::result::Result<T, E>;
