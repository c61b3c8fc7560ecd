//! Validated identifier tokens.
//!
//! Every string that ends up in a class name or a configuration key passes through one
//! of these types first. Construction is the only place validation happens.

use crate::error::ManagerError;
use std::fmt;

/// Lower-case domain name such as `supplier`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DomainName(String);

impl TryFrom<&str> for DomainName {
    type Error = ManagerError;

    fn try_from(value: &str) -> Result<Self, ManagerError> {
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(ManagerError::Validation {
                message: format!("domain name \"{value}\"").into(),
                context: None,
            });
        }

        Ok(Self(value.to_ascii_lowercase()))
    }
}

/// Lower-case, slash separated sub-manager path such as `lists/type`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ManagerPath(String);

impl ManagerPath {
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    /// Appends `child` as a new trailing segment.
    ///
    /// # Errors
    /// [`ManagerError::Validation`] if `child` is not a valid path itself.
    pub fn join(&self, child: &str) -> Result<Self, ManagerError> {
        Self::try_from(format!("{}/{child}", self.0).as_str())
    }
}

impl TryFrom<&str> for ManagerPath {
    type Error = ManagerError;

    fn try_from(value: &str) -> Result<Self, ManagerError> {
        let path = value.to_ascii_lowercase();

        let charset = !path.is_empty()
            && path.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'/');
        if !charset || path.split('/').any(str::is_empty) {
            return Err(ManagerError::Validation {
                message: format!("manager name \"{path}\"").into(),
                context: None,
            });
        }

        Ok(Self(path))
    }
}

/// Implementation or decorator name such as `Standard` or `Changelog`. Case is kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImplName(String);

impl TryFrom<&str> for ImplName {
    type Error = ManagerError;

    fn try_from(value: &str) -> Result<Self, ManagerError> {
        if value.is_empty() || !value.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ManagerError::Validation {
                message: format!("class name \"{value}\"").into(),
                context: None,
            });
        }

        Ok(Self(value.to_owned()))
    }
}

macro_rules! token_str {
    ($($ty:ty),*) => {$(
        impl $ty {
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    )*};
}

token_str!(DomainName, ManagerPath, ImplName);
