//! Turns validated tokens into namespaced type identifiers and configuration keys.

use crate::error::ManagerError;
use crate::names::{DomainName, ImplName, ManagerPath};
use mshop_domain::constants::CONFIG_ROOT;
use std::fmt;
use std::sync::Arc;

/// Separator between the segments of a [`TypeName`].
pub const SEPARATOR: &str = "::";

const COMMON: &str = "Common";
const MANAGER: &str = "Manager";
const DECORATOR: &str = "Decorator";
const IFACE: &str = "Iface";

/// Namespaced identifier of a registered type, e.g. `Supplier::Manager::Lists::Standard`.
///
/// Interfaces are identified the same way (`Supplier::Manager::Lists::Iface`) and are what
/// [`crate::Manager::implements`] is asked about.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeName(Arc<str>);

impl TypeName {
    /// Parses a type name written out in full.
    ///
    /// # Errors
    /// [`ManagerError::Validation`] if any segment is empty or not ASCII alphanumeric.
    pub fn parse(value: &str) -> Result<Self, ManagerError> {
        let valid = value
            .split(SEPARATOR)
            .all(|segment| !segment.is_empty() && segment.chars().all(|c| c.is_ascii_alphanumeric()));

        if valid {
            Ok(Self(value.into()))
        } else {
            Err(ManagerError::Validation {
                message: format!("type name \"{value}\"").into(),
                context: None,
            })
        }
    }

    fn join<'a>(segments: impl IntoIterator<Item = &'a str>) -> Self {
        let joined: Vec<&str> = segments.into_iter().collect();
        Self(joined.join(SEPARATOR).into())
    }

    /// `Common::Manager::Decorator::<Name>`
    #[must_use]
    pub fn common_decorator(name: &ImplName) -> Self {
        Self::join([COMMON, MANAGER, DECORATOR, name.as_str()])
    }

    /// The capability every decorator reports: `Common::Manager::Decorator::Iface`.
    #[must_use]
    pub fn decorator_interface() -> Self {
        Self::join([COMMON, MANAGER, DECORATOR, IFACE])
    }

    /// The capability every manager reports: `Common::Manager::Iface`.
    #[must_use]
    pub fn manager_interface() -> Self {
        Self::join([COMMON, MANAGER, IFACE])
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last segment, usually the implementation name.
    #[must_use]
    pub fn short_name(&self) -> &str {
        self.0.rsplit(SEPARATOR).next().unwrap_or_default()
    }
}

impl TryFrom<&str> for TypeName {
    type Error = ManagerError;

    fn try_from(value: &str) -> Result<Self, ManagerError> {
        Self::parse(value)
    }
}

impl AsRef<str> for TypeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn ucfirst(segment: &str) -> String {
    let mut chars = segment.chars();
    chars.next().map_or_else(String::new, |first| first.to_ascii_uppercase().to_string() + chars.as_str())
}

/// Where a manager lives: its domain and, for sub-managers, the path below the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ManagerLocation {
    domain: DomainName,
    path: Option<ManagerPath>,
}

impl ManagerLocation {
    #[must_use]
    pub const fn new(domain: DomainName, path: Option<ManagerPath>) -> Self {
        Self { domain, path }
    }

    /// Validates both tokens and builds the location.
    ///
    /// # Errors
    /// [`ManagerError::Validation`] for an invalid domain or path.
    pub fn parse(domain: &str, path: Option<&str>) -> Result<Self, ManagerError> {
        let domain = DomainName::try_from(domain)?;
        let path = path.map(ManagerPath::try_from).transpose()?;
        Ok(Self { domain, path })
    }

    #[must_use]
    pub const fn domain(&self) -> &DomainName {
        &self.domain
    }

    #[must_use]
    pub const fn path(&self) -> Option<&ManagerPath> {
        self.path.as_ref()
    }

    /// Location of the sub-manager `manager` below this one.
    ///
    /// # Errors
    /// [`ManagerError::Validation`] if `manager` is not a valid path.
    pub fn child(&self, manager: &str) -> Result<Self, ManagerError> {
        let path = match &self.path {
            Some(path) => path.join(manager)?,
            None => ManagerPath::try_from(manager)?,
        };
        Ok(Self { domain: self.domain.clone(), path: Some(path) })
    }

    fn namespace(&self) -> Vec<String> {
        let mut segments = vec![ucfirst(self.domain.as_str()), MANAGER.to_owned()];
        if let Some(path) = &self.path {
            segments.extend(path.segments().map(ucfirst));
        }
        segments
    }

    fn type_name(&self, tail: &[&str]) -> TypeName {
        let namespace = self.namespace();
        TypeName::join(namespace.iter().map(String::as_str).chain(tail.iter().copied()))
    }

    /// `<Domain>::Manager[::<Sub>...]::<Name>`
    #[must_use]
    pub fn class(&self, name: &ImplName) -> TypeName {
        self.type_name(&[name.as_str()])
    }

    /// `<Domain>::Manager[::<Sub>...]::Iface`
    #[must_use]
    pub fn interface(&self) -> TypeName {
        self.type_name(&[IFACE])
    }

    /// `<Domain>::Manager[::<Sub>...]::Decorator::<Name>`
    #[must_use]
    pub fn local_decorator(&self, name: &ImplName) -> TypeName {
        self.type_name(&[DECORATOR, name.as_str()])
    }

    /// `mshop/<domain>/manager[/<path>]`
    #[must_use]
    pub fn config_prefix(&self) -> String {
        match &self.path {
            Some(path) => format!("{CONFIG_ROOT}/{}/manager/{path}", self.domain),
            None => format!("{CONFIG_ROOT}/{}/manager", self.domain),
        }
    }

    #[must_use]
    pub fn config_key(&self, key: &str) -> String {
        format!("{}/{key}", self.config_prefix())
    }
}

impl fmt::Display for ManagerLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{}/{path}", self.domain),
            None => f.write_str(self.domain.as_str()),
        }
    }
}
