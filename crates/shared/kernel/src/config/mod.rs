use config::{Config, Environment, File};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fmt::Debug;
use std::path::Path;
use tracing::{debug, info};

/// Separator between the segments of a configuration path (`mshop/supplier/manager/name`).
pub const PATH_SEPARATOR: char = '/';

/// Prefix of environment variables overriding file settings.
pub const ENV_PREFIX: &str = "MSHOP";

#[mshop_derive::mshop_error]
pub enum ConfigError {
    #[error("Config source error{}: {source}", format_context(.context))]
    Source { source: config::ConfigError, context: Option<Cow<'static, str>> },

    #[error("Invalid config value{}: {message}", format_context(.context))]
    InvalidValue { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal config fault{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Read access to hierarchical configuration, addressed by slash separated paths.
///
/// Implementors only provide [`ConfigLookup::lookup`]. The typed helpers treat a missing
/// key and an explicit `null` the same way and reject values of the wrong type.
pub trait ConfigLookup: Debug + Send + Sync {
    /// Raw value stored at `path`, if any.
    fn lookup(&self, path: &str) -> Option<Value>;

    /// String at `path`, or `default` when unset.
    ///
    /// # Errors
    /// [`ConfigError::InvalidValue`] if the value is not a string.
    fn string(&self, path: &str, default: &str) -> Result<String, ConfigError> {
        match self.lookup(path) {
            None | Some(Value::Null) => Ok(default.to_owned()),
            Some(Value::String(value)) => Ok(value),
            Some(other) => Err(invalid(path, "a string", &other)),
        }
    }

    /// List of strings at `path`, empty when unset.
    ///
    /// # Errors
    /// [`ConfigError::InvalidValue`] if the value is not an array of strings.
    fn strings(&self, path: &str) -> Result<Vec<String>, ConfigError> {
        match self.lookup(path) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(value) => Ok(value),
                    other => Err(invalid(path, "a list of strings", &other)),
                })
                .collect(),
            Some(other) => Err(invalid(path, "a list of strings", &other)),
        }
    }
}

fn invalid(path: &str, expected: &str, found: &Value) -> ConfigError {
    ConfigError::InvalidValue {
        message: format!("expected {expected}, found {found}").into(),
        context: Some(path.to_owned().into()),
    }
}

/// In-memory configuration tree.
///
/// Nested JSON objects form the hierarchy, so `mshop/supplier/manager/name` reads
/// `{"mshop": {"supplier": {"manager": {"name": ...}}}}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    root: Value,
}

impl Default for Settings {
    fn default() -> Self {
        Self { root: Value::Object(Map::new()) }
    }
}

impl Settings {
    /// Wraps an existing JSON document.
    ///
    /// # Errors
    /// [`ConfigError::InvalidValue`] if `root` is not an object.
    pub fn from_value(root: Value) -> Result<Self, ConfigError> {
        if root.is_object() {
            Ok(Self { root })
        } else {
            Err(ConfigError::InvalidValue {
                message: "settings root must be an object".into(),
                context: None,
            })
        }
    }

    /// Value stored at `path`.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Value> {
        segments(path).try_fold(&self.root, |node, key| node.as_object()?.get(key))
    }

    /// Stores `value` at `path`, creating intermediate objects and replacing scalars in the way.
    pub fn insert(&mut self, path: &str, value: Value) {
        let mut keys = segments(path).peekable();
        let mut node = &mut self.root;

        while let Some(key) = keys.next() {
            if !node.is_object() {
                *node = Value::Object(Map::new());
            }
            let Value::Object(map) = node else {
                return;
            };
            if keys.peek().is_none() {
                map.insert(key.to_owned(), value);
                return;
            }
            node = map.entry(key.to_owned()).or_insert_with(|| Value::Object(Map::new()));
        }
    }

    /// Builder-style [`Settings::insert`].
    #[must_use]
    pub fn with(mut self, path: &str, value: Value) -> Self {
        self.insert(path, value);
        self
    }

    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.root
    }
}

impl ConfigLookup for Settings {
    fn lookup(&self, path: &str) -> Option<Value> {
        self.get(path).cloned()
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(PATH_SEPARATOR).filter(|segment| !segment.is_empty())
}

/// Loads [`Settings`] from a file with environment overrides on top.
///
/// 1. **Base File**: the format follows the extension (`.toml`, `.json`, `.yaml`, ...).
/// 2. **Environment Overrides**: variables prefixed with `MSHOP__`, nested with double
///    underscores. `MSHOP__MSHOP__SUPPLIER__MANAGER__NAME=Mysql` sets
///    `mshop/supplier/manager/name`. Scalars are parsed, so lists still come from the file.
///
/// # Errors
/// [`ConfigError::Source`] if the file is missing or malformed,
/// [`ConfigError::InvalidValue`] if the document root is not a table.
///
/// # Example
/// ```rust,no_run
/// use mshop_kernel::config::{ConfigLookup, load_settings};
///
/// let settings = load_settings("config/shop.toml").unwrap();
/// let name = settings.string("mshop/supplier/manager/name", "Standard").unwrap();
/// ```
pub fn load_settings(path: impl AsRef<Path>) -> Result<Settings, ConfigError> {
    load_layered(path.as_ref(), environment())
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).separator("__").try_parsing(true)
}

fn load_layered(path: &Path, environment: Environment) -> Result<Settings, ConfigError> {
    info!("Loading settings from {}", path.display());

    let root = Config::builder()
        .add_source(File::from(path).required(true))
        .add_source(environment)
        .build()
        .context("Failed to build settings")?
        .try_deserialize::<Value>()
        .context("Failed to deserialize settings")?;

    debug!(keys = root.as_object().map_or(0, Map::len), "Settings loaded");
    Settings::from_value(root).context(path.display().to_string())
}
