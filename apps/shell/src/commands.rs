use crate::args::{Cli, Command};
use anyhow::{Context as _, Result};
use mshop::domain::locale::Locale;
use mshop::kernel::Context;
use mshop::kernel::config::{Settings, load_settings};
use mshop::manager::{Manager, decorator_names};
use mshop_logger::LogSettings;
use std::fmt::Write as _;

/// Settings from `--config`, or empty settings.
fn settings(cli: &Cli) -> Result<Settings> {
    match &cli.config {
        Some(path) => load_settings(path).with_context(|| format!("Failed to load {}", path.display())),
        None => Ok(Settings::default()),
    }
}

/// The `log` section of the settings with `--log-level` applied on top.
///
/// # Errors
/// Returns an error if the settings file cannot be loaded or the `log` section is malformed.
pub fn log_settings(cli: &Cli) -> Result<LogSettings> {
    let mut log = match settings(cli)?.get("log") {
        Some(section) => serde_json::from_value(section.clone()).context("Invalid `log` section")?,
        None => LogSettings { level: "warn".to_owned(), ..LogSettings::default() },
    };
    if let Some(level) = &cli.log_level {
        log.level.clone_from(level);
    }
    Ok(log)
}

/// Request context for the command line options.
///
/// # Errors
/// Returns an error if the settings file cannot be loaded.
pub fn context(cli: &Cli) -> Result<Context> {
    Ok(Context::builder().locale(Locale::new(cli.site.as_str())).config(settings(cli)?).build())
}

/// Runs `cli.command` and returns what should be printed.
///
/// # Errors
/// Returns an error if the context cannot be built or the manager cannot be resolved.
pub fn run(cli: &Cli) -> Result<String> {
    let shop = mshop::shop(context(cli)?)?;

    match &cli.command {
        Command::Resolve { path } => {
            let manager = shop.create(path).with_context(|| format!("Cannot resolve `{path}`"))?;
            let mut out = String::new();
            writeln!(out, "{}", mshop::manager::innermost(&manager).name())?;
            for decorator in decorator_names(&manager) {
                writeln!(out, "  + {decorator}")?;
            }
            Ok(out)
        },
        Command::Attributes { path, with_sub } => {
            let manager = shop.create(path).with_context(|| format!("Cannot resolve `{path}`"))?;
            let attributes = manager.search_attributes(*with_sub)?;
            tracing::debug!(path = %path, count = attributes.len(), "Search attributes collected");
            Ok(serde_json::to_string_pretty(&attributes)? + "\n")
        },
        Command::Registry {} => {
            let registry = shop.resolver().registry();
            let mut out = String::new();
            for name in registry.managers() {
                writeln!(out, "manager    {name}")?;
            }
            for name in registry.decorators() {
                writeln!(out, "decorator  {name}")?;
            }
            Ok(out)
        },
    }
}
