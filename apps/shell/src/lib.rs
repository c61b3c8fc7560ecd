//! The `mshop` command line tool.

mod args;
mod commands;

pub use crate::args::{Cli, Command};
pub use crate::commands::{context, log_settings, run};
