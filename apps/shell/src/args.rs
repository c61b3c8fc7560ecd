//! # CLI Argument Definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mshop")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Resolve and inspect mshop managers")]
pub struct Cli {
    /// Settings file (toml, json, yaml); `MSHOP__` variables override it
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Site code placed in the context locale
    #[arg(long, global = true, default_value = "default")]
    pub site: String,

    /// Log level (error, warn, info, debug, trace); overrides the `log` settings section
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the manager type and its decorator chain
    Resolve {
        /// Manager path, e.g. `supplier/lists/type`
        path: String,
    },
    /// Print the search attributes of a manager as JSON
    Attributes {
        /// Manager path, e.g. `supplier/address`
        path: String,
        /// Include the attributes of the configured sub-managers
        #[arg(long)]
        with_sub: bool,
    },
    /// List registered manager and decorator types
    Registry {},
}
