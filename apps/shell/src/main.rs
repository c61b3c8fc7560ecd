#![allow(clippy::print_stdout)]

use clap::Parser;
use mshop_logger::Logger;
use mshop_shell::{Cli, log_settings, run};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _logger = Logger::builder().name(env!("CARGO_PKG_NAME")).settings(&log_settings(&cli)?)?.init()?;

    print!("{}", run(&cli)?);
    Ok(())
}
