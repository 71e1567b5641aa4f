//! CLI for the tabby tab launcher.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{run_export, run_import, run_open, run_preview};

/// Top-level CLI. Invoked without a subcommand it opens a random batch of
/// tabs, which keeps the bare `tabby` invocation argument-free.
#[derive(Debug, Parser)]
#[command(name = "tabby")]
#[command(about = "Open 30 random browser tabs from a built-in catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Open 30 random tabs in the default browser (the default action).
    Open,

    /// Print the URLs a run would open, without opening anything.
    Preview,

    /// Write a random selection to a tab-list JSON file, grouped by domain.
    Export {
        /// Output path.
        #[arg(default_value = tabby_core::export::DEFAULT_EXPORT_FILE)]
        path: PathBuf,
    },

    /// Open every tab from a tab-list JSON file.
    Import {
        /// Path to the tab-list file.
        path: PathBuf,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        match cli.command.unwrap_or(CliCommand::Open) {
            CliCommand::Open => run_open()?,
            CliCommand::Preview => run_preview()?,
            CliCommand::Export { path } => run_export(&path)?,
            CliCommand::Import { path } => run_import(&path)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
