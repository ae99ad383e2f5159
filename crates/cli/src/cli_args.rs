//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure for the `sdock`
//! binary using the `clap` crate.

use clap::{Parser, Subcommand};

/// Command-line arguments for the stirling-dock CLI tool.
///
/// Headless counterpart to the GUI: the same container, the same config,
/// driven from scripts or a terminal.
#[derive(Parser, Debug)]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the config file YAML.
    ///
    /// If not provided, defaults to `~/.stirling-dock/config.yml`.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start the container, creating it first if it has never been run.
    Start,
    /// Stop the container.
    Stop,
    /// Print whether the container is running, stopped or not created.
    Status,
}
