use clap::Parser;
use log::debug;
use std::process::ExitCode;
use stirling_dock_core::actions;
use stirling_dock_core::config;
use stirling_dock_core::docker::SystemRunner;
use stirling_dock_core::error::Result;
use stirling_dock_core::status;

use crate::cli_args::{Args, Command};

mod cli_args;

fn execute() -> Result<bool> {
    let args = Args::parse();

    let config_path = config::get_config_path(&args.config_path);
    debug!("Config path: `{config_path}`");

    let container = config::load_config(&config_path)?.container_ref();
    let runner = SystemRunner;

    match args.command {
        Command::Start => {
            let outcome = actions::start_container(&runner, &container);
            for line in outcome.log_lines() {
                println!("{line}");
            }
            Ok(outcome.succeeded)
        }
        Command::Stop => {
            let outcome = actions::stop_container(&runner, &container);
            for line in outcome.log_lines() {
                println!("{line}");
            }
            Ok(outcome.succeeded)
        }
        Command::Status => {
            let state = status::poll_state(&runner, &container);
            println!("{}", state.label());
            Ok(true)
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
