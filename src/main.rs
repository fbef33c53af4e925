//! xdetex CLI - participant data intake for the XDetex study
//!
//! Usage: xdetex <COMMAND>
//!
//! Commands:
//!   guide        Show how to export the required files
//!   check        Check selected files locally
//!   submit       Check and upload selected files
//!   status       Show whether a participant already uploaded
//!   interactive  Menu-driven intake
//!   admin        Admin console

mod commands;
mod ui;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use xdetex::config::Config;
use xdetex::presentation::{Cli, Commands};

use commands::RunContext;
use ui::context::UiContext;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            ui::error::print_error(&e, json);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let loaded = Config::discover(cli.config.as_deref())?;
    if !cli.json {
        ui::output::print_config_warnings(&loaded.warnings);
    }

    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &loaded.config);
    let ctx = RunContext::new(loaded, ui);

    let ok = match &cli.command {
        Commands::Guide => {
            commands::guide::cmd_guide(&ctx)?;
            true
        }
        Commands::Check { paths } => commands::check::cmd_check(&ctx, paths)?,
        Commands::Submit {
            email,
            paths,
            dry_run,
        } => commands::submit::cmd_submit(&ctx, email, paths, *dry_run)?,
        Commands::Status { email } => {
            commands::status::cmd_status(&ctx, email)?;
            true
        }
        Commands::Interactive { email } => {
            commands::interactive::cmd_interactive(&ctx, email)?;
            true
        }
        Commands::Admin(command) => {
            commands::admin::cmd_admin(&ctx, command)?;
            true
        }
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
