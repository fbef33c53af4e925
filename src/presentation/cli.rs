//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --config) are inherited by all subcommands
//! - Participant commands (guide, check, submit, status, interactive) and the
//!   admin console share one binary

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::ports::EmailRound;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// xdetex - participant data intake for the XDetex study
#[derive(Parser, Debug)]
#[command(name = "xdetex")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'xdetex guide' to see which files to export from Facebook.")]
pub struct Cli {
    /// Output NDJSON events for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ./xdetex.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show how to export the required files from Facebook
    Guide,

    /// Check selected files locally without uploading
    Check {
        /// JSON files and/or ZIP archives
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<PathBuf>,
    },

    /// Check selected files and upload them
    Submit {
        /// Participant email
        #[arg(long)]
        email: String,

        /// JSON files and/or ZIP archives
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<PathBuf>,

        /// Stop before uploading
        #[arg(long)]
        dry_run: bool,
    },

    /// Show whether a participant already uploaded
    Status {
        /// Participant email
        #[arg(long)]
        email: String,
    },

    /// Add, review and submit files step by step
    Interactive {
        /// Participant email
        #[arg(long)]
        email: String,
    },

    /// Admin console
    #[command(subcommand)]
    Admin(AdminCommands),
}

#[derive(Subcommand, Debug)]
pub enum AdminCommands {
    /// List participants
    Participants {
        /// Page number (1-based)
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Rows per page (defaults to [admin] page_size)
        #[arg(long)]
        page_size: Option<u32>,

        /// List participants who uploaded first
        #[arg(long)]
        sort_by_status: bool,
    },

    /// List a participant's stored files
    Files {
        /// Participant email
        email: String,
    },

    /// Delete a participant's stored files
    Delete {
        /// Participant email
        email: String,

        /// Delete only this file
        #[arg(long, value_name = "NAME")]
        file: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Download every collected upload as one ZIP
    Download {
        /// Output file
        #[arg(short, long, default_value = "all_uploads.zip")]
        output: PathBuf,
    },

    /// Send a notification email round (1, 2 or all)
    SendRound {
        #[arg(value_parser = parse_round)]
        round: EmailRound,
    },
}

fn parse_round(s: &str) -> Result<EmailRound, String> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_submit_with_global_flags() {
        let cli = Cli::try_parse_from([
            "xdetex",
            "submit",
            "--email",
            "p@example.com",
            "export.zip",
            "--json",
            "-vv",
        ])
        .unwrap();

        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Submit {
                email,
                paths,
                dry_run,
            } => {
                assert_eq!(email, "p@example.com");
                assert_eq!(paths, vec![PathBuf::from("export.zip")]);
                assert!(!dry_run);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn check_requires_paths() {
        assert!(Cli::try_parse_from(["xdetex", "check"]).is_err());
    }

    #[test]
    fn parses_send_round() {
        let cli = Cli::try_parse_from(["xdetex", "admin", "send-round", "all"]).unwrap();
        match cli.command {
            Commands::Admin(AdminCommands::SendRound { round }) => {
                assert_eq!(round, EmailRound::All)
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(Cli::try_parse_from(["xdetex", "admin", "send-round", "3"]).is_err());
    }

    #[test]
    fn download_defaults_output() {
        let cli = Cli::try_parse_from(["xdetex", "admin", "download"]).unwrap();
        match cli.command {
            Commands::Admin(AdminCommands::Download { output }) => {
                assert_eq!(output, PathBuf::from("all_uploads.zip"))
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
