//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use anyhow::Result;
use clap::Parser;

use commands::Commands;

/// Pickup - incremental, resumable package builder
///
/// Compile an ordered list of Java packages, stopping at the first package
/// with compiler diagnostics and resuming where the last run stopped.
#[derive(Parser, Debug)]
#[command(name = "pickup")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Java compiler to run (overrides pickup.toml and global config)
    #[arg(long, global = true, env = "PICKUP_JAVAC")]
    pub javac: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        if let Some(cmd) = self.command {
            cmd.run(self.javac.as_deref()).await
        } else {
            // No subcommand provided, show help
            use clap::CommandFactory;
            let mut cmd = Self::command();
            cmd.print_help()?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_resume_conflicts_with_package() {
        let parsed = Cli::try_parse_from(["pickup", "build", "--resume", "--package", "a"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["pickup", "status", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Some(Commands::Status)));
    }

    #[test]
    fn test_repeated_extra_args() {
        let cli = Cli::try_parse_from([
            "pickup",
            "build",
            "--extra-arg=-warnAll",
            "--extra-arg",
            "-g",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Build { extra_arg, resume, .. }) => {
                assert!(!resume);
                assert_eq!(extra_arg, vec!["-warnAll", "-g"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
