//! Command line argument parsing for the Palaver CLI using clap.

use clap::{Parser, Subcommand};

use crate::knowledge::wikipedia::DEFAULT_ENDPOINT;

/// Palaver - a small conversational responder backed by Wikipedia
#[derive(Parser, Debug, Clone)]
#[command(name = "palaver")]
#[command(about = "A small conversational responder backed by Wikipedia summaries")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PalaverArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// MediaWiki API endpoint to query for summaries
    #[arg(long, value_name = "URL", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Subcommand to execute (defaults to chat)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl PalaverArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Start the interactive chat loop
    Chat,

    /// Answer a single question and exit
    Ask(AskArgs),
}

/// Arguments for asking a single question
#[derive(Parser, Debug, Clone)]
pub struct AskArgs {
    /// The question to answer
    #[arg(value_name = "QUESTION")]
    pub question: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_no_subcommand_defaults_to_chat() {
        let args = PalaverArgs::try_parse_from(["palaver"]).unwrap();

        assert!(args.command.is_none());
        assert_eq!(args.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_ask_command() {
        let args =
            PalaverArgs::try_parse_from(["palaver", "ask", "what is the capital of France"])
                .unwrap();

        match args.command {
            Some(Command::Ask(ask_args)) => {
                assert_eq!(ask_args.question, "what is the capital of France");
            }
            other => panic!("Expected Ask command, got {other:?}"),
        }
    }

    #[test]
    fn test_endpoint_override() {
        let args = PalaverArgs::try_parse_from([
            "palaver",
            "--endpoint",
            "http://localhost:8080/w/api.php",
            "chat",
        ])
        .unwrap();

        assert_eq!(args.endpoint, "http://localhost:8080/w/api.php");
        assert!(matches!(args.command, Some(Command::Chat)));
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = PalaverArgs::try_parse_from(["palaver"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Verbose flag
        let args = PalaverArgs::try_parse_from(["palaver", "-vv"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        // Quiet flag
        let args = PalaverArgs::try_parse_from(["palaver", "--quiet"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }
}
