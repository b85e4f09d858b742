//! Command implementations for the Palaver CLI.

use std::io;

use crate::cli::args::{AskArgs, Command, PalaverArgs};
use crate::error::Result;
use crate::intent::table;
use crate::knowledge::WikipediaClient;
use crate::repl;
use crate::responder::Responder;

/// Execute a CLI command.
pub fn execute_command(args: PalaverArgs) -> Result<()> {
    match &args.command {
        Some(Command::Ask(ask_args)) => ask(ask_args.clone(), &args),
        Some(Command::Chat) | None => chat(&args),
    }
}

/// Build a responder wired to the configured summary endpoint.
fn build_responder(args: &PalaverArgs) -> Result<Responder> {
    let table = table::builtin()?;
    let provider = WikipediaClient::new(&args.endpoint)?;
    Responder::new(table, Box::new(provider))
}

/// Run the interactive chat loop on stdin/stdout.
fn chat(args: &PalaverArgs) -> Result<()> {
    let mut responder = build_responder(args)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run(stdin.lock(), stdout.lock(), &mut responder)
}

/// Answer a single question and exit.
fn ask(ask_args: AskArgs, args: &PalaverArgs) -> Result<()> {
    let mut responder = build_responder(args)?;

    println!("{}", responder.respond(ask_args.question.trim()));
    Ok(())
}
