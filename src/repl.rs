//! The interactive conversation loop.
//!
//! Reads one line at a time, hands it to the [`Responder`], and prints the
//! reply. The loop ends on a case-insensitive "exit" or when the input
//! stream closes. Reader and writer are generic so the loop is testable
//! without a terminal.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::responder::Responder;

/// Command that ends the conversation, compared case-insensitively.
const EXIT_COMMAND: &str = "exit";

const BANNER: &[&str] = &[
    "Hello! I'm your friendly chatbot.",
    "I can answer general knowledge questions using Wikipedia.",
    "Type 'exit' to end the conversation.",
];

const FAREWELL: &str = "Goodbye! Have a great day!";

/// Run the conversation loop until "exit" or end-of-input.
pub fn run<R, W>(mut input: R, mut output: W, responder: &mut Responder) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    for line in BANNER {
        writeln!(output, "Chatbot: {line}")?;
    }

    let mut buffer = String::new();
    loop {
        write!(output, "You: ")?;
        output.flush()?;

        buffer.clear();
        if input.read_line(&mut buffer)? == 0 {
            // Input stream closed
            writeln!(output)?;
            writeln!(output, "Chatbot: {FAREWELL}")?;
            return Ok(());
        }

        let user_input = buffer.trim();
        if user_input.eq_ignore_ascii_case(EXIT_COMMAND) {
            writeln!(output, "Chatbot: {FAREWELL}")?;
            return Ok(());
        }

        let reply = responder.respond(user_input);
        writeln!(output, "Chatbot: {reply}")?;
    }
}
