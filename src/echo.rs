use std::io::{BufRead, Write};

use tracing::debug;

use crate::Result;

pub const PROMPT: &str = "> ";

/// Token that ends the session when it is the whole (trimmed) line.
pub const EXIT: &str = "exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EchoState {
    AwaitingInput,
    Terminated,
}

/// Outcome of feeding one line to the echo loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Reply(String),
    Exit,
}

/// Reverse `text` char by char.
pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

pub fn step(line: &str) -> Step {
    let text = line.trim();
    if text.is_empty() || text == EXIT {
        return Step::Exit;
    }
    Step::Reply(format!("{} -> {}", text, reverse(text)))
}

/// Prompt, read a line, answer, until an empty line, `exit`, or end of
/// input.
pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<()> {
    let mut state = EchoState::AwaitingInput;
    let mut line = String::new();

    while state == EchoState::AwaitingInput {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("stdin closed");
            state = EchoState::Terminated;
            continue;
        }

        match step(&line) {
            Step::Reply(reply) => {
                writeln!(output, "{}", reply)?;
                output.flush()?;
            }
            Step::Exit => state = EchoState::Terminated,
        }
    }

    Ok(())
}
