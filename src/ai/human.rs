use std::io::{self, BufRead, Write};

use crate::error::AgentError;
use crate::game::GameState;

use super::agent::Agent;

/// Interactive provider that reads a column index from a human on stdin.
///
/// Bad input never reaches the game: the prompt loops until the human names
/// a currently available column.
pub struct HumanAgent;

impl HumanAgent {
    pub fn new() -> Self {
        HumanAgent
    }
}

impl Default for HumanAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for HumanAgent {
    fn select_action(&mut self, state: &GameState) -> Result<usize, AgentError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        prompt_column(
            &mut stdin.lock(),
            &mut stdout.lock(),
            &state.available_actions(),
        )
    }

    fn name(&self) -> &str {
        "Human"
    }
}

/// Read a column index from `input`, re-prompting until it is one of
/// `actions`.
///
/// An integer outside `actions` and unparseable text get distinct messages;
/// end of input is an error.
pub fn prompt_column<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    actions: &[usize],
) -> Result<usize, AgentError> {
    loop {
        writeln!(output, "What's your next move? Available columns:")?;
        writeln!(output, "{actions:?}")?;
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(AgentError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            )));
        }

        match line.trim().parse::<i64>() {
            Ok(column) if column >= 0 && actions.contains(&(column as usize)) => {
                return Ok(column as usize);
            }
            Ok(_) => writeln!(output, "Invalid column.")?,
            Err(_) => writeln!(output, "Please enter valid column from: {actions:?}")?,
        }
    }
}
