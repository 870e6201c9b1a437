#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, Stdin, Stdout, Write};

use crate::engine::{column_from_label, Grid, COLS};
use rand::rngs::SmallRng;

use super::{Seat, SeatError};

/// Why a line of input was not accepted as a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    NotANumber(String),
    OutOfRange(i64),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NotANumber(s) => write!(f, "'{}' is not a number", s),
            InputError::OutOfRange(n) => {
                write!(f, "{} is not a valid column, please pick one in [1,{}]", n, COLS)
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Parse a column label typed by the player (1-based) into a grid column.
pub fn parse_column(input: &str) -> Result<usize, InputError> {
    let input = input.trim();
    let label: i64 = input
        .parse()
        .map_err(|_| InputError::NotANumber(input.to_string()))?;
    column_from_label(label).ok_or(InputError::OutOfRange(label))
}

/// Source of input lines for [`CliPlayer`].
pub trait LineInput {
    /// Append one line to `buf`; returns 0 at end of input.
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl<T: BufRead> LineInput for T {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Process stdin, locked only for the duration of each read so that two
/// interactive seats can share the terminal.
pub struct StdinInput(Stdin);

impl LineInput for StdinInput {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        self.0.read_line(buf)
    }
}

/// Interactive player reading columns from a line-oriented stream.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<StdinInput, Stdout> {
    /// Player bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(StdinInput(io::stdin()), io::stdout())
    }
}

impl<R: LineInput, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Everything written to the player so far (prompts and error messages).
    pub fn output(&self) -> &W {
        &self.output
    }

    fn next_line(&mut self) -> Result<String, SeatError> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Err(SeatError::InputClosed),
            Ok(_) => Ok(line),
            Err(e) => {
                log::warn!("failed to read a move: {}", e);
                Err(e.into())
            }
        }
    }
}

impl<R: LineInput, W: Write> Seat for CliPlayer<R, W> {
    fn name(&self) -> &str {
        "human"
    }

    fn choose_column(&mut self, _rng: &mut SmallRng, _grid: &Grid) -> Result<usize, SeatError> {
        loop {
            write!(self.output, "Enter column [1-{}] (or 'help'): ", COLS)?;
            self.output.flush()?;
            let line = self.next_line()?;
            let line = line.trim();

            if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
                return Err(SeatError::Resigned);
            }
            if line.eq_ignore_ascii_case("help") {
                print_help(&mut self.output)?;
                continue;
            }

            match parse_column(line) {
                Ok(column) => return Ok(column),
                Err(e) => {
                    log::debug!("rejected input {:?}: {}", line, e);
                    writeln!(self.output, "✗ {}", e)?;
                }
            }
        }
    }
}

fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "  Type a column number from 1 to {} and press ENTER.", COLS)?;
    writeln!(out, "  Your piece falls to the lowest free cell of that column.")?;
    writeln!(out, "  Choosing a full column loses your turn.")?;
    writeln!(out, "  Connect four pieces in a line to win. Type 'quit' to resign.")?;
    writeln!(out)
}
