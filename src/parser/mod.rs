//! Program Parser
//!
//! Turns program text into a stream of typed commands. Characters that are
//! not opcodes are skipped one at a time; an opcode whose arguments cannot
//! be read yields a [`ParseError`] and scanning resumes at the character
//! that broke the read.

pub mod ast;
pub mod lexer;

pub use ast::{ArgKind, Command, Opcode, Spanned};
pub use lexer::Scanner;

use thiserror::Error;

use crate::turtle::Color;

/// Errors reported while reading a command's arguments
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error(
        "{line}:{column}: '{opcode}' expects {expected} for argument {position} of {arity}, found {found}"
    )]
    MalformedArguments {
        opcode: Opcode,
        line: usize,
        column: usize,
        /// 1-based index of the argument that failed
        position: usize,
        arity: usize,
        expected: ArgKind,
        found: String,
    },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::MalformedArguments { line, .. } => *line,
        }
    }

    pub fn opcode(&self) -> Opcode {
        match self {
            ParseError::MalformedArguments { opcode, .. } => *opcode,
        }
    }
}

/// Reads the arguments of one opcode, numbering them for error messages
struct ArgReader<'s, 'a> {
    scanner: &'s mut Scanner<'a>,
    opcode: Opcode,
    line: usize,
    column: usize,
    position: usize,
}

impl ArgReader<'_, '_> {
    fn integer(&mut self) -> Result<i64, ParseError> {
        self.position += 1;
        self.scanner
            .read_integer()
            .ok_or_else(|| self.error(ArgKind::Integer))
    }

    fn float(&mut self) -> Result<f64, ParseError> {
        self.position += 1;
        self.scanner
            .read_float()
            .ok_or_else(|| self.error(ArgKind::Float))
    }

    fn error(&self, expected: ArgKind) -> ParseError {
        let found = if self.scanner.is_at_end() {
            "end of input".to_string()
        } else {
            let ch = self.scanner.peek().unwrap_or_default();
            format!("'{}'", ch.escape_default())
        };
        ParseError::MalformedArguments {
            opcode: self.opcode,
            line: self.line,
            column: self.column,
            position: self.position,
            arity: self.opcode.arity(),
            expected,
            found,
        }
    }
}

/// Streaming command reader
///
/// Yields one item per recognized opcode, in input order.
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    skipped: usize,
}

impl<'a> Parser<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            scanner: Scanner::new(src),
            skipped: 0,
        }
    }

    /// Non-whitespace characters skipped as unknown opcodes so far
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    fn read_command(
        &mut self,
        opcode: Opcode,
        line: usize,
        column: usize,
    ) -> Result<Command, ParseError> {
        let mut args = ArgReader {
            scanner: &mut self.scanner,
            opcode,
            line,
            column,
            position: 0,
        };

        let command = match opcode {
            Opcode::SetColor => {
                let r = args.float()?;
                let g = args.float()?;
                let b = args.float()?;
                Command::SetColor(Color::new(r, g, b))
            }
            Opcode::Goto => {
                let x = args.float()?;
                let y = args.float()?;
                Command::Goto { x, y }
            }
            Opcode::Walk => Command::Walk {
                distance: args.integer()?,
            },
            Opcode::Turn => Command::Turn {
                angle: args.float()?,
            },
            Opcode::Square => Command::Square {
                size: args.float()?,
            },
            Opcode::Row => {
                let count = args.integer()?;
                let size = args.float()?;
                Command::Row { count, size }
            }
            Opcode::Grid => {
                let rows = args.integer()?;
                let cols = args.integer()?;
                let size = args.float()?;
                Command::Grid { rows, cols, size }
            }
            Opcode::RandomWalk => Command::RandomWalk {
                steps: args.integer()?,
            },
            Opcode::Polygon => {
                let sides = args.integer()?;
                let size = args.integer()?;
                Command::Polygon { sides, size }
            }
            Opcode::Fractal => {
                let depth = args.integer()?;
                let recursions = args.integer()?;
                Command::Fractal { depth, recursions }
            }
            Opcode::ToggleFill => Command::ToggleFill,
            Opcode::Reset => Command::Reset,
        };

        Ok(command)
    }
}

impl Iterator for Parser<'_> {
    type Item = Result<Spanned<Command>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.scanner.line();
            let column = self.scanner.column();
            let ch = self.scanner.bump()?;

            let Some(opcode) = Opcode::from_char(ch) else {
                if !ch.is_whitespace() {
                    log::trace!("{}:{}: skipping unknown opcode {:?}", line, column, ch);
                    self.skipped += 1;
                }
                continue;
            };

            let item = self
                .read_command(opcode, line, column)
                .map(|value| Spanned {
                    value,
                    line,
                    column,
                });
            return Some(item);
        }
    }
}

/// Everything read from a complete program
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub commands: Vec<Spanned<Command>>,
    pub errors: Vec<ParseError>,
    /// Unknown non-whitespace characters
    pub skipped: usize,
}

impl Program {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parse a whole program without executing it.
pub fn parse_program(src: &str) -> Program {
    let mut parser = Parser::new(src);
    let mut program = Program::default();

    for item in parser.by_ref() {
        match item {
            Ok(cmd) => program.commands.push(cmd),
            Err(err) => program.errors.push(err),
        }
    }

    program.skipped = parser.skipped();
    program
}
