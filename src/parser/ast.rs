//! Command Types
//!
//! Typed commands, one variant per opcode. No execution logic here.

use std::fmt;

use crate::turtle::Color;

/// Kind of a numeric argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    Integer,
    Float,
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgKind::Integer => f.write_str("an integer"),
            ArgKind::Float => f.write_str("a number"),
        }
    }
}

/// The closed set of command letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    SetColor,
    Goto,
    Walk,
    Turn,
    Square,
    Row,
    Grid,
    RandomWalk,
    Polygon,
    Fractal,
    ToggleFill,
    Reset,
}

impl Opcode {
    /// Opcodes are case-sensitive; lowercase letters are not commands.
    pub fn from_char(ch: char) -> Option<Self> {
        let op = match ch {
            'C' => Opcode::SetColor,
            'G' => Opcode::Goto,
            'W' => Opcode::Walk,
            'T' => Opcode::Turn,
            'S' => Opcode::Square,
            'R' => Opcode::Row,
            'M' => Opcode::Grid,
            'Z' => Opcode::RandomWalk,
            'P' => Opcode::Polygon,
            'X' => Opcode::Fractal,
            'F' => Opcode::ToggleFill,
            'U' => Opcode::Reset,
            _ => return None,
        };
        Some(op)
    }

    pub fn letter(self) -> char {
        match self {
            Opcode::SetColor => 'C',
            Opcode::Goto => 'G',
            Opcode::Walk => 'W',
            Opcode::Turn => 'T',
            Opcode::Square => 'S',
            Opcode::Row => 'R',
            Opcode::Grid => 'M',
            Opcode::RandomWalk => 'Z',
            Opcode::Polygon => 'P',
            Opcode::Fractal => 'X',
            Opcode::ToggleFill => 'F',
            Opcode::Reset => 'U',
        }
    }

    /// Argument kinds, in reading order
    pub fn signature(self) -> &'static [ArgKind] {
        use ArgKind::{Float, Integer};
        match self {
            Opcode::SetColor => &[Float, Float, Float],
            Opcode::Goto => &[Float, Float],
            Opcode::Walk => &[Integer],
            Opcode::Turn => &[Float],
            Opcode::Square => &[Float],
            Opcode::Row => &[Integer, Float],
            Opcode::Grid => &[Integer, Integer, Float],
            Opcode::RandomWalk => &[Integer],
            Opcode::Polygon => &[Integer, Integer],
            Opcode::Fractal => &[Integer, Integer],
            Opcode::ToggleFill | Opcode::Reset => &[],
        }
    }

    pub fn arity(self) -> usize {
        self.signature().len()
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A fully-read command with typed arguments
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    SetColor(Color),
    Goto { x: f64, y: f64 },
    Walk { distance: i64 },
    Turn { angle: f64 },
    Square { size: f64 },
    Row { count: i64, size: f64 },
    Grid { rows: i64, cols: i64, size: f64 },
    RandomWalk { steps: i64 },
    Polygon { sides: i64, size: i64 },
    Fractal { depth: i64, recursions: i64 },
    ToggleFill,
    Reset,
}

impl Command {
    pub fn opcode(&self) -> Opcode {
        match self {
            Command::SetColor(_) => Opcode::SetColor,
            Command::Goto { .. } => Opcode::Goto,
            Command::Walk { .. } => Opcode::Walk,
            Command::Turn { .. } => Opcode::Turn,
            Command::Square { .. } => Opcode::Square,
            Command::Row { .. } => Opcode::Row,
            Command::Grid { .. } => Opcode::Grid,
            Command::RandomWalk { .. } => Opcode::RandomWalk,
            Command::Polygon { .. } => Opcode::Polygon,
            Command::Fractal { .. } => Opcode::Fractal,
            Command::ToggleFill => Opcode::ToggleFill,
            Command::Reset => Opcode::Reset,
        }
    }
}

/// A value tagged with the 1-based position of its opcode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spanned<T> {
    pub value: T,
    pub line: usize,
    pub column: usize,
}
