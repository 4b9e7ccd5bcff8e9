//! turtle-ps
//!
//! An interpreter for a small turtle drawing language that emits
//! PostScript.
//!
//! This library provides:
//! - Parsing of single-letter commands with numeric arguments
//! - Turtle and pen state with the drawing primitives built on them
//! - A shape library (squares, rows, grids, polygons, random walks)
//! - Pluggable output sinks (PostScript, JSON, in-memory)
//! - Configuration management

pub mod cli;
pub mod config;
pub mod error;
pub mod interpreter;
pub mod parser;
pub mod random;
pub mod shapes;
pub mod sink;
pub mod turtle;

// Re-exports for clean public API
pub use config::Config;
pub use error::{Error, Result};
pub use interpreter::{PageSize, RunSummary, Session};
pub use parser::{Command, Opcode, ParseError, parse_program};
pub use random::RandomSource;
pub use sink::{Primitive, RecordingSink, Sink};
pub use turtle::{Color, Pen, Turtle};
