//! Command Interpreter
//!
//! A [`Session`] owns the turtle, the pen, the random source and the sink
//! for one run. [`Session::run`] drives a whole program: header, every
//! command in input order, then the page terminator.
//!
//! Nothing a program does is fatal. Invalid colors, degenerate polygons and
//! unknown opcodes are dropped without output; commands with unreadable
//! arguments are skipped and reported in the [`RunSummary`].

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::parser::{Command, ParseError, Parser};
use crate::random::{self, RandomSource};
use crate::sink::Sink;
use crate::turtle::{Color, Pen, Turtle};

/// Page bounding box in points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSize {
    pub width: u32,
    pub height: u32,
}

impl PageSize {
    /// A4 in points
    pub const A4: PageSize = PageSize {
        width: 595,
        height: 841,
    };
}

impl Default for PageSize {
    fn default() -> Self {
        Self::A4
    }
}

/// Outcome of a complete run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    /// Commands dispatched
    pub executed: usize,
    /// Unknown opcode characters skipped
    pub skipped: usize,
    /// Commands dropped because their arguments could not be read
    pub diagnostics: Vec<ParseError>,
}

impl RunSummary {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Interpreter state for one run
pub struct Session<S, R = fastrand::Rng> {
    pub(crate) turtle: Turtle,
    pub(crate) pen: Pen,
    pub(crate) sink: S,
    pub(crate) rng: R,
    page: PageSize,
}

impl<S: Sink> Session<S> {
    /// Session with the default generator, seeded once from `seed` or the
    /// clock.
    pub fn new(sink: S, page: PageSize, seed: Option<u64>) -> Self {
        Self::with_random(sink, random::seeded(seed), page)
    }
}

impl<S: Sink, R: RandomSource> Session<S, R> {
    pub fn with_random(sink: S, rng: R, page: PageSize) -> Self {
        Self {
            turtle: Turtle::default(),
            pen: Pen::default(),
            sink,
            rng,
            page,
        }
    }

    pub fn turtle(&self) -> &Turtle {
        &self.turtle
    }

    pub fn pen(&self) -> &Pen {
        &self.pen
    }

    pub fn page(&self) -> PageSize {
        self.page
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Put turtle and pen in their starting state and emit the document
    /// header. The pen reset itself draws nothing.
    pub fn begin(&mut self) -> Result<()> {
        self.turtle.reset();
        self.pen.reset();
        self.sink.header(self.page.width, self.page.height)?;
        Ok(())
    }

    /// Emit the page terminator and flush the sink.
    pub fn finish(&mut self) -> Result<()> {
        self.sink.show_page()?;
        self.sink.flush()?;
        Ok(())
    }

    /// Interpret a complete program, header to terminator.
    pub fn run(&mut self, src: &str) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        let mut parser = Parser::new(src);

        self.begin()?;

        for item in parser.by_ref() {
            match item {
                Ok(cmd) => {
                    log::trace!("{}:{}: {:?}", cmd.line, cmd.column, cmd.value);
                    self.execute(&cmd.value)?;
                    summary.executed += 1;
                }
                Err(err) => {
                    log::warn!("skipping command: {}", err);
                    summary.diagnostics.push(err);
                }
            }
        }

        self.finish()?;

        summary.skipped = parser.skipped();
        log::info!(
            "interpreted {} commands ({} skipped characters, {} malformed)",
            summary.executed,
            summary.skipped,
            summary.diagnostics.len()
        );

        Ok(summary)
    }

    /// Dispatch a single command against the current state.
    pub fn execute(&mut self, command: &Command) -> Result<()> {
        match *command {
            Command::SetColor(color) => {
                self.set_color(color)?;
            }
            Command::Goto { x, y } => self.goto(x, y)?,
            Command::Walk { distance } => {
                self.walk(distance as f64)?;
                self.sink.stroke()?;
            }
            Command::Turn { angle } => self.turn(angle),
            Command::Square { size } => self.square(size)?,
            Command::Row { count, size } => self.row(count, size)?,
            Command::Grid { rows, cols, size } => self.grid(rows, cols, size)?,
            Command::RandomWalk { steps } => self.random_walk(steps)?,
            Command::Polygon { sides, size } => {
                if self.polygon(sides, size)? {
                    self.sink.stroke()?;
                }
            }
            Command::Fractal { depth, recursions } => {
                self.fractal(depth, recursions);
                self.sink.stroke()?;
            }
            Command::ToggleFill => self.pen.toggle_fill(),
            Command::Reset => self.reset(),
        }
        Ok(())
    }

    /// Apply `color` if it is valid. Returns whether it was applied.
    pub fn set_color(&mut self, color: Color) -> Result<bool> {
        if !color.is_valid() {
            log::debug!("ignoring out-of-range color {:?}", color);
            return Ok(false);
        }
        self.pen.color = color;
        self.sink.set_color(color)?;
        Ok(true)
    }

    /// Jump to `(x, y)` without drawing.
    pub fn goto(&mut self, x: f64, y: f64) -> Result<()> {
        self.turtle.move_to(x, y);
        self.sink.move_to(x, y)?;
        Ok(())
    }

    /// Move `distance` along the heading, drawing a line.
    ///
    /// Lines are drawn whether or not the pen is down.
    pub fn walk(&mut self, distance: f64) -> Result<()> {
        let target = self.turtle.ahead(distance);
        self.sink.line_to(target.x, target.y)?;
        self.turtle.position = target;
        Ok(())
    }

    pub fn turn(&mut self, angle: f64) {
        self.turtle.turn(angle);
    }

    /// Turtle back to the origin; the pen is left alone.
    pub fn reset(&mut self) {
        self.turtle.reset();
    }
}
