//! Shape Library
//!
//! Compound drawing operations built from the session's primitives.

use crate::error::Result;
use crate::interpreter::Session;
use crate::random::RandomSource;
use crate::sink::Sink;
use crate::turtle::Color;

/// Spacing between neighbouring squares, as a multiple of their size
pub const SQUARE_SPACING: f64 = 1.5;

/// Length of one random-walk segment
pub const RANDOM_STEP: f64 = 10.0;

impl<S: Sink, R: RandomSource> Session<S, R> {
    /// Filled square of side `size` centered on the turtle. The turtle
    /// does not move.
    pub fn square(&mut self, size: f64) -> Result<()> {
        let half = size / 2.0;
        self.sink.rect_fill(
            self.turtle.x() - half,
            self.turtle.y() - half,
            size,
            size,
        )?;
        Ok(())
    }

    /// `count` squares left to right, `1.5 * size` apart.
    ///
    /// The final forward step is taken back, so the turtle ends on the last
    /// square: `(count - 1) * 1.5 * size` from where it started. With no
    /// squares it ends one step to the left.
    pub fn row(&mut self, count: i64, size: f64) -> Result<()> {
        let step = size * SQUARE_SPACING;
        for _ in 1..=count {
            self.square(size)?;
            self.goto(self.turtle.x() + step, self.turtle.y())?;
        }
        self.goto(self.turtle.x() - step, self.turtle.y())
    }

    /// `rows` rows of `cols` squares. Each new row starts back at the
    /// original x, `1.5 * size` higher; there is no advance after the last.
    pub fn grid(&mut self, rows: i64, cols: i64, size: f64) -> Result<()> {
        let start_x = self.turtle.x();
        for i in 1..=rows {
            self.row(cols, size)?;
            if i == rows {
                break;
            }
            self.goto(start_x, self.turtle.y() + size * SQUARE_SPACING)?;
        }
        Ok(())
    }

    /// Equilateral polygon of `sides` edges of length `size`, filled when
    /// the pen is.
    ///
    /// The exterior angle is `360 / sides` in whole degrees, so shapes
    /// whose side count does not divide 360 do not quite close. Returns
    /// `false` without drawing anything when `sides <= 2`.
    pub fn polygon(&mut self, sides: i64, size: i64) -> Result<bool> {
        if sides <= 2 {
            log::debug!("ignoring degenerate polygon with {} sides", sides);
            return Ok(false);
        }

        let angle = (360 / sides) as f64;
        for _ in 0..sides {
            self.walk(size as f64)?;
            self.turn(angle);
        }

        self.sink.close_path()?;
        if self.pen.filled {
            self.sink.fill()?;
        }
        Ok(true)
    }

    /// Random walk of `steps` moves.
    ///
    /// The pen goes black first. Each step then picks, with equal odds, a
    /// stroked 10-unit segment, a left turn, a right turn or a random color
    /// from the ten levels `0.0, 0.1, ..., 0.9` per component.
    pub fn random_walk(&mut self, steps: i64) -> Result<()> {
        self.set_color(Color::BLACK)?;

        for _ in 0..steps {
            match self.rng.below(4) {
                0 => {
                    self.sink.new_path()?;
                    self.goto(self.turtle.x(), self.turtle.y())?;
                    self.walk(RANDOM_STEP)?;
                    self.sink.stroke()?;
                }
                1 => self.turn(90.0),
                2 => self.turn(-90.0),
                _ => {
                    let color = Color::new(
                        self.random_level(),
                        self.random_level(),
                        self.random_level(),
                    );
                    self.set_color(color)?;
                }
            }
        }
        Ok(())
    }

    fn random_level(&mut self) -> f64 {
        self.rng.below(10) as f64 * 0.1
    }

    /// Accepted for compatibility; draws nothing.
    pub fn fractal(&mut self, depth: i64, recursions: i64) {
        log::debug!(
            "fractal({}, {}) is not implemented; ignoring",
            depth,
            recursions
        );
    }
}
