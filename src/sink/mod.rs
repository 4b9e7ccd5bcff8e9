//! Output Sinks
//!
//! The interpreter decides *what* to draw; a [`Sink`] decides how it is
//! encoded. Every drawing primitive is a [`Primitive`] value and sinks only
//! have to implement [`Sink::emit`].

pub mod json;
pub mod postscript;

pub use json::JsonSink;
pub use postscript::PostScriptSink;

use serde::{Deserialize, Serialize};
use std::io;

use crate::turtle::Color;

/// A single page-description drawing primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Primitive {
    /// Document header with the page bounding box
    Header { width: u32, height: u32 },
    SetColor { r: f64, g: f64, b: f64 },
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    RectFill {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    NewPath,
    ClosePath,
    Fill,
    Stroke,
    ShowPage,
}

/// Receiver of drawing primitives, in dispatch order
pub trait Sink {
    fn emit(&mut self, primitive: Primitive) -> io::Result<()>;

    /// Push any buffered output to the underlying writer.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn header(&mut self, width: u32, height: u32) -> io::Result<()> {
        self.emit(Primitive::Header { width, height })
    }

    fn set_color(&mut self, color: Color) -> io::Result<()> {
        self.emit(Primitive::SetColor {
            r: color.r,
            g: color.g,
            b: color.b,
        })
    }

    fn move_to(&mut self, x: f64, y: f64) -> io::Result<()> {
        self.emit(Primitive::MoveTo { x, y })
    }

    fn line_to(&mut self, x: f64, y: f64) -> io::Result<()> {
        self.emit(Primitive::LineTo { x, y })
    }

    fn rect_fill(&mut self, x: f64, y: f64, width: f64, height: f64) -> io::Result<()> {
        self.emit(Primitive::RectFill {
            x,
            y,
            width,
            height,
        })
    }

    fn new_path(&mut self) -> io::Result<()> {
        self.emit(Primitive::NewPath)
    }

    fn close_path(&mut self) -> io::Result<()> {
        self.emit(Primitive::ClosePath)
    }

    fn fill(&mut self) -> io::Result<()> {
        self.emit(Primitive::Fill)
    }

    fn stroke(&mut self) -> io::Result<()> {
        self.emit(Primitive::Stroke)
    }

    fn show_page(&mut self) -> io::Result<()> {
        self.emit(Primitive::ShowPage)
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn emit(&mut self, primitive: Primitive) -> io::Result<()> {
        (**self).emit(primitive)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn emit(&mut self, primitive: Primitive) -> io::Result<()> {
        (**self).emit(primitive)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

/// Keeps every primitive in memory
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSink {
    pub primitives: Vec<Primitive>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Drop everything recorded so far.
    pub fn clear(&mut self) {
        self.primitives.clear();
    }
}

impl Sink for RecordingSink {
    fn emit(&mut self, primitive: Primitive) -> io::Result<()> {
        self.primitives.push(primitive);
        Ok(())
    }
}
