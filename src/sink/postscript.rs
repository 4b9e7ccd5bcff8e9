//! PostScript Text Sink
//!
//! One primitive per line. Colors use two decimals, coordinates six, and
//! rectangle sizes their shortest exact form (`10` for `10.0`).

use std::io::{self, Write};

use super::{Primitive, Sink};

pub const FORMAT_MARKER: &str = "%!PS-Adobe-3.0 EPSF-3.0";

/// Writes PostScript to any `Write`
#[derive(Debug)]
pub struct PostScriptSink<W: Write> {
    writer: W,
}

impl<W: Write> PostScriptSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Render a primitive as its PostScript line (without the newline).
pub fn format_primitive(primitive: &Primitive) -> String {
    match primitive {
        Primitive::Header { width, height } => {
            format!("{FORMAT_MARKER}\n%%BoundingBox: 0 0 {width} {height}")
        }
        Primitive::SetColor { r, g, b } => format!("{r:.2} {g:.2} {b:.2} setrgbcolor"),
        Primitive::MoveTo { x, y } => format!("{x:.6} {y:.6} moveto"),
        Primitive::LineTo { x, y } => format!("{x:.6} {y:.6} lineto"),
        Primitive::RectFill {
            x,
            y,
            width,
            height,
        } => format!("{x:.6} {y:.6} {width} {height} rectfill"),
        Primitive::NewPath => "newpath".to_string(),
        Primitive::ClosePath => "closepath".to_string(),
        Primitive::Fill => "fill".to_string(),
        Primitive::Stroke => "stroke".to_string(),
        Primitive::ShowPage => "showpage".to_string(),
    }
}

impl<W: Write> Sink for PostScriptSink<W> {
    fn emit(&mut self, primitive: Primitive) -> io::Result<()> {
        writeln!(self.writer, "{}", format_primitive(&primitive))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
