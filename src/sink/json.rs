//! Newline-delimited JSON Sink
//!
//! Each primitive becomes one object tagged by `op`, for renderers that
//! would rather not parse PostScript.

use std::io::{self, Write};

use super::{Primitive, Sink};

#[derive(Debug)]
pub struct JsonSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for JsonSink<W> {
    fn emit(&mut self, primitive: Primitive) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, &primitive)?;
        self.writer.write_all(b"\n")
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_one_object_per_line() {
        let mut sink = JsonSink::new(Vec::new());
        sink.header(595, 841).unwrap();
        sink.rect_fill(-5.0, -5.0, 10.0, 10.0).unwrap();
        sink.show_page().unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["op"], "header");
        assert_eq!(lines[0]["width"], 595);
        assert_eq!(lines[1]["op"], "rect_fill");
        assert_eq!(lines[1]["x"], -5.0);
        assert_eq!(lines[2]["op"], "show_page");
    }

    #[test]
    fn test_lines_parse_back_into_primitives() {
        let mut sink = JsonSink::new(Vec::new());
        sink.line_to(1.5, 2.5).unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        let parsed: Primitive = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(parsed, Primitive::LineTo { x: 1.5, y: 2.5 });
    }
}
