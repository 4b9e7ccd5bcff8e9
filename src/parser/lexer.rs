//! Character Scanner
//!
//! Walks the input one character at a time, tracking line and column, and
//! reads the numeric literals that follow an opcode. Whitespace before a
//! literal is always skipped, so `W10` and `W 10` read the same.

/// Position-tracking cursor over program text
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    src: &'a str,
    pos: usize,
    line: usize,
    column: usize,
}

/// Saved cursor, used to back out of a failed literal
#[derive(Debug, Clone, Copy)]
struct Mark {
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// 1-based line of the next character
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column of the next character
    pub fn column(&self) -> usize {
        self.column
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    pub fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn mark(&self) -> Mark {
        Mark {
            pos: self.pos,
            line: self.line,
            column: self.column,
        }
    }

    fn reset(&mut self, mark: Mark) {
        self.pos = mark.pos;
        self.line = mark.line;
        self.column = mark.column;
    }

    fn eat(&mut self, pred: impl Fn(char) -> bool) -> bool {
        if self.peek().is_some_and(pred) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn eat_digits(&mut self) -> usize {
        let mut count = 0;
        while self.eat(|c| c.is_ascii_digit()) {
            count += 1;
        }
        count
    }

    fn eat_sign(&mut self) {
        self.eat(|c| c == '+' || c == '-');
    }

    /// Read a signed decimal integer.
    ///
    /// Stops at the first non-digit. On failure nothing past the leading
    /// whitespace is consumed.
    pub fn read_integer(&mut self) -> Option<i64> {
        self.skip_whitespace();
        let start = self.mark();

        self.eat_sign();
        if self.eat_digits() == 0 {
            self.reset(start);
            return None;
        }

        match self.src[start.pos..self.pos].parse() {
            Ok(value) => Some(value),
            Err(_) => {
                self.reset(start);
                None
            }
        }
    }

    /// Read a decimal float: sign, digits, optional fraction, optional
    /// exponent. At least one mantissa digit is required.
    pub fn read_float(&mut self) -> Option<f64> {
        self.skip_whitespace();
        let start = self.mark();

        self.eat_sign();
        let mut digits = self.eat_digits();
        if self.eat(|c| c == '.') {
            digits += self.eat_digits();
        }
        if digits == 0 {
            self.reset(start);
            return None;
        }

        // Exponent only counts when digits follow it
        let before_exponent = self.mark();
        if self.eat(|c| c == 'e' || c == 'E') {
            self.eat_sign();
            if self.eat_digits() == 0 {
                self.reset(before_exponent);
            }
        }

        match self.src[start.pos..self.pos].parse() {
            Ok(value) => Some(value),
            Err(_) => {
                self.reset(start);
                None
            }
        }
    }
}
