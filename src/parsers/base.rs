//! Cursor tokenizer for textual structure literals.

use crate::error::{FigureError, Result};

/// Stateful parser cursor over the input string.
pub struct Cursor {
    pub src: Vec<char>,
    pub pos: usize,
}

impl Cursor {
    pub fn new(src: &str) -> Self {
        Self {
            src: src.chars().collect(),
            pos: 0,
        }
    }

    pub fn eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    pub fn peek_char(&self) -> Option<char> {
        self.src.get(self.pos).copied()
    }

    /// Consume `c` if it is next; returns true if consumed.
    pub fn consume(&mut self, c: char) -> bool {
        if self.peek_char() == Some(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Skip spaces, tabs and newlines.
    pub fn skip_ws(&mut self) {
        while self.peek_char().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    pub fn expect(&mut self, c: char) -> Result<()> {
        if self.consume(c) {
            Ok(())
        } else {
            Err(self.error(&format!("expected '{c}'")))
        }
    }

    /// Match a bare atom: `[A-Za-z0-9_.+-]+`.
    pub fn match_bare(&mut self) -> Option<String> {
        let start = self.pos;
        while self
            .peek_char()
            .is_some_and(|c| c.is_alphanumeric() || matches!(c, '_' | '.' | '-' | '+'))
        {
            self.pos += 1;
        }
        (self.pos > start).then(|| self.src[start..self.pos].iter().collect())
    }

    /// Match a double- or single-quoted string. `\` escapes the next char.
    pub fn match_quoted(&mut self) -> Result<Option<String>> {
        let Some(quote) = self.peek_char().filter(|c| *c == '"' || *c == '\'') else {
            return Ok(None);
        };
        self.pos += 1;
        let mut out = String::new();
        loop {
            match self.peek_char() {
                None => return Err(self.error("unterminated string")),
                Some(c) if c == quote => {
                    self.pos += 1;
                    return Ok(Some(out));
                }
                Some('\\') => {
                    self.pos += 1;
                    match self.peek_char() {
                        Some(c) => {
                            out.push(c);
                            self.pos += 1;
                        }
                        None => return Err(self.error("unterminated string")),
                    }
                }
                Some(c) => {
                    out.push(c);
                    self.pos += 1;
                }
            }
        }
    }

    /// Bare or quoted atom.
    pub fn match_atom(&mut self) -> Result<Option<String>> {
        if let Some(s) = self.match_quoted()? {
            return Ok(Some(s));
        }
        Ok(self.match_bare())
    }

    pub fn error(&self, msg: &str) -> FigureError {
        let found = match self.peek_char() {
            Some(c) => format!("'{c}'"),
            None => "end of input".to_string(),
        };
        FigureError::Literal(format!("{msg} at offset {}, found {found}", self.pos))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
