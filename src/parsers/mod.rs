//! Literal parsers for the command line.
//!
//! Grammar:
//!
//! ```text
//! nested := atom | '[' (nested (',' nested)* ','?)? ']'
//! flat   := '[' (atom (',' atom)* ','?)? ']' | atom (',' atom)*
//! atom   := bare | quoted
//! ```

pub mod base;

pub use base::Cursor;

use crate::error::Result;
use crate::structures::Nested;

/// Parse a nested literal such as `[1, [2, []], [3, []]]`.
pub fn parse_nested(src: &str) -> Result<Nested<String>> {
    let mut c = Cursor::new(src);
    c.skip_ws();
    let out = nested(&mut c)?;
    c.skip_ws();
    if !c.eof() {
        return Err(c.error("trailing input"));
    }
    Ok(out)
}

fn nested(c: &mut Cursor) -> Result<Nested<String>> {
    if c.consume('[') {
        let mut items = Vec::new();
        c.skip_ws();
        while !c.consume(']') {
            items.push(nested(c)?);
            c.skip_ws();
            if !c.consume(',') {
                c.expect(']')?;
                break;
            }
            c.skip_ws();
        }
        return Ok(Nested::Seq(items));
    }
    match c.match_atom()? {
        Some(atom) => Ok(Nested::Value(atom)),
        None => Err(c.error("expected a value or '['")),
    }
}

/// Parse a flat list of atoms, bracketed (`[5, 3, 8]`) or bare (`5,3,8`).
pub fn parse_flat(src: &str) -> Result<Vec<String>> {
    let mut c = Cursor::new(src);
    c.skip_ws();
    let bracketed = c.consume('[');
    let mut items = Vec::new();
    loop {
        c.skip_ws();
        if bracketed && c.consume(']') {
            break;
        }
        if !bracketed && c.eof() {
            break;
        }
        match c.match_atom()? {
            Some(atom) => items.push(atom),
            None => return Err(c.error("expected a value")),
        }
        c.skip_ws();
        if !c.consume(',') {
            if bracketed {
                c.expect(']')?;
            }
            break;
        }
    }
    c.skip_ws();
    if !c.eof() {
        return Err(c.error("trailing input"));
    }
    Ok(items)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
