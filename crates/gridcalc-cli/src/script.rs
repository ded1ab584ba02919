//! Line-oriented cell scripts
//!
//! ```text
//! # comments and blank lines are skipped
//! set A1 10
//! set B1 =A1 * 2
//! color FFFF0000 A1 B1
//! undo
//! redo
//! ```

use anyhow::{bail, Context, Result};
use gridcalc::{CellAddress, Color};

/// One script line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Set { address: CellAddress, text: String },
    Color { color: Color, cells: Vec<CellAddress> },
    Undo,
    Redo,
}

/// Parse a script line; blank lines and comments yield `None`
pub fn parse_line(line: &str) -> Result<Option<Statement>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (keyword, rest) = split_word(line);
    let statement = match keyword {
        "set" => {
            let (address, text) = split_word(rest);
            if address.is_empty() {
                bail!("'set' needs a cell address");
            }
            Statement::Set {
                address: parse_address(address)?,
                text: text.to_string(),
            }
        }
        "color" => {
            let (color, cells) = split_word(rest);
            let color: Color = color
                .parse()
                .with_context(|| format!("Invalid color '{}'", color))?;
            let cells = cells
                .split_whitespace()
                .map(parse_address)
                .collect::<Result<Vec<_>>>()?;
            if cells.is_empty() {
                bail!("'color' needs at least one cell address");
            }
            Statement::Color { color, cells }
        }
        "undo" if rest.is_empty() => Statement::Undo,
        "redo" if rest.is_empty() => Statement::Redo,
        _ => bail!("Unknown statement '{}'", line),
    };

    Ok(Some(statement))
}

fn parse_address(name: &str) -> Result<CellAddress> {
    CellAddress::parse(name).with_context(|| format!("Invalid cell address '{}'", name))
}

/// Split off the first word; the remainder keeps its inner spacing
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (s, ""),
    }
}
