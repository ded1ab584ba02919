//! # gridcalc
//!
//! A spreadsheet engine with formula cells.
//!
//! Cells hold plain text or a formula starting with `=`. Formulas are infix
//! arithmetic over numbers and A1-style cell references. When a cell changes,
//! every formula that reads it (directly or through other formulas) is
//! recomputed exactly once, in dependency order, before the edit returns.
//!
//! ## Features
//!
//! - `+ - * /` with standard precedence and parentheses
//! - Dependency tracking with ordered recalculation
//! - Change events for text, value and background color
//! - Undo/redo of text and color edits
//!
//! ## Example
//!
//! ```rust
//! use gridcalc::prelude::*;
//!
//! let mut sheet = Spreadsheet::new(50, 26);
//! sheet.set_cell_text(0, 0, "10").unwrap();
//! sheet.set_cell_text(0, 1, "=A1*2").unwrap();
//! assert_eq!(sheet.cell_by_name("B1").unwrap().value(), Some("20"));
//!
//! // Formulas that cannot be computed show REF ERROR
//! sheet.set_cell_text(0, 2, "=D1+1").unwrap();
//! assert_eq!(sheet.cell(0, 2).unwrap().value(), Some(REF_ERROR));
//! ```

pub mod cell;
pub mod error;
pub mod history;
pub mod options;
pub mod prelude;
pub mod spreadsheet;

pub use cell::{Cell, CellEvent, CellKind, CellProperty};
pub use error::{Result, SheetError};
pub use history::{Command, History};
pub use options::SheetOptions;
pub use spreadsheet::{format_number, Spreadsheet, REF_ERROR};

// Re-export core types
pub use gridcalc_core::{CellAddress, Color, MAX_COLS, MAX_ROWS};

// Re-export formula types
pub use gridcalc_formula::{evaluate, ExpressionTree, FormulaError, FormulaResult, Node, MAX_DEPTH};
