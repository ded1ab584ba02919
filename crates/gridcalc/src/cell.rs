//! Cell storage and change events

use gridcalc_core::{CellAddress, Color};

/// What a cell's text currently makes it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// No text
    Empty,
    /// Plain text; the value is the text itself
    Literal,
    /// Text starting with `=`; the value is computed
    Formula,
}

/// Which property of a cell changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellProperty {
    Text,
    Value,
    BackgroundColor,
}

/// A change notification for a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellEvent {
    pub address: CellAddress,
    pub property: CellProperty,
}

impl CellEvent {
    pub(crate) fn new(address: CellAddress, property: CellProperty) -> Self {
        Self { address, property }
    }
}

/// A single cell in the grid
///
/// Only the owning [`Spreadsheet`](crate::Spreadsheet) can change a cell, so
/// the value always agrees with the text and the cells it references.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    address: CellAddress,
    text: String,
    value: Option<String>,
    bg_color: Color,
}

impl Cell {
    pub(crate) fn new(address: CellAddress) -> Self {
        Self {
            address,
            text: String::new(),
            value: None,
            bg_color: Color::default(),
        }
    }

    /// Position in the grid
    pub fn address(&self) -> CellAddress {
        self.address
    }

    /// Zero-based row
    pub fn row(&self) -> u32 {
        self.address.row
    }

    /// Zero-based column
    pub fn col(&self) -> u16 {
        self.address.col
    }

    /// A1-style name, e.g. `B3`
    pub fn name(&self) -> String {
        self.address.to_a1_string()
    }

    /// Raw text as entered
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Computed display value; `None` until the cell has text
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Background color
    pub fn bg_color(&self) -> Color {
        self.bg_color
    }

    /// Classify the current text
    pub fn kind(&self) -> CellKind {
        if self.text.is_empty() {
            CellKind::Empty
        } else if self.text.trim_start().starts_with('=') {
            CellKind::Formula
        } else {
            CellKind::Literal
        }
    }

    /// Whether the cell has no text
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns whether the text changed
    pub(crate) fn set_text(&mut self, text: String) -> bool {
        if self.text == text {
            return false;
        }
        self.text = text;
        true
    }

    /// Returns whether the value changed
    pub(crate) fn set_value(&mut self, value: Option<String>) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        true
    }

    /// Returns whether the color changed
    pub(crate) fn set_bg_color(&mut self, color: Color) -> bool {
        if self.bg_color == color {
            return false;
        }
        self.bg_color = color;
        true
    }
}
