//! Spreadsheet engine
//!
//! Owns the cell grid and keeps formula values current. Every formula cell is
//! recorded in a [`DependencyGraph`] as a dependent of the cells it reads;
//! when a cell's value changes, its transitive dependents are recomputed in
//! topological order before the triggering call returns.
//!
//! # Example
//!
//! ```rust
//! use gridcalc::Spreadsheet;
//!
//! let mut sheet = Spreadsheet::new(10, 5);
//! sheet.set_cell_text(0, 0, "10").unwrap();
//! sheet.set_cell_text(0, 1, "13").unwrap();
//! sheet.set_cell_text(0, 2, "=A1+B1").unwrap();
//! assert_eq!(sheet.cell(0, 2).unwrap().value(), Some("23"));
//!
//! sheet.set_cell_text(0, 0, "4").unwrap();
//! assert_eq!(sheet.cell(0, 2).unwrap().value(), Some("17"));
//! ```

use crate::cell::{Cell, CellEvent, CellKind, CellProperty};
use crate::error::{Result, SheetError};
use crate::history::History;
use crate::options::SheetOptions;
use ahash::AHashSet;
use gridcalc_core::{CellAddress, Color};
use gridcalc_formula::{DependencyGraph, ExpressionTree, FormulaError};
use tracing::{debug, warn};

/// Value shown by a formula that cannot be computed
pub const REF_ERROR: &str = "REF ERROR";

/// Integral values below this magnitude display without a fractional part
const INTEGER_DISPLAY_LIMIT: f64 = 1e15;

/// A fixed-size grid of cells with formula recalculation
#[derive(Debug, Clone)]
pub struct Spreadsheet {
    rows: u32,
    columns: u16,
    /// Row-major
    cells: Vec<Cell>,
    graph: DependencyGraph,
    events: Vec<CellEvent>,
    pub(crate) history: History,
}

impl Default for Spreadsheet {
    fn default() -> Self {
        Self::with_options(SheetOptions::default())
    }
}

impl Spreadsheet {
    /// Create a grid of empty cells
    pub fn new(rows: u32, columns: u16) -> Self {
        Self::with_options(SheetOptions::with_size(rows, columns))
    }

    /// Create a grid from options
    pub fn with_options(options: SheetOptions) -> Self {
        let options = options.clamped();
        let mut cells = Vec::with_capacity(options.rows as usize * options.columns as usize);
        for row in 0..options.rows {
            for col in 0..options.columns {
                cells.push(Cell::new(CellAddress::new(row, col)));
            }
        }

        debug!(rows = options.rows, columns = options.columns, "created spreadsheet");

        Self {
            rows: options.rows,
            columns: options.columns,
            cells,
            graph: DependencyGraph::new(),
            events: Vec::new(),
            history: History::new(options.history_limit),
        }
    }

    /// Number of rows
    pub fn row_count(&self) -> u32 {
        self.rows
    }

    /// Number of columns
    pub fn column_count(&self) -> u16 {
        self.columns
    }

    /// Get a cell by zero-based row and column
    pub fn cell(&self, row: u32, col: u16) -> Option<&Cell> {
        self.index(CellAddress::new(row, col))
            .map(|index| &self.cells[index])
    }

    /// Get a cell by address
    pub fn cell_at(&self, address: &CellAddress) -> Option<&Cell> {
        self.cell(address.row, address.col)
    }

    /// Get a cell by A1-style name
    pub fn cell_by_name(&self, name: &str) -> Result<&Cell> {
        let address = CellAddress::parse(name)?;
        self.cell_at(&address).ok_or(SheetError::CellOutOfBounds {
            row: address.row,
            col: address.col,
        })
    }

    /// Iterate over every cell that has text, in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter().filter(|cell| !cell.is_empty())
    }

    /// Whether an address lies inside the grid
    pub fn contains(&self, address: &CellAddress) -> bool {
        address.row < self.rows && address.col < self.columns
    }

    /// Change a cell's text and recompute everything that depends on it
    ///
    /// Setting the text a cell already has does nothing. If a formula cannot
    /// be parsed or names a cell outside the grid, the text is still stored,
    /// the value becomes [`REF_ERROR`], and the error is returned.
    pub fn set_cell_text(&mut self, row: u32, col: u16, text: impl Into<String>) -> Result<()> {
        let address = self.checked_address(row, col)?;
        let index = self.cell_index(address);

        if !self.cells[index].set_text(text.into()) {
            return Ok(());
        }
        self.emit(address, CellProperty::Text);

        let (value, outcome) = self.compute(address);
        if self.cells[index].set_value(value) {
            self.emit(address, CellProperty::Value);
            self.recalculate(address);
        }

        outcome
    }

    /// Change a cell's background color
    pub fn set_cell_color(&mut self, row: u32, col: u16, color: Color) -> Result<()> {
        let address = self.checked_address(row, col)?;
        let index = self.cell_index(address);
        if self.cells[index].set_bg_color(color) {
            self.emit(address, CellProperty::BackgroundColor);
        }
        Ok(())
    }

    /// Change the background color of several cells at once
    ///
    /// Every address is checked before any cell changes.
    pub fn change_cell_color(&mut self, cells: &[CellAddress], color: Color) -> Result<()> {
        for address in cells {
            self.checked_address(address.row, address.col)?;
        }
        for address in cells {
            self.set_cell_color(address.row, address.col, color)?;
        }
        Ok(())
    }

    /// Drain pending change notifications, oldest first
    pub fn take_events(&mut self) -> Vec<CellEvent> {
        std::mem::take(&mut self.events)
    }

    /// Cells a formula cell reads, sorted
    pub fn precedents(&self, address: CellAddress) -> Vec<CellAddress> {
        let mut cells: Vec<_> = self.graph.precedents(address).collect();
        cells.sort_unstable();
        cells
    }

    /// Cells whose formulas read this cell, sorted
    pub fn dependents(&self, address: CellAddress) -> Vec<CellAddress> {
        let mut cells: Vec<_> = self.graph.dependents(address).collect();
        cells.sort_unstable();
        cells
    }

    /// Whether a cell takes part in a reference cycle
    pub fn is_circular(&self, address: CellAddress) -> bool {
        self.graph.has_circular_reference(address)
    }

    fn checked_address(&self, row: u32, col: u16) -> Result<CellAddress> {
        let address = CellAddress::new(row, col);
        if self.contains(&address) {
            Ok(address)
        } else {
            Err(SheetError::CellOutOfBounds { row, col })
        }
    }

    fn index(&self, address: CellAddress) -> Option<usize> {
        self.contains(&address).then(|| self.cell_index(address))
    }

    fn cell_index(&self, address: CellAddress) -> usize {
        address.row as usize * self.columns as usize + address.col as usize
    }

    fn emit(&mut self, address: CellAddress, property: CellProperty) {
        self.events.push(CellEvent::new(address, property));
    }

    /// Recompute the dependents of `origin` after its value changed
    fn recalculate(&mut self, origin: CellAddress) {
        let order = self.graph.recalc_order(origin);

        let mut changed = AHashSet::new();
        changed.insert(origin);
        let mut recalculated = 0usize;

        for address in order {
            if !self.graph.precedents(address).any(|p| changed.contains(&p)) {
                continue;
            }

            // Errors were already logged by compute; the value carries them
            let (value, _) = self.compute(address);
            recalculated += 1;

            let index = self.cell_index(address);
            if self.cells[index].set_value(value) {
                self.emit(address, CellProperty::Value);
                changed.insert(address);
            }
        }

        debug!(
            origin = %origin,
            recalculated,
            changed = changed.len() - 1,
            "recalculated dependents"
        );
    }

    /// Derive a cell's value from its text and rebuild its precedents
    fn compute(&mut self, address: CellAddress) -> (Option<String>, Result<()>) {
        self.graph.clear_precedents(address);

        let cell = &self.cells[self.cell_index(address)];
        match cell.kind() {
            CellKind::Empty => (None, Ok(())),
            CellKind::Literal => (Some(cell.text().to_string()), Ok(())),
            CellKind::Formula => {
                let body: String = cell.text().chars().filter(|c| !c.is_whitespace()).collect();
                // Skip the '='
                match self.evaluate_formula(address, &body[1..]) {
                    Ok(value) => (Some(value), Ok(())),
                    Err(err) => {
                        warn!(cell = %address, formula = %body, error = %err, "formula rejected");
                        (Some(REF_ERROR.to_string()), Err(err))
                    }
                }
            }
        }
    }

    fn evaluate_formula(&mut self, address: CellAddress, body: &str) -> Result<String> {
        let mut tree = match ExpressionTree::parse(body) {
            Ok(tree) => tree,
            Err(err) => return self.direct_reference(address, body, err),
        };

        let mut references = Vec::new();
        for name in tree.variable_names() {
            references.push((name.to_string(), self.resolve_reference(name)?));
        }

        for (name, target) in references {
            self.graph.add_dependency(target, address);
            if let Some(value) = self.numeric_value(target) {
                tree.set_variable(&name, value)?;
            }
        }

        match tree.evaluate() {
            Ok(value) => Ok(format_number(value)),
            Err(FormulaError::UnsetVariable(name)) => {
                debug!(cell = %address, variable = %name, "unset reference");
                Ok(REF_ERROR.to_string())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Treat a formula body that is not an expression as a single cell name
    fn direct_reference(
        &mut self,
        address: CellAddress,
        body: &str,
        parse_error: FormulaError,
    ) -> Result<String> {
        if CellAddress::parse(body).is_err() {
            return Err(parse_error.into());
        }

        let target = self.resolve_reference(body)?;
        self.graph.add_dependency(target, address);

        let value = self.cells[self.cell_index(target)].value();
        Ok(value.unwrap_or(REF_ERROR).to_string())
    }

    fn resolve_reference(&self, name: &str) -> Result<CellAddress> {
        CellAddress::parse(name)
            .ok()
            .filter(|address| self.contains(address))
            .ok_or_else(|| SheetError::UnresolvableCellReference(name.to_string()))
    }

    /// Numeric reading of a referenced cell
    ///
    /// `None` leaves the variable unset. Text that is not a number reads as 0.
    fn numeric_value(&self, address: CellAddress) -> Option<f64> {
        match self.cells[self.cell_index(address)].value() {
            None | Some(REF_ERROR) => None,
            Some(text) => Some(text.parse().unwrap_or(0.0)),
        }
    }
}

/// Format a computed number for display
///
/// Integral values print without a decimal point; everything else uses the
/// shortest representation that round-trips.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < INTEGER_DISPLAY_LIMIT {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
