//! Spreadsheet error types

use gridcalc_formula::FormulaError;
use thiserror::Error;

/// Result type for spreadsheet operations
pub type Result<T> = std::result::Result<T, SheetError>;

/// Errors raised while editing a spreadsheet
///
/// A formula that fails with any of these is still committed: the cell keeps
/// the new text and shows [`REF_ERROR`](crate::REF_ERROR).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SheetError {
    /// The formula body could not be parsed
    #[error(transparent)]
    Formula(#[from] FormulaError),

    /// Address or color parsing failed
    #[error(transparent)]
    Core(#[from] gridcalc_core::Error),

    /// A formula names a cell that does not exist in this sheet
    #[error("cell reference \"{0}\" does not exist in this sheet")]
    UnresolvableCellReference(String),

    /// A row/column pair outside the grid
    #[error("cell ({row}, {col}) is outside the sheet")]
    CellOutOfBounds { row: u32, col: u16 },
}

impl SheetError {
    /// Whether the edit that produced this error was still applied to the cell
    pub fn is_committed(&self) -> bool {
        matches!(
            self,
            SheetError::Formula(_) | SheetError::UnresolvableCellReference(_)
        )
    }
}
