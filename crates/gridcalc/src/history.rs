//! Undo/redo
//!
//! Edits are recorded as [`Command`]s holding the state to go back to. Undoing
//! a command first captures its inverse from the current sheet, so redo
//! restores exactly what undo replaced. A command that no longer fits the
//! sheet is discarded when it is popped.
//!
//! # Example
//!
//! ```rust
//! use gridcalc::Spreadsheet;
//!
//! let mut sheet = Spreadsheet::new(5, 5);
//! sheet.edit_cell_text(0, 0, "first").unwrap();
//! sheet.edit_cell_text(0, 0, "second").unwrap();
//!
//! assert_eq!(sheet.undo().unwrap(), 1);
//! assert_eq!(sheet.cell(0, 0).unwrap().text(), "first");
//!
//! assert_eq!(sheet.redo().unwrap(), 0);
//! assert_eq!(sheet.cell(0, 0).unwrap().text(), "second");
//! ```

use crate::error::{Result, SheetError};
use crate::spreadsheet::Spreadsheet;
use gridcalc_core::{CellAddress, Color};
use std::collections::VecDeque;
use tracing::{debug, warn};

/// A reversible edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set one cell's text
    TextChange { cell: CellAddress, text: String },
    /// Set the background color of a batch of cells
    ColorChange { cells: Vec<CellAddress>, color: Color },
}

impl Command {
    /// Fail with [`SheetError::CellOutOfBounds`] for the first cell outside the sheet
    pub fn check_bounds(&self, sheet: &Spreadsheet) -> Result<()> {
        let cells = match self {
            Command::TextChange { cell, .. } => std::slice::from_ref(cell),
            Command::ColorChange { cells, .. } => cells.as_slice(),
        };
        match cells.iter().find(|cell| !sheet.contains(cell)) {
            Some(cell) => Err(SheetError::CellOutOfBounds {
                row: cell.row,
                col: cell.col,
            }),
            None => Ok(()),
        }
    }

    /// Apply the command to a sheet
    pub fn execute(&self, sheet: &mut Spreadsheet) -> Result<()> {
        match self {
            Command::TextChange { cell, text } => {
                sheet.set_cell_text(cell.row, cell.col, text.clone())
            }
            Command::ColorChange { cells, color } => sheet.change_cell_color(cells, *color),
        }
    }

    /// The command that reverts this one, read from the sheet as it is now
    ///
    /// A color batch is reverted to the color its first cell has now, so a
    /// batch that started out with mixed colors comes back uniform.
    pub fn inverse(&self, sheet: &Spreadsheet) -> Result<Command> {
        match self {
            Command::TextChange { cell, .. } => {
                let current = sheet.cell_at(cell).ok_or(SheetError::CellOutOfBounds {
                    row: cell.row,
                    col: cell.col,
                })?;
                Ok(Command::TextChange {
                    cell: *cell,
                    text: current.text().to_string(),
                })
            }
            Command::ColorChange { cells, color } => {
                let color = match cells.first() {
                    Some(first) => sheet
                        .cell_at(first)
                        .ok_or(SheetError::CellOutOfBounds {
                            row: first.row,
                            col: first.col,
                        })?
                        .bg_color(),
                    None => *color,
                };
                Ok(Command::ColorChange {
                    cells: cells.clone(),
                    color,
                })
            }
        }
    }
}

/// Undo and redo stacks
///
/// The undo stack drops its oldest entries once it exceeds the limit.
#[derive(Debug, Clone, Default)]
pub struct History {
    undo: VecDeque<Command>,
    redo: Vec<Command>,
    limit: Option<usize>,
}

impl History {
    /// Create empty stacks
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            limit,
        }
    }

    /// Push onto the undo stack
    pub fn push_undo(&mut self, command: Command) {
        self.undo.push_back(command);
        if let Some(limit) = self.limit {
            while self.undo.len() > limit {
                self.undo.pop_front();
            }
        }
    }

    /// Push onto the redo stack
    pub fn push_redo(&mut self, command: Command) {
        self.redo.push(command);
    }

    pub fn pop_undo(&mut self) -> Option<Command> {
        self.undo.pop_back()
    }

    pub fn pop_redo(&mut self) -> Option<Command> {
        self.redo.pop()
    }

    pub fn undo_count(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo.len()
    }

    /// Record a fresh edit: push it and forget the redo branch
    pub fn record(&mut self, command: Command) {
        self.push_undo(command);
        self.redo.clear();
    }
}

impl Spreadsheet {
    /// Revert the most recent recorded edit
    ///
    /// Returns how many undo steps remain. With nothing to undo this is a no-op
    /// returning `Ok(0)`. An error from re-applying the old text is returned
    /// after the stacks have been updated. A command whose inverse cannot be
    /// read is dropped and its error returned.
    pub fn undo(&mut self) -> Result<usize> {
        let Some(command) = self.history.pop_undo() else {
            return Ok(0);
        };
        let inverse = command.inverse(self).map_err(|err| {
            warn!(?command, error = %err, "dropped undo command");
            err
        })?;

        debug!(?command, "undo");
        self.history.push_redo(inverse);
        command.execute(self)?;
        Ok(self.history.undo_count())
    }

    /// Re-apply the most recently undone edit
    ///
    /// Returns how many redo steps remain. Failures follow [`Spreadsheet::undo`].
    pub fn redo(&mut self) -> Result<usize> {
        let Some(command) = self.history.pop_redo() else {
            return Ok(0);
        };
        let inverse = command.inverse(self).map_err(|err| {
            warn!(?command, error = %err, "dropped redo command");
            err
        })?;

        debug!(?command, "redo");
        self.history.push_undo(inverse);
        command.execute(self)?;
        Ok(self.history.redo_count())
    }

    /// Set a cell's text and record the change for undo
    pub fn edit_cell_text(&mut self, row: u32, col: u16, text: impl Into<String>) -> Result<()> {
        let text = text.into();
        let previous = self
            .cell(row, col)
            .ok_or(SheetError::CellOutOfBounds { row, col })?
            .text()
            .to_string();
        if previous == text {
            return Ok(());
        }

        self.history.record(Command::TextChange {
            cell: CellAddress::new(row, col),
            text: previous,
        });
        self.set_cell_text(row, col, text)
    }

    /// Color a batch of cells and record the change for undo
    pub fn edit_cell_color(&mut self, cells: &[CellAddress], color: Color) -> Result<()> {
        let previous = cells
            .iter()
            .map(|address| {
                self.cell_at(address)
                    .map(|cell| cell.bg_color())
                    .ok_or(SheetError::CellOutOfBounds {
                        row: address.row,
                        col: address.col,
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        let Some(&first) = previous.first() else {
            return Ok(());
        };
        if previous.iter().all(|&c| c == color) {
            return Ok(());
        }

        self.history.record(Command::ColorChange {
            cells: cells.to_vec(),
            color: first,
        });
        self.change_cell_color(cells, color)
    }

    /// Push a command onto the undo stack without applying it
    ///
    /// Commands naming a cell outside the sheet are rejected.
    pub fn push_undo(&mut self, command: Command) -> Result<()> {
        command.check_bounds(self)?;
        self.history.push_undo(command);
        Ok(())
    }

    /// Push a command onto the redo stack without applying it
    ///
    /// Commands naming a cell outside the sheet are rejected.
    pub fn push_redo(&mut self, command: Command) -> Result<()> {
        command.check_bounds(self)?;
        self.history.push_redo(command);
        Ok(())
    }

    /// Number of edits that can be undone
    pub fn undo_count(&self) -> usize {
        self.history.undo_count()
    }

    /// Number of edits that can be redone
    pub fn redo_count(&self) -> usize {
        self.history.redo_count()
    }

    /// Undo/redo stacks
    pub fn history(&self) -> &History {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(sheet: &Spreadsheet, row: u32, col: u16) -> &str {
        sheet.cell(row, col).unwrap().text()
    }

    #[test]
    fn test_text_command_inverse() {
        let mut sheet = Spreadsheet::new(2, 2);
        sheet.set_cell_text(0, 0, "now").unwrap();

        let command = Command::TextChange {
            cell: CellAddress::new(0, 0),
            text: "before".into(),
        };
        assert_eq!(
            command.inverse(&sheet).unwrap(),
            Command::TextChange {
                cell: CellAddress::new(0, 0),
                text: "now".into(),
            }
        );

        command.execute(&mut sheet).unwrap();
        assert_eq!(text(&sheet, 0, 0), "before");
    }

    #[test]
    fn test_color_inverse_uses_first_cell() {
        let mut sheet = Spreadsheet::new(2, 2);
        sheet.set_cell_color(0, 0, Color::RED).unwrap();
        sheet.set_cell_color(0, 1, Color::BLUE).unwrap();

        let command = Command::ColorChange {
            cells: vec![CellAddress::new(0, 0), CellAddress::new(0, 1)],
            color: Color::GREEN,
        };
        let inverse = command.inverse(&sheet).unwrap();
        assert_eq!(
            inverse,
            Command::ColorChange {
                cells: vec![CellAddress::new(0, 0), CellAddress::new(0, 1)],
                color: Color::RED,
            }
        );
    }

    #[test]
    fn test_inverse_out_of_bounds() {
        let sheet = Spreadsheet::new(1, 1);
        let command = Command::TextChange {
            cell: CellAddress::new(3, 3),
            text: String::new(),
        };
        assert_eq!(
            command.inverse(&sheet),
            Err(SheetError::CellOutOfBounds { row: 3, col: 3 })
        );
    }

    #[test]
    fn test_history_limit_drops_oldest() {
        let mut history = History::new(Some(2));
        for i in 0..3 {
            history.push_undo(Command::TextChange {
                cell: CellAddress::new(0, 0),
                text: i.to_string(),
            });
        }
        assert_eq!(history.undo_count(), 2);
        assert_eq!(
            history.pop_undo(),
            Some(Command::TextChange {
                cell: CellAddress::new(0, 0),
                text: "2".into(),
            })
        );
        assert_eq!(
            history.pop_undo(),
            Some(Command::TextChange {
                cell: CellAddress::new(0, 0),
                text: "1".into(),
            })
        );
        assert_eq!(history.pop_undo(), None);
    }

    #[test]
    fn test_record_clears_redo() {
        let mut history = History::default();
        history.push_redo(Command::ColorChange {
            cells: vec![],
            color: Color::BLACK,
        });
        assert_eq!(history.redo_count(), 1);

        history.record(Command::ColorChange {
            cells: vec![],
            color: Color::WHITE,
        });
        assert_eq!(history.undo_count(), 1);
        assert_eq!(history.redo_count(), 0);
    }

    #[test]
    fn test_empty_undo_redo() {
        let mut sheet = Spreadsheet::new(2, 2);
        assert_eq!(sheet.undo().unwrap(), 0);
        assert_eq!(sheet.redo().unwrap(), 0);
    }

    #[test]
    fn test_edit_same_text_is_not_recorded() {
        let mut sheet = Spreadsheet::new(2, 2);
        sheet.edit_cell_text(0, 0, "x").unwrap();
        sheet.edit_cell_text(0, 0, "x").unwrap();
        assert_eq!(sheet.undo_count(), 1);

        sheet.edit_cell_color(&[CellAddress::new(0, 0)], Color::WHITE).unwrap();
        sheet.edit_cell_color(&[], Color::RED).unwrap();
        assert_eq!(sheet.undo_count(), 1);
    }

    #[test]
    fn test_edit_out_of_bounds_is_not_recorded() {
        let mut sheet = Spreadsheet::new(2, 2);
        assert!(sheet.edit_cell_text(5, 0, "x").is_err());
        assert!(sheet
            .edit_cell_color(&[CellAddress::new(0, 0), CellAddress::new(0, 9)], Color::RED)
            .is_err());
        assert_eq!(sheet.undo_count(), 0);
        assert_eq!(sheet.cell(0, 0).unwrap().bg_color(), Color::WHITE);
    }

    #[test]
    fn test_pushed_commands() {
        let mut sheet = Spreadsheet::new(2, 2);
        sheet
            .push_undo(Command::TextChange {
                cell: CellAddress::new(1, 1),
                text: "restored".into(),
            })
            .unwrap();
        assert_eq!(sheet.undo().unwrap(), 0);
        assert_eq!(text(&sheet, 1, 1), "restored");
        assert_eq!(sheet.redo_count(), 1);

        sheet
            .push_redo(Command::ColorChange {
                cells: vec![CellAddress::new(1, 0)],
                color: Color::YELLOW,
            })
            .unwrap();
        assert_eq!(sheet.redo().unwrap(), 1);
        assert_eq!(sheet.cell(1, 0).unwrap().bg_color(), Color::YELLOW);
        assert_eq!(sheet.history().undo_count(), 1);
    }

    #[test]
    fn test_out_of_bounds_push_is_rejected() {
        let mut sheet = Spreadsheet::new(2, 2);
        sheet.edit_cell_text(0, 0, "kept").unwrap();

        assert_eq!(
            sheet.push_undo(Command::TextChange {
                cell: CellAddress::new(100, 0),
                text: "x".into(),
            }),
            Err(SheetError::CellOutOfBounds { row: 100, col: 0 })
        );
        assert_eq!(
            sheet.push_redo(Command::ColorChange {
                cells: vec![CellAddress::new(0, 0), CellAddress::new(1, 7)],
                color: Color::RED,
            }),
            Err(SheetError::CellOutOfBounds { row: 1, col: 7 })
        );
        assert_eq!(sheet.undo_count(), 1);
        assert_eq!(sheet.redo_count(), 0);

        assert_eq!(sheet.undo().unwrap(), 0);
        assert_eq!(text(&sheet, 0, 0), "");
    }

    #[test]
    fn test_stale_command_is_dropped() {
        let mut sheet = Spreadsheet::new(2, 2);
        sheet.edit_cell_text(0, 0, "kept").unwrap();
        sheet.history.push_undo(Command::TextChange {
            cell: CellAddress::new(100, 0),
            text: "x".into(),
        });

        assert_eq!(
            sheet.undo(),
            Err(SheetError::CellOutOfBounds { row: 100, col: 0 })
        );
        assert_eq!(sheet.undo_count(), 1);
        assert_eq!(sheet.redo_count(), 0);

        // The stack moves on to the edit below it
        assert_eq!(sheet.undo().unwrap(), 0);
        assert_eq!(text(&sheet, 0, 0), "");
    }
}
