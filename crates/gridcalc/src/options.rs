//! Spreadsheet options

use gridcalc_core::{MAX_COLS, MAX_ROWS};

/// Options for creating a spreadsheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetOptions {
    /// Number of rows (default: 50)
    pub rows: u32,
    /// Number of columns (default: 26, `A` through `Z`)
    pub columns: u16,
    /// Maximum number of undo steps kept; `None` keeps everything
    pub history_limit: Option<usize>,
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self {
            rows: 50,
            columns: 26,
            history_limit: None,
        }
    }
}

impl SheetOptions {
    /// Options for a grid of the given size with default history
    pub fn with_size(rows: u32, columns: u16) -> Self {
        Self {
            rows,
            columns,
            ..Self::default()
        }
    }

    /// Limit the undo stack
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Clamp the grid to the addressable range
    pub(crate) fn clamped(mut self) -> Self {
        if self.rows > MAX_ROWS {
            tracing::warn!(rows = self.rows, max = MAX_ROWS, "row count clamped");
            self.rows = MAX_ROWS;
        }
        if self.columns > MAX_COLS {
            tracing::warn!(columns = self.columns, max = MAX_COLS, "column count clamped");
            self.columns = MAX_COLS;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let options = SheetOptions::default();
        assert_eq!(options.rows, 50);
        assert_eq!(options.columns, 26);
        assert_eq!(options.history_limit, None);
    }

    #[test]
    fn test_builder() {
        let options = SheetOptions::with_size(3, 4).history_limit(10);
        assert_eq!(
            options,
            SheetOptions {
                rows: 3,
                columns: 4,
                history_limit: Some(10),
            }
        );
    }

    #[test]
    fn test_clamped() {
        let options = SheetOptions::with_size(u32::MAX, u16::MAX).clamped();
        assert_eq!(options.rows, MAX_ROWS);
        assert_eq!(options.columns, MAX_COLS);
    }
}
