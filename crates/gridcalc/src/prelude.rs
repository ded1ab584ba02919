//! Prelude module - common imports for gridcalc users
//!
//! ```rust
//! use gridcalc::prelude::*;
//! ```

pub use crate::{
    Cell,
    CellAddress,
    CellEvent,
    CellKind,
    CellProperty,
    Color,
    Command,
    ExpressionTree,
    FormulaError,
    Result,
    SheetError,
    SheetOptions,
    Spreadsheet,
    REF_ERROR,
};
