//! # gridcalc-core
//!
//! Core data structures for the gridcalc spreadsheet engine.
//!
//! This crate provides the fundamental types shared by the other gridcalc crates:
//! - [`CellAddress`] - A cell's location in A1 notation
//! - [`Color`] - A cell's background color
//! - [`Error`] - Address and color parsing errors
//!
//! ## Example
//!
//! ```rust
//! use gridcalc_core::{CellAddress, Color};
//!
//! let addr = CellAddress::parse("C12").unwrap();
//! assert_eq!((addr.row, addr.col), (11, 2));
//! assert_eq!(addr.to_string(), "C12");
//!
//! assert_eq!(Color::default(), Color::WHITE);
//! ```

pub mod address;
pub mod color;
pub mod error;

pub use address::CellAddress;
pub use color::Color;
pub use error::{Error, Result};

/// Largest row count an address may name
pub const MAX_ROWS: u32 = 1_048_576;

/// Largest column count an address may name
pub const MAX_COLS: u16 = 16_384;
