//! Sheet module
//!
//! Format-independent table layout for the exported articles.

pub mod layout;

pub use layout::{build_layout, Cell, CellStyle, SheetLayout, StyleSpec};
