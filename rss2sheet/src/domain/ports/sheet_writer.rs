//! Sheet writer port trait
//!
//! Defines the interface for persisting a laid-out table to a document.

use std::path::Path;

use crate::error::ExportError;
use crate::sheet::SheetLayout;

/// Dimensions of a written table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetReport {
    /// Data rows, header excluded
    pub rows: usize,
    pub columns: usize,
}

pub trait SheetWriter {
    fn write(&self, layout: &SheetLayout, path: &Path) -> Result<SheetReport, ExportError>;
}
