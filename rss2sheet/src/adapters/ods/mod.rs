//! OpenDocument spreadsheet writer adapter

mod writer;

pub use writer::OdsSheetWriter;
