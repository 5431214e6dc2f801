//! XLSX sheet writer adapter

mod writer;

pub use writer::XlsxSheetWriter;
