//! XLSX sheet writer implementation
//!
//! Serializes a `SheetLayout` with `rust_xlsxwriter`. The workbook is built
//! in memory and saved in one step, so a failed run leaves no partial file.

use std::collections::HashMap;
use std::path::Path;

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet};

use crate::domain::ports::{SheetReport, SheetWriter};
use crate::error::ExportError;
use crate::sheet::{Cell, CellStyle, SheetLayout, StyleSpec};

/// Approximate number of default-font characters per centimetre
const CHARS_PER_CM: f64 = 5.4;

/// Longest string a cell may hold
const MAX_CELL_CHARS: usize = 32_767;

#[derive(Debug, Default, Clone, Copy)]
pub struct XlsxSheetWriter;

impl XlsxSheetWriter {
    pub fn new() -> Self {
        Self
    }

    fn build_workbook(&self, layout: &SheetLayout) -> Result<Workbook, ExportError> {
        let formats: HashMap<CellStyle, Format> = CellStyle::ALL
            .iter()
            .map(|style| (*style, to_format(&style.spec())))
            .collect();

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(layout.name)?;

        for (col, column) in layout.columns.iter().enumerate() {
            worksheet.set_column_width(col as u16, column.width_cm * CHARS_PER_CM)?;
        }

        write_row(worksheet, 0, &layout.header, &formats)?;
        for (index, cells) in layout.rows.iter().enumerate() {
            write_row(worksheet, index as u32 + 1, cells, &formats)?;
        }
        worksheet.set_freeze_panes(1, 0)?;

        Ok(workbook)
    }
}

impl SheetWriter for XlsxSheetWriter {
    fn write(&self, layout: &SheetLayout, path: &Path) -> Result<SheetReport, ExportError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| ExportError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let mut workbook = self.build_workbook(layout)?;
        workbook.save(path)?;

        Ok(SheetReport {
            rows: layout.data_rows(),
            columns: layout.column_count(),
        })
    }
}

fn write_row(
    worksheet: &mut Worksheet,
    row: u32,
    cells: &[Cell],
    formats: &HashMap<CellStyle, Format>,
) -> Result<(), ExportError> {
    for (col, cell) in cells.iter().enumerate() {
        let format = &formats[&cell.style];
        worksheet.write_string_with_format(row, col as u16, cell_text(&cell.value), format)?;
    }
    Ok(())
}

fn cell_text(value: &str) -> &str {
    match value.char_indices().nth(MAX_CELL_CHARS) {
        Some((cut, _)) => &value[..cut],
        None => value,
    }
}

fn to_format(spec: &StyleSpec) -> Format {
    let mut format = Format::new()
        .set_font_name(spec.font_name)
        .set_font_size(spec.font_size)
        .set_align(FormatAlign::Top)
        .set_text_wrap();
    if spec.bold {
        format = format.set_bold();
    }
    if let Some(rgb) = spec.font_color {
        format = format.set_font_color(Color::RGB(rgb));
    }
    if let Some(rgb) = spec.background {
        format = format.set_background_color(Color::RGB(rgb));
    }
    if let Some(rgb) = spec.bottom_border {
        format = format
            .set_border_bottom(FormatBorder::Thin)
            .set_border_bottom_color(Color::RGB(rgb));
    }
    format
}
