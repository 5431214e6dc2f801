//! ODS sheet writer implementation
//!
//! Serializes a `SheetLayout` with `spreadsheet-ods`. Column widths are
//! stored in centimetres as laid out, and the file is written in one step.

use std::collections::HashMap;
use std::path::Path;

use spreadsheet_ods::color::Rgb;
use spreadsheet_ods::defaultstyles::DefaultFormat;
use spreadsheet_ods::style::units::{Border, Length};
use spreadsheet_ods::{CellStyle as OdsCellStyle, CellStyleRef, Sheet, WorkBook};

use crate::domain::ports::{SheetReport, SheetWriter};
use crate::error::ExportError;
use crate::sheet::{CellStyle, SheetLayout, StyleSpec};

/// Width of the thin bottom border on data cells
const BORDER_WIDTH_PT: f64 = 0.75;

#[derive(Debug, Default, Clone, Copy)]
pub struct OdsSheetWriter;

impl OdsSheetWriter {
    pub fn new() -> Self {
        Self
    }

    fn build_workbook(&self, layout: &SheetLayout) -> WorkBook {
        let mut workbook = WorkBook::new_empty();
        let styles: HashMap<CellStyle, CellStyleRef> = CellStyle::ALL
            .iter()
            .map(|style| {
                let ods_style = to_cell_style(style_name(*style), &style.spec());
                (*style, workbook.add_cellstyle(ods_style))
            })
            .collect();

        let mut sheet = Sheet::new(layout.name);
        for (col, column) in layout.columns.iter().enumerate() {
            sheet.set_col_width(col as u32, Length::Cm(column.width_cm));
        }

        let all_rows = std::iter::once(&layout.header).chain(layout.rows.iter());
        for (row, cells) in all_rows.enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                sheet.set_styled_value(
                    row as u32,
                    col as u32,
                    cell.value.as_str(),
                    &styles[&cell.style],
                );
            }
        }

        workbook.push_sheet(sheet);
        workbook
    }
}

impl SheetWriter for OdsSheetWriter {
    fn write(&self, layout: &SheetLayout, path: &Path) -> Result<SheetReport, ExportError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| ExportError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let mut workbook = self.build_workbook(layout);
        spreadsheet_ods::write_ods(&mut workbook, path)?;

        Ok(SheetReport {
            rows: layout.data_rows(),
            columns: layout.column_count(),
        })
    }
}

fn style_name(style: CellStyle) -> &'static str {
    match style {
        CellStyle::Header => "header",
        CellStyle::Data => "data",
        CellStyle::Category => "category",
        CellStyle::AltData => "data_alt",
        CellStyle::AltCategory => "category_alt",
    }
}

fn rgb(value: u32) -> Rgb<u8> {
    Rgb::new((value >> 16) as u8, (value >> 8) as u8, value as u8)
}

fn to_cell_style(name: &str, spec: &StyleSpec) -> OdsCellStyle {
    let mut style = OdsCellStyle::new(name, &DefaultFormat::default());
    style.set_font_name(spec.font_name);
    style.set_font_size(Length::Pt(spec.font_size).into());
    if spec.bold {
        style.set_font_bold();
    }
    if let Some(color) = spec.font_color {
        style.set_color(rgb(color));
    }
    if let Some(color) = spec.background {
        style.set_background_color(rgb(color));
    }
    if let Some(color) = spec.bottom_border {
        style.set_border_bottom(Length::Pt(BORDER_WIDTH_PT), Border::Solid, rgb(color));
    }
    style
}
