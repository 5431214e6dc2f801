//! Sheet layout
//!
//! Maps normalized rows onto a single styled table: fixed column schema,
//! a styled header row and parity-shaded data rows. Pure and deterministic;
//! serialization is left to a `SheetWriter` adapter.

use crate::domain::entities::{NormalizedRow, MAX_CATEGORIES};

/// Name of the single table in the document
pub const SHEET_NAME: &str = "Articles";

/// A column of the output table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    pub header: &'static str,
    /// Width in centimetres
    pub width_cm: f64,
}

const fn column(header: &'static str, width_cm: f64) -> Column {
    Column { header, width_cm }
}

/// Fixed column schema, in order
pub const COLUMNS: [Column; 10] = [
    column("Title", 8.0),
    column("Description", 16.0),
    column("URL", 10.0),
    column("Category 1", 5.0),
    column("Category 2", 5.0),
    column("Category 3", 5.0),
    column("Category 4", 5.0),
    column("Category 5", 5.0),
    column("Category 6", 5.0),
    column("Publication Date", 6.0),
];

const _: () = assert!(COLUMNS.len() == 4 + MAX_CATEGORIES);

/// Index of the first category column
const FIRST_CATEGORY_COLUMN: usize = 3;

/// Visual style of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellStyle {
    Header,
    Data,
    Category,
    /// Data cell on an odd (zero-based) row
    AltData,
    /// Category cell on an odd (zero-based) row
    AltCategory,
}

/// Concrete formatting values for a `CellStyle`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleSpec {
    /// RGB background, `None` for no fill
    pub background: Option<u32>,
    pub font_color: Option<u32>,
    pub bold: bool,
    pub font_name: &'static str,
    pub font_size: f64,
    /// RGB colour of a thin bottom border
    pub bottom_border: Option<u32>,
}

const FONT: &str = "Arial";
const ROW_BORDER: u32 = 0xDEE2E6;

impl CellStyle {
    pub const ALL: [CellStyle; 5] = [
        CellStyle::Header,
        CellStyle::Data,
        CellStyle::Category,
        CellStyle::AltData,
        CellStyle::AltCategory,
    ];

    /// Style for a data cell in `column` of the data row at `row_index`
    pub fn for_data_cell(row_index: usize, column: usize) -> Self {
        let is_category =
            (FIRST_CATEGORY_COLUMN..FIRST_CATEGORY_COLUMN + MAX_CATEGORIES).contains(&column);
        match (row_index % 2 == 1, is_category) {
            (false, false) => CellStyle::Data,
            (false, true) => CellStyle::Category,
            (true, false) => CellStyle::AltData,
            (true, true) => CellStyle::AltCategory,
        }
    }

    pub fn spec(self) -> StyleSpec {
        let data = |background| StyleSpec {
            background,
            font_color: None,
            bold: false,
            font_name: FONT,
            font_size: 10.0,
            bottom_border: Some(ROW_BORDER),
        };
        match self {
            CellStyle::Header => StyleSpec {
                background: Some(0x2C3E50),
                font_color: Some(0xFFFFFF),
                bold: true,
                font_name: FONT,
                font_size: 11.0,
                bottom_border: None,
            },
            CellStyle::Data => data(None),
            CellStyle::Category => data(Some(0xF0F4F8)),
            CellStyle::AltData => data(Some(0xF9FAFB)),
            CellStyle::AltCategory => data(Some(0xEEF1F5)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub value: String,
    pub style: CellStyle,
}

/// A complete table ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    pub name: &'static str,
    pub columns: &'static [Column],
    pub header: Vec<Cell>,
    pub rows: Vec<Vec<Cell>>,
}

impl SheetLayout {
    pub fn data_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

/// Lay out the rows under the fixed schema
pub fn build_layout(rows: &[NormalizedRow]) -> SheetLayout {
    let header = COLUMNS
        .iter()
        .map(|c| Cell {
            value: c.header.to_string(),
            style: CellStyle::Header,
        })
        .collect();

    let rows = rows
        .iter()
        .enumerate()
        .map(|(index, row)| layout_row(index, row))
        .collect();

    SheetLayout {
        name: SHEET_NAME,
        columns: &COLUMNS,
        header,
        rows,
    }
}

fn layout_row(index: usize, row: &NormalizedRow) -> Vec<Cell> {
    [row.title.as_str(), row.description.as_str(), row.url.as_str()]
        .into_iter()
        .chain(row.categories.iter().map(String::as_str))
        .chain(std::iter::once(row.publication_date.as_str()))
        .enumerate()
        .map(|(column, value)| Cell {
            value: value.to_string(),
            style: CellStyle::for_data_cell(index, column),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_row;

    #[test]
    fn header_follows_schema() {
        let layout = build_layout(&[]);
        let headers: Vec<&str> = layout.header.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(
            headers,
            vec![
                "Title",
                "Description",
                "URL",
                "Category 1",
                "Category 2",
                "Category 3",
                "Category 4",
                "Category 5",
                "Category 6",
                "Publication Date",
            ]
        );
        assert!(layout.header.iter().all(|c| c.style == CellStyle::Header));
        assert_eq!(layout.name, "Articles");
        assert_eq!(layout.column_count(), 10);
        assert_eq!(layout.data_rows(), 0);
    }

    #[test]
    fn row_cells_follow_column_order() {
        let row = test_row(1);
        let layout = build_layout(std::slice::from_ref(&row));
        let values: Vec<&str> = layout.rows[0].iter().map(|c| c.value.as_str()).collect();

        assert_eq!(values.len(), 10);
        assert_eq!(values[0], row.title);
        assert_eq!(values[1], row.description);
        assert_eq!(values[2], row.url);
        assert_eq!(values[3], row.categories[0]);
        assert_eq!(values[8], row.categories[5]);
        assert_eq!(values[9], row.publication_date);
    }

    #[test]
    fn rows_alternate_shading_by_parity() {
        let rows: Vec<_> = (0..3).map(test_row).collect();
        let layout = build_layout(&rows);

        let styles = |i: usize| -> Vec<CellStyle> { layout.rows[i].iter().map(|c| c.style).collect() };

        let even = styles(0);
        assert_eq!(even[0], CellStyle::Data);
        assert_eq!(even[2], CellStyle::Data);
        assert!(even[3..9].iter().all(|s| *s == CellStyle::Category));
        assert_eq!(even[9], CellStyle::Data);

        let odd = styles(1);
        assert_eq!(odd[0], CellStyle::AltData);
        assert!(odd[3..9].iter().all(|s| *s == CellStyle::AltCategory));
        assert_eq!(odd[9], CellStyle::AltData);

        assert_eq!(styles(2), even);
    }

    #[test]
    fn category_columns_are_narrower() {
        let title = COLUMNS[0].width_cm;
        let description = COLUMNS[1].width_cm;
        assert!(COLUMNS[3..9]
            .iter()
            .all(|c| c.width_cm < title && c.width_cm < description));
    }

    #[test]
    fn styles_are_visually_distinct() {
        let backgrounds: Vec<Option<u32>> =
            CellStyle::ALL.iter().map(|s| s.spec().background).collect();
        for (i, a) in backgrounds.iter().enumerate() {
            for b in &backgrounds[i + 1..] {
                assert_ne!(a, b);
            }
        }

        let header = CellStyle::Header.spec();
        assert!(header.bold);
        assert_eq!(header.font_color, Some(0xFFFFFF));
    }

    #[test]
    fn layout_is_deterministic() {
        let rows: Vec<_> = (0..4).map(test_row).collect();
        assert_eq!(build_layout(&rows), build_layout(&rows));
    }
}
