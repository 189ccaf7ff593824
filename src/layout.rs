//! In-memory plan of a workbook, independent of the xlsx library.

use crate::protection::{SheetLock, WorkbookLock};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    Empty,
    Text(String),
    Number(f64),
    /// Formula text without the leading `=`.
    Formula(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CellLayout {
    pub content: CellContent,
    pub style: &'static str,
    pub locked: bool,
}

/// A list-type data validation over one range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListValidation {
    /// Target range, e.g. `D2:D1000`.
    pub range: String,
    /// `formula1`: a quoted literal list or a range formula.
    pub source: String,
    pub allow_blank: bool,
    pub error_title: String,
    pub error_message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLayout {
    pub path: PathBuf,
    pub anchor: String,
    /// Display size in pixels, regardless of the file's own size.
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteLayout {
    pub cell: String,
    pub author: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    pub name: String,
    pub tab_color: &'static str,
    pub column_widths: Vec<(u32, f64)>,
    pub row_heights: Vec<(u32, f64)>,
    /// Keyed by (row, column), both 1-based.
    pub cells: BTreeMap<(u32, u32), CellLayout>,
    pub merges: Vec<String>,
    pub image: Option<ImageLayout>,
    pub notes: Vec<NoteLayout>,
    pub validations: Vec<ListValidation>,
    pub lock: Option<SheetLock>,
}

impl SheetLayout {
    pub fn new(name: impl Into<String>, tab_color: &'static str) -> Self {
        Self {
            name: name.into(),
            tab_color,
            column_widths: Vec::new(),
            row_heights: Vec::new(),
            cells: BTreeMap::new(),
            merges: Vec::new(),
            image: None,
            notes: Vec::new(),
            validations: Vec::new(),
            lock: None,
        }
    }

    pub fn set_cell(
        &mut self,
        row: u32,
        col: u32,
        content: CellContent,
        style: &'static str,
        locked: bool,
    ) {
        self.cells.insert(
            (row, col),
            CellLayout {
                content,
                style,
                locked,
            },
        );
    }
}

/// Lookups used when asserting on a planned sheet.
#[cfg(test)]
impl SheetLayout {
    pub fn cell(&self, row: u32, col: u32) -> Option<&CellLayout> {
        self.cells.get(&(row, col))
    }

    /// Formula text at a cell, if it holds one.
    pub fn formula(&self, row: u32, col: u32) -> Option<&str> {
        match &self.cell(row, col)?.content {
            CellContent::Formula(f) => Some(f),
            _ => None,
        }
    }

    pub fn text(&self, row: u32, col: u32) -> Option<&str> {
        match &self.cell(row, col)?.content {
            CellContent::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Text of every cell in `row` from column 1 up to the last one written.
    pub fn row_text(&self, row: u32) -> Vec<String> {
        self.cells
            .range((row, 0)..=(row, u32::MAX))
            .map(|(_, cell)| match &cell.content {
                CellContent::Text(t) => t.clone(),
                CellContent::Number(n) => n.to_string(),
                CellContent::Formula(f) => format!("={f}"),
                CellContent::Empty => String::new(),
            })
            .collect()
    }

    pub fn max_row(&self) -> u32 {
        self.cells.keys().map(|(row, _)| *row).max().unwrap_or(0)
    }

    pub fn unlocked_cells(&self) -> Vec<String> {
        self.cells
            .iter()
            .filter(|(_, cell)| !cell.locked)
            .map(|((row, col), _)| cell_ref(*col, *row))
            .collect()
    }

    pub fn validation(&self, range: &str) -> Option<&ListValidation> {
        self.validations.iter().find(|v| v.range == range)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkbookLayout {
    pub sheets: Vec<SheetLayout>,
    pub lock: Option<WorkbookLock>,
}

impl WorkbookLayout {
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    #[cfg(test)]
    pub fn sheet(&self, name: &str) -> Option<&SheetLayout> {
        self.sheets.iter().find(|s| s.name == name)
    }
}

/// Column number to letters (1 = A, 27 = AA).
pub fn column_letter(mut col: u32) -> String {
    let mut letters = Vec::new();
    while col > 0 {
        let rem = (col - 1) % 26;
        letters.push((b'A' + rem as u8) as char);
        col = (col - 1) / 26;
    }
    letters.iter().rev().collect()
}

pub fn cell_ref(col: u32, row: u32) -> String {
    format!("{}{}", column_letter(col), row)
}

/// A single-column range such as `N2:N1000`.
pub fn column_range(col: u32, first_row: u32, last_row: u32) -> String {
    let letter = column_letter(col);
    format!("{letter}{first_row}:{letter}{last_row}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_letter() {
        assert_eq!(column_letter(1), "A");
        assert_eq!(column_letter(15), "O");
        assert_eq!(column_letter(26), "Z");
        assert_eq!(column_letter(27), "AA");
        assert_eq!(column_letter(28), "AB");
        assert_eq!(column_range(4, 2, 1000), "D2:D1000");
    }

    #[test]
    fn test_row_text_and_unlocked() {
        let mut sheet = SheetLayout::new("S", "000000");
        sheet.set_cell(1, 2, CellContent::Text("b".into()), "x", true);
        sheet.set_cell(1, 1, CellContent::Text("a".into()), "x", true);
        sheet.set_cell(2, 1, CellContent::Formula("B2".into()), "x", false);

        assert_eq!(sheet.row_text(1), vec!["a", "b"]);
        assert_eq!(sheet.row_text(2), vec!["=B2"]);
        assert_eq!(sheet.formula(2, 1), Some("B2"));
        assert_eq!(sheet.unlocked_cells(), vec!["A2"]);
        assert_eq!(sheet.max_row(), 2);
    }
}
