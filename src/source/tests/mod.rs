//! Tests for record sources
//!
//! Shared fixtures for writing small input files to temporary directories.


use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write `content` to `name` inside a fresh temporary directory
pub fn write_fixture(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    (temp_dir, path)
}

/// One cell of a workbook fixture
#[derive(Debug, Clone, Copy)]
pub enum SheetCell<'a> {
    Text(&'a str),
    Number(f64),
    Blank,
}

/// Write a single-sheet workbook whose first row lands on sheet row
/// `first_row + 1`
pub fn write_workbook(path: &Path, first_row: u32, rows: &[Vec<SheetCell>]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (offset, row) in rows.iter().enumerate() {
        let sheet_row = first_row + offset as u32;
        for (column, cell) in row.iter().enumerate() {
            let column = column as u16;
            match cell {
                SheetCell::Text(text) => {
                    worksheet.write_string(sheet_row, column, *text).unwrap();
                }
                SheetCell::Number(value) => {
                    worksheet.write_number(sheet_row, column, *value).unwrap();
                }
                SheetCell::Blank => {}
            }
        }
    }
    workbook.save(path).unwrap();
}

/// Box office sheet with a blank title and an unreadable gross
pub fn box_office_rows() -> Vec<Vec<SheetCell<'static>>> {
    use SheetCell::{Blank, Number, Text};
    vec![
        vec![Text("Movie"), Text("Gross")],
        vec![Text("Avatar"), Number(2_923_706_026.0)],
        vec![Blank, Number(1_000_000.0)],
        vec![Text("Broken"), Text("n/a")],
        vec![Text("Jaws"), Number(476_512_065.0)],
    ]
}

pub fn streaming_csv() -> String {
    "track_name,artist(s)_name,streams\n\
     Seven (feat. Latto),\"Latto, Jung Kook\",141381703\n\
     LALA,Myke Towers,133716286\n\
     vampire,Olivia Rodrigo,140003974\n"
        .to_string()
}

pub fn championship_json() -> String {
    r#"[
    {"Date": "Feb 12 2023", "SB": "LVII (57)", "Winning team": "Kansas City Chiefs", "Winning Team Points": 38, "Losing team": "Philadelphia Eagles", "Losing Team Points": 35},
    {"Date": "Feb 13 2022", "SB": "LVI (56)", "Winning team": "Los Angeles Rams", "Winning Team Points": 23, "Losing team": "Cincinnati Bengals", "Losing Team Points": 20}
]"#
    .to_string()
}
