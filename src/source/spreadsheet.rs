//! Spreadsheet record source
//!
//! Reads the first worksheet of a workbook. Row 1 is the header; each later
//! row becomes one record keyed by header name, positioned by its sheet row
//! number. Rows with no content are ignored. A sheet whose row 1 is empty
//! has no header and yields no columns.

use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};
use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::error::{Result, StatsError};
use crate::models::{FieldValue, Record, RecordSet};

/// Read the first worksheet of a workbook file
pub fn read(path: &Path) -> Result<RecordSet> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| StatsError::spreadsheet(path, e.to_string()))?;

    if let Some(name) = workbook.sheet_names().first() {
        debug!("Reading worksheet '{}' from {}", name, path.display());
    }

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| StatsError::spreadsheet(path, "workbook has no worksheets"))?
        .map_err(|e| StatsError::spreadsheet(path, e.to_string()))?;

    let record_set = from_range(&range);
    if record_set.columns.is_empty() {
        warn!("Headers not found on row 1 of {}", path.display());
    }
    Ok(record_set)
}

/// Build records from a worksheet range, anchored at cell A1
///
/// Calamine ranges start at the first used cell. Leading blank columns are
/// padded back in so header names keep their sheet column numbers.
pub fn from_range(range: &Range<Data>) -> RecordSet {
    match range.start() {
        None => RecordSet::default(),
        Some((0, 0)) => from_rows(range.rows()),
        Some((0, column)) => {
            let offset = column as usize;
            from_rows(range.rows().map(|row| {
                let mut cells = vec![Data::Empty; offset];
                cells.extend_from_slice(row);
                cells
            }))
        }
        Some((row, _)) => {
            debug!("First used cell is on sheet row {}", row + 1);
            RecordSet::default()
        }
    }
}

/// Build records from a grid of cells whose first row is the header
pub fn from_rows<I, R>(rows: I) -> RecordSet
where
    I: IntoIterator<Item = R>,
    R: AsRef<[Data]>,
{
    let mut rows = rows.into_iter();
    let Some(header) = rows.next() else {
        return RecordSet::default();
    };

    let columns: Vec<String> = header
        .as_ref()
        .iter()
        .enumerate()
        .map(|(index, cell)| header_name(index, cell))
        .collect();

    let mut records = Vec::new();
    for (index, row) in rows.enumerate() {
        let cells = row.as_ref();
        if cells.iter().all(is_blank_cell) {
            continue;
        }

        // header is sheet row 1
        let position = index + 2;
        let fields: IndexMap<String, FieldValue> = columns
            .iter()
            .enumerate()
            .map(|(column, name)| {
                let value = cells.get(column).map_or(FieldValue::Empty, to_field_value);
                (name.clone(), value)
            })
            .collect();
        records.push(Record::new(position, fields));
    }

    RecordSet::new(columns, records)
}

fn header_name(index: usize, cell: &Data) -> String {
    let name = cell.to_string().trim().to_string();
    if name.is_empty() {
        format!("column_{}", index + 1)
    } else {
        name
    }
}

fn is_blank_cell(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(text) => text.trim().is_empty(),
        _ => false,
    }
}

fn to_field_value(cell: &Data) -> FieldValue {
    match cell {
        Data::Empty => FieldValue::Empty,
        Data::Int(value) => FieldValue::Integer(*value),
        Data::Float(value) => FieldValue::Float(*value),
        Data::String(text) => FieldValue::Text(text.clone()),
        Data::Bool(flag) => FieldValue::Text(flag.to_string()),
        other => FieldValue::Text(other.to_string()),
    }
}
