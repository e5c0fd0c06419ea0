//! KLD sheet reader: pulls the (Particulars, Details) columns out of an xlsx upload.
//!
//! Layout contract: row 0 is a header and is skipped; column D (index 3) holds the
//! label and column E (index 4) the value for every following row.

use std::io::Cursor;

use calamine::{Data, Range, Reader, Xlsx};
use thiserror::Error;
use tracing::info;

const LABEL_COLUMN: usize = 3;
const VALUE_COLUMN: usize = 4;
const MIN_COLUMNS: usize = VALUE_COLUMN + 1;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("Could not open workbook: {0}")]
    Workbook(String),

    #[error("Workbook contains no worksheet")]
    NoWorksheet,

    #[error(
        "Sheet has {found} column(s); expected 'Particulars' in column D and 'Details' in column E"
    )]
    TooFewColumns { found: usize },

    #[error("Sheet contains no product rows after cleaning")]
    NoEntries,
}

/// Uncleaned text of the label and value cells of one data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPair {
    pub label: String,
    pub value: String,
}

/// Extracts label/value pairs from a grid of cell text (row 0 = header).
///
/// Rows shorter than the value column contribute empty cells; the sheet as a
/// whole must reach column E or the upload is rejected.
pub fn pairs_from_rows(rows: &[Vec<String>]) -> Result<Vec<RawPair>, SheetError> {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    if width < MIN_COLUMNS {
        return Err(SheetError::TooFewColumns { found: width });
    }

    let cell = |row: &[String], idx: usize| row.get(idx).cloned().unwrap_or_default();

    Ok(rows
        .iter()
        .skip(1)
        .map(|row| RawPair {
            label: cell(row, LABEL_COLUMN),
            value: cell(row, VALUE_COLUMN),
        })
        .collect())
}

/// Reads the first worksheet of an xlsx file held in memory.
pub fn read_xlsx(bytes: &[u8]) -> Result<Vec<RawPair>, SheetError> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))
        .map_err(|e| SheetError::Workbook(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(SheetError::NoWorksheet)?
        .map_err(|e| SheetError::Workbook(e.to_string()))?;

    let rows = grid_from_range(&range);
    info!("Read KLD sheet: {} row(s)", rows.len());
    pairs_from_rows(&rows)
}

/// Converts a calamine range into absolute-position rows.
///
/// calamine trims leading empty rows/columns from a range, so cells are placed
/// by their absolute coordinates to keep column D at index 3.
fn grid_from_range(range: &Range<Data>) -> Vec<Vec<String>> {
    let Some((end_row, end_col)) = range.end() else {
        return Vec::new();
    };

    (0..=end_row)
        .map(|row| {
            (0..=end_col)
                .map(|col| {
                    range
                        .get_value((row, col))
                        .map(cell_text)
                        .unwrap_or_default()
                })
                .collect()
        })
        .collect()
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}
