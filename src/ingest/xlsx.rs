use crate::errors::{AppError, AppResult};
use crate::ingest::sheet::RawSheet;
use calamine::{Data, Reader, Xlsx, open_workbook};
use std::path::Path;

/// Read the first worksheet of an xlsx/xlsm export into a raw sheet.
///
/// The production exports are single-sheet workbooks; additional
/// sheets, when present, hold pivots we do not consume.
pub fn read_xlsx(path: &Path) -> AppResult<RawSheet> {
    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|e: calamine::XlsxError| AppError::UnreadableFile {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::UnreadableFile {
            path: path.display().to_string(),
            reason: "workbook contains no worksheets".to_string(),
        })??;

    let rows = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    Ok(RawSheet::new(rows))
}

/// Flatten a typed cell to text. Floats keep their `.0` artifact here
/// (a numeric id column reads back as `101.0`); the normalizer strips
/// it so csv and xlsx inputs converge on the same keys.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                format!("{:.1}", f)
            } else {
                f.to_string()
            }
        }
        Data::Int(i) => i.to_string(),
        other => other.to_string(),
    }
}
