use crate::errors::AppResult;
use crate::ingest::sheet::RawSheet;
use std::path::Path;

/// Read a CSV export into a raw sheet.
///
/// Header handling is disabled on purpose: the exports carry metadata
/// rows above the real header, so row skipping / header detection is a
/// layout concern, not a reader concern. `flexible` because metadata
/// rows rarely have the same width as data rows.
pub fn read_csv(path: &Path) -> AppResult<RawSheet> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(RawSheet::new(rows))
}
