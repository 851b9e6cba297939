/// A raw tabular export, before any layout interpretation.
///
/// Every cell is carried as text: the sources mix numeric, text and
/// empty cells freely, and all downstream cleanup (trimming, `.0`
/// stripping, dash placeholders) is defined on strings.
#[derive(Debug, Clone, Default)]
pub struct RawSheet {
    pub rows: Vec<Vec<String>>,
}

impl RawSheet {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Widest row at or after `start`. Rows can be ragged (merged
    /// cells in the export collapse to short rows), and the metadata
    /// banner above the data can be wider than any data row, so
    /// layout validation measures only the rows it will read.
    pub fn width_from(&self, start: usize) -> usize {
        self.rows
            .iter()
            .skip(start)
            .map(Vec::len)
            .max()
            .unwrap_or(0)
    }

    /// Cell at (row, col), empty string when the row is too short.
    pub fn cell<'a>(&'a self, row: &'a [String], col: usize) -> &'a str {
        row.get(col).map(String::as_str).unwrap_or("")
    }
}
