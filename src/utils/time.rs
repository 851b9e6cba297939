//! Duration codec: parsing H:M:S strings into seconds and formatting
//! seconds back to zero-padded HH:MM:SS.

/// Parse a `H:M:S` duration into seconds.
///
/// The hour component is unbounded and segments do not need to be
/// zero-padded (`"1:2:3"` is 3723). Anything that is not three
/// colon-separated integers (empty cell, `"-"` placeholder, free text,
/// wrong segment count) parses as 0; malformed cells must never abort
/// the report.
pub fn parse_duration(text: &str) -> i64 {
    let parts: Vec<&str> = text.trim().split(':').collect();
    if parts.len() != 3 {
        return 0;
    }

    let mut segs = [0i64; 3];
    for (i, p) in parts.iter().enumerate() {
        match p.trim().parse::<i64>() {
            Ok(v) => segs[i] = v,
            Err(_) => return 0,
        }
    }

    segs[0] * 3600 + segs[1] * 60 + segs[2]
}

/// Format seconds as zero-padded `HH:MM:SS`.
///
/// Negative durations (net login can go below zero when the source
/// data is inconsistent) render as `-HH:MM:SS` over the absolute value.
pub fn format_duration(seconds: i64) -> String {
    let sign = if seconds < 0 { "-" } else { "" };
    let s = seconds.abs();
    format!("{}{:02}:{:02}:{:02}", sign, s / 3600, (s % 3600) / 60, s % 60)
}
