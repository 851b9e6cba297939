// src/export/xlsx.rs

use crate::errors::AppResult;
use crate::export::model::{get_headers, summary_to_row};
use crate::export::notify_export_success;
use crate::models::AgentSummary;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX with styling and auto-sized columns.
pub(crate) fn export_xlsx(summaries: &[AgentSummary], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // ---------------------------
    // Empty dataset
    // ---------------------------
    if summaries.is_empty() {
        worksheet.write(0, 0, "No data available")?;
        workbook.save(path)?;
        notify_export_success("XLSX (empty dataset)", path);
        return Ok(());
    }

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *header, &header_format)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    // ---------------------------
    // Column width bookkeeping
    // ---------------------------
    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Data rows
    // ---------------------------
    for (row_index, summary) in summaries.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        let values = summary_to_row(summary);

        for (col, value) in values.iter().enumerate() {
            let v = value.as_str();

            write_xlsx_cell(worksheet, row, col as u16, v, band_color)?;

            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(v));
        }
    }

    // ---------------------------
    // Set column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, *w as f64 + 2.0)?;
    }

    // Generation stamp below the table.
    let stamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    worksheet.write(
        (summaries.len() + 2) as u32,
        0,
        format!("Generated at {stamp}"),
    )?;

    workbook.save(path)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Write a single cell: the count columns as right-aligned numbers,
/// everything else (ids included, to keep leading zeros) as text.
fn write_xlsx_cell(
    worksheet: &mut rust_xlsxwriter::Worksheet,
    row: u32,
    col: u16,
    s: &str,
    bg: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    // Matured-count columns
    let is_count = (6..=8).contains(&col);
    if is_count && let Ok(num) = s.parse::<f64>() {
        let fmt = base.set_align(FormatAlign::Right);
        worksheet.write_with_format(row, col, num, &fmt)?;
        return Ok(());
    }

    worksheet.write_with_format(row, col, s, &base)?;
    Ok(())
}
