use chrono::NaiveDate;
use std::fmt::Write;

use crate::consts::UTF8_BOM;
use crate::core::{DailyEntry, day_string};
use crate::error::AppError;
use crate::labels::{Lang, csv_headers, platform_label, project_label, tsv_headers};

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// CPR cell: two decimals when there were purchases, a bare `0` otherwise
fn cpr_cell(entry: &DailyEntry) -> String {
    if entry.purchases > 0.0 {
        format!("{:.2}", entry.spend / entry.purchases)
    } else {
        "0".to_string()
    }
}

fn row_cells(entry: &DailyEntry, lang: Lang) -> [String; 6] {
    [
        entry.date.clone(),
        project_label(entry.project, lang).to_string(),
        platform_label(entry.platform, lang).to_string(),
        entry.spend.to_string(),
        entry.purchases.to_string(),
        cpr_cell(entry),
    ]
}

/// Spreadsheet export: BOM, localized header, comma separated
pub(crate) fn to_csv(entries: &[DailyEntry], lang: Lang) -> Result<String, AppError> {
    if entries.is_empty() {
        return Err(AppError::NoData);
    }
    let mut out = String::from(UTF8_BOM);
    out.push_str(&csv_headers(lang).map(csv_escape).join(","));
    for entry in entries {
        let cells = row_cells(entry, lang).map(|c| csv_escape(&c));
        let _ = write!(out, "\n{}", cells.join(","));
    }
    Ok(out)
}

/// Clipboard export: no BOM, tab separated, pastes straight into a sheet grid
pub(crate) fn to_tsv(entries: &[DailyEntry], lang: Lang) -> Result<String, AppError> {
    if entries.is_empty() {
        return Err(AppError::NoData);
    }
    let mut out = tsv_headers(lang).join("\t");
    for entry in entries {
        let cells = row_cells(entry, lang).map(|c| c.replace(['\t', '\n'], " "));
        let _ = write!(out, "\n{}", cells.join("\t"));
    }
    Ok(out)
}

/// Full backup in the persisted layout
pub(crate) fn to_backup_json(entries: &[DailyEntry]) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(entries)?)
}

pub(crate) fn backup_file_name(today: NaiveDate) -> String {
    format!("adspend_backup_{}.json", day_string(today))
}

pub(crate) fn csv_file_name(today: NaiveDate) -> String {
    format!("adspend_report_{}.csv", day_string(today))
}
