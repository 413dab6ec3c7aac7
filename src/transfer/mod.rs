//! Export to CSV/TSV/JSON and import from a JSON backup

mod export;
mod import;

pub(crate) use export::{backup_file_name, csv_file_name, to_backup_json, to_csv, to_tsv};
pub(crate) use import::parse_backup;
