use serde_json::Value;

use crate::core::DailyEntry;
use crate::error::ImportError;

const REQUIRED_FIELDS: [&str; 3] = ["id", "date", "project"];

fn has_text(item: &Value, field: &str) -> bool {
    item.get(field)
        .and_then(Value::as_str)
        .is_some_and(|s| !s.trim().is_empty())
}

/// Parse a backup file into entries
///
/// The payload is accepted only as a whole: one bad element rejects the
/// entire import.
pub(crate) fn parse_backup(text: &str) -> Result<Vec<DailyEntry>, ImportError> {
    let value: Value = serde_json::from_str(text).map_err(ImportError::Json)?;
    let Value::Array(items) = value else {
        return Err(ImportError::NotArray);
    };

    let mut entries = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        if let Some(field) = REQUIRED_FIELDS.into_iter().find(|f| !has_text(&item, f)) {
            return Err(ImportError::MissingField { index, field });
        }
        let entry: DailyEntry =
            serde_json::from_value(item).map_err(|e| ImportError::InvalidEntry {
                index,
                message: e.to_string(),
            })?;
        entries.push(entry);
    }
    Ok(entries)
}
