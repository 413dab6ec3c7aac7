/// Standard date format used throughout the codebase: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Shown in a cell that has no value, e.g. no qualifying platform
pub(crate) const EMPTY_CELL: &str = "-";

/// Byte-order mark written at the start of CSV exports
pub(crate) const UTF8_BOM: &str = "\u{FEFF}";

/// Environment variable holding the log filter
pub(crate) const LOG_ENV: &str = "ADSPEND_LOG";
