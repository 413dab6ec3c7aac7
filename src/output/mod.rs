mod breakdown;
mod entries;
mod format;
mod ranges;
mod report;

pub(crate) use breakdown::{
    output_daily_json, output_platform_json, print_daily_table, print_platform_table,
};
pub(crate) use entries::{output_entry_json, print_entry_list};
pub(crate) use format::NumberFormat;
pub(crate) use ranges::{output_range_json, print_range_table};
pub(crate) use report::{Report, output_report_json, print_report};

use crate::cli::SortOrder;
use crate::labels::Lang;

/// Rendering settings shared by every table
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ViewOptions {
    pub(crate) order: SortOrder,
    pub(crate) use_color: bool,
    pub(crate) lang: Lang,
    pub(crate) number_format: NumberFormat,
}
