//! `ranges` command: the named ranges and the days each covers today

use chrono::NaiveDate;

use crate::consts::EMPTY_CELL;
use crate::core::{DateFilterState, RangeOption};
use crate::labels::range_label;
use crate::output::ViewOptions;
use crate::output::format::{create_styled_table, header_cell, styled_cell};

/// Ranges that resolve from `today` alone; `custom` needs --from/--to
fn named_ranges() -> impl Iterator<Item = RangeOption> {
    RangeOption::ALL
        .into_iter()
        .filter(|o| *o != RangeOption::Custom)
}

pub(crate) fn print_range_table(today: NaiveDate, opts: &ViewOptions) {
    let c = opts.use_color;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Range", c),
        header_cell("Name", c),
        header_cell("From", c),
        header_cell("To", c),
    ]);

    for option in named_ranges() {
        let bounds = DateFilterState::new(option).bounds(today);
        let (start, end) = match &bounds {
            Some((start, end)) => (start.as_str(), end.as_str()),
            None => (EMPTY_CELL, EMPTY_CELL),
        };
        table.add_row(vec![
            styled_cell(option.as_str(), None, false),
            styled_cell(range_label(option, opts.lang), None, false),
            styled_cell(start, None, false),
            styled_cell(end, None, false),
        ]);
    }

    println!("\n  Date ranges · today is {today}\n");
    println!("{table}");
    println!("\n  Use --from/--to for a custom range.\n");
}

pub(crate) fn output_range_json(today: NaiveDate) -> String {
    let output: Vec<serde_json::Value> = named_ranges()
        .map(|option| {
            let (start, end) = DateFilterState::new(option).bounds(today).unzip();
            serde_json::json!({
                "option": option,
                "start": start,
                "end": end,
            })
        })
        .collect();

    serde_json::to_string_pretty(&output).unwrap_or_else(|e| {
        tracing::error!("Failed to serialize JSON output: {e}");
        "[]".to_string()
    })
}
