//! Platform comparison and daily trend tables

use crate::cli::SortOrder;
use crate::core::{DayTotals, PlatformTotals, cost_per_result};
use crate::labels::platform_label;
use crate::output::ViewOptions;
use crate::output::format::{
    create_styled_table, format_amount, format_count, header_cell, money_color, right_cell,
    styled_cell, total_color,
};

fn share(part: f64, total: f64) -> f64 {
    if total > 0.0 { part / total * 100.0 } else { 0.0 }
}

pub(crate) fn print_platform_table(rows: &[PlatformTotals], opts: &ViewOptions) {
    let c = opts.use_color;
    let nf = opts.number_format;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Platform", c),
        header_cell("Spend", c),
        header_cell("Share", c),
        header_cell("Purchases", c),
        header_cell("CPR", c),
    ]);

    let total_spend: f64 = rows.iter().map(|r| r.spend).sum();
    let total_purchases: f64 = rows.iter().map(|r| r.purchases).sum();
    let green = money_color(c);

    for row in rows {
        table.add_row(vec![
            styled_cell(platform_label(row.platform, opts.lang), None, false),
            right_cell(&format_amount(row.spend, nf), green, false),
            right_cell(&format!("{:.1}%", share(row.spend, total_spend)), None, false),
            right_cell(&format_count(row.purchases, nf), None, false),
            right_cell(&format_amount(row.cpr, nf), None, false),
        ]);
    }

    let cyan = total_color(c);
    table.add_row(vec![
        styled_cell("TOTAL", cyan, true),
        right_cell(&format_amount(total_spend, nf), green, true),
        right_cell("", None, false),
        right_cell(&format_count(total_purchases, nf), cyan, true),
        right_cell(
            &format_amount(cost_per_result(total_spend, total_purchases), nf),
            cyan,
            true,
        ),
    ]);

    println!("\n  Platform Comparison\n");
    println!("{table}");
    println!();
}

pub(crate) fn output_platform_json(rows: &[PlatformTotals]) -> String {
    serde_json::to_string_pretty(rows).unwrap_or_else(|e| {
        tracing::error!("Failed to serialize JSON output: {e}");
        "[]".to_string()
    })
}

pub(crate) fn print_daily_table(days: &[DayTotals], opts: &ViewOptions) {
    let c = opts.use_color;
    let nf = opts.number_format;
    let mut rows: Vec<&DayTotals> = days.iter().collect();
    if matches!(opts.order, SortOrder::Desc) {
        rows.reverse();
    }

    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Date", c),
        header_cell("Spend", c),
        header_cell("Purchases", c),
        header_cell("CPR", c),
    ]);
    let green = money_color(c);
    for day in &rows {
        table.add_row(vec![
            styled_cell(&day.date, None, false),
            right_cell(&format_amount(day.spend, nf), green, false),
            right_cell(&format_count(day.purchases, nf), None, false),
            right_cell(&format_amount(day.cpr, nf), None, false),
        ]);
    }

    println!("\n  Daily Spend\n");
    println!("{table}");
    println!(
        "\n  {} days\n",
        format_count(rows.len() as f64, opts.number_format)
    );
}

pub(crate) fn output_daily_json(days: &[DayTotals], order: SortOrder) -> String {
    let mut rows: Vec<&DayTotals> = days.iter().collect();
    if matches!(order, SortOrder::Desc) {
        rows.reverse();
    }
    serde_json::to_string_pretty(&rows).unwrap_or_else(|e| {
        tracing::error!("Failed to serialize JSON output: {e}");
        "[]".to_string()
    })
}
