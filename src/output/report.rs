//! Dashboard report: overview summary plus one section per project

use chrono::NaiveDate;

use crate::core::{AggregatedStats, DateFilterState, ProjectView, day_string};
use crate::labels::{Lang, project_label, range_label};
use crate::output::ViewOptions;
use crate::output::entries::{render_entry_table, sort_by_date};
use crate::output::format::{
    create_styled_table, format_count, format_money, header_cell, money_color, platform_or_dash,
    right_cell, styled_cell,
};

/// Everything the report command shows
#[derive(Debug, Clone)]
pub(crate) struct Report {
    pub(crate) today: NaiveDate,
    pub(crate) filter: DateFilterState,
    /// Present only when a single project is selected
    pub(crate) overview: Option<(DateFilterState, AggregatedStats)>,
    pub(crate) sections: Vec<ProjectView>,
}

/// "Last 7 days (2024-03-08 → 2024-03-15)"
fn describe_filter(filter: &DateFilterState, today: NaiveDate, lang: Lang) -> String {
    let label = range_label(filter.option, lang);
    match filter.bounds(today) {
        Some((start, end)) if start == end => format!("{label} ({start})"),
        Some((start, end)) => format!("{label} ({start} → {end})"),
        None => label.to_string(),
    }
}

fn render_stats_table(stats: &AggregatedStats, opts: &ViewOptions) -> String {
    let c = opts.use_color;
    let nf = opts.number_format;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Spend", c),
        header_cell("Purchases", c),
        header_cell("CPR", c),
        header_cell("Best platform", c),
        header_cell("Highest cost", c),
    ]);
    table.add_row(vec![
        right_cell(&format_money(stats.total_spend, nf), money_color(c), true),
        right_cell(&format_count(stats.total_purchases, nf), None, false),
        right_cell(&format_money(stats.cpr, nf), None, false),
        styled_cell(platform_or_dash(stats.best_platform, opts.lang), None, false),
        styled_cell(
            platform_or_dash(stats.highest_cost_platform, opts.lang),
            None,
            false,
        ),
    ]);
    table.to_string()
}

pub(crate) fn print_report(report: &Report, opts: &ViewOptions) {
    if let Some((filter, stats)) = &report.overview {
        println!(
            "\n  Overview · {}\n",
            describe_filter(filter, report.today, opts.lang)
        );
        println!("{}", render_stats_table(stats, opts));
    }

    let range = describe_filter(&report.filter, report.today, opts.lang);
    for section in &report.sections {
        println!(
            "\n  {} · {}\n",
            project_label(section.project, opts.lang),
            range
        );
        println!("{}", render_stats_table(&section.stats, opts));
        if section.entries.is_empty() {
            println!("\n  No entries in this range.");
            continue;
        }
        let mut entries = section.entries.clone();
        sort_by_date(&mut entries, opts.order);
        println!();
        println!("{}", render_entry_table(&entries, false, false, opts));
    }
    println!();
}

fn stats_json(stats: &AggregatedStats) -> serde_json::Value {
    serde_json::json!({
        "total_spend": stats.total_spend,
        "total_purchases": stats.total_purchases,
        "cpr": stats.cpr,
        "best_platform": stats.best_platform,
        "highest_cost_platform": stats.highest_cost_platform,
    })
}

fn filter_json(filter: &DateFilterState, today: NaiveDate) -> serde_json::Value {
    let (start, end) = filter.bounds(today).unzip();
    serde_json::json!({
        "option": filter.option,
        "start": start,
        "end": end,
    })
}

pub(crate) fn output_report_json(report: &Report) -> String {
    let sections: Vec<serde_json::Value> = report
        .sections
        .iter()
        .map(|section| {
            serde_json::json!({
                "project": section.project,
                "entries": section.entries.len(),
                "stats": stats_json(&section.stats),
            })
        })
        .collect();

    let mut output = serde_json::json!({
        "today": day_string(report.today),
        "range": filter_json(&report.filter, report.today),
        "projects": sections,
    });
    if let Some((filter, stats)) = &report.overview {
        output["overview"] = serde_json::json!({
            "range": filter_json(filter, report.today),
            "stats": stats_json(stats),
        });
    }

    serde_json::to_string_pretty(&output).unwrap_or_else(|e| {
        tracing::error!("Failed to serialize JSON output: {e}");
        "{}".to_string()
    })
}
