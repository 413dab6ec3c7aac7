use crate::cli::SortOrder;
use crate::core::{DailyEntry, cost_per_result, entry_cpr};
use crate::labels::{platform_label, project_label};
use crate::output::ViewOptions;
use crate::output::format::{
    create_styled_table, format_amount, format_count, header_cell, money_color, right_cell,
    styled_cell, total_color,
};

/// Ids are UUIDs; the first block is enough to pick one out by eye
fn short_id(id: &str) -> &str {
    id.split('-').next().unwrap_or(id)
}

pub(super) fn sort_by_date(entries: &mut [DailyEntry], order: SortOrder) {
    match order {
        SortOrder::Asc => entries.sort_by(|a, b| a.date.cmp(&b.date)),
        SortOrder::Desc => entries.sort_by(|a, b| b.date.cmp(&a.date)),
    }
}

/// Render an entry table with a TOTAL row
///
/// `with_project` adds a project column; `with_id` adds the id column used
/// to target `update` and `delete`.
pub(super) fn render_entry_table(
    entries: &[DailyEntry],
    with_project: bool,
    with_id: bool,
    opts: &ViewOptions,
) -> String {
    let c = opts.use_color;
    let nf = opts.number_format;
    let mut table = create_styled_table();

    let mut header = Vec::new();
    if with_id {
        header.push(header_cell("ID", c));
    }
    header.push(header_cell("Date", c));
    if with_project {
        header.push(header_cell("Project", c));
    }
    header.extend([
        header_cell("Platform", c),
        header_cell("Spend", c),
        header_cell("Purchases", c),
        header_cell("CPR", c),
    ]);
    table.set_header(header);

    let green = money_color(c);
    let mut spend = 0.0;
    let mut purchases = 0.0;

    for entry in entries {
        spend += entry.spend;
        purchases += entry.purchases;

        let mut row = Vec::new();
        if with_id {
            row.push(styled_cell(short_id(&entry.id), None, false));
        }
        row.push(styled_cell(&entry.date, None, false));
        if with_project {
            row.push(styled_cell(project_label(entry.project, opts.lang), None, false));
        }
        row.extend([
            styled_cell(platform_label(entry.platform, opts.lang), None, false),
            right_cell(&format_amount(entry.spend, nf), green, false),
            right_cell(&format_count(entry.purchases, nf), None, false),
            right_cell(&format_amount(entry_cpr(entry), nf), None, false),
        ]);
        table.add_row(row);
    }

    let cyan = total_color(c);
    let mut total_row = Vec::new();
    if with_id {
        total_row.push(styled_cell("", None, false));
    }
    total_row.push(styled_cell("TOTAL", cyan, true));
    if with_project {
        total_row.push(styled_cell("", None, false));
    }
    let cpr = cost_per_result(spend, purchases);
    total_row.extend([
        styled_cell("", None, false),
        right_cell(&format_amount(spend, nf), green, true),
        right_cell(&format_count(purchases, nf), cyan, true),
        right_cell(&format_amount(cpr, nf), cyan, true),
    ]);
    table.add_row(total_row);

    table.to_string()
}

/// `list` command: every selected entry with its id
pub(crate) fn print_entry_list(entries: &[DailyEntry], opts: &ViewOptions) {
    let mut sorted = entries.to_vec();
    sort_by_date(&mut sorted, opts.order);

    println!("\n  Entries\n");
    println!("{}", render_entry_table(&sorted, true, true, opts));
    println!(
        "\n  {} entries\n",
        format_count(sorted.len() as f64, opts.number_format)
    );
}

pub(crate) fn output_entry_json(entries: &[DailyEntry], order: SortOrder) -> String {
    let mut sorted = entries.to_vec();
    sort_by_date(&mut sorted, order);

    let output: Vec<serde_json::Value> = sorted
        .iter()
        .map(|e| {
            serde_json::json!({
                "id": e.id,
                "date": e.date,
                "project": e.project,
                "platform": e.platform,
                "spend": e.spend,
                "purchases": e.purchases,
                "cpr": entry_cpr(e),
            })
        })
        .collect();

    serde_json::to_string_pretty(&output).unwrap_or_else(|e| {
        tracing::error!("Failed to serialize JSON output: {e}");
        "[]".to_string()
    })
}
