//! Aggregation over entry snapshots
//!
//! Every function here is total over any slice, including an empty one, and
//! guards each division so no NaN or infinity reaches the caller.

use crate::core::group::{Grouped, group_by};
use crate::core::types::{
    AggregatedStats, DailyEntry, DayTotals, Platform, PlatformTotals, Totals, cost_per_result,
};

/// Totals grouped by platform, in order of first appearance
fn platform_groups(entries: &[DailyEntry]) -> Grouped<Platform, Totals> {
    group_by(entries, |e| e.platform, Totals::add)
}

/// Summary statistics for `entries`
pub(crate) fn aggregate(entries: &[DailyEntry]) -> AggregatedStats {
    if entries.is_empty() {
        return AggregatedStats::default();
    }

    let mut total = Totals::default();
    for entry in entries {
        total.add(entry);
    }

    let groups = platform_groups(entries);

    let mut best_platform = None;
    let mut best_cpr = f64::INFINITY;
    let mut highest_cost_platform = None;
    let mut max_spend = f64::NEG_INFINITY;

    for (platform, totals) in groups.iter() {
        // a platform without purchases can never be the cheapest
        let group_cpr = if totals.purchases > 0.0 {
            totals.spend / totals.purchases
        } else {
            f64::INFINITY
        };
        if totals.purchases > 0.0 && group_cpr < best_cpr {
            best_cpr = group_cpr;
            best_platform = Some(*platform);
        }
        if totals.spend > max_spend {
            max_spend = totals.spend;
            highest_cost_platform = Some(*platform);
        }
    }

    AggregatedStats {
        total_spend: total.spend,
        total_purchases: total.purchases,
        cpr: total.cpr(),
        best_platform,
        highest_cost_platform,
    }
}

/// One row per platform in canonical order, including platforms with no entries
pub(crate) fn platform_breakdown(entries: &[DailyEntry]) -> Vec<PlatformTotals> {
    let groups = platform_groups(entries);
    Platform::ALL
        .into_iter()
        .map(|platform| {
            let totals = groups.get(&platform).copied().unwrap_or_default();
            PlatformTotals {
                platform,
                spend: totals.spend,
                purchases: totals.purchases,
                cpr: totals.cpr(),
            }
        })
        .collect()
}

/// Totals per calendar day, ascending by date, CPR rounded to cents
pub(crate) fn daily_series(entries: &[DailyEntry]) -> Vec<DayTotals> {
    let groups = group_by(entries, |e| e.date.clone(), Totals::add);
    let mut days: Vec<DayTotals> = groups
        .into_vec()
        .into_iter()
        .map(|(date, totals)| DayTotals {
            date,
            spend: totals.spend,
            purchases: totals.purchases,
            cpr: round_cents(totals.cpr()),
        })
        .collect();
    days.sort_by(|a, b| a.date.cmp(&b.date));
    days
}

/// Per-entry CPR as shown in exports and the entry table
pub(crate) fn entry_cpr(entry: &DailyEntry) -> f64 {
    cost_per_result(entry.spend, entry.purchases)
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
