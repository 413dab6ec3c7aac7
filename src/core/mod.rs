//! Core module - entry model, date ranges and aggregation
//!
//! Everything here is pure and works on borrowed snapshots.

mod aggregator;
mod group;
mod range;
mod types;
mod view;

pub(crate) use aggregator::{daily_series, entry_cpr, platform_breakdown};
pub(crate) use range::{DateFilterState, RangeOption, day_string};
pub(crate) use types::{
    AggregatedStats, DailyEntry, DayTotals, NewEntry, Platform, PlatformTotals, Project,
    cost_per_result,
};
pub(crate) use view::{ProjectSelection, ProjectView, overview, project_view, select};
