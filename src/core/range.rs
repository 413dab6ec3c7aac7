//! Calendar-relative date ranges
//!
//! Dates are `YYYY-MM-DD` strings compared lexicographically. Only the
//! "today minus N days" bounds go through chrono, so month and year
//! rollover are handled by real calendar arithmetic.

use chrono::{Datelike, Duration, Months, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::consts::DATE_FORMAT;

/// Named range selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum RangeOption {
    /// Entries dated today
    #[default]
    Today,
    /// Entries dated yesterday
    Yesterday,
    /// Today and the 7 days before it
    #[value(name = "last-7-days")]
    #[serde(rename = "last-7-days")]
    Last7Days,
    /// Same calendar month as today
    ThisMonth,
    /// Today and the 30 days before it
    #[value(name = "last-30-days")]
    #[serde(rename = "last-30-days")]
    Last30Days,
    /// Today and the 90 days before it
    #[value(name = "last-3-months")]
    #[serde(rename = "last-3-months")]
    Last3Months,
    /// Explicit start/end dates
    Custom,
    /// No date restriction
    All,
}

impl RangeOption {
    pub(crate) const ALL: [RangeOption; 8] = [
        RangeOption::Today,
        RangeOption::Yesterday,
        RangeOption::Last7Days,
        RangeOption::ThisMonth,
        RangeOption::Last30Days,
        RangeOption::Last3Months,
        RangeOption::Custom,
        RangeOption::All,
    ];

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            RangeOption::Today => "today",
            RangeOption::Yesterday => "yesterday",
            RangeOption::Last7Days => "last-7-days",
            RangeOption::ThisMonth => "this-month",
            RangeOption::Last30Days => "last-30-days",
            RangeOption::Last3Months => "last-3-months",
            RangeOption::Custom => "custom",
            RangeOption::All => "all",
        }
    }

    /// Parse a stable id; anything unrecognized opens up to `All`
    pub(crate) fn parse_lenient(s: &str) -> RangeOption {
        let needle = s.trim().to_ascii_lowercase();
        RangeOption::ALL
            .into_iter()
            .find(|o| o.as_str() == needle)
            .unwrap_or(RangeOption::All)
    }
}

/// Date range selection for one view
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub(crate) struct DateFilterState {
    pub(crate) option: RangeOption,
    pub(crate) custom_start: Option<String>,
    pub(crate) custom_end: Option<String>,
}

impl DateFilterState {
    pub(crate) fn new(option: RangeOption) -> Self {
        Self {
            option,
            custom_start: None,
            custom_end: None,
        }
    }

    pub(crate) fn custom(start: Option<String>, end: Option<String>) -> Self {
        Self {
            option: RangeOption::Custom,
            custom_start: start,
            custom_end: end,
        }
    }

    pub(crate) fn contains(&self, entry_date: &str, today: NaiveDate) -> bool {
        is_in_range(entry_date, self, today)
    }

    /// Inclusive `(start, end)` bounds this filter resolves to, `None` when unbounded
    pub(crate) fn bounds(&self, today: NaiveDate) -> Option<(String, String)> {
        let today_str = day_string(today);
        match self.option {
            RangeOption::Today => Some((today_str.clone(), today_str)),
            RangeOption::Yesterday => {
                let y = days_before(today, 1);
                Some((y.clone(), y))
            }
            RangeOption::Last7Days => Some((days_before(today, 7), today_str)),
            RangeOption::ThisMonth => {
                let first = today.with_day(1)?;
                let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
                Some((day_string(first), day_string(last)))
            }
            RangeOption::Last30Days => Some((days_before(today, 30), today_str)),
            RangeOption::Last3Months => Some((days_before(today, 90), today_str)),
            RangeOption::Custom => {
                let start = self.custom_start.as_ref().filter(|s| !s.is_empty())?;
                let end = self
                    .custom_end
                    .as_ref()
                    .filter(|s| !s.is_empty())
                    .unwrap_or(start);
                Some((start.clone(), end.clone()))
            }
            RangeOption::All => None,
        }
    }
}

pub(crate) fn day_string(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn days_before(today: NaiveDate, days: i64) -> String {
    day_string(today - Duration::days(days))
}

fn month_prefix(day: &str) -> &str {
    day.get(0..7).unwrap_or(day)
}

/// Whether `entry_date` falls inside `filter`, relative to `today`
///
/// Custom dates are only consulted when the option is `Custom`. A custom
/// range with a start but no end selects the start day alone, and the
/// bounds are never reordered.
pub(crate) fn is_in_range(entry_date: &str, filter: &DateFilterState, today: NaiveDate) -> bool {
    let today_str = day_string(today);
    match filter.option {
        RangeOption::Today => entry_date == today_str,
        RangeOption::Yesterday => entry_date == days_before(today, 1),
        RangeOption::Last7Days => {
            entry_date >= days_before(today, 7).as_str() && entry_date <= today_str.as_str()
        }
        RangeOption::ThisMonth => entry_date.starts_with(month_prefix(&today_str)),
        RangeOption::Last30Days => {
            entry_date >= days_before(today, 30).as_str() && entry_date <= today_str.as_str()
        }
        RangeOption::Last3Months => {
            entry_date >= days_before(today, 90).as_str() && entry_date <= today_str.as_str()
        }
        RangeOption::Custom => {
            let Some(start) = filter.custom_start.as_deref().filter(|s| !s.is_empty()) else {
                return true;
            };
            let end = filter
                .custom_end
                .as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or(start);
            entry_date >= start && entry_date <= end
        }
        RangeOption::All => true,
    }
}
