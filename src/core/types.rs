//! Core data types shared by the store, the aggregator and the output layer
//!
//! Projects and platforms are tagged enums with stable ids. Display text lives
//! in `crate::labels` and is never used for comparison.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tracked project (brand) an entry belongs to
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum, Serialize, Deserialize,
)]
pub(crate) enum Project {
    #[serde(rename = "azza", alias = "عزة المتميزة")]
    Azza,
    #[serde(rename = "bronze", alias = "برونز عباية")]
    Bronze,
    #[serde(rename = "maraya", alias = "مرايا عباية")]
    Maraya,
    #[serde(rename = "saborio", alias = "سابوريو")]
    Saborio,
}

impl Project {
    /// Canonical order, used for per-project sections
    pub(crate) const ALL: [Project; 4] = [
        Project::Azza,
        Project::Bronze,
        Project::Maraya,
        Project::Saborio,
    ];

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Project::Azza => "azza",
            Project::Bronze => "bronze",
            Project::Maraya => "maraya",
            Project::Saborio => "saborio",
        }
    }
}

/// Advertising platform spend was made on
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum, Serialize, Deserialize,
)]
pub(crate) enum Platform {
    #[serde(rename = "meta", alias = "Meta")]
    Meta,
    #[serde(rename = "snapchat", alias = "Snapchat")]
    Snapchat,
    #[value(name = "tiktok")]
    #[serde(rename = "tiktok", alias = "TikTok")]
    TikTok,
    #[serde(rename = "google", alias = "Google Ads")]
    Google,
}

impl Platform {
    pub(crate) const ALL: [Platform; 4] = [
        Platform::Meta,
        Platform::Snapchat,
        Platform::TikTok,
        Platform::Google,
    ];

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Platform::Meta => "meta",
            Platform::Snapchat => "snapchat",
            Platform::TikTok => "tiktok",
            Platform::Google => "google",
        }
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One day of spend for one project on one platform
///
/// Field names and JSON layout match the persisted backup format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct DailyEntry {
    pub(crate) id: String,
    /// Calendar day, `YYYY-MM-DD`
    pub(crate) date: String,
    pub(crate) project: Project,
    pub(crate) platform: Platform,
    pub(crate) spend: f64,
    pub(crate) purchases: f64,
}

/// Entry fields before an id has been minted
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NewEntry {
    pub(crate) date: String,
    pub(crate) project: Project,
    pub(crate) platform: Platform,
    pub(crate) spend: f64,
    pub(crate) purchases: f64,
}

impl NewEntry {
    pub(crate) fn with_id(self, id: String) -> DailyEntry {
        DailyEntry {
            id,
            date: self.date,
            project: self.project,
            platform: self.platform,
            spend: self.spend,
            purchases: self.purchases,
        }
    }
}

/// Summary statistics over a set of entries
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub(crate) struct AggregatedStats {
    pub(crate) total_spend: f64,
    pub(crate) total_purchases: f64,
    /// Cost per result; 0 when there are no purchases
    pub(crate) cpr: f64,
    /// Lowest CPR among platforms with at least one purchase
    pub(crate) best_platform: Option<Platform>,
    /// Highest total spend
    pub(crate) highest_cost_platform: Option<Platform>,
}

/// Spend and purchases accumulated for one group of entries
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct Totals {
    pub(crate) spend: f64,
    pub(crate) purchases: f64,
}

impl Totals {
    pub(crate) fn add(&mut self, entry: &DailyEntry) {
        self.spend += entry.spend;
        self.purchases += entry.purchases;
    }

    pub(crate) fn cpr(&self) -> f64 {
        cost_per_result(self.spend, self.purchases)
    }
}

/// Per-platform breakdown row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct PlatformTotals {
    pub(crate) platform: Platform,
    pub(crate) spend: f64,
    pub(crate) purchases: f64,
    pub(crate) cpr: f64,
}

/// Per-day series row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct DayTotals {
    pub(crate) date: String,
    pub(crate) spend: f64,
    pub(crate) purchases: f64,
    pub(crate) cpr: f64,
}

/// Spend divided by purchases, 0 when there are no purchases
pub(crate) fn cost_per_result(spend: f64, purchases: f64) -> f64 {
    if purchases > 0.0 {
        spend / purchases
    } else {
        0.0
    }
}
