//! Display labels, kept apart from the enums they describe

use clap::ValueEnum;
use serde::Deserialize;

use crate::core::{Platform, Project, RangeOption};

/// Label language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Lang {
    /// English (default)
    #[default]
    En,
    /// Arabic
    Ar,
}

pub(crate) fn project_label(project: Project, lang: Lang) -> &'static str {
    match (project, lang) {
        (Project::Azza, Lang::En) => "Azza Al-Mutamayiza",
        (Project::Azza, Lang::Ar) => "عزة المتميزة",
        (Project::Bronze, Lang::En) => "Bronze Abaya",
        (Project::Bronze, Lang::Ar) => "برونز عباية",
        (Project::Maraya, Lang::En) => "Maraya Abaya",
        (Project::Maraya, Lang::Ar) => "مرايا عباية",
        (Project::Saborio, Lang::En) => "Saborio",
        (Project::Saborio, Lang::Ar) => "سابوريو",
    }
}

/// Platform names are brand names and read the same in every language
pub(crate) fn platform_label(platform: Platform, _lang: Lang) -> &'static str {
    match platform {
        Platform::Meta => "Meta",
        Platform::Snapchat => "Snapchat",
        Platform::TikTok => "TikTok",
        Platform::Google => "Google Ads",
    }
}

pub(crate) fn range_label(option: RangeOption, lang: Lang) -> &'static str {
    match (option, lang) {
        (RangeOption::Today, Lang::En) => "Today",
        (RangeOption::Today, Lang::Ar) => "اليوم",
        (RangeOption::Yesterday, Lang::En) => "Yesterday",
        (RangeOption::Yesterday, Lang::Ar) => "أمس",
        (RangeOption::Last7Days, Lang::En) => "Last 7 days",
        (RangeOption::Last7Days, Lang::Ar) => "آخر 7 أيام",
        (RangeOption::ThisMonth, Lang::En) => "This month",
        (RangeOption::ThisMonth, Lang::Ar) => "هذا الشهر",
        (RangeOption::Last30Days, Lang::En) => "Last 30 days",
        (RangeOption::Last30Days, Lang::Ar) => "آخر 30 يوم",
        (RangeOption::Last3Months, Lang::En) => "Last 3 months",
        (RangeOption::Last3Months, Lang::Ar) => "آخر 3 أشهر",
        (RangeOption::Custom, Lang::En) => "Custom range",
        (RangeOption::Custom, Lang::Ar) => "فترة مخصصة",
        (RangeOption::All, Lang::En) => "All time",
        (RangeOption::All, Lang::Ar) => "كل الفترات",
    }
}

/// Header row for the spreadsheet (CSV) export
pub(crate) fn csv_headers(lang: Lang) -> [&'static str; 6] {
    match lang {
        Lang::En => ["Date", "Project", "Platform", "Spend (SAR)", "Purchases", "CPR"],
        Lang::Ar => [
            "التاريخ",
            "المشروع",
            "المنصة",
            "الصرف (SAR)",
            "الطلبات",
            "تكلفة الطلب (CPR)",
        ],
    }
}

/// Header row for the clipboard (TSV) export
pub(crate) fn tsv_headers(lang: Lang) -> [&'static str; 6] {
    match lang {
        Lang::En => ["Date", "Project", "Platform", "Spend", "Purchases", "CPR"],
        Lang::Ar => ["التاريخ", "المشروع", "المنصة", "الصرف", "الطلبات", "CPR"],
    }
}
