//! Filter composition: project first, then date range

use chrono::NaiveDate;

use crate::core::aggregator::aggregate;
use crate::core::range::DateFilterState;
use crate::core::types::{AggregatedStats, DailyEntry, Project};

/// Which projects a view covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum ProjectSelection {
    #[default]
    All,
    One(Project),
}

impl ProjectSelection {
    pub(crate) fn matches(self, project: Project) -> bool {
        match self {
            ProjectSelection::All => true,
            ProjectSelection::One(p) => p == project,
        }
    }

    /// Projects to show a section for, in canonical order
    pub(crate) fn projects(self) -> Vec<Project> {
        match self {
            ProjectSelection::All => Project::ALL.to_vec(),
            ProjectSelection::One(p) => vec![p],
        }
    }
}

impl From<Option<Project>> for ProjectSelection {
    fn from(project: Option<Project>) -> Self {
        project.map_or(ProjectSelection::All, ProjectSelection::One)
    }
}

/// Entries for `selection`, in snapshot order
pub(crate) fn select_project(entries: &[DailyEntry], selection: ProjectSelection) -> Vec<DailyEntry> {
    entries
        .iter()
        .filter(|e| selection.matches(e.project))
        .cloned()
        .collect()
}

/// Entries whose date falls in `filter`
pub(crate) fn select_range(
    entries: &[DailyEntry],
    filter: &DateFilterState,
    today: NaiveDate,
) -> Vec<DailyEntry> {
    entries
        .iter()
        .filter(|e| filter.contains(&e.date, today))
        .cloned()
        .collect()
}

/// Project stage then date stage; the result is what gets aggregated
pub(crate) fn select(
    entries: &[DailyEntry],
    selection: ProjectSelection,
    filter: &DateFilterState,
    today: NaiveDate,
) -> Vec<DailyEntry> {
    let by_project = select_project(entries, selection);
    select_range(&by_project, filter, today)
}

/// One project's detail: its filtered entries (oldest first) and their stats
#[derive(Debug, Clone)]
pub(crate) struct ProjectView {
    pub(crate) project: Project,
    pub(crate) entries: Vec<DailyEntry>,
    pub(crate) stats: AggregatedStats,
}

pub(crate) fn project_view(
    entries: &[DailyEntry],
    project: Project,
    filter: &DateFilterState,
    today: NaiveDate,
) -> ProjectView {
    let mut selected = select(entries, ProjectSelection::One(project), filter, today);
    selected.sort_by(|a, b| a.date.cmp(&b.date));
    let stats = aggregate(&selected);
    ProjectView {
        project,
        entries: selected,
        stats,
    }
}

/// Summary for the overview filter, only produced for a single selected project
///
/// The overview filter is independent of the detail filter and never
/// changes the detail views.
pub(crate) fn overview(
    entries: &[DailyEntry],
    selection: ProjectSelection,
    overview_filter: &DateFilterState,
    today: NaiveDate,
) -> Option<AggregatedStats> {
    match selection {
        ProjectSelection::All => None,
        ProjectSelection::One(_) => Some(aggregate(&select(
            entries,
            selection,
            overview_filter,
            today,
        ))),
    }
}
