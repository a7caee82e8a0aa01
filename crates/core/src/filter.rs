//! Client-side filtering and sorting of project listings.
//!
//! The projects page fetches every project once and narrows the set here:
//! a free-text search over title, description, location, and agency name,
//! a status filter, and a sort order.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::project::ProjectSummary;
use crate::status::ProjectStatus;

/// The `all` value accepted by status filters.
pub const STATUS_ALL: &str = "all";

/// Status filter selected on the projects page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ProjectStatus),
}

impl StatusFilter {
    /// Parse a filter value. Accepts `all`, stored statuses, and `active`.
    pub fn parse(value: &str) -> Option<Self> {
        if value.trim().eq_ignore_ascii_case(STATUS_ALL) {
            return Some(StatusFilter::All);
        }
        ProjectStatus::from_display_key(value).map(StatusFilter::Only)
    }

    pub fn matches(self, status: ProjectStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }

    /// The key used in URLs and tab ids (`all`, `active`, ...).
    pub fn key(self) -> &'static str {
        match self {
            StatusFilter::All => STATUS_ALL,
            StatusFilter::Only(status) => status.display_key(),
        }
    }
}

/// Sort order for project listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ProjectSort {
    /// Most recently created first.
    #[default]
    Newest,
    Oldest,
    /// Alphabetical by title, case-insensitive.
    Title,
    /// Largest budget first; undisclosed budgets last.
    Budget,
    /// Most complete first.
    Completion,
    /// Highest ESG score first.
    Esg,
}

impl ProjectSort {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "newest" => Some(ProjectSort::Newest),
            "oldest" => Some(ProjectSort::Oldest),
            "title" => Some(ProjectSort::Title),
            "budget" => Some(ProjectSort::Budget),
            "completion" => Some(ProjectSort::Completion),
            "esg" => Some(ProjectSort::Esg),
            _ => None,
        }
    }

    fn compare(self, a: &ProjectSummary, b: &ProjectSummary) -> Ordering {
        let primary = match self {
            ProjectSort::Newest => b.created_at.cmp(&a.created_at),
            ProjectSort::Oldest => a.created_at.cmp(&b.created_at),
            ProjectSort::Title => Ordering::Equal,
            ProjectSort::Budget => b.budget.cmp(&a.budget),
            ProjectSort::Completion => b.completion().cmp(&a.completion()),
            ProjectSort::Esg => b.esg().cmp(&a.esg()),
        };
        // Ties fall back to title then id so the order is total.
        primary
            .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
            .then_with(|| a.id.cmp(&b.id))
    }
}

/// Search text, status filter, and sort order applied to a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectQuery {
    pub search: String,
    pub status: StatusFilter,
    pub sort: ProjectSort,
}

impl ProjectQuery {
    /// Whether `project` passes both the search term and the status filter.
    pub fn matches(&self, project: &ProjectSummary) -> bool {
        self.status.matches(project.status) && matches_search(project, &self.search)
    }

    /// Filter then sort, returning borrowed rows in display order.
    pub fn apply<'a>(&self, projects: &'a [ProjectSummary]) -> Vec<&'a ProjectSummary> {
        let mut selected: Vec<&ProjectSummary> =
            projects.iter().filter(|p| self.matches(p)).collect();
        selected.sort_by(|a, b| self.sort.compare(a, b));
        selected
    }
}

/// Case-insensitive substring match over title, description, location, and
/// agency name (including the "Unknown Agency" placeholder). A blank term
/// matches everything.
pub fn matches_search(project: &ProjectSummary, term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    let contains = |haystack: Option<&str>| {
        haystack.is_some_and(|h| h.to_lowercase().contains(&needle))
    };
    contains(Some(project.title.as_str()))
        || contains(project.description.as_deref())
        || contains(project.location.as_deref())
        || contains(Some(project.agency_display()))
}

/// One status-filter tab with the number of projects it would show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct StatusTab {
    pub value: String,
    pub label: String,
    pub count: usize,
    pub selected: bool,
}

/// Filter tabs in display order: All, Active, Pending, Completed, Delayed.
///
/// Counts are taken over the unfiltered listing.
pub fn status_tabs(projects: &[ProjectSummary], selected: StatusFilter) -> Vec<StatusTab> {
    let order = [
        StatusFilter::All,
        StatusFilter::Only(ProjectStatus::Ongoing),
        StatusFilter::Only(ProjectStatus::Pending),
        StatusFilter::Only(ProjectStatus::Completed),
        StatusFilter::Only(ProjectStatus::Delayed),
    ];
    order
        .into_iter()
        .map(|filter| StatusTab {
            value: filter.key().to_string(),
            label: match filter {
                StatusFilter::All => "All Projects".to_string(),
                StatusFilter::Only(status) => status.label().to_string(),
            },
            count: projects.iter().filter(|p| filter.matches(p.status)).count(),
            selected: filter == selected,
        })
        .collect()
}

/// Result count line under the filters, e.g. `Showing 3 of 12 projects`.
pub fn showing_label(shown: usize, total: usize) -> String {
    format!("Showing {shown} of {total} projects")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::fixtures::{project, sample_portfolio};

    fn titles(rows: &[&ProjectSummary]) -> Vec<String> {
        rows.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn active_filter_selects_ongoing_projects() {
        let projects = vec![
            project("A", ProjectStatus::Ongoing),
            project("B", ProjectStatus::Pending),
            project("C", ProjectStatus::Ongoing),
        ];
        let active = ProjectQuery {
            status: StatusFilter::parse("active").unwrap(),
            ..Default::default()
        };
        assert_eq!(active.apply(&projects).len(), 2);

        let all = ProjectQuery {
            status: StatusFilter::parse("all").unwrap(),
            ..Default::default()
        };
        assert_eq!(all.apply(&projects).len(), 3);
    }

    #[test]
    fn status_filter_returns_exact_subset() {
        let projects = sample_portfolio();
        for status in ProjectStatus::ALL {
            let query = ProjectQuery {
                status: StatusFilter::Only(*status),
                ..Default::default()
            };
            let selected = query.apply(&projects);
            let expected = projects.iter().filter(|p| p.status == *status).count();
            assert_eq!(selected.len(), expected);
            assert!(selected.iter().all(|p| p.status == *status));
        }
    }

    #[test]
    fn search_results_are_a_matching_subset() {
        let projects = sample_portfolio();
        for term in ["energy", "AZ", "unknown", "urban", "zzz", ""] {
            let query = ProjectQuery {
                search: term.to_string(),
                ..Default::default()
            };
            let selected = query.apply(&projects);
            assert!(selected.len() <= projects.len());
            let needle = term.to_lowercase();
            for p in selected {
                let hit = p.title.to_lowercase().contains(&needle)
                    || p.description.as_deref().unwrap_or("").to_lowercase().contains(&needle)
                    || p.location.as_deref().unwrap_or("").to_lowercase().contains(&needle)
                    || p.agency_display().to_lowercase().contains(&needle);
                assert!(hit, "{} should not match '{term}'", p.title);
            }
        }
    }

    #[test]
    fn search_is_case_insensitive_and_covers_agency_placeholder() {
        let projects = sample_portfolio();
        let query = ProjectQuery {
            search: "UNKNOWN agency".to_string(),
            ..Default::default()
        };
        assert_eq!(
            titles(&query.apply(&projects)),
            vec!["Water Management System Upgrade"]
        );
    }

    #[test]
    fn search_and_status_combine() {
        let projects = sample_portfolio();
        let query = ProjectQuery {
            search: "system".to_string(),
            status: StatusFilter::Only(ProjectStatus::Ongoing),
            sort: ProjectSort::Title,
        };
        assert_eq!(
            titles(&query.apply(&projects)),
            vec!["Water Management System Upgrade"]
        );
    }

    #[test]
    fn default_sort_is_newest_first() {
        let projects = sample_portfolio();
        let sorted = ProjectQuery::default().apply(&projects);
        assert_eq!(
            titles(&sorted),
            vec![
                "Water Management System Upgrade",
                "Renewable Energy Grid Modernization",
                "Smart City Infrastructure Development",
            ]
        );
    }

    #[test]
    fn budget_sort_puts_undisclosed_last() {
        let projects = sample_portfolio();
        let query = ProjectQuery {
            sort: ProjectSort::Budget,
            ..Default::default()
        };
        let sorted = query.apply(&projects);
        assert_eq!(sorted.last().unwrap().budget, None);
        assert_eq!(sorted[0].budget, Some(125_000_000));
    }

    #[test]
    fn rejects_unknown_filter_and_sort_values() {
        assert_eq!(StatusFilter::parse("archived"), None);
        assert_eq!(ProjectSort::parse("random"), None);
        assert_eq!(ProjectSort::parse("ESG"), Some(ProjectSort::Esg));
    }

    #[test]
    fn tabs_count_the_unfiltered_listing() {
        let projects = sample_portfolio();
        let tabs = status_tabs(&projects, StatusFilter::Only(ProjectStatus::Ongoing));
        let summary: Vec<(&str, usize, bool)> = tabs
            .iter()
            .map(|t| (t.value.as_str(), t.count, t.selected))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("all", 3, false),
                ("active", 2, true),
                ("pending", 1, false),
                ("completed", 0, false),
                ("delayed", 0, false),
            ]
        );
    }

    #[test]
    fn result_count_label() {
        assert_eq!(showing_label(3, 12), "Showing 3 of 12 projects");
        assert_eq!(showing_label(0, 0), "Showing 0 of 0 projects");
    }
}
