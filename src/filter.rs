// View filtering and sort orders for derived task lists

use crate::task::Task;
use eyre::{Result, eyre};
use std::str::FromStr;

/// Which subset of the task list a query should return.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    All,
    Active,
    Completed,
}

impl View {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            View::All => true,
            View::Active => !task.completed,
            View::Completed => task.completed,
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            View::All => write!(f, "all"),
            View::Active => write!(f, "active"),
            View::Completed => write!(f, "completed"),
        }
    }
}

impl FromStr for View {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(View::All),
            "active" => Ok(View::Active),
            "completed" => Ok(View::Completed),
            other => Err(eyre!(
                "Unknown view: {} (expected all, active or completed)",
                other
            )),
        }
    }
}

/// Sort order for a derived task list.
///
/// `CreatedDesc` matches the stored order (new tasks are prepended). All
/// sorts are stable, so ties keep their stored relative order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    CreatedDesc,
    CreatedAsc,
    PriorityDesc,
    PriorityAsc,
    Alphabetical,
}

impl SortOrder {
    pub fn apply(self, tasks: &mut [&Task]) {
        match self {
            SortOrder::CreatedDesc => tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortOrder::CreatedAsc => tasks.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            SortOrder::PriorityDesc => tasks.sort_by(|a, b| b.priority.cmp(&a.priority)),
            SortOrder::PriorityAsc => tasks.sort_by(|a, b| a.priority.cmp(&b.priority)),
            SortOrder::Alphabetical => {
                tasks.sort_by(|a, b| a.text.to_lowercase().cmp(&b.text.to_lowercase()))
            }
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::CreatedDesc => write!(f, "created-desc"),
            SortOrder::CreatedAsc => write!(f, "created-asc"),
            SortOrder::PriorityDesc => write!(f, "priority-desc"),
            SortOrder::PriorityAsc => write!(f, "priority-asc"),
            SortOrder::Alphabetical => write!(f, "alphabetical"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "created-desc" => Ok(SortOrder::CreatedDesc),
            "created-asc" => Ok(SortOrder::CreatedAsc),
            "priority-desc" => Ok(SortOrder::PriorityDesc),
            "priority-asc" => Ok(SortOrder::PriorityAsc),
            "alphabetical" | "alpha" => Ok(SortOrder::Alphabetical),
            other => Err(eyre!("Unknown sort order: {}", other)),
        }
    }
}
