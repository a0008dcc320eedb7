// Task data model

use chrono::{DateTime, Utc};
use eyre::{Result, eyre};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// A single to-do item.
///
/// Field names follow the on-disk record format: `created_at` serializes as
/// `createdAt`, and records written before priorities existed deserialize
/// with `priority` falling back to medium.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub priority: Priority,
}

impl Task {
    /// Build a new task with a fresh time-ordered id and medium priority.
    ///
    /// Callers are expected to have trimmed and validated `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_priority(text, Priority::default())
    }

    pub fn with_priority(text: impl Into<String>, priority: Priority) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            text: text.into(),
            completed: false,
            created_at: Utc::now(),
            priority,
        }
    }
}

/// Priority level. Ordering is lowest-to-highest so `Ord` ranks
/// urgent > high > medium > low.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
            Priority::Urgent => write!(f, "urgent"),
        }
    }
}

impl FromStr for Priority {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" | "med" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "urgent" => Ok(Priority::Urgent),
            other => Err(eyre!(
                "Unknown priority: {} (expected low, medium, high or urgent)",
                other
            )),
        }
    }
}
