// Task-list state management with write-through persistence

use crate::filter::{SortOrder, View};
use crate::kv::KvStore;
use crate::task::{Priority, Task};
use serde::Serialize;
use tracing::{debug, warn};

/// Logical key the task list lives under in the durable store.
pub const TASKS_KEY: &str = "darkneo-todos";

/// Aggregate counts over the current task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

/// Owns the in-memory task list and mirrors it to a durable store.
///
/// Every mutating operation rewrites the whole list under a single key
/// before returning. A failed write is logged and swallowed; the in-memory
/// list stays authoritative for the rest of the session. Invalid input
/// (empty text, unknown id) degrades to a no-op rather than an error.
pub struct TaskStore {
    tasks: Vec<Task>,
    backend: Box<dyn KvStore>,
    key: String,
}

impl TaskStore {
    /// Load the task list persisted under `key`.
    ///
    /// A missing or unparsable record yields an empty list, never an error.
    pub fn open(backend: Box<dyn KvStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let tasks = match backend.get(&key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(tasks) => tasks,
                Err(e) => {
                    warn!(key, error = %e, "stored task list is unparsable, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(key, error = %e, "failed to read stored task list, starting empty");
                Vec::new()
            }
        };
        debug!(key, count = tasks.len(), "loaded task list");
        Self { tasks, backend, key }
    }

    /// Add a new medium-priority task at the front of the list.
    ///
    /// Whitespace-only text is discarded and `None` is returned; otherwise
    /// the new task's id is returned.
    pub fn create(&mut self, text: &str) -> Option<String> {
        self.create_with_priority(text, Priority::default())
    }

    pub fn create_with_priority(&mut self, text: &str, priority: Priority) -> Option<String> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let task = Task::with_priority(text, priority);
        let id = task.id.clone();
        self.tasks.insert(0, task);
        self.persist();
        Some(id)
    }

    /// Flip the completed flag on the matching task.
    /// Returns false (and changes nothing) for an unknown id.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                self.persist();
                true
            }
            None => false,
        }
    }

    /// Replace the text of the matching task.
    ///
    /// The edit is discarded when the trimmed replacement is empty or the
    /// id is unknown; no other field changes.
    pub fn edit(&mut self, id: &str, new_text: &str) -> bool {
        let new_text = new_text.trim();
        if new_text.is_empty() {
            return false;
        }
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.text = new_text.to_string();
                self.persist();
                true
            }
            None => false,
        }
    }

    /// Remove the matching task if present.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// Remove every completed task in one pass, preserving the order of the
    /// rest. Returns how many tasks were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();
        if removed > 0 {
            self.persist();
        }
        removed
    }

    // ========================================================================
    // Derived reads
    // ========================================================================

    /// Tasks matching `view`, in stored order. Pure read.
    pub fn filtered(&self, view: View) -> Vec<&Task> {
        self.tasks.iter().filter(|t| view.matches(t)).collect()
    }

    /// Tasks matching `view`, reordered per `order`. Pure read.
    pub fn sorted(&self, view: View, order: SortOrder) -> Vec<&Task> {
        let mut tasks = self.filtered(view);
        order.apply(&mut tasks);
        tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn stats(&self) -> Stats {
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        Stats {
            total: self.tasks.len(),
            active: self.tasks.len() - completed,
            completed,
        }
    }

    /// Serialize the whole list to the backend under the fixed key.
    ///
    /// Best-effort by contract: a failed write is logged at warn and the
    /// session continues with in-memory state as the source of truth.
    fn persist(&self) {
        let raw = match serde_json::to_string(&self.tasks) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "failed to serialize task list");
                return;
            }
        };
        if let Err(e) = self.backend.set(&self.key, &raw) {
            warn!(key = %self.key, error = %e, "failed to persist task list");
        }
    }
}
