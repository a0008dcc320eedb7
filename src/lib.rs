// darkneo-tasks - persistent task-list state management

pub mod config;
pub mod filter;
pub mod kv;
pub mod store;
pub mod task;

// Re-export main types for convenience
pub use config::Config;
pub use filter::{SortOrder, View};
pub use kv::{FileStore, KvStore, MemoryStore};
pub use store::{Stats, TASKS_KEY, TaskStore};
pub use task::{Priority, Task};
