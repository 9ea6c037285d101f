pub mod error;
pub mod stores;
pub mod task_store;

pub use error::{DbError, Result};
pub use stores::in_memory_task_store::InMemoryTaskStore;
pub use stores::sqlite_task_store::{MIGRATOR, SqliteTaskStore};
pub use task_store::{TaskStore, UpdateOptions};
