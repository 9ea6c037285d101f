//! Persistence interface for tasks.
//!
//! Handlers only see [`TaskStore`]; the concrete store is chosen at startup
//! and injected through the application state.

use crate::Result as DbErrorResult;

use tasca_core::{NewTask, Task, TaskPatch};

use async_trait::async_trait;
use uuid::Uuid;

/// Options for [`TaskStore::find_by_id_and_update`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOptions {
    /// Re-run the task field validators on the updated document
    pub run_validators: bool,
}

impl Default for UpdateOptions {
    fn default() -> Self {
        Self {
            run_validators: true,
        }
    }
}

impl UpdateOptions {
    pub fn skip_validators() -> Self {
        Self {
            run_validators: false,
        }
    }
}

#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Validate and persist a new task, returning it with its assigned id
    async fn create(&self, new_task: NewTask) -> DbErrorResult<Task>;

    /// All tasks in insertion order
    async fn find_all(&self) -> DbErrorResult<Vec<Task>>;

    async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Task>>;

    /// Atomically apply `patch` and return the updated task, or `None` when
    /// no task has this id.
    async fn find_by_id_and_update(
        &self,
        id: Uuid,
        patch: TaskPatch,
        options: UpdateOptions,
    ) -> DbErrorResult<Option<Task>>;

    /// Remove the task and return its last state
    async fn find_by_id_and_delete(&self, id: Uuid) -> DbErrorResult<Option<Task>>;

    /// Cheap reachability check for readiness probes
    async fn ping(&self) -> DbErrorResult<()>;
}
