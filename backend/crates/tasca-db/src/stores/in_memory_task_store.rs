use crate::{Result as DbErrorResult, TaskStore, UpdateOptions};

use tasca_core::{NewTask, Task, TaskPatch};

use async_trait::async_trait;
use log::debug;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Process-local task store.
///
/// Used when `database.backend = "memory"` and as the substitute store in
/// handler tests. Each write holds the lock for the whole read-modify-write.
#[derive(Default)]
pub struct InMemoryTaskStore {
    tasks: RwLock<Vec<Task>>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing tasks, skipping validation
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: RwLock::new(tasks),
        }
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn create(&self, new_task: NewTask) -> DbErrorResult<Task> {
        new_task.validate()?;
        let task = Task::from_new_task(new_task);

        self.tasks.write().await.push(task.clone());

        debug!("Inserted task {}", task.id);
        Ok(task)
    }

    async fn find_all(&self) -> DbErrorResult<Vec<Task>> {
        Ok(self.tasks.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Task>> {
        Ok(self.tasks.read().await.iter().find(|t| t.id == id).cloned())
    }

    async fn find_by_id_and_update(
        &self,
        id: Uuid,
        patch: TaskPatch,
        options: UpdateOptions,
    ) -> DbErrorResult<Option<Task>> {
        let mut tasks = self.tasks.write().await;

        let Some(stored) = tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };

        // Work on a copy so a rejected patch leaves the stored task untouched
        let mut task = stored.clone();
        task.apply_patch(patch)?;
        if options.run_validators {
            task.validate()?;
        }
        *stored = task.clone();

        debug!("Updated task {}", task.id);
        Ok(Some(task))
    }

    async fn find_by_id_and_delete(&self, id: Uuid) -> DbErrorResult<Option<Task>> {
        let mut tasks = self.tasks.write().await;

        Ok(tasks
            .iter()
            .position(|t| t.id == id)
            .map(|index| tasks.remove(index)))
    }

    async fn ping(&self) -> DbErrorResult<()> {
        Ok(())
    }
}
