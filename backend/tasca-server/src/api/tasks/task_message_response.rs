use tasca_core::Task;

use serde::Serialize;

/// Confirmation message plus the affected task
#[derive(Debug, Serialize)]
pub struct TaskMessageResponse {
    pub message: String,
    pub task: Task,
}

impl TaskMessageResponse {
    pub fn deleted(task: Task) -> Self {
        Self {
            message: "Task deleted successfully".to_string(),
            task,
        }
    }

    pub fn image_reset(task: Task) -> Self {
        Self {
            message: "Image reset to default".to_string(),
            task,
        }
    }
}
