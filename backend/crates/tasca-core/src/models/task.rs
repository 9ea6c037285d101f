use crate::{CoreError, NewTask, Result as CoreErrorResult, TaskPatch, TaskValidator};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,

    // Core fields
    pub title: String,
    pub description: Option<String>,

    // Cost and time tracking
    pub cost: f64,
    pub hours_estimated: f64,
    pub hours_real: Option<f64>,

    pub image: Option<String>,

    // Workflow
    pub completed: bool,
    pub finished_at: Option<DateTime<Utc>>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn from_new_task(new_task: NewTask) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: new_task.title,
            description: new_task.description,
            cost: new_task.cost,
            hours_estimated: new_task.hours_estimated,
            hours_real: new_task.hours_real,
            image: new_task.image,
            completed: new_task.completed,
            finished_at: new_task.finished_at,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a patch in place.
    ///
    /// Clearing a required field is rejected. Field constraints are not checked
    /// here; call [`Task::validate`] afterwards when the write runs validators.
    pub fn apply_patch(&mut self, patch: TaskPatch) -> CoreErrorResult<()> {
        if let Some(title) = patch.title {
            self.title = title.ok_or_else(|| required("title"))?;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(cost) = patch.cost {
            self.cost = cost.ok_or_else(|| required("cost"))?;
        }
        if let Some(hours_estimated) = patch.hours_estimated {
            self.hours_estimated = hours_estimated.ok_or_else(|| required("hours_estimated"))?;
        }
        if let Some(hours_real) = patch.hours_real {
            self.hours_real = hours_real;
        }
        if let Some(image) = patch.image {
            // An empty URL means no image
            self.image = image.filter(|url| !url.is_empty());
        }
        if let Some(completed) = patch.completed {
            self.completed = completed.unwrap_or(false);
        }
        if let Some(finished_at) = patch.finished_at {
            self.finished_at = finished_at;
        }

        self.updated_at = Utc::now();
        Ok(())
    }

    /// Field-level constraints re-run on validated writes.
    ///
    /// The completed/finished_at rule only applies on creation and is not
    /// checked here.
    pub fn validate(&self) -> CoreErrorResult<()> {
        TaskValidator::validate_title(&self.title)?;
        TaskValidator::validate_description(self.description.as_deref())?;
        TaskValidator::validate_cost(self.cost)?;
        TaskValidator::validate_hours_estimated(self.hours_estimated)?;
        TaskValidator::validate_hours_real(self.hours_real)?;
        TaskValidator::validate_image(self.image.as_deref())
    }
}

#[track_caller]
fn required(field: &str) -> CoreError {
    CoreError::validation(format!("{} is required", field), Some(field))
}
