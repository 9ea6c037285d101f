use tasca_core::{CoreError, NewTask, Result as CoreErrorResult, TaskValidator};

use chrono::{DateTime, Utc};
use serde::Deserialize;

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields: title, cost or hours_estimated";

/// Request body for creating a task.
///
/// Everything is optional at the serde level so that missing required
/// fields surface as a validation error instead of a parse error.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub hours_estimated: Option<f64>,
    #[serde(default)]
    pub hours_real: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub finished_at: Option<DateTime<Utc>>,
}

impl CreateTaskRequest {
    /// Run the create checks in order, first failure wins
    pub fn into_new_task(self) -> CoreErrorResult<NewTask> {
        let (Some(title), Some(cost), Some(hours_estimated)) = (
            self.title.filter(|title| !title.is_empty()),
            self.cost,
            self.hours_estimated,
        ) else {
            return Err(CoreError::validation(MISSING_FIELDS_MESSAGE, None));
        };

        TaskValidator::validate_title(&title)?;
        TaskValidator::validate_description(self.description.as_deref())?;
        TaskValidator::validate_cost(cost)?;
        TaskValidator::validate_hours_estimated(hours_estimated)?;
        TaskValidator::validate_hours_real(self.hours_real)?;
        TaskValidator::validate_image(self.image.as_deref())?;

        let completed = self.completed.unwrap_or(false);
        TaskValidator::validate_completion(completed, self.finished_at.as_ref())?;

        Ok(NewTask {
            title,
            description: self.description,
            cost,
            hours_estimated,
            hours_real: self.hours_real,
            image: self.image.filter(|image| !image.is_empty()),
            completed,
            finished_at: self.finished_at,
        })
    }
}
