use crate::{Result as CoreErrorResult, TaskValidator};

use chrono::{DateTime, Utc};

/// A task that passed input validation and is ready to be persisted.
///
/// The store assigns the id and audit timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub cost: f64,
    pub hours_estimated: f64,
    pub hours_real: Option<f64>,
    pub image: Option<String>,
    pub completed: bool,
    pub finished_at: Option<DateTime<Utc>>,
}

impl NewTask {
    pub fn new(title: impl Into<String>, cost: f64, hours_estimated: f64) -> Self {
        Self {
            title: title.into(),
            description: None,
            cost,
            hours_estimated,
            hours_real: None,
            image: None,
            completed: false,
            finished_at: None,
        }
    }

    /// Schema-level rules, the ones a store enforces on write
    pub fn validate(&self) -> CoreErrorResult<()> {
        TaskValidator::validate_title(&self.title)?;
        TaskValidator::validate_description(self.description.as_deref())?;
        TaskValidator::validate_cost(self.cost)?;
        TaskValidator::validate_hours_estimated(self.hours_estimated)?;
        TaskValidator::validate_hours_real(self.hours_real)?;
        TaskValidator::validate_image(self.image.as_deref())
    }
}
