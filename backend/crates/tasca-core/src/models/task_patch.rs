use chrono::{DateTime, Utc};

/// Fields to change on an existing task.
///
/// Outer `None` leaves the field untouched, `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub title: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub cost: Option<Option<f64>>,
    pub hours_estimated: Option<Option<f64>>,
    pub hours_real: Option<Option<f64>>,
    pub image: Option<Option<String>>,
    pub completed: Option<Option<bool>>,
    pub finished_at: Option<Option<DateTime<Utc>>>,
}

impl TaskPatch {
    /// Patch touching only the image
    pub fn image(url: impl Into<String>) -> Self {
        Self {
            image: Some(Some(url.into())),
            ..Self::default()
        }
    }

    /// Patch removing the image
    pub fn clear_image() -> Self {
        Self {
            image: Some(None),
            ..Self::default()
        }
    }
}
