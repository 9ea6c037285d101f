use tasca_core::TaskPatch;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Request body for `PUT /{id}`.
///
/// A key that is absent leaves the field alone; an explicit `null` clears it.
/// Unknown keys (`id`, audit timestamps) are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(default, deserialize_with = "nullable")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub cost: Option<Option<f64>>,
    #[serde(default, deserialize_with = "nullable")]
    pub hours_estimated: Option<Option<f64>>,
    #[serde(default, deserialize_with = "nullable")]
    pub hours_real: Option<Option<f64>>,
    #[serde(default, deserialize_with = "nullable")]
    pub image: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub completed: Option<Option<bool>>,
    #[serde(default, deserialize_with = "nullable")]
    pub finished_at: Option<Option<DateTime<Utc>>>,
}

impl From<UpdateTaskRequest> for TaskPatch {
    fn from(req: UpdateTaskRequest) -> Self {
        TaskPatch {
            title: req.title,
            description: req.description,
            cost: req.cost,
            hours_estimated: req.hours_estimated,
            hours_real: req.hours_real,
            image: req.image,
            completed: req.completed,
            finished_at: req.finished_at,
        }
    }
}

/// Only called when the key is present, so `null` becomes `Some(None)`
fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
