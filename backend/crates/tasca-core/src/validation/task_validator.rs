use crate::{CoreError, Result as CoreErrorResult};

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

// Field constraints
pub const MIN_TITLE_LENGTH: usize = 3;
pub const MAX_TITLE_LENGTH: usize = 50;
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

static IMAGE_URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://\S+$").expect("image URL pattern is valid"));

/// Field-level rules for tasks.
///
/// The same rules back the create handler (run before the store is touched)
/// and the store's schema validation (run on every validated write).
pub struct TaskValidator;

impl TaskValidator {
    /// Trimmed title length must be within [3, 50] characters
    #[track_caller]
    pub fn validate_title(title: &str) -> CoreErrorResult<()> {
        let length = title.trim().chars().count();
        if !(MIN_TITLE_LENGTH..=MAX_TITLE_LENGTH).contains(&length) {
            return Err(CoreError::validation(
                format!(
                    "Title must be between {} and {} characters",
                    MIN_TITLE_LENGTH, MAX_TITLE_LENGTH
                ),
                Some("title"),
            ));
        }

        Ok(())
    }

    #[track_caller]
    pub fn validate_description(description: Option<&str>) -> CoreErrorResult<()> {
        if let Some(description) = description
            && description.trim().chars().count() > MAX_DESCRIPTION_LENGTH
        {
            return Err(CoreError::validation(
                format!(
                    "Description cannot exceed {} characters",
                    MAX_DESCRIPTION_LENGTH
                ),
                Some("description"),
            ));
        }

        Ok(())
    }

    #[track_caller]
    pub fn validate_cost(cost: f64) -> CoreErrorResult<()> {
        if cost < 0.0 {
            return Err(CoreError::validation(
                "Cost cannot be negative",
                Some("cost"),
            ));
        }

        Ok(())
    }

    #[track_caller]
    pub fn validate_hours_estimated(hours_estimated: f64) -> CoreErrorResult<()> {
        if hours_estimated < 0.0 {
            return Err(CoreError::validation(
                "Estimated hours cannot be negative",
                Some("hours_estimated"),
            ));
        }

        Ok(())
    }

    #[track_caller]
    pub fn validate_hours_real(hours_real: Option<f64>) -> CoreErrorResult<()> {
        if let Some(hours_real) = hours_real
            && hours_real < 0.0
        {
            return Err(CoreError::validation(
                "Real hours cannot be negative",
                Some("hours_real"),
            ));
        }

        Ok(())
    }

    /// An empty image counts as "no image"
    #[track_caller]
    pub fn validate_image(image: Option<&str>) -> CoreErrorResult<()> {
        if let Some(image) = image
            && !image.is_empty()
            && !Self::is_valid_image_url(image)
        {
            return Err(CoreError::validation(
                "Image URL is not valid",
                Some("image"),
            ));
        }

        Ok(())
    }

    /// A completed task must carry its finish date
    #[track_caller]
    pub fn validate_completion(
        completed: bool,
        finished_at: Option<&DateTime<Utc>>,
    ) -> CoreErrorResult<()> {
        if completed && finished_at.is_none() {
            return Err(CoreError::validation(
                "A completed task must include its finish date",
                Some("finished_at"),
            ));
        }

        Ok(())
    }

    pub fn is_valid_image_url(image: &str) -> bool {
        IMAGE_URL_PATTERN.is_match(image)
    }
}
