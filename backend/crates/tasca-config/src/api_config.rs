use crate::{ConfigError, ConfigErrorResult, DEFAULT_MOUNT_PATH};

use serde::Deserialize;

/// Configuration for the REST API layer
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Path the task routes are nested under, e.g. `/api/tasks`
    pub mount_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            mount_path: DEFAULT_MOUNT_PATH.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let path = &self.mount_path;

        if !path.starts_with('/') || path.len() < 2 {
            return Err(ConfigError::api(format!(
                "api.mount_path must start with '/' and name a segment, got '{}'",
                path
            )));
        }

        if path.ends_with('/') {
            return Err(ConfigError::api(format!(
                "api.mount_path cannot end with '/', got '{}'",
                path
            )));
        }

        if path.contains(['{', '}', '*', ' ']) {
            return Err(ConfigError::api(format!(
                "api.mount_path cannot contain wildcards or spaces, got '{}'",
                path
            )));
        }

        Ok(())
    }
}
