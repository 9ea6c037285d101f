use tasca_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::error::ErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    /// A write was rejected by the task schema validators
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },
}

impl DbError {
    /// Message suitable for a client, without source location
    pub fn detail(&self) -> String {
        match self {
            DbError::Sqlx { source, .. } => source.to_string(),
            DbError::Migration { message, .. }
            | DbError::Initialization { message, .. }
            | DbError::Validation { message, .. } => message.clone(),
        }
    }

    /// True when the store refused the data itself rather than failing to run
    pub fn is_rejection(&self) -> bool {
        match self {
            DbError::Validation { .. } => true,
            DbError::Sqlx {
                source: sqlx::Error::Database(db_error),
                ..
            } => matches!(
                db_error.kind(),
                ErrorKind::CheckViolation
                    | ErrorKind::NotNullViolation
                    | ErrorKind::UniqueViolation
                    | ErrorKind::ForeignKeyViolation
            ),
            _ => false,
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    #[track_caller]
    fn from(e: sqlx::migrate::MigrateError) -> Self {
        Self::Migration {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for DbError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { message, field, .. } => Self::Validation {
                message,
                field,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
