pub mod error;
pub mod models;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::new_task::NewTask;
pub use models::task::Task;
pub use models::task_patch::TaskPatch;
pub use models::task_stats::{FinancialStats, OverviewStats, TaskStats, TimeStats};
pub use validation::task_validator::TaskValidator;
