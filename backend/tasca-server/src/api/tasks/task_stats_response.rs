use tasca_core::TaskStats;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TaskStatsResponse {
    pub success: bool,
    pub data: TaskStats,
}

impl From<TaskStats> for TaskStatsResponse {
    fn from(stats: TaskStats) -> Self {
        Self {
            success: true,
            data: stats,
        }
    }
}
