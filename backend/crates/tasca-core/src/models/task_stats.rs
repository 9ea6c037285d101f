//! Aggregate statistics computed on demand over the full task set.

use crate::Task;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskStats {
    pub overview: OverviewStats,
    pub financial: FinancialStats,
    pub time: TimeStats,
}

/// Task counts
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewStats {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub pending_tasks: usize,
    /// Percentage of completed tasks, two decimals
    pub completion_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialStats {
    pub total_cost: f64,
    pub completed_tasks_cost: f64,
    pub pending_tasks_cost: f64,
    pub average_cost_per_task: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeStats {
    pub total_hours_estimated: f64,
    pub total_hours_real: f64,
    /// Negative when real hours overran the estimate
    pub hours_saved: f64,
}

impl TaskStats {
    /// Single pass over `tasks`.
    ///
    /// `total_cost` is derived from the completed and pending partial sums so
    /// that the two always add up to it exactly.
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut completed_tasks = 0usize;
        let mut completed_tasks_cost = 0.0;
        let mut pending_tasks_cost = 0.0;
        let mut total_hours_estimated = 0.0;
        let mut total_hours_real = 0.0;

        for task in tasks {
            if task.completed {
                completed_tasks += 1;
                completed_tasks_cost += task.cost;
            } else {
                pending_tasks_cost += task.cost;
            }
            total_hours_estimated += task.hours_estimated;
            total_hours_real += task.hours_real.unwrap_or(0.0);
        }

        let total_tasks = tasks.len();
        let total_cost = completed_tasks_cost + pending_tasks_cost;

        let (completion_rate, average_cost_per_task) = if total_tasks == 0 {
            (0.0, 0.0)
        } else {
            (
                round_to_cents(completed_tasks as f64 / total_tasks as f64 * 100.0),
                round_to_cents(total_cost / total_tasks as f64),
            )
        };

        Self {
            overview: OverviewStats {
                total_tasks,
                completed_tasks,
                pending_tasks: total_tasks - completed_tasks,
                completion_rate,
            },
            financial: FinancialStats {
                total_cost,
                completed_tasks_cost,
                pending_tasks_cost,
                average_cost_per_task,
            },
            time: TimeStats {
                total_hours_estimated,
                total_hours_real,
                hours_saved: total_hours_estimated - total_hours_real,
            },
        }
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
