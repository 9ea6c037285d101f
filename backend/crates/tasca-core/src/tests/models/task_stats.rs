use crate::{NewTask, Task, TaskStats};

use chrono::Utc;
use googletest::prelude::*;

fn task(cost: f64, hours_estimated: f64, hours_real: Option<f64>, completed: bool) -> Task {
    let mut new_task = NewTask::new("Stats task", cost, hours_estimated);
    new_task.hours_real = hours_real;
    new_task.completed = completed;
    new_task.finished_at = completed.then(Utc::now);
    Task::from_new_task(new_task)
}

#[test]
fn given_no_tasks_when_computed_then_rates_are_zero() {
    let stats = TaskStats::from_tasks(&[]);

    assert_that!(stats.overview.total_tasks, eq(0));
    assert_that!(stats.overview.completion_rate, eq(0.0));
    assert_that!(stats.financial.average_cost_per_task, eq(0.0));
    assert_that!(stats.financial.total_cost, eq(0.0));
    assert_that!(stats.time.hours_saved, eq(0.0));
}

#[test]
fn given_one_completed_and_one_pending_when_computed_then_matches_expected_totals() {
    let tasks = vec![task(10.0, 5.0, Some(4.0), true), task(20.0, 3.0, Some(0.0), false)];

    let stats = TaskStats::from_tasks(&tasks);

    assert_that!(stats.overview.total_tasks, eq(2));
    assert_that!(stats.overview.completed_tasks, eq(1));
    assert_that!(stats.overview.pending_tasks, eq(1));
    assert_that!(stats.overview.completion_rate, eq(50.0));
    assert_that!(stats.financial.total_cost, eq(30.0));
    assert_that!(stats.financial.completed_tasks_cost, eq(10.0));
    assert_that!(stats.financial.pending_tasks_cost, eq(20.0));
    assert_that!(stats.financial.average_cost_per_task, eq(15.0));
    assert_that!(stats.time.total_hours_estimated, eq(8.0));
    assert_that!(stats.time.total_hours_real, eq(4.0));
    assert_that!(stats.time.hours_saved, eq(4.0));
}

#[test]
fn given_three_tasks_when_computed_then_rates_round_to_two_decimals() {
    let tasks = vec![
        task(10.0, 1.0, None, true),
        task(10.0, 1.0, None, false),
        task(0.5, 1.0, None, false),
    ];

    let stats = TaskStats::from_tasks(&tasks);

    assert_that!(stats.overview.completion_rate, eq(33.33));
    assert_that!(stats.financial.average_cost_per_task, eq(6.83));
}

#[test]
fn given_overrun_when_computed_then_hours_saved_is_negative() {
    let tasks = vec![task(1.0, 2.0, Some(5.0), false)];

    let stats = TaskStats::from_tasks(&tasks);

    assert_that!(stats.time.hours_saved, eq(-3.0));
}

#[test]
fn given_fractional_costs_when_computed_then_partial_sums_add_up_to_total() {
    let tasks = vec![
        task(0.1, 1.0, None, true),
        task(0.2, 1.0, None, false),
        task(0.7, 1.0, None, true),
        task(1.3, 1.0, None, false),
    ];

    let stats = TaskStats::from_tasks(&tasks);

    assert_eq!(
        stats.financial.completed_tasks_cost + stats.financial.pending_tasks_cost,
        stats.financial.total_cost
    );
}

#[test]
fn test_stats_serialize_with_camel_case_groups() {
    let stats = TaskStats::from_tasks(&[task(10.0, 5.0, Some(4.0), true)]);

    let json = serde_json::to_value(&stats).unwrap();

    assert_eq!(json["overview"]["totalTasks"], 1);
    assert_eq!(json["overview"]["completionRate"], 100.0);
    assert_eq!(json["financial"]["completedTasksCost"], 10.0);
    assert_eq!(json["time"]["hoursSaved"], 1.0);
}
