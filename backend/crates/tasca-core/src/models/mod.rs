pub mod new_task;
pub mod task;
pub mod task_patch;
pub mod task_stats;
