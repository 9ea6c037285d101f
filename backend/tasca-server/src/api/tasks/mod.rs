pub mod create_task_request;
pub mod task_message_response;
pub mod task_stats_response;
#[allow(clippy::module_inception)]
pub mod tasks;
pub mod update_image_request;
pub mod update_task_request;
