pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod request_logging;
pub mod routes;


pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    tasks::{
        create_task_request::CreateTaskRequest,
        task_message_response::TaskMessageResponse,
        task_stats_response::TaskStatsResponse,
        tasks::{
            create_task, delete_task, get_task, get_task_stats, list_tasks, reset_task_image,
            update_task, update_task_image,
        },
        update_image_request::UpdateImageRequest,
        update_task_request::UpdateTaskRequest,
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerResult, ServerError};
pub use routes::build_router;
