mod create_task_request;
mod properties;
