pub mod task_validator;
