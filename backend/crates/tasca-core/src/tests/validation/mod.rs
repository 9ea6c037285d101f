mod task_validator;
