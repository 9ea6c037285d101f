pub mod in_memory_task_store;
pub mod sqlite_task_store;
