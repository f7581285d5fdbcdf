pub mod clean_up_tasks;
pub mod tasks;
