pub mod app;
pub mod handlers;
