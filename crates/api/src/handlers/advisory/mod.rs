pub mod cancel_session;
pub mod create_advisor;
pub mod create_session;
pub mod delete_advisor;
pub mod list_advisors;
pub mod list_sessions;
pub mod reschedule_session;
