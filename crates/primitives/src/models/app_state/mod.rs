pub mod app_config;
pub mod jwt_details;
pub mod remote_services;

pub use app_config::*;
pub use jwt_details::*;
pub use remote_services::*;
