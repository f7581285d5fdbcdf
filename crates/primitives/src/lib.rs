pub mod error;
pub mod events;
pub mod models;
pub mod schema;
pub mod utility;

pub use error::{ApiError, AuthError};
pub use events::{EventChannel, NotificationEvent};
