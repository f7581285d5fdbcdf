pub mod account;
pub mod advisor;
pub mod advisory_session;
pub mod authentication;
pub mod enum_types;
pub mod investment;
pub mod transaction;
pub mod user;

pub use account::*;
pub use advisor::*;
pub use advisory_session::*;
pub use authentication::*;
pub use enum_types::*;
pub use investment::*;
pub use transaction::*;
pub use user::*;
