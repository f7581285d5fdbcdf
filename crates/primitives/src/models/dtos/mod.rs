pub mod account_dto;
pub mod advisory_dto;
pub mod auth_dto;
pub mod investment_dto;
pub mod transaction_dto;

pub use account_dto::*;
pub use advisory_dto::*;
pub use auth_dto::*;
pub use investment_dto::*;
pub use transaction_dto::*;
