pub mod account_service;
pub mod advisory_desk_service;
pub mod advisory_service;
pub mod auth_service;
pub mod investment_desk_service;
pub mod investment_service;
pub mod notification_service;
pub mod transaction_service;

pub use account_service::AccountService;
pub use advisory_desk_service::AdvisoryDeskService;
pub use advisory_service::AdvisoryService;
pub use investment_desk_service::InvestmentDeskService;
pub use investment_service::InvestmentService;
pub use notification_service::NotificationService;
pub use transaction_service::TransactionService;
