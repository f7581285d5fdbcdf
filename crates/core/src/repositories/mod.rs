pub mod account_repository;
pub mod advisor_repository;
pub mod investment_repository;
pub mod session_repository;
pub mod transaction_repository;
pub mod user_repository;

pub use account_repository::AccountRepository;
pub use advisor_repository::AdvisorRepository;
pub use investment_repository::InvestmentRepository;
pub use session_repository::SessionRepository;
pub use transaction_repository::TransactionRepository;
pub use user_repository::UserRepository;
