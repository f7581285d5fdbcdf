pub mod create_investment;
pub mod delete_investment;
pub mod list_investments;
pub mod update_investment;
