pub mod account_transactions;
pub mod book_advisory;
pub mod check_balance;
pub mod create_account;
pub mod delete_account;
pub mod delete_advisory;
pub mod delete_investment;
pub mod deposit;
pub mod get_accounts;
pub mod login;
pub mod logout;
pub mod register;
pub mod reschedule_advisory;
pub mod to_invest;
pub mod transfer;
pub mod update_account;
pub mod update_investment;
pub mod view_advisories;
pub mod view_investments;
pub mod withdraw;
