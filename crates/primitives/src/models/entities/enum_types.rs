use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, DbEnum, Display, EnumString,
)]
#[ExistingTypePath = "crate::schema::sql_types::AccountType"]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    Savings,
    Income,
    Expenses,
    Investments,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, DbEnum, Display, EnumString,
)]
#[ExistingTypePath = "crate::schema::sql_types::TransactionKind"]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    Transfer,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, DbEnum, Display, EnumString,
)]
#[ExistingTypePath = "crate::schema::sql_types::InvestmentType"]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestmentType {
    Stocks,
    Bonds,
    MutualFunds,
    RealEstate,
    Crypto,
}

/// Cancellation deletes the row, so `Cancelled` never reaches storage; it
/// stays in the enum because the session type in Postgres declares it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, DbEnum, Display, EnumString,
)]
#[ExistingTypePath = "crate::schema::sql_types::SessionStatus"]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    Pending,
    Rescheduled,
    Cancelled,
    Completed,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, DbEnum, Display, EnumString,
)]
#[ExistingTypePath = "crate::schema::sql_types::AdvisorSpecialty"]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AdvisorSpecialty {
    Retirement,
    Tax,
    Investments,
    Insurance,
    EstatePlanning,
}
