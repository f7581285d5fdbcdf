use diesel::prelude::*;
use moneta_primitives::error::ApiError;
use moneta_primitives::models::entities::transaction::{NewTransaction, Transaction};
use moneta_primitives::schema::transactions;
use uuid::Uuid;

pub struct TransactionRepository;

impl TransactionRepository {
    /// Append-only: this is the only write the transactions table ever sees.
    pub fn append(
        conn: &mut PgConnection,
        new_transaction: NewTransaction,
    ) -> Result<Transaction, ApiError> {
        let row = diesel::insert_into(transactions::table)
            .values(&new_transaction)
            .get_result::<Transaction>(conn)?;

        Ok(row)
    }

    pub fn find_all_by_account(
        conn: &mut PgConnection,
        account_id: Uuid,
    ) -> Result<Vec<Transaction>, ApiError> {
        let rows = transactions::table
            .filter(transactions::account_id.eq(account_id))
            .order(transactions::recorded_at.desc())
            .load::<Transaction>(conn)?;

        Ok(rows)
    }
}
