use diesel::prelude::*;
use moneta_primitives::error::ApiError;
use moneta_primitives::models::entities::account::{Account, NewAccount};
use moneta_primitives::models::entities::enum_types::AccountType;
use moneta_primitives::schema::accounts;
use uuid::Uuid;

pub struct AccountRepository;

impl AccountRepository {
    pub fn find_by_id(
        conn: &mut PgConnection,
        account_id: Uuid,
    ) -> Result<Option<Account>, ApiError> {
        let account = accounts::table
            .find(account_id)
            .first::<Account>(conn)
            .optional()?;

        Ok(account)
    }

    pub fn find_all_by_user(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> Result<Vec<Account>, ApiError> {
        let rows = accounts::table
            .filter(accounts::user_id.eq(user_id))
            .order(accounts::created_at.asc())
            .load::<Account>(conn)?;

        Ok(rows)
    }

    pub fn create(conn: &mut PgConnection, new_account: NewAccount) -> Result<Account, ApiError> {
        let account = diesel::insert_into(accounts::table)
            .values(&new_account)
            .get_result::<Account>(conn)?;

        Ok(account)
    }

    pub fn update_type(
        conn: &mut PgConnection,
        account_id: Uuid,
        account_type: AccountType,
    ) -> Result<Account, ApiError> {
        let account = diesel::update(accounts::table.find(account_id))
            .set(accounts::account_type.eq(account_type))
            .get_result::<Account>(conn)?;

        Ok(account)
    }

    /// Unconditional credit; the row must already be known to exist.
    pub fn credit(
        conn: &mut PgConnection,
        account_id: Uuid,
        amount_cents: i64,
    ) -> Result<Account, ApiError> {
        let account = diesel::update(accounts::table.find(account_id))
            .set(accounts::balance_cents.eq(accounts::balance_cents + amount_cents))
            .get_result::<Account>(conn)?;

        Ok(account)
    }

    /// Unconditional debit. There is no floor: the balance is allowed to go
    /// negative.
    pub fn debit(
        conn: &mut PgConnection,
        account_id: Uuid,
        amount_cents: i64,
    ) -> Result<Account, ApiError> {
        let account = diesel::update(accounts::table.find(account_id))
            .set(accounts::balance_cents.eq(accounts::balance_cents - amount_cents))
            .get_result::<Account>(conn)?;

        Ok(account)
    }

    pub fn delete(conn: &mut PgConnection, account_id: Uuid) -> Result<usize, ApiError> {
        let deleted = diesel::delete(accounts::table.find(account_id)).execute(conn)?;

        Ok(deleted)
    }
}
