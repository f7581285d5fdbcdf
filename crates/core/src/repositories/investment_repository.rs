use diesel::prelude::*;
use moneta_primitives::error::ApiError;
use moneta_primitives::models::entities::enum_types::InvestmentType;
use moneta_primitives::models::entities::investment::{Investment, NewInvestment};
use moneta_primitives::schema::investments;
use uuid::Uuid;

pub struct InvestmentRepository;

impl InvestmentRepository {
    pub fn create(
        conn: &mut PgConnection,
        new_investment: NewInvestment,
    ) -> Result<Investment, ApiError> {
        let investment = diesel::insert_into(investments::table)
            .values(&new_investment)
            .get_result::<Investment>(conn)?;

        Ok(investment)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        investment_id: Uuid,
    ) -> Result<Option<Investment>, ApiError> {
        let investment = investments::table
            .find(investment_id)
            .first::<Investment>(conn)
            .optional()?;

        Ok(investment)
    }

    pub fn find_all_by_user(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> Result<Vec<Investment>, ApiError> {
        let rows = investments::table
            .filter(investments::user_id.eq(user_id))
            .order(investments::created_at.desc())
            .load::<Investment>(conn)?;

        Ok(rows)
    }

    pub fn update(
        conn: &mut PgConnection,
        investment_id: Uuid,
        investment_type: InvestmentType,
        amount_cents: i64,
    ) -> Result<Investment, ApiError> {
        let investment = diesel::update(investments::table.find(investment_id))
            .set((
                investments::investment_type.eq(investment_type),
                investments::amount_cents.eq(amount_cents),
            ))
            .get_result::<Investment>(conn)?;

        Ok(investment)
    }

    pub fn delete(conn: &mut PgConnection, investment_id: Uuid) -> Result<usize, ApiError> {
        let deleted = diesel::delete(investments::table.find(investment_id)).execute(conn)?;

        Ok(deleted)
    }
}
