use diesel::prelude::*;
use moneta_primitives::error::ApiError;
use moneta_primitives::models::entities::advisor::{Advisor, NewAdvisor};
use moneta_primitives::schema::advisors;
use uuid::Uuid;

pub struct AdvisorRepository;

impl AdvisorRepository {
    /// A duplicate email surfaces as `Conflict` through the unique index.
    pub fn create(conn: &mut PgConnection, new_advisor: NewAdvisor) -> Result<Advisor, ApiError> {
        let advisor = diesel::insert_into(advisors::table)
            .values(&new_advisor)
            .get_result::<Advisor>(conn)?;

        Ok(advisor)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        advisor_id: Uuid,
    ) -> Result<Option<Advisor>, ApiError> {
        let advisor = advisors::table
            .find(advisor_id)
            .first::<Advisor>(conn)
            .optional()?;

        Ok(advisor)
    }

    pub fn find_all(conn: &mut PgConnection) -> Result<Vec<Advisor>, ApiError> {
        let rows = advisors::table
            .order(advisors::name.asc())
            .load::<Advisor>(conn)?;

        Ok(rows)
    }

    pub fn count(conn: &mut PgConnection) -> Result<i64, ApiError> {
        let total = advisors::table.count().get_result::<i64>(conn)?;

        Ok(total)
    }

    /// No cascade: sessions booked against the advisor keep their now
    /// dangling `advisor_id`.
    pub fn delete(conn: &mut PgConnection, advisor_id: Uuid) -> Result<usize, ApiError> {
        let deleted = diesel::delete(advisors::table.find(advisor_id)).execute(conn)?;

        Ok(deleted)
    }
}
