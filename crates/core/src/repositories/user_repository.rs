use diesel::prelude::*;
use moneta_primitives::error::ApiError;
use moneta_primitives::models::entities::user::{NewUser, User};
use moneta_primitives::schema::users;
use uuid::Uuid;

pub struct UserRepository;

impl UserRepository {
    pub fn find_by_id(conn: &mut PgConnection, user_id: Uuid) -> Result<Option<User>, ApiError> {
        let user = users::table.find(user_id).first::<User>(conn).optional()?;

        Ok(user)
    }

    pub fn find_by_email(
        conn: &mut PgConnection,
        user_email: &str,
    ) -> Result<Option<User>, ApiError> {
        let user = users::table
            .filter(users::email.eq(user_email))
            .first::<User>(conn)
            .optional()?;

        Ok(user)
    }

    /// A duplicate email surfaces as `Conflict` through the unique index.
    pub fn create(conn: &mut PgConnection, new_user: NewUser) -> Result<User, ApiError> {
        let user = diesel::insert_into(users::table)
            .values(&new_user)
            .get_result::<User>(conn)?;

        Ok(user)
    }
}
