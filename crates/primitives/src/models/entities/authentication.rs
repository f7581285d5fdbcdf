use chrono::{DateTime, Utc};
use diesel::{Identifiable, Insertable, Queryable};

#[derive(Queryable, Identifiable)]
#[diesel(table_name = crate::schema::blacklisted_tokens)]
#[diesel(primary_key(jti))]
pub struct BlacklistedToken {
    pub jti: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::blacklisted_tokens)]
pub struct NewBlacklistedToken<'a> {
    pub jti: &'a str,
    pub expires_at: DateTime<Utc>,
}
