use crate::models::entities::enum_types::AdvisorSpecialty;
use chrono::{DateTime, Utc};
use diesel::{Identifiable, Insertable, Queryable};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Queryable, Identifiable, Serialize)]
#[diesel(table_name = crate::schema::advisors)]
pub struct Advisor {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub specialty: AdvisorSpecialty,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::advisors)]
pub struct NewAdvisor<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub specialty: AdvisorSpecialty,
}
