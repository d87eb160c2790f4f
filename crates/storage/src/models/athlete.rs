use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Athlete {
    pub id: i64,
    pub name: String,
    pub grade: Option<i64>,
    pub personal_record: Option<String>,
    pub events: Option<String>,
}
