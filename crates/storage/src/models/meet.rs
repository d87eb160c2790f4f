use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Meet {
    pub id: i64,
    pub name: String,
    pub date: Option<String>,
    pub location: Option<String>,
}
