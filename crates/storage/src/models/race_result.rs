use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One athlete's finish at one meet. Both references are nullable and are
/// cleared when the referenced athlete or meet is deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RaceResult {
    pub id: i64,
    pub athlete_id: Option<i64>,
    pub meet_id: Option<i64>,
    pub time: Option<String>,
    pub place: Option<i64>,
}

/// A result row joined with the athlete's current name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MeetResult {
    pub id: i64,
    pub athlete_id: Option<i64>,
    pub meet_id: Option<i64>,
    pub time: Option<String>,
    pub place: Option<i64>,
    pub athlete_name: Option<String>,
}
