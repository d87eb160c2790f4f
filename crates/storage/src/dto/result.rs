use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{MeetResult, RaceResult};

/// Result as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResultResponse {
    pub id: i64,
    pub athlete_id: Option<i64>,
    pub meet_id: Option<i64>,
    pub time: Option<String>,
    pub place: Option<i64>,
}

/// Result of a meet carrying the athlete's current name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeetResultResponse {
    pub id: i64,
    pub athlete_id: Option<i64>,
    pub meet_id: Option<i64>,
    pub time: Option<String>,
    pub place: Option<i64>,
    /// `null` once the athlete has been deleted
    pub athlete_name: Option<String>,
}

/// Request payload for creating a result or replacing all of its fields.
/// Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResultRequest {
    pub athlete_id: Option<i64>,
    pub meet_id: Option<i64>,
    pub time: Option<String>,
    pub place: Option<i64>,
}

impl From<RaceResult> for ResultResponse {
    fn from(result: RaceResult) -> Self {
        Self {
            id: result.id,
            athlete_id: result.athlete_id,
            meet_id: result.meet_id,
            time: result.time,
            place: result.place,
        }
    }
}

impl From<MeetResult> for MeetResultResponse {
    fn from(row: MeetResult) -> Self {
        Self {
            id: row.id,
            athlete_id: row.athlete_id,
            meet_id: row.meet_id,
            time: row.time,
            place: row.place,
            athlete_name: row.athlete_name,
        }
    }
}
