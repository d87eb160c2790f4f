use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Athlete;

/// Athlete as returned to clients. Absent optional fields serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AthleteResponse {
    pub id: i64,
    pub name: String,
    pub grade: Option<i64>,
    pub personal_record: Option<String>,
    pub events: Option<String>,
}

/// Request payload for creating an athlete or replacing all of its fields
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct AthleteRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    pub grade: Option<i64>,

    pub personal_record: Option<String>,

    pub events: Option<String>,
}

impl From<Athlete> for AthleteResponse {
    fn from(athlete: Athlete) -> Self {
        Self {
            id: athlete.id,
            name: athlete.name,
            grade: athlete.grade,
            personal_record: athlete.personal_record,
            events: athlete.events,
        }
    }
}
