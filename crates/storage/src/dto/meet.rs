use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Meet;

/// Meet as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MeetResponse {
    pub id: i64,
    pub name: String,
    pub date: Option<String>,
    pub location: Option<String>,
}

/// Request payload for creating a meet or replacing all of its fields
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct MeetRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    pub date: Option<String>,

    pub location: Option<String>,
}

impl From<Meet> for MeetResponse {
    fn from(meet: Meet) -> Self {
        Self {
            id: meet.id,
            name: meet.name,
            date: meet.date,
            location: meet.location,
        }
    }
}
