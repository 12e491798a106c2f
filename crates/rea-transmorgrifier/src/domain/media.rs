use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An image, floor plan, video or document attached to a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    pub id: String,
    pub url: String,
    pub order: u32,
    pub tag: Option<String>,
    pub content_type: Option<String>,
    pub created_on: Option<NaiveDateTime>,
}

/// An open-for-inspection window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inspection {
    pub opens_on: NaiveDateTime,
    pub closes_on: Option<NaiveDateTime>,
}
