use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Board entry. Seeded once and immutable; there is no mutation surface.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub author: String,
    pub image: Option<String>,
}
