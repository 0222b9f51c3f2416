use serde::{Deserialize, Serialize};

use crate::attachment::Attachment;

/// Resource hub entry. Seeded once and immutable.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub link: Option<String>,
    /// Grouping key; `None` falls into the implicit "Other" bucket.
    pub category: Option<String>,
    pub icon: String,
    /// Internal markdown body, for entries hosted in the portal itself.
    pub body: Option<String>,
    pub attachment: Option<Attachment>,
    /// Marks the entry whose detail view hosts the per-employee permission
    /// toggle panel. The panel state is client-local and never persisted.
    pub permission_panel: bool,
}
