use serde::{Deserialize, Serialize};

/// An embedded file payload owned by exactly one parent record.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Attachment {
    pub id: String,
    pub name: String,
    pub content_type: String,
    /// `data:` URI carrying the base64-encoded file content.
    pub data_url: String,
    /// Decoded size in bytes.
    pub size: u64,
}
