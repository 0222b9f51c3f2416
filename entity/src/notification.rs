use serde::{Deserialize, Serialize};

/// Simulated manager notification produced by store mutations.
///
/// Nothing is delivered; the record is returned to the caller (and logged) so
/// a real delivery channel can be wired in front of it later.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Notification {
    pub manager_name: String,
    pub manager_email: String,
    /// Name of the employee the notification is about.
    pub employee_name: String,
    pub kind: NotificationKind,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum NotificationKind {
    Added,
    Deleted,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Added => "ADDED",
            NotificationKind::Deleted => "DELETED",
        }
    }
}
