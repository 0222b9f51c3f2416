//! Portal data model.
//!
//! The dataset is session-scoped and held entirely in memory, so these are
//! plain serde structs rather than ORM models. Cross-references between
//! records (`reports_to` / `direct_reports`) are loosely typed string IDs and
//! are allowed to dangle or diverge; consumers report those gaps instead of
//! repairing them.

pub mod announcement;
pub mod attachment;
pub mod employee;
pub mod notification;
pub mod resource;

pub use announcement::Announcement;
pub use attachment::Attachment;
pub use employee::Employee;
pub use notification::{Notification, NotificationKind};
pub use resource::Resource;
