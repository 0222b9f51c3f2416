//! HR vertical slice.
//!
//! Holds the session-scoped employee directory and the pure transforms built
//! on top of it: org-chart assembly, referential-integrity checks, resource
//! grouping, and attachment intake. Everything here is synchronous and
//! in-memory; the API layer owns locking and wire concerns.

pub mod attachments;
pub mod integrity;
pub mod lookup;
pub mod orgchart;
pub mod seed;
pub mod store;

pub use attachments::{MAX_ATTACHMENT_BYTES, UploadBatch, UploadError, UploadInput, accept_uploads};
pub use integrity::{IntegrityReport, check_integrity};
pub use lookup::{ResourceGroup, group_resources, sorted_announcements};
pub use orgchart::{OrgChartError, OrgNode, build_org_chart};
pub use store::{DeleteOutcome, EmployeeStore, EmployeeUpdate, NewEmployee};
