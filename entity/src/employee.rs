use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::attachment::Attachment;

/// A single directory record.
///
/// `reports_to` and `direct_reports` are authored independently and may
/// disagree (possibly modeling dotted-line vs solid-line reporting); both are
/// surfaced as-is and never reconciled here. Order in both arrays is
/// meaningful and preserved for display.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub job_title: String,
    pub department: String,
    pub email: String,
    pub phone: String,
    pub mobile: Option<String>,
    pub fax: Option<String>,
    pub office_location: Option<String>,
    pub id_number: Option<String>,
    /// External URL or embedded `data:` URI; either form is accepted.
    pub avatar: Option<String>,
    /// Manager IDs, display order. May reference missing records.
    pub reports_to: Vec<String>,
    /// Subordinate IDs, display order. May reference missing records.
    pub direct_reports: Vec<String>,
    pub hiring_date: DateTime<Utc>,
    pub hired_by: String,
    pub attachments: Vec<Attachment>,
    pub job_description: String,
}
