use async_graphql::{Enum, ID, InputObject, SimpleObject};
use chrono::{DateTime, Utc};
use entity::{Announcement, Attachment, Employee, Notification, NotificationKind, Resource};
use products_hr::attachments::{RejectedUpload, UploadInput};
use products_hr::integrity::{AsymmetricLink, DanglingRef, IntegrityReport, MissingSide};
use products_hr::lookup::ResourceGroup;
use products_hr::orgchart::OrgNode;
use products_hr::store::{DeleteOutcome, EmployeeUpdate, NewEmployee};

#[derive(Clone, Debug, SimpleObject)]
#[graphql(name = "Employee")]
pub struct EmployeeNode {
    pub id: ID,
    pub name: String,
    #[graphql(name = "jobTitle")]
    pub job_title: String,
    pub department: String,
    pub email: String,
    pub phone: String,
    pub mobile: Option<String>,
    pub fax: Option<String>,
    #[graphql(name = "officeLocation")]
    pub office_location: Option<String>,
    #[graphql(name = "idNumber")]
    pub id_number: Option<String>,
    pub avatar: Option<String>,
    /// Manager IDs in display order. Surfaced verbatim; may disagree with
    /// `directReports` on the other side, and the caller reconciles.
    #[graphql(name = "reportsTo")]
    pub reports_to: Vec<ID>,
    #[graphql(name = "directReports")]
    pub direct_reports: Vec<ID>,
    #[graphql(name = "hiringDate")]
    pub hiring_date: DateTime<Utc>,
    #[graphql(name = "hiredBy")]
    pub hired_by: String,
    pub attachments: Vec<AttachmentNode>,
    #[graphql(name = "jobDescription")]
    pub job_description: String,
}

impl From<Employee> for EmployeeNode {
    fn from(employee: Employee) -> Self {
        Self {
            id: ID::from(employee.id),
            name: employee.name,
            job_title: employee.job_title,
            department: employee.department,
            email: employee.email,
            phone: employee.phone,
            mobile: employee.mobile,
            fax: employee.fax,
            office_location: employee.office_location,
            id_number: employee.id_number,
            avatar: employee.avatar,
            reports_to: employee.reports_to.into_iter().map(ID::from).collect(),
            direct_reports: employee.direct_reports.into_iter().map(ID::from).collect(),
            hiring_date: employee.hiring_date,
            hired_by: employee.hired_by,
            attachments: employee.attachments.into_iter().map(Into::into).collect(),
            job_description: employee.job_description,
        }
    }
}

#[derive(Clone, Debug, SimpleObject)]
#[graphql(name = "Attachment")]
pub struct AttachmentNode {
    pub id: ID,
    pub name: String,
    #[graphql(name = "contentType")]
    pub content_type: String,
    #[graphql(name = "dataUrl")]
    pub data_url: String,
    pub size: u64,
}

impl From<Attachment> for AttachmentNode {
    fn from(attachment: Attachment) -> Self {
        Self {
            id: ID::from(attachment.id),
            name: attachment.name,
            content_type: attachment.content_type,
            data_url: attachment.data_url,
            size: attachment.size,
        }
    }
}

#[derive(Clone, Debug, SimpleObject)]
#[graphql(name = "Announcement")]
pub struct AnnouncementNode {
    pub id: ID,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub author: String,
    pub image: Option<String>,
}

impl From<Announcement> for AnnouncementNode {
    fn from(announcement: Announcement) -> Self {
        Self {
            id: ID::from(announcement.id),
            title: announcement.title,
            body: announcement.body,
            date: announcement.date,
            author: announcement.author,
            image: announcement.image,
        }
    }
}

#[derive(Clone, Debug, SimpleObject)]
#[graphql(name = "Resource")]
pub struct ResourceNode {
    pub id: ID,
    pub title: String,
    pub description: Option<String>,
    pub link: Option<String>,
    pub category: Option<String>,
    pub icon: String,
    pub body: Option<String>,
    pub attachment: Option<AttachmentNode>,
    /// True for the entry whose detail view hosts the permission panel.
    #[graphql(name = "permissionPanel")]
    pub permission_panel: bool,
}

impl From<Resource> for ResourceNode {
    fn from(resource: Resource) -> Self {
        Self {
            id: ID::from(resource.id),
            title: resource.title,
            description: resource.description,
            link: resource.link,
            category: resource.category,
            icon: resource.icon,
            body: resource.body,
            attachment: resource.attachment.map(Into::into),
            permission_panel: resource.permission_panel,
        }
    }
}

#[derive(Clone, Debug, SimpleObject)]
#[graphql(name = "ResourceGroup")]
pub struct ResourceGroupNode {
    pub category: String,
    pub resources: Vec<ResourceNode>,
}

impl From<ResourceGroup> for ResourceGroupNode {
    fn from(group: ResourceGroup) -> Self {
        Self {
            category: group.category,
            resources: group.resources.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Clone, Debug, SimpleObject)]
#[graphql(name = "OrgNode")]
pub struct OrgChartNode {
    pub employee: EmployeeNode,
    pub reports: Vec<OrgChartNode>,
}

impl From<OrgNode> for OrgChartNode {
    fn from(node: OrgNode) -> Self {
        Self {
            employee: node.employee.into(),
            reports: node.reports.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum NotificationKindGql {
    #[graphql(name = "ADDED")]
    Added,
    #[graphql(name = "DELETED")]
    Deleted,
}

impl From<NotificationKind> for NotificationKindGql {
    fn from(kind: NotificationKind) -> Self {
        match kind {
            NotificationKind::Added => NotificationKindGql::Added,
            NotificationKind::Deleted => NotificationKindGql::Deleted,
        }
    }
}

#[derive(Clone, Debug, SimpleObject)]
#[graphql(name = "Notification")]
pub struct NotificationNode {
    #[graphql(name = "managerName")]
    pub manager_name: String,
    #[graphql(name = "managerEmail")]
    pub manager_email: String,
    #[graphql(name = "employeeName")]
    pub employee_name: String,
    pub kind: NotificationKindGql,
}

impl From<Notification> for NotificationNode {
    fn from(notification: Notification) -> Self {
        Self {
            manager_name: notification.manager_name,
            manager_email: notification.manager_email,
            employee_name: notification.employee_name,
            kind: notification.kind.into(),
        }
    }
}

#[derive(Clone, Debug, SimpleObject)]
#[graphql(name = "RejectedUpload")]
pub struct RejectedUploadNode {
    pub name: String,
    pub reason: String,
}

impl From<RejectedUpload> for RejectedUploadNode {
    fn from(rejected: RejectedUpload) -> Self {
        Self {
            name: rejected.name,
            reason: rejected.reason.to_string(),
        }
    }
}

#[derive(Clone, Debug, SimpleObject)]
#[graphql(name = "DanglingRef")]
pub struct DanglingRefNode {
    #[graphql(name = "employeeId")]
    pub employee_id: ID,
    #[graphql(name = "missingId")]
    pub missing_id: ID,
}

impl From<DanglingRef> for DanglingRefNode {
    fn from(dangling: DanglingRef) -> Self {
        Self {
            employee_id: ID::from(dangling.employee_id),
            missing_id: ID::from(dangling.missing_id),
        }
    }
}

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum MissingSideGql {
    #[graphql(name = "DIRECT_REPORTS")]
    DirectReports,
    #[graphql(name = "REPORTS_TO")]
    ReportsTo,
}

impl From<MissingSide> for MissingSideGql {
    fn from(side: MissingSide) -> Self {
        match side {
            MissingSide::DirectReports => MissingSideGql::DirectReports,
            MissingSide::ReportsTo => MissingSideGql::ReportsTo,
        }
    }
}

#[derive(Clone, Debug, SimpleObject)]
#[graphql(name = "AsymmetricLink")]
pub struct AsymmetricLinkNode {
    #[graphql(name = "managerId")]
    pub manager_id: ID,
    #[graphql(name = "reportId")]
    pub report_id: ID,
    #[graphql(name = "missingSide")]
    pub missing_side: MissingSideGql,
}

impl From<AsymmetricLink> for AsymmetricLinkNode {
    fn from(link: AsymmetricLink) -> Self {
        Self {
            manager_id: ID::from(link.manager_id),
            report_id: ID::from(link.report_id),
            missing_side: link.missing_side.into(),
        }
    }
}

#[derive(Clone, Debug, SimpleObject)]
#[graphql(name = "IntegrityReport")]
pub struct IntegrityReportNode {
    pub consistent: bool,
    #[graphql(name = "danglingManagers")]
    pub dangling_managers: Vec<DanglingRefNode>,
    #[graphql(name = "danglingReports")]
    pub dangling_reports: Vec<DanglingRefNode>,
    #[graphql(name = "asymmetricLinks")]
    pub asymmetric_links: Vec<AsymmetricLinkNode>,
}

impl From<IntegrityReport> for IntegrityReportNode {
    fn from(report: IntegrityReport) -> Self {
        Self {
            consistent: report.is_consistent(),
            dangling_managers: report.dangling_managers.into_iter().map(Into::into).collect(),
            dangling_reports: report.dangling_reports.into_iter().map(Into::into).collect(),
            asymmetric_links: report.asymmetric_links.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Clone, Debug, SimpleObject)]
pub struct CreateEmployeePayload {
    pub employee: EmployeeNode,
    /// Simulated manager notifications; nothing was delivered.
    pub notifications: Vec<NotificationNode>,
    #[graphql(name = "rejectedUploads")]
    pub rejected_uploads: Vec<RejectedUploadNode>,
}

#[derive(Clone, Debug, SimpleObject)]
pub struct UpdateEmployeePayload {
    pub employee: EmployeeNode,
    #[graphql(name = "rejectedUploads")]
    pub rejected_uploads: Vec<RejectedUploadNode>,
}

#[derive(Clone, Debug, SimpleObject)]
pub struct DeleteEmployeePayload {
    #[graphql(name = "employeeName")]
    pub employee_name: String,
    pub notifications: Vec<NotificationNode>,
}

impl From<DeleteOutcome> for DeleteEmployeePayload {
    fn from(outcome: DeleteOutcome) -> Self {
        Self {
            employee_name: outcome.employee_name,
            notifications: outcome.notifications.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(InputObject, Clone, Debug)]
pub struct UploadInputGql {
    pub name: String,
    #[graphql(name = "contentType")]
    pub content_type: String,
    #[graphql(name = "dataUrl")]
    pub data_url: String,
    pub size: u64,
}

impl From<UploadInputGql> for UploadInput {
    fn from(input: UploadInputGql) -> Self {
        Self {
            name: input.name,
            content_type: input.content_type,
            data_url: input.data_url,
            size: input.size,
        }
    }
}

#[derive(InputObject, Clone, Debug)]
pub struct NewEmployeeInput {
    pub name: String,
    #[graphql(name = "jobTitle")]
    pub job_title: String,
    pub department: String,
    pub email: String,
    pub phone: String,
    pub mobile: Option<String>,
    pub fax: Option<String>,
    #[graphql(name = "officeLocation")]
    pub office_location: Option<String>,
    #[graphql(name = "idNumber")]
    pub id_number: Option<String>,
    pub avatar: Option<String>,
    #[graphql(name = "reportsTo", default)]
    pub reports_to: Vec<ID>,
    #[graphql(name = "directReports", default)]
    pub direct_reports: Vec<ID>,
    /// Defaults to the submission time when omitted.
    #[graphql(name = "hiringDate")]
    pub hiring_date: Option<DateTime<Utc>>,
    #[graphql(name = "hiredBy")]
    pub hired_by: Option<String>,
    #[graphql(default)]
    pub uploads: Vec<UploadInputGql>,
    #[graphql(name = "jobDescription")]
    pub job_description: Option<String>,
}

impl NewEmployeeInput {
    pub fn into_new_employee(self, attachments: Vec<Attachment>) -> NewEmployee {
        NewEmployee {
            name: self.name,
            job_title: self.job_title,
            department: self.department,
            email: self.email,
            phone: self.phone,
            mobile: self.mobile,
            fax: self.fax,
            office_location: self.office_location,
            id_number: self.id_number,
            avatar: self.avatar,
            reports_to: self.reports_to.into_iter().map(|id| id.to_string()).collect(),
            direct_reports: self
                .direct_reports
                .into_iter()
                .map(|id| id.to_string())
                .collect(),
            hiring_date: self.hiring_date.unwrap_or_else(Utc::now),
            hired_by: self.hired_by.unwrap_or_default(),
            attachments,
            job_description: self.job_description.unwrap_or_default(),
        }
    }
}

#[derive(InputObject, Clone, Debug, Default)]
pub struct UpdateEmployeeInput {
    pub name: Option<String>,
    #[graphql(name = "jobTitle")]
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub fax: Option<String>,
    #[graphql(name = "officeLocation")]
    pub office_location: Option<String>,
    #[graphql(name = "idNumber")]
    pub id_number: Option<String>,
    pub avatar: Option<String>,
    #[graphql(name = "reportsTo")]
    pub reports_to: Option<Vec<ID>>,
    #[graphql(name = "directReports")]
    pub direct_reports: Option<Vec<ID>>,
    #[graphql(name = "hiringDate")]
    pub hiring_date: Option<DateTime<Utc>>,
    #[graphql(name = "hiredBy")]
    pub hired_by: Option<String>,
    /// Replaces the attachment list wholesale when present.
    pub uploads: Option<Vec<UploadInputGql>>,
    #[graphql(name = "jobDescription")]
    pub job_description: Option<String>,
}

impl UpdateEmployeeInput {
    pub fn into_update(self, attachments: Option<Vec<Attachment>>) -> EmployeeUpdate {
        EmployeeUpdate {
            name: self.name,
            job_title: self.job_title,
            department: self.department,
            email: self.email,
            phone: self.phone,
            mobile: self.mobile,
            fax: self.fax,
            office_location: self.office_location,
            id_number: self.id_number,
            avatar: self.avatar,
            reports_to: self
                .reports_to
                .map(|ids| ids.into_iter().map(|id| id.to_string()).collect()),
            direct_reports: self
                .direct_reports
                .map(|ids| ids.into_iter().map(|id| id.to_string()).collect()),
            hiring_date: self.hiring_date,
            hired_by: self.hired_by,
            attachments,
            job_description: self.job_description,
        }
    }
}
