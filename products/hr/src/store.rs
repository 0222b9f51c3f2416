use chrono::{DateTime, Utc};
use entity::{Attachment, Employee, Notification, NotificationKind};
use rand::Rng;
use rand::distributions::Alphanumeric;
use tracing::{info, warn};

/// Canonical in-memory employee collection for one server session.
///
/// Constructed once at startup and shared by reference; there is no
/// cross-session persistence. Mutations return the simulated notifications
/// they produce instead of delivering anything.
#[derive(Debug, Default)]
pub struct EmployeeStore {
    employees: Vec<Employee>,
}

/// Input for creating a record. The store assigns the ID.
#[derive(Clone, Debug)]
pub struct NewEmployee {
    pub name: String,
    pub job_title: String,
    pub department: String,
    pub email: String,
    pub phone: String,
    pub mobile: Option<String>,
    pub fax: Option<String>,
    pub office_location: Option<String>,
    pub id_number: Option<String>,
    pub avatar: Option<String>,
    pub reports_to: Vec<String>,
    pub direct_reports: Vec<String>,
    pub hiring_date: DateTime<Utc>,
    pub hired_by: String,
    pub attachments: Vec<Attachment>,
    pub job_description: String,
}

/// Partial update; `None` fields keep their prior values. Attachments and
/// avatar replace wholesale when present.
#[derive(Clone, Debug, Default)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub fax: Option<String>,
    pub office_location: Option<String>,
    pub id_number: Option<String>,
    pub avatar: Option<String>,
    pub reports_to: Option<Vec<String>>,
    pub direct_reports: Option<Vec<String>>,
    pub hiring_date: Option<DateTime<Utc>>,
    pub hired_by: Option<String>,
    pub attachments: Option<Vec<Attachment>>,
    pub job_description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub employee_name: String,
    pub notifications: Vec<Notification>,
}

impl EmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_employees(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    pub fn all(&self) -> &[Employee] {
        &self.employees
    }

    pub fn get(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    pub fn in_department(&self, department: &str) -> Vec<&Employee> {
        self.employees
            .iter()
            .filter(|e| e.department.eq_ignore_ascii_case(department))
            .collect()
    }

    /// Distinct department names, alphabetical.
    pub fn departments(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .employees
            .iter()
            .map(|e| e.department.clone())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Creates a record and prepends it to the collection.
    ///
    /// One `Added` notification is emitted per `reports_to` entry that
    /// resolves against the post-insert collection; unresolved manager IDs
    /// are skipped with a warning, never an error.
    pub fn add(&mut self, input: NewEmployee) -> (Employee, Vec<Notification>) {
        let employee = Employee {
            id: generate_id(),
            name: input.name,
            job_title: input.job_title,
            department: input.department,
            email: input.email,
            phone: input.phone,
            mobile: input.mobile,
            fax: input.fax,
            office_location: input.office_location,
            id_number: input.id_number,
            avatar: input.avatar,
            reports_to: input.reports_to,
            direct_reports: input.direct_reports,
            hiring_date: input.hiring_date,
            hired_by: input.hired_by,
            attachments: input.attachments,
            job_description: input.job_description,
        };
        self.employees.insert(0, employee.clone());

        let notifications =
            self.notify_managers(&employee.reports_to, &employee.name, NotificationKind::Added);
        info!(
            employee_id = %employee.id,
            notified = notifications.len(),
            "employee added"
        );
        (employee, notifications)
    }

    /// Applies a partial update in place. `None` when the ID is unknown, so
    /// callers can surface a not-found state instead of a silent no-op.
    pub fn update(&mut self, id: &str, patch: EmployeeUpdate) -> Option<Employee> {
        let employee = self.employees.iter_mut().find(|e| e.id == id)?;
        if let Some(name) = patch.name {
            employee.name = name;
        }
        if let Some(job_title) = patch.job_title {
            employee.job_title = job_title;
        }
        if let Some(department) = patch.department {
            employee.department = department;
        }
        if let Some(email) = patch.email {
            employee.email = email;
        }
        if let Some(phone) = patch.phone {
            employee.phone = phone;
        }
        if let Some(mobile) = patch.mobile {
            employee.mobile = Some(mobile);
        }
        if let Some(fax) = patch.fax {
            employee.fax = Some(fax);
        }
        if let Some(office_location) = patch.office_location {
            employee.office_location = Some(office_location);
        }
        if let Some(id_number) = patch.id_number {
            employee.id_number = Some(id_number);
        }
        if let Some(avatar) = patch.avatar {
            employee.avatar = Some(avatar);
        }
        if let Some(reports_to) = patch.reports_to {
            employee.reports_to = reports_to;
        }
        if let Some(direct_reports) = patch.direct_reports {
            employee.direct_reports = direct_reports;
        }
        if let Some(hiring_date) = patch.hiring_date {
            employee.hiring_date = hiring_date;
        }
        if let Some(hired_by) = patch.hired_by {
            employee.hired_by = hired_by;
        }
        if let Some(attachments) = patch.attachments {
            employee.attachments = attachments;
        }
        if let Some(job_description) = patch.job_description {
            employee.job_description = job_description;
        }
        info!(employee_id = %id, "employee updated");
        Some(employee.clone())
    }

    /// Removes a record and reports which still-existing managers would have
    /// been notified.
    ///
    /// Deliberately leaves other employees' `reports_to`/`direct_reports`
    /// entries pointing at the removed ID untouched; dangling references are
    /// the integrity checker's job to surface, not this method's to clean up.
    pub fn delete(&mut self, id: &str) -> Option<DeleteOutcome> {
        let position = self.employees.iter().position(|e| e.id == id)?;
        let removed = self.employees.remove(position);
        let notifications =
            self.notify_managers(&removed.reports_to, &removed.name, NotificationKind::Deleted);
        info!(
            employee_id = %removed.id,
            notified = notifications.len(),
            "employee deleted"
        );
        Some(DeleteOutcome {
            employee_name: removed.name,
            notifications,
        })
    }

    fn notify_managers(
        &self,
        manager_ids: &[String],
        employee_name: &str,
        kind: NotificationKind,
    ) -> Vec<Notification> {
        let mut notifications = Vec::new();
        for manager_id in manager_ids {
            match self.get(manager_id) {
                Some(manager) => {
                    let notification = Notification {
                        manager_name: manager.name.clone(),
                        manager_email: manager.email.clone(),
                        employee_name: employee_name.to_string(),
                        kind,
                    };
                    info!(
                        manager = %notification.manager_email,
                        kind = kind.as_str(),
                        "simulated manager notification"
                    );
                    notifications.push(notification);
                }
                None => {
                    warn!(manager_id = %manager_id, "manager reference did not resolve; skipping notification");
                }
            }
        }
        notifications
    }
}

/// Millisecond timestamp plus a short random suffix. Collisions are accepted
/// as negligible for a session-scoped dataset.
fn generate_id() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();
    format!("{}-{}", Utc::now().timestamp_millis(), suffix)
}
