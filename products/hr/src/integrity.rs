use std::collections::HashMap;

use entity::Employee;
use serde::Serialize;

/// Which side of a manager/report pair is missing the back-reference.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum MissingSide {
    /// The manager's `direct_reports` does not list the report.
    DirectReports,
    /// The report's `reports_to` does not list the manager.
    ReportsTo,
}

/// A reference to an employee ID that no longer resolves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DanglingRef {
    pub employee_id: String,
    pub missing_id: String,
}

/// A link named on one side only. May be intentional (dotted-line
/// reporting) or an authoring mistake; flagged, never repaired.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AsymmetricLink {
    pub manager_id: String,
    pub report_id: String,
    pub missing_side: MissingSide,
}

/// Result of a full referential pass over the collection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct IntegrityReport {
    pub dangling_managers: Vec<DanglingRef>,
    pub dangling_reports: Vec<DanglingRef>,
    pub asymmetric_links: Vec<AsymmetricLink>,
}

impl IntegrityReport {
    pub fn is_consistent(&self) -> bool {
        self.dangling_managers.is_empty()
            && self.dangling_reports.is_empty()
            && self.asymmetric_links.is_empty()
    }
}

/// Health-check pass over `reports_to`/`direct_reports`, separate from the
/// rendering path. Rebuilds both directions and flags every reference that
/// fails to resolve or is not mirrored by the other side.
pub fn check_integrity(employees: &[Employee]) -> IntegrityReport {
    let index: HashMap<&str, &Employee> =
        employees.iter().map(|e| (e.id.as_str(), e)).collect();

    let mut report = IntegrityReport::default();
    for employee in employees {
        for manager_id in &employee.reports_to {
            match index.get(manager_id.as_str()) {
                Some(manager) => {
                    if !manager.direct_reports.contains(&employee.id) {
                        report.asymmetric_links.push(AsymmetricLink {
                            manager_id: manager_id.clone(),
                            report_id: employee.id.clone(),
                            missing_side: MissingSide::DirectReports,
                        });
                    }
                }
                None => report.dangling_managers.push(DanglingRef {
                    employee_id: employee.id.clone(),
                    missing_id: manager_id.clone(),
                }),
            }
        }
        for report_id in &employee.direct_reports {
            match index.get(report_id.as_str()) {
                Some(subordinate) => {
                    if !subordinate.reports_to.contains(&employee.id) {
                        report.asymmetric_links.push(AsymmetricLink {
                            manager_id: employee.id.clone(),
                            report_id: report_id.clone(),
                            missing_side: MissingSide::ReportsTo,
                        });
                    }
                }
                None => report.dangling_reports.push(DanglingRef {
                    employee_id: employee.id.clone(),
                    missing_id: report_id.clone(),
                }),
            }
        }
    }
    report
}
