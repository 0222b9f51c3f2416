use std::collections::HashMap;

use entity::Employee;
use thiserror::Error;
use tracing::warn;

/// One rendered node of the reporting forest.
#[derive(Clone, Debug, PartialEq)]
pub struct OrgNode {
    pub employee: Employee,
    pub reports: Vec<OrgNode>,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum OrgChartError {
    /// `ids` is the offending path, first and last entry being the repeated
    /// employee (e.g. `a -> b -> a`).
    #[error("reporting cycle detected: {}", ids.join(" -> "))]
    CycleDetected { ids: Vec<String> },
}

/// Assembles the reporting forest from the flat collection.
///
/// Roots are employees whose `reports_to` is empty or references no existing
/// record; a dangling manager reference therefore promotes an employee to
/// root (with a warning) rather than erroring. Downward traversal trusts
/// `direct_reports` only; it is never derived from the inverse of
/// `reports_to`, and sibling order is the array's order. Source-data cycles
/// in `direct_reports` terminate with `CycleDetected` instead of recursing
/// unboundedly.
pub fn build_org_chart(employees: &[Employee]) -> Result<Vec<OrgNode>, OrgChartError> {
    let index: HashMap<&str, &Employee> =
        employees.iter().map(|e| (e.id.as_str(), e)).collect();

    let mut forest = Vec::new();
    for employee in employees {
        if is_root(employee, &index) {
            let mut path = Vec::new();
            forest.push(build_node(employee, &index, &mut path)?);
        }
    }
    Ok(forest)
}

fn is_root(employee: &Employee, index: &HashMap<&str, &Employee>) -> bool {
    if employee.reports_to.is_empty() {
        return true;
    }
    let mut resolvable = false;
    for manager_id in &employee.reports_to {
        if index.contains_key(manager_id.as_str()) {
            resolvable = true;
        } else {
            warn!(
                employee_id = %employee.id,
                manager_id = %manager_id,
                "dangling manager reference"
            );
        }
    }
    !resolvable
}

fn build_node(
    employee: &Employee,
    index: &HashMap<&str, &Employee>,
    path: &mut Vec<String>,
) -> Result<OrgNode, OrgChartError> {
    if let Some(start) = path.iter().position(|id| id == &employee.id) {
        let mut ids = path[start..].to_vec();
        ids.push(employee.id.clone());
        return Err(OrgChartError::CycleDetected { ids });
    }

    path.push(employee.id.clone());
    let mut reports = Vec::new();
    for report_id in &employee.direct_reports {
        match index.get(report_id.as_str()) {
            Some(report) => reports.push(build_node(report, index, path)?),
            None => warn!(
                employee_id = %employee.id,
                report_id = %report_id,
                "dangling direct-report reference"
            ),
        }
    }
    path.pop();

    Ok(OrgNode {
        employee: employee.clone(),
        reports,
    })
}
