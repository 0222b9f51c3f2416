use std::collections::BTreeMap;

use entity::{Announcement, Resource};

/// Bucket for resources without a category.
pub const OTHER_CATEGORY: &str = "Other";

#[derive(Clone, Debug, PartialEq)]
pub struct ResourceGroup {
    pub category: String,
    pub resources: Vec<Resource>,
}

/// Groups resources by category, alphabetically by category name, keeping
/// seed order within each bucket. Unlabeled (or blank) categories land in
/// the implicit "Other" bucket.
pub fn group_resources(resources: &[Resource]) -> Vec<ResourceGroup> {
    let mut buckets: BTreeMap<String, Vec<Resource>> = BTreeMap::new();
    for resource in resources {
        let category = resource
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(OTHER_CATEGORY);
        buckets
            .entry(category.to_string())
            .or_default()
            .push(resource.clone());
    }
    buckets
        .into_iter()
        .map(|(category, resources)| ResourceGroup {
            category,
            resources,
        })
        .collect()
}

/// Announcements, newest first. Stable, so equal dates keep seed order.
pub fn sorted_announcements(announcements: &[Announcement]) -> Vec<Announcement> {
    let mut sorted = announcements.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn resource(id: &str, title: &str, category: Option<&str>) -> Resource {
        Resource {
            id: id.into(),
            title: title.into(),
            description: None,
            link: None,
            category: category.map(String::from),
            icon: "file".into(),
            body: None,
            attachment: None,
            permission_panel: false,
        }
    }

    fn announcement(id: &str, year: i32) -> Announcement {
        Announcement {
            id: id.into(),
            title: format!("Announcement {id}"),
            body: String::new(),
            date: Utc.with_ymd_and_hms(year, 1, 15, 9, 0, 0).unwrap(),
            author: "HR".into(),
            image: None,
        }
    }

    #[test]
    fn groups_are_alphabetical_with_counts_preserved() {
        let data = vec![
            resource("1", "Health plan", Some("Benefits")),
            resource("2", "Code of conduct", Some("Company Policies")),
            resource("3", "Gym discount", Some("Benefits")),
        ];
        let groups = group_resources(&data);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, "Benefits");
        assert_eq!(groups[0].resources.len(), 2);
        assert_eq!(groups[0].resources[0].title, "Health plan");
        assert_eq!(groups[1].category, "Company Policies");
        assert_eq!(groups[1].resources.len(), 1);
    }

    #[test]
    fn unlabeled_resources_fall_into_other() {
        let data = vec![resource("1", "Misc", None), resource("2", "Blank", Some("  "))];
        let groups = group_resources(&data);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].category, OTHER_CATEGORY);
        assert_eq!(groups[0].resources.len(), 2);
    }

    #[test]
    fn announcements_sort_newest_first() {
        let data = vec![announcement("old", 2023), announcement("new", 2026), announcement("mid", 2024)];
        let sorted = sorted_announcements(&data);
        let ids: Vec<&str> = sorted.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }
}
