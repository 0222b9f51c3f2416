mod common;

use common::{execute, seeded_schema};

#[tokio::test]
async fn resource_groups_are_alphabetical_with_other_last_where_it_sorts() {
    let schema = seeded_schema();
    let body = execute(
        &schema,
        "{ resourceGroups { category resources { title } } }",
    )
    .await;
    let categories: Vec<&str> = body["resourceGroups"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["category"].as_str().unwrap())
        .collect();
    assert_eq!(
        categories,
        vec!["Benefits", "Company Policies", "Finance", "Other"]
    );
    let benefits = &body["resourceGroups"][0]["resources"];
    assert_eq!(benefits.as_array().unwrap().len(), 2);
    assert_eq!(benefits[0]["title"], "Health insurance overview");
}

#[tokio::test]
async fn employee_rules_resource_carries_the_permission_panel_flag() {
    let schema = seeded_schema();
    let body = execute(
        &schema,
        r#"{ resource(id: "7") { title permissionPanel body } }"#,
    )
    .await;
    assert_eq!(body["resource"]["title"], "Employee Rules");
    assert_eq!(body["resource"]["permissionPanel"], true);
}

#[tokio::test]
async fn unknown_resource_resolves_to_null() {
    let schema = seeded_schema();
    let body = execute(&schema, r#"{ resource(id: "999") { id } }"#).await;
    assert!(body["resource"].is_null());
}

#[tokio::test]
async fn announcements_are_newest_first() {
    let schema = seeded_schema();
    let body = execute(&schema, "{ announcements { id date } }").await;
    let ids: Vec<&str> = body["announcements"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["3", "2", "1", "4"]);
}

#[tokio::test]
async fn departments_are_distinct_and_sorted() {
    let schema = seeded_schema();
    let body = execute(&schema, "{ departments }").await;
    let departments: Vec<&str> = body["departments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d.as_str().unwrap())
        .collect();
    assert_eq!(
        departments,
        vec![
            "Engineering",
            "Executive",
            "Finance",
            "People Operations"
        ]
    );
}
