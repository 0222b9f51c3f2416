mod common;

use common::{execute, seeded_schema};
use serde_json::json;

#[tokio::test]
async fn create_employee_notifies_resolvable_managers_only() {
    let schema = seeded_schema();
    let body = execute(
        &schema,
        r#"mutation {
            createEmployee(input: {
                name: "Nora Berg"
                jobTitle: "Data Analyst"
                department: "Finance"
                email: "nora.berg@portal.test"
                phone: "555-0199"
                reportsTo: ["4", "no-such-manager"]
            }) {
                employee { name department reportsTo }
                notifications { managerName managerEmail kind }
                rejectedUploads { name }
            }
        }"#,
    )
    .await;

    let payload = &body["createEmployee"];
    assert_eq!(payload["employee"]["name"], "Nora Berg");
    assert_eq!(
        payload["employee"]["reportsTo"],
        json!(["4", "no-such-manager"])
    );
    let notifications = payload["notifications"].as_array().unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0]["managerEmail"], "daniel.okafor@portal.test");
    assert_eq!(notifications[0]["kind"], "ADDED");
    assert!(payload["rejectedUploads"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn created_employee_is_listed_first() {
    let schema = seeded_schema();
    execute(
        &schema,
        r#"mutation {
            createEmployee(input: {
                name: "First In List"
                jobTitle: "Recruiter"
                department: "People Operations"
                email: "first@portal.test"
                phone: "555-0188"
            }) { employee { id } }
        }"#,
    )
    .await;
    let body = execute(&schema, "{ employees { name } }").await;
    assert_eq!(body["employees"][0]["name"], "First In List");
}

#[tokio::test]
async fn create_employee_rejects_invalid_email() {
    let schema = seeded_schema();
    let response = schema
        .execute(async_graphql::Request::new(
            r#"mutation {
                createEmployee(input: {
                    name: "Bad Email"
                    jobTitle: "X"
                    department: "Finance"
                    email: "not-an-email"
                    phone: "1"
                }) { employee { id } }
            }"#,
        ))
        .await;
    assert_eq!(response.errors.len(), 1);
    let code = response.errors[0].extensions.as_ref().unwrap().get("code");
    assert_eq!(code, Some(&async_graphql::Value::from("INVALID_INPUT")));
}

#[tokio::test]
async fn update_replaces_only_provided_fields() {
    let schema = seeded_schema();
    let body = execute(
        &schema,
        r#"mutation {
            updateEmployee(id: "5", input: { jobTitle: "Staff Engineer" }) {
                employee { name jobTitle email }
            }
        }"#,
    )
    .await;
    let employee = &body["updateEmployee"]["employee"];
    assert_eq!(employee["jobTitle"], "Staff Engineer");
    assert_eq!(employee["name"], "Sofia Lindqvist");
    assert_eq!(employee["email"], "sofia.lindqvist@portal.test");
}

#[tokio::test]
async fn update_of_unknown_id_is_not_found() {
    let schema = seeded_schema();
    let response = schema
        .execute(async_graphql::Request::new(
            r#"mutation { updateEmployee(id: "missing", input: {}) { employee { id } } }"#,
        ))
        .await;
    assert_eq!(response.errors.len(), 1);
    let code = response.errors[0].extensions.as_ref().unwrap().get("code");
    assert_eq!(code, Some(&async_graphql::Value::from("NOT_FOUND")));
}

#[tokio::test]
async fn delete_leaves_dangling_references_for_the_checker_to_find() {
    let schema = seeded_schema();
    let body = execute(
        &schema,
        r#"mutation {
            deleteEmployee(id: "2") {
                employeeName
                notifications { managerEmail kind }
            }
        }"#,
    )
    .await;
    let payload = &body["deleteEmployee"];
    assert_eq!(payload["employeeName"], "Tomás Herrera");
    assert_eq!(payload["notifications"][0]["kind"], "DELETED");
    assert_eq!(
        payload["notifications"][0]["managerEmail"],
        "margaret.chen@portal.test"
    );

    // Former subordinates still point at the removed manager.
    let body = execute(&schema, r#"{ employee(id: "5") { reportsTo } }"#).await;
    assert_eq!(body["employee"]["reportsTo"], json!(["2"]));

    let body = execute(
        &schema,
        "{ integrityReport { consistent danglingManagers { employeeId missingId } } }",
    )
    .await;
    let report = &body["integrityReport"];
    assert_eq!(report["consistent"], false);
    let dangling = report["danglingManagers"].as_array().unwrap();
    assert!(
        dangling
            .iter()
            .any(|d| d["missingId"] == "2" && d["employeeId"] == "5")
    );
}

#[tokio::test]
async fn oversized_upload_is_rejected_but_batch_partner_survives() {
    use base64::Engine as _;
    let payload = base64::engine::general_purpose::STANDARD.encode(vec![0u8; 1024]);
    let query = format!(
        r#"mutation {{
            createEmployee(input: {{
                name: "With Files"
                jobTitle: "Clerk"
                department: "Finance"
                email: "files@portal.test"
                phone: "555-0111"
                uploads: [
                    {{ name: "huge.bin", contentType: "application/octet-stream",
                       dataUrl: "data:application/octet-stream;base64,{payload}", size: 6291456 }},
                    {{ name: "ok.bin", contentType: "application/octet-stream",
                       dataUrl: "data:application/octet-stream;base64,{payload}", size: 1024 }}
                ]
            }}) {{
                employee {{ attachments {{ name size }} }}
                rejectedUploads {{ name reason }}
            }}
        }}"#
    );
    let schema = seeded_schema();
    let body = execute(&schema, &query).await;
    let payload = &body["createEmployee"];
    let attachments = payload["employee"]["attachments"].as_array().unwrap();
    assert_eq!(attachments.len(), 1);
    assert_eq!(attachments[0]["name"], "ok.bin");
    assert_eq!(attachments[0]["size"], 1024);
    let rejected = payload["rejectedUploads"].as_array().unwrap();
    assert_eq!(rejected.len(), 1);
    assert_eq!(rejected[0]["name"], "huge.bin");
}
