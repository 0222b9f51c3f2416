use std::sync::Arc;

use api::{PortalData, SchemaType, build_schema};
use async_trait::async_trait;
use entity::Employee;
use products_faq::{AnswerProvider, FaqError};
use products_hr::seed;
use products_hr::store::EmployeeStore;
use tokio::sync::RwLock;

/// Provider that always answers with a fixed string.
pub struct StaticProvider(pub &'static str);

#[async_trait]
impl AnswerProvider for StaticProvider {
    async fn ask(&self, _question: &str) -> Result<String, FaqError> {
        Ok(self.0.to_string())
    }
}

/// Provider that always fails, simulating a provider outage.
pub struct FailingProvider;

#[async_trait]
impl AnswerProvider for FailingProvider {
    async fn ask(&self, _question: &str) -> Result<String, FaqError> {
        Err(FaqError::Provider("upstream 500".into()))
    }
}

pub fn seeded_schema() -> SchemaType {
    schema_with(seed::employees(), Arc::new(StaticProvider("ask HR")))
}

pub fn schema_with(employees: Vec<Employee>, faq: Arc<dyn AnswerProvider>) -> SchemaType {
    build_schema(PortalData {
        store: Arc::new(RwLock::new(EmployeeStore::with_employees(employees))),
        announcements: Arc::new(seed::announcements()),
        resources: Arc::new(seed::resources()),
        faq,
    })
}

/// Executes a request and panics on GraphQL errors, returning the data JSON.
pub async fn execute(schema: &SchemaType, query: &str) -> serde_json::Value {
    let response = schema.execute(async_graphql::Request::new(query)).await;
    assert!(response.errors.is_empty(), "unexpected errors: {:?}", response.errors);
    response.data.into_json().unwrap()
}
