use std::sync::Arc;

use async_graphql::{
    Context, EmptySubscription, ErrorExtensions, ID, Object, Schema, SimpleObject,
};
use entity::{Announcement, Resource};
use platform_api::ApiError;
use products_faq::{AnswerProvider, FALLBACK_ANSWER, FaqError, validate_question};
use products_hr::store::EmployeeStore;
use products_hr::{accept_uploads, build_org_chart, check_integrity, group_resources,
    orgchart::OrgChartError, sorted_announcements};
use tokio::sync::RwLock;
use tracing::{instrument, warn};

use crate::nodes::{
    AnnouncementNode, CreateEmployeePayload, DeleteEmployeePayload, EmployeeNode,
    IntegrityReportNode, NewEmployeeInput, OrgChartNode, ResourceGroupNode, ResourceNode,
    UpdateEmployeeInput, UpdateEmployeePayload,
};

pub type SchemaType = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Everything the resolvers need, shared through schema data.
///
/// The store takes a lock because axum serves from a multi-threaded runtime,
/// even though the portal's logical model is a single interactive writer.
/// Announcements and resources are seeded once and never mutated.
#[derive(Clone)]
pub struct PortalData {
    pub store: Arc<RwLock<EmployeeStore>>,
    pub announcements: Arc<Vec<Announcement>>,
    pub resources: Arc<Vec<Resource>>,
    pub faq: Arc<dyn AnswerProvider>,
}

pub fn build_schema(data: PortalData) -> SchemaType {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(data)
        .finish()
}

pub struct QueryRoot;
pub struct MutationRoot;

#[Object]
impl QueryRoot {
    async fn health(&self) -> HealthPayload {
        HealthPayload { ok: true }
    }

    async fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    #[instrument(name = "graphql.employees", skip_all)]
    async fn employees(
        &self,
        ctx: &Context<'_>,
        department: Option<String>,
    ) -> async_graphql::Result<Vec<EmployeeNode>> {
        let data = portal(ctx)?;
        let store = data.store.read().await;
        let employees = match department {
            Some(department) => store
                .in_department(&department)
                .into_iter()
                .cloned()
                .collect(),
            None => store.all().to_vec(),
        };
        Ok(employees.into_iter().map(EmployeeNode::from).collect())
    }

    /// `null` when the ID is unknown; the client renders its not-found view.
    async fn employee(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<Option<EmployeeNode>> {
        let data = portal(ctx)?;
        let store = data.store.read().await;
        Ok(store.get(id.as_str()).cloned().map(EmployeeNode::from))
    }

    async fn departments(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<String>> {
        let data = portal(ctx)?;
        Ok(data.store.read().await.departments())
    }

    #[instrument(name = "graphql.orgChart", skip_all)]
    #[graphql(name = "orgChart")]
    async fn org_chart(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<OrgChartNode>> {
        let data = portal(ctx)?;
        let store = data.store.read().await;
        let forest = build_org_chart(store.all()).map_err(|err| match err {
            OrgChartError::CycleDetected { ids } => ApiError::CycleDetected(ids).extend(),
        })?;
        Ok(forest.into_iter().map(OrgChartNode::from).collect())
    }

    #[graphql(name = "integrityReport")]
    async fn integrity_report(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<IntegrityReportNode> {
        let data = portal(ctx)?;
        let store = data.store.read().await;
        Ok(check_integrity(store.all()).into())
    }

    async fn announcements(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<AnnouncementNode>> {
        let data = portal(ctx)?;
        Ok(sorted_announcements(&data.announcements)
            .into_iter()
            .map(AnnouncementNode::from)
            .collect())
    }

    #[graphql(name = "resourceGroups")]
    async fn resource_groups(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Vec<ResourceGroupNode>> {
        let data = portal(ctx)?;
        Ok(group_resources(&data.resources)
            .into_iter()
            .map(ResourceGroupNode::from)
            .collect())
    }

    async fn resource(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<Option<ResourceNode>> {
        let data = portal(ctx)?;
        Ok(data
            .resources
            .iter()
            .find(|r| r.id == id.as_str())
            .cloned()
            .map(ResourceNode::from))
    }
}

#[Object]
impl MutationRoot {
    #[instrument(name = "graphql.createEmployee", skip_all)]
    #[graphql(name = "createEmployee")]
    async fn create_employee(
        &self,
        ctx: &Context<'_>,
        input: NewEmployeeInput,
    ) -> async_graphql::Result<CreateEmployeePayload> {
        validate_name(&input.name)?;
        validate_email(&input.email)?;
        let data = portal(ctx)?;
        let batch = accept_uploads(input.uploads.iter().cloned().map(Into::into).collect());
        let mut store = data.store.write().await;
        let (employee, notifications) = store.add(input.into_new_employee(batch.accepted));
        Ok(CreateEmployeePayload {
            employee: employee.into(),
            notifications: notifications.into_iter().map(Into::into).collect(),
            rejected_uploads: batch.rejected.into_iter().map(Into::into).collect(),
        })
    }

    #[instrument(name = "graphql.updateEmployee", skip_all)]
    #[graphql(name = "updateEmployee")]
    async fn update_employee(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateEmployeeInput,
    ) -> async_graphql::Result<UpdateEmployeePayload> {
        if let Some(name) = &input.name {
            validate_name(name)?;
        }
        if let Some(email) = &input.email {
            validate_email(email)?;
        }
        let data = portal(ctx)?;
        let batch = input
            .uploads
            .as_ref()
            .map(|uploads| accept_uploads(uploads.iter().cloned().map(Into::into).collect()));
        let (attachments, rejected) = match batch {
            Some(batch) => (Some(batch.accepted), batch.rejected),
            None => (None, vec![]),
        };
        let mut store = data.store.write().await;
        let employee = store
            .update(id.as_str(), input.into_update(attachments))
            .ok_or_else(|| ApiError::NotFound.extend())?;
        Ok(UpdateEmployeePayload {
            employee: employee.into(),
            rejected_uploads: rejected.into_iter().map(Into::into).collect(),
        })
    }

    #[instrument(name = "graphql.deleteEmployee", skip_all)]
    #[graphql(name = "deleteEmployee")]
    async fn delete_employee(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<DeleteEmployeePayload> {
        let data = portal(ctx)?;
        let mut store = data.store.write().await;
        let outcome = store
            .delete(id.as_str())
            .ok_or_else(|| ApiError::NotFound.extend())?;
        Ok(outcome.into())
    }

    /// Forwards a question to the FAQ provider. Validation failures surface
    /// as errors; provider failures are logged and masked behind the fixed
    /// fallback string so end users never see provider internals.
    #[instrument(name = "graphql.askFaq", skip_all)]
    #[graphql(name = "askFaq")]
    async fn ask_faq(&self, ctx: &Context<'_>, question: String) -> async_graphql::Result<String> {
        let question = validate_question(&question)
            .map_err(|err| ApiError::InvalidInput(err.to_string()).extend())?;
        let data = portal(ctx)?;
        match data.faq.ask(question).await {
            Ok(answer) => Ok(answer),
            Err(FaqError::InvalidQuestion { len }) => {
                Err(ApiError::InvalidInput(FaqError::InvalidQuestion { len }.to_string()).extend())
            }
            Err(err) => {
                warn!(error = %err, "FAQ provider failure; returning fallback");
                Ok(FALLBACK_ANSWER.to_string())
            }
        }
    }
}

#[derive(Clone, Debug, SimpleObject)]
pub struct HealthPayload {
    pub ok: bool,
}

fn portal<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a PortalData> {
    ctx.data::<PortalData>()
}

fn validate_name(name: &str) -> async_graphql::Result<()> {
    if name.trim().is_empty() {
        return Err(ApiError::InvalidInput("name must not be empty".into()).extend());
    }
    Ok(())
}

fn validate_email(email: &str) -> async_graphql::Result<()> {
    let trimmed = email.trim();
    if trimmed.len() < 3 || !trimmed.contains('@') {
        return Err(ApiError::InvalidInput("email address is not valid".into()).extend());
    }
    Ok(())
}
