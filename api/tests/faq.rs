mod common;

use std::sync::Arc;

use common::{FailingProvider, StaticProvider, execute, schema_with};
use products_faq::FALLBACK_ANSWER;
use products_hr::seed;

#[tokio::test]
async fn valid_question_returns_the_provider_answer() {
    let schema = schema_with(
        seed::employees(),
        Arc::new(StaticProvider("Vacation accrues monthly.")),
    );
    let body = execute(
        &schema,
        r#"mutation { askFaq(question: "How does vacation accrual work here?") }"#,
    )
    .await;
    assert_eq!(body["askFaq"], "Vacation accrues monthly.");
}

#[tokio::test]
async fn short_question_is_blocked_before_the_provider_is_called() {
    let schema = schema_with(seed::employees(), Arc::new(FailingProvider));
    let response = schema
        .execute(async_graphql::Request::new(
            r#"mutation { askFaq(question: "why?") }"#,
        ))
        .await;
    assert_eq!(response.errors.len(), 1);
    let code = response.errors[0].extensions.as_ref().unwrap().get("code");
    assert_eq!(code, Some(&async_graphql::Value::from("INVALID_INPUT")));
}

#[tokio::test]
async fn provider_failure_is_masked_behind_the_fixed_fallback() {
    let schema = schema_with(seed::employees(), Arc::new(FailingProvider));
    let body = execute(
        &schema,
        r#"mutation { askFaq(question: "What is the parental leave policy?") }"#,
    )
    .await;
    assert_eq!(body["askFaq"], FALLBACK_ANSWER);
}
