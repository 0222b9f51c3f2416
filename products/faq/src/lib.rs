//! FAQ assistant boundary.
//!
//! Validates questions and forwards them to an OpenAI-compatible chat
//! endpoint. Failures stay typed at this layer so callers and tests can tell
//! a real provider failure from a successful answer; the user-safe fallback
//! string is applied only at the API edge.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Shown to end users whenever the provider fails. Raw provider errors are
/// never surfaced past the API edge.
pub const FALLBACK_ANSWER: &str =
    "Sorry, I encountered an error while answering your question. Please try again later.";

pub const MIN_QUESTION_LEN: usize = 10;
pub const MAX_QUESTION_LEN: usize = 500;

const ROLE_INSTRUCTION: &str =
    "You are an HR expert. Answer the employee's question using your knowledge of company policy.";

#[derive(Debug, Error)]
pub enum FaqError {
    #[error(
        "question must be between {MIN_QUESTION_LEN} and {MAX_QUESTION_LEN} characters (got {len})"
    )]
    InvalidQuestion { len: usize },
    #[error("FAQ assistant is not configured")]
    NotConfigured,
    #[error("provider request timed out")]
    Timeout,
    #[error("provider request failed: {0}")]
    Provider(String),
    #[error("provider returned a malformed response")]
    MalformedResponse,
}

/// Trims and length-checks a question before it may be dispatched.
pub fn validate_question(question: &str) -> Result<&str, FaqError> {
    let trimmed = question.trim();
    let len = trimmed.chars().count();
    if !(MIN_QUESTION_LEN..=MAX_QUESTION_LEN).contains(&len) {
        return Err(FaqError::InvalidQuestion { len });
    }
    Ok(trimmed)
}

/// The external answer-generation capability. One best-effort attempt per
/// question: no retry, no caching, no rate limiting.
#[async_trait]
pub trait AnswerProvider: Send + Sync {
    async fn ask(&self, question: &str) -> Result<String, FaqError>;
}

#[derive(Clone, Debug)]
pub struct FaqConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

/// Production forwarder against an OpenAI-compatible chat completions API.
pub struct ChatCompletionsProvider {
    client: reqwest::Client,
    config: FaqConfig,
}

impl ChatCompletionsProvider {
    pub fn new(config: FaqConfig) -> Result<Self, FaqError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| FaqError::Provider(err.to_string()))?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl AnswerProvider for ChatCompletionsProvider {
    async fn ask(&self, question: &str) -> Result<String, FaqError> {
        let question = validate_question(question)?;
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: ROLE_INSTRUCTION.into(),
                },
                ChatMessage {
                    role: "user",
                    content: question.into(),
                },
            ],
        };
        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(classify_transport_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FaqError::Provider(format!("provider returned {status}")));
        }
        let body: ChatResponse = response
            .json()
            .await
            .map_err(|_| FaqError::MalformedResponse)?;
        let answer = body
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(FaqError::MalformedResponse)?;
        if answer.trim().is_empty() {
            return Err(FaqError::MalformedResponse);
        }
        Ok(answer)
    }
}

/// Stand-in used when no provider credentials are configured; every question
/// fails typed, and the edge maps that to the fallback string.
#[derive(Debug, Default)]
pub struct DisabledProvider;

#[async_trait]
impl AnswerProvider for DisabledProvider {
    async fn ask(&self, question: &str) -> Result<String, FaqError> {
        validate_question(question)?;
        warn!("FAQ question received but no provider is configured");
        Err(FaqError::NotConfigured)
    }
}

fn classify_transport_error(err: reqwest::Error) -> FaqError {
    if err.is_timeout() {
        FaqError::Timeout
    } else {
        FaqError::Provider(err.to_string())
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}
