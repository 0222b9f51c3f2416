use std::time::Duration;

use anyhow::Result;
use products_faq::FaqConfig;

const DEFAULT_FAQ_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub cors_allowed_origins: Vec<String>,
    /// `None` when FAQ credentials are absent; the assistant then answers
    /// with the fallback string instead of failing startup.
    pub faq: Option<FaqConfig>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let cors_allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .filter_map(|s| {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            })
            .collect::<Vec<_>>();

        let faq = load_faq_config();

        Ok(Self {
            cors_allowed_origins,
            faq,
        })
    }
}

fn load_faq_config() -> Option<FaqConfig> {
    let api_url = std::env::var("FAQ_API_URL").ok()?;
    let api_key = std::env::var("FAQ_API_KEY").ok()?;
    let model = std::env::var("FAQ_MODEL").unwrap_or_else(|_| "gpt-4o-mini".into());
    let timeout_secs = std::env::var("FAQ_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(DEFAULT_FAQ_TIMEOUT_SECS);
    Some(FaqConfig {
        api_url,
        api_key,
        model,
        timeout: Duration::from_secs(timeout_secs),
    })
}
