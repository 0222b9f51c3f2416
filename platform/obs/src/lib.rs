use anyhow::Result;
use once_cell::sync::OnceCell;
use opentelemetry::trace::TracerProvider;
use opentelemetry_otlp::{Protocol, SpanExporter, WithExportConfig};
use opentelemetry_sdk::{Resource, trace::SdkTracerProvider};
use tracing::Subscriber;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{
    EnvFilter, Registry, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt,
};

static INSTALLED: OnceCell<()> = OnceCell::new();

const DEFAULT_FILTER: &str = "info,tower_http=warn,hyper=warn";

/// Tracing setup for portal binaries.
#[derive(Clone, Debug)]
pub struct ObsConfig {
    pub service_name: &'static str,
    pub env_filter: Option<String>,
    pub otlp_endpoint: Option<String>,
}

impl ObsConfig {
    /// Fill filter and exporter endpoint from `RUST_LOG` / `OTLP_ENDPOINT`.
    pub fn from_env(service_name: &'static str) -> Self {
        Self {
            service_name,
            env_filter: std::env::var("RUST_LOG").ok(),
            otlp_endpoint: std::env::var("OTLP_ENDPOINT").ok(),
        }
    }
}

impl Default for ObsConfig {
    fn default() -> Self {
        ObsConfig::from_env("hr-portal")
    }
}

/// Install the fmt subscriber, plus an OTLP span exporter when an endpoint is
/// configured. Safe to call more than once; later calls are no-ops so tests
/// and the CLI can share it.
pub fn init_tracing(config: ObsConfig) -> Result<()> {
    if INSTALLED.set(()).is_err() {
        return Ok(());
    }

    let filter = config
        .env_filter
        .as_deref()
        .unwrap_or(DEFAULT_FILTER);
    let registry = Registry::default()
        .with(EnvFilter::try_new(filter)?)
        .with(tracing_subscriber::fmt::layer().with_target(false));

    match config.otlp_endpoint {
        Some(endpoint) => {
            let layer = otlp_layer(config.service_name, &endpoint)?;
            registry.with(layer).try_init()?;
        }
        None => registry.try_init()?,
    }
    Ok(())
}

fn otlp_layer<S>(
    service_name: &'static str,
    endpoint: &str,
) -> Result<OpenTelemetryLayer<S, opentelemetry_sdk::trace::Tracer>>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    let exporter = SpanExporter::builder()
        .with_http()
        .with_protocol(Protocol::HttpBinary)
        .with_endpoint(endpoint)
        .build()?;
    let provider = SdkTracerProvider::builder()
        .with_resource(Resource::builder().with_service_name(service_name).build())
        .with_batch_exporter(exporter)
        .build();
    Ok(tracing_opentelemetry::layer().with_tracer(provider.tracer(service_name)))
}
