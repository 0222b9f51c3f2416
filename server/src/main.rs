mod config;
mod http;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use api::{PortalData, build_schema};
use clap::{Args, Parser, Subcommand};
use platform_obs::{ObsConfig, init_tracing};
use products_faq::{AnswerProvider, ChatCompletionsProvider, DisabledProvider};
use products_hr::seed;
use products_hr::store::EmployeeStore;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::{
    config::AppConfig,
    http::{AppState, ServeConfig},
};

#[derive(Parser, Debug)]
#[command(name = "hr-portal", version, about = "Internal HR information portal")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP + GraphQL server.
    Serve(ServeCommand),
    /// Print a summary of the fixture dataset.
    Seed,
    /// Print the GraphQL schema snapshot.
    #[command(name = "schema:print")]
    SchemaPrint {
        #[arg(long, value_name = "FILE", help = "Destination file path")]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct ServeCommand {
    #[arg(long, default_value = "0.0.0.0")]
    host: std::net::IpAddr,
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

impl From<&ServeCommand> for ServeConfig {
    fn from(value: &ServeCommand) -> Self {
        ServeConfig::new(value.host, value.port)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing(ObsConfig::default())?;
    let cli = Cli::parse();
    match cli.command {
        Command::Serve(cmd) => {
            let config = AppConfig::load()?;
            run_server(cmd, config).await
        }
        Command::Seed => print_seed_summary(),
        Command::SchemaPrint { output } => schema_print(output),
    }
}

async fn run_server(cmd: ServeCommand, config: AppConfig) -> Result<()> {
    let schema = build_schema(portal_data(&config));
    let state = AppState {
        schema,
        cors_allowed_origins: config.cors_allowed_origins,
    };
    http::serve(ServeConfig::from(&cmd), state).await
}

fn portal_data(config: &AppConfig) -> PortalData {
    let faq: Arc<dyn AnswerProvider> = match &config.faq {
        Some(faq_config) => match ChatCompletionsProvider::new(faq_config.clone()) {
            Ok(provider) => Arc::new(provider),
            Err(err) => {
                warn!(error = %err, "FAQ provider setup failed; assistant disabled");
                Arc::new(DisabledProvider)
            }
        },
        None => {
            warn!("FAQ_API_URL / FAQ_API_KEY not set; assistant disabled");
            Arc::new(DisabledProvider)
        }
    };
    PortalData {
        store: Arc::new(RwLock::new(EmployeeStore::with_employees(seed::employees()))),
        announcements: Arc::new(seed::announcements()),
        resources: Arc::new(seed::resources()),
        faq,
    }
}

fn print_seed_summary() -> Result<()> {
    let employees = seed::employees();
    let announcements = seed::announcements();
    let resources = seed::resources();
    info!(
        employees = employees.len(),
        announcements = announcements.len(),
        resources = resources.len(),
        "fixture dataset"
    );
    for employee in &employees {
        println!(
            "{}\t{}\t{} ({})",
            employee.id, employee.name, employee.job_title, employee.department
        );
    }
    Ok(())
}

fn schema_print(path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load()?;
    let schema = build_schema(portal_data(&config));
    let sdl = schema.sdl();
    match path {
        Some(path) => {
            std::fs::write(&path, sdl)?;
            info!(path = %path.display(), "schema snapshot written");
        }
        None => println!("{sdl}"),
    }
    Ok(())
}
