use actix_web::{web, App, HttpServer};
use anyhow::Context;
use clap::{Parser, Subcommand};
use company_llm_api::config::ApiConfig;
use company_llm_api::helpers::llm::create_llm_client;
use company_llm_api::helpers::research::{research_companies, write_records, DEFAULT_OUTPUT_FILE};
use company_llm_sdk::client::LlmClient;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "company-llm-api", about = "Answers questions about companies with an LLM")]
struct Cli {
    /// Path to the config file (defaults to <config dir>/company-llm/api.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Environment file holding the provider credential
    #[arg(long, global = true, default_value = ".env.local")]
    env_file: PathBuf,

    /// Subcommands; the HTTP server runs when none is given
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP API
    Serve,

    /// Collect a profile for each company and write them to a JSON table
    Research {
        /// Company names to look up
        #[arg(required = true)]
        companies: Vec<String>,

        /// Output file
        #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
        output: PathBuf,
    },
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = dotenv::from_path(&cli.env_file) {
        warn!(env_file = %cli.env_file.display(), error = %e, "Environment file not loaded");
    }

    let (config, config_path) = match cli.config {
        Some(path) => (ApiConfig::load_from(&path)?, path),
        None => ApiConfig::load()?,
    };
    info!(config_path = %config_path.display(), "Loaded configuration");

    let llm_client = create_llm_client(&config).context("Failed to create LLM client")?;
    info!(
        provider = llm_client.provider_name(),
        model = company_llm_api::helpers::analysis::MODEL,
        "LLM client ready"
    );

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(&config, llm_client).await,
        Command::Research { companies, output } => {
            let records = research_companies(llm_client.as_ref(), &companies).await;
            write_records(&records, &output)
        }
    }
}

async fn serve(config: &ApiConfig, llm_client: Arc<dyn LlmClient>) -> anyhow::Result<()> {
    let bind_addr = config.bind_addr();
    info!("Starting company-llm-api server at http://{}", bind_addr);

    let cors_config = config.cors.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(company_llm_api::cors(&cors_config))
            .app_data(web::Data::new(llm_client.clone()))
            .configure(company_llm_api::configure_routes)
    })
    .bind(&bind_addr)
    .with_context(|| format!("Failed to bind {}", bind_addr))?
    .run()
    .await?;

    Ok(())
}
