mod config;
mod html;
mod openai;
mod pipeline;
mod report;
mod search;
mod web;

pub const USER_AGENT: &str = concat!("company-report/", env!("CARGO_PKG_VERSION"));

use reqwest::Client;
use tokio::net::TcpListener;
use tracing::info;

use config::Config;
use openai::OpenAiClient;
use search::GoogleSearchClient;
use web::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("company_report=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    let http = Client::builder().user_agent(USER_AGENT).build()?;
    let state = AppState {
        search: GoogleSearchClient::new(http.clone(), &config),
        completion: OpenAiClient::new(http, &config),
    };

    let listener = TcpListener::bind(config.bind_addr.as_str())
        .await
        .inspect_err(|e| tracing::error!("failed to bind {}: {e}", config.bind_addr))?;
    info!(addr = %config.bind_addr, model = %config.openai_model, "starting company-report server");

    axum::serve(listener, web::create_router(state)).await?;
    info!("server stopped");
    Ok(())
}
