use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use bkd_wrapped::application::services::{RecordExtractor, WorkloadService};
use bkd_wrapped::infrastructure::llm::create_llm_client;
use bkd_wrapped::infrastructure::observability::{TracingConfig, init_tracing};
use bkd_wrapped::infrastructure::text_processing::PdfAdapter;
use bkd_wrapped::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load configuration")?;

    init_tracing(
        TracingConfig::from_settings(&settings.logging, environment),
        settings.server.port,
    );

    let llm_client =
        create_llm_client(&settings.llm).context("Failed to create completion client")?;
    let record_extractor = Arc::new(
        RecordExtractor::new(llm_client, settings.llm.model.clone())
            .with_object_scan(settings.extraction.lenient_json_scan),
    );
    let workload_service = Arc::new(WorkloadService::new(
        Arc::new(PdfAdapter::new()),
        record_extractor,
    ));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server.host / server.port")?;

    let state = AppState {
        workload_service,
        settings,
    };
    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
