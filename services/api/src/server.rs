use crate::cli::ServeArgs;
use crate::infra::{sample_directory, AppState, InMemoryLeadDirectory};
use crate::routes::app_router;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use leadboard::config::AppConfig;
use leadboard::error::AppError;
use leadboard::leads::import::LeadCsvImporter;
use leadboard::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry, config.environment)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let directory = match config.data.leads_csv.as_deref() {
        Some(path) => {
            let leads = LeadCsvImporter::from_path(path)?;
            info!(count = leads.len(), path = %path.display(), "lead directory hydrated from CSV export");
            Arc::new(InMemoryLeadDirectory::from_leads(leads))
        }
        None => {
            info!("no lead export configured; serving the sample snapshot");
            Arc::new(sample_directory())
        }
    };

    let app = app_router(directory)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "lead analytics service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
