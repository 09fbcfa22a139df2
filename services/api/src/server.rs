use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryAccountRepository};
use crate::routes::with_service_routes;
use agrivision::accounts::AccountService;
use agrivision::community::{CommunityBoard, CommunityState, FarmDiary};
use agrivision::config::AppConfig;
use agrivision::error::AppError;
use agrivision::finance::EligibilityEngine;
use agrivision::telemetry;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
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

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let engine = Arc::new(EligibilityEngine::new(config.eligibility.clone()));
    let accounts = Arc::new(AccountService::new(Arc::new(
        InMemoryAccountRepository::default(),
    )));
    let community = CommunityState {
        accounts,
        board: Arc::new(CommunityBoard::new()),
        diary: Arc::new(FarmDiary::default()),
    };

    let app = with_service_routes(engine, community)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "agrivision api ready");

    axum::serve(listener, app).await?;
    Ok(())
}
