use crate::cli::ServeArgs;
use crate::infra::{
    default_advisor_config, load_contacts, AppState, InMemoryEscalationPublisher,
    InMemoryRecommendationStore,
};
use crate::routes::with_advisor_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

use package_advisor::config::AppConfig;
use package_advisor::error::AppError;
use package_advisor::telemetry;
use package_advisor::workflows::engagement::recommendation::PackageAdvisoryService;

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

    let mut advisor_config = default_advisor_config();
    if let Some(path) = &config.contacts_csv {
        advisor_config.acv.contacts = load_contacts(path)?;
        info!(roster = %path.display(), "escalation roster loaded from csv");
    }

    let repository = Arc::new(InMemoryRecommendationStore::default());
    let escalations = Arc::new(InMemoryEscalationPublisher::default());
    let advisory_service = Arc::new(PackageAdvisoryService::new(
        repository,
        escalations,
        advisor_config,
    ));

    let app = with_advisor_routes(advisory_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "engagement package advisor ready");

    axum::serve(listener, app).await?;
    Ok(())
}
