use crate::config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Registry};

const DEFAULT_LOG_FILTER: &str = "studydesk=debug,tower_http=debug,axum=debug";

pub fn init(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    init_tracing()?;
    init_metrics(config)?;
    Ok(())
}

fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_thread_ids(true)
        .with_target(true);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

fn init_metrics(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(([0, 0, 0, 0], config.metrics_port))
        .install()?;

    tracing::info!(
        "Metrics exporter (Prometheus) started on port {}",
        config.metrics_port
    );
    Ok(())
}
