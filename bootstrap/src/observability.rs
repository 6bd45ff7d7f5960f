use crate::config::{LoggingConfig, MetricsConfig};
use metrics_exporter_statsd::{StatsdBuilder, StatsdError};
use std::io;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_LEVEL: &str = "info";
const METRICS_PREFIX: &str = "bootstrap";

#[derive(thiserror::Error, Debug)]
pub enum ObservabilityError {
    #[error("invalid log level: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    #[error("could not install tracing subscriber: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
    #[error("could not build statsd recorder: {0}")]
    Statsd(#[from] StatsdError),
    #[error("a metrics recorder is already installed")]
    RecorderAlreadySet,
}

/// Log lines stay off stdout, which carries `convert` output.
fn log_writer() -> io::Stderr {
    io::stderr()
}

/// Keeps the error reporting client alive so pending events are flushed on
/// drop.
pub struct Guard {
    _sentry: Option<sentry::ClientInitGuard>,
}

/// Installs the tracing subscriber and, when configured, the sentry layer
/// and the statsd metrics recorder. `RUST_LOG` overrides the configured
/// level.
pub fn init(
    logging: Option<&LoggingConfig>,
    metrics: Option<&MetricsConfig>,
) -> Result<Guard, ObservabilityError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let level = logging
                .and_then(|l| l.level.as_deref())
                .unwrap_or(DEFAULT_LOG_LEVEL);
            EnvFilter::try_new(level)?
        }
    };

    let sentry_guard = logging
        .and_then(|l| l.sentry_dsn.as_deref())
        .map(|dsn| {
            sentry::init((
                dsn,
                sentry::ClientOptions {
                    release: sentry::release_name!(),
                    ..Default::default()
                },
            ))
        });
    let sentry_layer = sentry_guard
        .as_ref()
        .map(|_| sentry::integrations::tracing::layer());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(log_writer))
        .with(sentry_layer)
        .try_init()?;

    if let Some(metrics_config) = metrics {
        let recorder = StatsdBuilder::from(
            metrics_config.statsd_host.as_str(),
            metrics_config.statsd_port,
        )
        .build(Some(METRICS_PREFIX))?;
        metrics::set_global_recorder(recorder)
            .map_err(|_| ObservabilityError::RecorderAlreadySet)?;
        tracing::info!(
            host = %metrics_config.statsd_host,
            port = metrics_config.statsd_port,
            "Sending metrics to statsd"
        );
    }

    Ok(Guard {
        _sentry: sentry_guard,
    })
}
