//! Dashboard entry point.

use std::process::ExitCode;

use dashboard::{AppError, Config};
use domain::TracingNotifier;
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> ExitCode {
    // 1. Load configuration
    let config = Config::from_env();

    // 2. Initialize tracing on stderr; stdout carries the JSON
    let log_level = config.as_ref().map_or("info", |c| c.log_level.as_str());
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match config.and_then(run) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "dashboard failed");
            ExitCode::FAILURE
        }
    }
}

fn run(config: Config) -> Result<(), AppError> {
    // 3. Install Prometheus metrics recorder
    let metrics_handle = PrometheusBuilder::new().install_recorder()?;

    // 4. Build the dashboard and render the active section
    let dashboard = dashboard::build_dashboard(&config, TracingNotifier);
    let json = dashboard::render_json(&dashboard)?;
    println!("{json}");

    // 5. Optional metrics snapshot
    if config.emit_metrics {
        eprintln!("{}", metrics_handle.render());
    }

    Ok(())
}
