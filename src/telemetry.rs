use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::domain::DiscoveryReport;

/// Install the global tracing subscriber.
///
/// Logs go to stderr so stdout stays free for command output.
pub fn init_telemetry() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,rssfinder=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Summarise a finished discovery run.
pub fn log_report(root_url: &str, report: &DiscoveryReport, elapsed: Duration) {
    for failure in &report.errors.value {
        tracing::warn!(url = %failure.url, error = %failure.message, "probe failed");
    }

    tracing::info!(
        url = root_url,
        feeds = report.rss.count,
        errors = report.errors.count,
        elapsed_ms = elapsed.as_millis() as u64,
        "discovery finished"
    );
}
