use std::time::Duration;

use tracing::info;
use urlquery_connector::{CallOptions, UrlQuery};
use urlquery_model::enums::{AccessLevel, Priority};
use urlquery_model::submission::QueueState;

// Initialise an INFO `Subscriber` for `Tracing` Json logs and install it as the global default.
fn init_logging() {
    tracing_subscriber::fmt()
        // Filter messages based on the INFO
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::builder()
                .with_default_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        // Disable colours on release builds
        .with_ansi(cfg!(debug_assertions))
        // Enable Json formatting
        .json()
        // Install this Tracing subscriber as global default
        .init()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let mut builder = UrlQuery::builder();
    if let Ok(apikey) = std::env::var("URLQUERY_APIKEY") {
        builder = builder.apikey(apikey);
    }
    let client = builder.build()?;

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://example.com".to_string());

    let queued = client
        .submit(
            url.as_str(),
            Priority::Low,
            AccessLevel::Public,
            CallOptions::default(),
        )
        .await?;
    info!(queue_id = %queued.queue_id, status = ?queued.status, %url, "submitted URL");

    loop {
        tokio::time::sleep(Duration::from_secs(10)).await;

        let status = client
            .queue_status(queued.queue_id.as_str(), CallOptions::default())
            .await?;
        info!(queue_id = %status.queue_id, status = ?status.status, "polled queue");

        if status.status == QueueState::Done {
            if let Some(report_id) = status.report_id {
                let report = client
                    .report(report_id.as_str(), 0, 0, CallOptions::default())
                    .await?;
                info!(
                    report_id = %report.report_id,
                    date = %report.date,
                    urlquery_alerts = report.urlquery_alert_count,
                    ids_alerts = report.ids_alert_count,
                    blacklist_alerts = report.blacklist_alert_count,
                    "report ready"
                );
            }
            break;
        }
    }

    Ok(())
}
