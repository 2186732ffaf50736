use chrono::NaiveDate;
use prognos::Prognos;
use prognos_demos::common::{daily_sales, get_model};
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,prognos=trace,prognos_linear=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    // Fitting diagnostics are suppressed unless quiet is turned off.
    let prognos = Prognos::builder()
        .with_model(get_model())
        .quiet(false)
        .build()?;

    let start = NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("bad start date")?;
    let series = daily_sales(start, 90);
    tracing::info!(points = series.len(), "demo series ready");

    let _ = prognos.forecast(&series, 14).await?;
    let _ = prognos.anomalies(&series).await?;

    Ok(())
}
