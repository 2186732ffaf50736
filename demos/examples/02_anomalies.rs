use chrono::{Days, NaiveDate};
use prognos::Prognos;
use prognos_demos::common::{daily_sales, get_model};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let prognos = Prognos::builder().with_model(get_model()).build()?;

    // A regular series with two injected spikes.
    let start = NaiveDate::from_ymd_opt(2024, 3, 1).ok_or("bad start date")?;
    let mut series = daily_sales(start, 60);
    series.insert(start + Days::new(17), 900.0);
    series.insert(start + Days::new(42), -150.0);

    let flagged = prognos.anomalies(&series).await?;
    println!("{} anomalies out of {} observations:", flagged.len(), series.len());
    for (key, value) in &flagged {
        println!("  {key}  {value:.2}");
    }

    // A narrower interval flags more points.
    let loose = Prognos::builder()
        .with_model(get_model())
        .anomaly_interval_width(0.8)
        .build()?;
    println!("with an 80% interval: {}", loose.anomalies(&series).await?.len());

    Ok(())
}
