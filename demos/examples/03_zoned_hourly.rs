use chrono::{TimeDelta, TimeZone};
use chrono_tz::Europe::Berlin;
use prognos::{Prognos, Series, infer_cadence};
use prognos_demos::common::{get_model, print_rows};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let prognos = Prognos::builder().with_model(get_model()).build()?;

    // Hourly meter readings stamped in Berlin time.
    let start = Berlin
        .with_ymd_and_hms(2024, 6, 1, 0, 0, 0)
        .single()
        .ok_or("ambiguous start")?;
    let series: Series = (0..72)
        .map(|h| {
            let load = 40.0 + 15.0 * (f64::from(h) * std::f64::consts::TAU / 24.0).cos();
            (start + TimeDelta::hours(i64::from(h)), load)
        })
        .collect();

    let civil: Vec<_> = series.keys().map(prognos::TemporalKey::civil).collect();
    println!("inferred cadence: {}", infer_cadence(&civil)?);

    // Output keys stay in Europe/Berlin.
    let next = prognos.forecast(&series, 6).await?;
    print_rows(&next);

    Ok(())
}
