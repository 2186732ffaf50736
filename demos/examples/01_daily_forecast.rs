use chrono::NaiveDate;
use prognos::Prognos;
use prognos_demos::common::{daily_sales, get_model, print_rows};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Pick a model (mock in CI when PROGNOS_DEMOS_USE_MOCK is set).
    let prognos = Prognos::builder().with_model(get_model()).build()?;

    // 2. Three months of daily observations keyed by plain dates.
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("bad start date")?;
    let series = daily_sales(start, 90);

    // 3. Two weeks ahead. Keys come back as plain dates too.
    println!(
        "Forecasting 14 days from {} observations using {}...",
        series.len(),
        prognos.model_name()
    );
    let forecast = prognos.forecast(&series, 14).await?;
    print_rows(&forecast);

    // 4. The same forecast with its 80% interval.
    for row in prognos.forecast_detailed(&series, 3).await? {
        println!(
            "  {}  {:>10.2}  [{:.2}, {:.2}]",
            row.key, row.yhat, row.yhat_lower, row.yhat_upper
        );
    }

    Ok(())
}
