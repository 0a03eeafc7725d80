//! dispatch-report binary
//!
//! Stand-in for the dashboard presentation layer: load the dataset, clean
//! it, and print the company and courier views as text tables. The
//! dataset path comes from the first argument or `DISPATCH_DATASET`,
//! defaulting to the dashboard's `dataset/train.csv`.

use dispatch_core::{clean, ViewFilter};
use dispatch_io::read_orders;
use dispatch_stats::{
    fleet_extremes, geo_medians, order_share_by_week, orders_per_day, orders_per_week,
    rating_by_courier, rating_by_traffic, rating_by_weather, top_delivers, traffic_by_city,
    traffic_share,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("DISPATCH_DATASET").ok())
        .unwrap_or_else(|| "dataset/train.csv".to_string());

    let raw = read_orders(&path)?;
    let table = clean(&raw)?;
    let table = ViewFilter::default().apply(&table);
    tracing::info!(orders = table.len(), "cleaned orders ready");

    println!("# Company view");

    println!("\n## Orders per day");
    for row in orders_per_day(&table) {
        println!("{}  {:>6}", row.date, row.orders);
    }

    println!("\n## Orders per week");
    for row in orders_per_week(&table) {
        println!("week {:>2}  {:>6}", row.week, row.orders);
    }

    println!("\n## Orders per courier per week");
    for row in order_share_by_week(&table) {
        println!(
            "week {:>2}  {:>6} orders  {:>4} couriers  {:>6.2} per courier",
            row.week, row.orders, row.couriers, row.orders_per_courier
        );
    }

    println!("\n## Traffic-density share");
    for row in traffic_share(&table) {
        println!(
            "{:<8}{:>6} orders  {:>5.1}%",
            row.density.as_str(),
            row.orders,
            row.share * 100.0
        );
    }

    println!("\n## Orders by city and traffic");
    for row in traffic_by_city(&table) {
        println!(
            "{:<14}{:<8}{:>6}",
            row.city.as_str(),
            row.density.as_str(),
            row.orders
        );
    }

    println!("\n## Median delivery location");
    for row in geo_medians(&table) {
        println!(
            "{:<14}{:<8}{:>10.4} {:>10.4}",
            row.city.as_str(),
            row.density.as_str(),
            row.latitude,
            row.longitude
        );
    }

    println!("\n# Courier view");

    let extremes = fleet_extremes(&table);
    println!("\n## Fleet");
    if let (Some(oldest), Some(youngest)) = (extremes.oldest_age, extremes.youngest_age) {
        println!("courier age      {youngest}..{oldest}");
    }
    if let (Some(best), Some(worst)) = (
        extremes.best_vehicle_condition,
        extremes.worst_vehicle_condition,
    ) {
        println!("vehicle condition {worst}..{best}");
    }

    println!("\n## Fastest couriers");
    for row in top_delivers(&table, true) {
        println!(
            "{:<14}{:<20}{:>7.2} min",
            row.city.as_str(),
            row.courier,
            row.mean_time_minutes
        );
    }

    println!("\n## Slowest couriers");
    for row in top_delivers(&table, false) {
        println!(
            "{:<14}{:<20}{:>7.2} min",
            row.city.as_str(),
            row.courier,
            row.mean_time_minutes
        );
    }

    println!("\n## Mean rating per courier");
    for row in rating_by_courier(&table) {
        println!("{:<20}{:>5.2}", row.courier, row.mean_rating);
    }

    println!("\n## Rating by traffic density");
    for row in rating_by_traffic(&table) {
        println!(
            "{:<8}mean {:>5.2}  std {:>5.2}",
            row.density.as_str(),
            row.mean,
            row.std_dev
        );
    }

    println!("\n## Rating by weather");
    for row in rating_by_weather(&table) {
        println!("{:<24}mean {:>5.2}  std {:>5.2}", row.weather, row.mean, row.std_dev);
    }

    Ok(())
}
