//! Courier-level aggregations for the delivery-person view

use crate::grouped::{group_by_insertion, GroupedStats};
use dispatch_core::{CityType, OrderTable, TrafficDensity};
use serde::{Deserialize, Serialize};

/// Rows kept per city type in the speed ranking
const TOP_N: usize = 10;

/// Mean delivery time for one courier within one city type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourierSpeed {
    pub city: CityType,
    pub courier: String,
    pub mean_time_minutes: f64,
}

/// Mean rating for one courier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourierRating {
    pub courier: String,
    pub mean_rating: f64,
}

/// Rating mean and spread for one traffic-density category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficRating {
    pub density: TrafficDensity,
    pub mean: f64,
    pub std_dev: f64,
}

/// Rating mean and spread for one weather condition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherRating {
    pub weather: String,
    pub mean: f64,
    pub std_dev: f64,
}

/// Extremes over courier age and vehicle condition.
///
/// All fields are `None` on an empty table.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FleetExtremes {
    pub oldest_age: Option<u32>,
    pub youngest_age: Option<u32>,
    pub best_vehicle_condition: Option<i32>,
    pub worst_vehicle_condition: Option<i32>,
}

/// Rank couriers by mean delivery time within each city type.
///
/// Fastest first when `top_asc` is true, slowest first otherwise. Keeps
/// the leading ten rows per city type and concatenates the city blocks in
/// Metropolitan, Urban, Semi-Urban order. The sort is stable, so couriers
/// with equal means keep their first-encounter order.
pub fn top_delivers(table: &OrderTable, top_asc: bool) -> Vec<CourierSpeed> {
    let groups = group_by_insertion(
        table
            .iter()
            .map(|r| ((r.city, r.delivery_person_id.as_str()), r.time_taken_minutes as f64)),
    );

    let mut ranked: Vec<CourierSpeed> = groups
        .into_iter()
        .map(|((city, courier), times)| CourierSpeed {
            city,
            courier: courier.to_string(),
            mean_time_minutes: GroupedStats::from_values(&times).mean,
        })
        .collect();

    ranked.sort_by(|a, b| {
        let by_time = a.mean_time_minutes.partial_cmp(&b.mean_time_minutes).unwrap();
        if top_asc {
            by_time
        } else {
            by_time.reverse()
        }
    });

    let mut result = Vec::new();
    for city in CityType::ALL {
        result.extend(ranked.iter().filter(|c| c.city == city).take(TOP_N).cloned());
    }
    result
}

/// Mean rating per courier, couriers in first-encounter order.
pub fn rating_by_courier(table: &OrderTable) -> Vec<CourierRating> {
    group_by_insertion(
        table
            .iter()
            .map(|r| (r.delivery_person_id.as_str(), r.delivery_person_rating)),
    )
    .into_iter()
    .map(|(courier, ratings)| CourierRating {
        courier: courier.to_string(),
        mean_rating: GroupedStats::from_values(&ratings).mean,
    })
    .collect()
}

/// Rating mean/std per traffic density, categories in first-encounter order.
pub fn rating_by_traffic(table: &OrderTable) -> Vec<TrafficRating> {
    group_by_insertion(
        table
            .iter()
            .map(|r| (r.road_traffic_density, r.delivery_person_rating)),
    )
    .into_iter()
    .map(|(density, ratings)| {
        let stats = GroupedStats::from_values(&ratings);
        TrafficRating {
            density,
            mean: stats.mean,
            std_dev: stats.std_dev,
        }
    })
    .collect()
}

/// Rating mean/std per weather condition, conditions in first-encounter order.
pub fn rating_by_weather(table: &OrderTable) -> Vec<WeatherRating> {
    group_by_insertion(
        table
            .iter()
            .map(|r| (r.weather_conditions.as_str(), r.delivery_person_rating)),
    )
    .into_iter()
    .map(|(weather, ratings)| {
        let stats = GroupedStats::from_values(&ratings);
        WeatherRating {
            weather: weather.to_string(),
            mean: stats.mean,
            std_dev: stats.std_dev,
        }
    })
    .collect()
}

/// Oldest/youngest courier age and best/worst vehicle condition.
pub fn fleet_extremes(table: &OrderTable) -> FleetExtremes {
    FleetExtremes {
        oldest_age: table.iter().map(|r| r.delivery_person_age).max(),
        youngest_age: table.iter().map(|r| r.delivery_person_age).min(),
        best_vehicle_condition: table.iter().map(|r| r.vehicle_condition).max(),
        worst_vehicle_condition: table.iter().map(|r| r.vehicle_condition).min(),
    }
}
