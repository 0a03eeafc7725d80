//! Traffic-density aggregations for the company view

use dispatch_core::{CityType, OrderTable, TrafficDensity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Order count and share for one traffic-density category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficShare {
    pub density: TrafficDensity,
    pub orders: u64,
    /// Fraction of all orders; sums to 1.0 over a non-empty input
    pub share: f64,
}

/// Order count for one (city, traffic-density) pair.
///
/// The count doubles as the bubble size in the dashboard's scatter chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityTrafficOrders {
    pub city: CityType,
    pub density: TrafficDensity,
    pub orders: u64,
}

/// Distribution of orders over traffic density, categories in
/// first-encounter order.
pub fn traffic_share(table: &OrderTable) -> Vec<TrafficShare> {
    let mut counts: Vec<(TrafficDensity, u64)> = Vec::new();
    for record in table.iter() {
        match counts
            .iter_mut()
            .find(|(density, _)| *density == record.road_traffic_density)
        {
            Some((_, orders)) => *orders += 1,
            None => counts.push((record.road_traffic_density, 1)),
        }
    }

    let total = table.len() as f64;
    counts
        .into_iter()
        .map(|(density, orders)| TrafficShare {
            density,
            orders,
            share: orders as f64 / total,
        })
        .collect()
}

/// Order counts grouped by city, then by traffic density within the city.
pub fn traffic_by_city(table: &OrderTable) -> Vec<CityTrafficOrders> {
    let mut counts: BTreeMap<(CityType, TrafficDensity), u64> = BTreeMap::new();
    for record in table.iter() {
        *counts
            .entry((record.city, record.road_traffic_density))
            .or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|((city, density), orders)| CityTrafficOrders {
            city,
            density,
            orders,
        })
        .collect()
}
