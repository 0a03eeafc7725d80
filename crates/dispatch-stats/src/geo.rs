//! Geographic aggregations for the company view

use crate::grouped::median;
use dispatch_core::{CityType, OrderTable, TrafficDensity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Median delivery location for one (city, traffic-density) group.
///
/// The dashboard drops one map marker per row of this table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoMedian {
    pub city: CityType,
    pub density: TrafficDensity,
    pub latitude: f64,
    pub longitude: f64,
}

/// Median delivery latitude/longitude per (city, traffic-density) group.
pub fn geo_medians(table: &OrderTable) -> Vec<GeoMedian> {
    let mut groups: BTreeMap<(CityType, TrafficDensity), (Vec<f64>, Vec<f64>)> = BTreeMap::new();
    for record in table.iter() {
        let (lats, lons) = groups
            .entry((record.city, record.road_traffic_density))
            .or_default();
        lats.push(record.delivery_location_latitude);
        lons.push(record.delivery_location_longitude);
    }

    groups
        .into_iter()
        .map(|((city, density), (lats, lons))| GeoMedian {
            city,
            density,
            latitude: median(&lats),
            longitude: median(&lons),
        })
        .collect()
}
