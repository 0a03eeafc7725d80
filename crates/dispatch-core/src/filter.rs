//! View filters applied between cleaning and aggregation
//!
//! The dashboard sidebar exposes a date cutoff and set-membership
//! choices for traffic density and weather. Those arrive here as a
//! [`ViewFilter`]; unset fields match everything, set fields combine
//! with AND.

use crate::order::{OrderRecord, OrderTable, TrafficDensity};
use chrono::NaiveDate;

/// Filters supplied by the presentation layer.
#[derive(Debug, Clone, Default)]
pub struct ViewFilter {
    /// Keep orders strictly before this date (upper-exclusive)
    pub before: Option<NaiveDate>,
    /// Keep orders whose traffic density is in this set
    pub traffic: Option<Vec<TrafficDensity>>,
    /// Keep orders whose weather text is in this set
    pub weather: Option<Vec<String>>,
}

impl ViewFilter {
    /// Whether this filter matches every record.
    pub fn is_empty(&self) -> bool {
        self.before.is_none() && self.traffic.is_none() && self.weather.is_none()
    }

    /// Whether one record passes the filter.
    pub fn matches(&self, record: &OrderRecord) -> bool {
        if let Some(cutoff) = self.before {
            if record.order_date >= cutoff {
                return false;
            }
        }
        if let Some(traffic) = &self.traffic {
            if !traffic.contains(&record.road_traffic_density) {
                return false;
            }
        }
        if let Some(weather) = &self.weather {
            if !weather.iter().any(|w| w == &record.weather_conditions) {
                return false;
            }
        }
        true
    }

    /// Narrow a table to the matching records.
    ///
    /// Returns a new table; re-renders after a widget change re-run the
    /// aggregations from the already-cleaned input.
    pub fn apply(&self, table: &OrderTable) -> OrderTable {
        if self.is_empty() {
            return table.clone();
        }
        table.filtered(|record| self.matches(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{CityType, OrderRecord};

    fn record(date: (i32, u32, u32), traffic: TrafficDensity, weather: &str) -> OrderRecord {
        OrderRecord {
            order_id: "A1".to_string(),
            delivery_person_id: "RES01".to_string(),
            delivery_person_age: 25,
            delivery_person_rating: 4.5,
            order_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            weather_conditions: weather.to_string(),
            road_traffic_density: traffic,
            vehicle_condition: 2,
            order_type: "Snack".to_string(),
            vehicle_type: "motorcycle".to_string(),
            multiple_deliveries: 1,
            festival: false,
            city: CityType::Urban,
            delivery_location_latitude: 12.9,
            delivery_location_longitude: 77.6,
            time_taken_minutes: 24,
        }
    }

    fn sample() -> OrderTable {
        OrderTable::from_records(vec![
            record((2022, 3, 1), TrafficDensity::Low, "conditions Sunny"),
            record((2022, 3, 15), TrafficDensity::Jam, "conditions Fog"),
            record((2022, 4, 2), TrafficDensity::High, "conditions Sunny"),
        ])
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let filter = ViewFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&sample()).len(), 3);
    }

    #[test]
    fn date_cutoff_is_exclusive() {
        let filter = ViewFilter {
            before: NaiveDate::from_ymd_opt(2022, 3, 15),
            ..ViewFilter::default()
        };
        let narrowed = filter.apply(&sample());
        assert_eq!(narrowed.len(), 1);
        assert_eq!(
            narrowed.get(0).unwrap().order_date,
            NaiveDate::from_ymd_opt(2022, 3, 1).unwrap()
        );
    }

    #[test]
    fn traffic_membership() {
        let filter = ViewFilter {
            traffic: Some(vec![TrafficDensity::Low, TrafficDensity::High]),
            ..ViewFilter::default()
        };
        let narrowed = filter.apply(&sample());
        assert_eq!(narrowed.len(), 2);
        assert!(narrowed
            .iter()
            .all(|r| r.road_traffic_density != TrafficDensity::Jam));
    }

    #[test]
    fn filters_combine_with_and() {
        let filter = ViewFilter {
            before: NaiveDate::from_ymd_opt(2022, 4, 1),
            traffic: Some(vec![TrafficDensity::Jam]),
            weather: Some(vec!["conditions Fog".to_string()]),
        };
        let narrowed = filter.apply(&sample());
        assert_eq!(narrowed.len(), 1);
        assert_eq!(narrowed.get(0).unwrap().weather_conditions, "conditions Fog");
    }
}
