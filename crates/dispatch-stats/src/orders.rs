//! Order-volume aggregations for the company view

use chrono::NaiveDate;
use dispatch_core::{week_of_year, OrderTable};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Order count for one calendar day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyOrders {
    pub date: NaiveDate,
    pub orders: u64,
}

/// Order count for one week of the year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyOrders {
    pub week: u32,
    pub orders: u64,
}

/// Orders per distinct courier for one week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyOrderShare {
    pub week: u32,
    pub orders: u64,
    pub couriers: u64,
    pub orders_per_courier: f64,
}

/// Count orders per day, chronologically.
pub fn orders_per_day(table: &OrderTable) -> Vec<DailyOrders> {
    let mut counts: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for record in table.iter() {
        *counts.entry(record.order_date).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(date, orders)| DailyOrders { date, orders })
        .collect()
}

/// Count orders per Sunday-first week, ascending week number.
pub fn orders_per_week(table: &OrderTable) -> Vec<WeeklyOrders> {
    let mut counts: BTreeMap<u32, u64> = BTreeMap::new();
    for record in table.iter() {
        *counts.entry(week_of_year(record.order_date)).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(week, orders)| WeeklyOrders { week, orders })
        .collect()
}

/// Orders per distinct courier per week, ascending week number.
///
/// Two weekly sub-aggregates joined on the week number: the order count
/// and the distinct courier count, divided. Every cleaned row carries a
/// courier id, so the divisor is never zero for a week that appears.
pub fn order_share_by_week(table: &OrderTable) -> Vec<WeeklyOrderShare> {
    let mut orders: BTreeMap<u32, u64> = BTreeMap::new();
    let mut couriers: BTreeMap<u32, BTreeSet<&str>> = BTreeMap::new();

    for record in table.iter() {
        let week = week_of_year(record.order_date);
        *orders.entry(week).or_insert(0) += 1;
        couriers
            .entry(week)
            .or_default()
            .insert(record.delivery_person_id.as_str());
    }

    orders
        .into_iter()
        .filter_map(|(week, order_count)| {
            // inner join on week; both maps are fed from the same rows
            couriers.get(&week).map(|unique| WeeklyOrderShare {
                week,
                orders: order_count,
                couriers: unique.len() as u64,
                orders_per_courier: order_count as f64 / unique.len() as f64,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dispatch_core::{CityType, OrderRecord, TrafficDensity};

    fn record(date: (i32, u32, u32), courier: &str) -> OrderRecord {
        OrderRecord {
            order_id: "A1".to_string(),
            delivery_person_id: courier.to_string(),
            delivery_person_age: 25,
            delivery_person_rating: 4.5,
            order_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            weather_conditions: "conditions Sunny".to_string(),
            road_traffic_density: TrafficDensity::Low,
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

    #[test]
    fn per_day_counts_are_chronological() {
        let table = OrderTable::from_records(vec![
            record((2022, 3, 15), "A"),
            record((2022, 3, 13), "B"),
            record((2022, 3, 15), "C"),
        ]);
        let daily = orders_per_day(&table);

        assert_eq!(daily.len(), 2);
        assert_eq!(daily[0].date, NaiveDate::from_ymd_opt(2022, 3, 13).unwrap());
        assert_eq!(daily[0].orders, 1);
        assert_eq!(daily[1].orders, 2);
    }

    #[test]
    fn per_week_counts_ascend() {
        // 2022-03-13 opens week 11; 2022-03-20 opens week 12
        let table = OrderTable::from_records(vec![
            record((2022, 3, 20), "A"),
            record((2022, 3, 13), "B"),
            record((2022, 3, 19), "C"),
        ]);
        let weekly = orders_per_week(&table);

        assert_eq!(weekly.len(), 2);
        assert_eq!((weekly[0].week, weekly[0].orders), (11, 2));
        assert_eq!((weekly[1].week, weekly[1].orders), (12, 1));
    }

    #[test]
    fn share_divides_by_distinct_couriers() {
        let table = OrderTable::from_records(vec![
            record((2022, 3, 13), "A"),
            record((2022, 3, 14), "A"),
            record((2022, 3, 15), "B"),
            record((2022, 3, 20), "C"),
        ]);
        let shares = order_share_by_week(&table);

        assert_eq!(shares.len(), 2);
        let week11 = &shares[0];
        assert_eq!(week11.week, 11);
        assert_eq!(week11.orders, 3);
        assert_eq!(week11.couriers, 2);
        assert!((week11.orders_per_courier - 1.5).abs() < 1e-10);

        let week12 = &shares[1];
        assert_eq!((week12.orders, week12.couriers), (1, 1));
        assert!((week12.orders_per_courier - 1.0).abs() < 1e-10);
    }

    #[test]
    fn empty_table_yields_empty_summaries() {
        let table = OrderTable::new();
        assert!(orders_per_day(&table).is_empty());
        assert!(orders_per_week(&table).is_empty());
        assert!(order_share_by_week(&table).is_empty());
    }
}
