//! Cleaning pipeline for the raw orders table
//!
//! Turns the untyped CSV cells into typed [`OrderRecord`]s:
//!
//! 1. drop rows whose age holds the numeric missing-value sentinel,
//!    coerce the rest to integer
//! 2. coerce the courier rating to float
//! 3. parse the order date (`DD-MM-YYYY`)
//! 4. drop rows whose multiple-deliveries count holds the sentinel,
//!    coerce the rest to integer
//! 5. trim the seven designated string columns
//! 6. drop rows whose post-trim city, traffic density, or festival flag
//!    holds the categorical sentinel, coerce the rest
//! 7. retained rows are appended in input order, re-indexed contiguously
//! 8. split the time-taken cell on the unit marker, coerce to integer
//!
//! The step order matters: a row removed by an earlier sentinel filter is
//! never coerced by a later step, so e.g. a malformed date on an
//! age-missing row is not an error. Cleaning is all-or-nothing; any
//! coercion failure outside the sentinel filters aborts the whole pass.

use crate::error::{CleanError, CleanResult};
use crate::order::{CityType, OrderRecord, OrderTable, TrafficDensity};
use chrono::NaiveDate;
use dispatch_io::{schema, RawRow, RawTable};

/// Date format of the order-date column
const DATE_FORMAT: &str = "%d-%m-%Y";

/// Sentinel and marker configuration for the cleaning pass.
///
/// The dataset spells its missing-value sentinel two ways: with a
/// trailing space in the numeric columns (matched against the raw cell)
/// and without in the categorical columns (matched after trimming). Both
/// spellings are configuration, not hard-coded in the pipeline.
#[derive(Debug, Clone)]
pub struct CleanOptions {
    /// Marks a missing numeric field; compared to the untrimmed cell
    pub numeric_sentinel: String,
    /// Marks a missing categorical field; compared after trimming
    pub categorical_sentinel: String,
    /// Literal marker preceding the minutes value in the time-taken field
    pub time_marker: String,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            numeric_sentinel: "NaN ".to_string(),
            categorical_sentinel: "NaN".to_string(),
            time_marker: "(min) ".to_string(),
        }
    }
}

/// Column indices resolved once against the raw header
struct Columns {
    order_id: usize,
    delivery_person_id: usize,
    age: usize,
    rating: usize,
    order_date: usize,
    weather: usize,
    traffic: usize,
    vehicle_condition: usize,
    order_type: usize,
    vehicle_type: usize,
    multiple_deliveries: usize,
    festival: usize,
    city: usize,
    latitude: usize,
    longitude: usize,
    time_taken: usize,
}

impl Columns {
    fn resolve(raw: &RawTable) -> CleanResult<Self> {
        Ok(Self {
            order_id: raw.require_column(schema::ORDER_ID)?,
            delivery_person_id: raw.require_column(schema::DELIVERY_PERSON_ID)?,
            age: raw.require_column(schema::DELIVERY_PERSON_AGE)?,
            rating: raw.require_column(schema::DELIVERY_PERSON_RATINGS)?,
            order_date: raw.require_column(schema::ORDER_DATE)?,
            weather: raw.require_column(schema::WEATHER_CONDITIONS)?,
            traffic: raw.require_column(schema::ROAD_TRAFFIC_DENSITY)?,
            vehicle_condition: raw.require_column(schema::VEHICLE_CONDITION)?,
            order_type: raw.require_column(schema::TYPE_OF_ORDER)?,
            vehicle_type: raw.require_column(schema::TYPE_OF_VEHICLE)?,
            multiple_deliveries: raw.require_column(schema::MULTIPLE_DELIVERIES)?,
            festival: raw.require_column(schema::FESTIVAL)?,
            city: raw.require_column(schema::CITY)?,
            latitude: raw.require_column(schema::DELIVERY_LOCATION_LATITUDE)?,
            longitude: raw.require_column(schema::DELIVERY_LOCATION_LONGITUDE)?,
            time_taken: raw.require_column(schema::TIME_TAKEN)?,
        })
    }
}

/// Clean the raw orders table with the dataset's default sentinels.
pub fn clean(raw: &RawTable) -> CleanResult<OrderTable> {
    clean_with(raw, &CleanOptions::default())
}

/// Clean the raw orders table.
///
/// Returns a new, contiguously indexed [`OrderTable`]; the raw table is
/// untouched. Sentinel-marked rows are dropped silently, every other
/// coercion failure aborts the pass.
pub fn clean_with(raw: &RawTable, options: &CleanOptions) -> CleanResult<OrderTable> {
    let cols = Columns::resolve(raw)?;

    let mut records = Vec::with_capacity(raw.num_rows());
    let mut dropped = 0usize;

    for row in raw.rows() {
        match clean_row(&row, &cols, options)? {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }

    tracing::debug!(
        retained = records.len(),
        dropped,
        "cleaned raw orders table"
    );
    Ok(OrderTable::from_records(records))
}

/// Clean one raw row; `None` means a sentinel filter dropped it.
fn clean_row(
    row: &RawRow<'_>,
    cols: &Columns,
    options: &CleanOptions,
) -> CleanResult<Option<OrderRecord>> {
    let index = row.index();

    // 1. age: sentinel filter, then integer coercion
    let age_raw = row.get(cols.age);
    if age_raw == options.numeric_sentinel {
        return Ok(None);
    }
    let delivery_person_age = parse_number(index, schema::DELIVERY_PERSON_AGE, age_raw)?;

    // 2. rating: float coercion, no filter
    let delivery_person_rating =
        parse_number(index, schema::DELIVERY_PERSON_RATINGS, row.get(cols.rating))?;

    // 3. order date
    let date_raw = row.get(cols.order_date);
    let order_date = NaiveDate::parse_from_str(date_raw.trim(), DATE_FORMAT).map_err(|_| {
        CleanError::BadDate {
            row: index,
            value: date_raw.to_string(),
        }
    })?;

    // 4. multiple deliveries: sentinel filter, then integer coercion
    let multiple_raw = row.get(cols.multiple_deliveries);
    if multiple_raw == options.numeric_sentinel {
        return Ok(None);
    }
    let multiple_deliveries = parse_number(index, schema::MULTIPLE_DELIVERIES, multiple_raw)?;

    // 5. trim the designated string columns
    let order_id = row.get(cols.order_id).trim();
    let delivery_person_id = row.get(cols.delivery_person_id).trim();
    let traffic_raw = row.get(cols.traffic).trim();
    let order_type = row.get(cols.order_type).trim();
    let vehicle_type = row.get(cols.vehicle_type).trim();
    let festival_raw = row.get(cols.festival).trim();
    let city_raw = row.get(cols.city).trim();

    // 6. categorical sentinel filters, checked post-trim, then coercion
    let sentinel = options.categorical_sentinel.as_str();
    if city_raw == sentinel || traffic_raw == sentinel || festival_raw == sentinel {
        return Ok(None);
    }
    let city = CityType::parse(city_raw).ok_or_else(|| CleanError::BadCategory {
        row: index,
        column: schema::CITY,
        value: city_raw.to_string(),
    })?;
    let road_traffic_density =
        TrafficDensity::parse(traffic_raw).ok_or_else(|| CleanError::BadCategory {
            row: index,
            column: schema::ROAD_TRAFFIC_DENSITY,
            value: traffic_raw.to_string(),
        })?;
    let festival = match festival_raw {
        "Yes" => true,
        "No" => false,
        _ => {
            return Err(CleanError::BadCategory {
                row: index,
                column: schema::FESTIVAL,
                value: festival_raw.to_string(),
            })
        }
    };

    let vehicle_condition =
        parse_number(index, schema::VEHICLE_CONDITION, row.get(cols.vehicle_condition))?;
    let delivery_location_latitude =
        parse_number(index, schema::DELIVERY_LOCATION_LATITUDE, row.get(cols.latitude))?;
    let delivery_location_longitude =
        parse_number(index, schema::DELIVERY_LOCATION_LONGITUDE, row.get(cols.longitude))?;
    let weather_conditions = row.get(cols.weather).trim().to_string();

    // 8. time taken: split on the unit marker, coerce the remainder
    let time_raw = row.get(cols.time_taken);
    let minutes = time_raw
        .split_once(&options.time_marker)
        .map(|(_, rest)| rest)
        .ok_or_else(|| CleanError::MissingTimeMarker {
            row: index,
            value: time_raw.to_string(),
        })?;
    let time_taken_minutes = parse_number(index, schema::TIME_TAKEN, minutes)?;

    Ok(Some(OrderRecord {
        order_id: order_id.to_string(),
        delivery_person_id: delivery_person_id.to_string(),
        delivery_person_age,
        delivery_person_rating,
        order_date,
        weather_conditions,
        road_traffic_density,
        vehicle_condition,
        order_type: order_type.to_string(),
        vehicle_type: vehicle_type.to_string(),
        multiple_deliveries,
        festival,
        city,
        delivery_location_latitude,
        delivery_location_longitude,
        time_taken_minutes,
    }))
}

/// Coerce a numeric cell, trimming first; failure is fatal.
fn parse_number<T: std::str::FromStr>(
    row: usize,
    column: &'static str,
    value: &str,
) -> CleanResult<T> {
    value.trim().parse().map_err(|_| CleanError::BadNumber {
        row,
        column,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dispatch_io::read_orders_from;

    const HEADER: &str = "ID,Delivery_person_ID,Delivery_person_Age,Delivery_person_Ratings,\
Order_Date,Weatherconditions,Road_traffic_density,Vehicle_condition,Type_of_order,\
Type_of_vehicle,multiple_deliveries,Festival,City,Delivery_location_latitude,\
Delivery_location_longitude,Time_taken(min)";

    fn row(age: &str, rating: &str, date: &str, multiple: &str, city: &str, time: &str) -> String {
        format!(
            "0x1 , COIMBRES01DEL01,{age},{rating},{date},conditions Sunny,Low ,2,Snack ,\
motorcycle ,{multiple},No ,{city},12.91,77.68,{time}"
        )
    }

    fn table_of(rows: &[String]) -> dispatch_io::RawTable {
        let data = format!("{HEADER}\n{}\n", rows.join("\n"));
        read_orders_from(data.as_bytes()).unwrap()
    }

    #[test]
    fn clean_happy_path() {
        let raw = table_of(&[row("25", "4.5", "13-03-2022", "1", "Urban ", "(min) 24")]);
        let cleaned = clean(&raw).unwrap();

        assert_eq!(cleaned.len(), 1);
        let record = cleaned.get(0).unwrap();
        assert_eq!(record.order_id, "0x1");
        assert_eq!(record.delivery_person_id, "COIMBRES01DEL01");
        assert_eq!(record.delivery_person_age, 25);
        assert!((record.delivery_person_rating - 4.5).abs() < f64::EPSILON);
        assert_eq!(
            record.order_date,
            NaiveDate::from_ymd_opt(2022, 3, 13).unwrap()
        );
        assert_eq!(record.road_traffic_density, TrafficDensity::Low);
        assert_eq!(record.city, CityType::Urban);
        assert!(!record.festival);
        assert_eq!(record.time_taken_minutes, 24);
    }

    #[test]
    fn age_sentinel_drops_row() {
        // the worked example from the dataset: five rows, one missing age
        let rows: Vec<String> = ["25", "NaN ", "30", "28", "22"]
            .iter()
            .map(|age| row(age, "4.5", "13-03-2022", "1", "Urban", "(min) 24"))
            .collect();
        let cleaned = clean(&table_of(&rows)).unwrap();

        let ages: Vec<u32> = cleaned.iter().map(|r| r.delivery_person_age).collect();
        assert_eq!(ages, [25, 30, 28, 22]);
    }

    #[test]
    fn sentinel_filter_precedes_later_coercions() {
        // a malformed date on an age-missing row is not an error
        let raw = table_of(&[row("NaN ", "4.5", "not-a-date", "1", "Urban", "(min) 24")]);
        assert!(clean(&raw).unwrap().is_empty());
    }

    #[test]
    fn bad_date_is_fatal() {
        let raw = table_of(&[row("25", "4.5", "2022-03-13", "1", "Urban", "(min) 24")]);
        assert!(matches!(clean(&raw), Err(CleanError::BadDate { row: 0, .. })));
    }

    #[test]
    fn multiple_deliveries_sentinel_drops_row() {
        let rows = [
            row("25", "4.5", "13-03-2022", "NaN ", "Urban", "(min) 24"),
            row("30", "4.0", "13-03-2022", "3", "Urban", "(min) 33"),
        ];
        let cleaned = clean(&table_of(&rows)).unwrap();
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned.get(0).unwrap().multiple_deliveries, 3);
    }

    #[test]
    fn categorical_sentinel_matches_post_trim() {
        // "NaN " trims to the categorical sentinel and drops the row
        let rows = [
            row("25", "4.5", "13-03-2022", "1", "NaN ", "(min) 24"),
            row("30", "4.0", "13-03-2022", "1", "Metropolitian", "(min) 33"),
        ];
        let cleaned = clean(&table_of(&rows)).unwrap();
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned.get(0).unwrap().city, CityType::Metropolitan);
    }

    #[test]
    fn string_columns_are_trimmed() {
        let raw = table_of(&[row("25", "4.5", "13-03-2022", "1", "Urban ", "(min) 24")]);
        let cleaned = clean(&raw).unwrap();
        let record = cleaned.get(0).unwrap();

        for value in [
            record.order_id.as_str(),
            record.delivery_person_id.as_str(),
            record.order_type.as_str(),
            record.vehicle_type.as_str(),
        ] {
            assert_eq!(value, value.trim());
        }
    }

    #[test]
    fn time_taken_extraction() {
        let rows = [
            row("25", "4.5", "13-03-2022", "1", "Urban", "(min) 24"),
            row("30", "4.0", "13-03-2022", "1", "Urban", "(min) 33"),
        ];
        let cleaned = clean(&table_of(&rows)).unwrap();
        let minutes: Vec<u32> = cleaned.iter().map(|r| r.time_taken_minutes).collect();
        assert_eq!(minutes, [24, 33]);
    }

    #[test]
    fn missing_time_marker_is_fatal() {
        let raw = table_of(&[row("25", "4.5", "13-03-2022", "1", "Urban", "24")]);
        assert!(matches!(
            clean(&raw),
            Err(CleanError::MissingTimeMarker { row: 0, .. })
        ));
    }

    #[test]
    fn unknown_category_is_fatal() {
        let raw = table_of(&[row("25", "4.5", "13-03-2022", "1", "Rural", "(min) 24")]);
        assert!(matches!(
            clean(&raw),
            Err(CleanError::BadCategory { row: 0, .. })
        ));
    }

    #[test]
    fn missing_column_is_fatal() {
        let raw = read_orders_from("ID,City\nA1,Urban\n".as_bytes()).unwrap();
        assert!(matches!(clean(&raw), Err(CleanError::Io(_))));
    }

    #[test]
    fn custom_sentinels() {
        let options = CleanOptions {
            numeric_sentinel: "-".to_string(),
            categorical_sentinel: "?".to_string(),
            ..CleanOptions::default()
        };
        let rows = [
            row("-", "4.5", "13-03-2022", "1", "Urban", "(min) 24"),
            row("25", "4.5", "13-03-2022", "1", "?", "(min) 24"),
            row("30", "4.0", "13-03-2022", "1", "Urban", "(min) 33"),
        ];
        let cleaned = clean_with(&table_of(&rows), &options).unwrap();
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned.get(0).unwrap().delivery_person_age, 30);
    }
}
