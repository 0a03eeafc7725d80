//! Typed order records and the cleaned-table model

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Road traffic density at dispatch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TrafficDensity {
    Low,
    Medium,
    High,
    Jam,
}

impl TrafficDensity {
    /// All categories, lightest first.
    pub const ALL: [TrafficDensity; 4] = [Self::Low, Self::Medium, Self::High, Self::Jam];

    /// Parse a trimmed category value.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Low" => Some(Self::Low),
            "Medium" => Some(Self::Medium),
            "High" => Some(Self::High),
            "Jam" => Some(Self::Jam),
            _ => None,
        }
    }

    /// Display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Jam => "Jam",
        }
    }
}

/// City-area classification of the delivery destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CityType {
    Metropolitan,
    Urban,
    SemiUrban,
}

impl CityType {
    /// All city types, in the order the dashboard presents them.
    pub const ALL: [CityType; 3] = [Self::Metropolitan, Self::Urban, Self::SemiUrban];

    /// Parse a trimmed category value.
    ///
    /// The dataset spells the first category `Metropolitian`; both that
    /// and the canonical spelling are accepted.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Metropolitan" | "Metropolitian" => Some(Self::Metropolitan),
            "Urban" => Some(Self::Urban),
            "Semi-Urban" => Some(Self::SemiUrban),
            _ => None,
        }
    }

    /// Canonical display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Metropolitan => "Metropolitan",
            Self::Urban => "Urban",
            Self::SemiUrban => "Semi-Urban",
        }
    }
}

/// One cleaned delivery order.
///
/// Every field is already coerced and validated; none of the categorical
/// fields can hold the raw file's missing-value sentinels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: String,
    pub delivery_person_id: String,
    pub delivery_person_age: u32,
    pub delivery_person_rating: f64,
    pub order_date: NaiveDate,
    /// Trimmed weather text, literal `conditions ` marker included
    pub weather_conditions: String,
    pub road_traffic_density: TrafficDensity,
    pub vehicle_condition: i32,
    pub order_type: String,
    pub vehicle_type: String,
    pub multiple_deliveries: u32,
    pub festival: bool,
    pub city: CityType,
    pub delivery_location_latitude: f64,
    pub delivery_location_longitude: f64,
    pub time_taken_minutes: u32,
}

/// A cleaned, contiguously indexed table of order records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderTable {
    records: Vec<OrderRecord>,
}

impl OrderTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already-cleaned record list.
    pub fn from_records(records: Vec<OrderRecord>) -> Self {
        Self { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at a contiguous zero-based index.
    pub fn get(&self, index: usize) -> Option<&OrderRecord> {
        self.records.get(index)
    }

    /// Iterate over the records in table order.
    pub fn iter(&self) -> impl Iterator<Item = &OrderRecord> {
        self.records.iter()
    }

    /// All records as a slice.
    pub fn records(&self) -> &[OrderRecord] {
        &self.records
    }

    /// New table holding only the records matching `keep`.
    ///
    /// The receiver is untouched; filtering re-indexes contiguously.
    pub fn filtered(&self, keep: impl Fn(&OrderRecord) -> bool) -> OrderTable {
        Self {
            records: self.records.iter().filter(|r| keep(r)).cloned().collect(),
        }
    }
}

impl FromIterator<OrderRecord> for OrderTable {
    fn from_iter<I: IntoIterator<Item = OrderRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

/// Sunday-first week number of the year.
///
/// `strftime('%U')` semantics: days before the first Sunday of the year
/// fall in week 0, so the result ranges over 0..=53.
pub fn week_of_year(date: NaiveDate) -> u32 {
    (date.ordinal() + 6 - date.weekday().num_days_from_sunday()) / 7
}
