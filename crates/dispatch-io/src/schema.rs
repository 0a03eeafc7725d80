//! Column names of the delivery-orders dataset
//!
//! The input file carries these exact header names. Extra columns are
//! tolerated and ignored; a missing required column surfaces as
//! `ColumnNotFound` when the cleaning pass resolves its indices.

/// Order identifier, unique after trimming
pub const ORDER_ID: &str = "ID";

/// Courier identifier, one courier appears on many orders
pub const DELIVERY_PERSON_ID: &str = "Delivery_person_ID";

/// Courier age, textual, may hold the missing-value sentinel
pub const DELIVERY_PERSON_AGE: &str = "Delivery_person_Age";

/// Courier rating on a 0-5 scale
pub const DELIVERY_PERSON_RATINGS: &str = "Delivery_person_Ratings";

/// Order date in `DD-MM-YYYY` form
pub const ORDER_DATE: &str = "Order_Date";

/// Weather free text, prefixed with the literal `conditions ` marker
pub const WEATHER_CONDITIONS: &str = "Weatherconditions";

/// Road traffic density category
pub const ROAD_TRAFFIC_DENSITY: &str = "Road_traffic_density";

/// Vehicle condition ordinal score
pub const VEHICLE_CONDITION: &str = "Vehicle_condition";

/// Kind of goods ordered
pub const TYPE_OF_ORDER: &str = "Type_of_order";

/// Kind of vehicle used
pub const TYPE_OF_VEHICLE: &str = "Type_of_vehicle";

/// Number of simultaneous deliveries, may hold the missing-value sentinel
pub const MULTIPLE_DELIVERIES: &str = "multiple_deliveries";

/// Festival flag, Yes/No
pub const FESTIVAL: &str = "Festival";

/// City-area classification
pub const CITY: &str = "City";

/// Delivery destination latitude
pub const DELIVERY_LOCATION_LATITUDE: &str = "Delivery_location_latitude";

/// Delivery destination longitude
pub const DELIVERY_LOCATION_LONGITUDE: &str = "Delivery_location_longitude";

/// Delivery duration with an embedded `(min) ` unit marker
pub const TIME_TAKEN: &str = "Time_taken(min)";

/// Every column the cleaning pass requires
pub const REQUIRED: &[&str] = &[
    ORDER_ID,
    DELIVERY_PERSON_ID,
    DELIVERY_PERSON_AGE,
    DELIVERY_PERSON_RATINGS,
    ORDER_DATE,
    WEATHER_CONDITIONS,
    ROAD_TRAFFIC_DENSITY,
    VEHICLE_CONDITION,
    TYPE_OF_ORDER,
    TYPE_OF_VEHICLE,
    MULTIPLE_DELIVERIES,
    FESTIVAL,
    CITY,
    DELIVERY_LOCATION_LATITUDE,
    DELIVERY_LOCATION_LONGITUDE,
    TIME_TAKEN,
];
