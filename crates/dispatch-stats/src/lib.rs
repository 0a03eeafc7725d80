//! dispatch-stats - Chart-ready aggregations over cleaned delivery orders
//!
//! Each function is a pure mapping from a borrowed
//! [`dispatch_core::OrderTable`] (already cleaned, already narrowed by the
//! caller's view filters) to a small summary table the presentation layer
//! renders directly:
//!
//! - order volume per day, per week, and per courier per week
//! - traffic-density distribution and the city/traffic bubble table
//! - median delivery location per (city, traffic) group
//! - courier rankings by mean delivery time, rating summaries, fleet extremes
//!
//! Output rows derive `Serialize`/`Deserialize`, so the presentation layer
//! can ship them as JSON unchanged. Nothing here caches or mutates; a
//! filter change simply re-runs the functions.

pub mod couriers;
pub mod geo;
pub mod grouped;
pub mod orders;
pub mod traffic;

pub use couriers::*;
pub use geo::*;
pub use grouped::*;
pub use orders::*;
pub use traffic::*;
