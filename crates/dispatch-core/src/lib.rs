//! dispatch-core - Typed order model and cleaning pipeline
//!
//! The heart of the delivery-orders analytics: turn the untyped
//! [`dispatch_io::RawTable`] into a typed, validated [`OrderTable`] and
//! narrow it with the view filters the dashboard sidebar supplies.
//!
//! # Pipeline
//!
//! ```text
//! RawTable --clean--> OrderTable --ViewFilter--> OrderTable --> aggregations
//! ```
//!
//! Cleaning either fully succeeds or aborts with a [`CleanError`]; rows
//! marked missing by the dataset's sentinel strings are silently dropped,
//! every other coercion failure is fatal. Each stage returns a new table,
//! no stage mutates its input.

pub mod clean;
pub mod error;
pub mod filter;
pub mod order;

pub use clean::*;
pub use error::*;
pub use filter::*;
pub use order::*;
