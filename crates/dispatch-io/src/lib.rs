//! dispatch-io - Raw dataset I/O for the delivery-orders pipeline
//!
//! This crate reads the delivery-orders CSV into an untyped [`RawTable`]
//! of string cells. Type coercion and row filtering happen later, in the
//! cleaning pass of `dispatch-core`.
//!
//! # Design
//!
//! The dataset is read once per page load and fits in memory, so the
//! loader is a whole-file read with no lazy access. There is exactly one
//! supported input: the delivery-orders file with the header named in
//! [`schema`].

pub mod csv_reader;
pub mod error;
pub mod schema;
pub mod table;

pub use csv_reader::*;
pub use error::*;
pub use table::*;
