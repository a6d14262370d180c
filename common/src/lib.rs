//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod catalog_record;
pub mod query_string;
pub mod filter_spec;
pub mod filter_eval;
pub mod facets;
pub mod catalog_sort;
pub mod selection;
pub mod reference_data;
