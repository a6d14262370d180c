//! Frontend state layer: comparison list and listing filters.

pub mod api;
pub mod browser;
pub mod config;
pub mod data_definitions;
pub mod state;
