//! Catalog service backing the marketplace frontend.

pub mod api;
pub mod config;
pub mod db_utils;
pub mod server_extra;
