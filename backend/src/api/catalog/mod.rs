//! Catalog API handlers and module exports.

mod list_programs;
pub use list_programs::list_programs;

mod get_programs_by_ids;
pub use get_programs_by_ids::{get_programs_by_ids, MAX_IDS_PER_REQUEST};
