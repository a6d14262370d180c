pub mod comparator;
pub mod filter_state;
