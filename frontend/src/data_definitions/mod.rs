pub mod encoded_param;
pub mod persisted_selection;
