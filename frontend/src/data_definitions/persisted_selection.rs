//! Value stored under the comparator's local-store key.

use common::catalog_record::ProgramId;
use serde::{Deserialize, Serialize};

use crate::data_definitions::encoded_param::{EncodedParam, EncodedParamError};

pub const PERSISTED_SELECTION_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedSelection {
    pub version: u32,
    pub items: Vec<ProgramId>,
}

impl PersistedSelection {
    pub fn new(items: &[ProgramId]) -> Self {
        Self { version: PERSISTED_SELECTION_VERSION, items: items.to_vec() }
    }

    pub fn encode(&self) -> String {
        EncodedParam(self).to_string()
    }

    pub fn decode(raw: &str) -> Result<Self, EncodedParamError> {
        raw.parse::<EncodedParam<PersistedSelection>>().map(|p| p.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode() {
        let items = ["b", "a"].map(ProgramId::from);
        let stored = PersistedSelection::new(&items);
        let decoded = PersistedSelection::decode(&stored.encode()).unwrap();
        assert_eq!(decoded.version, PERSISTED_SELECTION_VERSION);
        assert_eq!(decoded.items, items.to_vec());
    }

    #[test]
    fn corrupt_value_fails_to_decode() {
        assert!(PersistedSelection::decode("%%%").is_err());
        assert!(PersistedSelection::decode("").is_err());
    }
}
