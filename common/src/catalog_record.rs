//! Shared catalog record models.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

pub const DEFAULT_COLLECTION: &str = "programs";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Hash, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ProgramId(pub String);

impl ProgramId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ProgramId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProgramId {
    fn from(value: &str) -> Self {
        ProgramId(value.to_string())
    }
}

impl From<String> for ProgramId {
    fn from(value: String) -> Self {
        ProgramId(value)
    }
}

fn default_collection() -> String {
    DEFAULT_COLLECTION.to_string()
}

/// One school/program offering, as served by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub id: ProgramId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub institution_name: String,
    #[serde(default = "default_collection")]
    pub collection: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub discipline: String,
    /// `None` (or zero) means the school publishes no price ("contact school").
    #[serde(default)]
    pub tuition: Option<f64>,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub scholarship: bool,
    #[serde(default)]
    pub intakes: Vec<String>,
}

impl CatalogRecord {
    pub fn new(id: impl Into<ProgramId>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            institution_name: String::new(),
            collection: default_collection(),
            level: String::new(),
            country: String::new(),
            province: String::new(),
            city: String::new(),
            discipline: String::new(),
            tuition: None,
            currency: String::new(),
            scholarship: false,
            intakes: vec![],
        }
    }

    /// Tuition that counts as a real price, if any.
    pub fn known_tuition(&self) -> Option<f64> {
        self.tuition.filter(|t| *t > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_defaults() {
        let record: CatalogRecord = serde_json::from_str(r#"{"id": "p-1", "title": "Nursing"}"#).unwrap();
        assert_eq!(record.id, ProgramId::from("p-1"));
        assert_eq!(record.collection, DEFAULT_COLLECTION);
        assert_eq!(record.tuition, None);
        assert!(record.intakes.is_empty());
    }

    #[test]
    fn zero_tuition_is_not_a_price() {
        let mut record = CatalogRecord::new("p-1");
        record.tuition = Some(0.0);
        assert_eq!(record.known_tuition(), None);
        record.tuition = Some(12000.0);
        assert_eq!(record.known_tuition(), Some(12000.0));
    }

    #[test]
    fn program_id_is_a_plain_json_string() {
        let json = serde_json::to_string(&ProgramId::from("abc")).unwrap();
        assert_eq!(json, "\"abc\"");
    }
}
