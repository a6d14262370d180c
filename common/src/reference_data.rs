//! Static lookup tables for education levels and provinces.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferenceEntry {
    pub code: &'static str,
    pub label: &'static str,
}

const fn entry(code: &'static str, label: &'static str) -> ReferenceEntry {
    ReferenceEntry { code, label }
}

pub const EDUCATION_LEVELS: &[ReferenceEntry] = &[
    entry("high_school", "High School"),
    entry("language", "Language Program"),
    entry("certificate", "Certificate"),
    entry("diploma", "Diploma"),
    entry("associate", "Associate Degree"),
    entry("bachelor", "Bachelor's Degree"),
    entry("postgraduate_diploma", "Postgraduate Diploma"),
    entry("master", "Master's Degree"),
    entry("phd", "Doctorate"),
];

pub const CANADA_PROVINCES: &[ReferenceEntry] = &[
    entry("AB", "Alberta"),
    entry("BC", "British Columbia"),
    entry("MB", "Manitoba"),
    entry("NB", "New Brunswick"),
    entry("NL", "Newfoundland and Labrador"),
    entry("NS", "Nova Scotia"),
    entry("NT", "Northwest Territories"),
    entry("NU", "Nunavut"),
    entry("ON", "Ontario"),
    entry("PE", "Prince Edward Island"),
    entry("QC", "Quebec"),
    entry("SK", "Saskatchewan"),
    entry("YT", "Yukon"),
];

pub fn level_label(code: &str) -> Option<&'static str> {
    EDUCATION_LEVELS.iter().find(|e| e.code == code).map(|e| e.label)
}

/// Provinces known for `country`; empty for countries without a table.
pub fn provinces_for_country(country: &str) -> &'static [ReferenceEntry] {
    if country.eq_ignore_ascii_case("canada") {
        CANADA_PROVINCES
    } else {
        &[]
    }
}

pub fn province_name(country: &str, code: &str) -> Option<&'static str> {
    provinces_for_country(country).iter().find(|e| e.code == code).map(|e| e.label)
}

/// Owned copy of the tables, as served to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTables {
    pub education_levels: Vec<(String, String)>,
    pub provinces: Vec<(String, String, String)>,
}

impl ReferenceTables {
    pub fn current() -> Self {
        let to_owned = |e: &ReferenceEntry| (e.code.to_string(), e.label.to_string());
        Self {
            education_levels: EDUCATION_LEVELS.iter().map(to_owned).collect(),
            provinces: CANADA_PROVINCES
                .iter()
                .map(|e| ("Canada".to_string(), e.code.to_string(), e.label.to_string()))
                .collect(),
        }
    }
}
