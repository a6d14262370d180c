//! Filter specification for the catalog listing and its query-string form.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::query_string::QueryParams;

/// Value meaning "no constraint" for the equality and flag keys.
pub const ALL_SENTINEL: &str = "all";

/// Recognized filter keys. Declaration order is the canonical serialization
/// order, which is also the `Ord` used by the backing map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FilterKey {
    Search,
    Country,
    Province,
    City,
    Level,
    Discipline,
    TuitionMax,
    Scholarships,
}

/// How a key constrains a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Substring,
    Equality,
    UpperBound,
    Flag,
}

impl FilterKey {
    pub const ALL: [FilterKey; 8] = [
        FilterKey::Search,
        FilterKey::Country,
        FilterKey::Province,
        FilterKey::City,
        FilterKey::Level,
        FilterKey::Discipline,
        FilterKey::TuitionMax,
        FilterKey::Scholarships,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::Search => "search",
            FilterKey::Country => "country",
            FilterKey::Province => "province",
            FilterKey::City => "city",
            FilterKey::Level => "level",
            FilterKey::Discipline => "discipline",
            FilterKey::TuitionMax => "tuitionMax",
            FilterKey::Scholarships => "scholarships",
        }
    }

    pub fn kind(&self) -> FilterKind {
        match self {
            FilterKey::Search => FilterKind::Substring,
            FilterKey::Country
            | FilterKey::Province
            | FilterKey::City
            | FilterKey::Level
            | FilterKey::Discipline => FilterKind::Equality,
            FilterKey::TuitionMax => FilterKind::UpperBound,
            FilterKey::Scholarships => FilterKind::Flag,
        }
    }

    /// Keys that only make sense under the current value of `self` and are
    /// cleared when it changes.
    pub fn dependents(&self) -> &'static [FilterKey] {
        match self {
            FilterKey::Country => &[FilterKey::Province, FilterKey::City],
            FilterKey::Province => &[FilterKey::City],
            _ => &[],
        }
    }
}

impl Display for FilterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFilterKey(pub String);

impl Display for UnknownFilterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown filter key: {}", self.0)
    }
}

impl std::error::Error for UnknownFilterKey {}

impl FromStr for FilterKey {
    type Err = UnknownFilterKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownFilterKey(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterValue {
    Text(String),
    Amount(f64),
    Flag(bool),
}

impl FilterValue {
    /// Normalizes a raw query value for `key`. `None` means the constraint is
    /// absent: sentinel, empty, or malformed input all end up here.
    pub fn parse_for(key: FilterKey, raw: &str) -> Option<FilterValue> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        match key.kind() {
            FilterKind::Substring => Some(FilterValue::Text(raw.to_string())),
            FilterKind::Equality => {
                if raw.eq_ignore_ascii_case(ALL_SENTINEL) {
                    None
                } else {
                    Some(FilterValue::Text(raw.to_string()))
                }
            }
            FilterKind::UpperBound => match raw.parse::<f64>() {
                Ok(amount) if amount.is_finite() && amount >= 0.0 => Some(FilterValue::Amount(amount)),
                _ => None,
            },
            FilterKind::Flag => match raw.to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" => Some(FilterValue::Flag(true)),
                "false" | "no" | "0" => Some(FilterValue::Flag(false)),
                _ => None,
            },
        }
    }
}

impl Display for FilterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterValue::Text(text) => write!(f, "{}", text),
            FilterValue::Amount(amount) => write!(f, "{}", amount),
            FilterValue::Flag(flag) => write!(f, "{}", flag),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterSpec {
    constraints: BTreeMap<FilterKey, FilterValue>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse_from_query(query: &str) -> Self {
        Self::from_params(&QueryParams::parse(query))
    }

    pub fn from_params(params: &QueryParams) -> Self {
        let mut spec = Self::new();
        for key in FilterKey::ALL {
            if let Some(raw) = params.get(key.as_str()) {
                spec.set(key, raw);
            }
        }
        spec
    }

    /// Canonical query string: present keys only, in `FilterKey` order.
    pub fn serialize_to_query(&self) -> String {
        let mut params = QueryParams::new();
        self.write_to_params(&mut params);
        params.to_query_string()
    }

    /// Replaces every filter key in `params` with this spec's value (or
    /// removes it), leaving keys owned by other components alone.
    pub fn write_to_params(&self, params: &mut QueryParams) {
        for key in FilterKey::ALL {
            match self.constraints.get(&key) {
                Some(value) => params.set(key.as_str(), value.to_string()),
                None => {
                    params.remove(key.as_str());
                }
            }
        }
    }

    /// Sets `key` from a raw value; sentinel or malformed values clear it.
    pub fn set(&mut self, key: FilterKey, raw: &str) {
        match FilterValue::parse_for(key, raw) {
            Some(value) => {
                self.constraints.insert(key, value);
            }
            None => {
                self.constraints.remove(&key);
            }
        }
    }

    pub fn remove(&mut self, key: FilterKey) -> Option<FilterValue> {
        self.constraints.remove(&key)
    }

    pub fn get(&self, key: FilterKey) -> Option<&FilterValue> {
        self.constraints.get(&key)
    }

    pub fn text(&self, key: FilterKey) -> Option<&str> {
        match self.constraints.get(&key) {
            Some(FilterValue::Text(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FilterKey, &FilterValue)> {
        self.constraints.iter().map(|(k, v)| (*k, v))
    }

    /// Sets `key` to `value` and drops the keys that depend on it
    /// (`country` clears `province` and `city`, `province` clears `city`).
    pub fn narrow(&self, key: FilterKey, value: &str) -> FilterSpec {
        let mut spec = self.clone();
        spec.set(key, value);
        for dependent in key.dependents() {
            spec.constraints.remove(dependent);
        }
        spec
    }

    /// Same spec without `key`; used when counting facet values.
    pub fn without(&self, key: FilterKey) -> FilterSpec {
        let mut spec = self.clone();
        spec.constraints.remove(&key);
        spec
    }
}
