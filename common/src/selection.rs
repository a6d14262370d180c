//! The comparison selection: an ordered, duplicate-free, bounded id list.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::catalog_record::ProgramId;

/// Default comparison capacity.
pub const MAX_COMPARE: usize = 4;

/// Query key carrying the selection in shareable links.
pub const IDS_KEY: &str = "ids";

const IDS_SEPARATOR: char = ',';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityError {
    pub capacity: usize,
}

impl Display for CapacityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "comparison list is full, maximum {} items", self.capacity)
    }
}

impl std::error::Error for CapacityError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSet {
    items: Vec<ProgramId>,
    capacity: usize,
}

impl Default for SelectionSet {
    fn default() -> Self {
        Self::with_capacity(MAX_COMPARE)
    }
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { items: Vec::with_capacity(capacity), capacity }
    }

    /// Builds a set from untrusted input: blanks and repeats are skipped and
    /// anything past capacity is cut. Returns the set and how many ids were
    /// discarded.
    pub fn from_untrusted<I, S>(ids: I, capacity: usize) -> (Self, usize)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::with_capacity(capacity);
        let mut discarded = 0;
        for id in ids {
            let id = id.as_ref().trim();
            if id.is_empty() {
                continue;
            }
            if set.add(ProgramId::from(id)).is_err() {
                discarded += 1;
            }
        }
        (set, discarded)
    }

    /// Parses the `ids` query value (`a,b,c`).
    pub fn from_ids_param(raw: &str, capacity: usize) -> (Self, usize) {
        Self::from_untrusted(raw.split(IDS_SEPARATOR), capacity)
    }

    pub fn to_ids_param(&self) -> String {
        self.items.iter().map(ProgramId::as_str).collect::<Vec<_>>().join(",")
    }

    /// Appends `id`. Adding an id already present succeeds without change;
    /// adding to a full set fails and leaves it untouched.
    pub fn add(&mut self, id: ProgramId) -> Result<bool, CapacityError> {
        if self.contains(&id) {
            return Ok(false);
        }
        if self.is_full() {
            return Err(CapacityError { capacity: self.capacity });
        }
        self.items.push(id);
        Ok(true)
    }

    /// Returns whether anything was removed.
    pub fn remove(&mut self, id: &ProgramId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, id: &ProgramId) -> bool {
        self.items.contains(id)
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn items(&self) -> &[ProgramId] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(set: &SelectionSet) -> Vec<&str> {
        set.items().iter().map(ProgramId::as_str).collect()
    }

    #[test]
    fn fifth_distinct_add_is_rejected() {
        let mut set = SelectionSet::new();
        for id in ["a", "b", "c", "d"] {
            assert_eq!(set.add(id.into()), Ok(true));
        }
        assert!(set.is_full());
        assert_eq!(set.add("e".into()), Err(CapacityError { capacity: MAX_COMPARE }));
        assert_eq!(ids(&set), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn duplicate_add_is_a_successful_no_op() {
        let mut set = SelectionSet::new();
        assert_eq!(set.add("x".into()), Ok(true));
        assert_eq!(set.add("x".into()), Ok(false));
        assert_eq!(ids(&set), vec!["x"]);
    }

    #[test]
    fn duplicate_add_on_full_set_still_succeeds() {
        let mut set = SelectionSet::with_capacity(2);
        set.add("a".into()).unwrap();
        set.add("b".into()).unwrap();
        assert_eq!(set.add("a".into()), Ok(false));
    }

    #[test]
    fn removal_keeps_order() {
        let mut set = SelectionSet::new();
        for id in ["A", "B", "C"] {
            set.add(id.into()).unwrap();
        }
        assert!(set.remove(&"B".into()));
        assert_eq!(ids(&set), vec!["A", "C"]);
        assert!(!set.remove(&"Z".into()));
        assert_eq!(ids(&set), vec!["A", "C"]);
    }

    #[test]
    fn capacity_error_message() {
        assert_eq!(
            CapacityError { capacity: 4 }.to_string(),
            "comparison list is full, maximum 4 items"
        );
    }

    #[test]
    fn ids_param_round_trip() {
        let mut set = SelectionSet::new();
        for id in ["p-9", "p-2", "p-7"] {
            set.add(id.into()).unwrap();
        }
        let (parsed, discarded) = SelectionSet::from_ids_param(&set.to_ids_param(), MAX_COMPARE);
        assert_eq!(parsed, set);
        assert_eq!(discarded, 0);
    }

    #[test]
    fn untrusted_ids_are_cleaned() {
        let (set, discarded) = SelectionSet::from_ids_param(" a, ,b,a,c,d,e,f", MAX_COMPARE);
        assert_eq!(ids(&set), vec!["a", "b", "c", "d"]);
        assert_eq!(discarded, 2);
        let (set, _) = SelectionSet::from_ids_param("", MAX_COMPARE);
        assert!(set.is_empty());
    }
}
