//! Doctor directory: fixed roster plus case-insensitive text search.

#[cfg(test)]
#[path = "directory_test.rs"]
mod directory_test;

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

const ROSTER_JSON: &str = include_str!("../../data/doctors.json");

static ROSTER: LazyLock<Vec<DoctorRecord>> = LazyLock::new(|| parse_roster(ROSTER_JSON).unwrap_or_default());

/// One provider listed in the directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorRecord {
    pub name: String,
    pub department: String,
    pub qualification: String,
    pub address: String,
    pub photo_url: String,
}

impl DoctorRecord {
    /// Whether `needle` (already lower-cased) occurs in any searchable field.
    /// The photo URL is not searchable.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        [&self.name, &self.department, &self.qualification, &self.address]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Parse a roster from its JSON form.
///
/// # Errors
///
/// Returns the serde error message when the document is not a list of records.
pub fn parse_roster(json: &str) -> Result<Vec<DoctorRecord>, String> {
    serde_json::from_str(json).map_err(|e| e.to_string())
}

/// The compiled-in roster, in display order.
#[must_use]
pub fn roster() -> &'static [DoctorRecord] {
    &ROSTER
}

/// Lower-case and trim a raw search box value.
#[must_use]
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Records matching `query`, preserving roster order. A blank query keeps
/// every record.
#[must_use]
pub fn filter_doctors(records: &[DoctorRecord], query: &str) -> Vec<DoctorRecord> {
    let needle = normalize_query(query);
    if needle.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| record.matches(&needle))
        .cloned()
        .collect()
}

/// What the directory page currently shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DoctorViewState {
    pub query: String,
    pub visible: Vec<DoctorRecord>,
}

impl DoctorViewState {
    /// Unfiltered view of `records`.
    #[must_use]
    pub fn new(records: &[DoctorRecord]) -> Self {
        Self { query: String::new(), visible: records.to_vec() }
    }

    /// Recompute the visible set for a new search box value.
    pub fn apply_query(&mut self, query: &str, records: &[DoctorRecord]) {
        self.query = query.to_owned();
        self.visible = filter_doctors(records, query);
    }

    /// True when the empty-state message should replace the grid.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}
