//! In-memory day record store.
//!
//! The store maps date keys to the rituals and journal recorded for that day.
//! Records exist only for days the user has touched. The JSON encoding is
//! `{ "YYYY-MM-DD": { "rituals": [...], "journal": "..." } }`.
//!
//! Saved entries that cannot be read back (a malformed key, an unknown ritual
//! type, a `null` ritual list) are kept verbatim and written out again on the
//! next save.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::date_key::DateKey;
use crate::error::StorageError;
use crate::ritual::RitualState;

/// Everything recorded for one day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    #[serde(default)]
    pub rituals: Vec<RitualState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,
}

impl DayRecord {
    pub fn completed_count(&self) -> usize {
        self.rituals.iter().filter(|r| r.completed()).count()
    }

    /// True when the day has rituals and every one of them is completed.
    pub fn is_fully_completed(&self) -> bool {
        !self.rituals.is_empty() && self.rituals.iter().all(RitualState::completed)
    }

    pub fn ritual(&self, id: &str) -> Option<&RitualState> {
        self.rituals.iter().find(|r| r.id == id)
    }
}

/// Date-keyed collection of day records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayStore {
    days: BTreeMap<DateKey, DayRecord>,
    /// Saved entries that did not decode, by their original key
    unreadable: BTreeMap<String, serde_json::Value>,
}

impl DayStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &DateKey) -> Option<&DayRecord> {
        self.days.get(key)
    }

    pub fn get_mut(&mut self, key: &DateKey) -> Option<&mut DayRecord> {
        self.days.get_mut(key)
    }

    pub fn insert(&mut self, key: DateKey, record: DayRecord) -> Option<DayRecord> {
        self.days.insert(key, record)
    }

    pub fn contains(&self, key: &DateKey) -> bool {
        self.days.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of saved entries carried through undecoded.
    pub fn unreadable_count(&self) -> usize {
        self.unreadable.len()
    }

    /// Decode a saved blob.
    ///
    /// Entries with a key that is not a `YYYY-MM-DD` date, or with a record
    /// that does not decode, are set aside with a warning and re-emitted by
    /// [`DayStore::to_json`]. A blob that is not a JSON object fails as a
    /// whole.
    pub fn from_json(blob: &str) -> Result<Self, StorageError> {
        let raw: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(blob).map_err(StorageError::Decode)?;

        let mut store = Self::default();
        for (key, entry) in raw {
            let date = match key.parse::<DateKey>() {
                Ok(date) => date,
                Err(err) => {
                    tracing::warn!(key = %key, error = %err, "keeping saved day with malformed key as-is");
                    store.unreadable.insert(key, entry);
                    continue;
                }
            };
            match DayRecord::deserialize(&entry) {
                Ok(record) => {
                    store.days.insert(date, record);
                }
                Err(err) => {
                    tracing::warn!(key = %key, error = %err, "keeping unreadable saved day as-is");
                    store.unreadable.insert(key, entry);
                }
            }
        }
        Ok(store)
    }

    /// Encode the whole store for saving.
    ///
    /// A decoded record replaces an undecoded entry saved under the same key.
    pub fn to_json(&self) -> Result<String, StorageError> {
        let mut out: serde_json::Map<String, serde_json::Value> =
            self.unreadable.clone().into_iter().collect();
        for (date, record) in &self.days {
            let value = serde_json::to_value(record).map_err(StorageError::Encode)?;
            out.insert(date.to_string(), value);
        }
        serde_json::to_string(&out).map_err(StorageError::Encode)
    }
}
