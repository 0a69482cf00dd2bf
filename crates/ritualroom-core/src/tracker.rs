//! Ritual tracker service.
//!
//! Owns the day store, the ritual template and the persistence backend. Every
//! mutation is saved immediately. Persistence failures are logged and never
//! surface as errors:
//! - a blob that cannot be loaded or decoded starts the session empty, and
//!   saving stays off for the session so the unread blob is not overwritten;
//! - a failed save keeps the in-memory state authoritative until the next
//!   successful save.

use serde::{Deserialize, Serialize};

use crate::date_key::DateKey;
use crate::error::ValidationError;
use crate::export;
use crate::merge;
use crate::ritual::{RitualState, Template};
use crate::stats::{self, MonthSummary};
use crate::storage::BlobStore;
use crate::store::DayStore;

/// Resolved view of one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySnapshot {
    pub date: DateKey,
    pub rituals: Vec<RitualState>,
    pub journal: Option<String>,
    pub progress: u32,
    /// Whether a record exists for the day
    pub tracked: bool,
}

/// Single-user tracker over a persistence backend.
pub struct Tracker<B: BlobStore> {
    store: DayStore,
    template: Template,
    backend: B,
    /// Set when the saved blob could not be read; saves are skipped
    read_only: bool,
}

impl<B: BlobStore> Tracker<B> {
    /// Load the saved store from `backend`.
    pub fn open(backend: B, template: Template) -> Self {
        let (store, read_only) = match backend.load() {
            Ok(Some(blob)) => match DayStore::from_json(&blob) {
                Ok(store) => (store, false),
                Err(err) => {
                    tracing::error!(error = %err, "failed to decode saved rituals; starting empty without saving");
                    (DayStore::new(), true)
                }
            },
            Ok(None) => (DayStore::new(), false),
            Err(err) => {
                tracing::error!(error = %err, "failed to load saved rituals; starting empty without saving");
                (DayStore::new(), true)
            }
        };
        tracing::info!(
            days = store.len(),
            unreadable = store.unreadable_count(),
            rituals = template.len(),
            read_only,
            "tracker opened"
        );

        Self {
            store,
            template,
            backend,
            read_only,
        }
    }

    pub fn store(&self) -> &DayStore {
        &self.store
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Effective rituals of a day.
    pub fn day(&self, date: &DateKey) -> Vec<RitualState> {
        merge::resolve_day(&self.store, date, &self.template)
    }

    pub fn journal(&self, date: &DateKey) -> Option<&str> {
        self.store.get(date).and_then(|r| r.journal.as_deref())
    }

    pub fn snapshot(&self, date: &DateKey) -> DaySnapshot {
        let rituals = self.day(date);
        DaySnapshot {
            date: *date,
            progress: stats::day_progress(&rituals),
            rituals,
            journal: self.journal(date).map(str::to_string),
            tracked: self.store.contains(date),
        }
    }

    /// Edit one ritual of a day and save.
    ///
    /// Returns `false` when the day has no ritual with `ritual_id`; nothing is
    /// changed or saved in that case.
    pub fn set_ritual(
        &mut self,
        date: &DateKey,
        ritual_id: &str,
        completed: bool,
        value: Option<String>,
    ) -> bool {
        let changed = merge::apply_ritual_change(
            &mut self.store,
            date,
            &self.template,
            ritual_id,
            completed,
            value,
        );
        if changed {
            tracing::debug!(date = %date, ritual_id, "ritual updated");
            self.persist();
        }
        changed
    }

    /// Replace the journal text of a day and save.
    pub fn set_journal(&mut self, date: &DateKey, text: impl Into<String>) {
        merge::apply_journal_change(&mut self.store, date, &self.template, text);
        tracing::debug!(date = %date, "journal updated");
        self.persist();
    }

    /// Rounded completion percentage of a day's effective rituals.
    pub fn progress(&self, date: &DateKey) -> u32 {
        stats::day_progress(&self.day(date))
    }

    /// Streak as of the local calendar date.
    pub fn streak(&self) -> u32 {
        self.streak_as_of(DateKey::today())
    }

    pub fn streak_as_of(&self, today: DateKey) -> u32 {
        stats::current_streak(&self.store, today)
    }

    pub fn month_summary(
        &self,
        year: i32,
        month: u32,
        today: DateKey,
    ) -> Result<MonthSummary, ValidationError> {
        stats::month_summary(year, month, &self.store, today)
    }

    pub fn export_month(&self, year: i32, month: u32) -> Result<String, ValidationError> {
        export::export_month(year, month, &self.store, &self.template)
    }

    /// Whether saving is off because the saved blob could not be read.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    fn persist(&self) {
        if self.read_only {
            tracing::warn!("saved rituals were unreadable at startup; change kept in memory only");
            return;
        }
        let blob = match self.store.to_json() {
            Ok(blob) => blob,
            Err(err) => {
                tracing::error!(error = %err, "failed to encode rituals; not saved");
                return;
            }
        };
        if let Err(err) = self.backend.save(&blob) {
            tracing::error!(error = %err, "failed to save rituals; keeping in-memory state");
        }
    }
}
