//! # Ritualroom Core Library
//!
//! This library provides the core logic for Ritualroom, a personal daily
//! ritual tracker. It follows the same CLI-first split as the rest of the
//! workspace: everything a front end needs lives here, and the `ritualroom`
//! binary is a thin layer over it.
//!
//! ## Architecture
//!
//! - **Template**: the ordered set of rituals currently tracked
//! - **Store**: sparse, date-keyed day records (rituals + journal)
//! - **Merge engine**: overlays stored state onto the template, keeping
//!   rituals that were removed from the template
//! - **Stats**: day progress, streaks and the calendar month grid
//! - **Export**: monthly CSV
//! - **Storage**: SQLite blob persistence and TOML configuration
//!
//! ## Key Components
//!
//! - [`Tracker`]: owned-state service tying store, template and persistence
//! - [`Template`]: ritual definitions
//! - [`DayStore`]: date-keyed records
//! - [`Config`]: application configuration management

pub mod date_key;
pub mod error;
pub mod export;
pub mod merge;
pub mod ritual;
pub mod stats;
pub mod storage;
pub mod store;
pub mod tracker;

pub use date_key::DateKey;
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use export::{export_file_name, export_month};
pub use merge::{apply_journal_change, apply_ritual_change, resolve_day};
pub use ritual::{RitualDefinition, RitualKind, RitualMark, RitualState, Template};
pub use stats::{current_streak, day_progress, month_summary, MonthSummary, ProgressLevel};
pub use storage::{BlobStore, Config, Database, MemoryBlobStore};
pub use store::{DayRecord, DayStore};
pub use tracker::{DaySnapshot, Tracker};
