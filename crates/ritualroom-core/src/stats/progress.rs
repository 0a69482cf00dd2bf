//! Per-day completion percentage.

use serde::{Deserialize, Serialize};

use crate::ritual::RitualState;

/// Completion percentage rounded to the nearest integer, `0` for no rituals.
pub fn day_progress(rituals: &[RitualState]) -> u32 {
    exact_progress(rituals).round() as u32
}

/// Unrounded completion percentage, `0.0` for no rituals.
pub fn exact_progress(rituals: &[RitualState]) -> f64 {
    let total = rituals.len();
    if total == 0 {
        return 0.0;
    }
    let completed = rituals.iter().filter(|r| r.completed()).count();
    completed as f64 / total as f64 * 100.0
}

/// Calendar intensity bucket of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressLevel {
    /// No record for the day
    Untracked,
    /// Recorded, nothing completed
    Zero,
    /// Above 0%, below 40%
    Low,
    /// 40% up to 80%
    Medium,
    /// 80% and above
    High,
}

impl ProgressLevel {
    pub fn from_progress(progress: Option<f64>) -> Self {
        match progress {
            None => ProgressLevel::Untracked,
            Some(p) if p >= 80.0 => ProgressLevel::High,
            Some(p) if p >= 40.0 => ProgressLevel::Medium,
            Some(p) if p > 0.0 => ProgressLevel::Low,
            Some(_) => ProgressLevel::Zero,
        }
    }

    /// Single-character glyph for terminal calendars.
    pub fn glyph(&self) -> char {
        match self {
            ProgressLevel::Untracked => '·',
            ProgressLevel::Zero => '○',
            ProgressLevel::Low => '░',
            ProgressLevel::Medium => '▒',
            ProgressLevel::High => '█',
        }
    }
}
