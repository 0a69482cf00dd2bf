//! Ritual definitions and per-day ritual state.
//!
//! A ritual is either a checkbox or a time-of-day entry. The per-day state
//! carries a [`RitualMark`] so that the completion rules of each kind hold by
//! construction:
//! - **Checkbox**: completion is set directly and there is no value.
//! - **Time**: completion is derived from the value being non-empty.

mod template;

pub use template::Template;

use serde::{Deserialize, Serialize};

/// Value shape of a ritual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RitualKind {
    Checkbox,
    Time,
}

impl RitualKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RitualKind::Checkbox => "checkbox",
            RitualKind::Time => "time",
        }
    }
}

/// A template entry: one trackable activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RitualDefinition {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: RitualKind,
}

impl RitualDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: RitualKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }
}

/// Kind-specific state of a ritual on one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RitualMark {
    Checkbox { completed: bool },
    Time { value: Option<String> },
}

impl RitualMark {
    fn pending(kind: RitualKind) -> Self {
        match kind {
            RitualKind::Checkbox => RitualMark::Checkbox { completed: false },
            RitualKind::Time => RitualMark::Time { value: None },
        }
    }
}

/// State of one ritual on one day.
///
/// Serialized as `{id, name, type, completed, value}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WireRitual", into = "WireRitual")]
pub struct RitualState {
    pub id: String,
    pub name: String,
    pub mark: RitualMark,
}

impl RitualState {
    /// Uncompleted state for a template entry.
    pub fn pending(definition: &RitualDefinition) -> Self {
        Self {
            id: definition.id.clone(),
            name: definition.name.clone(),
            mark: RitualMark::pending(definition.kind),
        }
    }

    pub fn checkbox(id: impl Into<String>, name: impl Into<String>, completed: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            mark: RitualMark::Checkbox { completed },
        }
    }

    pub fn time(id: impl Into<String>, name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            mark: RitualMark::Time { value },
        }
    }

    pub fn kind(&self) -> RitualKind {
        match self.mark {
            RitualMark::Checkbox { .. } => RitualKind::Checkbox,
            RitualMark::Time { .. } => RitualKind::Time,
        }
    }

    pub fn completed(&self) -> bool {
        match &self.mark {
            RitualMark::Checkbox { completed } => *completed,
            RitualMark::Time { value } => value.as_deref().is_some_and(|v| !v.is_empty()),
        }
    }

    pub fn value(&self) -> Option<&str> {
        match &self.mark {
            RitualMark::Checkbox { .. } => None,
            RitualMark::Time { value } => value.as_deref(),
        }
    }

    /// Apply a user edit.
    ///
    /// Time rituals take `value` and ignore `completed`; checkbox rituals take
    /// `completed` and ignore `value`.
    pub fn apply(&mut self, completed: bool, value: Option<String>) {
        match &mut self.mark {
            RitualMark::Checkbox { completed: current } => *current = completed,
            RitualMark::Time { value: current } => *current = value,
        }
    }
}

/// On-disk shape of a ritual state.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WireRitual {
    id: String,
    name: String,
    #[serde(rename = "type")]
    kind: RitualKind,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    value: Option<String>,
}

impl From<WireRitual> for RitualState {
    fn from(wire: WireRitual) -> Self {
        let mark = match wire.kind {
            RitualKind::Checkbox => RitualMark::Checkbox {
                completed: wire.completed,
            },
            RitualKind::Time => RitualMark::Time { value: wire.value },
        };
        Self {
            id: wire.id,
            name: wire.name,
            mark,
        }
    }
}

impl From<RitualState> for WireRitual {
    fn from(state: RitualState) -> Self {
        let kind = state.kind();
        let completed = state.completed();
        let value = match state.mark {
            RitualMark::Checkbox { .. } => None,
            RitualMark::Time { value } => value,
        };
        Self {
            id: state.id,
            name: state.name,
            kind,
            completed,
            value,
        }
    }
}
