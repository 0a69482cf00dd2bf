//! The canonical, ordered set of rituals being tracked.

use std::collections::HashSet;

use super::{RitualDefinition, RitualKind};
use crate::error::ValidationError;

/// Ordered list of ritual definitions with unique ids.
///
/// Template order drives the order of resolved days, progress and the CSV
/// columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    rituals: Vec<RitualDefinition>,
}

impl Template {
    /// Build a template, rejecting blank and duplicate ids.
    pub fn new(rituals: Vec<RitualDefinition>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::new();
        for ritual in &rituals {
            if ritual.id.trim().is_empty() {
                return Err(ValidationError::EmptyRitualId);
            }
            if !seen.insert(ritual.id.as_str()) {
                return Err(ValidationError::DuplicateRitualId(ritual.id.clone()));
            }
        }
        Ok(Self { rituals })
    }

    /// The built-in daily routine.
    pub fn standard() -> Self {
        let rituals = [
            ("wake-up", "Wake up time", RitualKind::Time),
            ("stretching", "Stretching", RitualKind::Checkbox),
            ("sunlight-walk", "Walk 10 minutes in sunlight", RitualKind::Checkbox),
            ("run", "Run for 30 minutes", RitualKind::Checkbox),
            ("steps", "Walk 10K steps", RitualKind::Checkbox),
            ("diet", "Follow diet - 3x meals", RitualKind::Checkbox),
            ("no-alcohol", "No alcohol", RitualKind::Checkbox),
            ("workout", "Workout for 45 minutes", RitualKind::Checkbox),
            ("sleep-time", "Sleep time", RitualKind::Time),
        ]
        .into_iter()
        .map(|(id, name, kind)| RitualDefinition::new(id, name, kind))
        .collect();
        Self { rituals }
    }

    pub fn rituals(&self) -> &[RitualDefinition] {
        &self.rituals
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RitualDefinition> {
        self.rituals.iter()
    }

    pub fn len(&self) -> usize {
        self.rituals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rituals.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&RitualDefinition> {
        self.rituals.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> IntoIterator for &'a Template {
    type Item = &'a RitualDefinition;
    type IntoIter = std::slice::Iter<'a, RitualDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.rituals.iter()
    }
}
