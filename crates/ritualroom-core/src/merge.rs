//! Merge engine: overlays stored day state onto the ritual template.
//!
//! The template may gain or lose rituals over time. Resolving a day keeps
//! every stored ritual readable:
//! - template rituals come first, in template order, using the stored state
//!   when one exists and an uncompleted state otherwise;
//! - stored rituals that are no longer in the template follow, in their
//!   stored order.

use crate::date_key::DateKey;
use crate::ritual::{RitualState, Template};
use crate::store::{DayRecord, DayStore};

/// Effective ritual list for a day.
pub fn resolve_day(store: &DayStore, key: &DateKey, template: &Template) -> Vec<RitualState> {
    let Some(record) = store.get(key) else {
        return template.iter().map(RitualState::pending).collect();
    };

    let mut resolved: Vec<RitualState> = template
        .iter()
        .map(|definition| {
            record
                .ritual(&definition.id)
                .cloned()
                .unwrap_or_else(|| RitualState::pending(definition))
        })
        .collect();

    resolved.extend(
        record
            .rituals
            .iter()
            .filter(|stored| !template.contains(&stored.id))
            .cloned(),
    );
    resolved
}

/// Record a ritual edit for a day.
///
/// The whole resolved list is written back, so the first edit of a day
/// materializes every template ritual. An existing journal is kept. Returns
/// `false` and leaves the store untouched when no resolved ritual has
/// `ritual_id`.
pub fn apply_ritual_change(
    store: &mut DayStore,
    key: &DateKey,
    template: &Template,
    ritual_id: &str,
    completed: bool,
    value: Option<String>,
) -> bool {
    let mut rituals = resolve_day(store, key, template);
    let Some(target) = rituals.iter_mut().find(|r| r.id == ritual_id) else {
        tracing::debug!(date = %key, ritual_id, "ritual not found; ignoring change");
        return false;
    };
    target.apply(completed, value);

    match store.get_mut(key) {
        Some(record) => record.rituals = rituals,
        None => {
            store.insert(
                *key,
                DayRecord {
                    rituals,
                    journal: None,
                },
            );
        }
    }
    true
}

/// Set the journal text of a day, materializing the day if needed.
pub fn apply_journal_change(
    store: &mut DayStore,
    key: &DateKey,
    template: &Template,
    text: impl Into<String>,
) {
    let text = text.into();
    if let Some(record) = store.get_mut(key) {
        record.journal = Some(text);
        return;
    }

    let rituals = resolve_day(store, key, template);
    store.insert(
        *key,
        DayRecord {
            rituals,
            journal: Some(text),
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ritual::{RitualDefinition, RitualKind};

    fn key(s: &str) -> DateKey {
        s.parse().unwrap()
    }

    fn small_template() -> Template {
        Template::new(vec![
            RitualDefinition::new("wake-up", "Wake up time", RitualKind::Time),
            RitualDefinition::new("stretching", "Stretching", RitualKind::Checkbox),
            RitualDefinition::new("run", "Run for 30 minutes", RitualKind::Checkbox),
        ])
        .unwrap()
    }

    #[test]
    fn absent_day_resolves_to_pending_template() {
        let template = small_template();
        let resolved = resolve_day(&DayStore::new(), &key("2024-06-05"), &template);

        let ids: Vec<_> = resolved.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["wake-up", "stretching", "run"]);
        assert!(resolved.iter().all(|r| !r.completed() && r.value().is_none()));
    }

    #[test]
    fn stored_state_is_used_verbatim_and_gaps_are_filled() {
        let template = small_template();
        let mut store = DayStore::new();
        store.insert(
            key("2024-06-05"),
            DayRecord {
                rituals: vec![RitualState::checkbox("run", "Old run name", true)],
                journal: None,
            },
        );

        let resolved = resolve_day(&store, &key("2024-06-05"), &template);
        assert_eq!(resolved.len(), 3);
        assert_eq!(resolved[2].name, "Old run name");
        assert!(resolved[2].completed());
        assert_eq!(resolved[0], RitualState::time("wake-up", "Wake up time", None));
    }

    #[test]
    fn legacy_rituals_follow_template_in_stored_order() {
        let template = small_template();
        let mut store = DayStore::new();
        store.insert(
            key("2024-06-05"),
            DayRecord {
                rituals: vec![
                    RitualState::checkbox("meditate", "Meditate", true),
                    RitualState::checkbox("stretching", "Stretching", true),
                    RitualState::checkbox("read", "Read", false),
                ],
                journal: None,
            },
        );

        let resolved = resolve_day(&store, &key("2024-06-05"), &template);
        let ids: Vec<_> = resolved.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["wake-up", "stretching", "run", "meditate", "read"]);
    }

    #[test]
    fn first_change_materializes_whole_day() {
        let template = small_template();
        let mut store = DayStore::new();
        let day = key("2024-06-05");

        assert!(apply_ritual_change(&mut store, &day, &template, "stretching", true, None));

        let record = store.get(&day).unwrap();
        assert_eq!(record.rituals.len(), 3);
        assert!(record.ritual("stretching").unwrap().completed());
        assert_eq!(record.journal, None);
    }

    #[test]
    fn time_change_ignores_completed_flag() {
        let template = small_template();
        let mut store = DayStore::new();
        let day = key("2024-06-05");

        apply_ritual_change(&mut store, &day, &template, "wake-up", false, Some("07:30".into()));
        let wake = store.get(&day).unwrap().ritual("wake-up").unwrap().clone();
        assert!(wake.completed());

        apply_ritual_change(&mut store, &day, &template, "wake-up", true, Some(String::new()));
        let wake = store.get(&day).unwrap().ritual("wake-up").unwrap().clone();
        assert!(!wake.completed());
    }

    #[test]
    fn ritual_change_keeps_journal() {
        let template = small_template();
        let mut store = DayStore::new();
        let day = key("2024-06-05");

        apply_journal_change(&mut store, &day, &template, "Slept badly");
        apply_ritual_change(&mut store, &day, &template, "run", true, None);

        let record = store.get(&day).unwrap();
        assert_eq!(record.journal.as_deref(), Some("Slept badly"));
        assert!(record.ritual("run").unwrap().completed());
    }

    #[test]
    fn unknown_ritual_is_a_no_op() {
        let template = small_template();
        let mut store = DayStore::new();
        let day = key("2024-06-05");

        assert!(!apply_ritual_change(&mut store, &day, &template, "missing", true, None));
        assert!(store.is_empty());
    }

    #[test]
    fn journal_on_existing_day_keeps_stored_rituals() {
        let template = small_template();
        let mut store = DayStore::new();
        let day = key("2024-06-05");
        store.insert(
            day,
            DayRecord {
                rituals: vec![RitualState::checkbox("run", "Run", true)],
                journal: None,
            },
        );

        apply_journal_change(&mut store, &day, &template, "Short day");

        let record = store.get(&day).unwrap();
        assert_eq!(record.rituals.len(), 1);
        assert_eq!(record.journal.as_deref(), Some("Short day"));
    }

    #[test]
    fn journal_on_absent_day_materializes_template() {
        let template = small_template();
        let mut store = DayStore::new();
        let day = key("2024-06-05");

        apply_journal_change(&mut store, &day, &template, "");

        let record = store.get(&day).unwrap();
        assert_eq!(record.rituals.len(), 3);
        assert_eq!(record.journal.as_deref(), Some(""));
    }
}
