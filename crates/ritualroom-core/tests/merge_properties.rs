//! Property tests for the merge engine.

use proptest::prelude::*;
use ritualroom_core::{
    apply_ritual_change, resolve_day, DateKey, DayRecord, DayStore, RitualDefinition, RitualKind,
    RitualState, Template,
};
use std::collections::HashSet;

fn day() -> DateKey {
    "2024-06-05".parse().unwrap()
}

fn template_strategy() -> impl Strategy<Value = Template> {
    prop::collection::vec(any::<bool>(), 0..8).prop_map(|kinds| {
        let rituals = kinds
            .iter()
            .enumerate()
            .map(|(i, is_time)| {
                let kind = if *is_time {
                    RitualKind::Time
                } else {
                    RitualKind::Checkbox
                };
                RitualDefinition::new(format!("t{i}"), format!("Template ritual {i}"), kind)
            })
            .collect();
        Template::new(rituals).unwrap()
    })
}

/// Stored rituals mixing template ids (`t*`) and legacy ids (`l*`).
fn stored_strategy() -> impl Strategy<Value = Vec<RitualState>> {
    prop::collection::vec((0u8..10, any::<bool>(), any::<bool>()), 0..12).prop_map(|entries| {
        let mut seen = HashSet::new();
        entries
            .into_iter()
            .filter_map(|(n, legacy, completed)| {
                let id = if legacy { format!("l{n}") } else { format!("t{n}") };
                seen.insert(id.clone())
                    .then(|| RitualState::checkbox(id, format!("Stored {n}"), completed))
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn absent_day_mirrors_template(template in template_strategy()) {
        let resolved = resolve_day(&DayStore::new(), &day(), &template);

        prop_assert_eq!(resolved.len(), template.len());
        for (state, def) in resolved.iter().zip(template.iter()) {
            prop_assert_eq!(&state.id, &def.id);
            prop_assert_eq!(state.kind(), def.kind);
            prop_assert!(!state.completed());
            prop_assert_eq!(state.value(), None);
        }
    }

    #[test]
    fn stored_day_keeps_template_prefix_and_legacy_suffix(
        template in template_strategy(),
        stored in stored_strategy(),
    ) {
        let mut store = DayStore::new();
        store.insert(day(), DayRecord { rituals: stored.clone(), journal: None });

        let resolved = resolve_day(&store, &day(), &template);
        let (prefix, suffix) = resolved.split_at(template.len());

        for (state, def) in prefix.iter().zip(template.iter()) {
            match stored.iter().find(|s| s.id == def.id) {
                Some(existing) => prop_assert_eq!(state, existing),
                None => prop_assert_eq!(state, &RitualState::pending(def)),
            }
        }

        let legacy: Vec<_> = stored.iter().filter(|s| !template.contains(&s.id)).collect();
        prop_assert_eq!(suffix.len(), legacy.len());
        for (state, expected) in suffix.iter().zip(legacy) {
            prop_assert_eq!(state, expected);
        }
    }

    #[test]
    fn time_change_completion_tracks_value(
        completed in any::<bool>(),
        value in prop::option::of("[0-9:]{0,5}"),
    ) {
        let template = Template::standard();
        let mut store = DayStore::new();

        prop_assert!(apply_ritual_change(&mut store, &day(), &template, "sleep-time", completed, value.clone()));

        let state = store.get(&day()).unwrap().ritual("sleep-time").unwrap();
        let expected = value.as_deref().is_some_and(|v| !v.is_empty());
        prop_assert_eq!(state.completed(), expected);
    }

    #[test]
    fn checkbox_change_never_sets_value(
        completed in any::<bool>(),
        value in prop::option::of(".{0,8}"),
    ) {
        let template = Template::standard();
        let mut store = DayStore::new();

        apply_ritual_change(&mut store, &day(), &template, "workout", completed, value);

        let state = store.get(&day()).unwrap().ritual("workout").unwrap();
        prop_assert_eq!(state.completed(), completed);
        prop_assert_eq!(state.value(), None);
    }
}
