use std::collections::BTreeSet;

use crate::models::fixtures::ANIMALS;
use crate::models::{ActivePlan, GroupType, PlanStop, ProfilePatch, VisitPhase};
use crate::store::{reduce, AppState, Store, StoreAction, StoreEffect};

fn saved(ids: &[&str]) -> BTreeSet<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

fn plan_with(date: &str, stop_ids: &[&str]) -> ActivePlan {
    ActivePlan {
        date: date.to_string(),
        stops: stop_ids
            .iter()
            .map(|id| PlanStop {
                id: id.to_string(),
                name: id.to_string(),
                glyph: "•".to_string(),
                time: "10:00".to_string(),
                duration: "30 min".to_string(),
                insight: String::new(),
                completed: false,
            })
            .collect(),
        total_duration: "1h".to_string(),
        total_distance: "0.7 km".to_string(),
    }
}

#[test]
fn test_default_state() {
    let state = AppState::default();

    assert!(!state.onboarded);
    assert_eq!(state.visit_phase, VisitPhase::Discovery);
    assert_eq!(state.saved_animals, saved(&["lion", "penguin"]));
    assert_eq!(state.active_plan, None);
    assert!(!state.audio.playing);
    assert_eq!(state.audio.title, None);
    assert!(!state.assistant_open);
    assert_eq!(state.selected_exhibit, None);
    assert_eq!(state.user.name, "Alex");
    assert_eq!(state.user.visits, 3);
}

#[test]
fn test_toggle_twice_restores_saved_set() {
    for animal in ANIMALS {
        let mut store = Store::new();
        let before = store.state().saved_animals.clone();

        store.toggle_saved_animal(animal.id);
        store.toggle_saved_animal(animal.id);

        assert_eq!(store.state().saved_animals, before, "toggling {} twice", animal.id);
    }
}

#[test]
fn test_toggle_adds_and_removes() {
    let mut store = Store::new();

    assert!(store.toggle_saved_animal("giraffe"));
    assert_eq!(store.state().saved_animals, saved(&["lion", "penguin", "giraffe"]));

    assert!(!store.toggle_saved_animal("lion"));
    assert_eq!(store.state().saved_animals, saved(&["penguin", "giraffe"]));
}

#[test]
fn test_saved_set_never_has_duplicates() {
    let mut store = Store::new();
    for id in ["lion", "lion", "gorilla", "lion", "gorilla", "gorilla"] {
        store.toggle_saved_animal(id);
    }
    assert_eq!(store.state().saved_animals, saved(&["lion", "penguin"]));
}

#[test]
fn test_toggle_readd_keeps_id_order() {
    let mut store = Store::new();
    store.toggle_saved_animal("lion");
    store.toggle_saved_animal("lion");

    let order: Vec<&str> = store.state().saved_animals.iter().map(String::as_str).collect();
    assert_eq!(order, vec!["lion", "penguin"]);
}

#[test]
fn test_cycle_visit_phase_visits_each_phase_once() {
    for start in VisitPhase::ALL {
        let mut store = Store::new();
        store.set_visit_phase(start);

        let mut seen = vec![start];
        for _ in 0..3 {
            seen.push(store.cycle_visit_phase());
        }
        let back = store.cycle_visit_phase();

        assert_eq!(back, start);
        for phase in VisitPhase::ALL {
            assert_eq!(seen.iter().filter(|p| **p == phase).count(), 1);
        }
    }
}

#[test]
fn test_cycle_order() {
    let mut store = Store::new();
    assert_eq!(store.cycle_visit_phase(), VisitPhase::PreVisit);
    assert_eq!(store.cycle_visit_phase(), VisitPhase::InPark);
    assert_eq!(store.cycle_visit_phase(), VisitPhase::PostVisit);
    assert_eq!(store.cycle_visit_phase(), VisitPhase::Discovery);
}

#[test]
fn test_set_user_merges_shallowly() {
    let mut store = Store::new();
    let before = store.state().user.clone();

    store.set_user(ProfilePatch {
        name: Some("Jordan".to_string()),
        ..ProfilePatch::default()
    });

    let after = &store.state().user;
    assert_eq!(after.name, "Jordan");
    assert_eq!(after.avatar, before.avatar);
    assert_eq!(after.member_since, before.member_since);
    assert_eq!(after.group_type, before.group_type);
    assert_eq!(after.family_members, before.family_members);
    assert_eq!(after.interests, before.interests);
    assert_eq!(after.accessibility, before.accessibility);
    assert_eq!(after.visits, before.visits);
    assert_eq!(after.animals_seen, before.animals_seen);
    assert_eq!(after.distance_walked, before.distance_walked);
}

#[test]
fn test_set_user_empty_patch_is_noop() {
    let mut store = Store::new();
    let before = store.state().clone();
    store.set_user(ProfilePatch::default());
    assert_eq!(store.state(), &before);
}

#[test]
fn test_set_user_replaces_lists_wholesale() {
    let mut store = Store::new();
    store.set_user(
        ProfilePatch::default()
            .group_type(GroupType::Solo)
            .interests(vec!["reptiles".to_string()]),
    );

    assert_eq!(store.state().user.group_type, GroupType::Solo);
    assert_eq!(store.state().user.interests, vec!["reptiles".to_string()]);
}

#[test]
fn test_set_user_stores_values_unvalidated() {
    let mut store = Store::new();
    store.set_user(ProfilePatch {
        visits: Some(-1),
        interests: Some(vec!["birds".to_string(), "birds".to_string()]),
        ..ProfilePatch::default()
    });

    let user = &store.state().user;
    assert_eq!(user.visits, -1);
    assert_eq!(user.interests, vec!["birds".to_string(), "birds".to_string()]);
}

#[test]
fn test_active_plan_last_write_wins() {
    let mut store = Store::new();
    let a = plan_with("Mon", &["lion"]);
    let b = plan_with("Tue", &["penguin", "gorilla"]);

    store.set_active_plan(Some(a));
    store.set_active_plan(Some(b.clone()));

    assert_eq!(store.state().active_plan, Some(b));

    store.set_active_plan(None);
    assert_eq!(store.state().active_plan, None);
}

#[test]
fn test_audio_title_kept_when_stopping() {
    let mut store = Store::new();

    store.set_audio_playing(true, Some("Lion".to_string()));
    store.set_audio_playing(false, None);

    assert!(!store.state().audio.playing);
    assert_eq!(store.state().audio.title.as_deref(), Some("Lion"));

    store.set_audio_playing(true, Some("Penguin".to_string()));
    assert_eq!(store.state().audio.title.as_deref(), Some("Penguin"));
}

#[test]
fn test_assistant_and_exhibit() {
    let mut store = Store::new();

    store.set_assistant_open(true);
    store.set_assistant_open(true);
    assert!(store.state().assistant_open);

    store.set_selected_exhibit(Some("gorilla".to_string()));
    assert_eq!(store.state().selected_exhibit.as_deref(), Some("gorilla"));
    store.set_selected_exhibit(None);
    assert_eq!(store.state().selected_exhibit, None);
}

#[test]
fn test_reduce_leaves_input_untouched() {
    let state = AppState::default();
    let snapshot = state.clone();

    let transition = reduce(state.clone(), StoreAction::ToggleSavedAnimal("lion".to_string()));

    assert_eq!(state, snapshot);
    assert!(!transition.state.is_saved("lion"));
}

#[test]
fn test_onboarded_effect_only_on_change() {
    let mut store = Store::new();

    assert!(store.dispatch(StoreAction::SetOnboarded(false)).is_empty());
    assert_eq!(
        store.dispatch(StoreAction::SetOnboarded(true)),
        vec![StoreEffect::RouteSetChanged { onboarded: true }]
    );
    assert!(store.dispatch(StoreAction::SetOnboarded(true)).is_empty());
}

#[test]
fn test_effects_are_queued_and_drained() {
    let mut store = Store::new();

    store.toggle_saved_animal("gorilla");
    store.cycle_visit_phase();

    let effects = store.take_effects();
    assert_eq!(
        effects,
        vec![
            StoreEffect::SavedAnimalToggled { id: "gorilla".to_string(), saved: true },
            StoreEffect::VisitPhaseChanged {
                from: VisitPhase::Discovery,
                to: VisitPhase::PreVisit,
            },
        ]
    );
    assert!(store.take_effects().is_empty());
}

#[test]
fn test_state_serializes_camel_case() {
    let json = serde_json::to_value(AppState::default()).unwrap();
    assert_eq!(json["visitPhase"], "discovery");
    assert_eq!(json["savedAnimals"][0], "lion");
    assert_eq!(json["assistantOpen"], false);
}
