use super::state::AppState;
use crate::models::{ActivePlan, ProfilePatch, VisitPhase};

/// Every sanctioned mutation of [`AppState`].
#[derive(Debug, Clone, PartialEq)]
pub enum StoreAction {
    SetOnboarded(bool),
    SetVisitPhase(VisitPhase),
    CycleVisitPhase,
    SetUser(ProfilePatch),
    SetActivePlan(Option<ActivePlan>),
    SetAudioPlaying {
        playing: bool,
        title: Option<String>,
    },
    ToggleSavedAnimal(String),
    SetAssistantOpen(bool),
    SetSelectedExhibit(Option<String>),
}

/// Things consumers may want to react to after a transition
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEffect {
    /// The onboarding flag flipped; the navigable route set is different now.
    RouteSetChanged { onboarded: bool },
    VisitPhaseChanged { from: VisitPhase, to: VisitPhase },
    SavedAnimalToggled { id: String, saved: bool },
    PlanReplaced { present: bool },
}

#[derive(Debug)]
pub struct Transition {
    pub state: AppState,
    pub effects: Vec<StoreEffect>,
}

/// Apply `action` to `state`. Pure: no I/O, total over all inputs.
pub fn reduce(mut state: AppState, action: StoreAction) -> Transition {
    let mut effects = Vec::new();

    match action {
        StoreAction::SetOnboarded(value) => {
            if state.onboarded != value {
                effects.push(StoreEffect::RouteSetChanged { onboarded: value });
            }
            state.onboarded = value;
        }

        StoreAction::SetVisitPhase(phase) => {
            if state.visit_phase != phase {
                effects.push(StoreEffect::VisitPhaseChanged {
                    from: state.visit_phase,
                    to: phase,
                });
            }
            state.visit_phase = phase;
        }

        StoreAction::CycleVisitPhase => {
            let from = state.visit_phase;
            state.visit_phase = from.next();
            effects.push(StoreEffect::VisitPhaseChanged {
                from,
                to: state.visit_phase,
            });
        }

        StoreAction::SetUser(patch) => {
            patch.apply_to(&mut state.user);
        }

        StoreAction::SetActivePlan(plan) => {
            effects.push(StoreEffect::PlanReplaced { present: plan.is_some() });
            state.active_plan = plan;
        }

        StoreAction::SetAudioPlaying { playing, title } => {
            state.audio.playing = playing;
            if let Some(title) = title {
                state.audio.title = Some(title);
            }
        }

        StoreAction::ToggleSavedAnimal(id) => {
            let saved = !state.saved_animals.remove(&id);
            if saved {
                state.saved_animals.insert(id.clone());
            }
            effects.push(StoreEffect::SavedAnimalToggled { id, saved });
        }

        StoreAction::SetAssistantOpen(open) => {
            state.assistant_open = open;
        }

        StoreAction::SetSelectedExhibit(exhibit) => {
            state.selected_exhibit = exhibit;
        }
    }

    Transition { state, effects }
}
