use std::collections::VecDeque;

use super::reducer::{reduce, StoreAction, StoreEffect, Transition};
use super::state::AppState;
use crate::logging::log_debug;
use crate::models::{ActivePlan, ProfilePatch, VisitPhase};

/// Owns the session's [`AppState`] and applies actions through [`reduce`].
#[derive(Debug, Default)]
pub struct Store {
    state: AppState,
    /// Effects produced since the last drain
    pending_effects: VecDeque<StoreEffect>,
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            state,
            pending_effects: VecDeque::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply an action and queue its effects. Returns the effects of this
    /// action alone.
    pub fn dispatch(&mut self, action: StoreAction) -> Vec<StoreEffect> {
        log_debug(&format!("Store dispatch: {:?}", action));

        let Transition { state, effects } = reduce(self.state.clone(), action);
        self.state = state;
        self.pending_effects.extend(effects.iter().cloned());
        effects
    }

    /// Take every effect queued since the previous call.
    pub fn take_effects(&mut self) -> Vec<StoreEffect> {
        self.pending_effects.drain(..).collect()
    }

    pub fn set_onboarded(&mut self, value: bool) {
        self.dispatch(StoreAction::SetOnboarded(value));
    }

    pub fn set_visit_phase(&mut self, phase: VisitPhase) {
        self.dispatch(StoreAction::SetVisitPhase(phase));
    }

    pub fn cycle_visit_phase(&mut self) -> VisitPhase {
        self.dispatch(StoreAction::CycleVisitPhase);
        self.state.visit_phase
    }

    pub fn set_user(&mut self, patch: ProfilePatch) {
        self.dispatch(StoreAction::SetUser(patch));
    }

    pub fn set_active_plan(&mut self, plan: Option<ActivePlan>) {
        self.dispatch(StoreAction::SetActivePlan(plan));
    }

    pub fn set_audio_playing(&mut self, playing: bool, title: Option<String>) {
        self.dispatch(StoreAction::SetAudioPlaying { playing, title });
    }

    /// Returns whether the animal is saved afterwards.
    pub fn toggle_saved_animal(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        self.dispatch(StoreAction::ToggleSavedAnimal(id.clone()));
        self.state.is_saved(&id)
    }

    pub fn set_assistant_open(&mut self, open: bool) {
        self.dispatch(StoreAction::SetAssistantOpen(open));
    }

    pub fn set_selected_exhibit(&mut self, exhibit: Option<String>) {
        self.dispatch(StoreAction::SetSelectedExhibit(exhibit));
    }
}
