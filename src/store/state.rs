use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::constants::SEED_SAVED_ANIMALS;
use crate::models::{ActivePlan, UserProfile, VisitPhase};

/// Audio guide playback
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioState {
    pub playing: bool,
    /// Last title played; kept when playback stops.
    pub title: Option<String>,
}

/// Everything shared across screens for one session.
///
/// Screens render straight from this value and never keep their own copies
/// of these fields; changes go through [`StoreAction`](super::StoreAction).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub onboarded: bool,
    pub visit_phase: VisitPhase,
    pub user: UserProfile,
    pub active_plan: Option<ActivePlan>,
    /// Ordered by id.
    pub saved_animals: BTreeSet<String>,
    pub audio: AudioState,
    pub assistant_open: bool,
    pub selected_exhibit: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            onboarded: false,
            visit_phase: VisitPhase::Discovery,
            user: UserProfile::default(),
            active_plan: None,
            saved_animals: SEED_SAVED_ANIMALS.iter().map(|id| id.to_string()).collect(),
            audio: AudioState::default(),
            assistant_open: false,
            selected_exhibit: None,
        }
    }
}

impl AppState {
    pub fn is_saved(&self, animal_id: &str) -> bool {
        self.saved_animals.contains(animal_id)
    }
}
