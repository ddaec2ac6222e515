use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanStop {
    pub id: String,
    pub name: String,
    pub glyph: String,
    pub time: String,
    pub duration: String,
    pub insight: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivePlan {
    pub date: String,
    pub stops: Vec<PlanStop>,
    pub total_duration: String,
    pub total_distance: String,
}

impl ActivePlan {
    /// First stop not yet marked completed.
    pub fn next_stop(&self) -> Option<&PlanStop> {
        self.stops.iter().find(|stop| !stop.completed)
    }

    pub fn completed_count(&self) -> usize {
        self.stops.iter().filter(|stop| stop.completed).count()
    }

    /// Copy of this plan with the given stop's completed flag flipped.
    pub fn with_stop_toggled(&self, stop_id: &str) -> ActivePlan {
        let mut plan = self.clone();
        if let Some(stop) = plan.stops.iter_mut().find(|stop| stop.id == stop_id) {
            stop.completed = !stop.completed;
        }
        plan
    }
}
