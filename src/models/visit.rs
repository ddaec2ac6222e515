use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::ZooError;

/// Where the visitor is in their zoo visit.
///
/// The phases form one directed cycle with no terminal state:
/// `Discovery -> PreVisit -> InPark -> PostVisit -> Discovery`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisitPhase {
    #[default]
    Discovery,
    PreVisit,
    InPark,
    PostVisit,
}

impl VisitPhase {
    /// All phases in cycle order.
    pub const ALL: [VisitPhase; 4] = [
        VisitPhase::Discovery,
        VisitPhase::PreVisit,
        VisitPhase::InPark,
        VisitPhase::PostVisit,
    ];

    pub fn next(self) -> Self {
        match self {
            VisitPhase::Discovery => VisitPhase::PreVisit,
            VisitPhase::PreVisit => VisitPhase::InPark,
            VisitPhase::InPark => VisitPhase::PostVisit,
            VisitPhase::PostVisit => VisitPhase::Discovery,
        }
    }

    /// Wire name, e.g. `pre-visit`.
    pub fn as_str(self) -> &'static str {
        match self {
            VisitPhase::Discovery => "discovery",
            VisitPhase::PreVisit => "pre-visit",
            VisitPhase::InPark => "in-park",
            VisitPhase::PostVisit => "post-visit",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            VisitPhase::Discovery => "Discovery",
            VisitPhase::PreVisit => "Pre-visit",
            VisitPhase::InPark => "In park",
            VisitPhase::PostVisit => "Post-visit",
        }
    }
}

impl fmt::Display for VisitPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VisitPhase {
    type Err = ZooError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        VisitPhase::ALL
            .into_iter()
            .find(|phase| phase.as_str() == normalized)
            .ok_or_else(|| ZooError::ParseError(format!("Unknown visit phase: {}", s)))
    }
}
