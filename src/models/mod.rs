pub mod fixtures;
pub mod plan;
pub mod profile;
pub mod visit;

// Re-export commonly used types
pub use fixtures::{Animal, InterestTag, ParkEvent, TicketType, Zone};
pub use plan::{ActivePlan, PlanStop};
pub use profile::{FamilyMember, GroupType, ProfilePatch, UserProfile};
pub use visit::VisitPhase;
