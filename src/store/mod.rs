pub mod provider;
pub mod reducer;
pub mod session;
pub mod state;

pub use provider::StoreScope;
pub use reducer::{reduce, StoreAction, StoreEffect, Transition};
pub use session::Store;
pub use state::{AppState, AudioState};
