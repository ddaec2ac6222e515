pub mod summary;
pub mod theme;
pub mod utils;

pub use summary::{format_phase_cycle, format_state, format_state_text};
pub use utils::{extract_first_name, format_distance, format_minutes, format_price, truncate};
