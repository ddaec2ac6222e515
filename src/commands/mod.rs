pub mod cli;
pub mod config;
pub mod state;

pub use cli::build_cli;
pub use config::handle_config;
pub use state::{handle_state, render_state};
