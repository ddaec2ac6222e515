pub mod app;
pub mod event;
pub mod handlers;
pub mod keys;
pub mod layout;
pub mod notifications;
pub mod routes;
pub mod scheduler;
pub mod screens;
pub mod ui;

pub use app::ZooApp;
pub use handlers::{restore_terminal, run_interactive_mode};
pub use routes::Route;
