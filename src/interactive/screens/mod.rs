pub mod assistant;
pub mod home;
pub mod map;
pub mod onboarding;
pub mod plan;
pub mod profile;
pub mod scan;
pub mod tickets;

use super::notifications::{Notification, NotificationKind};
use super::routes::Route;

/// What a screen asks the app to do after handling an action.
#[derive(Debug, Default)]
pub struct Outcome {
    pub navigate: Option<Route>,
    pub notice: Option<Notification>,
}

impl Outcome {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn navigate(route: Route) -> Self {
        Self {
            navigate: Some(route),
            notice: None,
        }
    }

    pub fn notice(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            navigate: None,
            notice: Some(Notification::new(kind, message)),
        }
    }
}

/// Move a list cursor by one, wrapping at both ends.
pub(crate) fn step_cursor(cursor: usize, len: usize, down: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if down {
        (cursor + 1) % len
    } else if cursor == 0 {
        len - 1
    } else {
        cursor - 1
    }
}
