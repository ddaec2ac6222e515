use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::routes::{Route, MAIN_ROUTES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    NextScreen,
    PrevScreen,
    GoTo(Route),

    // Screen-local
    Confirm,
    Back,
    Toggle,
    Skip,
    CycleGroup,
    Increment,
    Decrement,
    NewPlan,

    // Store-facing
    ToggleSave,
    PlayAudio,
    StopAudio,
    CyclePhase,
    ToggleAssistant,
    ClearPlan,
    SignOut,

    // General
    Quit,
    None,
}

pub fn map_key(key: KeyEvent, route: Route, assistant_open: bool) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }
    if assistant_open {
        return map_assistant_key(key);
    }

    let action = match route {
        Route::Splash => map_splash_key(key),
        Route::Welcome => map_welcome_key(key),
        Route::Preferences => map_preferences_key(key),
        Route::Home => Action::None,
        Route::Map => map_map_key(key),
        Route::Scan => map_scan_key(key),
        Route::Plan => map_plan_key(key),
        Route::Tickets => map_tickets_key(key),
        Route::Profile => map_profile_key(key),
    };

    if action == Action::None && !route.is_onboarding() {
        map_global_key(key)
    } else {
        action
    }
}

fn map_assistant_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('i') => Action::ToggleAssistant,
        KeyCode::Char('q') => Action::Quit,
        _ => Action::None,
    }
}

fn map_global_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Tab => Action::NextScreen,
        KeyCode::BackTab => Action::PrevScreen,
        KeyCode::Char('v') => Action::CyclePhase,
        KeyCode::Char('i') => Action::ToggleAssistant,
        KeyCode::Char('m') => Action::StopAudio,
        KeyCode::Char(c @ '1'..='6') => {
            let index = (c as usize) - ('1' as usize);
            Action::GoTo(MAIN_ROUTES[index])
        }
        _ => Action::None,
    }
}

fn map_splash_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        _ => Action::Confirm,
    }
}

fn map_welcome_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('h') | KeyCode::Left => Action::MoveLeft,
        KeyCode::Char('l') | KeyCode::Right => Action::MoveRight,
        KeyCode::Enter | KeyCode::Char(' ') => Action::Confirm,
        KeyCode::Char('s') => Action::Skip,
        _ => Action::None,
    }
}

fn map_preferences_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Esc => Action::Back,
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Char(' ') => Action::Toggle,
        KeyCode::Char('g') => Action::CycleGroup,
        KeyCode::Enter => Action::Confirm,
        _ => Action::None,
    }
}

fn map_map_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Enter => Action::Confirm,
        KeyCode::Char('s') => Action::ToggleSave,
        KeyCode::Char('a') => Action::PlayAudio,
        _ => Action::None,
    }
}

fn map_scan_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => Action::Confirm,
        KeyCode::Esc => Action::Back,
        KeyCode::Char('s') => Action::ToggleSave,
        _ => Action::None,
    }
}

fn map_plan_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Enter => Action::Confirm,
        KeyCode::Char(' ') => Action::Toggle,
        KeyCode::Esc => Action::Back,
        KeyCode::Char('n') => Action::NewPlan,
        KeyCode::Char('x') => Action::ClearPlan,
        _ => Action::None,
    }
}

fn map_tickets_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => Action::Increment,
        KeyCode::Char('-') | KeyCode::Left => Action::Decrement,
        KeyCode::Enter => Action::Confirm,
        KeyCode::Esc => Action::Back,
        _ => Action::None,
    }
}

fn map_profile_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Char('s') => Action::ToggleSave,
        KeyCode::Char('o') => Action::SignOut,
        _ => Action::None,
    }
}

/// Key hints shown in the footer for a route.
pub fn hints(route: Route) -> &'static [(&'static str, &'static str)] {
    match route {
        Route::Splash => &[("any key", "continue"), ("q", "quit")],
        Route::Welcome => &[("←/→", "slides"), ("enter", "next"), ("s", "skip"), ("q", "quit")],
        Route::Preferences => &[
            ("j/k", "move"),
            ("space", "toggle"),
            ("g", "group"),
            ("enter", "finish"),
            ("esc", "back"),
        ],
        Route::Home => &[("v", "phase"), ("1-6", "screens"), ("i", "assistant"), ("q", "quit")],
        Route::Map => &[
            ("j/k", "move"),
            ("enter", "select"),
            ("a", "audio"),
            ("s", "save"),
            ("m", "stop audio"),
        ],
        Route::Scan => &[("enter", "scan"), ("s", "save"), ("esc", "reset")],
        Route::Plan => &[
            ("j/k", "move"),
            ("space", "toggle"),
            ("enter", "next"),
            ("n", "new plan"),
            ("x", "clear"),
        ],
        Route::Tickets => &[("j/k", "move"), ("+/-", "quantity"), ("enter", "checkout"), ("esc", "back")],
        Route::Profile => &[("j/k", "move"), ("s", "unsave"), ("o", "sign out")],
    }
}
