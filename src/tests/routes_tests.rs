use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::interactive::keys::{hints, map_key, Action};
use crate::interactive::routes::{gate, routes_for, Route, MAIN_ROUTES, ONBOARDING_ROUTES};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_route_sets_are_disjoint() {
    for route in ONBOARDING_ROUTES {
        assert!(!MAIN_ROUTES.contains(&route));
        assert!(route.is_onboarding());
    }
    assert_eq!(routes_for(false), &ONBOARDING_ROUTES);
    assert_eq!(routes_for(true), &MAIN_ROUTES);
}

#[test]
fn test_gate_redirects_to_landing() {
    assert_eq!(gate(Route::Map, false), Route::Welcome);
    assert_eq!(gate(Route::Preferences, true), Route::Home);
    assert_eq!(gate(Route::Splash, false), Route::Splash);
    assert_eq!(gate(Route::Tickets, true), Route::Tickets);
}

#[test]
fn test_landing() {
    assert_eq!(Route::landing(true), Route::Home);
    assert_eq!(Route::landing(false), Route::Welcome);
}

#[test]
fn test_cycle_main_wraps() {
    assert_eq!(Route::Home.cycle_main(true), Route::Map);
    assert_eq!(Route::Profile.cycle_main(true), Route::Home);
    assert_eq!(Route::Home.cycle_main(false), Route::Profile);
    assert_eq!(Route::Welcome.cycle_main(true), Route::Welcome);
}

#[test]
fn test_ctrl_c_always_quits() {
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(map_key(ctrl_c, Route::Splash, false), Action::Quit);
    assert_eq!(map_key(ctrl_c, Route::Map, true), Action::Quit);
}

#[test]
fn test_number_keys_jump_to_main_routes() {
    for (i, route) in MAIN_ROUTES.iter().enumerate() {
        let c = char::from(b'1' + i as u8);
        assert_eq!(map_key(key(KeyCode::Char(c)), Route::Home, false), Action::GoTo(*route));
    }
}

#[test]
fn test_global_keys_not_active_during_onboarding() {
    assert_eq!(map_key(key(KeyCode::Char('v')), Route::Welcome, false), Action::None);
    assert_eq!(map_key(key(KeyCode::Char('2')), Route::Preferences, false), Action::None);
    assert_eq!(map_key(key(KeyCode::Tab), Route::Welcome, false), Action::None);
}

#[test]
fn test_route_keys_take_precedence() {
    assert_eq!(map_key(key(KeyCode::Char('s')), Route::Map, false), Action::ToggleSave);
    assert_eq!(map_key(key(KeyCode::Char('s')), Route::Welcome, false), Action::Skip);
    assert_eq!(map_key(key(KeyCode::Char('v')), Route::Map, false), Action::CyclePhase);
    assert_eq!(map_key(key(KeyCode::Char('x')), Route::Plan, false), Action::ClearPlan);
    assert_eq!(map_key(key(KeyCode::Char('+')), Route::Tickets, false), Action::Increment);
    assert_eq!(map_key(key(KeyCode::Char('o')), Route::Profile, false), Action::SignOut);
}

#[test]
fn test_splash_any_key_continues() {
    assert_eq!(map_key(key(KeyCode::Char('x')), Route::Splash, false), Action::Confirm);
    assert_eq!(map_key(key(KeyCode::Enter), Route::Splash, false), Action::Confirm);
    assert_eq!(map_key(key(KeyCode::Char('q')), Route::Splash, false), Action::Quit);
}

#[test]
fn test_assistant_captures_keys() {
    assert_eq!(map_key(key(KeyCode::Char('s')), Route::Map, true), Action::None);
    assert_eq!(map_key(key(KeyCode::Esc), Route::Map, true), Action::ToggleAssistant);
    assert_eq!(map_key(key(KeyCode::Char('i')), Route::Home, true), Action::ToggleAssistant);
    assert_eq!(map_key(key(KeyCode::Char('q')), Route::Home, true), Action::Quit);
}

#[test]
fn test_every_route_has_hints() {
    for route in ONBOARDING_ROUTES.iter().chain(MAIN_ROUTES.iter()) {
        assert!(!hints(*route).is_empty(), "{:?} has no hints", route);
    }
}
