use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

use zoo_companion::config::Config;
use zoo_companion::error::{ZooError, ZooResult};
use zoo_companion::interactive::keys::Action;
use zoo_companion::interactive::{ui, Route, ZooApp};
use zoo_companion::store::StoreScope;

fn press(app: &mut ZooApp, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
}

fn render(app: &ZooApp) -> (ZooResult<()>, String) {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    let mut rendered = Ok(());
    terminal.draw(|f| rendered = ui::draw(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    let text = buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n");
    (rendered, text)
}

#[test]
fn fresh_session_shows_splash() {
    let app = ZooApp::new(Config::default()).unwrap();

    assert_eq!(app.current_route().unwrap(), Route::Splash);
    let (rendered, screen) = render(&app);
    rendered.unwrap();
    assert!(screen.contains("ZOO COMPANION"));
    assert!(screen.contains("Your day at the zoo, in your pocket"));
}

#[test]
fn skipping_onboarding_lands_on_home() {
    let mut app = ZooApp::new(Config::default()).unwrap();

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.current_route().unwrap(), Route::Welcome);

    press(&mut app, KeyCode::Char('s'));
    assert!(app.store().unwrap().state().onboarded);
    assert_eq!(app.current_route().unwrap(), Route::Home);

    let (rendered, screen) = render(&app);
    rendered.unwrap();
    assert!(screen.contains("Hi, Alex!"));
    assert!(screen.contains("3 visits"));
}

#[test]
fn main_routes_unreachable_before_onboarding() {
    let mut app = ZooApp::new(Config { skip_splash: true, ..Config::default() }).unwrap();
    assert_eq!(app.current_route().unwrap(), Route::Welcome);

    app.handle_action(Action::GoTo(Route::Map)).unwrap();

    assert_eq!(app.current_route().unwrap(), Route::Welcome);
}

#[test]
fn finishing_preferences_updates_profile() {
    let mut app = ZooApp::new(Config { skip_splash: true, ..Config::default() }).unwrap();

    for _ in 0..3 {
        press(&mut app, KeyCode::Enter);
    }
    assert_eq!(app.current_route().unwrap(), Route::Preferences);

    press(&mut app, KeyCode::Char('g'));
    press(&mut app, KeyCode::Enter);

    let state = app.store().unwrap().state();
    assert!(state.onboarded);
    assert_eq!(state.user.group_type.label(), "Solo");
    assert_eq!(app.current_route().unwrap(), Route::Home);
    assert!(app.notifications.iter().any(|n| n.message == "Welcome aboard, Alex!"));
}

#[test]
fn signing_out_returns_to_welcome() {
    let mut app = ZooApp::new(Config { skip_splash: true, ..Config::default() }).unwrap();
    press(&mut app, KeyCode::Char('s'));

    press(&mut app, KeyCode::Char('6'));
    assert_eq!(app.current_route().unwrap(), Route::Profile);

    press(&mut app, KeyCode::Char('o'));

    assert!(!app.store().unwrap().state().onboarded);
    assert_eq!(app.current_route().unwrap(), Route::Welcome);
    assert_eq!(app.onboarding.slide, 0);
}

#[test]
fn screens_share_the_saved_set() {
    let mut app = ZooApp::new(Config { skip_splash: true, ..Config::default() }).unwrap();
    press(&mut app, KeyCode::Char('s'));

    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('s'));
    assert!(app.store().unwrap().state().is_saved("giraffe"));
    assert!(app.notifications.iter().any(|n| n.message == "Saved Giraffe"));

    press(&mut app, KeyCode::Char('6'));
    let (_, screen) = render(&app);
    assert!(screen.contains("Giraffe"));
    assert!(screen.contains("Saved (3)"));
}

#[test]
fn phase_cycles_from_any_main_screen() {
    let mut app = ZooApp::new(Config { skip_splash: true, ..Config::default() }).unwrap();
    press(&mut app, KeyCode::Char('s'));

    press(&mut app, KeyCode::Char('v'));
    let (_, screen) = render(&app);
    assert!(screen.contains("Getting ready"));
}

#[test]
fn assistant_overlay_opens_and_closes() {
    let mut app = ZooApp::new(Config { skip_splash: true, ..Config::default() }).unwrap();
    press(&mut app, KeyCode::Char('s'));

    press(&mut app, KeyCode::Char('i'));
    assert!(app.store().unwrap().state().assistant_open);
    let (_, screen) = render(&app);
    assert!(screen.contains("Zoo assistant"));

    press(&mut app, KeyCode::Esc);
    assert!(!app.store().unwrap().state().assistant_open);
}

#[test]
fn unprovisioned_scope_fails_fast() {
    let mut app = ZooApp::with_scope(StoreScope::new(), Config::default());

    let (rendered, _) = render(&app);
    match rendered {
        Err(ZooError::StoreNotProvided(consumer)) => assert_eq!(consumer, "Splash"),
        other => panic!("Expected StoreNotProvided, got {:?}", other),
    }

    let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
    assert!(matches!(app.handle_key(key), Err(ZooError::StoreNotProvided(_))));
}
