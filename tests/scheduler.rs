use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use zoo_companion::config::Config;
use zoo_companion::interactive::event::Event;
use zoo_companion::interactive::scheduler::ScheduledTask;
use zoo_companion::interactive::{Route, ZooApp};

fn quick_splash(delay_ms: u64) -> Config {
    Config { splash_delay_ms: delay_ms, ..Config::default() }
}

#[tokio::test]
async fn scheduled_task_fires_after_delay() {
    let (tx, rx) = mpsc::channel();
    let task = ScheduledTask::schedule(Duration::from_millis(10), tx, Event::Tick);
    assert!(task.is_pending());

    tokio::time::sleep(Duration::from_millis(80)).await;

    assert_eq!(rx.try_recv().ok(), Some(Event::Tick));
    assert!(!task.is_pending());
}

#[tokio::test]
async fn cancelled_task_never_fires() {
    let (tx, rx) = mpsc::channel();
    let mut task = ScheduledTask::schedule(Duration::from_millis(30), tx, Event::Tick);

    task.cancel();
    assert!(!task.is_pending());
    tokio::time::sleep(Duration::from_millis(80)).await;

    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn dropped_task_never_fires() {
    let (tx, rx) = mpsc::channel();
    drop(ScheduledTask::schedule(Duration::from_millis(30), tx, Event::Tick));

    tokio::time::sleep(Duration::from_millis(80)).await;

    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn splash_advances_on_its_own() {
    let (tx, rx) = mpsc::channel();
    let mut app = ZooApp::new(quick_splash(10)).unwrap();

    app.arm_splash_timer(tx);
    assert!(app.splash_timer_pending());

    tokio::time::sleep(Duration::from_millis(80)).await;

    assert_eq!(rx.try_recv().ok(), Some(Event::SplashElapsed));
    app.on_splash_elapsed();
    assert_eq!(app.current_route().unwrap(), Route::Welcome);
}

#[tokio::test]
async fn leaving_splash_cancels_timer() {
    let (tx, rx) = mpsc::channel();
    let mut app = ZooApp::new(quick_splash(30)).unwrap();
    app.arm_splash_timer(tx);

    app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)).unwrap();
    assert_eq!(app.current_route().unwrap(), Route::Welcome);
    assert!(!app.splash_timer_pending());

    tokio::time::sleep(Duration::from_millis(80)).await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn late_splash_event_is_ignored() {
    let mut app = ZooApp::new(Config { skip_splash: true, ..Config::default() }).unwrap();
    app.handle_key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE)).unwrap();
    let slide = app.onboarding.slide;

    app.on_splash_elapsed();

    assert_eq!(app.current_route().unwrap(), Route::Welcome);
    assert_eq!(app.onboarding.slide, slide);
}

#[tokio::test]
async fn timer_is_not_armed_off_splash() {
    let (tx, _rx) = mpsc::channel();
    let mut app = ZooApp::new(Config { skip_splash: true, ..Config::default() }).unwrap();

    app.arm_splash_timer(tx);

    assert!(!app.splash_timer_pending());
}
