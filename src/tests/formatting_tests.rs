use crate::formatting::{
    extract_first_name, format_distance, format_minutes, format_phase_cycle, format_price,
    format_state, truncate,
};
use crate::models::VisitPhase;
use crate::store::AppState;

#[test]
fn test_format_price() {
    assert_eq!(format_price(2995), "$29.95");
    assert_eq!(format_price(850), "$8.50");
    assert_eq!(format_price(0), "$0.00");
}

#[test]
fn test_format_minutes() {
    assert_eq!(format_minutes(40), "40 min");
    assert_eq!(format_minutes(60), "1h");
    assert_eq!(format_minutes(95), "1h 35m");
}

#[test]
fn test_format_distance() {
    assert_eq!(format_distance(12.4), "12.4 km");
}

#[test]
fn test_truncate_is_char_safe() {
    assert_eq!(truncate("Lion", 10), "Lion");
    assert_eq!(truncate("Snow Leopard audio guide", 10), "Snow Le...");
    assert_eq!(truncate("🦁🦁🦁🦁🦁", 4), "🦁...");
}

#[test]
fn test_extract_first_name() {
    assert_eq!(extract_first_name("Alex Rivera"), "Alex");
    assert_eq!(extract_first_name("Alex"), "Alex");
}

#[test]
fn test_phase_cycle_marks_current() {
    colored::control::set_override(false);
    let line = format_phase_cycle(VisitPhase::InPark);
    assert_eq!(line, "discovery → pre-visit → [in-park] → post-visit");
}

#[test]
fn test_format_state_json() {
    let json = format_state(&AppState::default(), "json").unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["onboarded"], false);
    assert_eq!(value["user"]["name"], "Alex");
    assert_eq!(value["activePlan"], serde_json::Value::Null);
}

#[test]
fn test_format_state_text_lists_saved_animals() {
    let text = format_state(&AppState::default(), "text").unwrap();
    assert!(text.contains("Lion"));
    assert!(text.contains("Penguin"));
    assert!(text.contains("No visit plan yet."));
}
