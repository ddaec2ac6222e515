use crate::formatting::theme::helpers::{phase_color, saved_symbol};
use crate::formatting::theme::{theme_color, ColorTheme, SemanticColor, ThemedColorize};
use crate::models::VisitPhase;
use colored::Color;

#[test]
fn test_default_theme() {
    let theme = ColorTheme::default();

    assert_eq!(theme.get(SemanticColor::PhaseDiscovery), Color::Cyan);
    assert_eq!(theme.get(SemanticColor::PhasePreVisit), Color::Yellow);
    assert_eq!(theme.get(SemanticColor::PhaseInPark), Color::Green);
    assert_eq!(theme.get(SemanticColor::PhasePostVisit), Color::Magenta);
    assert_eq!(theme.get(SemanticColor::Saved), Color::BrightRed);
}

#[test]
fn test_phase_color_helper() {
    assert_eq!(phase_color(VisitPhase::Discovery), SemanticColor::PhaseDiscovery);
    assert_eq!(phase_color(VisitPhase::PreVisit), SemanticColor::PhasePreVisit);
    assert_eq!(phase_color(VisitPhase::InPark), SemanticColor::PhaseInPark);
    assert_eq!(phase_color(VisitPhase::PostVisit), SemanticColor::PhasePostVisit);
}

#[test]
fn test_saved_symbol_helper() {
    assert_ne!(saved_symbol(true), saved_symbol(false));
}

#[test]
fn test_themed_colorize() {
    let colored = "Lion".with_theme(SemanticColor::Animal);
    assert!(format!("{}", colored).contains("Lion"));
}

#[test]
fn test_theme_color_function() {
    assert_eq!(theme_color(SemanticColor::Success), Color::Green);
    assert_eq!(theme_color(SemanticColor::Error), Color::Red);
}

#[test]
fn test_global_theme_matches_default() {
    let theme = ColorTheme::default();
    for semantic in [SemanticColor::Info, SemanticColor::Price, SemanticColor::Header, SemanticColor::Error] {
        assert_eq!(theme_color(semantic), theme.get(semantic));
    }
}

#[test]
fn test_tui_phase_badge_follows_theme() {
    use crate::interactive::ui::themed;
    use ratatui::style::Color as TuiColor;

    assert_eq!(themed(phase_color(VisitPhase::Discovery)), TuiColor::Cyan);
    assert_eq!(themed(phase_color(VisitPhase::PreVisit)), TuiColor::Yellow);
    assert_eq!(themed(phase_color(VisitPhase::InPark)), TuiColor::Green);
    assert_eq!(themed(phase_color(VisitPhase::PostVisit)), TuiColor::Magenta);
}

#[test]
fn test_to_ratatui_keeps_true_colors() {
    use crate::interactive::ui::to_ratatui;
    use ratatui::style::Color as TuiColor;

    assert_eq!(to_ratatui(Color::TrueColor { r: 222, g: 160, b: 60 }), TuiColor::Rgb(222, 160, 60));
    assert_eq!(to_ratatui(Color::BrightGreen), TuiColor::LightGreen);
    assert_eq!(to_ratatui(Color::BrightBlack), TuiColor::DarkGray);
}
