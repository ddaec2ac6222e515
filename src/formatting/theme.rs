use colored::{Color, Colorize};
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::sync::RwLock;

/// Semantic color definitions for consistent theming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticColor {
    // Visit phase colors
    PhaseDiscovery,
    PhasePreVisit,
    PhaseInPark,
    PhasePostVisit,

    // Entity colors
    Animal,
    Saved,
    Price,
    User,

    // UI colors
    Header,
    Error,
    Success,
    Info,

    // Text colors
    Secondary,
    Muted,
}

/// Theme configuration for printed output
#[derive(Debug, Clone)]
pub struct ColorTheme {
    colors: HashMap<SemanticColor, Color>,
}

impl ColorTheme {
    pub fn get(&self, semantic: SemanticColor) -> Color {
        self.colors.get(&semantic).copied().unwrap_or(Color::White)
    }
}

impl Default for ColorTheme {
    fn default() -> Self {
        let mut colors = HashMap::new();

        colors.insert(SemanticColor::PhaseDiscovery, Color::Cyan);
        colors.insert(SemanticColor::PhasePreVisit, Color::Yellow);
        colors.insert(SemanticColor::PhaseInPark, Color::Green);
        colors.insert(SemanticColor::PhasePostVisit, Color::Magenta);

        colors.insert(SemanticColor::Animal, Color::TrueColor { r: 222, g: 160, b: 60 });
        colors.insert(SemanticColor::Saved, Color::BrightRed);
        colors.insert(SemanticColor::Price, Color::BrightGreen);
        colors.insert(SemanticColor::User, Color::Blue);

        colors.insert(SemanticColor::Header, Color::TrueColor { r: 46, g: 125, b: 50 });
        colors.insert(SemanticColor::Error, Color::Red);
        colors.insert(SemanticColor::Success, Color::Green);
        colors.insert(SemanticColor::Info, Color::Blue);

        colors.insert(SemanticColor::Secondary, Color::TrueColor { r: 180, g: 180, b: 180 });
        colors.insert(SemanticColor::Muted, Color::TrueColor { r: 110, g: 110, b: 110 });

        Self { colors }
    }
}

lazy_static! {
    /// Global theme instance
    static ref THEME: RwLock<ColorTheme> = RwLock::new(ColorTheme::default());
}

pub fn theme_color(semantic: SemanticColor) -> Color {
    THEME
        .read()
        .map(|theme| theme.get(semantic))
        .unwrap_or(Color::White)
}

/// Extension trait for colorizing strings with semantic colors
pub trait ThemedColorize {
    fn with_theme(&self, semantic: SemanticColor) -> colored::ColoredString;
}

impl ThemedColorize for &str {
    fn with_theme(&self, semantic: SemanticColor) -> colored::ColoredString {
        self.color(theme_color(semantic))
    }
}

impl ThemedColorize for String {
    fn with_theme(&self, semantic: SemanticColor) -> colored::ColoredString {
        self.color(theme_color(semantic))
    }
}

pub mod helpers {
    use super::*;
    use crate::models::VisitPhase;

    pub fn phase_color(phase: VisitPhase) -> SemanticColor {
        match phase {
            VisitPhase::Discovery => SemanticColor::PhaseDiscovery,
            VisitPhase::PreVisit => SemanticColor::PhasePreVisit,
            VisitPhase::InPark => SemanticColor::PhaseInPark,
            VisitPhase::PostVisit => SemanticColor::PhasePostVisit,
        }
    }

    pub fn saved_symbol(saved: bool) -> &'static str {
        if saved { "♥" } else { "♡" }
    }
}
