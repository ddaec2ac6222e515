use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::{step_cursor, Outcome};
use crate::constants::APP_NAME;
use crate::interactive::keys::Action;
use crate::interactive::layout::centered_popup;
use crate::interactive::notifications::NotificationKind;
use crate::interactive::routes::Route;
use crate::models::fixtures::INTEREST_TAGS;
use crate::models::{GroupType, ProfilePatch};
use crate::store::{AppState, Store};

pub struct Slide {
    pub glyph: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const SLIDES: [Slide; 3] = [
    Slide {
        glyph: "🗺",
        title: "Find your way",
        body: "An interactive park map with every exhibit, crowd level and audio guide.",
    },
    Slide {
        glyph: "📷",
        title: "Scan to learn",
        body: "Point your camera at a sign or an animal and get the story behind it.",
    },
    Slide {
        glyph: "📅",
        title: "Plan the perfect day",
        body: "Tell us what you love and we will build a route around feeding times and talks.",
    },
];

/// Local state of the welcome carousel and preferences step.
#[derive(Debug, Default)]
pub struct OnboardingState {
    pub slide: usize,
    pub cursor: usize,
    pub group_type: GroupType,
    pub interests: Vec<String>,
}

impl OnboardingState {
    pub fn toggle_interest(&mut self, id: &str) {
        if let Some(pos) = self.interests.iter().position(|i| i == id) {
            self.interests.remove(pos);
        } else {
            self.interests.push(id.to_string());
        }
    }

    /// Profile fields chosen during onboarding; unset choices are left out.
    pub fn profile_patch(&self) -> ProfilePatch {
        let mut patch = ProfilePatch::default();
        if self.group_type != GroupType::None {
            patch = patch.group_type(self.group_type);
        }
        if !self.interests.is_empty() {
            patch = patch.interests(self.interests.clone());
        }
        patch
    }
}

pub fn handle_splash(action: Action) -> Outcome {
    match action {
        Action::Confirm => Outcome::navigate(Route::Welcome),
        _ => Outcome::none(),
    }
}

pub fn handle_welcome(local: &mut OnboardingState, store: &mut Store, action: Action) -> Outcome {
    match action {
        Action::MoveLeft => {
            local.slide = local.slide.saturating_sub(1);
            Outcome::none()
        }
        Action::MoveRight => {
            local.slide = (local.slide + 1).min(SLIDES.len() - 1);
            Outcome::none()
        }
        Action::Confirm => {
            if local.slide + 1 < SLIDES.len() {
                local.slide += 1;
                Outcome::none()
            } else {
                Outcome::navigate(Route::Preferences)
            }
        }
        Action::Skip => {
            store.set_onboarded(true);
            Outcome::none()
        }
        _ => Outcome::none(),
    }
}

pub fn handle_preferences(local: &mut OnboardingState, store: &mut Store, action: Action) -> Outcome {
    match action {
        Action::MoveDown => {
            local.cursor = step_cursor(local.cursor, INTEREST_TAGS.len(), true);
            Outcome::none()
        }
        Action::MoveUp => {
            local.cursor = step_cursor(local.cursor, INTEREST_TAGS.len(), false);
            Outcome::none()
        }
        Action::Toggle => {
            if let Some(tag) = INTEREST_TAGS.get(local.cursor) {
                local.toggle_interest(tag.id);
            }
            Outcome::none()
        }
        Action::CycleGroup => {
            local.group_type = local.group_type.next();
            Outcome::none()
        }
        Action::Back => Outcome::navigate(Route::Welcome),
        Action::Confirm => finish(local, store),
        _ => Outcome::none(),
    }
}

fn finish(local: &OnboardingState, store: &mut Store) -> Outcome {
    store.set_user(local.profile_patch());
    store.set_onboarded(true);
    let name = store.state().user.name.clone();
    Outcome::notice(NotificationKind::Success, format!("Welcome aboard, {}!", name))
}

pub fn draw(frame: &mut Frame, area: Rect, route: Route, local: &OnboardingState, state: &AppState) {
    match route {
        Route::Splash => draw_splash(frame, area),
        Route::Welcome => draw_welcome(frame, area, local),
        Route::Preferences => draw_preferences(frame, area, local, state),
        _ => {}
    }
}

fn draw_splash(frame: &mut Frame, area: Rect) {
    let card = centered_popup(44, 9, area);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            APP_NAME.to_uppercase(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Your day at the zoo, in your pocket",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled("press any key", Style::default().fg(Color::DarkGray))),
    ];
    let splash = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Green)));
    frame.render_widget(splash, card);
}

fn draw_welcome(frame: &mut Frame, area: Rect, local: &OnboardingState) {
    let slide = &SLIDES[local.slide.min(SLIDES.len() - 1)];
    let card = centered_popup(52, 12, area);

    let dots: Vec<Span> = (0..SLIDES.len())
        .map(|i| {
            if i == local.slide {
                Span::styled("● ", Style::default().fg(Color::Green))
            } else {
                Span::styled("○ ", Style::default().fg(Color::DarkGray))
            }
        })
        .collect();

    let lines = vec![
        Line::from(""),
        Line::from(slide.glyph),
        Line::from(Span::styled(
            slide.title,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(slide.body, Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(dots),
        Line::from(Span::styled(
            "enter: next   s: skip",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let welcome = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Welcome ")
                .border_style(Style::default().fg(Color::Green)),
        );
    frame.render_widget(welcome, card);
}

fn draw_preferences(frame: &mut Frame, area: Rect, local: &OnboardingState, state: &AppState) {
    let card = centered_popup(52, (INTEREST_TAGS.len() as u16) + 8, area);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Hi ", Style::default().fg(Color::Gray)),
            Span::styled(state.user.name.clone(), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Span::styled(", who are you visiting with?", Style::default().fg(Color::Gray)),
        ]),
        Line::from(vec![
            Span::styled("Group: ", Style::default().fg(Color::DarkGray)),
            Span::styled(local.group_type.label(), Style::default().fg(Color::Cyan)),
            Span::styled("  (g to change)", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
        Line::from(Span::styled("What do you love?", Style::default().fg(Color::Gray))),
    ];

    for (i, tag) in INTEREST_TAGS.iter().enumerate() {
        let checked = local.interests.iter().any(|id| id == tag.id);
        let marker = if checked { "[x]" } else { "[ ]" };
        let style = if i == local.cursor {
            Style::default().fg(Color::Black).bg(Color::Green)
        } else if checked {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(Span::styled(format!(" {} {}", marker, tag.label), style)));
    }

    let prefs = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Personalise ")
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(prefs, card);
}
