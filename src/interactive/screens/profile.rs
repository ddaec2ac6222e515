use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::{step_cursor, Outcome};
use crate::formatting::format_distance;
use crate::interactive::keys::Action;
use crate::interactive::layout::panel_layout;
use crate::models::fixtures::animal;
use crate::store::{AppState, Store};

/// Badges unlocked from profile stats: (threshold reached, label).
pub fn badges(state: &AppState) -> Vec<(bool, &'static str)> {
    let user = &state.user;
    vec![
        (user.visits >= 1, "First visit"),
        (user.visits >= 5, "Regular"),
        (user.animals_seen >= 25, "Spotter"),
        (user.distance_walked >= 10.0, "Trailblazer"),
        (state.saved_animals.len() >= 5, "Collector"),
    ]
}

#[derive(Debug, Default)]
pub struct ProfileState {
    pub cursor: usize,
}

pub fn handle(local: &mut ProfileState, store: &mut Store, action: Action) -> Outcome {
    let saved_len = store.state().saved_animals.len();
    match action {
        Action::MoveDown => local.cursor = step_cursor(local.cursor, saved_len, true),
        Action::MoveUp => local.cursor = step_cursor(local.cursor, saved_len, false),
        Action::ToggleSave => {
            if let Some(id) = store.state().saved_animals.iter().nth(local.cursor).cloned() {
                store.toggle_saved_animal(id);
                let remaining = store.state().saved_animals.len();
                local.cursor = local.cursor.min(remaining.saturating_sub(1));
            }
        }
        Action::SignOut => store.set_onboarded(false),
        _ => {}
    }
    Outcome::none()
}

pub fn draw(frame: &mut Frame, area: Rect, local: &ProfileState, state: &AppState) {
    let panels = panel_layout(area);
    let user = &state.user;

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} {}", user.avatar, user.name),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(user.member_since.clone(), Style::default().fg(Color::DarkGray))),
        Line::from(""),
        Line::from(format!("{} visits · {} animals seen", user.visits, user.animals_seen)),
        Line::from(format!("{} walked", format_distance(user.distance_walked))),
        Line::from(""),
        Line::from(format!("Group: {}", user.group_type.label())),
    ];
    for member in &user.family_members {
        lines.push(Line::from(Span::styled(
            format!("  {} ({}), {}", member.name, member.age, member.relationship),
            Style::default().fg(Color::Gray),
        )));
    }
    if !user.interests.is_empty() {
        lines.push(Line::from(format!("Interests: {}", user.interests.join(", "))));
    }
    if !user.accessibility.is_empty() {
        lines.push(Line::from(format!("Accessibility: {}", user.accessibility.join(", "))));
    }
    lines.push(Line::from(""));
    let badge_spans: Vec<Span> = badges(state)
        .into_iter()
        .map(|(earned, label)| {
            if earned {
                Span::styled(format!("★ {}  ", label), Style::default().fg(Color::Yellow))
            } else {
                Span::styled(format!("☆ {}  ", label), Style::default().fg(Color::DarkGray))
            }
        })
        .collect();
    lines.push(Line::from(badge_spans));

    let details = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Profile ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(details, panels.left);
    if panels.right.width == 0 {
        return;
    }

    let items: Vec<ListItem> = state
        .saved_animals
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let label = animal(id)
                .map(|a| format!("{} {}", a.glyph, a.name))
                .unwrap_or_else(|| id.clone());
            let style = if i == local.cursor {
                Style::default().bg(Color::Rgb(40, 60, 40)).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(format!(" ♥ {}", label))).style(style)
        })
        .collect();

    let saved = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Saved ({}) ", state.saved_animals.len()))
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(saved, panels.right);
}
