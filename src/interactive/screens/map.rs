use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::{step_cursor, Outcome};
use crate::formatting::theme::helpers::saved_symbol;
use crate::interactive::keys::Action;
use crate::interactive::layout::panel_layout;
use crate::interactive::notifications::NotificationKind;
use crate::models::fixtures::{zone, Animal, ANIMALS};
use crate::store::{AppState, Store};

#[derive(Debug, Default)]
pub struct MapState {
    pub cursor: usize,
}

impl MapState {
    pub fn current(&self) -> Option<&'static Animal> {
        ANIMALS.get(self.cursor)
    }
}

pub fn handle(local: &mut MapState, store: &mut Store, action: Action) -> Outcome {
    match action {
        Action::MoveDown => {
            local.cursor = step_cursor(local.cursor, ANIMALS.len(), true);
            Outcome::none()
        }
        Action::MoveUp => {
            local.cursor = step_cursor(local.cursor, ANIMALS.len(), false);
            Outcome::none()
        }
        Action::Confirm => {
            let Some(animal) = local.current() else { return Outcome::none() };
            let already = store.state().selected_exhibit.as_deref() == Some(animal.id);
            if already {
                store.set_selected_exhibit(None);
                Outcome::none()
            } else {
                store.set_selected_exhibit(Some(animal.id.to_string()));
                Outcome::notice(NotificationKind::Info, format!("Directions to {}", animal.name))
            }
        }
        Action::PlayAudio => {
            let Some(animal) = local.current() else { return Outcome::none() };
            let title = audio_title(animal);
            store.set_audio_playing(true, Some(title.clone()));
            Outcome::notice(NotificationKind::Info, format!("Playing {}", title))
        }
        Action::ToggleSave => {
            if let Some(animal) = local.current() {
                store.toggle_saved_animal(animal.id);
            }
            Outcome::none()
        }
        _ => Outcome::none(),
    }
}

pub fn audio_title(animal: &Animal) -> String {
    format!("{} audio guide", animal.name)
}

pub fn draw(frame: &mut Frame, area: Rect, local: &MapState, state: &AppState) {
    let panels = panel_layout(area);

    let mut items = Vec::new();
    let mut last_zone = "";
    for (i, animal) in ANIMALS.iter().enumerate() {
        if animal.zone != last_zone {
            last_zone = animal.zone;
            let header = zone(animal.zone)
                .map(|z| format!("{} {}  ({} crowds)", z.glyph, z.name, z.crowd))
                .unwrap_or_else(|| animal.zone.to_string());
            items.push(ListItem::new(Line::from(Span::styled(
                header,
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ))));
        }

        let selected = state.selected_exhibit.as_deref() == Some(animal.id);
        let mut spans = vec![
            Span::raw(format!("  {} ", animal.glyph)),
            Span::raw(animal.name.to_string()),
            Span::styled(
                format!(" {}", saved_symbol(state.is_saved(animal.id))),
                Style::default().fg(Color::Red),
            ),
        ];
        if selected {
            spans.push(Span::styled(" ◉", Style::default().fg(Color::Magenta)));
        }

        let style = if i == local.cursor {
            Style::default().bg(Color::Rgb(40, 60, 40)).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        items.push(ListItem::new(Line::from(spans)).style(style));
    }

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Park map ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(list, panels.left);

    if panels.right.width > 0 {
        draw_detail(frame, panels.right, local, state);
    }
}

fn draw_detail(frame: &mut Frame, area: Rect, local: &MapState, state: &AppState) {
    let Some(animal) = local.current() else { return };
    let zone_name = zone(animal.zone).map(|z| z.name).unwrap_or(animal.zone);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} {}", animal.glyph, animal.name),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(zone_name.to_string(), Style::default().fg(Color::DarkGray))),
        Line::from(""),
        Line::from(animal.fact.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            format!("Tags: {}", animal.tags.join(", ")),
            Style::default().fg(Color::Gray),
        )),
    ];

    if state.is_saved(animal.id) {
        lines.push(Line::from(Span::styled("♥ Saved", Style::default().fg(Color::Red))));
    }
    if state.audio.playing && state.audio.title.as_deref() == Some(audio_title(animal).as_str()) {
        lines.push(Line::from(Span::styled("♪ Now playing", Style::default().fg(Color::Cyan))));
    }

    let detail = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Exhibit ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(detail, area);
}
