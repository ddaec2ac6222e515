//! Simulated camera scan. Identification is a seeded random pick from the
//! park's animals; nothing is actually recognised.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::Outcome;
use crate::constants::SCAN_TICKS;
use crate::interactive::keys::Action;
use crate::interactive::layout::centered_popup;
use crate::models::fixtures::{animal, zone, Animal, ANIMALS};
use crate::store::{AppState, Store};

#[derive(Debug, Clone, PartialEq)]
pub enum ScanPhase {
    Idle,
    Scanning { remaining: u8 },
    Identified { animal_id: &'static str, confidence: u8 },
}

#[derive(Debug)]
pub struct Scanner {
    pub phase: ScanPhase,
    rng: ChaCha8Rng,
}

impl Scanner {
    pub fn new(seed: u64) -> Self {
        Self {
            phase: ScanPhase::Idle,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn start(&mut self) {
        if !matches!(self.phase, ScanPhase::Scanning { .. }) {
            self.phase = ScanPhase::Scanning { remaining: SCAN_TICKS };
        }
    }

    pub fn reset(&mut self) {
        self.phase = ScanPhase::Idle;
    }

    /// Advance a running scan. Returns the animal on the tick it is identified.
    pub fn tick(&mut self) -> Option<&'static Animal> {
        let ScanPhase::Scanning { remaining } = self.phase else {
            return None;
        };

        if remaining > 1 {
            self.phase = ScanPhase::Scanning { remaining: remaining - 1 };
            return None;
        }

        let picked = ANIMALS.choose(&mut self.rng)?;
        let confidence = self.rng.gen_range(82..=99);
        self.phase = ScanPhase::Identified {
            animal_id: picked.id,
            confidence,
        };
        Some(picked)
    }

    pub fn identified(&self) -> Option<&'static Animal> {
        match self.phase {
            ScanPhase::Identified { animal_id, .. } => animal(animal_id),
            _ => None,
        }
    }
}

pub fn handle(local: &mut Scanner, store: &mut Store, action: Action) -> Outcome {
    match action {
        Action::Confirm => {
            local.start();
            Outcome::none()
        }
        Action::Back => {
            local.reset();
            Outcome::none()
        }
        Action::ToggleSave => {
            if let Some(found) = local.identified() {
                store.toggle_saved_animal(found.id);
            }
            Outcome::none()
        }
        _ => Outcome::none(),
    }
}

pub fn draw(frame: &mut Frame, area: Rect, local: &Scanner, state: &AppState) {
    let card = centered_popup(50, 12, area);

    let lines = match &local.phase {
        ScanPhase::Idle => vec![
            Line::from(""),
            Line::from("┌──────────────┐"),
            Line::from("│              │"),
            Line::from("│   point at   │"),
            Line::from("│  an animal   │"),
            Line::from("│              │"),
            Line::from("└──────────────┘"),
            Line::from(""),
            Line::from(Span::styled("Press enter to scan", Style::default().fg(Color::DarkGray))),
        ],
        ScanPhase::Scanning { remaining } => {
            let done = SCAN_TICKS.saturating_sub(*remaining) as usize;
            let bar = format!(
                "[{}{}]",
                "█".repeat(done),
                "░".repeat(SCAN_TICKS as usize - done)
            );
            vec![
                Line::from(""),
                Line::from(""),
                Line::from(Span::styled("Analysing…", Style::default().fg(Color::Cyan))),
                Line::from(""),
                Line::from(Span::styled(bar, Style::default().fg(Color::Green))),
            ]
        }
        ScanPhase::Identified { animal_id, confidence } => match animal(animal_id) {
            Some(found) => {
                let zone_name = zone(found.zone).map(|z| z.name).unwrap_or(found.zone);
                let saved = if state.is_saved(found.id) { "♥ Saved" } else { "s: save" };
                vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        format!("{} {}", found.glyph, found.name),
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        format!("{}% match · {}", confidence, zone_name),
                        Style::default().fg(Color::Gray),
                    )),
                    Line::from(""),
                    Line::from(found.fact),
                    Line::from(""),
                    Line::from(Span::styled(saved, Style::default().fg(Color::Red))),
                    Line::from(Span::styled("enter: scan again", Style::default().fg(Color::DarkGray))),
                ]
            }
            None => vec![Line::from("No match")],
        },
    };

    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Scan ")
                .border_style(Style::default().fg(Color::Green)),
        );
    frame.render_widget(body, card);
}
