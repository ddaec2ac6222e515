use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::{step_cursor, Outcome};
use crate::formatting::{format_distance, format_minutes};
use crate::interactive::keys::Action;
use crate::interactive::notifications::NotificationKind;
use crate::models::fixtures::{Animal, ANIMALS, EVENTS, INTEREST_TAGS};
use crate::models::{ActivePlan, PlanStop};
use crate::store::{AppState, Store};

const START_MINUTES: u32 = 10 * 60;
const WALK_MINUTES: u32 = 10;
const KM_PER_STOP: f64 = 0.35;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pace {
    Relaxed,
    #[default]
    Balanced,
    Explorer,
}

impl Pace {
    pub const ALL: [Pace; 3] = [Pace::Relaxed, Pace::Balanced, Pace::Explorer];

    pub fn label(self) -> &'static str {
        match self {
            Pace::Relaxed => "Relaxed: fewer stops, longer stays",
            Pace::Balanced => "Balanced",
            Pace::Explorer => "Explorer: see as much as possible",
        }
    }

    pub fn stop_count(self) -> usize {
        match self {
            Pace::Relaxed => 3,
            Pace::Balanced => 5,
            Pace::Explorer => 7,
        }
    }

    pub fn minutes_per_stop(self) -> u32 {
        match self {
            Pace::Relaxed => 40,
            Pace::Balanced => 30,
            Pace::Explorer => 20,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlanStep {
    #[default]
    Overview,
    Interests,
    Pace,
    Review,
}

/// Plan builder wizard plus the cursor over the active plan's stops.
#[derive(Debug, Default)]
pub struct PlanBuilder {
    pub step: PlanStep,
    pub cursor: usize,
    pub interests: Vec<String>,
    pub pace: Pace,
}

impl PlanBuilder {
    fn begin(&mut self, profile_interests: &[String]) {
        self.step = PlanStep::Interests;
        self.cursor = 0;
        self.interests = profile_interests.to_vec();
    }

    fn toggle_interest(&mut self, id: &str) {
        if let Some(pos) = self.interests.iter().position(|i| i == id) {
            self.interests.remove(pos);
        } else {
            self.interests.push(id.to_string());
        }
    }
}

/// Animals matching any interest, in park order; every animal when none match.
pub fn pick_animals(interests: &[String]) -> Vec<&'static Animal> {
    let matching: Vec<&'static Animal> = ANIMALS
        .iter()
        .filter(|a| a.tags.iter().any(|tag| interests.iter().any(|i| i == tag)))
        .collect();

    if matching.is_empty() {
        ANIMALS.iter().collect()
    } else {
        matching
    }
}

/// Build a scripted plan starting at 10:00.
pub fn build_plan(interests: &[String], pace: Pace, date: &str) -> ActivePlan {
    let per_stop = pace.minutes_per_stop();

    let stops: Vec<PlanStop> = pick_animals(interests)
        .into_iter()
        .take(pace.stop_count())
        .enumerate()
        .map(|(i, a)| {
            let at = START_MINUTES + i as u32 * (per_stop + WALK_MINUTES);
            let insight = EVENTS
                .iter()
                .find(|e| e.zone == a.zone)
                .map(|e| format!("{} at {} nearby", e.title, e.time))
                .unwrap_or_else(|| a.fact.to_string());
            PlanStop {
                id: a.id.to_string(),
                name: a.name.to_string(),
                glyph: a.glyph.to_string(),
                time: format!("{:02}:{:02}", (at / 60) % 24, at % 60),
                duration: format_minutes(per_stop),
                insight,
                completed: false,
            }
        })
        .collect();

    let count = stops.len() as u32;
    let total_minutes = count * per_stop + count.saturating_sub(1) * WALK_MINUTES;

    ActivePlan {
        date: date.to_string(),
        total_duration: format_minutes(total_minutes),
        total_distance: format_distance(count as f64 * KM_PER_STOP),
        stops,
    }
}

pub fn handle(local: &mut PlanBuilder, store: &mut Store, action: Action, date: &str) -> Outcome {
    match local.step {
        PlanStep::Overview => handle_overview(local, store, action),
        PlanStep::Interests => {
            match action {
                Action::MoveDown => local.cursor = step_cursor(local.cursor, INTEREST_TAGS.len(), true),
                Action::MoveUp => local.cursor = step_cursor(local.cursor, INTEREST_TAGS.len(), false),
                Action::Toggle => {
                    if let Some(tag) = INTEREST_TAGS.get(local.cursor) {
                        local.toggle_interest(tag.id);
                    }
                }
                Action::Confirm => {
                    local.step = PlanStep::Pace;
                    local.cursor = Pace::ALL.iter().position(|p| *p == local.pace).unwrap_or(0);
                }
                Action::Back => {
                    local.step = PlanStep::Overview;
                    local.cursor = 0;
                }
                _ => {}
            }
            Outcome::none()
        }
        PlanStep::Pace => {
            match action {
                Action::MoveDown => local.cursor = step_cursor(local.cursor, Pace::ALL.len(), true),
                Action::MoveUp => local.cursor = step_cursor(local.cursor, Pace::ALL.len(), false),
                Action::Confirm | Action::Toggle => {
                    local.pace = Pace::ALL[local.cursor.min(Pace::ALL.len() - 1)];
                    local.step = PlanStep::Review;
                }
                Action::Back => {
                    local.step = PlanStep::Interests;
                    local.cursor = 0;
                }
                _ => {}
            }
            Outcome::none()
        }
        PlanStep::Review => match action {
            Action::Confirm => {
                let plan = build_plan(&local.interests, local.pace, date);
                let count = plan.stops.len();
                store.set_active_plan(Some(plan));
                local.step = PlanStep::Overview;
                local.cursor = 0;
                Outcome::notice(NotificationKind::Success, format!("Plan ready: {} stops", count))
            }
            Action::Back => {
                local.step = PlanStep::Pace;
                Outcome::none()
            }
            _ => Outcome::none(),
        },
    }
}

fn handle_overview(local: &mut PlanBuilder, store: &mut Store, action: Action) -> Outcome {
    let stop_count = store.state().active_plan.as_ref().map(|p| p.stops.len()).unwrap_or(0);

    match action {
        Action::MoveDown => local.cursor = step_cursor(local.cursor, stop_count, true),
        Action::MoveUp => local.cursor = step_cursor(local.cursor, stop_count, false),
        Action::Toggle => {
            let toggled = store.state().active_plan.as_ref().and_then(|plan| {
                plan.stops
                    .get(local.cursor)
                    .map(|stop| plan.with_stop_toggled(&stop.id))
            });
            if let Some(plan) = toggled {
                store.set_active_plan(Some(plan));
            }
        }
        Action::NewPlan => {
            let interests = store.state().user.interests.clone();
            local.begin(&interests);
        }
        Action::Confirm if stop_count == 0 => {
            let interests = store.state().user.interests.clone();
            local.begin(&interests);
        }
        Action::ClearPlan if stop_count > 0 => {
            store.set_active_plan(None);
            local.cursor = 0;
        }
        _ => {}
    }
    Outcome::none()
}

pub fn draw(frame: &mut Frame, area: Rect, local: &PlanBuilder, state: &AppState) {
    let (title, lines) = match local.step {
        PlanStep::Overview => (" My plan ", overview_lines(local, state)),
        PlanStep::Interests => (" New plan · 1/3 interests ", interest_lines(local)),
        PlanStep::Pace => (" New plan · 2/3 pace ", pace_lines(local)),
        PlanStep::Review => (" New plan · 3/3 review ", review_lines(local)),
    };

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(body, area);
}

fn cursor_style(selected: bool) -> Style {
    if selected {
        Style::default().bg(Color::Rgb(40, 60, 40)).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn overview_lines(local: &PlanBuilder, state: &AppState) -> Vec<Line<'static>> {
    let Some(plan) = &state.active_plan else {
        return vec![
            Line::from(""),
            Line::from(" No plan yet."),
            Line::from(Span::styled(
                " Press enter or n to build one around your interests.",
                Style::default().fg(Color::DarkGray),
            )),
        ];
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {} · {} · {}", plan.date, plan.total_duration, plan.total_distance),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];
    for (i, stop) in plan.stops.iter().enumerate() {
        let check = if stop.completed { "✓" } else { "○" };
        lines.push(
            Line::from(vec![
                Span::styled(format!(" {} ", check), Style::default().fg(Color::Green)),
                Span::styled(format!("{} ", stop.time), Style::default().fg(Color::Cyan)),
                Span::raw(format!("{} {}", stop.glyph, stop.name)),
                Span::styled(format!("  {}", stop.duration), Style::default().fg(Color::DarkGray)),
            ])
            .style(cursor_style(i == local.cursor)),
        );
        lines.push(Line::from(Span::styled(
            format!("     {}", stop.insight),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines
}

fn interest_lines(local: &PlanBuilder) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(" What should the day focus on?"), Line::from("")];
    for (i, tag) in INTEREST_TAGS.iter().enumerate() {
        let marker = if local.interests.iter().any(|id| id == tag.id) { "[x]" } else { "[ ]" };
        lines.push(Line::from(format!(" {} {}", marker, tag.label)).style(cursor_style(i == local.cursor)));
    }
    lines
}

fn pace_lines(local: &PlanBuilder) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(" How do you like to explore?"), Line::from("")];
    for (i, pace) in Pace::ALL.iter().enumerate() {
        lines.push(
            Line::from(format!(" {} stops · {}", pace.stop_count(), pace.label()))
                .style(cursor_style(i == local.cursor)),
        );
    }
    lines
}

fn review_lines(local: &PlanBuilder) -> Vec<Line<'static>> {
    let preview = build_plan(&local.interests, local.pace, "Preview");
    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {} stops · {} · {}", preview.stops.len(), preview.total_duration, preview.total_distance),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];
    for stop in &preview.stops {
        lines.push(Line::from(format!(" {} {} {}", stop.time, stop.glyph, stop.name)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " enter: save plan   esc: back",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}
