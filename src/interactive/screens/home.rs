use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::formatting::{extract_first_name, format_distance};
use crate::models::fixtures::{animal, zone, ANIMALS, EVENTS};
use crate::models::VisitPhase;
use crate::store::AppState;

pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(4)])
        .split(area);

    draw_greeting(frame, chunks[0], state);

    let (title, lines) = match state.visit_phase {
        VisitPhase::Discovery => (" Discover ", discovery_lines(state)),
        VisitPhase::PreVisit => (" Getting ready ", pre_visit_lines(state)),
        VisitPhase::InPark => (" Today in the park ", in_park_lines(state)),
        VisitPhase::PostVisit => (" Your visit ", post_visit_lines(state)),
    };

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(body, chunks[1]);
}

fn draw_greeting(frame: &mut Frame, area: Rect, state: &AppState) {
    let user = &state.user;
    let lines = vec![
        Line::from(vec![
            Span::raw(format!(" {} ", user.avatar)),
            Span::styled(
                format!("Hi, {}!", extract_first_name(&user.name)),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", user.member_since), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(Span::styled(
            format!(
                " {} visits · {} animals seen · {} walked · {} saved",
                user.visits,
                user.animals_seen,
                format_distance(user.distance_walked),
                state.saved_animals.len()
            ),
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    ))
}

fn check_line(done: bool, text: String) -> Line<'static> {
    let (mark, color) = if done { ("✓", Color::Green) } else { ("○", Color::DarkGray) };
    Line::from(vec![
        Span::styled(format!(" {} ", mark), Style::default().fg(color)),
        Span::raw(text),
    ])
}

fn discovery_lines(state: &AppState) -> Vec<Line<'static>> {
    let mut lines = vec![heading("Featured animals")];
    for a in ANIMALS.iter().filter(|a| a.tags.contains(&"endangered")).take(3) {
        lines.push(Line::from(vec![
            Span::raw(format!(" {} ", a.glyph)),
            Span::styled(a.name.to_string(), Style::default().fg(Color::Yellow)),
            Span::styled(format!("  {}", a.fact), Style::default().fg(Color::Gray)),
        ]));
    }
    lines.push(Line::from(""));
    let hint = if state.active_plan.is_some() {
        "Your plan is ready. Press v when you are getting ready to go."
    } else {
        "Press 4 to build a visit plan around what you love."
    };
    lines.push(Line::from(Span::styled(hint.to_string(), Style::default().fg(Color::DarkGray))));
    lines
}

fn pre_visit_lines(state: &AppState) -> Vec<Line<'static>> {
    let mut lines = vec![heading("Checklist")];
    let plan_label = match &state.active_plan {
        Some(plan) => format!("Visit plan: {} stops, {}", plan.stops.len(), plan.total_duration),
        None => "Build a visit plan".to_string(),
    };
    lines.push(check_line(state.active_plan.is_some(), plan_label));
    lines.push(check_line(
        !state.saved_animals.is_empty(),
        format!("Saved animals: {}", state.saved_animals.len()),
    ));
    lines.push(check_line(false, "Buy tickets (press 5)".to_string()));
    lines.push(Line::from(""));
    lines.push(heading("Opening hours"));
    lines.push(Line::from(" 09:00 - 18:00, last entry 17:00"));
    lines
}

fn in_park_lines(state: &AppState) -> Vec<Line<'static>> {
    let mut lines = vec![heading("Next stop")];
    match state.active_plan.as_ref().and_then(|plan| plan.next_stop()) {
        Some(stop) => {
            lines.push(Line::from(vec![
                Span::raw(format!(" {} ", stop.glyph)),
                Span::styled(stop.name.clone(), Style::default().fg(Color::Yellow)),
                Span::styled(format!("  {} · {}", stop.time, stop.duration), Style::default().fg(Color::Gray)),
            ]));
            lines.push(Line::from(Span::styled(format!("   {}", stop.insight), Style::default().fg(Color::DarkGray))));
        }
        None if state.active_plan.is_some() => lines.push(Line::from(" Every stop done. Nice work!")),
        None => lines.push(Line::from(" No plan yet. Wander freely or press 4.")),
    }

    lines.push(Line::from(""));
    lines.push(heading("Happening today"));
    for event in EVENTS {
        let zone_name = zone(event.zone).map(|z| z.name).unwrap_or(event.zone);
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", event.time), Style::default().fg(Color::Cyan)),
            Span::raw(event.title.to_string()),
            Span::styled(format!("  {}", zone_name), Style::default().fg(Color::DarkGray)),
        ]));
    }

    if let Some(exhibit) = state.selected_exhibit.as_deref().and_then(animal) {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(" Heading to: {} {}", exhibit.glyph, exhibit.name),
            Style::default().fg(Color::Magenta),
        )));
    }
    lines
}

fn post_visit_lines(state: &AppState) -> Vec<Line<'static>> {
    let user = &state.user;
    let mut lines = vec![heading("Visit recap")];
    lines.push(Line::from(format!(" Visits so far: {}", user.visits)));
    lines.push(Line::from(format!(" Animals seen: {}", user.animals_seen)));
    lines.push(Line::from(format!(" Distance walked: {}", format_distance(user.distance_walked))));
    if let Some(plan) = &state.active_plan {
        lines.push(Line::from(format!(
            " Plan stops completed: {}/{}",
            plan.completed_count(),
            plan.stops.len()
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Thanks for visiting! Press v to start discovering your next trip.".to_string(),
        Style::default().fg(Color::DarkGray),
    )));
    lines
}
