use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::interactive::layout::centered_popup;
use crate::models::fixtures::animal;
use crate::models::VisitPhase;
use crate::store::AppState;

/// Scripted suggestions for the current session.
pub fn tips(state: &AppState) -> Vec<String> {
    let mut tips: Vec<String> = match state.visit_phase {
        VisitPhase::Discovery => vec![
            "Weekday mornings are the quietest time to visit.".to_string(),
            "Save animals you love and I'll put them in your plan.".to_string(),
        ],
        VisitPhase::PreVisit => vec![
            "Bring a refillable bottle; water stations are by every zone gate.".to_string(),
            "Penguin feeding is at 10:30, arrive early for a front spot.".to_string(),
        ],
        VisitPhase::InPark => {
            let mut in_park = vec!["The Rainforest Dome is busy right now, try the Polar Coast.".to_string()];
            if let Some(stop) = state.active_plan.as_ref().and_then(|p| p.next_stop()) {
                in_park.push(format!("Next on your plan: {} at {}.", stop.name, stop.time));
            }
            in_park
        }
        VisitPhase::PostVisit => vec![
            format!("You've seen {} animals so far. Come back for the rest!", state.user.animals_seen),
            "Share your favourite moment from today with the keepers.".to_string(),
        ],
    };

    if let Some(exhibit) = state.selected_exhibit.as_deref().and_then(animal) {
        tips.push(format!("About the {}: {}", exhibit.name, exhibit.fact));
    }
    tips
}

pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let popup = centered_popup(58, 12, area);
    frame.render_widget(Clear, popup);

    let mut lines = vec![Line::from(Span::styled(
        format!("Hi {}, here's what I'd suggest:", state.user.name),
        Style::default().fg(Color::White),
    ))];
    lines.push(Line::from(""));
    for tip in tips(state) {
        lines.push(Line::from(vec![
            Span::styled("• ", Style::default().fg(Color::Green)),
            Span::raw(tip),
        ]));
    }

    let assistant = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Zoo assistant (esc to close) ")
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(assistant, popup);
}
