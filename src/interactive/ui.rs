use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::ZooApp;
use super::keys::hints;
use super::layout::app_layout;
use super::notifications;
use super::routes::{Route, MAIN_ROUTES};
use super::screens::{assistant, home, map, onboarding, plan, profile, scan, tickets};
use crate::constants::APP_NAME;
use crate::error::ZooResult;
use crate::formatting::theme::helpers::phase_color;
use crate::formatting::theme::{theme_color, SemanticColor};
use crate::formatting::truncate;
use crate::store::AppState;

/// Render the whole app. Fails when the store is not provisioned.
pub fn draw(frame: &mut Frame, app: &ZooApp) -> ZooResult<()> {
    let state = app.store()?.state();
    let route = app.current_route()?;
    let area = frame.size();

    if route.is_onboarding() {
        let [main, footer] = split_footer(area);
        onboarding::draw(frame, main, route, &app.onboarding, state);
        draw_footer(frame, footer, route);
        return Ok(());
    }

    let layout = app_layout(area, notifications::visible_count(&app.notifications));

    draw_header(frame, layout.header, route, state);

    match route {
        Route::Home => home::draw(frame, layout.main, state),
        Route::Map => map::draw(frame, layout.main, &app.map, state),
        Route::Scan => scan::draw(frame, layout.main, &app.scanner, state),
        Route::Plan => plan::draw(frame, layout.main, &app.planner, state),
        Route::Tickets => tickets::draw(frame, layout.main, &app.tickets),
        Route::Profile => profile::draw(frame, layout.main, &app.profile, state),
        Route::Splash | Route::Welcome | Route::Preferences => {}
    }

    notifications::draw(frame, layout.notifications, &app.notifications);
    draw_footer(frame, layout.footer, route);

    if state.assistant_open {
        assistant::draw(frame, area, state);
    }
    Ok(())
}

fn split_footer(area: Rect) -> [Rect; 2] {
    let footer_height = area.height.min(1);
    let main = Rect::new(area.x, area.y, area.width, area.height - footer_height);
    let footer = Rect::new(area.x, area.y + main.height, area.width, footer_height);
    [main, footer]
}

/// The terminal color for a semantic theme slot, so the TUI and the printed
/// output agree.
pub fn themed(semantic: SemanticColor) -> Color {
    to_ratatui(theme_color(semantic))
}

pub fn to_ratatui(color: colored::Color) -> Color {
    use colored::Color as C;
    match color {
        C::Black => Color::Black,
        C::Red => Color::Red,
        C::Green => Color::Green,
        C::Yellow => Color::Yellow,
        C::Blue => Color::Blue,
        C::Magenta => Color::Magenta,
        C::Cyan => Color::Cyan,
        C::White => Color::Gray,
        C::BrightBlack => Color::DarkGray,
        C::BrightRed => Color::LightRed,
        C::BrightGreen => Color::LightGreen,
        C::BrightYellow => Color::LightYellow,
        C::BrightBlue => Color::LightBlue,
        C::BrightMagenta => Color::LightMagenta,
        C::BrightCyan => Color::LightCyan,
        C::BrightWhite => Color::White,
        C::TrueColor { r, g, b } => Color::Rgb(r, g, b),
    }
}

fn draw_header(frame: &mut Frame, area: Rect, route: Route, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", APP_NAME))
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = Vec::new();
    for (i, tab) in MAIN_ROUTES.iter().enumerate() {
        let style = if *tab == route {
            Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} {} ", i + 1, tab.title()), style));
    }

    let mut right = vec![Span::styled(
        format!(" {} ", state.visit_phase.title()),
        Style::default().fg(Color::Black).bg(themed(phase_color(state.visit_phase))),
    )];
    if state.audio.playing {
        if let Some(title) = &state.audio.title {
            right.insert(
                0,
                Span::styled(format!("♪ {}  ", truncate(title, 24)), Style::default().fg(Color::Cyan)),
            );
        }
    }

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let right_len: usize = right.iter().map(|s| s.content.chars().count()).sum();
    let pad = (inner.width as usize).saturating_sub(left_len + right_len);
    spans.push(Span::raw(" ".repeat(pad)));
    spans.extend(right);

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

fn draw_footer(frame: &mut Frame, area: Rect, route: Route) {
    if area.height == 0 {
        return;
    }
    let mut spans = Vec::new();
    for (key, label) in hints(route) {
        spans.push(Span::styled(format!(" {}", key), Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(format!(" {} ", label), Style::default().fg(Color::DarkGray)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
