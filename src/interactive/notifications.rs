use std::time::{Duration, Instant};

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::ui::themed;
use crate::constants::NOTIFICATION_TTL_SECS;
use crate::formatting::theme::SemanticColor;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
    pub dismissed: bool,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
            dismissed: false,
        }
    }

    /// Errors linger twice as long as other notices.
    fn ttl_secs(&self) -> u64 {
        match self.kind {
            NotificationKind::Success | NotificationKind::Info => NOTIFICATION_TTL_SECS,
            NotificationKind::Error => NOTIFICATION_TTL_SECS * 2,
        }
    }

    fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) >= Duration::from_secs(self.ttl_secs())
    }
}

/// Drop dismissed and expired notifications.
pub fn prune(notifications: &mut Vec<Notification>, now: Instant) {
    notifications.retain(|n| !n.dismissed && !n.is_expired(now));
}

pub fn visible_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.dismissed).count().min(3)
}

pub fn draw(frame: &mut Frame, area: Rect, notifications: &[Notification]) {
    if notifications.is_empty() || area.height == 0 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = notifications.iter()
        .filter(|n| !n.dismissed)
        .take(3)
        .map(|n| {
            let (icon, color) = match n.kind {
                NotificationKind::Success => ("✓", themed(SemanticColor::Success)),
                NotificationKind::Error => ("✗", themed(SemanticColor::Error)),
                NotificationKind::Info => ("ⓘ", themed(SemanticColor::Info)),
            };
            let remaining = n.ttl_secs().saturating_sub(n.created_at.elapsed().as_secs());
            Line::from(vec![
                Span::styled(format!(" {} ", icon), Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::styled(n.message.clone(), Style::default().fg(color)),
                Span::styled(format!("  [{}s]", remaining), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
