use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{step_cursor, Outcome};
use crate::formatting::format_price;
use crate::formatting::theme::SemanticColor;
use crate::interactive::keys::Action;
use crate::interactive::notifications::NotificationKind;
use crate::interactive::ui::themed;
use crate::models::fixtures::TICKET_TYPES;
use crate::models::VisitPhase;
use crate::store::Store;

const MAX_PER_TYPE: u32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutStep {
    Select,
    Payment,
    Confirmed { reference: String, total_cents: u32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub label: &'static str,
    pub quantity: u32,
    pub subtotal_cents: u32,
}

/// Quantities are parallel to `TICKET_TYPES`.
#[derive(Debug)]
pub struct TicketCart {
    pub quantities: Vec<u32>,
    pub cursor: usize,
    pub step: CheckoutStep,
}

impl Default for TicketCart {
    fn default() -> Self {
        Self {
            quantities: vec![0; TICKET_TYPES.len()],
            cursor: 0,
            step: CheckoutStep::Select,
        }
    }
}

impl TicketCart {
    pub fn increment(&mut self, index: usize) {
        if let Some(quantity) = self.quantities.get_mut(index) {
            *quantity = (*quantity + 1).min(MAX_PER_TYPE);
        }
    }

    pub fn decrement(&mut self, index: usize) {
        if let Some(quantity) = self.quantities.get_mut(index) {
            *quantity = quantity.saturating_sub(1);
        }
    }

    pub fn line_items(&self) -> Vec<LineItem> {
        TICKET_TYPES
            .iter()
            .zip(&self.quantities)
            .filter(|(_, quantity)| **quantity > 0)
            .map(|(ticket, quantity)| LineItem {
                label: ticket.label,
                quantity: *quantity,
                subtotal_cents: ticket.price_cents * quantity,
            })
            .collect()
    }

    pub fn total_cents(&self) -> u32 {
        self.line_items().iter().map(|item| item.subtotal_cents).sum()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

pub fn handle(local: &mut TicketCart, store: &mut Store, action: Action) -> Outcome {
    match local.step.clone() {
        CheckoutStep::Select => match action {
            Action::MoveDown => {
                local.cursor = step_cursor(local.cursor, TICKET_TYPES.len(), true);
                Outcome::none()
            }
            Action::MoveUp => {
                local.cursor = step_cursor(local.cursor, TICKET_TYPES.len(), false);
                Outcome::none()
            }
            Action::Increment => {
                local.increment(local.cursor);
                Outcome::none()
            }
            Action::Decrement => {
                local.decrement(local.cursor);
                Outcome::none()
            }
            Action::Confirm if local.total_cents() == 0 => {
                Outcome::notice(NotificationKind::Error, "Add at least one ticket first")
            }
            Action::Confirm => {
                local.step = CheckoutStep::Payment;
                Outcome::none()
            }
            _ => Outcome::none(),
        },
        CheckoutStep::Payment => match action {
            Action::Confirm => {
                let total_cents = local.total_cents();
                let reference = format!("ZOO-{}", Local::now().format("%y%m%d-%H%M%S"));
                local.step = CheckoutStep::Confirmed { reference, total_cents };
                if store.state().visit_phase == VisitPhase::Discovery {
                    store.set_visit_phase(VisitPhase::PreVisit);
                }
                Outcome::notice(
                    NotificationKind::Success,
                    format!("Tickets booked: {}", format_price(total_cents)),
                )
            }
            Action::Back => {
                local.step = CheckoutStep::Select;
                Outcome::none()
            }
            _ => Outcome::none(),
        },
        CheckoutStep::Confirmed { .. } => match action {
            Action::Confirm | Action::Back => {
                local.clear();
                Outcome::none()
            }
            _ => Outcome::none(),
        },
    }
}

pub fn draw(frame: &mut Frame, area: Rect, local: &TicketCart) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(5)])
        .split(area);

    let (title, lines) = match &local.step {
        CheckoutStep::Select => (" Tickets ", select_lines(local)),
        CheckoutStep::Payment => (" Payment ", payment_lines(local)),
        CheckoutStep::Confirmed { reference, total_cents } => {
            (" Booked ", confirmed_lines(reference, *total_cents))
        }
    };

    let body = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(body, chunks[0]);

    let total = Paragraph::new(vec![
        Line::from(Span::styled(
            format!(" {} item(s)", local.line_items().iter().map(|i| i.quantity).sum::<u32>()),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format!(" Total {}", format_price(local.total_cents())),
            Style::default().fg(themed(SemanticColor::Price)).add_modifier(Modifier::BOLD),
        )),
    ])
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::DarkGray)));
    frame.render_widget(total, chunks[1]);
}

fn select_lines(local: &TicketCart) -> Vec<Line<'static>> {
    TICKET_TYPES
        .iter()
        .zip(&local.quantities)
        .enumerate()
        .map(|(i, (ticket, quantity))| {
            let style = if i == local.cursor {
                Style::default().bg(Color::Rgb(40, 60, 40)).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::raw(format!(" {:<20}", ticket.label)),
                Span::styled(
                    format!("{:>8}", format_price(ticket.price_cents)),
                    Style::default().fg(themed(SemanticColor::Price)),
                ),
                Span::styled(format!("   - {:>2} +", quantity), Style::default().fg(Color::Cyan)),
            ])
            .style(style)
        })
        .collect()
}

fn payment_lines(local: &TicketCart) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = local
        .line_items()
        .into_iter()
        .map(|item| {
            Line::from(format!(
                " {} x {:<18} {:>9}",
                item.quantity,
                item.label,
                format_price(item.subtotal_cents)
            ))
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(" Card •••• 4242 (demo, nothing is charged)"));
    lines.push(Line::from(Span::styled(
        " enter: pay   esc: back",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

fn confirmed_lines(reference: &str, total_cents: u32) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            " ✓ You're all set!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(" Booking reference {}", reference)),
        Line::from(format!(" Paid {}", format_price(total_cents))),
        Line::from(""),
        Line::from(Span::styled(
            " Show this screen at the gate. enter: done",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}
