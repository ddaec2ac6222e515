use colored::*;

use super::theme::helpers::{phase_color, saved_symbol};
use super::theme::{SemanticColor, ThemedColorize};
use super::utils::{format_distance, truncate};
use crate::error::ZooResult;
use crate::models::fixtures::{animal, ANIMALS};
use crate::models::VisitPhase;
use crate::store::AppState;

/// Render a session snapshot for `zoo state`.
pub fn format_state(state: &AppState, format: &str) -> ZooResult<String> {
    match format {
        "json" => Ok(serde_json::to_string_pretty(state)?),
        _ => Ok(format_state_text(state)),
    }
}

pub fn format_state_text(state: &AppState) -> String {
    let user = &state.user;
    let mut out = Vec::new();

    out.push(format!(
        "{} {}  {}",
        user.avatar,
        user.name.with_theme(SemanticColor::User).bold(),
        user.member_since.with_theme(SemanticColor::Muted)
    ));
    out.push(format!(
        "{} {}   {} {}",
        "Onboarded:".with_theme(SemanticColor::Secondary),
        if state.onboarded { "yes".green() } else { "no".yellow() },
        "Phase:".with_theme(SemanticColor::Secondary),
        format_phase_cycle(state.visit_phase)
    ));
    out.push(format!(
        "{} {}   {} {}   {} {}",
        "Visits:".with_theme(SemanticColor::Secondary),
        user.visits,
        "Animals seen:".with_theme(SemanticColor::Secondary),
        user.animals_seen,
        "Walked:".with_theme(SemanticColor::Secondary),
        format_distance(user.distance_walked)
    ));
    out.push(format!(
        "{} {} {}",
        "Group:".with_theme(SemanticColor::Secondary),
        user.group_type.label(),
        if user.family_members.is_empty() {
            String::new()
        } else {
            let members: Vec<String> = user
                .family_members
                .iter()
                .map(|m| format!("{} ({})", m.name, m.age))
                .collect();
            format!("with {}", members.join(", ")).dimmed().to_string()
        }
    ));
    if !user.interests.is_empty() {
        out.push(format!(
            "{} {}",
            "Interests:".with_theme(SemanticColor::Secondary),
            user.interests.join(", ")
        ));
    }

    out.push(String::new());
    out.push("Saved animals".with_theme(SemanticColor::Header).bold().to_string());
    if state.saved_animals.is_empty() {
        out.push("  None yet.".dimmed().to_string());
    }
    for id in &state.saved_animals {
        let (glyph, name) = animal(id)
            .map(|a| (a.glyph, a.name.to_string()))
            .unwrap_or(("•", id.clone()));
        out.push(format!(
            "  {} {} {}",
            saved_symbol(true).with_theme(SemanticColor::Saved),
            glyph,
            name.with_theme(SemanticColor::Animal)
        ));
    }

    out.push(String::new());
    match &state.active_plan {
        Some(plan) => {
            out.push(format!(
                "{} {} ({}, {})",
                "Plan for".with_theme(SemanticColor::Header).bold(),
                plan.date,
                plan.total_duration,
                plan.total_distance
            ));
            for stop in &plan.stops {
                let check = if stop.completed { "✓".green() } else { "○".normal() };
                out.push(format!(
                    "  {} {} {} {}",
                    check,
                    stop.time.with_theme(SemanticColor::Muted),
                    stop.name,
                    truncate(&stop.insight, 48).dimmed()
                ));
            }
        }
        None => out.push("No visit plan yet.".dimmed().to_string()),
    }

    if let Some(title) = &state.audio.title {
        let status = if state.audio.playing { "playing" } else { "paused" };
        out.push(format!("♪ {} ({})", title, status));
    }

    out.push(String::new());
    out.push(format!("{} animals in the park today.", ANIMALS.len()).dimmed().to_string());

    out.join("\n")
}

/// `discovery → [pre-visit] → in-park → post-visit` with the current phase highlighted.
pub fn format_phase_cycle(current: VisitPhase) -> String {
    VisitPhase::ALL
        .iter()
        .map(|phase| {
            if *phase == current {
                format!("[{}]", phase.as_str())
                    .with_theme(phase_color(*phase))
                    .bold()
                    .to_string()
            } else {
                phase.as_str().dimmed().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" → ")
}
