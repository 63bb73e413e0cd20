//! Lineup CLI Library
//!
//! Script runner and plain-text rendering on top of `lineup_core`.
//! A script is a JSON array of commands, applied in order to one state.

use anyhow::{Context, Result};
use lineup_core::api::{execute_command, CommandResponse};
use lineup_core::{
    conflicting_positions, config_from_env, load_config, AppState, Command, Lineup, LineupKey,
    Outcome, RosterPlayer,
};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Initial state from an explicit config file, else from `LINEUP_CONFIG_PATH`.
pub fn load_state(config_path: Option<&Path>) -> Result<AppState> {
    let config = match config_path {
        Some(path) => {
            let path = path.to_str().context("config path is not valid UTF-8")?;
            load_config(path)?
        }
        None => config_from_env()?,
    };
    Ok(AppState::from_config(&config))
}

pub fn load_script(path: &Path) -> Result<Vec<Command>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read script file: {}", path.display()))?;
    let commands: Vec<Command> = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse script JSON: {}", path.display()))?;
    log::info!("loaded {} commands from {}", commands.len(), path.display());
    Ok(commands)
}

pub fn run_script(state: &mut AppState, commands: Vec<Command>) -> Vec<CommandResponse> {
    commands.into_iter().map(|command| execute_command(state, command)).collect()
}

/// One line per response: applied, ignored with its reason, or refused with the message.
pub fn summarize(step: usize, response: &CommandResponse) -> String {
    let status = match (&response.outcome, &response.error) {
        (Some(Outcome::Applied), _) => "applied".to_string(),
        (Some(Outcome::Ignored(reason)), _) => format!("ignored ({reason})"),
        (None, Some(error)) if error.user_facing => format!("REFUSED: {}", error.message),
        (None, Some(error)) => format!("rejected: {}", error.message),
        (None, None) => "no result".to_string(),
    };
    format!("#{:<3} {:<18} {}", step + 1, response.command, status)
}

pub fn render_lineup(key: &LineupKey, lineup: &Lineup, selected: bool) -> String {
    let conflicts = conflicting_positions(lineup);
    let mut out = String::new();

    let marker = if selected { " *" } else { "" };
    let _ = writeln!(out, "== {} [{}]{}", lineup.title, key, marker);
    let _ = writeln!(out, "Starting");
    for (index, slot) in lineup.starting.iter().enumerate() {
        let order = if index < 9 { format!("{}.", index + 1) } else { "FP".to_string() };
        match slot {
            Some(starter) => {
                let position = starter.position();
                let flag = match position.field_position() {
                    Some(field) if conflicts.contains(&field) => "!",
                    _ => " ",
                };
                let _ = writeln!(
                    out,
                    "  {:>3} {:<3}{} {} (No.{})",
                    order,
                    position.label(),
                    flag,
                    starter.player.name,
                    starter.player.uniform_number
                );
            }
            None => {
                let _ = writeln!(out, "  {:>3} (empty)", order);
            }
        }
    }

    if !conflicts.is_empty() {
        let names: Vec<&str> = conflicts.iter().map(|field| field.name()).collect();
        let _ = writeln!(out, "Conflicts: {}", names.join(", "));
    }

    let _ = writeln!(out, "Bench ({})", lineup.bench.len());
    for player in &lineup.bench {
        let _ = writeln!(out, "  No.{:<4} {}", player.uniform_number, player.name);
    }
    out
}

pub fn render_roster_panel(panel: &[RosterPlayer]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Roster ({})", panel.len());
    for entry in panel {
        let mark = if entry.is_playing { "x" } else { " " };
        let _ = writeln!(
            out,
            "  [{}] No.{:<4} {}",
            mark, entry.player.uniform_number, entry.player.name
        );
    }
    out
}

pub fn render_state(state: &AppState) -> String {
    if state.lineups().is_empty() {
        return "No lineups. Create one to get started.\n".to_string();
    }

    let mut out = String::new();
    for entry in state.lineups() {
        let selected = state.selected_key() == Some(&entry.key);
        out.push_str(&render_lineup(&entry.key, &entry.lineup, selected));
        out.push('\n');
    }
    out.push_str(&render_roster_panel(state.roster_panel()));
    out
}
