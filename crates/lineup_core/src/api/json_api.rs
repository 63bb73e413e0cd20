use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::engine::conflicting_positions;
use crate::error::{LineupError, Result};
use crate::models::{Lineup, LineupKey, Player, Position, RosterPlayer};
use crate::state::{AppState, Command, DeletePrompt, Outcome};

pub const SCHEMA_VERSION: u8 = 1;

/// One lineup as the presentation layer renders it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LineupView {
    pub key: LineupKey,
    #[serde(flatten)]
    pub lineup: Lineup,
    /// Fielding positions held by more than one starter.
    pub conflicts: Vec<Position>,
}

impl LineupView {
    pub fn new(key: &LineupKey, lineup: &Lineup) -> Self {
        Self {
            key: key.clone(),
            lineup: lineup.clone(),
            conflicts: conflicting_positions(lineup).into_iter().map(Position::Field).collect(),
        }
    }
}

/// Everything needed to re-render after an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StateSnapshot {
    pub selected: Option<LineupKey>,
    pub delete_prompt: DeletePrompt,
    pub roster: Vec<Player>,
    /// Selected lineup's roster status; empty when nothing is selected.
    pub roster_panel: Vec<RosterPlayer>,
    /// In display order.
    pub lineups: Vec<LineupView>,
}

impl StateSnapshot {
    pub fn capture(state: &AppState) -> Self {
        Self {
            selected: state.selected_key().cloned(),
            delete_prompt: state.delete_prompt().clone(),
            roster: state.roster().players().to_vec(),
            roster_panel: state.roster_panel().to_vec(),
            lineups: state
                .lineups()
                .iter()
                .map(|entry| LineupView::new(&entry.key, &entry.lineup))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CommandError {
    pub message: String,
    /// Must be shown to the user rather than dropped.
    pub user_facing: bool,
}

impl From<&LineupError> for CommandError {
    fn from(error: &LineupError) -> Self {
        Self { message: error.to_string(), user_facing: error.is_user_facing() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CommandResponse {
    pub schema_version: u8,
    pub command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CommandError>,
    pub state: StateSnapshot,
}

/// Run one command against `state`. Refused lifecycle operations are reported inside
/// the response next to the unchanged state.
pub fn execute_command(state: &mut AppState, command: Command) -> CommandResponse {
    let name = command.name().to_string();
    let (outcome, error) = match state.dispatch(command) {
        Ok(outcome) => (Some(outcome), None),
        Err(e) => {
            log::debug!("{name}: {e}");
            (None, Some(CommandError::from(&e)))
        }
    };

    CommandResponse {
        schema_version: SCHEMA_VERSION,
        command: name,
        outcome,
        error,
        state: StateSnapshot::capture(state),
    }
}

/// JSON entry point for the presentation layer. Only a malformed request is an `Err`.
pub fn execute_command_json(state: &mut AppState, request_json: &str) -> Result<String> {
    let command = Command::from_json(request_json)?;
    let response = execute_command(state, command);
    Ok(serde_json::to_string(&response)?)
}

pub fn snapshot_json(state: &AppState) -> Result<String> {
    Ok(serde_json::to_string(&StateSnapshot::capture(state))?)
}
