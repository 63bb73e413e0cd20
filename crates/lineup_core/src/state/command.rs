use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

use crate::engine::{DragSource, DropTarget, IgnoreReason};
use crate::models::{LineupKey, Player, PlayerId, Position};

/// One resolved user event, as delivered by the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    RelocatePlayer {
        player_id: PlayerId,
        source: DragSource,
        target: DropTarget,
        target_index: usize,
    },
    RepositionPlayer {
        player_id: PlayerId,
        #[serde(default)]
        position: Position,
    },
    /// A drop inside the field diagram, in view-box coordinates.
    FieldDrop {
        player_id: PlayerId,
        x: f32,
        y: f32,
    },
    /// Commit a roster edit session with its already-cleaned player list.
    ApplyRosterEdit {
        players: Vec<Player>,
    },
    CreateLineup {
        title: String,
    },
    RequestDelete,
    CancelDelete,
    ConfirmDelete,
    SelectLineup {
        key: LineupKey,
    },
}

impl Command {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// JSON schema of the command wire format.
    pub fn json_schema() -> schemars::schema::RootSchema {
        schema_for!(Command)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::RelocatePlayer { .. } => "relocate_player",
            Command::RepositionPlayer { .. } => "reposition_player",
            Command::FieldDrop { .. } => "field_drop",
            Command::ApplyRosterEdit { .. } => "apply_roster_edit",
            Command::CreateLineup { .. } => "create_lineup",
            Command::RequestDelete => "request_delete",
            Command::CancelDelete => "cancel_delete",
            Command::ConfirmDelete => "confirm_delete",
            Command::SelectLineup { .. } => "select_lineup",
        }
    }
}

/// Result of a movement event. Ignored events leave the state exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum Outcome {
    Applied,
    Ignored(IgnoreReason),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

/// Two-step delete confirmation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DeletePrompt {
    #[default]
    Idle,
    PendingConfirm { key: LineupKey },
}
