//! # lineup_core - Softball Lineup Consistency Engine
//!
//! Keeps a team's master roster and any number of game lineups (ten starting slots plus
//! an ordered bench each) consistent while players are dragged between roster, bench and
//! starting slots, repositioned on the field, and added, renamed or removed.
//!
//! ## Features
//! - Whole-value updates: every event yields a replacement lineup, never a partial one
//! - Per-lineup roster status always recomputed from starting + bench
//! - Roster edits cascade into every lineup at once
//! - JSON command API for a presentation layer

pub mod api;
pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod field;
pub mod models;
pub mod roster_edit;
pub mod state;

// Re-export main API functions
pub use api::{execute_command, execute_command_json, snapshot_json, StateSnapshot};
pub use error::{LineupError, Result};

// Re-export the engines
pub use engine::{
    apply_roster_edit, conflicting_positions, relocate_player, reposition_player, DragSource,
    DropTarget, IgnoreReason, MoveResult,
};
pub use field::{closest_position, resolve_field_drop};

// Re-export models and state
pub use config::{config_from_env, load_config, LineupConfig, SeedData};
pub use models::{
    FieldPosition, Lineup, LineupBook, LineupKey, LineupPlayer, Player, PlayerId, Position,
    Roster, RosterPlayer,
};
pub use roster_edit::RosterDraft;
pub use state::{AppState, Command, DeletePrompt, Outcome};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
