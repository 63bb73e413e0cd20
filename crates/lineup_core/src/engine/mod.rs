//! # Lineup engines
//!
//! Pure functions from the current lineup (and roster) to a replacement lineup.
//! Nothing here mutates in place: callers swap the returned value into the store,
//! so a half-applied move is never observable.
//!
//! - [`movement`]: drag-and-drop relocation and fielding position changes
//! - [`sync`]: propagating a committed roster edit into every lineup

pub mod movement;
pub mod sync;

pub use movement::{
    conflicting_positions, relocate_player, reposition_player, DragSource, DropTarget,
};
pub use sync::{apply_roster_edit, sync_lineup};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Lineup;

/// Why an event left the state untouched.
///
/// Drag-and-drop can race against state changes (stale ids, a slot that was just
/// vacated), so these are ordinary outcomes rather than errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// Drops from the field diagram only ever reposition.
    FieldSource,
    PlayerNotFound,
    NotInStarting,
    SlotOutOfRange,
    PositionUnchanged,
    /// A DP occupant dropped on a fielding spot, or a fielder dropped on DP.
    DesignatedPlayerMismatch,
    /// Roster drags are only allowed for players not yet in the lineup.
    AlreadyAssigned,
    NoLineupSelected,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            IgnoreReason::FieldSource => "drop originated from the field diagram",
            IgnoreReason::PlayerNotFound => "player not found in the declared source",
            IgnoreReason::NotInStarting => "player is not in the starting lineup",
            IgnoreReason::SlotOutOfRange => "target slot out of range",
            IgnoreReason::PositionUnchanged => "position unchanged",
            IgnoreReason::DesignatedPlayerMismatch => "DP and fielding positions do not mix",
            IgnoreReason::AlreadyAssigned => "player already assigned in this lineup",
            IgnoreReason::NoLineupSelected => "no lineup selected",
        };
        f.write_str(text)
    }
}

/// Replacement lineup, or the reason nothing changed.
pub type MoveResult = std::result::Result<Lineup, IgnoreReason>;
