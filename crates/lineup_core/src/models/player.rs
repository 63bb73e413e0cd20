use super::position::Position;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque, stable player identity. Never reused once issued.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random id for a player added during a roster edit.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Identity record shared by the roster, the bench and the starting slots.
///
/// Bench and starting entries hold copies of the display fields, so a rename only reaches
/// them through [`crate::engine::sync`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Player {
    pub id: PlayerId,
    pub uniform_number: u32,
    pub name: String,
}

impl Player {
    pub fn new(id: impl Into<PlayerId>, uniform_number: u32, name: impl Into<String>) -> Self {
        Self { id: id.into(), uniform_number, name: name.into() }
    }

    /// Copy name and uniform number from the canonical roster entry.
    pub fn refresh_from(&mut self, canonical: &Player) {
        self.name.clone_from(&canonical.name);
        self.uniform_number = canonical.uniform_number;
    }
}

/// Starting-slot fields layered on top of a [`Player`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Placement {
    /// 1..=9 for the batting slots, 0 for the flex slot.
    pub batting_order: u8,
    pub position: Position,
    #[serde(default)]
    pub is_flex: bool,
}

impl Placement {
    /// Placement implied by occupying starting slot `slot` (0..=9).
    pub fn for_slot(slot: usize, position: Position) -> Self {
        let is_flex = slot == super::lineup::FLEX_SLOT;
        Self {
            batting_order: if is_flex { 0 } else { slot as u8 + 1 },
            position,
            is_flex,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LineupPlayer {
    #[serde(flatten)]
    pub player: Player,
    #[serde(flatten)]
    pub placement: Placement,
}

impl LineupPlayer {
    pub fn new(player: Player, placement: Placement) -> Self {
        Self { player, placement }
    }

    pub fn in_slot(player: Player, slot: usize, position: Position) -> Self {
        Self::new(player, Placement::for_slot(slot, position))
    }

    pub fn id(&self) -> &PlayerId {
        &self.player.id
    }

    pub fn position(&self) -> Position {
        self.placement.position
    }

    /// Same player and position, batting order and flex flag re-derived for `slot`.
    pub fn moved_to_slot(self, slot: usize) -> Self {
        let position = self.placement.position;
        Self::in_slot(self.player, slot, position)
    }
}

/// A roster entry tagged with whether it appears in one particular lineup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RosterPlayer {
    #[serde(flatten)]
    pub player: Player,
    pub is_playing: bool,
}
