use super::player::{LineupPlayer, Player, PlayerId, RosterPlayer};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Batting slots 1-9 plus the flex slot.
pub const STARTING_SLOTS: usize = 10;
/// Index of the flex slot (batting order 0).
pub const FLEX_SLOT: usize = 9;

pub type StartingSlots = [Option<LineupPlayer>; STARTING_SLOTS];

/// One game's lineup.
///
/// `roster_status` is a cache: it must always equal "roster id appears in starting or
/// bench", and every constructor below recomputes it from scratch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Lineup {
    pub title: String,
    pub starting: StartingSlots,
    pub bench: Vec<Player>,
    pub roster_status: Vec<RosterPlayer>,
}

impl Lineup {
    /// Assemble a lineup and derive its roster status from `roster`.
    pub fn new(
        title: impl Into<String>,
        starting: StartingSlots,
        bench: Vec<Player>,
        roster: &[Player],
    ) -> Self {
        let roster_status = roster_status_for(&starting, &bench, roster);
        Self { title: title.into(), starting, bench, roster_status }
    }

    /// Empty starting slots with every roster player waiting on the bench.
    pub fn with_full_bench(title: impl Into<String>, roster: &[Player]) -> Self {
        Self::new(title, StartingSlots::default(), roster.to_vec(), roster)
    }

    pub fn starters(&self) -> impl Iterator<Item = &LineupPlayer> {
        self.starting.iter().flatten()
    }

    pub fn starting_index_of(&self, player_id: &PlayerId) -> Option<usize> {
        self.starting
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|starter| starter.id() == player_id))
    }

    pub fn bench_index_of(&self, player_id: &PlayerId) -> Option<usize> {
        self.bench.iter().position(|player| &player.id == player_id)
    }

    pub fn starter(&self, player_id: &PlayerId) -> Option<&LineupPlayer> {
        self.starters().find(|starter| starter.id() == player_id)
    }

    /// Checked against starting and bench directly, not the cached status.
    pub fn is_playing(&self, player_id: &PlayerId) -> bool {
        self.starting_index_of(player_id).is_some() || self.bench_index_of(player_id).is_some()
    }

    pub fn filled_slots(&self) -> usize {
        self.starters().count()
    }
}

/// Tag every roster player with membership in `starting` ∪ `bench`, in roster order.
pub fn roster_status_for(
    starting: &StartingSlots,
    bench: &[Player],
    roster: &[Player],
) -> Vec<RosterPlayer> {
    let playing: HashSet<&PlayerId> = starting
        .iter()
        .flatten()
        .map(LineupPlayer::id)
        .chain(bench.iter().map(|player| &player.id))
        .collect();

    roster
        .iter()
        .map(|player| RosterPlayer {
            player: player.clone(),
            is_playing: playing.contains(&player.id),
        })
        .collect()
}
