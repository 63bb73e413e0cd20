//! Roster edit propagation.
//!
//! A committed roster edit replaces the master list wholesale. Every lineup is rebuilt
//! against the new list before anything is swapped in, so no lineup is ever seen
//! referencing a deleted player or a stale name.

use std::collections::HashMap;

use crate::models::{Lineup, LineupBook, Player, PlayerId, Roster, StartingSlots};

/// Rebuild one lineup against `roster`.
///
/// Starters no longer on the roster leave an empty slot behind (nothing is pulled up from
/// the bench); departed bench entries are dropped. Survivors get the roster's current
/// name and uniform number while keeping their placement.
pub fn sync_lineup(lineup: &Lineup, roster: &Roster) -> Lineup {
    let current: HashMap<&PlayerId, &Player> =
        roster.iter().map(|player| (&player.id, player)).collect();

    let mut starting = StartingSlots::default();
    for (slot, occupant) in starting.iter_mut().zip(lineup.starting.iter()) {
        *slot = occupant.as_ref().and_then(|starter| {
            current.get(starter.id()).map(|canonical| {
                let mut kept = starter.clone();
                kept.player.refresh_from(canonical);
                kept
            })
        });
    }

    let bench: Vec<Player> = lineup
        .bench
        .iter()
        .filter_map(|player| {
            current.get(&player.id).map(|canonical| {
                let mut kept = player.clone();
                kept.refresh_from(canonical);
                kept
            })
        })
        .collect();

    Lineup::new(lineup.title.clone(), starting, bench, roster.players())
}

/// Apply a committed roster edit to every lineup, preserving display order.
pub fn apply_roster_edit(lineups: &LineupBook, roster: &Roster) -> LineupBook {
    let synced = lineups.map_lineups(|lineup| sync_lineup(lineup, roster));
    log::info!(
        "roster edit applied: {} players across {} lineups",
        roster.len(),
        synced.len()
    );
    synced
}
