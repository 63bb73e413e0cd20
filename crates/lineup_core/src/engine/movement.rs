//! Drag-and-drop relocation between roster, bench and starting slots, plus fielding
//! position reassignment within the starting lineup.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::{IgnoreReason, MoveResult};
use crate::models::{FieldPosition, Lineup, LineupPlayer, PlayerId, Position, Roster};
use crate::models::STARTING_SLOTS;

/// Where a drag started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DragSource {
    Roster,
    Bench,
    Starting,
    Field,
}

/// Where a relocation drag ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DropTarget {
    Bench,
    Starting,
}

/// Move `player_id` from `source` into `target` at `target_index`.
///
/// - starting → starting swaps with whoever held the target slot
/// - bench/roster → starting pushes the displaced occupant to the end of the bench
/// - anything → bench inserts at `target_index` (clamped to the bench length)
///
/// A starter keeps its fielding position when it moves; bench and roster players arrive
/// unassigned. Roster drags of a player already on the bench or starting are ignored.
/// Roster status is recomputed from `roster` on the result.
pub fn relocate_player(
    lineup: &Lineup,
    roster: &Roster,
    player_id: &PlayerId,
    source: DragSource,
    target: DropTarget,
    target_index: usize,
) -> MoveResult {
    if target == DropTarget::Starting && target_index >= STARTING_SLOTS {
        return Err(IgnoreReason::SlotOutOfRange);
    }

    let mut starting = lineup.starting.clone();
    let mut bench = lineup.bench.clone();
    let mut vacated_slot = None;

    let (dragged, position) = match source {
        DragSource::Field => return Err(IgnoreReason::FieldSource),
        DragSource::Starting => {
            let index = lineup.starting_index_of(player_id).ok_or(IgnoreReason::PlayerNotFound)?;
            let starter = starting[index].take().ok_or(IgnoreReason::PlayerNotFound)?;
            vacated_slot = Some(index);
            (starter.player, starter.placement.position)
        }
        DragSource::Bench => {
            let index = lineup.bench_index_of(player_id).ok_or(IgnoreReason::PlayerNotFound)?;
            (bench.remove(index), Position::Unassigned)
        }
        DragSource::Roster => {
            if lineup.is_playing(player_id) {
                return Err(IgnoreReason::AlreadyAssigned);
            }
            let player = roster.get(player_id).ok_or(IgnoreReason::PlayerNotFound)?;
            (player.clone(), Position::Unassigned)
        }
    };

    match target {
        DropTarget::Starting => {
            let incoming = LineupPlayer::in_slot(dragged, target_index, position);
            if let Some(displaced) = starting[target_index].replace(incoming) {
                match vacated_slot {
                    Some(slot) => starting[slot] = Some(displaced.moved_to_slot(slot)),
                    None => bench.push(displaced.player),
                }
            }
        }
        DropTarget::Bench => {
            let at = target_index.min(bench.len());
            bench.insert(at, dragged);
        }
    }

    log::debug!(
        "relocated {} from {:?} to {:?}[{}]",
        player_id,
        source,
        target,
        target_index
    );

    Ok(Lineup::new(lineup.title.clone(), starting, bench, roster.players()))
}

/// Give the starter `player_id` a new fielding position.
///
/// If another starter already holds `new_position` the two trade positions; the first
/// holder in slot order is the one affected. Clearing a position (`Unassigned`) never
/// swaps. Batting order, flex flag, bench and roster status are untouched.
pub fn reposition_player(lineup: &Lineup, player_id: &PlayerId, new_position: Position) -> MoveResult {
    let mover = lineup.starting_index_of(player_id).ok_or(IgnoreReason::NotInStarting)?;
    let mut starting = lineup.starting.clone();

    let old_position = match starting[mover].as_ref() {
        Some(starter) => starter.placement.position,
        None => return Err(IgnoreReason::NotInStarting),
    };
    if old_position == new_position {
        return Err(IgnoreReason::PositionUnchanged);
    }

    if new_position.is_assigned() {
        let holder = starting.iter_mut().enumerate().find_map(|(index, slot)| match slot {
            Some(starter) if index != mover && starter.placement.position == new_position => {
                Some(starter)
            }
            _ => None,
        });
        if let Some(holder) = holder {
            holder.placement.position = old_position;
        }
    }

    if let Some(starter) = starting[mover].as_mut() {
        starter.placement.position = new_position;
    }

    Ok(Lineup { starting, ..lineup.clone() })
}

/// Fielding positions held by two or more starters. Markers and unassigned never conflict.
pub fn conflicting_positions(lineup: &Lineup) -> BTreeSet<FieldPosition> {
    let mut counts: BTreeMap<FieldPosition, usize> = BTreeMap::new();
    for field in lineup.starters().filter_map(|starter| starter.position().field_position()) {
        *counts.entry(field).or_default() += 1;
    }
    counts.into_iter().filter(|(_, count)| *count > 1).map(|(field, _)| field).collect()
}
