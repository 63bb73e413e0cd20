//! Field diagram drop resolution.
//!
//! The diagram is a 100x100 view box with one anchor per numbered position plus the DP
//! box. A drop lands on whichever anchor is closest; the designated-player rule is
//! enforced here, before the movement engine is asked to reposition.

use crate::engine::{reposition_player, IgnoreReason, MoveResult};
use crate::models::{FieldPosition, Lineup, PlayerId, Position};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub position: Position,
    pub x: f32,
    pub y: f32,
}

impl Anchor {
    const fn field(position: FieldPosition, x: f32, y: f32) -> Self {
        Self { position: Position::Field(position), x, y }
    }

    fn distance_sq(&self, x: f32, y: f32) -> f32 {
        let dx = self.x - x;
        let dy = self.y - y;
        dx * dx + dy * dy
    }
}

/// Home plate sits at the bottom center; first and third base are mirror images.
pub static ANCHORS: [Anchor; 10] = [
    Anchor::field(FieldPosition::Pitcher, 50.0, 62.0),
    Anchor::field(FieldPosition::Catcher, 50.0, 95.0),
    Anchor::field(FieldPosition::FirstBase, 73.5, 68.5),
    Anchor::field(FieldPosition::SecondBase, 65.0, 52.0),
    Anchor::field(FieldPosition::ThirdBase, 26.5, 68.5),
    Anchor::field(FieldPosition::Shortstop, 35.0, 52.0),
    Anchor::field(FieldPosition::LeftField, 18.0, 30.0),
    Anchor::field(FieldPosition::CenterField, 50.0, 20.0),
    Anchor::field(FieldPosition::RightField, 82.0, 30.0),
    Anchor { position: Position::DesignatedPlayer, x: 92.0, y: 88.0 },
];

/// Diagram anchor for a position; FP and unassigned players are not drawn.
pub fn anchor_for(position: Position) -> Option<&'static Anchor> {
    ANCHORS.iter().find(|anchor| anchor.position == position)
}

/// Position whose anchor is nearest to `(x, y)` in view-box coordinates.
/// Ties go to the earlier anchor.
pub fn closest_position(x: f32, y: f32) -> Position {
    let mut best = &ANCHORS[0];
    let mut best_distance = best.distance_sq(x, y);
    for anchor in &ANCHORS[1..] {
        let distance = anchor.distance_sq(x, y);
        if distance < best_distance {
            best = anchor;
            best_distance = distance;
        }
    }
    best.position
}

/// Resolve a drag within the field diagram into a reposition.
///
/// A DP occupant may only be dropped on DP, and nobody else may be dropped on DP.
pub fn resolve_field_drop(lineup: &Lineup, player_id: &PlayerId, x: f32, y: f32) -> MoveResult {
    let target = closest_position(x, y);
    let starter = lineup.starter(player_id).ok_or(IgnoreReason::NotInStarting)?;

    if starter.position().is_designated() != target.is_designated() {
        log::debug!(
            "field drop of {} onto {} rejected: DP and fielding positions do not mix",
            player_id,
            target.label()
        );
        return Err(IgnoreReason::DesignatedPlayerMismatch);
    }

    reposition_player(lineup, player_id, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{sample_lineups, sample_roster};

    fn game1() -> Lineup {
        let roster = sample_roster();
        sample_lineups(&roster).get(&"game1".into()).cloned().unwrap()
    }

    #[test]
    fn test_anchor_points_resolve_to_themselves() {
        for anchor in &ANCHORS {
            assert_eq!(closest_position(anchor.x, anchor.y), anchor.position);
        }
        assert_eq!(closest_position(-20.0, -20.0), Position::Field(FieldPosition::LeftField));
    }

    #[test]
    fn test_anchor_lookup() {
        assert!(anchor_for(Position::DesignatedPlayer).is_some());
        assert!(anchor_for(Position::FlexPlayer).is_none());
        assert!(anchor_for(Position::Unassigned).is_none());
    }

    #[test]
    fn test_fielder_drop_swaps_positions() {
        let lineup = game1();
        // player-4 plays second base, player-6 shortstop
        let moved = resolve_field_drop(&lineup, &"player-4".into(), 36.0, 51.0).unwrap();
        let p4 = moved.starter(&"player-4".into()).unwrap();
        let p6 = moved.starter(&"player-6".into()).unwrap();
        assert_eq!(p4.position(), Position::Field(FieldPosition::Shortstop));
        assert_eq!(p6.position(), Position::Field(FieldPosition::SecondBase));
    }

    #[test]
    fn test_designated_player_guard() {
        let lineup = game1();
        // player-9 is the DP
        assert_eq!(
            resolve_field_drop(&lineup, &"player-9".into(), 50.0, 62.0),
            Err(IgnoreReason::DesignatedPlayerMismatch)
        );
        assert_eq!(
            resolve_field_drop(&lineup, &"player-1".into(), 92.0, 88.0),
            Err(IgnoreReason::DesignatedPlayerMismatch)
        );
        assert_eq!(
            resolve_field_drop(&lineup, &"player-9".into(), 90.0, 90.0),
            Err(IgnoreReason::PositionUnchanged)
        );
    }

    #[test]
    fn test_bench_player_cannot_be_dropped_on_field() {
        let lineup = game1();
        assert_eq!(
            resolve_field_drop(&lineup, &"player-12".into(), 50.0, 20.0),
            Err(IgnoreReason::NotInStarting)
        );
    }
}
