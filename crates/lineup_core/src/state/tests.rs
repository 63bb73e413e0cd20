//! Scenario tests for the root state
//!
//! Drives `AppState` through the same event sequences the presentation layer produces
//! and checks the collection, roster and selection after each one.

use super::*;
use crate::models::{
    roster_status_for, FieldPosition, LineupPlayer, StartingSlots, FLEX_SLOT, STARTING_SLOTS,
};
use proptest::prelude::*;
use std::collections::HashSet;

fn sample_state() -> AppState {
    AppState::from_config(&LineupConfig::default())
}

fn empty_state() -> AppState {
    AppState::from_config(&LineupConfig { seed: SeedData::Empty, ..Default::default() })
}

fn pos(number: u8) -> Position {
    Position::Field(FieldPosition::from_number(number).unwrap())
}

fn id(raw: &str) -> PlayerId {
    PlayerId::from(raw)
}

fn selected(state: &AppState) -> &Lineup {
    state.selected_lineup().expect("a lineup is selected")
}

fn bench_ids(lineup: &Lineup) -> Vec<&str> {
    lineup.bench.iter().map(|player| player.id.as_str()).collect()
}

fn assert_consistent(state: &AppState) {
    for entry in state.lineups() {
        let lineup = &entry.lineup;
        assert_eq!(lineup.starting.len(), STARTING_SLOTS);
        assert_eq!(
            lineup.roster_status,
            roster_status_for(&lineup.starting, &lineup.bench, state.roster().players()),
            "stale roster status in {}",
            entry.key
        );
        for (slot, starter) in lineup.starting.iter().enumerate() {
            if let Some(starter) = starter {
                assert_eq!(starter.placement.is_flex, slot == FLEX_SLOT);
            }
        }
    }
}

#[test]
fn test_sample_state_selects_first_game() {
    let state = sample_state();
    assert_eq!(state.lineups().len(), 3);
    assert_eq!(state.selected_key().map(LineupKey::as_str), Some("game1"));
    assert_eq!(state.roster_panel().len(), 18);
    assert_eq!(state.delete_prompt(), &DeletePrompt::Idle);
    assert_consistent(&state);
}

#[test]
fn test_reposition_to_current_position_is_noop() {
    let mut state = sample_state();
    let before = state.clone();

    let outcome = state.reposition_player(&id("player-4"), pos(4));
    assert_eq!(outcome, Outcome::Ignored(IgnoreReason::PositionUnchanged));
    assert_eq!(state, before);
}

#[test]
fn test_clearing_an_unassigned_starter_is_noop() {
    let mut state = sample_state();
    // bench players arrive in the starting lineup without a position
    assert!(state
        .relocate_player(&id("player-12"), DragSource::Bench, DropTarget::Starting, 2)
        .is_applied());
    assert_eq!(
        selected(&state).starter(&id("player-12")).unwrap().position(),
        Position::Unassigned
    );
    let before = state.clone();

    let outcome = state.reposition_player(&id("player-12"), Position::Unassigned);
    assert_eq!(outcome, Outcome::Ignored(IgnoreReason::PositionUnchanged));
    assert_eq!(state, before);
}

#[test]
fn test_reposition_swaps_positions() {
    let mut state = sample_state();
    let before = selected(&state).clone();

    // slot 0 holds player-4 at second base, slot 1 player-5 at third base
    assert!(state.reposition_player(&id("player-4"), pos(5)).is_applied());
    let after = selected(&state);

    assert_eq!(after.starting[0].as_ref().unwrap().position(), pos(5));
    assert_eq!(after.starting[1].as_ref().unwrap().position(), pos(4));
    assert_eq!(after.starting[2..], before.starting[2..]);
    assert_eq!(after.bench, before.bench);
    assert_eq!(after.roster_status, before.roster_status);
}

#[test]
fn test_table_selector_allows_designated_player() {
    let mut state = sample_state();
    // player-9 is the DP; the table selector may move someone else onto it
    assert!(state.reposition_player(&id("player-1"), Position::DesignatedPlayer).is_applied());
    let lineup = selected(&state);
    assert_eq!(lineup.starter(&id("player-1")).unwrap().position(), Position::DesignatedPlayer);
    assert_eq!(lineup.starter(&id("player-9")).unwrap().position(), pos(1));
}

#[test]
fn test_bench_to_starting_displaces_occupant() {
    let mut state = sample_state();
    // slot index 2 holds player-1
    let outcome =
        state.relocate_player(&id("player-12"), DragSource::Bench, DropTarget::Starting, 2);
    assert!(outcome.is_applied());

    let lineup = selected(&state);
    let incoming = lineup.starting[2].as_ref().unwrap();
    assert_eq!(incoming.id(), &id("player-12"));
    assert_eq!(incoming.placement.batting_order, 3);
    assert!(!incoming.placement.is_flex);
    assert_eq!(incoming.position(), Position::Unassigned);

    assert_eq!(bench_ids(lineup).last(), Some(&"player-1"));
    assert!(!bench_ids(lineup).contains(&"player-12"));
    assert_eq!(lineup.bench.len(), 8);
    assert_consistent(&state);
}

#[test]
fn test_moves_only_touch_the_selected_lineup() {
    let mut state = sample_state();
    let game2 = state.lineups().get(&"game2".into()).cloned();

    state.relocate_player(&id("player-4"), DragSource::Starting, DropTarget::Bench, 0);
    assert_eq!(state.lineups().get(&"game2".into()).cloned(), game2);
    assert_eq!(bench_ids(selected(&state))[0], "player-4");
}

#[test]
fn test_field_drops_are_resolved_on_the_diagram() {
    let mut state = sample_state();
    assert_eq!(
        state.relocate_player(&id("player-4"), DragSource::Field, DropTarget::Bench, 0),
        Outcome::Ignored(IgnoreReason::FieldSource)
    );

    // onto the center field anchor; player-16 holds center field and takes second base
    assert!(state.drop_on_field(&id("player-4"), 50.0, 21.0).is_applied());
    let lineup = selected(&state);
    assert_eq!(lineup.starter(&id("player-4")).unwrap().position(), pos(8));
    assert_eq!(lineup.starter(&id("player-16")).unwrap().position(), pos(4));

    assert_eq!(
        state.drop_on_field(&id("player-9"), 50.0, 21.0),
        Outcome::Ignored(IgnoreReason::DesignatedPlayerMismatch)
    );
}

#[test]
fn test_roster_drag_of_assigned_player_is_ignored() {
    let mut state = sample_state();
    let before = state.clone();
    assert_eq!(
        state.relocate_player(&id("player-12"), DragSource::Roster, DropTarget::Starting, 0),
        Outcome::Ignored(IgnoreReason::AlreadyAssigned)
    );
    assert_eq!(state, before);
}

#[test]
fn test_roster_drag_of_new_player() {
    let mut state = sample_state();
    let mut players = state.roster().players().to_vec();
    players.push(Player::new("player-20", 20, "Newcomer"));
    state.apply_roster_edit(players);

    let panel_entry = state.roster_panel().iter().find(|e| e.player.id == id("player-20"));
    assert_eq!(panel_entry.map(|e| e.is_playing), Some(false));

    let outcome =
        state.relocate_player(&id("player-20"), DragSource::Roster, DropTarget::Bench, 0);
    assert!(outcome.is_applied());
    assert_eq!(bench_ids(selected(&state))[0], "player-20");
    assert!(state.roster_panel().iter().all(|entry| entry.is_playing));
    assert_consistent(&state);
}

#[test]
fn test_roster_edit_cascade() {
    let roster = Roster::new(vec![
        Player::new("a", 1, "Alpha"),
        Player::new("b", 2, "Bravo"),
        Player::new("c", 3, "Charlie"),
    ]);
    let mut starting = StartingSlots::default();
    starting[0] = Some(LineupPlayer::in_slot(roster.players()[0].clone(), 0, pos(6)));
    let lineup = Lineup::new("Game", starting, vec![roster.players()[1].clone()], roster.players());
    let book: LineupBook = [(LineupKey::from("g"), lineup)].into_iter().collect();
    let mut state = AppState::new(roster, book);

    state.apply_roster_edit(vec![Player::new("b", 12, "Bravo II"), Player::new("c", 3, "Charlie")]);

    let lineup = selected(&state);
    assert!(lineup.starting.iter().all(Option::is_none));
    assert_eq!(lineup.bench, vec![Player::new("b", 12, "Bravo II")]);

    let status: Vec<(&str, bool)> = lineup
        .roster_status
        .iter()
        .map(|entry| (entry.player.id.as_str(), entry.is_playing))
        .collect();
    assert_eq!(status, vec![("b", true), ("c", false)]);
    assert_eq!(state.roster().len(), 2);
    assert_consistent(&state);
}

#[test]
fn test_roster_edit_refreshes_starters_in_every_lineup() {
    let mut state = sample_state();
    let players: Vec<Player> = state
        .roster()
        .iter()
        .map(|player| match player.id.as_str() {
            "player-1" => Player::new("player-1", 18, "Renamed"),
            _ => player.clone(),
        })
        .collect();
    state.apply_roster_edit(players);

    for entry in state.lineups() {
        let starter = entry.lineup.starter(&id("player-1")).unwrap();
        assert_eq!(starter.player.name, "Renamed");
        assert_eq!(starter.player.uniform_number, 18);
    }
}

#[test]
fn test_deleting_the_last_lineup_is_refused() {
    let mut state = empty_state();
    state.apply_roster_edit(vec![Player::new("a", 1, "Alpha")]);
    state.create_lineup("Only").unwrap();
    let before = state.clone();

    let err = state.request_delete().unwrap_err();
    assert!(matches!(err, LineupError::LastLineup));
    assert!(err.is_user_facing());

    let err = state.delete_lineup_confirmed().unwrap_err();
    assert!(matches!(err, LineupError::LastLineup));
    assert_eq!(state, before);
}

#[test]
fn test_create_lineup_seeds_from_roster() {
    let mut state = sample_state();
    let key = state.create_lineup("  Practice  ").unwrap();

    assert!(key.as_str().starts_with("lineup_"));
    assert_eq!(state.selected_key(), Some(&key));
    assert_eq!(state.lineups().key_at(3), Some(&key));

    let lineup = selected(&state);
    assert_eq!(lineup.title, "Practice");
    assert_eq!(lineup.filled_slots(), 0);
    assert_eq!(lineup.starting.len(), STARTING_SLOTS);
    assert_eq!(lineup.bench, state.roster().players());
    assert_eq!(lineup.roster_status.len(), 18);
    assert!(lineup.roster_status.iter().all(|entry| entry.is_playing));
}

#[test]
fn test_blank_title_is_rejected() {
    let mut state = sample_state();
    let before = state.clone();
    assert!(matches!(state.create_lineup("   "), Err(LineupError::BlankTitle)));
    assert_eq!(state, before);
}

#[test]
fn test_delete_confirm_and_cancel() {
    let mut state = sample_state();
    state.select_lineup(&"game2".into()).unwrap();

    state.request_delete().unwrap();
    assert_eq!(state.delete_prompt(), &DeletePrompt::PendingConfirm { key: "game2".into() });
    state.cancel_delete();
    assert_eq!(state.delete_prompt(), &DeletePrompt::Idle);
    assert_eq!(state.lineups().len(), 3);

    state.request_delete().unwrap();
    assert_eq!(state.delete_lineup_confirmed().unwrap().as_str(), "game2");
    assert_eq!(state.lineups().len(), 2);
    assert_eq!(state.selected_key().map(LineupKey::as_str), Some("game1"));
    assert_eq!(state.delete_prompt(), &DeletePrompt::Idle);
}

#[test]
fn test_deleting_first_lineup_selects_new_first() {
    let mut state = sample_state();
    state.request_delete().unwrap();
    state.delete_lineup_confirmed().unwrap();
    assert_eq!(state.selected_key().map(LineupKey::as_str), Some("game2"));
}

#[test]
fn test_confirm_without_request() {
    let mut state = sample_state();
    assert!(matches!(state.delete_lineup_confirmed(), Err(LineupError::NoPendingDeletion)));
    assert_eq!(state.lineups().len(), 3);
}

#[test]
fn test_selecting_resets_pending_delete() {
    let mut state = sample_state();
    state.request_delete().unwrap();
    state.select_lineup(&"game3".into()).unwrap();
    assert_eq!(state.delete_prompt(), &DeletePrompt::Idle);

    assert!(matches!(
        state.select_lineup(&"missing".into()),
        Err(LineupError::UnknownLineup(_))
    ));
    assert_eq!(state.selected_key().map(LineupKey::as_str), Some("game3"));
}

#[test]
fn test_empty_state_has_no_selection() {
    let mut state = empty_state();
    assert!(state.selected_lineup().is_none());
    assert!(state.roster_panel().is_empty());
    assert_eq!(
        state.reposition_player(&id("a"), pos(1)),
        Outcome::Ignored(IgnoreReason::NoLineupSelected)
    );
    assert!(matches!(state.request_delete(), Err(LineupError::LastLineup)));

    let key = state.create_lineup("Recovered").unwrap();
    assert_eq!(state.selected_key(), Some(&key));
    assert!(selected(&state).bench.is_empty());
}

#[test]
fn test_dispatch_commands() {
    let mut state = sample_state();
    let commands = [
        r#"{"op": "select_lineup", "key": "game3"}"#,
        r#"{"op": "reposition_player", "player_id": "player-10", "position": "8"}"#,
        r#"{"op": "create_lineup", "title": "Scrimmage"}"#,
        r#"{"op": "request_delete"}"#,
        r#"{"op": "confirm_delete"}"#,
    ];
    for json in commands {
        let command = Command::from_json(json).unwrap();
        assert_eq!(state.dispatch(command).unwrap(), Outcome::Applied, "{json}");
    }
    assert_eq!(state.lineups().len(), 3);
    assert_eq!(state.selected_key().map(LineupKey::as_str), Some("game3"));

    // game3: player-10 was at shortstop, player-2 at center field
    let lineup = selected(&state);
    assert_eq!(lineup.starter(&id("player-10")).unwrap().position(), pos(8));
    assert_eq!(lineup.starter(&id("player-2")).unwrap().position(), pos(6));

    let err = state.dispatch(Command::CreateLineup { title: String::new() }).unwrap_err();
    assert!(!err.is_user_facing());
}

// ============================================================================
// Property tests
// ============================================================================

#[derive(Debug, Clone)]
enum Event {
    Relocate { player: usize, source: DragSource, target: DropTarget, index: usize },
    Reposition { player: usize, position: Position },
}

fn event_strategy() -> impl Strategy<Value = Event> {
    let source = prop_oneof![
        Just(DragSource::Roster),
        Just(DragSource::Bench),
        Just(DragSource::Starting),
        Just(DragSource::Field),
    ];
    let target = prop_oneof![Just(DropTarget::Bench), Just(DropTarget::Starting)];
    let positions: Vec<Position> = Position::selectable()
        .chain([Position::FlexPlayer, Position::Unassigned])
        .collect();

    prop_oneof![
        (0..18usize, source, target, 0..12usize).prop_map(|(player, source, target, index)| {
            Event::Relocate { player, source, target, index }
        }),
        (0..18usize, prop::sample::select(positions))
            .prop_map(|(player, position)| Event::Reposition { player, position }),
    ]
}

fn apply(state: &mut AppState, event: &Event) -> Outcome {
    match event {
        Event::Relocate { player, source, target, index } => {
            let player_id = state.roster().players()[*player].id.clone();
            state.relocate_player(&player_id, *source, *target, *index)
        }
        Event::Reposition { player, position } => {
            let player_id = state.roster().players()[*player].id.clone();
            state.reposition_player(&player_id, *position)
        }
    }
}

proptest! {
    #[test]
    fn prop_moves_keep_lineup_consistent(
        events in prop::collection::vec(event_strategy(), 1..40),
    ) {
        let mut state = sample_state();
        let roster_ids: HashSet<PlayerId> =
            state.roster().iter().map(|player| player.id.clone()).collect();

        for event in &events {
            let before = state.clone();
            let outcome = apply(&mut state, event);
            if !outcome.is_applied() {
                prop_assert_eq!(&state, &before);
            }

            let lineup = selected(&state);
            prop_assert_eq!(lineup.starting.len(), STARTING_SLOTS);
            prop_assert_eq!(
                &lineup.roster_status,
                &roster_status_for(&lineup.starting, &lineup.bench, state.roster().players())
            );

            // every roster player stays in exactly one place
            let placed: Vec<PlayerId> = lineup
                .starters()
                .map(|starter| starter.id().clone())
                .chain(lineup.bench.iter().map(|player| player.id.clone()))
                .collect();
            let unique: HashSet<PlayerId> = placed.iter().cloned().collect();
            prop_assert_eq!(placed.len(), unique.len());
            prop_assert_eq!(&unique, &roster_ids);
        }
    }

    #[test]
    fn prop_reposition_leaves_batting_order_alone(
        player in 0..18usize,
        position in prop::sample::select(Position::selectable().collect::<Vec<_>>()),
    ) {
        let mut state = sample_state();
        let before = selected(&state).clone();
        apply(&mut state, &Event::Reposition { player, position });
        let after = selected(&state);

        prop_assert_eq!(&after.bench, &before.bench);
        prop_assert_eq!(&after.roster_status, &before.roster_status);
        let slot_key = |slot: &Option<LineupPlayer>| {
            slot.as_ref().map(|s| (s.id().clone(), s.placement.batting_order, s.placement.is_flex))
        };
        for (old, new) in before.starting.iter().zip(after.starting.iter()) {
            prop_assert_eq!(slot_key(old), slot_key(new));
        }
    }
}
