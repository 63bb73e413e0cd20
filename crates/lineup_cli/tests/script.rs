use lineup_cli::{load_script, load_state, run_script, summarize};
use lineup_core::{Outcome, SeedData};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_replay_script_from_file() {
    let script = write_temp(
        r#"[
            {"op": "relocate_player", "player_id": "player-12", "source": "bench",
             "target": "starting", "target_index": 2},
            {"op": "field_drop", "player_id": "player-12", "x": 50.0, "y": 62.0},
            {"op": "relocate_player", "player_id": "player-12", "source": "roster",
             "target": "bench", "target_index": 0},
            {"op": "create_lineup", "title": "Practice"}
        ]"#,
    );

    let mut state = load_state(None).unwrap();
    let commands = load_script(script.path()).unwrap();
    assert_eq!(commands.len(), 4);

    let responses = run_script(&mut state, commands);
    assert_eq!(responses[0].outcome, Some(Outcome::Applied));
    // player-1 went to the bench, so the pitcher's spot is free
    assert_eq!(responses[1].outcome, Some(Outcome::Applied));
    assert!(summarize(2, &responses[2]).contains("ignored"));
    assert_eq!(responses[3].outcome, Some(Outcome::Applied));

    assert_eq!(state.lineups().len(), 4);
    assert_eq!(state.selected_lineup().map(|l| l.title.as_str()), Some("Practice"));
}

#[test]
fn test_config_file_selects_empty_seed() {
    let config = write_temp(r#"{"seed": "empty", "key_prefix": "g_"}"#);
    let mut state = load_state(Some(config.path())).unwrap();
    assert!(state.lineups().is_empty());
    assert_eq!(lineup_core::config::LineupConfig::default().seed, SeedData::Sample);

    let key = state.create_lineup("First").unwrap();
    assert!(key.as_str().starts_with("g_"));
}

#[test]
fn test_bad_script_reports_path() {
    let script = write_temp(r#"[{"op": "teleport"}]"#);
    let err = load_script(script.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse script JSON"));
}
