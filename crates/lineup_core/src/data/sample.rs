//! Bundled sample team: an 18-player roster and three game lineups.

use crate::models::{
    Lineup, LineupBook, LineupKey, LineupPlayer, Placement, Player, Position,
    Roster, StartingSlots, FLEX_SLOT,
};

const TEAM: [(u32, &str); 18] = [
    (1, "高田 茉央"),
    (2, "鈴木 楠乃"),
    (3, "渡邉 碧唯"),
    (4, "井田 日瑠"),
    (5, "新井 芙羽"),
    (6, "長沼 芽衣"),
    (7, "塩谷 日菜歌"),
    (8, "N/A"),
    (9, "板橋 桜空"),
    (10, "細沢 芽生"),
    (11, "須水 心春"),
    (12, "飯野 蓮叶"),
    (13, "阿部 日陽"),
    (14, "金子 未来"),
    (15, "清村 侑加"),
    (16, "須田 莉子"),
    (17, "N/A"),
    (19, "N/A"),
];

/// (uniform number, batting order, position code) per starter; batting order 0 is the flex slot.
const GAME1: [(u32, u8, &str); 10] = [
    (4, 1, "4"),
    (5, 2, "5"),
    (1, 3, "1"),
    (10, 4, "2"),
    (3, 5, "3"),
    (6, 6, "6"),
    (9, 7, "DP"),
    (11, 8, "7"),
    (14, 9, "9"),
    (16, 0, "8"),
];

const GAME2: [(u32, u8, &str); 10] = [
    (4, 1, "4"),
    (5, 2, "5"),
    (1, 3, "1"),
    (10, 4, "2"),
    (3, 5, "3"),
    (6, 6, "6"),
    (9, 7, "DP"),
    (16, 8, "8"),
    (14, 9, "9"),
    (2, 0, "7"),
];

const GAME3: [(u32, u8, &str); 10] = [
    (10, 1, "6"),
    (2, 2, "8"),
    (1, 3, "7"),
    (8, 4, "5"),
    (6, 5, "DP"),
    (5, 6, "2"),
    (7, 7, "1"),
    (3, 8, "4"),
    (13, 9, "3"),
    (17, 0, "9"),
];

pub fn sample_roster() -> Roster {
    TEAM.iter()
        .map(|(number, name)| Player::new(format!("player-{}", number), *number, *name))
        .collect::<Vec<_>>()
        .into()
}

/// Place starters into slots by their batting order: 1-9 go to slots 0-8, and batting
/// order 0, a flex flag or an FP position sends a player to the flex slot.
/// Entries that fit neither rule are left out.
pub fn fixed_starting(starters: Vec<LineupPlayer>) -> StartingSlots {
    let mut slots = StartingSlots::default();
    for starter in starters {
        let placement = starter.placement;
        if (1..=9).contains(&placement.batting_order) {
            let slot = placement.batting_order as usize - 1;
            slots[slot] = Some(starter);
        } else if placement.is_flex
            || placement.position == Position::FlexPlayer
            || placement.batting_order == 0
        {
            slots[FLEX_SLOT] = Some(starter.moved_to_slot(FLEX_SLOT));
        }
    }
    slots
}

fn game(title: &str, card: &[(u32, u8, &str)], roster: &Roster) -> Lineup {
    let starters: Vec<LineupPlayer> = card
        .iter()
        .filter_map(|(number, batting_order, code)| {
            let player = roster.iter().find(|p| p.uniform_number == *number)?.clone();
            let position = code.parse().unwrap_or_default();
            Some(LineupPlayer::new(
                player,
                Placement { batting_order: *batting_order, position, is_flex: *batting_order == 0 },
            ))
        })
        .collect();
    let starting = fixed_starting(starters);

    let bench: Vec<Player> = roster
        .iter()
        .filter(|player| !starting.iter().flatten().any(|starter| starter.id() == &player.id))
        .cloned()
        .collect();

    Lineup::new(title, starting, bench, roster.players())
}

pub fn sample_lineups(roster: &Roster) -> LineupBook {
    [
        ("game1", "2年のみ9人 (Game 1)", &GAME1),
        ("game2", "10人 (Game 2)", &GAME2),
        ("game3", "坂本p (Game 3)", &GAME3),
    ]
    .into_iter()
    .map(|(key, title, card)| (LineupKey::from(key), game(title, card, roster)))
    .collect()
}
