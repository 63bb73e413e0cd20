pub mod lineup;
pub mod lineup_book;
pub mod player;
pub mod position;
pub mod roster;

pub use lineup::{roster_status_for, Lineup, StartingSlots, FLEX_SLOT, STARTING_SLOTS};
pub use lineup_book::{LineupBook, LineupEntry, LineupKey};
pub use player::{LineupPlayer, Placement, Player, PlayerId, RosterPlayer};
pub use position::{FieldPosition, Position};
pub use roster::Roster;
