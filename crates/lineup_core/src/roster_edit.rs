//! Roster edit session.
//!
//! A [`RosterDraft`] is a scratch copy of the roster that tolerates half-typed input:
//! blank names, a uniform number of 0, text that is not a number at all. Nothing is
//! checked until [`RosterDraft::finish`], which keeps only the entries that pass
//! validation and hands back the list `apply_roster_edit` expects.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::{LineupError, Result};
use crate::models::{Player, PlayerId, Roster};

fn not_blank(name: &str) -> std::result::Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("blank_name"));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct DraftEntry {
    pub id: PlayerId,
    #[validate(custom = "not_blank")]
    pub name: String,
    /// Signed so that a typed "-3" survives until validation rejects it.
    #[validate(range(min = 1))]
    pub uniform_number: i64,
}

impl DraftEntry {
    fn from_player(player: &Player) -> Self {
        Self {
            id: player.id.clone(),
            name: player.name.clone(),
            uniform_number: i64::from(player.uniform_number),
        }
    }

    /// Validated, trimmed player record.
    pub fn to_player(&self) -> Result<Player> {
        self.validate().map_err(|errors| LineupError::InvalidRosterEntry {
            id: self.id.to_string(),
            reason: errors.to_string(),
        })?;
        let uniform_number = u32::try_from(self.uniform_number).map_err(|e| {
            LineupError::InvalidRosterEntry { id: self.id.to_string(), reason: e.to_string() }
        })?;
        Ok(Player::new(self.id.clone(), uniform_number, self.name.trim()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterDraft {
    entries: Vec<DraftEntry>,
}

impl RosterDraft {
    pub fn new(roster: &Roster) -> Self {
        Self { entries: roster.iter().map(DraftEntry::from_player).collect() }
    }

    pub fn entries(&self) -> &[DraftEntry] {
        &self.entries
    }

    /// Append an empty row with a fresh id and return that id.
    pub fn add_player(&mut self) -> PlayerId {
        let id = PlayerId::generate();
        self.entries.push(DraftEntry { id: id.clone(), name: String::new(), uniform_number: 0 });
        id
    }

    pub fn remove_player(&mut self, id: &PlayerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| &entry.id != id);
        self.entries.len() != before
    }

    pub fn set_name(&mut self, id: &PlayerId, name: impl Into<String>) -> bool {
        match self.entry_mut(id) {
            Some(entry) => {
                entry.name = name.into();
                true
            }
            None => false,
        }
    }

    /// Store the number typed into the uniform field; anything unparsable becomes 0.
    pub fn set_uniform_number(&mut self, id: &PlayerId, raw: &str) -> bool {
        match self.entry_mut(id) {
            Some(entry) => {
                entry.uniform_number = parse_leading_int(raw);
                true
            }
            None => false,
        }
    }

    /// Close the session: rows with a blank name or a non-positive number are dropped.
    pub fn finish(self) -> Vec<Player> {
        let total = self.entries.len();
        let players: Vec<Player> = self
            .entries
            .iter()
            .filter_map(|entry| match entry.to_player() {
                Ok(player) => Some(player),
                Err(e) => {
                    log::debug!("dropping roster row: {e}");
                    None
                }
            })
            .collect();

        if players.len() != total {
            log::info!("roster edit kept {} of {} rows", players.len(), total);
        }
        players
    }

    fn entry_mut(&mut self, id: &PlayerId) -> Option<&mut DraftEntry> {
        self.entries.iter_mut().find(|entry| &entry.id == id)
    }
}

/// Optional sign followed by leading digits, after leading whitespace. "12b" is 12,
/// "abc" and "" are 0, overflow saturates.
fn parse_leading_int(raw: &str) -> i64 {
    let text = raw.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, digit| acc.saturating_mul(10).saturating_add(i64::from(digit - b'0')));

    if negative {
        -magnitude
    } else {
        magnitude
    }
}
