//! Root application state.
//!
//! `AppState` owns the master roster, the lineup collection, the selected key and the
//! delete confirmation prompt. Every event goes through one of its transition methods;
//! movement events are computed by the engines and swapped in whole.

pub mod command;

#[cfg(test)]
mod tests;

pub use command::{Command, DeletePrompt, Outcome};

use crate::config::{LineupConfig, SeedData};
use crate::data::{sample_lineups, sample_roster};
use crate::engine::{self, DragSource, DropTarget, IgnoreReason, MoveResult};
use crate::error::{LineupError, Result};
use crate::field::resolve_field_drop;
use crate::models::{
    Lineup, LineupBook, LineupKey, Player, PlayerId, Position, Roster, RosterPlayer,
};

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    roster: Roster,
    lineups: LineupBook,
    selected: Option<LineupKey>,
    delete_prompt: DeletePrompt,
    key_prefix: String,
}

impl AppState {
    /// State over `roster` and `lineups` with the first lineup selected.
    pub fn new(roster: Roster, lineups: LineupBook) -> Self {
        let selected = lineups.key_at(0).cloned();
        Self {
            roster,
            lineups,
            selected,
            delete_prompt: DeletePrompt::Idle,
            key_prefix: LineupConfig::default().key_prefix,
        }
    }

    pub fn from_config(config: &LineupConfig) -> Self {
        let mut state = match config.seed {
            SeedData::Sample => {
                let roster = sample_roster();
                let lineups = sample_lineups(&roster);
                Self::new(roster, lineups)
            }
            SeedData::Empty => Self::new(Roster::default(), LineupBook::new()),
        };
        state.key_prefix.clone_from(&config.key_prefix);
        log::info!(
            "state ready: {} players, {} lineups",
            state.roster.len(),
            state.lineups.len()
        );
        state
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn lineups(&self) -> &LineupBook {
        &self.lineups
    }

    pub fn selected_key(&self) -> Option<&LineupKey> {
        self.selected.as_ref()
    }

    pub fn selected_lineup(&self) -> Option<&Lineup> {
        self.selected.as_ref().and_then(|key| self.lineups.get(key))
    }

    pub fn delete_prompt(&self) -> &DeletePrompt {
        &self.delete_prompt
    }

    /// Roster-wide panel: the selected lineup's roster status, or nothing.
    pub fn roster_panel(&self) -> &[RosterPlayer] {
        self.selected_lineup().map(|lineup| lineup.roster_status.as_slice()).unwrap_or_default()
    }

    // ========================================================================
    // Movement
    // ========================================================================

    pub fn relocate_player(
        &mut self,
        player_id: &PlayerId,
        source: DragSource,
        target: DropTarget,
        target_index: usize,
    ) -> Outcome {
        let result = self.with_selected(|lineup| {
            engine::relocate_player(lineup, &self.roster, player_id, source, target, target_index)
        });
        self.commit(result)
    }

    /// Position selector in the starting table; any position, DP included.
    pub fn reposition_player(&mut self, player_id: &PlayerId, position: Position) -> Outcome {
        let result =
            self.with_selected(|lineup| engine::reposition_player(lineup, player_id, position));
        self.commit(result)
    }

    pub fn drop_on_field(&mut self, player_id: &PlayerId, x: f32, y: f32) -> Outcome {
        let result = self.with_selected(|lineup| resolve_field_drop(lineup, player_id, x, y));
        self.commit(result)
    }

    fn with_selected(&self, op: impl FnOnce(&Lineup) -> MoveResult) -> MoveResult {
        self.selected_lineup().ok_or(IgnoreReason::NoLineupSelected).and_then(op)
    }

    fn commit(&mut self, result: MoveResult) -> Outcome {
        let lineup = match result {
            Ok(lineup) => lineup,
            Err(reason) => {
                log::debug!("event ignored: {reason}");
                return Outcome::Ignored(reason);
            }
        };
        let Some(key) = self.selected.as_ref() else {
            return Outcome::Ignored(IgnoreReason::NoLineupSelected);
        };
        if self.lineups.replace(key, lineup) {
            Outcome::Applied
        } else {
            Outcome::Ignored(IgnoreReason::NoLineupSelected)
        }
    }

    // ========================================================================
    // Roster
    // ========================================================================

    /// Replace the roster and cascade the edit into every lineup.
    pub fn apply_roster_edit(&mut self, players: Vec<Player>) {
        let roster = Roster::new(players);
        let lineups = engine::apply_roster_edit(&self.lineups, &roster);
        self.roster = roster;
        self.lineups = lineups;
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Add an empty lineup with the whole roster on the bench, and select it.
    pub fn create_lineup(&mut self, title: &str) -> Result<LineupKey> {
        let title = title.trim();
        if title.is_empty() {
            return Err(LineupError::BlankTitle);
        }

        let mut key = LineupKey::generate(&self.key_prefix);
        while self.lineups.contains(&key) {
            key = LineupKey::generate(&self.key_prefix);
        }

        let lineup = Lineup::with_full_bench(title, self.roster.players());
        self.lineups.insert(key.clone(), lineup);
        self.selected = Some(key.clone());
        self.delete_prompt = DeletePrompt::Idle;
        log::info!("created lineup {key} '{title}'");
        Ok(key)
    }

    /// Start deleting the selected lineup. Refused when it is the only one left.
    pub fn request_delete(&mut self) -> Result<()> {
        self.guard_last_lineup()?;
        let key = self.selected.clone().ok_or(LineupError::NoLineupSelected)?;
        self.delete_prompt = DeletePrompt::PendingConfirm { key };
        Ok(())
    }

    pub fn cancel_delete(&mut self) {
        self.delete_prompt = DeletePrompt::Idle;
    }

    /// Commit a pending deletion and select the lineup that preceded it.
    pub fn delete_lineup_confirmed(&mut self) -> Result<LineupKey> {
        self.guard_last_lineup()?;
        let DeletePrompt::PendingConfirm { key } = std::mem::take(&mut self.delete_prompt) else {
            return Err(LineupError::NoPendingDeletion);
        };

        let (index, lineup) =
            self.lineups.remove(&key).ok_or_else(|| LineupError::UnknownLineup(key.clone()))?;
        self.selected = self.lineups.key_at(index.saturating_sub(1)).cloned();
        log::info!("deleted lineup {key} '{}'", lineup.title);
        Ok(key)
    }

    pub fn select_lineup(&mut self, key: &LineupKey) -> Result<()> {
        if !self.lineups.contains(key) {
            return Err(LineupError::UnknownLineup(key.clone()));
        }
        self.selected = Some(key.clone());
        self.delete_prompt = DeletePrompt::Idle;
        Ok(())
    }

    fn guard_last_lineup(&self) -> Result<()> {
        if self.lineups.len() <= 1 {
            log::warn!("refusing to delete the last lineup");
            return Err(LineupError::LastLineup);
        }
        Ok(())
    }

    // ========================================================================
    // Commands
    // ========================================================================

    pub fn dispatch(&mut self, command: Command) -> Result<Outcome> {
        log::debug!("dispatch {}", command.name());
        let outcome = match command {
            Command::RelocatePlayer { player_id, source, target, target_index } => {
                self.relocate_player(&player_id, source, target, target_index)
            }
            Command::RepositionPlayer { player_id, position } => {
                self.reposition_player(&player_id, position)
            }
            Command::FieldDrop { player_id, x, y } => self.drop_on_field(&player_id, x, y),
            Command::ApplyRosterEdit { players } => {
                self.apply_roster_edit(players);
                Outcome::Applied
            }
            Command::CreateLineup { title } => {
                self.create_lineup(&title)?;
                Outcome::Applied
            }
            Command::RequestDelete => {
                self.request_delete()?;
                Outcome::Applied
            }
            Command::CancelDelete => {
                self.cancel_delete();
                Outcome::Applied
            }
            Command::ConfirmDelete => {
                self.delete_lineup_confirmed()?;
                Outcome::Applied
            }
            Command::SelectLineup { key } => {
                self.select_lineup(&key)?;
                Outcome::Applied
            }
        };
        Ok(outcome)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&LineupConfig::default())
    }
}
