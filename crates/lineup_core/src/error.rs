use thiserror::Error;

use crate::models::LineupKey;

#[derive(Error, Debug)]
pub enum LineupError {
    #[error("You cannot delete the last lineup.")]
    LastLineup,

    #[error("Unknown lineup: {0}")]
    UnknownLineup(LineupKey),

    #[error("No lineup selected")]
    NoLineupSelected,

    #[error("No deletion is awaiting confirmation")]
    NoPendingDeletion,

    #[error("Lineup title must not be blank")]
    BlankTitle,

    #[error("Invalid roster entry {id}: {reason}")]
    InvalidRosterEntry { id: String, reason: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LineupError {
    /// Errors the presentation layer must show to the user instead of dropping quietly.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, LineupError::LastLineup)
    }
}

pub type Result<T> = std::result::Result<T, LineupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_last_lineup_is_user_facing() {
        assert!(LineupError::LastLineup.is_user_facing());
        assert!(!LineupError::BlankTitle.is_user_facing());
        assert!(!LineupError::UnknownLineup("game9".into()).is_user_facing());
        assert_eq!(LineupError::LastLineup.to_string(), "You cannot delete the last lineup.");
    }
}
