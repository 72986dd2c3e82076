//! Error types for the fallible edges of the crate.
//!
//! Quest resolution itself never fails: bad catalog data degrades to fallbacks
//! and business failures are reported as `success: false`. Errors only come out
//! of persistence, configuration loading, and roster lookups.

use thiserror::Error;

/// Unified error type for guild operations that touch the outside world.
#[derive(Debug, Error)]
pub enum GuildError {
    /// Underlying file system failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Binary snapshot could not be encoded or decoded
    #[error("Snapshot encoding failed: {0}")]
    Encoding(#[from] bincode::Error),

    /// JSON config or report could not be parsed or written
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Save file was written by an incompatible version
    #[error("Save version mismatch: expected {expected:#x}, found {found:#x}")]
    VersionMismatch { expected: u64, found: u64 },

    /// Save file content does not match its checksum
    #[error("Save checksum mismatch")]
    ChecksumMismatch,

    /// Save file is shorter than its header claims
    #[error("Save file truncated: {0}")]
    Truncated(&'static str),

    /// Platform config directory could not be resolved
    #[error("Could not determine save directory")]
    NoSaveDirectory,

    /// Adventurer id does not resolve against the roster
    #[error("Adventurer not found: {0}")]
    AdventurerNotFound(u32),

    /// Quest id does not resolve against the board
    #[error("Quest not found: {0}")]
    QuestNotFound(u32),
}

/// Validation failure for a manual assignment.
///
/// Returned as a value to the UI layer, which shows the message and leaves the
/// guild untouched.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AssignmentError {
    #[error("Quest {0} is not on the board")]
    UnknownQuest(u32),

    #[error("Adventurer {0} is not in the guild")]
    UnknownAdventurer(u32),

    #[error("{name} is not available")]
    Unavailable { name: String },

    #[error("Party needs {required} members, got {given}")]
    PartySize { required: usize, given: usize },

    #[error("Adventurer {0} was listed twice")]
    DuplicateMember(u32),

    #[error("The guild has already entered this tournament season")]
    TournamentEntered,
}

impl AssignmentError {
    /// Message shown to the player.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_error_messages() {
        let err = AssignmentError::PartySize {
            required: 3,
            given: 1,
        };
        assert_eq!(err.message(), "Party needs 3 members, got 1");

        let err = AssignmentError::Unavailable {
            name: "Aldric".to_string(),
        };
        assert_eq!(err.message(), "Aldric is not available");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: GuildError = io.into();
        assert!(matches!(err, GuildError::Io(_)));
    }
}
