//! Reported results of player operations

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a player operation reports back to its caller
///
/// Soft failures (nothing to play, unknown playlist) are variants here, not
/// errors. `Display` renders the line shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    SongAdded { title: String },
    Playing { title: String },
    NoNext,
    NoPrevious,
    PlaylistCreated { name: String },
    PlaylistExists { name: String },
    AddedToPlaylist { name: String, title: String },
    PlaylistMissing { name: String },
    RemovedFromPlaylist { name: String, title: String },
    PlayingFromPlaylist { name: String, title: String },
    PlaylistEmptyOrMissing { name: String },
}

impl Outcome {
    /// Whether the operation changed or played something
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            Outcome::SongAdded { .. }
                | Outcome::Playing { .. }
                | Outcome::PlaylistCreated { .. }
                | Outcome::AddedToPlaylist { .. }
                | Outcome::RemovedFromPlaylist { .. }
                | Outcome::PlayingFromPlaylist { .. }
        )
    }

    /// Title of the track being played, if any
    pub fn now_playing(&self) -> Option<&str> {
        match self {
            Outcome::Playing { title } | Outcome::PlayingFromPlaylist { title, .. } => {
                Some(title.as_str())
            }
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::SongAdded { title } => write!(f, "Added song: {}", title),
            Outcome::Playing { title } => write!(f, "Playing: {}", title),
            Outcome::NoNext => write!(f, "No next song available."),
            Outcome::NoPrevious => write!(f, "No previous song available."),
            Outcome::PlaylistCreated { name } => write!(f, "Playlist '{}' created.", name),
            Outcome::PlaylistExists { name } => write!(f, "Playlist '{}' already exists.", name),
            Outcome::AddedToPlaylist { name, title } => {
                write!(f, "Added '{}' to playlist '{}'.", title, name)
            }
            Outcome::PlaylistMissing { name } => {
                write!(f, "Playlist '{}' does not exist.", name)
            }
            Outcome::RemovedFromPlaylist { name, title } => {
                write!(f, "Removed '{}' from playlist '{}'.", title, name)
            }
            Outcome::PlayingFromPlaylist { name, title } => {
                write!(f, "Playing from playlist '{}': {}", name, title)
            }
            Outcome::PlaylistEmptyOrMissing { name } => {
                write!(f, "Playlist '{}' is empty or does not exist.", name)
            }
        }
    }
}
