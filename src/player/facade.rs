//! The music player facade

use super::command::Command;
use super::outcome::Outcome;
use crate::model::{
    CreateStatus, EnqueueStatus, HistoryStack, PlaylistRegistry, TrackCatalog, TrackId,
};

/// Song catalog, play history and playlists behind one entry point
///
/// "Next" follows catalog order while "previous" pops the play history, so
/// going back retraces the path actually taken.
#[derive(Debug, Default)]
pub struct MusicPlayer {
    catalog: TrackCatalog,
    history: HistoryStack,
    playlists: PlaylistRegistry,
}

impl MusicPlayer {
    /// Create a player with an empty catalog and no playlists
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one command and report its outcome
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        log::debug!("Dispatching {}", command.label());

        match command {
            Command::AddSong { title } => {
                self.add_song(&title);
                Outcome::SongAdded { title }
            }
            Command::PlayNext => self.play_next(),
            Command::PlayPrev => self.play_prev(),
            Command::CreatePlaylist { name } => self.create_playlist(&name),
            Command::AddToPlaylist { name, title } => self.add_to_playlist(&name, &title),
            Command::RemoveFromPlaylist { name } => self.remove_from_playlist(&name),
            Command::PlayFromPlaylist { name } => self.play_from_playlist(&name),
        }
    }

    /// Append a song to the catalog
    pub fn add_song(&mut self, title: &str) -> TrackId {
        self.catalog.add_track(title)
    }

    /// Advance to the next catalog track
    ///
    /// The current track is pushed onto the history before advancing, even
    /// when there turns out to be no next track. An empty catalog reports
    /// [`Outcome::NoNext`] and records nothing.
    pub fn play_next(&mut self) -> Outcome {
        let Some(current) = self.catalog.current() else {
            log::debug!("play_next on empty catalog");
            return Outcome::NoNext;
        };

        self.history.push(current);
        log::debug!("History: pushed {} (depth {})", current, self.history.len());

        match self.catalog.advance() {
            Some(title) => Outcome::Playing {
                title: title.to_string(),
            },
            None => Outcome::NoNext,
        }
    }

    /// Return to the most recently left track
    pub fn play_prev(&mut self) -> Outcome {
        let Some(previous) = self.history.pop() else {
            return Outcome::NoPrevious;
        };

        match self.catalog.set_current(previous) {
            Some(title) => Outcome::Playing {
                title: title.to_string(),
            },
            None => {
                // History only ever holds catalog ids, which are never removed
                log::warn!("History entry {} is not in the catalog", previous);
                Outcome::NoPrevious
            }
        }
    }

    pub fn create_playlist(&mut self, name: &str) -> Outcome {
        match self.playlists.create(name) {
            CreateStatus::Created => Outcome::PlaylistCreated {
                name: name.to_string(),
            },
            CreateStatus::AlreadyExists => Outcome::PlaylistExists {
                name: name.to_string(),
            },
        }
    }

    pub fn add_to_playlist(&mut self, name: &str, title: &str) -> Outcome {
        match self.playlists.enqueue(name, title) {
            EnqueueStatus::Added => Outcome::AddedToPlaylist {
                name: name.to_string(),
                title: title.to_string(),
            },
            EnqueueStatus::Missing => Outcome::PlaylistMissing {
                name: name.to_string(),
            },
        }
    }

    /// Drop the front track of a playlist without playing it
    pub fn remove_from_playlist(&mut self, name: &str) -> Outcome {
        match self.playlists.dequeue_and_discard(name) {
            Some(track) => Outcome::RemovedFromPlaylist {
                name: name.to_string(),
                title: track.title,
            },
            None => Outcome::PlaylistEmptyOrMissing {
                name: name.to_string(),
            },
        }
    }

    /// Play (and consume) the front track of a playlist
    pub fn play_from_playlist(&mut self, name: &str) -> Outcome {
        match self.playlists.dequeue_and_play(name) {
            Some(track) => Outcome::PlayingFromPlaylist {
                name: name.to_string(),
                title: track.title,
            },
            None => Outcome::PlaylistEmptyOrMissing {
                name: name.to_string(),
            },
        }
    }

    /// Title of the catalog's current track
    pub fn current_title(&self) -> Option<&str> {
        self.catalog.current_track().map(|t| t.title.as_str())
    }

    pub fn catalog(&self) -> &TrackCatalog {
        &self.catalog
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn playlists(&self) -> &PlaylistRegistry {
        &self.playlists
    }
}
