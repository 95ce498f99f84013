use super::{Playlist, Track, TrackArena};
use std::collections::HashMap;

/// Result of [`PlaylistRegistry::create`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateStatus {
    Created,
    AlreadyExists,
}

/// Result of [`PlaylistRegistry::enqueue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnqueueStatus {
    Added,
    Missing,
}

/// Named playlists and the tracks queued in them
///
/// A name stays registered once created, even after its queue drains.
#[derive(Debug, Default)]
pub struct PlaylistRegistry {
    /// Owner of every queued track
    arena: TrackArena,

    /// Playlists by name
    playlists: HashMap<String, Playlist>,

    /// Names in creation order
    order: Vec<String>,
}

impl PlaylistRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` with an empty queue
    pub fn create(&mut self, name: &str) -> CreateStatus {
        if self.playlists.contains_key(name) {
            return CreateStatus::AlreadyExists;
        }

        self.playlists
            .insert(name.to_string(), Playlist::new(name.to_string()));
        self.order.push(name.to_string());
        log::debug!("Registry: created playlist '{}'", name);
        CreateStatus::Created
    }

    /// Append a new track titled `title` to playlist `name`
    pub fn enqueue(&mut self, name: &str, title: impl Into<String>) -> EnqueueStatus {
        let Some(playlist) = self.playlists.get_mut(name) else {
            return EnqueueStatus::Missing;
        };

        let id = self.arena.insert(title);
        playlist.enqueue(id);
        log::debug!("Registry: queued {} in '{}' ({} queued)", id, name, playlist.len());
        EnqueueStatus::Added
    }

    /// Remove the front track of `name` and destroy it
    ///
    /// Returns the removed track, or `None` if the playlist is empty or missing.
    pub fn dequeue_and_discard(&mut self, name: &str) -> Option<Track> {
        self.dequeue(name)
    }

    /// Take the front track of `name` for playback
    ///
    /// Same semantics as [`dequeue_and_discard`](Self::dequeue_and_discard):
    /// the track leaves the registry and nothing remembers it as playing.
    pub fn dequeue_and_play(&mut self, name: &str) -> Option<Track> {
        self.dequeue(name)
    }

    fn dequeue(&mut self, name: &str) -> Option<Track> {
        let id = self.playlists.get_mut(name)?.dequeue()?;
        let track = self.arena.remove(id);
        if track.is_none() {
            log::warn!("Registry: {} queued in '{}' had no arena entry", id, name);
        }
        track
    }

    /// Whether `name` has been created
    pub fn contains(&self, name: &str) -> bool {
        self.playlists.contains_key(name)
    }

    /// Number of queued tracks in `name`
    pub fn queue_len(&self, name: &str) -> Option<usize> {
        self.playlists.get(name).map(Playlist::len)
    }

    /// Titles queued in `name`, front to back
    pub fn titles(&self, name: &str) -> Option<Vec<&str>> {
        let playlist = self.playlists.get(name)?;
        Some(
            playlist
                .entries()
                .filter_map(|id| self.arena.title(id))
                .collect(),
        )
    }

    /// Playlist names in creation order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Number of queued tracks across all playlists
    pub fn queued_track_count(&self) -> usize {
        self.arena.len()
    }

    /// Number of playlists
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}
