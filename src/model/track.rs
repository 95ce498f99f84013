use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Shared by every arena so ids from different arenas never collide
static NEXT_TRACK_ID: AtomicU64 = AtomicU64::new(0);

/// Stable handle to a track stored in a [`TrackArena`]
///
/// Ids come from one process-wide counter and are never reused, so an id
/// from another arena or a stale id can only miss, never alias a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TrackId(u64);

impl TrackId {
    fn next() -> Self {
        Self(NEXT_TRACK_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single song
///
/// Two tracks with the same title are still distinct: identity is the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Arena handle for this track
    pub id: TrackId,

    /// Track title (may be empty)
    pub title: String,
}

/// Owner of track values, addressed by [`TrackId`]
#[derive(Debug, Default)]
pub struct TrackArena {
    tracks: HashMap<TrackId, Track>,
}

impl TrackArena {
    /// Create an empty arena
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new track and return its id
    pub fn insert(&mut self, title: impl Into<String>) -> TrackId {
        let id = TrackId::next();
        self.tracks.insert(
            id,
            Track {
                id,
                title: title.into(),
            },
        );
        id
    }

    /// Get a track by id
    pub fn get(&self, id: TrackId) -> Option<&Track> {
        self.tracks.get(&id)
    }

    /// Get a track's title by id
    pub fn title(&self, id: TrackId) -> Option<&str> {
        self.tracks.get(&id).map(|t| t.title.as_str())
    }

    /// Take a track out of the arena. Dropping the result destroys it.
    pub fn remove(&mut self, id: TrackId) -> Option<Track> {
        self.tracks.remove(&id)
    }

    pub fn contains(&self, id: TrackId) -> bool {
        self.tracks.contains_key(&id)
    }

    /// Number of live tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_title_distinct_ids() {
        let mut arena = TrackArena::new();
        let a = arena.insert("Same");
        let b = arena.insert("Same");

        assert_ne!(a, b);
        assert_eq!(arena.title(a), Some("Same"));
        assert_eq!(arena.title(b), Some("Same"));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_remove_does_not_reuse_ids() {
        let mut arena = TrackArena::new();
        let a = arena.insert("A");
        let removed = arena.remove(a).unwrap();
        assert_eq!(removed.title, "A");
        assert!(!arena.contains(a));
        assert!(arena.is_empty());

        let b = arena.insert("B");
        assert_ne!(a, b);
        assert!(arena.get(a).is_none());
        assert_eq!(arena.get(b).unwrap().title, "B");
    }

    #[test]
    fn test_arenas_share_id_space() {
        let mut first = TrackArena::new();
        let mut second = TrackArena::new();
        let a = first.insert("A");
        let b = second.insert("B");

        assert_ne!(a, b);
        assert!(second.get(a).is_none());
        assert!(first.get(b).is_none());
    }
}
