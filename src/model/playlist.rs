use super::TrackId;
use std::collections::VecDeque;

/// A named FIFO queue of track ids
///
/// The tracks themselves live in the owning registry's arena.
#[derive(Debug, Clone)]
pub struct Playlist {
    /// Playlist name
    pub name: String,

    /// Queued tracks, front is played first
    queue: VecDeque<TrackId>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: String) -> Self {
        Self {
            name,
            queue: VecDeque::new(),
        }
    }

    /// Append a track at the back of the queue
    pub fn enqueue(&mut self, id: TrackId) {
        self.queue.push_back(id);
    }

    /// Take the front track id
    pub fn dequeue(&mut self) -> Option<TrackId> {
        self.queue.pop_front()
    }

    /// Queued ids, front to back
    pub fn entries(&self) -> impl Iterator<Item = TrackId> + '_ {
        self.queue.iter().copied()
    }

    /// Number of queued tracks
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
