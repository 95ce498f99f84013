use super::{Track, TrackArena, TrackId};
use std::collections::HashMap;

/// Ordered song sequence with a movable cursor
///
/// The sequence only grows. The cursor is `None` only while the catalog is
/// empty and otherwise always points at a track held here.
#[derive(Debug, Default)]
pub struct TrackCatalog {
    /// Owner of every catalog track
    arena: TrackArena,

    /// Track ids in insertion order
    order: Vec<TrackId>,

    /// Position of each id within `order`; ids are not contiguous since
    /// every arena draws from the same counter
    positions: HashMap<TrackId, usize>,

    /// Index into `order` of the current track
    cursor: Option<usize>,
}

impl TrackCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a track at the tail
    ///
    /// The first track added also becomes the current track.
    pub fn add_track(&mut self, title: impl Into<String>) -> TrackId {
        let id = self.arena.insert(title);
        self.positions.insert(id, self.order.len());
        self.order.push(id);

        if self.cursor.is_none() {
            self.cursor = Some(0);
        }

        log::debug!("Catalog: appended {} at position {}", id, self.order.len() - 1);
        id
    }

    /// Move the cursor to the successor and return its title
    ///
    /// Returns `None` when there is no current track or it is the tail.
    pub fn advance(&mut self) -> Option<&str> {
        let next = self.cursor? + 1;
        if next >= self.order.len() {
            return None;
        }
        self.cursor = Some(next);
        self.arena.title(self.order[next])
    }

    /// Move the cursor to the predecessor and return its title
    ///
    /// Returns `None` when there is no current track or it is the head.
    pub fn retreat(&mut self) -> Option<&str> {
        let prev = self.cursor?.checked_sub(1)?;
        self.cursor = Some(prev);
        self.arena.title(self.order[prev])
    }

    /// Point the cursor at `id` and return its title
    ///
    /// Ids not held by this catalog are refused and leave the cursor as is.
    pub fn set_current(&mut self, id: TrackId) -> Option<&str> {
        let pos = *self.positions.get(&id)?;
        self.cursor = Some(pos);
        self.arena.title(id)
    }

    /// Id of the current track
    pub fn current(&self) -> Option<TrackId> {
        self.cursor.map(|pos| self.order[pos])
    }

    /// The current track
    pub fn current_track(&self) -> Option<&Track> {
        self.current().and_then(|id| self.arena.get(id))
    }

    /// First track in the sequence
    pub fn head(&self) -> Option<TrackId> {
        self.order.first().copied()
    }

    /// Last track in the sequence
    pub fn tail(&self) -> Option<TrackId> {
        self.order.last().copied()
    }

    /// Look up a catalog track by id
    pub fn get(&self, id: TrackId) -> Option<&Track> {
        self.arena.get(id)
    }

    /// All tracks in insertion order
    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.order.iter().filter_map(|id| self.arena.get(*id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_of(titles: &[&str]) -> TrackCatalog {
        let mut catalog = TrackCatalog::new();
        for title in titles {
            catalog.add_track(*title);
        }
        catalog
    }

    #[test]
    fn test_empty_catalog() {
        let mut catalog = TrackCatalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.current().is_none());
        assert!(catalog.head().is_none());
        assert!(catalog.advance().is_none());
        assert!(catalog.retreat().is_none());
    }

    #[test]
    fn test_first_track_becomes_head_tail_and_current() {
        let mut catalog = TrackCatalog::new();
        let id = catalog.add_track("");

        assert_eq!(catalog.head(), Some(id));
        assert_eq!(catalog.tail(), Some(id));
        assert_eq!(catalog.current(), Some(id));
        assert_eq!(catalog.current_track().unwrap().title, "");
    }

    #[test]
    fn test_add_keeps_cursor() {
        let mut catalog = catalog_of(&["A"]);
        let first = catalog.current();
        let b = catalog.add_track("B");

        assert_eq!(catalog.current(), first);
        assert_eq!(catalog.tail(), Some(b));
    }

    #[test]
    fn test_insertion_order() {
        let catalog = catalog_of(&["A", "B", "A", "C"]);
        let titles: Vec<&str> = catalog.tracks().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "A", "C"]);
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_advance_and_retreat() {
        let mut catalog = catalog_of(&["A", "B", "C"]);

        assert_eq!(catalog.advance(), Some("B"));
        assert_eq!(catalog.advance(), Some("C"));
        assert_eq!(catalog.advance(), None);
        assert_eq!(catalog.current_track().unwrap().title, "C");

        assert_eq!(catalog.retreat(), Some("B"));
        assert_eq!(catalog.retreat(), Some("A"));
        assert_eq!(catalog.retreat(), None);
        assert_eq!(catalog.current(), catalog.head());
    }

    #[test]
    fn test_set_current_rejects_foreign_id() {
        let mut catalog = catalog_of(&["A", "B"]);
        let tail = catalog.tail().unwrap();
        assert_eq!(catalog.set_current(tail), Some("B"));

        let foreign = TrackArena::new().insert("from another arena");
        assert!(catalog.set_current(foreign).is_none());
        assert_eq!(catalog.current(), Some(tail));
    }

    #[test]
    fn test_set_current_rejects_playlist_track() {
        let mut catalog = catalog_of(&["A", "B", "C"]);
        let mut registry = crate::model::PlaylistRegistry::new();
        registry.create("p");
        registry.enqueue("p", "Queued");
        let queued = registry.dequeue_and_play("p").unwrap();

        assert!(catalog.set_current(queued.id).is_none());
        assert_eq!(catalog.current(), catalog.head());
    }
}
