use super::TrackId;

/// LIFO record of previously current catalog tracks
#[derive(Debug, Default, Clone)]
pub struct HistoryStack {
    entries: Vec<TrackId>,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a track at the top
    pub fn push(&mut self, id: TrackId) {
        self.entries.push(id);
    }

    /// Remove and return the top entry
    pub fn pop(&mut self) -> Option<TrackId> {
        self.entries.pop()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TrackArena;

    #[test]
    fn test_lifo_order() {
        let mut arena = TrackArena::new();
        let a = arena.insert("A");
        let b = arena.insert("B");

        let mut history = HistoryStack::new();
        assert!(history.pop().is_none());

        history.push(a);
        history.push(b);
        history.push(b);
        assert_eq!(history.len(), 3);

        assert_eq!(history.pop(), Some(b));
        assert_eq!(history.pop(), Some(b));
        assert_eq!(history.pop(), Some(a));
        assert!(history.is_empty());
    }
}
