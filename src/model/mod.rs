//! In-memory data model for the song queue
//!
//! Tracks live in arenas and every other structure refers to them by
//! [`TrackId`], so the catalog, history and playlist queues never share
//! ownership of a track.

mod catalog;
mod history;
mod playlist;
mod registry;
mod track;

pub use catalog::TrackCatalog;
pub use history::HistoryStack;
pub use playlist::Playlist;
pub use registry::{CreateStatus, EnqueueStatus, PlaylistRegistry};
pub use track::{Track, TrackArena, TrackId};
