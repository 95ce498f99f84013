//! songqueue - in-memory music queue manager
//!
//! Keeps an ordered song catalog with a playback cursor, a play-history
//! stack for "previous", and named FIFO playlists. Front ends drive it
//! through [`player::Command`]s.

pub mod menu;
pub mod model;
pub mod player;
pub mod seed;

pub use player::{Command, MusicPlayer, Outcome, PlayerConfig};
