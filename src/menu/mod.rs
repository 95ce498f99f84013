//! Numbered text menu driving a [`MusicPlayer`](crate::player::MusicPlayer)

mod choice;
mod session;

pub use choice::{MenuChoice, MenuError};
pub use session::{MenuSession, SessionSummary};
