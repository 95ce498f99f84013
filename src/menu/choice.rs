use std::str::FromStr;
use thiserror::Error;

/// Errors from reading a menu selection
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MenuError {
    /// Input was not an integer
    #[error("not a number: {0:?}")]
    NotANumber(String),

    /// Integer outside 1-8
    #[error("no menu entry {0}")]
    OutOfRange(i64),
}

/// Numbered menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddSong,
    PlayNext,
    PlayPrev,
    CreatePlaylist,
    AddToPlaylist,
    RemoveFromPlaylist,
    PlayFromPlaylist,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::AddSong,
        MenuChoice::PlayNext,
        MenuChoice::PlayPrev,
        MenuChoice::CreatePlaylist,
        MenuChoice::AddToPlaylist,
        MenuChoice::RemoveFromPlaylist,
        MenuChoice::PlayFromPlaylist,
        MenuChoice::Exit,
    ];

    /// Number the user types for this entry
    pub fn number(self) -> u8 {
        match self {
            MenuChoice::AddSong => 1,
            MenuChoice::PlayNext => 2,
            MenuChoice::PlayPrev => 3,
            MenuChoice::CreatePlaylist => 4,
            MenuChoice::AddToPlaylist => 5,
            MenuChoice::RemoveFromPlaylist => 6,
            MenuChoice::PlayFromPlaylist => 7,
            MenuChoice::Exit => 8,
        }
    }

    /// Menu line text
    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddSong => "Add song",
            MenuChoice::PlayNext => "Play next",
            MenuChoice::PlayPrev => "Play previous",
            MenuChoice::CreatePlaylist => "Create playlist",
            MenuChoice::AddToPlaylist => "Add song to playlist",
            MenuChoice::RemoveFromPlaylist => "Remove song from playlist",
            MenuChoice::PlayFromPlaylist => "Play from playlist",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let n: i64 = trimmed
            .parse()
            .map_err(|_| MenuError::NotANumber(trimmed.to_string()))?;

        MenuChoice::ALL
            .into_iter()
            .find(|c| i64::from(c.number()) == n)
            .ok_or(MenuError::OutOfRange(n))
    }
}
