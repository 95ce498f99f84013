//! Player startup configuration

use super::MusicPlayer;
use crate::seed;
use anyhow::Result;
use std::path::PathBuf;

/// What a new player is loaded with before the first command
#[derive(Debug, Clone, Default)]
pub struct PlayerConfig {
    /// Titles added to the catalog, after any seed file titles
    pub songs: Vec<String>,

    /// Text file with one song title per line (`~` is expanded)
    pub seed_file: Option<PathBuf>,

    /// Playlists created at startup
    pub playlists: Vec<String>,
}

impl PlayerConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Add songs to the initial catalog
    pub fn with_songs(mut self, songs: Vec<String>) -> Self {
        self.songs.extend(songs);
        self
    }

    /// Load initial songs from a file
    pub fn with_seed_file(mut self, path: PathBuf) -> Self {
        self.seed_file = Some(path);
        self
    }

    /// Create these playlists at startup
    pub fn with_playlists(mut self, playlists: Vec<String>) -> Self {
        self.playlists.extend(playlists);
        self
    }

    /// Build a player from this configuration
    pub fn build(&self) -> Result<MusicPlayer> {
        let mut player = MusicPlayer::new();

        if let Some(ref path) = self.seed_file {
            let titles = seed::load_titles(path)?;
            log::info!("Seeding {} songs from {:?}", titles.len(), path);
            for title in &titles {
                player.add_song(title);
            }
        }

        for title in &self.songs {
            player.add_song(title);
        }

        for name in &self.playlists {
            player.create_playlist(name);
        }

        log::info!(
            "Player ready: {} songs, {} playlists",
            player.catalog().len(),
            player.playlists().len()
        );
        Ok(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_without_seed_file() {
        let player = PlayerConfig::new()
            .with_songs(vec!["A".to_string(), "B".to_string()])
            .with_playlists(vec!["p".to_string(), "p".to_string()])
            .build()
            .unwrap();

        let titles: Vec<&str> = player.catalog().tracks().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
        assert_eq!(player.current_title(), Some("A"));
        assert_eq!(player.playlists().len(), 1);
    }

    #[test]
    fn test_missing_seed_file_is_an_error() {
        let result = PlayerConfig::new()
            .with_seed_file(PathBuf::from("/nonexistent/songqueue/seed.txt"))
            .build();
        assert!(result.is_err());
    }
}
