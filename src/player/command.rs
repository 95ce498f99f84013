//! Player commands
//!
//! Front ends (the terminal menu, tests, anything else) build these and hand
//! them to [`MusicPlayer::dispatch`](super::MusicPlayer::dispatch).

use serde::{Deserialize, Serialize};

/// One user-facing player operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    AddSong { title: String },
    PlayNext,
    PlayPrev,
    CreatePlaylist { name: String },
    AddToPlaylist { name: String, title: String },
    RemoveFromPlaylist { name: String },
    PlayFromPlaylist { name: String },
}

impl Command {
    /// Short name used in logs
    pub fn label(&self) -> &'static str {
        match self {
            Command::AddSong { .. } => "add_song",
            Command::PlayNext => "play_next",
            Command::PlayPrev => "play_prev",
            Command::CreatePlaylist { .. } => "create_playlist",
            Command::AddToPlaylist { .. } => "add_to_playlist",
            Command::RemoveFromPlaylist { .. } => "remove_from_playlist",
            Command::PlayFromPlaylist { .. } => "play_from_playlist",
        }
    }

    /// Scripted walkthrough of every operation, used by `--demo`
    pub fn demo_script() -> Vec<Command> {
        let playlist = "Favorites".to_string();
        vec![
            Command::AddSong {
                title: "Song 1".to_string(),
            },
            Command::AddSong {
                title: "Song 2".to_string(),
            },
            Command::AddSong {
                title: "Song 3".to_string(),
            },
            Command::PlayNext,
            Command::PlayNext,
            Command::PlayPrev,
            Command::CreatePlaylist {
                name: playlist.clone(),
            },
            Command::AddToPlaylist {
                name: playlist.clone(),
                title: "Song 4".to_string(),
            },
            Command::AddToPlaylist {
                name: playlist.clone(),
                title: "Song 5".to_string(),
            },
            Command::PlayFromPlaylist {
                name: playlist.clone(),
            },
            Command::PlayFromPlaylist { name: playlist },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_layout() {
        let command = Command::AddToPlaylist {
            name: "mix".to_string(),
            title: "Song 4".to_string(),
        };
        let json = serde_json::to_value(&command).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "op": "add_to_playlist", "name": "mix", "title": "Song 4" })
        );

        let json = serde_json::to_value(Command::PlayNext).unwrap();
        assert_eq!(json, serde_json::json!({ "op": "play_next" }));
    }

    #[test]
    fn test_json_round_trip() {
        for command in Command::demo_script() {
            let text = serde_json::to_string(&command).unwrap();
            let parsed: Command = serde_json::from_str(&text).unwrap();
            assert_eq!(parsed, command);
        }

        let parsed: Command =
            serde_json::from_str(r#"{"op":"play_from_playlist","name":"p"}"#).unwrap();
        assert_eq!(
            parsed,
            Command::PlayFromPlaylist {
                name: "p".to_string()
            }
        );
        assert!(serde_json::from_str::<Command>(r#"{"op":"shuffle"}"#).is_err());
    }
}
