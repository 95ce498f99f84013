//! Interactive menu loop
//!
//! Reads numbered choices and free-text answers, turns them into
//! [`Command`]s and prints each [`Outcome`](crate::player::Outcome).

use super::choice::MenuChoice;
use crate::player::{Command, MusicPlayer};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

const SONG_PROMPT: &str = "Enter song title: ";
const PLAYLIST_PROMPT: &str = "Enter playlist name: ";

/// How a menu session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Commands dispatched to the player
    pub commands: usize,

    /// Whether the user picked Exit (as opposed to input ending)
    pub exited: bool,
}

/// A menu loop over any line reader and writer
pub struct MenuSession<'a, R: BufRead, W: Write> {
    player: &'a mut MusicPlayer,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> MenuSession<'a, R, W> {
    pub fn new(player: &'a mut MusicPlayer, input: R, output: W) -> Self {
        Self {
            player,
            input,
            output,
        }
    }

    /// Run until Exit is chosen or input ends
    pub fn run(&mut self) -> Result<SessionSummary> {
        let mut commands = 0;

        loop {
            self.print_menu()?;

            let Some(line) = self.read_line()? else {
                log::debug!("Menu input ended");
                return Ok(SessionSummary {
                    commands,
                    exited: false,
                });
            };

            let choice = match line.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(e) => {
                    log::debug!("Rejected menu input: {}", e);
                    writeln!(self.output, "Invalid choice. Please enter 1-8.")?;
                    continue;
                }
            };

            if choice == MenuChoice::Exit {
                writeln!(self.output, "Exiting.")?;
                return Ok(SessionSummary {
                    commands,
                    exited: true,
                });
            }

            let Some(command) = self.command_for(choice)? else {
                log::debug!("Menu input ended mid-prompt");
                return Ok(SessionSummary {
                    commands,
                    exited: false,
                });
            };

            let outcome = self.player.dispatch(command);
            commands += 1;
            writeln!(self.output, "{}", outcome)?;
        }
    }

    /// Prompt for whatever `choice` needs; `None` if input ran out
    fn command_for(&mut self, choice: MenuChoice) -> Result<Option<Command>> {
        let command = match choice {
            MenuChoice::AddSong => {
                let Some(title) = self.prompt(SONG_PROMPT)? else {
                    return Ok(None);
                };
                Command::AddSong { title }
            }
            MenuChoice::PlayNext => Command::PlayNext,
            MenuChoice::PlayPrev => Command::PlayPrev,
            MenuChoice::CreatePlaylist => {
                let Some(name) = self.prompt(PLAYLIST_PROMPT)? else {
                    return Ok(None);
                };
                Command::CreatePlaylist { name }
            }
            MenuChoice::AddToPlaylist => {
                let Some(name) = self.prompt(PLAYLIST_PROMPT)? else {
                    return Ok(None);
                };
                let Some(title) = self.prompt(SONG_PROMPT)? else {
                    return Ok(None);
                };
                Command::AddToPlaylist { name, title }
            }
            MenuChoice::RemoveFromPlaylist => {
                let Some(name) = self.prompt(PLAYLIST_PROMPT)? else {
                    return Ok(None);
                };
                Command::RemoveFromPlaylist { name }
            }
            MenuChoice::PlayFromPlaylist => {
                let Some(name) = self.prompt(PLAYLIST_PROMPT)? else {
                    return Ok(None);
                };
                Command::PlayFromPlaylist { name }
            }
            MenuChoice::Exit => return Ok(None),
        };
        Ok(Some(command))
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Music Player Menu:")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.number(), choice.label())?;
        }
        write!(self.output, "Enter your choice: ")?;
        self.output.flush().context("Failed to flush menu output")?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush().context("Failed to flush prompt")?;
        self.read_line()
    }

    /// Next input line without its line ending; `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read menu input")?;
        if read == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
