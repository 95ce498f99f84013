//! Player facade, command dispatch and startup configuration

pub mod command;
pub mod config;
pub mod facade;
pub mod outcome;

pub use command::Command;
pub use config::PlayerConfig;
pub use facade::MusicPlayer;
pub use outcome::Outcome;
