use anyhow::Result;
use clap::Parser;
use songqueue::menu::MenuSession;
use songqueue::{Command, PlayerConfig};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "songqueue")]
#[command(about = "In-memory music queue with history and playlists", long_about = None)]
struct Args {
    /// Seed file with one song title per line
    #[arg(short = 's', long = "songs")]
    seed_file: Option<PathBuf>,

    /// Add a song at startup (can be specified multiple times)
    #[arg(long = "song")]
    songs: Vec<String>,

    /// Create a playlist at startup (can be specified multiple times)
    #[arg(long = "playlist")]
    playlists: Vec<String>,

    /// Run the scripted demo instead of the interactive menu
    #[arg(long)]
    demo: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // stdout belongs to the menu, keep logging quiet unless asked
    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = PlayerConfig::new()
        .with_songs(args.songs)
        .with_playlists(args.playlists);
    if let Some(path) = args.seed_file {
        config = config.with_seed_file(path);
    }

    let mut player = config.build()?;

    if args.demo {
        log::info!("Running demo script");
        for command in Command::demo_script() {
            let outcome = player.dispatch(command);
            println!("{}", outcome);
        }
        return Ok(());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = MenuSession::new(&mut player, stdin.lock(), stdout.lock()).run()?;
    log::info!(
        "Session finished after {} commands ({})",
        summary.commands,
        if summary.exited { "exit" } else { "end of input" }
    );

    Ok(())
}
