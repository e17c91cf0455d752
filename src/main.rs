use anyhow::{Context, Result};
use clap::Parser;
use playlist_engine::{cli, PlaylistEngine};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "playlist-engine")]
#[command(about = "In-memory playlist manager with an interactive menu", long_about = None)]
struct Args {
    /// Read menu commands from a script file instead of stdin
    #[arg(short = 's', long)]
    script: Option<PathBuf>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut engine = PlaylistEngine::new();
    let mut stdout = io::stdout();

    match args.script {
        Some(path) => {
            log::info!("Running script: {:?}", path);
            let file = File::open(&path)
                .with_context(|| format!("Failed to open script file: {:?}", path))?;
            let mut reader = BufReader::new(file);
            cli::run(&mut reader, &mut stdout, &mut engine)?;
        }
        None => {
            let stdin = io::stdin();
            let mut reader = stdin.lock();
            cli::run(&mut reader, &mut stdout, &mut engine)?;
        }
    }

    log::info!(
        "Session ended with {} track(s) in the playlist",
        engine.len()
    );
    Ok(())
}
