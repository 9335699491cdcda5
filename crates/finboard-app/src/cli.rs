use clap::Parser;
use std::path::PathBuf;

/// Finboard: replay pointer input against the dashboard panel canvas.
#[derive(Parser, Debug)]
#[command(name = "finboard", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log directive override (e.g. `finboard=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// JSON file holding an array of pointer events to replay.
    #[arg(short = 's', long)]
    pub script: Option<PathBuf>,

    /// Also print the position/size/focus callbacks recorded during replay.
    #[arg(long)]
    pub events: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
