use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "memopairs")]
#[command(author, version, about = "Memory-matching card game - GUI-first application", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the game window
    Gui,

    /// Show status and configuration
    Status,

    /// Play random games headlessly and report attempts per game
    Simulate {
        /// RNG seed for reproducible runs
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of games to play
        #[arg(short, long, default_value_t = 1)]
        games: u32,
    },
}
