use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use memopairs::{
    cli::{Cli, Commands},
    config::Config,
    game::Board,
    Error, Result,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = Config::load()?;
    log::debug!("Configuration loaded");

    match cli.command {
        // Launch the GUI when no command is provided
        None | Some(Commands::Gui) => run_gui(config),

        Some(Commands::Status) => {
            println!("Memo Pairs Status");
            println!("=================");
            println!();
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Configuration:");
            println!("  Pairs: {}", config.card_images.len());
            println!("  Columns: {}", config.columns);
            println!("  Card Images:");
            for image in &config.card_images {
                println!("    {}", image);
            }
            println!("  Log Level: {}", config.log_level);
            println!();

            if let Ok(config_path) = Config::config_path() {
                println!("Config Path: {:?}", config_path);
            }

            Ok(())
        }

        Some(Commands::Simulate { seed, games }) => simulate(&config, seed, games),
    }
}

fn run_gui(config: Config) -> Result<()> {
    use memopairs::gui::MemoryApp;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 640.0])
            .with_min_inner_size([640.0, 560.0])
            .with_title("Memo Pairs"),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "Memo Pairs",
        native_options,
        Box::new(|cc| Ok(Box::new(MemoryApp::new(cc, config)))),
    ) {
        eprintln!("Failed to run GUI: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Play complete games with a random strategy: flip two random face-down
/// cards, press check, repeat until every pair is found.
fn simulate(config: &Config, seed: Option<u64>, games: u32) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(rand::thread_rng())
            .map_err(|e| Error::Other(format!("Failed to seed RNG: {}", e)))?,
    };

    println!("Simulating {} game(s) with {} pairs...", games, config.card_images.len());

    for game in 1..=games {
        let mut board = Board::seeded(&config.card_images, config.columns as usize, rng.gen());

        while !board.is_won() {
            let mut face_down: Vec<usize> = board
                .slots()
                .iter()
                .enumerate()
                .filter(|(_, slot)| slot.as_ref().is_some_and(|c| !c.is_face_up()))
                .map(|(idx, _)| idx)
                .collect();

            let first = face_down.swap_remove(rng.gen_range(0..face_down.len()));
            let second = face_down[rng.gen_range(0..face_down.len())];

            board.flip(first);
            board.flip(second);
            board.check_pair();
        }

        println!(
            "  Game {}: all {} pairs found in {} attempts",
            game,
            board.total_pairs(),
            board.attempts()
        );
    }

    Ok(())
}
