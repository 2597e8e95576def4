//! # Hatslot Driver
//!
//! Generates one or more player slots from a single seed and prints their slot
//! data, standing in for the multiworld engine that normally drives generation.

use clap::Parser;
use hatslot::config::{DEFAULT_SEED, DEFAULT_TOTAL_LOCATIONS};
use hatslot::{
    utils, HatSlotResult, PlayerId, ShuffledActEntrances, SlotOptions, SlotWorld,
    StaticWorldContext,
};
use log::{error, info};
use std::io::Write;
use std::path::PathBuf;
#[cfg(feature = "dev-tools")]
use tracing::Level;

/// Command line arguments for the slot generator.
#[derive(Parser, Debug)]
#[command(name = "hatslot")]
#[command(about = "Generates A Hat in Time randomizer slots from a seed")]
#[command(version)]
struct Args {
    /// Seed shared by every player of the run
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Number of players to generate
    #[arg(short, long, default_value_t = 1)]
    players: u32,

    /// JSON option file applied to every player
    #[arg(short, long)]
    options: Option<PathBuf>,

    /// Placeable locations per slot
    #[arg(long, default_value_t = DEFAULT_TOTAL_LOCATIONS)]
    locations: usize,

    /// Also print the spoiler log of each player
    #[arg(long)]
    spoiler: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let args = Args::parse();
    initialize_logging(&args.log_level);

    if let Err(e) = run(&args) {
        error!("Generation failed: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> HatSlotResult<()> {
    info!("Starting hatslot v{} with seed {}", hatslot::VERSION, args.seed);

    let options = match &args.options {
        Some(path) => SlotOptions::load(path)?,
        None => SlotOptions::default(),
    };

    let mut rng = utils::create_rng(args.seed);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for id in 1..=args.players {
        let player = PlayerId(id);
        let mut world = SlotWorld::new(player, options.clone());
        let ctx = StaticWorldContext::vanilla(world.options(), args.locations);
        let mut randomizer = ShuffledActEntrances::from_context(&ctx);

        world.create_regions(&ctx);
        let items = world.create_items(&ctx, &mut rng)?;
        world.set_rules(&ctx, &mut randomizer, &mut rng)?;
        info!("Player {}: generated {} items", player, items.len());

        writeln!(out, "Player {player}")?;
        writeln!(out, "{}", world.fill_slot_data()?.to_json_pretty()?)?;
        if args.spoiler {
            world.write_spoiler(&mut out)?;
        }
    }

    Ok(())
}

/// Initializes logging based on the configured level.
fn initialize_logging(log_level: &str) {
    #[cfg(feature = "dev-tools")]
    {
        let level = match log_level.to_lowercase().as_str() {
            "error" => Level::ERROR,
            "warn" => Level::WARN,
            "info" => Level::INFO,
            "debug" => Level::DEBUG,
            "trace" => Level::TRACE,
            _ => Level::INFO,
        };

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .init();
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}
