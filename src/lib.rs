//! # Hatslot
//!
//! Per-player slot generation for A Hat in Time randomizer worlds.
//!
//! ## Architecture Overview
//!
//! Hatslot produces everything one player's slot contributes to a shared multiworld:
//!
//! - **Game**: item and hat/chapter types, the static item tables, typed slot options and the
//!   per-player [`SlotWorld`] that owns all mutable generation state
//! - **Generation**: seeded generators for yarn costs, the final chapter cost, the item pool and
//!   weighted junk/trap filler, plus the act-entrance remap recorder
//! - **Slot**: the slot configuration mapping handed to the game client and the spoiler log
//!
//! ## Collaborators
//!
//! The region graph, location table and entrance shuffling live outside this crate. They are
//! reached through the [`WorldContext`] and [`EntranceRandomizer`] traits; every random draw
//! comes from a single [`rand::rngs::StdRng`] shared by all players of one generation run.

pub mod game;
pub mod generation;
pub mod slot;

// Core module re-exports
pub use game::*;
pub use generation::*;
pub use slot::*;

/// Core error type for slot generation.
#[derive(thiserror::Error, Debug)]
pub enum HatSlotError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Item name is not present in any static table
    #[error("Unknown item: {0}")]
    UnknownItem(String),

    /// Region has no stable act identifier
    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    /// Weighted sampling was attempted on a table with no positive weight
    #[error("Cannot sample from empty weight table: {0}")]
    EmptyWeightTable(&'static str),

    /// A cost was read back before it was ever computed
    #[error("Cost was never computed: {0}")]
    MissingCost(&'static str),

    /// Option values could not be interpreted
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// Generation produced output that breaks an invariant
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
}

/// Result type used throughout the Hatslot codebase.
pub type HatSlotResult<T> = Result<T, HatSlotError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generation constants.
pub mod config {
    /// Number of craftable hats, and therefore of yarn costs
    pub const HAT_COUNT: usize = 5;

    /// Cost value meaning "not computed yet"
    pub const UNSET_COST: i64 = -1;

    /// Upper bound of the per-slot trap roll; `TrapChance` is a percentage of it
    pub const TRAP_ROLL_MAX: i64 = 100;

    /// Seed used by the driver when none is given
    pub const DEFAULT_SEED: u64 = 12345;

    /// Location count used by the driver when none is given
    pub const DEFAULT_TOTAL_LOCATIONS: usize = 180;
}
