//! # Generation Module
//!
//! Seeded generation of one slot's costs and item pool.
//!
//! Every generator is a pure function of its [`GenerationContext`] and the shared
//! random source: it returns its output instead of writing into the world, and the
//! [`SlotWorld`](crate::SlotWorld) commits the result. The region graph, location
//! table and add-on switches are reached through [`WorldContext`].

pub mod costs;
pub mod entrances;
pub mod items;
pub mod junk;

pub use costs::*;
pub use entrances::*;
pub use items::*;
pub use junk::*;

use crate::game::{act_info, lookup_item, ChapterIndex, HatDlc, HatType, PlayerId, SlotOptions};
use crate::HatSlotResult;
use rand::rngs::StdRng;
use std::collections::{BTreeMap, BTreeSet};

/// Services this crate consumes from the surrounding multiworld engine.
pub trait WorldContext {
    /// Number of placeable locations in the slot.
    fn total_locations(&self) -> usize;

    /// Whether the add-on content an item belongs to is enabled.
    fn item_dlc_enabled(&self, name: &str) -> bool;

    /// Stable act identifier of a region, used by the game client.
    fn act_info(&self, region: &str) -> Option<String>;

    /// Chapter costs owned by the region layout.
    fn chapter_costs(&self) -> Vec<(ChapterIndex, i64)> {
        Vec::new()
    }
}

/// Borrowed inputs shared by every generator of one slot.
#[derive(Clone, Copy)]
pub struct GenerationContext<'a> {
    /// Slot owner
    pub player: PlayerId,
    /// Normalized options of the slot
    pub options: &'a SlotOptions,
    /// Engine services
    pub world: &'a dyn WorldContext,
    /// Craft order before any shuffling
    pub craft_order: [HatType; 5],
}

/// Trait for slot generators.
///
/// All generation phases implement this trait, giving each the same
/// generate-then-validate shape.
pub trait Generator<T> {
    /// Generates content from the context, drawing from the shared random source.
    fn generate(&self, ctx: &GenerationContext<'_>, rng: &mut StdRng) -> HatSlotResult<T>;

    /// Validates that the generated content meets its invariants.
    fn validate(&self, content: &T, ctx: &GenerationContext<'_>) -> HatSlotResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Table-backed [`WorldContext`] for drivers and tests.
///
/// # Examples
///
/// ```
/// use hatslot::{SlotOptions, StaticWorldContext, WorldContext};
///
/// let ctx = StaticWorldContext::vanilla(&SlotOptions::default(), 150);
/// assert_eq!(ctx.total_locations(), 150);
/// assert!(ctx.item_dlc_enabled("Umbrella"));
/// assert!(!ctx.item_dlc_enabled("Metro Ticket - Pink"));
/// assert_eq!(ctx.act_info("Barrel Battle").as_deref(), Some("chapter1_barrelboss"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticWorldContext {
    /// Number of placeable locations
    pub total_locations: usize,
    /// Add-ons whose items may be placed
    pub enabled_dlc: BTreeSet<HatDlc>,
    /// Region name to act identifier
    pub acts: BTreeMap<String, String>,
    /// Externally owned chapter costs
    pub chapter_costs: Vec<(ChapterIndex, i64)>,
}

impl StaticWorldContext {
    /// Creates an empty context with the given location count.
    pub fn new(total_locations: usize) -> Self {
        Self {
            total_locations,
            ..Self::default()
        }
    }

    /// Context for the base game's act layout, with add-ons following the options.
    pub fn vanilla(options: &SlotOptions, total_locations: usize) -> Self {
        let mut enabled_dlc = BTreeSet::new();
        if options.enable_dlc1 > 0 {
            enabled_dlc.insert(HatDlc::Dlc1);
        }
        if options.enable_dlc2 > 0 {
            enabled_dlc.insert(HatDlc::Dlc2);
        }

        let acts = crate::game::ACT_INFO
            .iter()
            .map(|(region, act)| (region.to_string(), act.to_string()))
            .collect();

        let mut chapter_costs = vec![
            (ChapterIndex::Mafia, 0),
            (ChapterIndex::Birds, 4),
            (ChapterIndex::Subcon, 8),
            (ChapterIndex::Alpine, 14),
        ];
        if enabled_dlc.contains(&HatDlc::Dlc1) {
            chapter_costs.push((ChapterIndex::Cruise, 12));
        }
        if enabled_dlc.contains(&HatDlc::Dlc2) {
            chapter_costs.push((ChapterIndex::Metro, 30));
        }

        Self {
            total_locations,
            enabled_dlc,
            acts,
            chapter_costs,
        }
    }

    /// Region names that have an act identifier.
    pub fn act_regions(&self) -> Vec<String> {
        self.acts.keys().cloned().collect()
    }
}

impl WorldContext for StaticWorldContext {
    fn total_locations(&self) -> usize {
        self.total_locations
    }

    fn item_dlc_enabled(&self, name: &str) -> bool {
        match lookup_item(name) {
            Ok((_, data)) => data
                .dlc
                .map_or(true, |content| self.enabled_dlc.contains(&content)),
            Err(_) => false,
        }
    }

    fn act_info(&self, region: &str) -> Option<String> {
        self.acts
            .get(region)
            .cloned()
            .or_else(|| act_info(region).map(str::to_string))
    }

    fn chapter_costs(&self) -> Vec<(ChapterIndex, i64)> {
        self.chapter_costs.clone()
    }
}

/// Utility functions for generation.
pub mod utils {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Creates the seeded random source shared by every player of one run.
    pub fn create_rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }
}
