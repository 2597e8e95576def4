//! # Slot State Module
//!
//! Per-player generation state and the [`SlotWorld`] that drives one slot
//! through region setup, item creation and rule setting.
//!
//! Every mutable structure here (costs, craft order, act connections) is owned by
//! exactly one `SlotWorld` and created fresh in [`SlotWorld::new`], so no two
//! players can observe each other's randomization.

use crate::config::UNSET_COST;
use crate::game::{ChapterIndex, HatType, Item, PlayerId, SlotOptions};
use crate::generation::{
    create_multiple_items, ActConnections, ActRecorder, EntranceRandomizer, GenerationContext,
    Generator, ItemPoolGenerator, WorldContext,
};
use crate::{HatSlotError, HatSlotResult};
use log::{debug, info};
use rand::rngs::StdRng;
use serde::Serialize;
use std::collections::BTreeMap;

/// Yarn cost of every hat. Hats start at the unset sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YarnCosts(BTreeMap<HatType, i64>);

impl YarnCosts {
    /// All five hats, none computed yet.
    pub fn unset() -> Self {
        Self(HatType::ALL.iter().map(|hat| (*hat, UNSET_COST)).collect())
    }

    /// Records the cost of one hat.
    pub fn set(&mut self, hat: HatType, cost: i64) {
        self.0.insert(hat, cost);
    }

    /// Cost of a hat; fails if it was never computed.
    pub fn get(&self, hat: HatType) -> HatSlotResult<i64> {
        match self.0.get(&hat) {
            Some(cost) if *cost != UNSET_COST => Ok(*cost),
            _ => Err(HatSlotError::MissingCost(hat.yarn_cost_key())),
        }
    }

    /// Sum of all computed costs.
    pub fn total(&self) -> i64 {
        self.0.values().filter(|cost| **cost != UNSET_COST).sum()
    }

    /// Whether every hat has a cost.
    pub fn is_complete(&self) -> bool {
        self.0.values().all(|cost| *cost != UNSET_COST)
    }
}

/// Time piece cost of each chapter. Chapters start at the unset sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterCosts(BTreeMap<ChapterIndex, i64>);

impl ChapterCosts {
    /// All seven chapters, none computed yet.
    pub fn unset() -> Self {
        Self(
            ChapterIndex::ALL
                .iter()
                .map(|chapter| (*chapter, UNSET_COST))
                .collect(),
        )
    }

    /// Records the cost of one chapter.
    pub fn set(&mut self, chapter: ChapterIndex, cost: i64) {
        self.0.insert(chapter, cost);
    }

    /// Cost of a chapter, or `None` while unset.
    pub fn get(&self, chapter: ChapterIndex) -> Option<i64> {
        self.0
            .get(&chapter)
            .copied()
            .filter(|cost| *cost != UNSET_COST)
    }

    /// Cost of a chapter; fails if it was never computed.
    pub fn require(&self, chapter: ChapterIndex) -> HatSlotResult<i64> {
        self.get(chapter)
            .ok_or_else(|| HatSlotError::MissingCost(chapter.cost_key().unwrap_or("ChapterCost")))
    }

    /// Chapters with a recorded cost, in chapter order.
    pub fn known(&self) -> impl Iterator<Item = (ChapterIndex, i64)> + '_ {
        self.0
            .iter()
            .filter(|(_, cost)| **cost != UNSET_COST)
            .map(|(chapter, cost)| (*chapter, *cost))
    }
}

/// One player's slot during generation.
///
/// # Examples
///
/// ```
/// use hatslot::{utils, PlayerId, SlotOptions, SlotWorld, StaticWorldContext};
///
/// let options = SlotOptions::default();
/// let ctx = StaticWorldContext::vanilla(&options, 200);
/// let mut rng = utils::create_rng(42);
///
/// let mut world = SlotWorld::new(PlayerId(1), options);
/// world.create_regions(&ctx);
/// let pool = world.create_items(&ctx, &mut rng).unwrap();
/// assert_eq!(pool.len(), 200);
/// ```
#[derive(Debug, Clone)]
pub struct SlotWorld {
    player: PlayerId,
    options: SlotOptions,
    hat_craft_order: [HatType; 5],
    hat_yarn_costs: YarnCosts,
    chapter_timepiece_costs: ChapterCosts,
    act_connections: ActConnections,
}

impl SlotWorld {
    /// Creates a fresh slot with normalized options and unset costs.
    pub fn new(player: PlayerId, options: SlotOptions) -> Self {
        Self {
            player,
            options: options.normalized(),
            hat_craft_order: HatType::ALL,
            hat_yarn_costs: YarnCosts::unset(),
            chapter_timepiece_costs: ChapterCosts::unset(),
            act_connections: ActConnections::default(),
        }
    }

    /// Owning player.
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Resolved options, including any yarn top-up applied during item creation.
    pub fn options(&self) -> &SlotOptions {
        &self.options
    }

    /// Hat craft order as realized for this slot.
    pub fn hat_craft_order(&self) -> [HatType; 5] {
        self.hat_craft_order
    }

    /// Yarn costs of all hats.
    pub fn hat_yarn_costs(&self) -> &YarnCosts {
        &self.hat_yarn_costs
    }

    /// Time piece costs of all chapters.
    pub fn chapter_costs(&self) -> &ChapterCosts {
        &self.chapter_timepiece_costs
    }

    /// Recorded act remaps.
    pub fn act_connections(&self) -> &ActConnections {
        &self.act_connections
    }

    /// Sets the time piece cost of a chapter.
    pub fn set_chapter_cost(&mut self, chapter: ChapterIndex, cost: i64) {
        self.chapter_timepiece_costs.set(chapter, cost);
    }

    /// Time piece cost of a chapter, if set.
    pub fn chapter_cost(&self, chapter: ChapterIndex) -> Option<i64> {
        self.chapter_timepiece_costs.get(chapter)
    }

    /// Builds one item owned by this slot.
    pub fn create_item(&self, name: &str) -> HatSlotResult<Item> {
        Item::from_table(name, self.player)
    }

    /// Builds `count` copies of an item owned by this slot.
    pub fn create_multiple_items(&self, name: &str, count: usize) -> HatSlotResult<Vec<Item>> {
        create_multiple_items(name, count, self.player)
    }

    /// Applies the chapter costs owned by the region layout.
    pub fn create_regions(&mut self, world: &dyn WorldContext) {
        for (chapter, cost) in world.chapter_costs() {
            self.set_chapter_cost(chapter, cost);
        }
    }

    fn generation_context<'a>(&'a self, world: &'a dyn WorldContext) -> GenerationContext<'a> {
        GenerationContext {
            player: self.player,
            options: &self.options,
            world,
            craft_order: self.hat_craft_order,
        }
    }

    /// Draws costs and builds the item pool, one item per placeable location.
    ///
    /// Yarn costs, the yarn supply, the craft order and the final chapter cost
    /// are stored on the slot for later serialization.
    pub fn create_items(
        &mut self,
        world: &dyn WorldContext,
        rng: &mut StdRng,
    ) -> HatSlotResult<Vec<Item>> {
        let generator = ItemPoolGenerator;
        debug!("Player {}: running {}", self.player, generator.generator_type());
        let pool = {
            let ctx = self.generation_context(world);
            let pool = generator.generate(&ctx, rng)?;
            generator.validate(&pool, &ctx)?;
            pool
        };

        self.options.yarn_available = pool.yarn.available;
        self.hat_yarn_costs = pool.yarn.costs.clone();
        self.hat_craft_order = pool.craft_order;
        self.set_chapter_cost(ChapterIndex::Finale, pool.required_time_pieces);

        info!(
            "Player {}: {} items, {} yarn for {} required, {} time pieces required",
            self.player,
            pool.items.len(),
            pool.yarn.available,
            pool.yarn.total_required(),
            pool.required_time_pieces
        );
        Ok(pool.items)
    }

    /// Runs the rule-setting phase: shuffles act entrances when enabled.
    pub fn set_rules(
        &mut self,
        world: &dyn WorldContext,
        randomizer: &mut dyn EntranceRandomizer,
        rng: &mut StdRng,
    ) -> HatSlotResult<()> {
        if !self.options.act_randomizer_enabled() {
            return Ok(());
        }

        let mut recorder = ActRecorder::new(&mut self.act_connections, world);
        randomizer.randomize_act_entrances(&mut recorder, rng)?;
        info!(
            "Player {}: recorded {} act connections",
            self.player,
            self.act_connections.len()
        );
        Ok(())
    }

    /// Records that `original_region`'s entrance now leads to `new_region`.
    ///
    /// Returns `false` when the original act already had a mapping, which is kept.
    pub fn update_chapter_act_info(
        &mut self,
        world: &dyn WorldContext,
        original_region: &str,
        new_region: &str,
    ) -> HatSlotResult<bool> {
        ActRecorder::new(&mut self.act_connections, world)
            .update_chapter_act_info(original_region, new_region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{utils, ShuffledActEntrances, StaticWorldContext};

    #[test]
    fn test_slot_world_creation() {
        let world = SlotWorld::new(PlayerId(1), SlotOptions::default());
        assert_eq!(world.player(), PlayerId(1));
        assert_eq!(world.hat_craft_order(), HatType::ALL);
        assert!(!world.hat_yarn_costs().is_complete());
        assert_eq!(world.chapter_costs().known().count(), 0);
        assert!(world.act_connections().is_empty());
    }

    #[test]
    fn test_new_normalizes_options() {
        let options = SlotOptions {
            trap_chance: 400,
            ..SlotOptions::default()
        };
        let world = SlotWorld::new(PlayerId(1), options);
        assert_eq!(world.options().trap_chance, 100);
    }

    #[test]
    fn test_yarn_costs_report_missing() {
        let costs = YarnCosts::unset();
        assert!(matches!(
            costs.get(HatType::Ice),
            Err(HatSlotError::MissingCost("IceYarnCost"))
        ));
        assert_eq!(costs.total(), 0);
    }

    #[test]
    fn test_chapter_costs_require() {
        let mut costs = ChapterCosts::unset();
        assert!(costs.require(ChapterIndex::Birds).is_err());
        costs.set(ChapterIndex::Birds, 4);
        assert_eq!(costs.require(ChapterIndex::Birds).unwrap(), 4);
        assert_eq!(costs.known().collect::<Vec<_>>(), vec![(ChapterIndex::Birds, 4)]);
    }

    #[test]
    fn test_create_items_commits_state() {
        let options = SlotOptions::default();
        let ctx = StaticWorldContext::vanilla(&options, 200);
        let mut rng = utils::create_rng(5);
        let mut world = SlotWorld::new(PlayerId(1), options);

        world.create_regions(&ctx);
        let items = world.create_items(&ctx, &mut rng).unwrap();

        assert_eq!(items.len(), 200);
        assert!(world.hat_yarn_costs().is_complete());
        let finale = world.chapter_cost(ChapterIndex::Finale).unwrap();
        assert!((25..=35).contains(&finale));
        assert_eq!(world.chapter_cost(ChapterIndex::Birds), Some(4));
    }

    #[test]
    fn test_set_rules_skipped_without_act_randomizer() {
        let options = SlotOptions::default();
        let ctx = StaticWorldContext::vanilla(&options, 200);
        let mut randomizer = ShuffledActEntrances::from_context(&ctx);
        let mut rng = utils::create_rng(5);
        let mut world = SlotWorld::new(PlayerId(1), options);

        world.set_rules(&ctx, &mut randomizer, &mut rng).unwrap();
        assert!(world.act_connections().is_empty());
    }

    #[test]
    fn test_update_chapter_act_info_first_write_wins() {
        let ctx = StaticWorldContext::new(10);
        let mut world = SlotWorld::new(PlayerId(1), SlotOptions::default());

        assert!(world
            .update_chapter_act_info(&ctx, "Barrel Battle", "Train Rush")
            .unwrap());
        assert!(!world
            .update_chapter_act_info(&ctx, "Barrel Battle", "The Windmill")
            .unwrap());
        assert_eq!(
            world.act_connections().get("chapter1_barrelboss"),
            Some("trainwreck_selfdestruct")
        );
    }

    #[test]
    fn test_create_multiple_items_owned_by_slot() {
        let world = SlotWorld::new(PlayerId(9), SlotOptions::default());
        let pins = world.create_multiple_items("Badge Pin", 2).unwrap();
        assert_eq!(pins.len(), 2);
        assert!(pins.iter().all(|item| item.player == PlayerId(9)));
        assert!(world.create_item("Nope").is_err());
    }
}
