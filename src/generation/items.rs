//! # Item Pool Generation
//!
//! Assembles the full item pool of a slot: yarn split at the required total,
//! every pre-seeded progression and useful item, time pieces split at the final
//! chapter's requirement, and weighted junk for whatever locations remain.

use crate::game::{item_frequency, HatType, Item, PlayerId, ITEM_TABLE, TIME_PIECES, YARN};
use crate::generation::{
    FinaleCostCalculator, GenerationContext, Generator, JunkDistributor, YarnCostCalculator,
    YarnPlan,
};
use crate::{HatSlotError, HatSlotResult};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Creates `count` copies of an item for one player.
pub fn create_multiple_items(
    name: &str,
    count: usize,
    player: PlayerId,
) -> HatSlotResult<Vec<Item>> {
    let template = Item::from_table(name, player)?;
    Ok(vec![template; count])
}

/// Downgrades every copy past the first `required` to filler.
///
/// Generation order decides which copies stay required, not identity.
///
/// # Examples
///
/// ```
/// use hatslot::{create_multiple_items, split_at_threshold, PlayerId};
///
/// let yarn = create_multiple_items("Yarn", 4, PlayerId(1)).unwrap();
/// let split = split_at_threshold(yarn, 3);
/// let required = split.iter().filter(|item| item.is_progression()).count();
/// assert_eq!(required, 3);
/// assert!(!split[3].is_progression());
/// ```
pub fn split_at_threshold(items: Vec<Item>, required: i64) -> Vec<Item> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            if index as i64 >= required {
                item.downgraded()
            } else {
                item
            }
        })
        .collect()
}

/// Output of item pool generation.
#[derive(Debug, Clone)]
pub struct ItemPool {
    /// Every item, in generation order
    pub items: Vec<Item>,
    /// Yarn costs and supply
    pub yarn: YarnPlan,
    /// Realized hat craft order
    pub craft_order: [HatType; 5],
    /// Time pieces the final chapter requires
    pub required_time_pieces: i64,
}

impl ItemPool {
    /// Number of copies of `name` in the pool.
    pub fn count(&self, name: &str) -> usize {
        self.items.iter().filter(|item| item.name == name).count()
    }

    /// Number of progression copies of `name` in the pool.
    pub fn progression_count(&self, name: &str) -> usize {
        self.items
            .iter()
            .filter(|item| item.name == name && item.is_progression())
            .count()
    }
}

/// Builds the pool of one slot.
///
/// The pool generator is also the one that draws the yarn costs, the craft
/// order and the final chapter cost, so that random draws happen in a fixed
/// order: yarn costs, craft order, final chapter cost, then junk.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemPoolGenerator;

impl ItemPoolGenerator {
    fn time_pieces(
        ctx: &GenerationContext<'_>,
        required_time_pieces: i64,
    ) -> HatSlotResult<Vec<Item>> {
        let mut time_pieces = Vec::new();
        let mut created: i64 = 0;
        for (name, _) in TIME_PIECES {
            if !ctx.world.item_dlc_enabled(name) {
                continue;
            }

            let time_piece = Item::from_table(name, ctx.player)?;
            // Copies 0..=required stay progression.
            if created > required_time_pieces {
                time_pieces.push(time_piece.downgraded());
            } else {
                time_pieces.push(time_piece);
            }
            created += 1;
        }
        Ok(time_pieces)
    }
}

impl Generator<ItemPool> for ItemPoolGenerator {
    fn generate(&self, ctx: &GenerationContext<'_>, rng: &mut StdRng) -> HatSlotResult<ItemPool> {
        let mut items = Vec::new();

        let yarn = YarnCostCalculator.generate(ctx, rng)?;
        YarnCostCalculator.validate(&yarn, ctx)?;
        let total_yarn_required = yarn.total_required();
        let yarn_copies = usize::try_from(yarn.available).unwrap_or(0);
        items.extend(split_at_threshold(
            create_multiple_items(YARN, yarn_copies, ctx.player)?,
            total_yarn_required,
        ));
        debug!(
            "Player {}: {} yarn, first {} required",
            ctx.player, yarn_copies, total_yarn_required
        );

        let mut craft_order = ctx.craft_order;
        if ctx.options.hat_order_randomized() {
            craft_order.shuffle(rng);
        }

        let required_time_pieces = FinaleCostCalculator.generate(ctx, rng)?;
        FinaleCostCalculator.validate(&required_time_pieces, ctx)?;

        for (name, data) in ITEM_TABLE {
            if *name == YARN || !ctx.world.item_dlc_enabled(name) {
                continue;
            }
            if data.classification.is_junk() {
                continue;
            }
            items.extend(create_multiple_items(name, item_frequency(name), ctx.player)?);
        }

        items.extend(Self::time_pieces(ctx, required_time_pieces)?);

        let shortfall = ctx.world.total_locations() as i64 - items.len() as i64;
        let junk = JunkDistributor::for_shortfall(shortfall);
        let junk_items = junk.generate(ctx, rng)?;
        junk.validate(&junk_items, ctx)?;
        info!(
            "Player {}: {} placed items, {} junk for {} locations",
            ctx.player,
            items.len(),
            junk_items.len(),
            ctx.world.total_locations()
        );
        items.extend(junk_items);

        Ok(ItemPool {
            items,
            yarn,
            craft_order,
            required_time_pieces,
        })
    }

    fn validate(&self, content: &ItemPool, ctx: &GenerationContext<'_>) -> HatSlotResult<()> {
        let total_locations = ctx.world.total_locations();
        if content.items.len() != total_locations {
            return Err(HatSlotError::GenerationFailed(format!(
                "pool has {} items for {} locations",
                content.items.len(),
                total_locations
            )));
        }

        let yarn_copies = content.count(YARN) as i64;
        let required_yarn = content.progression_count(YARN) as i64;
        if yarn_copies != content.yarn.available
            || required_yarn != content.yarn.total_required().min(yarn_copies)
        {
            return Err(HatSlotError::GenerationFailed(format!(
                "yarn split {required_yarn}/{yarn_copies} does not match plan"
            )));
        }

        let mut order = content.craft_order.to_vec();
        order.sort();
        if order != HatType::ALL {
            return Err(HatSlotError::GenerationFailed(
                "craft order is not a permutation of all hats".to_string(),
            ));
        }

        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "ItemPoolGenerator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Classification, SlotOptions};
    use crate::generation::{utils, StaticWorldContext};

    fn context<'a>(
        options: &'a SlotOptions,
        world: &'a StaticWorldContext,
    ) -> GenerationContext<'a> {
        GenerationContext {
            player: PlayerId(1),
            options,
            world,
            craft_order: HatType::ALL,
        }
    }

    #[test]
    fn test_pool_matches_location_count() {
        let options = SlotOptions::default();
        let world = StaticWorldContext::vanilla(&options, 160);
        let ctx = context(&options, &world);
        let mut rng = utils::create_rng(1);

        let pool = ItemPoolGenerator.generate(&ctx, &mut rng).unwrap();
        ItemPoolGenerator.validate(&pool, &ctx).unwrap();
        assert_eq!(pool.items.len(), 160);
    }

    #[test]
    fn test_yarn_split_follows_generation_order() {
        let options = SlotOptions {
            yarn_available: 20,
            yarn_cost_min: 3,
            yarn_cost_max: 3,
            ..SlotOptions::default()
        };
        let world = StaticWorldContext::vanilla(&options, 160);
        let ctx = context(&options, &world);
        let mut rng = utils::create_rng(1);

        let pool = ItemPoolGenerator.generate(&ctx, &mut rng).unwrap();
        let yarn: Vec<_> = pool.items.iter().filter(|item| item.name == YARN).collect();
        assert_eq!(yarn.len(), 20);
        assert!(yarn[..15].iter().all(|item| item.is_progression()));
        assert!(yarn[15..]
            .iter()
            .all(|item| item.classification == Classification::Filler));
    }

    #[test]
    fn test_time_pieces_required_count() {
        let options = SlotOptions {
            chapter5_min_cost: 10,
            chapter5_max_cost: 10,
            ..SlotOptions::default()
        };
        let world = StaticWorldContext::vanilla(&options, 160);
        let ctx = context(&options, &world);
        let mut rng = utils::create_rng(3);

        let pool = ItemPoolGenerator.generate(&ctx, &mut rng).unwrap();
        let time_pieces: Vec<_> = pool
            .items
            .iter()
            .filter(|item| item.name.starts_with("Time Piece"))
            .collect();
        assert_eq!(time_pieces.len(), 40);
        let required = time_pieces.iter().filter(|item| item.is_progression()).count();
        assert_eq!(required, 11);
        assert_eq!(pool.required_time_pieces, 10);
    }

    #[test]
    fn test_no_junk_classified_items_pre_seeded() {
        let options = SlotOptions::default();
        let total = 0;
        let world = StaticWorldContext::vanilla(&options, total);
        let ctx = context(&options, &world);
        let mut rng = utils::create_rng(3);

        // Zero locations: negative shortfall, so only pre-seeded items remain.
        let pool = ItemPoolGenerator.generate(&ctx, &mut rng).unwrap();
        assert!(pool
            .items
            .iter()
            .filter(|item| item.name != YARN)
            .all(|item| !item.classification.is_junk() || item.name.starts_with("Time Piece")));
        assert!(matches!(
            ItemPoolGenerator.validate(&pool, &ctx),
            Err(HatSlotError::GenerationFailed(_))
        ));
    }

    #[test]
    fn test_dlc_items_follow_context() {
        let base_options = SlotOptions::default();
        let base_world = StaticWorldContext::vanilla(&base_options, 200);
        let base_ctx = context(&base_options, &base_world);
        let base = ItemPoolGenerator
            .generate(&base_ctx, &mut utils::create_rng(9))
            .unwrap();
        assert_eq!(base.count("Metro Ticket - Blue"), 0);
        assert_eq!(base.count("Relic (Cake)"), 0);

        let dlc_options = SlotOptions {
            enable_dlc1: 1,
            enable_dlc2: 1,
            ..SlotOptions::default()
        };
        let dlc_world = StaticWorldContext::vanilla(&dlc_options, 200);
        let dlc_ctx = context(&dlc_options, &dlc_world);
        let dlc = ItemPoolGenerator
            .generate(&dlc_ctx, &mut utils::create_rng(9))
            .unwrap();
        assert_eq!(dlc.count("Metro Ticket - Blue"), 1);
        assert_eq!(dlc.count("Relic (Cake)"), 1);
        assert_eq!(dlc.count("Time Piece (Rush Hour)"), 1);
    }

    #[test]
    fn test_item_frequencies_respected() {
        let options = SlotOptions::default();
        let world = StaticWorldContext::vanilla(&options, 160);
        let ctx = context(&options, &world);
        let pool = ItemPoolGenerator
            .generate(&ctx, &mut utils::create_rng(4))
            .unwrap();
        assert_eq!(pool.count("Progressive Painting Unlock"), 3);
        assert_eq!(pool.count("Badge Pin"), 2);
        assert_eq!(pool.count("Umbrella"), 1);
    }

    #[test]
    fn test_craft_order_fixed_when_not_randomized() {
        let options = SlotOptions {
            randomize_hat_order: 0,
            ..SlotOptions::default()
        };
        let world = StaticWorldContext::vanilla(&options, 160);
        let ctx = context(&options, &world);
        let pool = ItemPoolGenerator
            .generate(&ctx, &mut utils::create_rng(4))
            .unwrap();
        assert_eq!(pool.craft_order, HatType::ALL);
    }
}
