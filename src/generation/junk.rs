//! # Junk and Trap Distribution
//!
//! Fills leftover pool capacity with filler items and, when traps are enabled,
//! trap items. Names are drawn with replacement, proportional to their weights.

use crate::config::TRAP_ROLL_MAX;
use crate::game::{junk_weight, Classification, Item, ITEM_TABLE};
use crate::generation::{GenerationContext, Generator};
use crate::{HatSlotError, HatSlotResult};
use log::debug;
use rand::rngs::StdRng;
use rand::Rng;

/// Names with cumulative weights, sampled with one uniform draw and a binary search.
///
/// Zero weights are dropped on insertion; they could never be drawn.
///
/// # Examples
///
/// ```
/// use hatslot::WeightedTable;
/// use rand::SeedableRng;
///
/// let mut table = WeightedTable::new("filler");
/// table.push("Rift Token", 3);
/// table.push("Pons", 0);
/// assert_eq!(table.len(), 1);
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(5);
/// assert_eq!(table.sample(&mut rng).unwrap(), "Rift Token");
/// ```
#[derive(Debug, Clone)]
pub struct WeightedTable {
    label: &'static str,
    names: Vec<&'static str>,
    cumulative: Vec<u64>,
}

impl WeightedTable {
    /// Creates an empty table; `label` names it in errors.
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            names: Vec::new(),
            cumulative: Vec::new(),
        }
    }

    /// Adds a name with the given weight.
    pub fn push(&mut self, name: &'static str, weight: u64) {
        if weight == 0 {
            return;
        }
        let total = self.total_weight() + weight;
        self.names.push(name);
        self.cumulative.push(total);
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> u64 {
        self.cumulative.last().copied().unwrap_or(0)
    }

    /// Number of drawable names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether nothing can be drawn.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Probability of drawing `name`.
    pub fn probability(&self, name: &str) -> f64 {
        let total = self.total_weight();
        if total == 0 {
            return 0.0;
        }
        let weight: u64 = self
            .names
            .iter()
            .enumerate()
            .filter(|(_, entry)| **entry == name)
            .map(|(index, _)| self.weight_at(index))
            .sum();
        weight as f64 / total as f64
    }

    fn weight_at(&self, index: usize) -> u64 {
        let previous = if index == 0 {
            0
        } else {
            self.cumulative[index - 1]
        };
        self.cumulative[index] - previous
    }

    /// Draws one name.
    ///
    /// Sampling an empty table is an error rather than a silent fallback.
    pub fn sample(&self, rng: &mut StdRng) -> HatSlotResult<&'static str> {
        let total = self.total_weight();
        if total == 0 {
            return Err(HatSlotError::EmptyWeightTable(self.label));
        }
        let roll = rng.gen_range(0..total);
        let index = self.cumulative.partition_point(|&bound| bound <= roll);
        Ok(self.names[index])
    }
}

/// Builds the filler table and, when traps can occur, the trap table.
///
/// Filler weights are static; trap weights come from the per-trap options.
pub fn junk_tables(ctx: &GenerationContext<'_>) -> HatSlotResult<(WeightedTable, WeightedTable)> {
    let trap_chance = ctx.options.trap_chance;
    let trap_weights = ctx.options.trap_weights();
    let mut filler = WeightedTable::new("filler");
    let mut traps = WeightedTable::new("trap");

    for (name, data) in ITEM_TABLE.iter().copied() {
        match data.classification {
            Classification::Filler => {
                let weight =
                    junk_weight(name).ok_or_else(|| HatSlotError::UnknownItem(name.to_string()))?;
                filler.push(name, u64::from(weight));
            }
            Classification::Trap if trap_chance > 0 => {
                if let Some((_, weight)) = trap_weights.iter().find(|(trap, _)| *trap == name) {
                    traps.push(name, u64::try_from(*weight).unwrap_or(0));
                }
            }
            _ => {}
        }
    }

    Ok((filler, traps))
}

/// Generates exactly `count` junk items.
///
/// Each slot rolls `1..=100` against `TrapChance` when traps are enabled; a hit
/// draws from the trap table, anything else from the filler table.
#[derive(Debug, Clone, Copy)]
pub struct JunkDistributor {
    /// Number of items to produce
    pub count: usize,
}

impl JunkDistributor {
    /// Creates a distributor for a possibly negative shortfall; negative means none.
    ///
    /// # Examples
    ///
    /// ```
    /// use hatslot::JunkDistributor;
    ///
    /// assert_eq!(JunkDistributor::for_shortfall(12).count, 12);
    /// assert_eq!(JunkDistributor::for_shortfall(-3).count, 0);
    /// ```
    pub fn for_shortfall(shortfall: i64) -> Self {
        Self {
            count: usize::try_from(shortfall).unwrap_or(0),
        }
    }
}

impl Generator<Vec<Item>> for JunkDistributor {
    fn generate(&self, ctx: &GenerationContext<'_>, rng: &mut StdRng) -> HatSlotResult<Vec<Item>> {
        let trap_chance = ctx.options.trap_chance;
        let (filler, traps) = junk_tables(ctx)?;

        let mut junk = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            let name = if trap_chance > 0 && rng.gen_range(1..=TRAP_ROLL_MAX) <= trap_chance {
                traps.sample(rng)?
            } else {
                filler.sample(rng)?
            };
            junk.push(Item::from_table(name, ctx.player)?);
        }

        debug!(
            "Player {}: generated {} junk items ({} traps)",
            ctx.player,
            junk.len(),
            junk.iter()
                .filter(|item| item.classification == Classification::Trap)
                .count()
        );
        Ok(junk)
    }

    fn validate(&self, content: &Vec<Item>, ctx: &GenerationContext<'_>) -> HatSlotResult<()> {
        if content.len() != self.count {
            return Err(HatSlotError::GenerationFailed(format!(
                "requested {} junk items, produced {}",
                self.count,
                content.len()
            )));
        }

        if let Some(item) = content.iter().find(|item| !item.classification.is_junk()) {
            return Err(HatSlotError::GenerationFailed(format!(
                "{} is not a junk item",
                item.name
            )));
        }

        if ctx.options.trap_chance <= 0
            && content
                .iter()
                .any(|item| item.classification == Classification::Trap)
        {
            return Err(HatSlotError::GenerationFailed(
                "trap generated with traps disabled".to_string(),
            ));
        }

        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "JunkDistributor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{HatType, PlayerId, SlotOptions};
    use crate::generation::{utils, StaticWorldContext};

    fn context<'a>(
        options: &'a SlotOptions,
        world: &'a StaticWorldContext,
    ) -> GenerationContext<'a> {
        GenerationContext {
            player: PlayerId(2),
            options,
            world,
            craft_order: HatType::ALL,
        }
    }

    #[test]
    fn test_cumulative_lookup_hits_every_bucket() {
        let mut table = WeightedTable::new("test");
        table.push("a", 1);
        table.push("b", 2);
        table.push("c", 1);
        assert_eq!(table.total_weight(), 4);
        assert!((table.probability("b") - 0.5).abs() < f64::EPSILON);

        let mut rng = utils::create_rng(0);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(table.sample(&mut rng).unwrap());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_empty_table_fails() {
        let table = WeightedTable::new("trap");
        let mut rng = utils::create_rng(0);
        assert!(table.is_empty());
        assert!(matches!(
            table.sample(&mut rng),
            Err(HatSlotError::EmptyWeightTable("trap"))
        ));
    }

    #[test]
    fn test_no_traps_without_trap_chance() {
        let options = SlotOptions {
            trap_chance: 0,
            ..SlotOptions::default()
        };
        let world = StaticWorldContext::new(0);
        let ctx = context(&options, &world);
        let mut rng = utils::create_rng(42);

        let distributor = JunkDistributor { count: 300 };
        let junk = distributor.generate(&ctx, &mut rng).unwrap();
        distributor.validate(&junk, &ctx).unwrap();
        assert!(junk
            .iter()
            .all(|item| item.classification == Classification::Filler));
    }

    #[test]
    fn test_trap_table_skipped_when_chance_is_zero() {
        let options = SlotOptions::default();
        let world = StaticWorldContext::new(0);
        let ctx = context(&options, &world);
        let (filler, traps) = junk_tables(&ctx).unwrap();
        assert_eq!(filler.len(), 3);
        assert!(traps.is_empty());
    }

    #[test]
    fn test_full_trap_chance_only_traps() {
        let options = SlotOptions {
            trap_chance: 100,
            ..SlotOptions::default()
        };
        let world = StaticWorldContext::new(0);
        let ctx = context(&options, &world);
        let mut rng = utils::create_rng(8);

        let junk = JunkDistributor { count: 50 }.generate(&ctx, &mut rng).unwrap();
        assert!(junk
            .iter()
            .all(|item| item.classification == Classification::Trap));
    }

    #[test]
    fn test_zero_trap_weights_fail_when_trap_is_drawn() {
        let options = SlotOptions {
            trap_chance: 100,
            baby_trap_weight: 0,
            laser_trap_weight: 0,
            parade_trap_weight: 0,
            ..SlotOptions::default()
        };
        let world = StaticWorldContext::new(0);
        let ctx = context(&options, &world);
        let mut rng = utils::create_rng(8);

        let result = JunkDistributor { count: 1 }.generate(&ctx, &mut rng);
        assert!(matches!(result, Err(HatSlotError::EmptyWeightTable("trap"))));
    }

    #[test]
    fn test_zero_count_needs_no_tables_to_sample() {
        let options = SlotOptions {
            trap_chance: 100,
            baby_trap_weight: 0,
            laser_trap_weight: 0,
            parade_trap_weight: 0,
            ..SlotOptions::default()
        };
        let world = StaticWorldContext::new(0);
        let ctx = context(&options, &world);
        let mut rng = utils::create_rng(8);

        let junk = JunkDistributor::for_shortfall(-10)
            .generate(&ctx, &mut rng)
            .unwrap();
        assert!(junk.is_empty());
    }

    #[test]
    fn test_only_configured_trap_weights_are_used() {
        let options = SlotOptions {
            trap_chance: 100,
            baby_trap_weight: 0,
            laser_trap_weight: 0,
            parade_trap_weight: 10,
            ..SlotOptions::default()
        };
        let world = StaticWorldContext::new(0);
        let ctx = context(&options, &world);
        let mut rng = utils::create_rng(31);

        let junk = JunkDistributor { count: 40 }.generate(&ctx, &mut rng).unwrap();
        assert!(junk.iter().all(|item| item.name == "Parade Trap"));
    }
}
