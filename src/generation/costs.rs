//! # Cost Calculation
//!
//! Randomized yarn costs for the five hats and the time piece cost of the final
//! chapter, each drawn uniformly from a configured range.

use crate::config::HAT_COUNT;
use crate::game::{HatType, YarnCosts};
use crate::generation::{GenerationContext, Generator};
use crate::{HatSlotError, HatSlotResult};
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::Rng;

/// Yarn costs together with the yarn supply that can pay for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YarnPlan {
    /// Cost of every hat
    pub costs: YarnCosts,
    /// Yarn copies to place, raised to cover the worst case
    pub available: i64,
}

impl YarnPlan {
    /// Total yarn needed to craft every hat.
    pub fn total_required(&self) -> i64 {
        self.costs.total()
    }
}

/// Draws one yarn cost per hat.
///
/// Before drawing, the yarn supply is raised to `5 x ceiling` when it is lower,
/// so every hat can be paid for even if all five costs land on the ceiling.
#[derive(Debug, Clone, Copy, Default)]
pub struct YarnCostCalculator;

impl Generator<YarnPlan> for YarnCostCalculator {
    fn generate(&self, ctx: &GenerationContext<'_>, rng: &mut StdRng) -> HatSlotResult<YarnPlan> {
        let (floor, ceiling) = ctx.options.yarn_cost_range();
        let max_possible_cost = ceiling * HAT_COUNT as i64;

        let mut available = ctx.options.yarn_available;
        if available < max_possible_cost {
            warn!(
                "Player {}: raising yarn available from {} to {}",
                ctx.player, available, max_possible_cost
            );
            available = max_possible_cost;
        }

        let mut costs = YarnCosts::unset();
        for hat in HatType::ALL {
            let cost = rng.gen_range(floor..=ceiling);
            debug!("Player {}: {} costs {} yarn", ctx.player, hat, cost);
            costs.set(hat, cost);
        }

        Ok(YarnPlan { costs, available })
    }

    fn validate(&self, content: &YarnPlan, ctx: &GenerationContext<'_>) -> HatSlotResult<()> {
        let (floor, ceiling) = ctx.options.yarn_cost_range();
        for hat in HatType::ALL {
            let cost = content.costs.get(hat)?;
            if cost < floor || cost > ceiling {
                return Err(HatSlotError::GenerationFailed(format!(
                    "{hat} yarn cost {cost} outside {floor}..={ceiling}"
                )));
            }
        }

        if content.available < ceiling * HAT_COUNT as i64 {
            return Err(HatSlotError::GenerationFailed(format!(
                "only {} yarn available for a worst case of {}",
                content.available,
                ceiling * HAT_COUNT as i64
            )));
        }

        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "YarnCostCalculator"
    }
}

/// Draws the number of time pieces the final chapter requires.
#[derive(Debug, Clone, Copy, Default)]
pub struct FinaleCostCalculator;

impl Generator<i64> for FinaleCostCalculator {
    fn generate(&self, ctx: &GenerationContext<'_>, rng: &mut StdRng) -> HatSlotResult<i64> {
        let (minimum, maximum) = ctx.options.chapter5_cost_range();
        let cost = rng.gen_range(minimum..=maximum);
        debug!("Player {}: final chapter costs {} time pieces", ctx.player, cost);
        Ok(cost)
    }

    fn validate(&self, content: &i64, ctx: &GenerationContext<'_>) -> HatSlotResult<()> {
        let (minimum, maximum) = ctx.options.chapter5_cost_range();
        if (minimum..=maximum).contains(content) {
            Ok(())
        } else {
            Err(HatSlotError::GenerationFailed(format!(
                "final chapter cost {content} outside {minimum}..={maximum}"
            )))
        }
    }

    fn generator_type(&self) -> &'static str {
        "FinaleCostCalculator"
    }
}
