//! # Slot Options
//!
//! Typed player options and the explicit list of option identifiers that are
//! copied into slot data.

use crate::{HatSlotError, HatSlotResult};
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Every declared option, in slot data order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionId {
    ActRandomizer,
    YarnAvailable,
    YarnCostMin,
    YarnCostMax,
    Chapter5MinCost,
    Chapter5MaxCost,
    RandomizeHatOrder,
    TrapChance,
    BabyTrapWeight,
    LaserTrapWeight,
    ParadeTrapWeight,
    EnableDlc1,
    EnableDlc2,
}

impl OptionId {
    /// All options that end up in slot data.
    pub const ALL: [OptionId; 13] = [
        OptionId::ActRandomizer,
        OptionId::YarnAvailable,
        OptionId::YarnCostMin,
        OptionId::YarnCostMax,
        OptionId::Chapter5MinCost,
        OptionId::Chapter5MaxCost,
        OptionId::RandomizeHatOrder,
        OptionId::TrapChance,
        OptionId::BabyTrapWeight,
        OptionId::LaserTrapWeight,
        OptionId::ParadeTrapWeight,
        OptionId::EnableDlc1,
        OptionId::EnableDlc2,
    ];

    /// Name of the option in option files and slot data.
    ///
    /// # Examples
    ///
    /// ```
    /// use hatslot::OptionId;
    ///
    /// assert_eq!(OptionId::YarnCostMin.key(), "YarnCostMin");
    /// assert_eq!(OptionId::EnableDlc1.key(), "EnableDLC1");
    /// ```
    pub fn key(self) -> &'static str {
        match self {
            OptionId::ActRandomizer => "ActRandomizer",
            OptionId::YarnAvailable => "YarnAvailable",
            OptionId::YarnCostMin => "YarnCostMin",
            OptionId::YarnCostMax => "YarnCostMax",
            OptionId::Chapter5MinCost => "Chapter5MinCost",
            OptionId::Chapter5MaxCost => "Chapter5MaxCost",
            OptionId::RandomizeHatOrder => "RandomizeHatOrder",
            OptionId::TrapChance => "TrapChance",
            OptionId::BabyTrapWeight => "BabyTrapWeight",
            OptionId::LaserTrapWeight => "LaserTrapWeight",
            OptionId::ParadeTrapWeight => "ParadeTrapWeight",
            OptionId::EnableDlc1 => "EnableDLC1",
            OptionId::EnableDlc2 => "EnableDLC2",
        }
    }

    /// Inclusive range of accepted values. Toggles are `0..=1`.
    pub fn bounds(self) -> (i64, i64) {
        match self {
            OptionId::ActRandomizer
            | OptionId::RandomizeHatOrder
            | OptionId::EnableDlc1
            | OptionId::EnableDlc2 => (0, 1),
            OptionId::YarnAvailable => (15, 75),
            OptionId::YarnCostMin => (1, 12),
            OptionId::YarnCostMax => (1, 15),
            OptionId::Chapter5MinCost | OptionId::Chapter5MaxCost => (0, 50),
            OptionId::TrapChance
            | OptionId::BabyTrapWeight
            | OptionId::LaserTrapWeight
            | OptionId::ParadeTrapWeight => (0, 100),
        }
    }
}

/// Options chosen by one player for their slot.
///
/// Deserializes from the same PascalCase keys that appear in slot data; any
/// missing key keeps its default.
///
/// # Examples
///
/// ```
/// use hatslot::{OptionId, SlotOptions};
///
/// let options = SlotOptions::from_json_str(r#"{ "YarnCostMax": 10, "TrapChance": 25 }"#).unwrap();
/// assert_eq!(options.yarn_cost_max, 10);
/// assert_eq!(options.value(OptionId::TrapChance), 25);
/// assert_eq!(options.yarn_available, 45);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SlotOptions {
    /// Values above zero shuffle act entrances
    pub act_randomizer: i64,
    /// Yarn copies in the pool before the cost-driven top-up
    pub yarn_available: i64,
    /// One end of the per-hat yarn cost range
    pub yarn_cost_min: i64,
    /// Other end of the per-hat yarn cost range
    pub yarn_cost_max: i64,
    /// One end of the final chapter's time piece cost range
    #[serde(rename = "Chapter5MinCost")]
    pub chapter5_min_cost: i64,
    /// Other end of the final chapter's time piece cost range
    #[serde(rename = "Chapter5MaxCost")]
    pub chapter5_max_cost: i64,
    /// Values above zero shuffle the hat craft order
    pub randomize_hat_order: i64,
    /// Percent chance that a junk slot becomes a trap
    pub trap_chance: i64,
    pub baby_trap_weight: i64,
    pub laser_trap_weight: i64,
    pub parade_trap_weight: i64,
    /// Include Seal the Deal content
    #[serde(rename = "EnableDLC1")]
    pub enable_dlc1: i64,
    /// Include Nyakuza Metro content
    #[serde(rename = "EnableDLC2")]
    pub enable_dlc2: i64,
}

impl Default for SlotOptions {
    fn default() -> Self {
        Self {
            act_randomizer: 0,
            yarn_available: 45,
            yarn_cost_min: 4,
            yarn_cost_max: 8,
            chapter5_min_cost: 25,
            chapter5_max_cost: 35,
            randomize_hat_order: 1,
            trap_chance: 0,
            baby_trap_weight: 40,
            laser_trap_weight: 40,
            parade_trap_weight: 20,
            enable_dlc1: 0,
            enable_dlc2: 0,
        }
    }
}

impl SlotOptions {
    /// Parses options from a JSON object.
    pub fn from_json_str(json: &str) -> HatSlotResult<Self> {
        serde_json::from_str(json).map_err(|e| HatSlotError::InvalidOptions(e.to_string()))
    }

    /// Loads options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> HatSlotResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Reads an option by identifier.
    pub fn value(&self, id: OptionId) -> i64 {
        match id {
            OptionId::ActRandomizer => self.act_randomizer,
            OptionId::YarnAvailable => self.yarn_available,
            OptionId::YarnCostMin => self.yarn_cost_min,
            OptionId::YarnCostMax => self.yarn_cost_max,
            OptionId::Chapter5MinCost => self.chapter5_min_cost,
            OptionId::Chapter5MaxCost => self.chapter5_max_cost,
            OptionId::RandomizeHatOrder => self.randomize_hat_order,
            OptionId::TrapChance => self.trap_chance,
            OptionId::BabyTrapWeight => self.baby_trap_weight,
            OptionId::LaserTrapWeight => self.laser_trap_weight,
            OptionId::ParadeTrapWeight => self.parade_trap_weight,
            OptionId::EnableDlc1 => self.enable_dlc1,
            OptionId::EnableDlc2 => self.enable_dlc2,
        }
    }

    fn value_mut(&mut self, id: OptionId) -> &mut i64 {
        match id {
            OptionId::ActRandomizer => &mut self.act_randomizer,
            OptionId::YarnAvailable => &mut self.yarn_available,
            OptionId::YarnCostMin => &mut self.yarn_cost_min,
            OptionId::YarnCostMax => &mut self.yarn_cost_max,
            OptionId::Chapter5MinCost => &mut self.chapter5_min_cost,
            OptionId::Chapter5MaxCost => &mut self.chapter5_max_cost,
            OptionId::RandomizeHatOrder => &mut self.randomize_hat_order,
            OptionId::TrapChance => &mut self.trap_chance,
            OptionId::BabyTrapWeight => &mut self.baby_trap_weight,
            OptionId::LaserTrapWeight => &mut self.laser_trap_weight,
            OptionId::ParadeTrapWeight => &mut self.parade_trap_weight,
            OptionId::EnableDlc1 => &mut self.enable_dlc1,
            OptionId::EnableDlc2 => &mut self.enable_dlc2,
        }
    }

    /// Clamps every option into its declared bounds.
    ///
    /// Inverted min/max pairs are left alone; consumers order them when they read.
    ///
    /// # Examples
    ///
    /// ```
    /// use hatslot::SlotOptions;
    ///
    /// let options = SlotOptions {
    ///     trap_chance: 250,
    ///     yarn_cost_min: 0,
    ///     ..SlotOptions::default()
    /// }
    /// .normalized();
    /// assert_eq!(options.trap_chance, 100);
    /// assert_eq!(options.yarn_cost_min, 1);
    /// ```
    pub fn normalized(mut self) -> Self {
        for id in OptionId::ALL {
            let (low, high) = id.bounds();
            let value = self.value_mut(id);
            let clamped = (*value).clamp(low, high);
            if clamped != *value {
                warn!(
                    "Option {} = {} outside {}..={}, using {}",
                    id.key(),
                    value,
                    low,
                    high,
                    clamped
                );
                *value = clamped;
            }
        }
        self
    }

    /// Whether act entrances are shuffled.
    pub fn act_randomizer_enabled(&self) -> bool {
        self.act_randomizer > 0
    }

    /// Whether the hat craft order is shuffled.
    pub fn hat_order_randomized(&self) -> bool {
        self.randomize_hat_order > 0
    }

    /// Yarn cost range as `(floor, ceiling)`, whichever way it was configured.
    pub fn yarn_cost_range(&self) -> (i64, i64) {
        ordered(self.yarn_cost_min, self.yarn_cost_max)
    }

    /// Final chapter cost range as `(floor, ceiling)`.
    pub fn chapter5_cost_range(&self) -> (i64, i64) {
        ordered(self.chapter5_min_cost, self.chapter5_max_cost)
    }

    /// Configured trap weights by trap item name.
    pub fn trap_weights(&self) -> [(&'static str, i64); 3] {
        [
            ("Baby Trap", self.baby_trap_weight),
            ("Laser Trap", self.laser_trap_weight),
            ("Parade Trap", self.parade_trap_weight),
        ]
    }
}

fn ordered(a: i64, b: i64) -> (i64, i64) {
    (a.min(b), a.max(b))
}
