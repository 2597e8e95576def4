//! # Game Module
//!
//! Core domain types, static item data and per-player slot state.
//!
//! This module contains the fundamental building blocks of a slot:
//! - Items and their classifications
//! - Hats (yarn-gated abilities) and chapters (time-piece-gated)
//! - Static item tables and typed slot options
//! - The per-player [`SlotWorld`] generation instance

pub mod options;
pub mod state;
pub mod tables;

pub use options::*;
pub use state::*;
pub use tables::*;

use crate::HatSlotResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the player owning a slot.
///
/// # Examples
///
/// ```
/// use hatslot::PlayerId;
///
/// let player = PlayerId(3);
/// assert_eq!(player.to_string(), "3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How important an item is for completing a seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Required to finish the game
    Progression,
    /// Helpful but never required
    Useful,
    /// Always safe to omit
    Filler,
    /// Intentionally detrimental
    Trap,
}

impl Classification {
    /// Whether items of this class are only ever created by the junk distributor.
    pub fn is_junk(self) -> bool {
        matches!(self, Classification::Filler | Classification::Trap)
    }
}

/// Optional game content an item can depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HatDlc {
    /// Seal the Deal (Arctic Cruise)
    Dlc1,
    /// Nyakuza Metro
    Dlc2,
}

/// The five craftable hats, each unlocked by spending yarn.
///
/// Declaration order is the vanilla craft order and the order costs are drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HatType {
    Sprint,
    Brewing,
    Ice,
    Dweller,
    TimeStop,
}

impl HatType {
    /// Every hat in vanilla craft order.
    pub const ALL: [HatType; 5] = [
        HatType::Sprint,
        HatType::Brewing,
        HatType::Ice,
        HatType::Dweller,
        HatType::TimeStop,
    ];

    /// Numeric id the game client uses for this hat.
    ///
    /// # Examples
    ///
    /// ```
    /// use hatslot::HatType;
    ///
    /// assert_eq!(HatType::Sprint.index(), 0);
    /// assert_eq!(HatType::TimeStop.index(), 4);
    /// ```
    pub fn index(self) -> i64 {
        self as i64
    }

    /// Slot data key holding this hat's yarn cost.
    pub fn yarn_cost_key(self) -> &'static str {
        match self {
            HatType::Sprint => "SprintYarnCost",
            HatType::Brewing => "BrewingYarnCost",
            HatType::Ice => "IceYarnCost",
            HatType::Dweller => "DwellerYarnCost",
            HatType::TimeStop => "TimeStopYarnCost",
        }
    }
}

impl fmt::Display for HatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HatType::Sprint => "Sprint Hat",
            HatType::Brewing => "Brewing Hat",
            HatType::Ice => "Ice Hat",
            HatType::Dweller => "Dweller Mask",
            HatType::TimeStop => "Time Stop Hat",
        };
        f.write_str(name)
    }
}

/// Chapters of the game. Only the first five are gated by time piece costs in slot data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ChapterIndex {
    Mafia = 1,
    Birds = 2,
    Subcon = 3,
    Alpine = 4,
    Finale = 5,
    Cruise = 6,
    Metro = 7,
}

impl ChapterIndex {
    /// Every chapter in numeric order.
    pub const ALL: [ChapterIndex; 7] = [
        ChapterIndex::Mafia,
        ChapterIndex::Birds,
        ChapterIndex::Subcon,
        ChapterIndex::Alpine,
        ChapterIndex::Finale,
        ChapterIndex::Cruise,
        ChapterIndex::Metro,
    ];

    /// Chapter number as shown in game.
    pub fn number(self) -> i64 {
        self as i64
    }

    /// Slot data key for the chapter cost, if the chapter is cost-gated there.
    ///
    /// # Examples
    ///
    /// ```
    /// use hatslot::ChapterIndex;
    ///
    /// assert_eq!(ChapterIndex::Finale.cost_key(), Some("Chapter5Cost"));
    /// assert_eq!(ChapterIndex::Metro.cost_key(), None);
    /// ```
    pub fn cost_key(self) -> Option<&'static str> {
        match self {
            ChapterIndex::Mafia => Some("Chapter1Cost"),
            ChapterIndex::Birds => Some("Chapter2Cost"),
            ChapterIndex::Subcon => Some("Chapter3Cost"),
            ChapterIndex::Alpine => Some("Chapter4Cost"),
            ChapterIndex::Finale => Some("Chapter5Cost"),
            ChapterIndex::Cruise | ChapterIndex::Metro => None,
        }
    }
}

/// A single placeable item belonging to one player.
///
/// Items are values: classification changes produce a new item instead of
/// mutating an existing one.
///
/// # Examples
///
/// ```
/// use hatslot::{Classification, Item, PlayerId};
///
/// let yarn = Item::new("Yarn", Classification::Progression, 300001, PlayerId(1));
/// let spare = yarn.clone().downgraded();
/// assert_eq!(spare.classification, Classification::Filler);
/// assert_eq!(spare.code, yarn.code);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    /// Item name as listed in the static tables
    pub name: &'static str,
    /// Placement importance of this copy
    pub classification: Classification,
    /// Unique numeric item id
    pub code: u64,
    /// Owning player
    pub player: PlayerId,
}

impl Item {
    /// Creates a new item.
    pub fn new(
        name: &'static str,
        classification: Classification,
        code: u64,
        player: PlayerId,
    ) -> Self {
        Self {
            name,
            classification,
            code,
            player,
        }
    }

    /// Builds an item from its static table entry.
    ///
    /// Fails with [`HatSlotError::UnknownItem`](crate::HatSlotError::UnknownItem) when the
    /// name is in no table.
    pub fn from_table(name: &str, player: PlayerId) -> HatSlotResult<Self> {
        let (name, data) = lookup_item(name)?;
        Ok(Self::new(name, data.classification, data.code, player))
    }

    /// Returns this item reclassified as filler.
    pub fn downgraded(self) -> Self {
        Self {
            classification: Classification::Filler,
            ..self
        }
    }

    /// Whether this copy is required for completion.
    pub fn is_progression(&self) -> bool {
        self.classification == Classification::Progression
    }
}
