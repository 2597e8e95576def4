//! # Slot Output
//!
//! The slot configuration handed to the game client and the spoiler log. Both
//! are pure read-backs of state computed during generation.

use crate::game::{ChapterIndex, HatType, OptionId, SlotWorld};
use crate::HatSlotResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;

/// Scalar stored in slot data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotValue {
    Int(i64),
    Text(String),
}

impl From<i64> for SlotValue {
    fn from(value: i64) -> Self {
        SlotValue::Int(value)
    }
}

impl From<&str> for SlotValue {
    fn from(value: &str) -> Self {
        SlotValue::Text(value.to_string())
    }
}

/// Flat slot configuration, serialized as one JSON object.
///
/// # Examples
///
/// ```
/// use hatslot::SlotData;
///
/// let mut data = SlotData::default();
/// data.insert("Hat1", 3_i64);
/// data.insert("chapter1_boss", "moon_parade");
/// assert_eq!(data.get_int("Hat1"), Some(3));
/// assert_eq!(data.to_json().unwrap(), r#"{"Hat1":3,"chapter1_boss":"moon_parade"}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotData(BTreeMap<String, SlotValue>);

impl SlotData {
    /// Sets a key, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<SlotValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Integer value of a key.
    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.0.get(key) {
            Some(SlotValue::Int(value)) => Some(*value),
            _ => None,
        }
    }

    /// Text value of a key.
    pub fn get_text(&self, key: &str) -> Option<&str> {
        match self.0.get(key) {
            Some(SlotValue::Text(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Compact JSON rendering.
    pub fn to_json(&self) -> HatSlotResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON rendering.
    pub fn to_json_pretty(&self) -> HatSlotResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Chapters whose cost is always part of slot data.
const SLOT_DATA_CHAPTERS: [ChapterIndex; 5] = [
    ChapterIndex::Mafia,
    ChapterIndex::Birds,
    ChapterIndex::Subcon,
    ChapterIndex::Alpine,
    ChapterIndex::Finale,
];

impl SlotWorld {
    /// Assembles the slot configuration.
    ///
    /// Fails with [`HatSlotError::MissingCost`](crate::HatSlotError::MissingCost) when a
    /// yarn cost or one of the first five chapter costs was never set.
    pub fn fill_slot_data(&self) -> HatSlotResult<SlotData> {
        let mut data = SlotData::default();

        for hat in HatType::ALL {
            data.insert(hat.yarn_cost_key(), self.hat_yarn_costs().get(hat)?);
        }

        for chapter in SLOT_DATA_CHAPTERS {
            if let Some(key) = chapter.cost_key() {
                data.insert(key, self.chapter_costs().require(chapter)?);
            }
        }

        for (position, hat) in self.hat_craft_order().iter().enumerate() {
            data.insert(format!("Hat{}", position + 1), hat.index());
        }

        if self.options().act_randomizer_enabled() {
            for (original, new) in self.act_connections().iter() {
                data.insert(original, new);
            }
        }

        for option in OptionId::ALL {
            data.insert(option.key(), self.options().value(option));
        }

        Ok(data)
    }

    /// Writes chapter costs in chapter order, then hat costs in craft order.
    pub fn write_spoiler<W: Write>(&self, out: &mut W) -> HatSlotResult<()> {
        for (chapter, cost) in self.chapter_costs().known() {
            writeln!(out, "Chapter {} Cost: {}", chapter.number(), cost)?;
        }

        for hat in self.hat_craft_order() {
            writeln!(out, "Hat Cost: {}: {}", hat, self.hat_yarn_costs().get(hat)?)?;
        }

        Ok(())
    }
}
