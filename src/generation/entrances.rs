//! # Act Entrance Remapping
//!
//! Records which act each act entrance leads to after entrance shuffling, keyed by
//! the stable act identifiers the game client understands.

use crate::generation::{StaticWorldContext, WorldContext};
use crate::{HatSlotError, HatSlotResult};
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::Serialize;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// Original act identifier to new act identifier.
///
/// The first mapping recorded for an act is kept; later ones are ignored.
///
/// # Examples
///
/// ```
/// use hatslot::ActConnections;
///
/// let mut connections = ActConnections::default();
/// assert!(connections.record("chapter1_tutorial", "moon_parade"));
/// assert!(!connections.record("chapter1_tutorial", "subcon_cave"));
/// assert_eq!(connections.get("chapter1_tutorial"), Some("moon_parade"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ActConnections(BTreeMap<String, String>);

impl ActConnections {
    /// Records a remap; returns `false` if the original act was already mapped.
    pub fn record(&mut self, original: &str, new: &str) -> bool {
        match self.0.entry(original.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(new.to_string());
                true
            }
        }
    }

    /// New act identifier for an original one.
    pub fn get(&self, original: &str) -> Option<&str> {
        self.0.get(original).map(String::as_str)
    }

    /// Number of recorded remaps.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Remaps in original act identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0
            .iter()
            .map(|(original, new)| (original.as_str(), new.as_str()))
    }
}

/// Translates region names to act identifiers and records the remap.
///
/// Handed to an [`EntranceRandomizer`] so it can report each connection it makes.
pub struct ActRecorder<'a> {
    connections: &'a mut ActConnections,
    world: &'a dyn WorldContext,
}

impl<'a> ActRecorder<'a> {
    /// Creates a recorder writing into `connections`.
    pub fn new(connections: &'a mut ActConnections, world: &'a dyn WorldContext) -> Self {
        Self { connections, world }
    }

    fn act_id(&self, region: &str) -> HatSlotResult<String> {
        self.world
            .act_info(region)
            .ok_or_else(|| HatSlotError::UnknownRegion(region.to_string()))
    }

    /// Records that the entrance of `original_region` now leads to `new_region`.
    ///
    /// Fails with [`HatSlotError::UnknownRegion`] if either region has no act
    /// identifier. Returns `false` when the original act was already mapped.
    pub fn update_chapter_act_info(
        &mut self,
        original_region: &str,
        new_region: &str,
    ) -> HatSlotResult<bool> {
        let original = self.act_id(original_region)?;
        let new = self.act_id(new_region)?;
        let recorded = self.connections.record(&original, &new);
        if recorded {
            trace!("{original_region} -> {new_region} ({original} -> {new})");
        } else {
            debug!("{original} already remapped, keeping first connection");
        }
        Ok(recorded)
    }

    /// Connections recorded so far.
    pub fn connections(&self) -> &ActConnections {
        &*self.connections
    }
}

/// Engine hook that reconnects act entrances.
pub trait EntranceRandomizer {
    /// Shuffles act entrances, reporting every new connection to `recorder`.
    fn randomize_act_entrances(
        &mut self,
        recorder: &mut ActRecorder<'_>,
        rng: &mut StdRng,
    ) -> HatSlotResult<()>;
}

/// Randomizer that connects every act entrance to a random act of the same set.
#[derive(Debug, Clone, Default)]
pub struct ShuffledActEntrances {
    regions: Vec<String>,
}

impl ShuffledActEntrances {
    /// Shuffles among the given act regions.
    pub fn new(regions: Vec<String>) -> Self {
        Self { regions }
    }

    /// Shuffles among every act region the context knows.
    pub fn from_context(world: &StaticWorldContext) -> Self {
        Self::new(world.act_regions())
    }
}

impl EntranceRandomizer for ShuffledActEntrances {
    fn randomize_act_entrances(
        &mut self,
        recorder: &mut ActRecorder<'_>,
        rng: &mut StdRng,
    ) -> HatSlotResult<()> {
        let mut targets = self.regions.clone();
        targets.shuffle(rng);
        for (original, new) in self.regions.iter().zip(targets.iter()) {
            recorder.update_chapter_act_info(original, new)?;
        }
        debug!(
            "Shuffled {} act entrances, {} recorded",
            self.regions.len(),
            recorder.connections().len()
        );
        Ok(())
    }
}
