//! Sorted fixed-capacity inventory

use crate::item::Item;
use serde::Serialize;
use std::num::NonZeroUsize;

/// Capacity used by [`Inventory::default`]
pub const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(capacity) => capacity,
    None => panic!("default capacity must be non-zero"),
};

/// Fixed-capacity item container kept sorted by item name.
///
/// Occupied slots always form a gap-free prefix, ordered by name with ties
/// kept in arrival order. Inserting into a full inventory fails instead of
/// growing it.
#[derive(Debug, Clone, Serialize)]
pub struct Inventory<I> {
    /// Inventory slots (None = empty)
    slots: Vec<Option<I>>,
    /// Number of occupied slots
    count: usize,
}

impl<I: Item> Inventory<I> {
    /// Create a new inventory with given capacity
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(capacity.get()).collect(),
            count: 0,
        }
    }

    /// Create a new inventory, or None if `capacity` is zero
    pub fn with_capacity(capacity: usize) -> Option<Self> {
        NonZeroUsize::new(capacity).map(Self::new)
    }

    /// Maximum number of items
    pub fn max_capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of items currently stored
    pub fn num_items(&self) -> usize {
        self.count
    }

    /// Get number of free slots
    pub fn free_slots(&self) -> usize {
        self.max_capacity() - self.count
    }

    /// Check if inventory is full
    pub fn is_full(&self) -> bool {
        self.count >= self.max_capacity()
    }

    /// Check if inventory is empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Get slot contents without removing them
    pub fn get_slot(&self, index: usize) -> Option<&I> {
        self.slots.get(index)?.as_ref()
    }

    /// Find the first slot holding an item with exactly this name
    pub fn find_item(&self, name: &str) -> Option<usize> {
        let occupied = &self.slots[..self.count];
        let index = occupied.partition_point(|slot| slot_name(slot) < name);
        (index < self.count && slot_name(&occupied[index]) == name).then_some(index)
    }

    /// Insert an item, keeping slots ordered by name.
    ///
    /// Returns true if the item was stored. A full inventory drops the item;
    /// use [`Inventory::try_insert`] to get it back instead.
    pub fn insert(&mut self, item: I) -> bool {
        self.try_insert(item).is_ok()
    }

    /// Insert an item, returning the slot it landed in.
    ///
    /// The item goes before the first occupant whose name is strictly
    /// greater, so equal names stay in arrival order. Everything from that
    /// slot up to the last occupied one shifts one slot towards the end.
    /// Fails with the item handed back if the inventory is full.
    pub fn try_insert(&mut self, item: I) -> Result<usize, I> {
        if self.is_full() {
            log::debug!(
                "inventory full ({} slots), rejecting '{}'",
                self.count,
                item.name()
            );
            return Err(item);
        }

        let index = self.slots[..self.count]
            .partition_point(|slot| slot_name(slot) <= item.name());

        // The empty slot at `count` rotates down to `index`
        self.slots[index..=self.count].rotate_right(1);
        log::debug!("inserted '{}' at slot {}", item.name(), index);
        self.slots[index] = Some(item);
        self.count += 1;

        Ok(index)
    }

    /// Take the item out of a slot, compacting the slots after it.
    ///
    /// Returns None for an index outside the inventory or an empty slot.
    /// Compaction happens either way, which is a no-op for an empty slot.
    pub fn fetch_and_remove(&mut self, index: usize) -> Option<I> {
        if index >= self.max_capacity() {
            return None;
        }

        let item = self.slots[index].take()?;

        // The hole rotates up to the end of the occupied prefix
        self.slots[index..self.count].rotate_left(1);
        self.count -= 1;
        log::debug!("removed '{}' from slot {}", item.name(), index);

        Some(item)
    }

    /// Remove and drop the item in a slot, compacting the slots after it.
    ///
    /// Returns false only for an index outside the inventory. Removing an
    /// empty slot succeeds and changes nothing.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.max_capacity() {
            return false;
        }

        self.fetch_and_remove(index);
        true
    }

    /// Every slot in order, with None for empty slots
    pub fn enumerate(&self) -> impl Iterator<Item = (usize, Option<&I>)> {
        self.slots.iter().map(Option::as_ref).enumerate()
    }

    /// Occupied slots only
    pub fn items(&self) -> impl Iterator<Item = (usize, &I)> {
        self.slots[..self.count]
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|item| (i, item)))
    }
}

impl<I: Item> Default for Inventory<I> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// Name of an occupied slot. Only called on the occupied prefix.
fn slot_name<I: Item>(slot: &Option<I>) -> &str {
    slot.as_ref().map(|item| item.name()).unwrap_or_default()
}
