//! Player session
//!
//! A session owns the inventory and the single hand slot.

use satchel_inventory::{GameItem, Inventory, Item, ItemKind};
use std::num::NonZeroUsize;

/// Session errors
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("already holding {0}")]
    HandsFull(String),

    #[error("not holding anything")]
    NothingHeld,

    #[error("no item at index {0}")]
    NoItemAt(i64),

    #[error("inventory is full")]
    InventoryFull,
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// One player's inventory plus whatever is in their hand
#[derive(Debug)]
pub struct Session {
    inventory: Inventory<GameItem>,
    held: Option<GameItem>,
}

impl Session {
    /// Create a session with an empty inventory of the given capacity
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            inventory: Inventory::new(capacity),
            held: None,
        }
    }

    /// Inventory contents
    pub fn inventory(&self) -> &Inventory<GameItem> {
        &self.inventory
    }

    /// Item currently in hand
    pub fn held(&self) -> Option<&GameItem> {
        self.held.as_ref()
    }

    /// Build a new item and store it, returning its slot.
    ///
    /// The item is discarded if the inventory is full.
    pub fn create_item(
        &mut self,
        kind: ItemKind,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> SessionResult<usize> {
        let item = GameItem::new(kind, name, description);
        match self.inventory.try_insert(item) {
            Ok(slot) => Ok(slot),
            Err(discarded) => {
                log::info!("discarding '{}', inventory full", discarded.name());
                Err(SessionError::InventoryFull)
            }
        }
    }

    /// Move the item at `index` into the hand
    pub fn take(&mut self, index: i64) -> SessionResult<&GameItem> {
        if let Some(held) = &self.held {
            return Err(SessionError::HandsFull(held.name().to_string()));
        }

        let item = usize::try_from(index)
            .ok()
            .and_then(|slot| self.inventory.fetch_and_remove(slot))
            .ok_or(SessionError::NoItemAt(index))?;

        log::debug!("now holding '{}'", item.name());
        Ok(self.held.insert(item))
    }

    /// Put the held item back into the inventory, returning its slot.
    ///
    /// If the inventory is full the item stays in hand.
    pub fn put_back(&mut self) -> SessionResult<usize> {
        let item = self.held.take().ok_or(SessionError::NothingHeld)?;
        match self.inventory.try_insert(item) {
            Ok(slot) => Ok(slot),
            Err(item) => {
                self.held = Some(item);
                Err(SessionError::InventoryFull)
            }
        }
    }

    /// Empty the hand, returning what was in it
    pub fn drop_held(&mut self) -> SessionResult<GameItem> {
        let item = self.held.take().ok_or(SessionError::NothingHeld)?;
        log::debug!("dropped '{}'", item.name());
        Ok(item)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(satchel_inventory::DEFAULT_CAPACITY)
    }
}
