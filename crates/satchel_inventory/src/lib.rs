//! Satchel Inventory - Sorted Item Container
//!
//! This crate provides the item capability and the fixed-capacity,
//! name-sorted inventory used by the satchel shell.
//!
//! # Features
//!
//! - `Item` trait: anything with a name and a description
//! - Built-in item kinds (sword, shield, potion) with default text
//! - Inventory with a fixed number of slots, kept sorted by name
//! - Positional take/remove with automatic compaction
//!
//! # Example
//!
//! ```
//! use satchel_inventory::prelude::*;
//!
//! let mut inventory = Inventory::with_capacity(3).expect("capacity is non-zero");
//! inventory.insert(GameItem::with_defaults(ItemKind::Sword));
//! inventory.insert(GameItem::potion("Elixir", "Smells of lilac"));
//!
//! assert_eq!(inventory.get_slot(0).map(|i| i.name()), Some("Elixir"));
//!
//! let taken = inventory.fetch_and_remove(0).unwrap();
//! assert_eq!(taken.name(), "Elixir");
//! assert_eq!(inventory.num_items(), 1);
//! ```

pub mod inventory;
pub mod item;

pub mod prelude {
    pub use crate::inventory::{Inventory, DEFAULT_CAPACITY};
    pub use crate::item::{GameItem, Item, ItemKind};
}

pub use prelude::*;
