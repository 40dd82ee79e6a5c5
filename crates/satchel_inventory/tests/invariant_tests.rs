//! Invariant tests for satchel_inventory
//!
//! These tests drive the inventory through long operation sequences and
//! check the slot layout after every step.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use satchel_inventory::prelude::*;

const NAMES: [&str; 8] = [
    "Axe", "Buckler", "Elixir", "Sword", "axe", "Shield", "Potion", "Elixir",
];

fn assert_invariants(inv: &Inventory<GameItem>) {
    let slots: Vec<Option<&GameItem>> = inv.enumerate().map(|(_, s)| s).collect();
    assert_eq!(slots.len(), inv.max_capacity());

    let filled = slots.iter().take_while(|s| s.is_some()).count();
    assert!(slots[filled..].iter().all(Option::is_none), "gap in slots: {:?}", slots);
    assert_eq!(filled, inv.num_items());

    let names: Vec<&str> = slots[..filled].iter().flatten().map(|i| i.name()).collect();
    assert!(names.windows(2).all(|w| w[0] <= w[1]), "not sorted: {:?}", names);
}

/// INVARIANT: occupied slots stay a sorted, gap-free prefix
#[test]
fn invariant_sorted_prefix_under_random_operations() {
    for seed in 1..=20u64 {
        // Seeded so a failing sequence can be replayed
        let mut rng = StdRng::seed_from_u64(seed);
        let capacity = rng.gen_range(1..=8);
        let mut inv = Inventory::with_capacity(capacity).unwrap();

        for _ in 0..200 {
            match rng.gen_range(0..3) {
                0 => {
                    let name = NAMES[rng.gen_range(0..NAMES.len())];
                    let was_full = inv.is_full();
                    let before = inv.num_items();
                    let inserted = inv.insert(GameItem::sword(name, ""));
                    assert_eq!(inserted, !was_full);
                    assert_eq!(inv.num_items(), before + usize::from(inserted));
                }
                1 => {
                    let index = rng.gen_range(0..capacity + 2);
                    let before = inv.num_items();
                    let occupied = inv.get_slot(index).is_some();
                    assert_eq!(inv.remove(index), index < capacity);
                    assert_eq!(inv.num_items(), before - usize::from(occupied));
                }
                _ => {
                    let index = rng.gen_range(0..capacity + 2);
                    let expected = inv.get_slot(index).map(|i| i.name().to_string());
                    let taken = inv.fetch_and_remove(index);
                    assert_eq!(taken.as_ref().map(|i| i.name().to_string()), expected);
                }
            }

            assert_invariants(&inv);
        }
    }
}

/// INVARIANT: a full inventory rejects inserts without changing
#[test]
fn invariant_full_inventory_is_unchanged_by_insert() {
    let mut inv = Inventory::with_capacity(3).unwrap();
    for name in ["Cherry", "Apple", "Banana"] {
        assert!(inv.insert(GameItem::potion(name, "")));
    }

    let before: Vec<String> = inv.items().map(|(_, i)| i.name().to_string()).collect();
    assert!(!inv.insert(GameItem::potion("Aaa", "")));
    let after: Vec<String> = inv.items().map(|(_, i)| i.name().to_string()).collect();

    assert_eq!(before, after);
    assert_eq!(inv.num_items(), 3);
}

/// INVARIANT: out-of-range indices never mutate
#[test]
fn invariant_out_of_range_is_rejected() {
    let mut inv = Inventory::with_capacity(2).unwrap();
    inv.insert(GameItem::with_defaults(ItemKind::Shield));

    assert!(!inv.remove(2));
    assert!(inv.fetch_and_remove(2).is_none());
    assert_eq!(inv.num_items(), 1);
    assert_eq!(inv.get_slot(0).map(|i| i.name()), Some("Shield"));
}

/// INVARIANT: an inventory always has at least one slot
#[test]
fn invariant_capacity_is_never_zero() {
    assert!(Inventory::<GameItem>::with_capacity(0).is_none());
    assert_eq!(Inventory::<GameItem>::with_capacity(1).map(|i| i.max_capacity()), Some(1));
    assert_eq!(Inventory::<GameItem>::default().max_capacity(), DEFAULT_CAPACITY.get());
}

#[test]
fn scenario_insert_out_of_order() {
    let mut inv = Inventory::with_capacity(3).unwrap();
    inv.insert(GameItem::sword("Banana", ""));
    inv.insert(GameItem::sword("Apple", ""));
    inv.insert(GameItem::sword("Cherry", ""));

    let names: Vec<&str> = inv.items().map(|(_, i)| i.name()).collect();
    assert_eq!(names, ["Apple", "Banana", "Cherry"]);
}

#[test]
fn scenario_take_from_middle() {
    let mut inv = Inventory::with_capacity(3).unwrap();
    for name in ["Apple", "Banana", "Cherry"] {
        inv.insert(GameItem::shield(name, ""));
    }

    assert_eq!(inv.fetch_and_remove(1).map(|i| i.name().to_string()), Some("Banana".into()));

    let slots: Vec<Option<&str>> = inv.enumerate().map(|(_, s)| s.map(|i| i.name())).collect();
    assert_eq!(slots, [Some("Apple"), Some("Cherry"), None]);
}

#[test]
fn scenario_remove_from_empty() {
    let mut inv: Inventory<GameItem> = Inventory::with_capacity(5).unwrap();

    assert!(inv.remove(2));
    assert!(inv.enumerate().all(|(_, s)| s.is_none()));
}

#[test]
fn mixed_item_types_share_one_inventory() {
    struct Note(String);

    impl Item for Note {
        fn name(&self) -> &str {
            &self.0
        }

        fn description(&self) -> &str {
            "A scrap of paper."
        }
    }

    let mut inv: Inventory<Box<dyn Item>> = Inventory::with_capacity(4).unwrap();
    inv.insert(Box::new(GameItem::with_defaults(ItemKind::Sword)));
    inv.insert(Box::new(Note("Map".to_string())));
    inv.insert(Box::new(GameItem::with_defaults(ItemKind::Potion)));

    let names: Vec<&str> = inv.items().map(|(_, i)| i.name()).collect();
    assert_eq!(names, ["Map", "Potion", "Sword"]);
    assert_eq!(inv.get_slot(0).map(|i| i.description()), Some("A scrap of paper."));
}
