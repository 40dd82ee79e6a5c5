//! Scripted sessions through the menu loop

use satchel_inventory::Item;
use satchel_shell::{Repl, ShellConfig};
use std::io::Cursor;
use std::num::NonZeroUsize;

fn config(capacity: usize) -> ShellConfig {
    ShellConfig {
        capacity: NonZeroUsize::new(capacity).unwrap(),
        banner: false,
        ..ShellConfig::default()
    }
}

fn run(capacity: usize, script: &[&str]) -> (String, Vec<String>, Option<String>) {
    let mut input = script.join("\n");
    input.push('\n');

    let mut repl = Repl::new(config(capacity), Cursor::new(input), Vec::new());
    repl.run().expect("in-memory io does not fail");

    let names = repl
        .session()
        .inventory()
        .items()
        .map(|(_, item)| item.name().to_string())
        .collect();
    let held = repl.session().held().map(|item| item.name().to_string());
    let out = String::from_utf8(repl.into_output()).expect("output is utf-8");

    (out, names, held)
}

#[test]
fn items_are_listed_in_name_order() {
    let (out, names, _) = run(
        3,
        &[
            "c", "1", "Banana", "yellow",
            "c", "2", "Apple", "red",
            "c", "3", "Cherry", "dark",
            "q",
        ],
    );

    assert_eq!(names, ["Apple", "Banana", "Cherry"]);
    assert!(out.contains(" 0: Apple   --> red"));
    assert!(out.contains(" 1: Banana  --> yellow"));
    assert!(out.contains(" 2: Cherry  --> dark"));
}

#[test]
fn full_inventory_discards_new_item() {
    let (out, names, _) = run(
        1,
        &["c", "1", "Apple", "", "c", "1", "Banana", "", "q"],
    );

    assert!(out.contains("Unable to add item. Item discarded"));
    assert_eq!(names, ["Apple"]);
}

#[test]
fn take_put_and_drop() {
    let (out, names, held) = run(
        3,
        &[
            "c", "1", "Apple", "", "c", "2", "Banana", "", "c", "3", "Cherry", "",
            "g", "1",
            "p",
            "g", "0",
            "d",
            "q",
        ],
    );

    assert!(out.contains("You are holding a Banana --> "));
    assert_eq!(names, ["Banana", "Cherry"]);
    assert_eq!(held, None);
}

#[test]
fn take_bad_indices() {
    let (out, names, held) = run(2, &["c", "1", "Apple", "", "g", "-1", "g", "1", "g", "2", "q"]);

    assert_eq!(out.matches("There's no item at that index").count(), 3);
    assert_eq!(names, ["Apple"]);
    assert_eq!(held, None);
}

#[test]
fn hand_actions_need_an_item() {
    let (out, _, _) = run(2, &["p", "d", "q"]);

    assert!(out.contains("You're not holding anything that can be put in the inventory."));
    assert!(out.contains("You're not holding anything that can be dropped."));
}

#[test]
fn put_back_into_full_inventory_keeps_item_in_hand() {
    let (out, names, held) = run(
        1,
        &["c", "1", "Apple", "", "g", "0", "c", "1", "Banana", "", "p", "q"],
    );

    assert!(out.contains("Unable to put item back: inventory is full"));
    assert_eq!(names, ["Banana"]);
    assert_eq!(held.as_deref(), Some("Apple"));
}

#[test]
fn banner_is_optional() {
    let config = ShellConfig {
        capacity: NonZeroUsize::MIN,
        ..ShellConfig::default()
    };
    let mut repl = Repl::new(config, Cursor::new("q\n"), Vec::new());
    repl.run().unwrap();

    let out = String::from_utf8(repl.into_output()).unwrap();
    assert!(out.starts_with("Satchel v"));
}
