//! Text rendering for the hand, inventory and menus

use crate::command::MenuAction;
use satchel_inventory::{Inventory, Item, ItemKind};

/// Label shown for empty slots
pub const EMPTY_LABEL: &str = "EMPTY";

/// One line per slot, e.g. `" 0: Sword   --> Pointy end..."` or `" 1: EMPTY  "`
pub fn inventory_lines<I: Item>(inventory: &Inventory<I>, name_width: usize) -> Vec<String> {
    inventory
        .enumerate()
        .map(|(index, slot)| match slot {
            Some(item) => format!(
                "{:2}: {:<width$} --> {}",
                index,
                item.name(),
                item.description(),
                width = name_width
            ),
            None => format!("{:2}: {:<width$}", index, EMPTY_LABEL, width = name_width),
        })
        .collect()
}

/// Describe what is in the player's hand
pub fn hand_line<I: Item>(held: Option<&I>) -> String {
    match held {
        Some(item) => format!("You are holding a {} --> {}", item.name(), item.description()),
        None => "You aren't holding anything".to_string(),
    }
}

/// The top-level action menu
pub fn action_menu() -> Vec<String> {
    let mut lines = vec!["What would you like to do?".to_string()];
    lines.extend(
        MenuAction::all()
            .iter()
            .map(|action| format!("\t{}: {}", action.key(), action.label())),
    );
    lines
}

/// The item-kind submenu shown when creating an item
pub fn kind_menu() -> Vec<String> {
    let mut lines = vec!["What type of item would you like to create".to_string()];
    lines.extend(
        ItemKind::all()
            .iter()
            .map(|kind| format!("{}: {}", kind.menu_choice(), kind)),
    );
    lines
}

/// Full status screen: hand, inventory and action menu
pub fn status_screen<I: Item>(
    inventory: &Inventory<I>,
    held: Option<&I>,
    name_width: usize,
) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        "HAND:".to_string(),
        "----".to_string(),
        hand_line(held),
        String::new(),
        "INVENTORY:".to_string(),
        "---------".to_string(),
    ];
    lines.extend(inventory_lines(inventory, name_width));
    lines.push(String::new());
    lines.extend(action_menu());
    lines
}
