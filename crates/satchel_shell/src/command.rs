//! Menu command parsing
//!
//! Turns the raw lines typed at the menu into actions, item kinds and
//! slot indices.

use satchel_inventory::ItemKind;

/// Command error
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Empty input")]
    EmptyInput,

    #[error("Unknown action: {0}")]
    UnknownAction(char),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Invalid item type: {0}")]
    InvalidItemKind(i64),
}

/// Top-level menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Create a new item and store it
    Create,
    /// Take an item from the inventory into the hand
    Get,
    /// Put the held item back
    Put,
    /// Drop the held item
    Drop,
    /// Leave the program
    Quit,
}

impl MenuAction {
    /// All actions, in menu order
    pub fn all() -> [Self; 5] {
        [Self::Create, Self::Get, Self::Put, Self::Drop, Self::Quit]
    }

    /// Key that selects this action
    pub fn key(&self) -> char {
        match self {
            Self::Create => 'c',
            Self::Get => 'g',
            Self::Put => 'p',
            Self::Drop => 'd',
            Self::Quit => 'q',
        }
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Create => "Create new Item",
            Self::Get => "Get Item from Inventory",
            Self::Put => "Put current Item in Inventory",
            Self::Drop => "Drop current Item",
            Self::Quit => "Quit the program",
        }
    }
}

impl std::str::FromStr for MenuAction {
    type Err = CommandError;

    /// Only the first non-blank character counts, so "create" selects
    /// the same action as "c".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().chars().next().ok_or(CommandError::EmptyInput)?;
        Self::all()
            .into_iter()
            .find(|action| action.key() == key)
            .ok_or(CommandError::UnknownAction(key))
    }
}

/// Parse a whole-number answer such as a slot index
pub fn parse_index(input: &str) -> Result<i64, CommandError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CommandError::EmptyInput);
    }
    input
        .parse()
        .map_err(|_| CommandError::InvalidNumber(input.to_string()))
}

/// Parse the item-kind menu answer (1 = sword, 2 = shield, 3 = potion)
pub fn parse_item_kind(input: &str) -> Result<ItemKind, CommandError> {
    let choice = parse_index(input)?;
    ItemKind::from_menu_choice(choice).ok_or(CommandError::InvalidItemKind(choice))
}
